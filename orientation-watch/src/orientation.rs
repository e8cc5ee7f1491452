use std::fmt;

/// Which edge of the device points up.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// No sensor, or the sensor could not tell.
    #[default]
    Undefined,
    Normal,
    BottomUp,
    LeftUp,
    RightUp,
}

impl Orientation {
    pub const ALL: [Orientation; 5] = [
        Orientation::Undefined,
        Orientation::Normal,
        Orientation::BottomUp,
        Orientation::LeftUp,
        Orientation::RightUp,
    ];

    /// Whether outputs are turned a quarter, so width and height trade places.
    pub const fn is_rotated(self) -> bool {
        matches!(self, Orientation::LeftUp | Orientation::RightUp)
    }

    /// The logical size of a `width`x`height` output once this orientation is applied.
    pub const fn transform_size(self, width: i32, height: i32) -> (i32, i32) {
        if self.is_rotated() {
            (height, width)
        } else {
            (width, height)
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Orientation::Undefined => "(undefined)",
            Orientation::Normal => "normal",
            Orientation::BottomUp => "bottom-up",
            Orientation::LeftUp => "left-up",
            Orientation::RightUp => "right-up",
        };
        f.write_str(name)
    }
}
