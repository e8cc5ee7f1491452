use super::{Rect, Size};
use serde::{Deserialize, Serialize};

/// The geometry a window ends up with once a configuration wins. Logical pixels.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedGeometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Device pixels per logical pixel.
    pub scale: i32,
}

impl ResolvedGeometry {
    #[must_use]
    pub const fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The buffer size the window's buffer management should expect, in device pixels.
    #[must_use]
    pub const fn device_size(&self) -> Size {
        self.size().scaled(self.scale)
    }
}
