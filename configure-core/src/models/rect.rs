//! Window geometry values. x,y from top left.
use serde::{Deserialize, Serialize};

/// A width/height pair in logical pixels.
#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

impl Size {
    #[must_use]
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    /// Both dimensions positive.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.w > 0 && self.h > 0
    }

    /// Fits inside `bound` on both axes.
    #[must_use]
    pub const fn fits_within(&self, bound: Size) -> bool {
        self.w <= bound.w && self.h <= bound.h
    }

    #[must_use]
    pub const fn scaled(&self, scale: i32) -> Size {
        Size::new(self.w * scale, self.h * scale)
    }
}

/// A positioned rectangle.
#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[must_use]
    pub const fn origin(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }

    #[must_use]
    pub const fn with_size(&self, size: Size) -> Rect {
        Rect::new(self.x, self.y, size.w, size.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_validity_needs_both_dimensions() {
        assert!(Size::new(1, 1).is_valid());
        assert!(!Size::new(0, 10).is_valid());
        assert!(!Size::new(10, -1).is_valid());
    }

    #[test]
    fn fits_within_checks_each_axis() {
        let bound = Size::new(100, 50);
        assert!(Size::new(100, 50).fits_within(bound));
        assert!(Size::new(20, 20).fits_within(bound));
        assert!(!Size::new(101, 20).fits_within(bound));
        assert!(!Size::new(20, 51).fits_within(bound));
    }

    #[test]
    fn rect_keeps_origin_when_resized() {
        let rect = Rect::new(5, 6, 10, 10).with_size(Size::new(30, 40));
        assert_eq!(rect, Rect::new(5, 6, 30, 40));
    }
}
