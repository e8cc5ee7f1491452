use super::{Rect, Size};
use serde::{Deserialize, Serialize};

/// The point of a window that stays put in screen space while its size changes.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gravity {
    #[default]
    None,
    NorthWest,
    North,
    NorthEast,
    West,
    Center,
    East,
    SouthWest,
    South,
    SouthEast,
    /// The window's own origin is the reference; behaves like `NorthWest` for resizes.
    Static,
}

/// How much of a size delta is taken up by the origin along one axis.
#[derive(Clone, Copy)]
enum Share {
    Nothing,
    Half,
    All,
}

impl Share {
    const fn apply(self, delta: i32) -> i32 {
        match self {
            Share::Nothing => 0,
            Share::Half => delta / 2,
            Share::All => delta,
        }
    }
}

impl Gravity {
    const fn horizontal(self) -> Share {
        match self {
            Gravity::North | Gravity::Center | Gravity::South => Share::Half,
            Gravity::NorthEast | Gravity::East | Gravity::SouthEast => Share::All,
            _ => Share::Nothing,
        }
    }

    const fn vertical(self) -> Share {
        match self {
            Gravity::West | Gravity::Center | Gravity::East => Share::Half,
            Gravity::SouthWest | Gravity::South | Gravity::SouthEast => Share::All,
            _ => Share::Nothing,
        }
    }

    /// Resizes `rect` to `size`, moving its origin so the point named by this gravity keeps its
    /// screen position.
    #[must_use]
    pub fn resize_anchored(self, rect: Rect, size: Size) -> Rect {
        let x = rect.x + self.horizontal().apply(rect.w - size.w);
        let y = rect.y + self.vertical().apply(rect.h - size.h);
        Rect::new(x, y, size.w, size.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OLD: Rect = Rect::new(0, 0, 100, 100);
    const SMALL: Size = Size::new(50, 50);

    #[test]
    fn south_east_keeps_bottom_right_corner() {
        let new = Gravity::SouthEast.resize_anchored(OLD, SMALL);
        assert_eq!(new, Rect::new(50, 50, 50, 50));
        assert_eq!((new.x + new.w, new.y + new.h), (100, 100));
    }

    #[test]
    fn north_west_and_static_keep_origin() {
        for gravity in [Gravity::None, Gravity::NorthWest, Gravity::Static] {
            assert_eq!(gravity.resize_anchored(OLD, SMALL), Rect::new(0, 0, 50, 50));
        }
    }

    #[test]
    fn center_splits_the_delta() {
        assert_eq!(
            Gravity::Center.resize_anchored(OLD, SMALL),
            Rect::new(25, 25, 50, 50)
        );
        assert_eq!(
            Gravity::Center.resize_anchored(OLD, Size::new(200, 100)),
            Rect::new(-50, 0, 200, 100)
        );
    }

    #[test]
    fn edges_only_move_along_their_axis() {
        assert_eq!(
            Gravity::East.resize_anchored(OLD, SMALL),
            Rect::new(50, 25, 50, 50)
        );
        assert_eq!(
            Gravity::South.resize_anchored(OLD, SMALL),
            Rect::new(25, 50, 50, 50)
        );
        assert_eq!(
            Gravity::SouthWest.resize_anchored(OLD, SMALL),
            Rect::new(0, 50, 50, 50)
        );
    }
}
