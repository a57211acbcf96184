//! Geometry in terminal character cells.
//!
//! Everything is signed so that invalid input (negative or zero sizes coming
//! from a half-initialized host screen) can be represented and rejected instead
//! of silently wrapping.

use std::fmt;
use std::ops::{Add, AddAssign, Sub};

use serde::{Deserialize, Serialize};

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self { Offset { x, y } }

    pub fn is_zero(&self) -> bool { *self == Self::ZERO }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        Offset {
            x: self.x.saturating_add(rhs.x),
            y: self.y.saturating_add(rhs.y),
        }
    }
}

impl AddAssign for Offset {
    fn add_assign(&mut self, rhs: Offset) { *self = *self + rhs; }
}

impl Sub for Offset {
    type Output = Offset;

    fn sub(self, rhs: Offset) -> Offset {
        Offset {
            x: self.x.saturating_sub(rhs.x),
            y: self.y.saturating_sub(rhs.y),
        }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "({}, {})", self.x, self.y) }
}

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Size = Size { width: 0, height: 0 };

    pub const fn new(width: i32, height: i32) -> Self { Size { width, height } }

    /// A size is usable as a layout container only when both sides are positive.
    pub fn is_positive(&self) -> bool { self.width > 0 && self.height > 0 }

    /// Grows (or shrinks, for negative components) by an offset.
    pub fn grow(self, by: Offset) -> Size {
        Size {
            width: self.width.saturating_add(by.x),
            height: self.height.saturating_add(by.y),
        }
    }

    /// Clamps each side into `[min, max]`. The minimum wins when the bounds cross.
    pub fn clamp(self, min: Size, max: Size) -> Size {
        Size {
            width: self.width.min(max.width).max(min.width),
            height: self.height.min(max.height).max(min.height),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Offset,
    pub size: Size,
}

impl Rect {
    pub const fn new(origin: Offset, size: Size) -> Self { Rect { origin, size } }

    pub const fn from_size(size: Size) -> Self { Rect { origin: Offset::ZERO, size } }

    pub fn max(&self) -> Offset {
        Offset {
            x: self.origin.x.saturating_add(self.size.width),
            y: self.origin.y.saturating_add(self.size.height),
        }
    }

    /// Moves `position` so that a window of `size` placed there stays inside
    /// this rect. A window larger than the rect is pinned to the rect's origin.
    pub fn clamp_position(&self, position: Offset, size: Size) -> Offset {
        let max = self.max();
        let x = position.x.min(max.x.saturating_sub(size.width)).max(self.origin.x);
        let y = position.y.min(max.y.saturating_sub(size.height)).max(self.origin.y);
        Offset { x, y }
    }
}

/// Minimum and optional maximum size of a window.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeBounds {
    pub min: Size,
    pub max: Option<Size>,
}

impl SizeBounds {
    pub fn new(min: Size, max: Option<Size>) -> Self { SizeBounds { min, max } }

    /// Clamps `size` into the bounds, using `fallback_max` when no maximum is set.
    pub fn clamp(&self, size: Size, fallback_max: Size) -> Size {
        size.clamp(self.min, self.max.unwrap_or(fallback_max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_add_and_subtract() {
        let a = Offset::new(3, 4);
        let b = Offset::new(-1, 2);
        assert_eq!(a + b, Offset::new(2, 6));
        assert_eq!(a - b, Offset::new(4, 2));

        let mut c = Offset::ZERO;
        c += a;
        c += a;
        assert_eq!(c, Offset::new(6, 8));
    }

    #[test]
    fn size_positivity() {
        assert!(Size::new(1, 1).is_positive());
        assert!(!Size::new(0, 10).is_positive());
        assert!(!Size::new(10, -1).is_positive());
    }

    #[test]
    fn size_clamp_prefers_minimum_when_bounds_cross() {
        let clamped = Size::new(50, 2).clamp(Size::new(12, 6), Size::new(40, 4));
        assert_eq!(clamped, Size::new(40, 6));
    }

    #[test]
    fn rect_clamps_positions_inside() {
        let area = Rect::new(Offset::new(0, 1), Size::new(80, 24));
        let size = Size::new(20, 10);

        assert_eq!(area.clamp_position(Offset::new(70, 20), size), Offset::new(60, 15));
        assert_eq!(area.clamp_position(Offset::new(-5, -5), size), Offset::new(0, 1));
        assert_eq!(area.clamp_position(Offset::new(10, 5), size), Offset::new(10, 5));
        assert_eq!(
            area.clamp_position(Offset::new(10, 5), Size::new(100, 100)),
            Offset::new(0, 1)
        );
    }

    #[test]
    fn size_bounds_fall_back_to_container() {
        let bounds = SizeBounds::new(Size::new(12, 6), None);
        assert_eq!(bounds.clamp(Size::new(200, 3), Size::new(80, 24)), Size::new(80, 6));

        let bounded = SizeBounds::new(Size::new(12, 6), Some(Size::new(30, 10)));
        assert_eq!(bounded.clamp(Size::new(200, 200), Size::new(80, 24)), Size::new(30, 10));
    }
}
