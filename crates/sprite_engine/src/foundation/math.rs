//! Math utilities and types
//!
//! Provides the 2D vector aliases and the axis-aligned rectangle used for
//! draw positions and hitboxes.

use serde::{Deserialize, Serialize};

pub use nalgebra::Vector2;

/// 2D vector type for world positions and velocities
pub type Vec2 = Vector2<f32>;

/// Integer 2D vector type for pixel positions
pub type IVec2 = Vector2<i32>;

/// Truncate a world position to the pixel it is drawn at.
///
/// Truncation is toward zero, so `-0.5` lands on pixel `0`.
pub fn to_pixel(position: Vec2) -> IVec2 {
    IVec2::new(position.x.trunc() as i32, position.y.trunc() as i32)
}

/// Axis-aligned rectangle in pixel units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Horizontal extent
    pub width: i32,
    /// Vertical extent
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle anchored at the origin
    pub const fn with_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Right edge (exclusive)
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive)
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Return this rectangle moved by `offset`
    #[must_use]
    pub fn translated(&self, offset: IVec2) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
            ..*self
        }
    }

    /// Strict overlap test. Rectangles that only share an edge do not
    /// intersect, and empty rectangles never intersect anything.
    pub const fn intersects(&self, other: &Self) -> bool {
        if self.width <= 0 || self.height <= 0 || other.width <= 0 || other.height <= 0 {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pixel_truncates_toward_zero() {
        assert_eq!(to_pixel(Vec2::new(3.9, -2.7)), IVec2::new(3, -2));
        assert_eq!(to_pixel(Vec2::new(-0.5, 0.5)), IVec2::new(0, 0));
    }

    #[test]
    fn test_rect_intersects() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.intersects(&Rect::new(5, 5, 10, 10)));
        assert!(a.intersects(&a));
        assert!(!a.intersects(&Rect::new(10, 0, 5, 5)), "touching edges");
        assert!(!a.intersects(&Rect::new(20, 20, 5, 5)));
    }

    #[test]
    fn test_empty_rect_never_intersects() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.intersects(&Rect::new(2, 2, 0, 4)));
    }

    #[test]
    fn test_translated() {
        let moved = Rect::new(1, 2, 3, 10).translated(IVec2::new(320, 187));
        assert_eq!(moved, Rect::new(321, 189, 3, 10));
        assert_eq!(moved.bottom(), 199);
    }
}
