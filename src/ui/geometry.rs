// src/ui/geometry.rs
//! Floating point geometry shared by the layout engine.
//!
//! Layout works in `f32` so that proportions multiply cleanly; conversion to
//! the integer `Point`/`Size` types of embedded-graphics only happens at draw
//! time.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, Sub};

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use serde::{Deserialize, Serialize};

/// One of the two layout axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal axis (left to right)
    X,
    /// Vertical axis (top to bottom)
    Y,
}

impl Axis {
    /// The orthogonal axis.
    pub fn other(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// A 2D vector used for positions, sizes and proportions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Vector with both components set to `value`.
    pub const fn splat(value: f32) -> Self {
        Self { x: value, y: value }
    }

    /// Build a vector from a value on `primary` and a value on the other axis.
    pub fn from_axes(primary: Axis, primary_value: f32, secondary_value: f32) -> Self {
        match primary {
            Axis::X => Self::new(primary_value, secondary_value),
            Axis::Y => Self::new(secondary_value, primary_value),
        }
    }

    /// Component on the given axis.
    pub fn along(self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Component-wise (Hadamard) product.
    pub fn component_mul(self, other: Vec2) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    /// True if either component is zero or negative.
    pub fn is_degenerate(self) -> bool {
        self.x <= 0.0 || self.y <= 0.0
    }

    /// Truncating conversion to a pixel coordinate.
    pub fn to_point(self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }

    /// Truncating conversion to a pixel size; negative components become 0.
    pub fn to_size(self) -> Size {
        // float to unsigned casts saturate at 0
        Size::new(self.x as u32, self.y as u32)
    }

    /// Pixel rectangle anchored at `self` with the given extent.
    pub fn rect(self, size: Vec2) -> Rectangle {
        Rectangle::new(self.to_point(), size.to_size())
    }
}

impl From<Size> for Vec2 {
    fn from(size: Size) -> Self {
        Self::new(size.width as f32, size.height as f32)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_selection() {
        let v = Vec2::new(3.0, 7.0);
        assert_eq!(v.along(Axis::X), 3.0);
        assert_eq!(v.along(Axis::Y), 7.0);
        assert_eq!(Vec2::from_axes(Axis::Y, 1.0, 2.0), Vec2::new(2.0, 1.0));
        assert_eq!(Axis::X.other(), Axis::Y);
    }

    #[test]
    fn test_component_mul() {
        let size = Vec2::new(800.0, 600.0).component_mul(Vec2::new(0.5, 0.25));
        assert_eq!(size, Vec2::new(400.0, 150.0));
    }

    #[test]
    fn test_pixel_conversion_clamps_negative_size() {
        assert_eq!(Vec2::new(-4.0, 12.9).to_size(), Size::new(0, 12));
        assert_eq!(Vec2::new(-4.5, 12.9).to_point(), Point::new(-4, 12));
    }

    #[test]
    fn test_degenerate() {
        assert!(Vec2::ZERO.is_degenerate());
        assert!(Vec2::new(10.0, 0.0).is_degenerate());
        assert!(!Vec2::new(10.0, 1.0).is_degenerate());
    }
}
