//! Minimal 2D geometry for the contouring crates: points, segments and the
//! grid/world mapping.
#![forbid(unsafe_code)]

use core::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, rhs: Vec2) -> f32 {
        self.x * rhs.x + self.y * rhs.y
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Linear interpolation; `t = 0` yields `self`, `t = 1` yields `rhs`.
    #[inline]
    pub fn lerp(self, rhs: Vec2, t: f32) -> Vec2 {
        self + (rhs - self) * t
    }

    #[inline]
    pub fn midpoint(self, rhs: Vec2) -> Vec2 {
        self.lerp(rhs, 0.5)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

/// One boundary piece in world space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
}

impl Segment {
    #[inline]
    pub const fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn length(self) -> f32 {
        (self.b - self.a).length()
    }

    /// Same segment regardless of endpoint order.
    #[inline]
    pub fn same_undirected(self, other: Segment) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

/// Conversion between integer grid cells and world units.
///
/// Each cell covers `block_size` world units per axis; cell `(gx, gy)` sits at
/// world position `(gx * block_size, gy * block_size)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridMapping {
    block_size: i32,
}

impl Default for GridMapping {
    fn default() -> Self {
        Self { block_size: 25 }
    }
}

impl GridMapping {
    /// Block sizes below 1 are raised to 1.
    #[inline]
    pub fn new(block_size: i32) -> Self {
        Self {
            block_size: block_size.max(1),
        }
    }

    #[inline]
    pub fn block_size(&self) -> i32 {
        self.block_size
    }

    #[inline]
    pub fn set_block_size(&mut self, block_size: i32) {
        self.block_size = block_size.max(1);
    }

    #[inline]
    pub fn to_grid(&self, wx: f32, wy: f32) -> (i32, i32) {
        let bs = self.block_size as f32;
        ((wx / bs).floor() as i32, (wy / bs).floor() as i32)
    }

    #[inline]
    pub fn to_world(&self, gx: i32, gy: i32) -> Vec2 {
        let bs = self.block_size as f32;
        Vec2::new(gx as f32 * bs, gy as f32 * bs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn mapping_floors_negative_world_positions() {
        let m = GridMapping::new(25);
        assert_eq!(m.to_grid(0.0, 0.0), (0, 0));
        assert_eq!(m.to_grid(24.9, 49.0), (0, 1));
        assert_eq!(m.to_grid(-0.1, -25.0), (-1, -1));
        assert_eq!(m.to_grid(-25.1, 0.0), (-2, 0));
    }

    #[test]
    fn mapping_clamps_block_size() {
        let mut m = GridMapping::new(0);
        assert_eq!(m.block_size(), 1);
        m.set_block_size(-3);
        assert_eq!(m.block_size(), 1);
        m.set_block_size(8);
        assert_eq!(m.to_world(2, -1), Vec2::new(16.0, -8.0));
    }

    #[test]
    fn segment_undirected_equality() {
        let s = Segment::new(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        let r = Segment::new(s.b, s.a);
        assert!(s.same_undirected(r));
        assert!(!s.same_undirected(Segment::new(s.a, Vec2::ZERO)));
        assert!((Segment::new(Vec2::ZERO, Vec2::new(3.0, 4.0)).length() - 5.0).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn segment_length_is_symmetric(s in any::<Segment>()) {
            prop_assume!(s.a.x.is_finite() && s.a.y.is_finite() && s.b.x.is_finite() && s.b.y.is_finite());
            let r = Segment::new(s.b, s.a);
            prop_assert_eq!(s.length().to_bits(), r.length().to_bits());
        }
    }
}
