//! Axis-aligned bounding boxes in 2D and 3D

use serde::{Serialize, Deserialize};

use crate::{Vec2, Vec3};

/// Axis-aligned 2D box
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds2 {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds2 {
    /// An inverted box that any point will extend
    pub fn empty() -> Self {
        Self {
            min: Vec2::new(f64::INFINITY, f64::INFINITY),
            max: Vec2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Smallest box containing every point
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Vec2>) -> Self {
        let mut b = Self::empty();
        for p in points {
            b.extend(*p);
        }
        b
    }

    pub fn extend(&mut self, p: Vec2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    pub fn merge(&self, other: &Bounds2) -> Bounds2 {
        let mut res = *self;
        res.extend(other.min);
        res.extend(other.max);
        res
    }

    /// True until at least one point has been added
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        self.min.lerp(self.max, 0.5)
    }

    /// Strict overlap test; boxes that only touch along an edge do not overlap
    pub fn overlaps(&self, other: &Bounds2) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// Axis-aligned 3D box
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds3 {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds3 {
    pub fn empty() -> Self {
        Self {
            min: Vec3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            max: Vec3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Vec3>) -> Self {
        let mut b = Self::empty();
        for p in points {
            b.extend(*p);
        }
        b
    }

    pub fn extend(&mut self, p: Vec3) {
        self.min = self.min.min_components(p);
        self.max = self.max.max_components(p);
    }

    /// Edge lengths along X, Y, Z
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds2_from_points() {
        let pts = [Vec2::new(1.0, -1.0), Vec2::new(-2.0, 3.0), Vec2::new(0.5, 0.5)];
        let b = Bounds2::from_points(&pts);
        assert_eq!(b.min, Vec2::new(-2.0, -1.0));
        assert_eq!(b.max, Vec2::new(1.0, 3.0));
        assert_eq!(b.width(), 3.0);
        assert_eq!(b.height(), 4.0);
    }

    #[test]
    fn test_empty_bounds() {
        assert!(Bounds2::empty().is_empty());
        let b = Bounds2::from_points(&[Vec2::ZERO]);
        assert!(!b.is_empty());
    }

    #[test]
    fn test_touching_boxes_do_not_overlap() {
        let a = Bounds2::from_points(&[Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)]);
        let b = Bounds2::from_points(&[Vec2::new(1.0, 0.0), Vec2::new(2.0, 1.0)]);
        let c = Bounds2::from_points(&[Vec2::new(0.5, 0.5), Vec2::new(2.0, 2.0)]);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
    }

    #[test]
    fn test_bounds3_size_and_center() {
        let b = Bounds3::from_points(&[Vec3::new(-1.0, -2.0, -3.0), Vec3::new(1.0, 2.0, 3.0)]);
        assert_eq!(b.size(), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(b.center(), Vec3::ZERO);
    }
}
