//! Surface normals.
//!
//! A normal looks like a vector but transforms by the inverse transpose of a
//! matrix (see [`Transform::transform_normal`](crate::Transform::transform_normal)),
//! which is why it is a separate type. Normals can be added to each other and
//! scaled, but never added to a point.

use bytemuck::{Pod, Zeroable};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::Vector3f;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
#[repr(transparent)]
pub struct Normal3f(pub(crate) DVec3);

impl_vector!(Normal3f, DVec3, f64, [x, y, z]);

impl Normal3f {
    #[inline]
    pub fn dot_vector(&self, v: Vector3f) -> f64 {
        self.0.dot(v.0)
    }

    #[inline]
    pub fn abs_dot_vector(&self, v: Vector3f) -> f64 {
        self.dot_vector(v).abs()
    }

    #[inline]
    pub fn cross_vector(&self, v: Vector3f) -> Vector3f {
        Vector3f::from_inner(self.0.cross(v.0))
    }

    /// Index of the largest component. Ties go to the later axis.
    #[inline]
    pub fn max_dimension(&self) -> usize {
        Vector3f::from(*self).max_dimension()
    }

    #[inline]
    pub fn permute(&self, x: usize, y: usize, z: usize) -> Self {
        Self::new(self[x], self[y], self[z])
    }

    /// Negate the normal if it points away from `v`.
    #[inline]
    pub fn flip_to_same_hemisphere_as(&self, v: Vector3f) -> Self {
        if self.dot_vector(v) < 0.0 {
            -*self
        } else {
            *self
        }
    }
}

impl From<Vector3f> for Normal3f {
    #[inline]
    fn from(v: Vector3f) -> Self {
        Self(v.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_flip_to_same_hemisphere() {
        let n = Normal3f::new(0.0, 0.0, 1.0);
        assert_eq!(n.flip_to_same_hemisphere_as(Vector3f::new(0.3, 0.2, 1.0)), n);
        assert_eq!(
            n.flip_to_same_hemisphere_as(Vector3f::new(0.0, 0.0, -1.0)),
            Normal3f::new(0.0, 0.0, -1.0)
        );
    }

    #[test]
    fn test_flip_keeps_perpendicular() {
        let n = Normal3f::new(0.0, 1.0, 0.0);
        assert_eq!(n.flip_to_same_hemisphere_as(Vector3f::X), n);
    }

    #[test]
    fn test_normal_arithmetic() {
        let a = Normal3f::new(1.0, 0.0, 0.0);
        let b = Normal3f::new(0.0, 1.0, 0.0);
        assert_eq!(a + b, Normal3f::new(1.0, 1.0, 0.0));
        assert_eq!(a - b, Normal3f::new(1.0, -1.0, 0.0));
        assert_eq!(a * 3.0, Normal3f::new(3.0, 0.0, 0.0));
        assert_eq!(-a, Normal3f::new(-1.0, 0.0, 0.0));
        assert_eq!(a.dot(b), 0.0);
    }

    #[test]
    fn test_normalize() {
        let n = Normal3f::new(1.0, 1.0, 1.0).normalize();
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_dot_and_cross_with_vector() {
        let n = Normal3f::new(0.0, 0.0, 2.0);
        assert_eq!(n.dot_vector(Vector3f::new(1.0, 1.0, 3.0)), 6.0);
        assert_eq!(n.abs_dot_vector(Vector3f::new(0.0, 0.0, -1.0)), 2.0);
        assert_eq!(n.cross_vector(Vector3f::X), Vector3f::new(0.0, 2.0, 0.0));
        assert_eq!(Vector3f::Z.dot_normal(n), 2.0);
    }

    #[test]
    fn test_component_queries() {
        let n = Normal3f::new(0.5, -2.0, 0.5);
        assert_eq!(n.min_component(), -2.0);
        assert_eq!(n.max_component(), 0.5);
        assert_eq!(n.max_dimension(), 2);
        assert_eq!(n.abs(), Normal3f::new(0.5, 2.0, 0.5));
        assert_eq!(n.permute(1, 0, 2), Normal3f::new(-2.0, 0.5, 0.5));
    }

    #[test]
    fn test_vector_round_trip() {
        let v = Vector3f::new(1.0, 2.0, 3.0);
        assert_eq!(Vector3f::from(Normal3f::from(v)), v);
    }
}
