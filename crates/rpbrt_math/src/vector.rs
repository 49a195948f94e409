//! Free directional quantities in 2D and 3D.
//!
//! `Vector2f`/`Vector3f` hold `f64` components, `Vector2i`/`Vector3i` hold
//! `i32`. The integer variants keep the float API: scaling or dividing by an
//! `f64` multiplies in floating point and truncates each component back
//! toward zero, so `Vector2i::new(3, 4).normalize()` is `[0, 0]`.

use bytemuck::{Pod, Zeroable};
use glam::{DVec2, DVec3, IVec2, IVec3};
use serde::{Deserialize, Serialize};

use crate::Normal3f;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
#[repr(transparent)]
pub struct Vector2f(pub(crate) DVec2);

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
#[repr(transparent)]
pub struct Vector3f(pub(crate) DVec3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Pod, Zeroable)]
#[repr(transparent)]
pub struct Vector2i(pub(crate) IVec2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Pod, Zeroable)]
#[repr(transparent)]
pub struct Vector3i(pub(crate) IVec3);

impl_vector!(Vector2f, DVec2, f64, [x, y]);
impl_vector!(Vector3f, DVec3, f64, [x, y, z]);
impl_vector!(Vector2i, IVec2, i32, [x, y]);
impl_vector!(Vector3i, IVec3, i32, [x, y, z]);

macro_rules! impl_vector2_axes {
    ($name:ident, $inner:ident) => {
        impl $name {
            pub const X: Self = Self($inner::X);
            pub const Y: Self = Self($inner::Y);

            /// Index of the largest component. Ties go to Y.
            #[inline]
            pub fn max_dimension(&self) -> usize {
                if self.0.x > self.0.y {
                    0
                } else {
                    1
                }
            }

            /// Reorder components: the result's X is `self[x]`, its Y `self[y]`.
            #[inline]
            pub fn permute(&self, x: usize, y: usize) -> Self {
                Self::new(self[x], self[y])
            }
        }
    };
}

macro_rules! impl_vector3_axes {
    ($name:ident, $inner:ident) => {
        impl $name {
            pub const X: Self = Self($inner::X);
            pub const Y: Self = Self($inner::Y);
            pub const Z: Self = Self($inner::Z);

            #[inline]
            pub fn cross(&self, other: Self) -> Self {
                Self::from_inner(self.0.cross(other.0))
            }

            /// Index of the largest component. Ties go to the later axis.
            #[inline]
            pub fn max_dimension(&self) -> usize {
                let v = self.0;
                if v.x > v.y {
                    if v.x > v.z {
                        0
                    } else {
                        2
                    }
                } else if v.y > v.z {
                    1
                } else {
                    2
                }
            }

            #[inline]
            pub fn permute(&self, x: usize, y: usize, z: usize) -> Self {
                Self::new(self[x], self[y], self[z])
            }
        }
    };
}

impl_vector2_axes!(Vector2f, DVec2);
impl_vector2_axes!(Vector2i, IVec2);
impl_vector3_axes!(Vector3f, DVec3);
impl_vector3_axes!(Vector3i, IVec3);

impl Vector3f {
    /// Complete a right-handed orthonormal basis from this (unit) vector.
    ///
    /// Returns `(v2, v3)` with `v3 = self × v2`. The first branch is taken
    /// when |x| > |y|, so the divisor never collapses for axis-aligned input.
    pub fn coordinate_system(&self) -> (Vector3f, Vector3f) {
        let DVec3 { x, y, z } = self.0;
        let v2 = if x.abs() > y.abs() {
            Vector3f::new(-z, 0.0, x) / (x * x + z * z).sqrt()
        } else {
            Vector3f::new(0.0, z, -y) / (y * y + z * z).sqrt()
        };
        let v3 = self.cross(v2);
        (v2, v3)
    }

    #[inline]
    pub fn dot_normal(&self, n: Normal3f) -> f64 {
        self.0.dot(n.0)
    }

    #[inline]
    pub fn abs_dot_normal(&self, n: Normal3f) -> f64 {
        self.dot_normal(n).abs()
    }
}

impl From<Vector2i> for Vector2f {
    #[inline]
    fn from(v: Vector2i) -> Self {
        Self(v.0.as_dvec2())
    }
}

impl From<Vector3i> for Vector3f {
    #[inline]
    fn from(v: Vector3i) -> Self {
        Self(v.0.as_dvec3())
    }
}

impl From<Normal3f> for Vector3f {
    #[inline]
    fn from(n: Normal3f) -> Self {
        Self(n.0)
    }
}
