//! Positions in 2D and 3D.
//!
//! Points share their representation with vectors but not their algebra:
//! `Point - Point` is a vector, `Point ± Vector` is a point, and adding two
//! points is not defined.

use bytemuck::{Pod, Zeroable};
use glam::{DVec2, DVec3, IVec2, IVec3};
use serde::{Deserialize, Serialize};

use crate::{Vector2f, Vector2i, Vector3f, Vector3i};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
#[repr(transparent)]
pub struct Point2f(pub(crate) DVec2);

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
#[repr(transparent)]
pub struct Point3f(pub(crate) DVec3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Pod, Zeroable)]
#[repr(transparent)]
pub struct Point2i(pub(crate) IVec2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Pod, Zeroable)]
#[repr(transparent)]
pub struct Point3i(pub(crate) IVec3);

impl_point!(Point2f, DVec2, f64, Vector2f, [x, y]);
impl_point!(Point3f, DVec3, f64, Vector3f, [x, y, z]);
impl_point!(Point2i, IVec2, i32, Vector2i, [x, y]);
impl_point!(Point3i, IVec3, i32, Vector3i, [x, y, z]);

impl Point2f {
    #[inline]
    pub fn floor(&self) -> Self {
        Self(self.0.floor())
    }

    #[inline]
    pub fn ceil(&self) -> Self {
        Self(self.0.ceil())
    }

    #[inline]
    pub fn permute(&self, x: usize, y: usize) -> Self {
        Self::new(self[x], self[y])
    }
}

impl Point3f {
    #[inline]
    pub fn floor(&self) -> Self {
        Self(self.0.floor())
    }

    #[inline]
    pub fn ceil(&self) -> Self {
        Self(self.0.ceil())
    }

    #[inline]
    pub fn permute(&self, x: usize, y: usize, z: usize) -> Self {
        Self::new(self[x], self[y], self[z])
    }
}

impl Point2i {
    #[inline]
    pub fn permute(&self, x: usize, y: usize) -> Self {
        Self::new(self[x], self[y])
    }
}

impl Point3i {
    #[inline]
    pub fn permute(&self, x: usize, y: usize, z: usize) -> Self {
        Self::new(self[x], self[y], self[z])
    }
}

impl From<Point2i> for Point2f {
    #[inline]
    fn from(p: Point2i) -> Self {
        Self(p.0.as_dvec2())
    }
}

impl From<Point3i> for Point3f {
    #[inline]
    fn from(p: Point3i) -> Self {
        Self(p.0.as_dvec3())
    }
}
