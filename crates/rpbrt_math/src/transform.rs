//! Affine and projective transforms.
//!
//! A `Transform` carries a matrix together with its inverse so that normals,
//! which need the inverse transpose, and inverted transforms come for free.

use std::ops::Mul;

use serde::{Deserialize, Serialize};

use crate::{
    Bounds3f, Matrix4x4, MatrixResult, Normal3f, Point3f, Ray, RayDifferential, Vector3f,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    m: Matrix4x4,
    m_inv: Matrix4x4,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        m: Matrix4x4::IDENTITY,
        m_inv: Matrix4x4::IDENTITY,
    };

    /// Wrap a matrix, computing its inverse. Singular matrices are rejected.
    pub fn new(m: Matrix4x4) -> MatrixResult<Self> {
        let m_inv = m.inverse()?;
        Ok(Self { m, m_inv })
    }

    /// Wrap a matrix whose inverse is already known. The pair is not checked.
    pub const fn from_parts(m: Matrix4x4, m_inv: Matrix4x4) -> Self {
        Self { m, m_inv }
    }

    #[rustfmt::skip]
    pub fn translate(delta: Vector3f) -> Self {
        let (x, y, z) = (delta.x(), delta.y(), delta.z());
        Self {
            m: Matrix4x4::new(
                1.0, 0.0, 0.0, x,
                0.0, 1.0, 0.0, y,
                0.0, 0.0, 1.0, z,
                0.0, 0.0, 0.0, 1.0,
            ),
            m_inv: Matrix4x4::new(
                1.0, 0.0, 0.0, -x,
                0.0, 1.0, 0.0, -y,
                0.0, 0.0, 1.0, -z,
                0.0, 0.0, 0.0, 1.0,
            ),
        }
    }

    /// Non-uniform scale.
    ///
    /// Every factor must be non-zero. A zero factor leaves an infinite entry in
    /// the stored inverse, and normals transformed through it come out NaN.
    /// Build degenerate scales with [`Transform::new`], which rejects them.
    #[rustfmt::skip]
    pub fn scale(x: f64, y: f64, z: f64) -> Self {
        Self {
            m: Matrix4x4::new(
                x, 0.0, 0.0, 0.0,
                0.0, y, 0.0, 0.0,
                0.0, 0.0, z, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ),
            m_inv: Matrix4x4::new(
                1.0 / x, 0.0, 0.0, 0.0,
                0.0, 1.0 / y, 0.0, 0.0,
                0.0, 0.0, 1.0 / z, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ),
        }
    }

    /// Rotation about the X axis, `theta` in radians.
    #[rustfmt::skip]
    pub fn rotate_x(theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        let m = Matrix4x4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, c, -s, 0.0,
            0.0, s, c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        Self::orthonormal(m)
    }

    #[rustfmt::skip]
    pub fn rotate_y(theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        let m = Matrix4x4::new(
            c, 0.0, s, 0.0,
            0.0, 1.0, 0.0, 0.0,
            -s, 0.0, c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        Self::orthonormal(m)
    }

    #[rustfmt::skip]
    pub fn rotate_z(theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        let m = Matrix4x4::new(
            c, -s, 0.0, 0.0,
            s, c, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        Self::orthonormal(m)
    }

    /// Rotation by `theta` radians about an arbitrary axis.
    #[rustfmt::skip]
    pub fn rotate(theta: f64, axis: Vector3f) -> Self {
        let a = axis.normalize();
        let (x, y, z) = (a.x(), a.y(), a.z());
        let (s, c) = theta.sin_cos();
        let k = 1.0 - c;
        let m = Matrix4x4::new(
            x * x + (1.0 - x * x) * c, x * y * k - z * s,         x * z * k + y * s,         0.0,
            x * y * k + z * s,         y * y + (1.0 - y * y) * c, y * z * k - x * s,         0.0,
            x * z * k - y * s,         y * z * k + x * s,         z * z + (1.0 - z * z) * c, 0.0,
            0.0,                       0.0,                       0.0,                       1.0,
        );
        Self::orthonormal(m)
    }

    // Rotations are orthonormal, so the inverse is the transpose.
    fn orthonormal(m: Matrix4x4) -> Self {
        Self {
            m,
            m_inv: m.transpose(),
        }
    }

    pub fn matrix(&self) -> &Matrix4x4 {
        &self.m
    }

    pub fn inverse_matrix(&self) -> &Matrix4x4 {
        &self.m_inv
    }

    pub fn inverse(&self) -> Self {
        Self {
            m: self.m_inv,
            m_inv: self.m,
        }
    }

    pub fn transpose(&self) -> Self {
        Self {
            m: self.m.transpose(),
            m_inv: self.m_inv.transpose(),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.m.is_identity()
    }

    /// True when the upper 3x3 has a negative determinant, i.e. the transform
    /// mirrors geometry and flips triangle winding.
    pub fn swaps_handedness(&self) -> bool {
        let m = &self.m.m;
        let det = m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0]);
        det < 0.0
    }

    /// Transform a point (implicit w = 1), dividing through by the resulting
    /// w when the matrix is projective.
    pub fn transform_point(&self, p: Point3f) -> Point3f {
        let m = &self.m.m;
        let (x, y, z) = (p.x(), p.y(), p.z());
        let xp = m[0][0] * x + m[0][1] * y + m[0][2] * z + m[0][3];
        let yp = m[1][0] * x + m[1][1] * y + m[1][2] * z + m[1][3];
        let zp = m[2][0] * x + m[2][1] * y + m[2][2] * z + m[2][3];
        let wp = m[3][0] * x + m[3][1] * y + m[3][2] * z + m[3][3];
        debug_assert!(wp != 0.0, "point {p} maps to w = 0 and has no finite image");
        if wp == 1.0 {
            Point3f::new(xp, yp, zp)
        } else {
            Point3f::new(xp, yp, zp) * (1.0 / wp)
        }
    }

    /// Transform a direction (implicit w = 0). Translation does not apply.
    pub fn transform_vector(&self, v: Vector3f) -> Vector3f {
        let m = &self.m.m;
        let (x, y, z) = (v.x(), v.y(), v.z());
        Vector3f::new(
            m[0][0] * x + m[0][1] * y + m[0][2] * z,
            m[1][0] * x + m[1][1] * y + m[1][2] * z,
            m[2][0] * x + m[2][1] * y + m[2][2] * z,
        )
    }

    /// Transform a normal by the inverse transpose, which keeps it
    /// perpendicular to transformed tangents under non-uniform scale.
    pub fn transform_normal(&self, n: Normal3f) -> Normal3f {
        let inv = &self.m_inv.m;
        let (x, y, z) = (n.x(), n.y(), n.z());
        Normal3f::new(
            inv[0][0] * x + inv[1][0] * y + inv[2][0] * z,
            inv[0][1] * x + inv[1][1] * y + inv[2][1] * z,
            inv[0][2] * x + inv[1][2] * y + inv[2][2] * z,
        )
    }

    /// Transform origin and direction. `t_max` and `time` carry over.
    pub fn transform_ray(&self, r: &Ray) -> Ray {
        Ray::with_extent(
            self.transform_point(r.origin),
            self.transform_vector(r.direction),
            r.t_max,
            r.time,
        )
    }

    pub fn transform_ray_differential(&self, r: &RayDifferential) -> RayDifferential {
        RayDifferential {
            ray: self.transform_ray(&r.ray),
            has_differentials: r.has_differentials,
            rx_origin: self.transform_point(r.rx_origin),
            ry_origin: self.transform_point(r.ry_origin),
            rx_direction: self.transform_vector(r.rx_direction),
            ry_direction: self.transform_vector(r.ry_direction),
        }
    }

    /// Bounds of all 8 transformed corners.
    pub fn transform_bounds(&self, b: &Bounds3f) -> Bounds3f {
        (0..8).fold(Bounds3f::EMPTY, |acc, i| {
            acc.union_point(self.transform_point(b.corner(i)))
        })
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Transform {
    type Output = Transform;

    /// `a * b` applies `b` first, then `a`.
    fn mul(self, rhs: Transform) -> Transform {
        Transform {
            m: self.m * rhs.m,
            m_inv: rhs.m_inv * self.m_inv,
        }
    }
}

impl TryFrom<Matrix4x4> for Transform {
    type Error = crate::MatrixError;

    fn try_from(m: Matrix4x4) -> MatrixResult<Self> {
        Self::new(m)
    }
}
