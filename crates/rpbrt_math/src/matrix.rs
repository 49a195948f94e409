//! 4x4 transform matrix.
//!
//! Stored row-major as `m[row][col]`. Points are treated as column vectors, so
//! the translation lives in the last column and `a * b` applies `b` first.
//! The bottom row is free to hold a projective term.

use std::fmt;
use std::ops::{Index, Mul};

use bytemuck::{Pod, Zeroable};
use glam::DMat4;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scalar::SINGULAR_EPSILON;

/// Errors that can occur in matrix algebra.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MatrixError {
    #[error("matrix is singular: no usable pivot in column {column}")]
    Singular { column: usize },
}

pub type MatrixResult<T> = Result<T, MatrixError>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Matrix4x4 {
    pub m: [[f64; 4]; 4],
}

impl Matrix4x4 {
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    pub const ZERO: Self = Self { m: [[0.0; 4]; 4] };

    /// Build from sixteen values in row-major order.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub const fn new(
        t00: f64, t01: f64, t02: f64, t03: f64,
        t10: f64, t11: f64, t12: f64, t13: f64,
        t20: f64, t21: f64, t22: f64, t23: f64,
        t30: f64, t31: f64, t32: f64, t33: f64,
    ) -> Self {
        Self {
            m: [
                [t00, t01, t02, t03],
                [t10, t11, t12, t13],
                [t20, t21, t22, t23],
                [t30, t31, t32, t33],
            ],
        }
    }

    pub const fn from_rows(m: [[f64; 4]; 4]) -> Self {
        Self { m }
    }

    #[rustfmt::skip]
    pub fn transpose(&self) -> Self {
        let m = &self.m;
        Self::new(
            m[0][0], m[1][0], m[2][0], m[3][0],
            m[0][1], m[1][1], m[2][1], m[3][1],
            m[0][2], m[1][2], m[2][2], m[3][2],
            m[0][3], m[1][3], m[2][3], m[3][3],
        )
    }

    /// Standard row-by-column product `self * other`. No structure is
    /// assumed; the bottom row may carry a perspective term.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut r = [[0.0; 4]; 4];
        for (i, row) in r.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j]
                    + self.m[i][3] * other.m[3][j];
            }
        }
        Self { m: r }
    }

    /// Invert with Gauss-Jordan elimination and partial pivoting.
    ///
    /// Fails with [`MatrixError::Singular`] when a column has no pivot whose
    /// magnitude exceeds [`SINGULAR_EPSILON`].
    pub fn inverse(&self) -> MatrixResult<Self> {
        let mut a = self.m;
        let mut inv = Self::IDENTITY.m;

        for col in 0..4 {
            let mut pivot = col;
            for row in col + 1..4 {
                if a[row][col].abs() > a[pivot][col].abs() {
                    pivot = row;
                }
            }

            // Written as a negated comparison so NaN pivots are rejected too.
            if !(a[pivot][col].abs() > SINGULAR_EPSILON) {
                log::debug!(
                    "Matrix inversion failed: pivot {} in column {} is below {}",
                    a[pivot][col],
                    col,
                    SINGULAR_EPSILON
                );
                return Err(MatrixError::Singular { column: col });
            }

            a.swap(col, pivot);
            inv.swap(col, pivot);

            let scale = 1.0 / a[col][col];
            for k in 0..4 {
                a[col][k] *= scale;
                inv[col][k] *= scale;
            }

            for row in 0..4 {
                if row == col {
                    continue;
                }
                let factor = a[row][col];
                if factor == 0.0 {
                    continue;
                }
                for k in 0..4 {
                    a[row][k] -= factor * a[col][k];
                    inv[row][k] -= factor * inv[col][k];
                }
            }
        }

        Ok(Self { m: inv })
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Component-wise comparison within `epsilon`.
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Index<(usize, usize)> for Matrix4x4 {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.m[row][col]
    }
}

impl Mul for Matrix4x4 {
    type Output = Matrix4x4;

    fn mul(self, rhs: Matrix4x4) -> Matrix4x4 {
        self.multiply(&rhs)
    }
}

impl From<DMat4> for Matrix4x4 {
    /// glam stores columns; transposing its column array yields our rows.
    fn from(mat: DMat4) -> Self {
        Self {
            m: mat.transpose().to_cols_array_2d(),
        }
    }
}

impl From<Matrix4x4> for DMat4 {
    fn from(mat: Matrix4x4) -> Self {
        DMat4::from_cols_array_2d(&mat.m).transpose()
    }
}

impl fmt::Display for Matrix4x4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<String> = self
            .m
            .iter()
            .map(|row| {
                let cells: Vec<String> = row.iter().map(f64::to_string).collect();
                format!("[{}]", cells.join(", "))
            })
            .collect();
        write!(f, "[{}]", rows.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[rustfmt::skip]
    fn sample() -> Matrix4x4 {
        Matrix4x4::new(
            2.0, 0.0, 1.0, 3.0,
            1.0, 3.0, 0.0, -1.0,
            0.0, 1.0, 4.0, 2.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    #[test]
    fn test_multiply_by_identity() {
        let m = sample();
        assert_eq!(m.multiply(&Matrix4x4::IDENTITY), m);
        assert_eq!(Matrix4x4::IDENTITY.multiply(&m), m);
        assert_eq!(m * Matrix4x4::IDENTITY, m);
    }

    #[test]
    #[rustfmt::skip]
    fn test_multiply_known_product() {
        let a = Matrix4x4::new(
            1.0, 2.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        let b = Matrix4x4::new(
            1.0, 0.0, 0.0, 0.0,
            3.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        let ab = a * b;
        assert_eq!(ab.m[0], [7.0, 2.0, 0.0, 0.0]);
        assert_eq!(ab.m[1], [3.0, 1.0, 0.0, 0.0]);
        assert_ne!(a * b, b * a);
    }

    #[test]
    fn test_multiply_with_projective_row() {
        let mut p = Matrix4x4::IDENTITY;
        p.m[3] = [0.0, 0.0, 1.0, 0.0];
        let product = p * sample();
        assert_eq!(product.m[3], sample().m[2]);
    }

    #[test]
    fn test_transpose() {
        let m = sample();
        let t = m.transpose();
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(t[(i, j)], m[(j, i)]);
            }
        }
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_inverse_of_identity() {
        assert_eq!(Matrix4x4::IDENTITY.inverse(), Ok(Matrix4x4::IDENTITY));
    }

    #[test]
    fn test_inverse_round_trip() {
        let m = sample();
        let inv = m.inverse().unwrap();
        assert!(m.multiply(&inv).approx_eq(&Matrix4x4::IDENTITY, 1e-12));
        assert!(inv.multiply(&m).approx_eq(&Matrix4x4::IDENTITY, 1e-12));
    }

    #[test]
    #[rustfmt::skip]
    fn test_inverse_needs_pivoting() {
        // Zero on the leading diagonal forces a row swap.
        let m = Matrix4x4::new(
            0.0, 1.0, 0.0, 0.0,
            1.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 2.0,
            0.0, 0.0, 4.0, 0.0,
        );
        let inv = m.inverse().unwrap();
        assert!(m.multiply(&inv).approx_eq(&Matrix4x4::IDENTITY, 1e-12));
        assert_eq!(inv[(2, 3)], 0.25);
        assert_eq!(inv[(3, 2)], 0.5);
    }

    #[test]
    #[rustfmt::skip]
    fn test_inverse_of_perspective() {
        let m = Matrix4x4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.001, -0.1001,
            0.0, 0.0, 1.0, 0.0,
        );
        let inv = m.inverse().unwrap();
        assert!(m.multiply(&inv).approx_eq(&Matrix4x4::IDENTITY, 1e-9));
    }

    #[test]
    fn test_inverse_of_zero_is_singular() {
        assert_eq!(
            Matrix4x4::ZERO.inverse(),
            Err(MatrixError::Singular { column: 0 })
        );
    }

    #[test]
    #[rustfmt::skip]
    fn test_inverse_of_rank_deficient_is_singular() {
        // Third row is the sum of the first two.
        let m = Matrix4x4::new(
            1.0, 2.0, 3.0, 0.0,
            0.0, 1.0, 4.0, 0.0,
            1.0, 3.0, 7.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        assert!(matches!(m.inverse(), Err(MatrixError::Singular { .. })));
    }

    #[test]
    fn test_inverse_rejects_nan() {
        let mut m = Matrix4x4::IDENTITY;
        m.m[0][0] = f64::NAN;
        assert!(m.inverse().is_err());
    }

    #[test]
    fn test_singular_error_message() {
        let err = MatrixError::Singular { column: 2 };
        assert_eq!(err.to_string(), "matrix is singular: no usable pivot in column 2");
    }

    #[test]
    fn test_glam_round_trip() {
        let m = sample();
        let g = DMat4::from(m);
        // glam puts the translation in the last column, as we do.
        assert_eq!(g.transform_point3(DVec3::ZERO), DVec3::new(3.0, -1.0, 2.0));
        assert_eq!(Matrix4x4::from(g), m);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Matrix4x4::IDENTITY.to_string(),
            "[[1, 0, 0, 0], [0, 1, 0, 0], [0, 0, 1, 0], [0, 0, 0, 1]]"
        );
    }

    #[test]
    fn test_cast_to_bytes() {
        let bytes: &[u8] = bytemuck::bytes_of(&Matrix4x4::IDENTITY);
        assert_eq!(bytes.len(), 16 * 8);
    }
}
