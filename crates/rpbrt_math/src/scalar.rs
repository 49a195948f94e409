//! Scalar helpers shared by every geometric type.

use std::fmt;

/// Pivots with a magnitude at or below this are treated as zero during
/// matrix inversion.
pub const SINGULAR_EPSILON: f64 = 1e-12;

/// Linear interpolation: `(1 - t) * from + t * to`.
#[inline]
pub fn lerp(t: f64, from: f64, to: f64) -> f64 {
    (1.0 - t) * from + t * to
}

/// Component type of a vector, point, or bounds.
///
/// Implemented for `f64` and `i32`. Scaling an integer component by a float
/// multiplies in `f64` and truncates the product toward zero.
pub trait Scalar: Copy + PartialOrd + fmt::Display {
    /// Multiply by a float scale factor.
    fn scale_by(self, s: f64) -> Self;

    fn to_f64(self) -> f64;

    /// Convert from `f64`, truncating toward zero for integer components.
    fn from_f64(v: f64) -> Self;

    /// `self - other`, wrapping on integer overflow instead of panicking.
    fn sub_wrapping(self, other: Self) -> Self;

    fn is_nan(self) -> bool;
}

impl Scalar for f64 {
    #[inline]
    fn scale_by(self, s: f64) -> Self {
        s * self
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn sub_wrapping(self, other: Self) -> Self {
        self - other
    }

    #[inline]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }
}

impl Scalar for i32 {
    #[inline]
    fn scale_by(self, s: f64) -> Self {
        (s * self as f64) as i32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as i32
    }

    #[inline]
    fn sub_wrapping(self, other: Self) -> Self {
        self.wrapping_sub(other)
    }

    #[inline]
    fn is_nan(self) -> bool {
        false
    }
}
