// Shared operator sets for the vector, point, and normal newtypes.
//
// Each type wraps a glam vector. The macros generate the float and integer
// variants from one body; integer scaling goes through `Scalar::scale_by`,
// which truncates.

/// Implements the directional-quantity API shared by vectors and normals.
macro_rules! impl_vector {
    ($name:ident, $inner:ident, $scalar:ty, [$($field:ident),+]) => {
        impl $name {
            pub const ZERO: Self = Self($inner::ZERO);

            /// Create from components. Debug builds panic on NaN components.
            #[inline]
            pub fn new($($field: $scalar),+) -> Self {
                Self::from_inner($inner::new($($field),+))
            }

            /// All components set to `v`.
            #[inline]
            pub const fn splat(v: $scalar) -> Self {
                Self($inner::splat(v))
            }

            #[inline]
            pub(crate) fn from_inner(v: $inner) -> Self {
                let v = Self(v);
                debug_assert!(!v.has_nan(), "{} has a NaN component: {}", stringify!($name), v.0);
                v
            }

            $(
                #[inline]
                pub fn $field(&self) -> $scalar {
                    self.0.$field
                }
            )+

            pub fn has_nan(&self) -> bool {
                [$(self.0.$field),+]
                    .into_iter()
                    .any($crate::scalar::Scalar::is_nan)
            }

            #[inline]
            pub fn dot(&self, other: Self) -> $scalar {
                self.0.dot(other.0)
            }

            #[inline]
            pub fn abs_dot(&self, other: Self) -> $scalar {
                self.dot(other).abs()
            }

            #[inline]
            pub fn length_squared(&self) -> $scalar {
                self.dot(*self)
            }

            /// Euclidean length, accumulated in `f64` so integer components
            /// cannot overflow.
            #[inline]
            pub fn length(&self) -> f64 {
                [$($crate::scalar::Scalar::to_f64(self.0.$field)),+]
                    .into_iter()
                    .map(|c| c * c)
                    .sum::<f64>()
                    .sqrt()
            }

            /// Divide by the length. A zero-length input yields NaN components
            /// (which debug builds reject).
            #[inline]
            pub fn normalize(&self) -> Self {
                *self / self.length()
            }

            #[inline]
            pub fn abs(&self) -> Self {
                Self(self.0.abs())
            }

            /// Component-wise minimum.
            #[inline]
            pub fn min(&self, other: Self) -> Self {
                Self(self.0.min(other.0))
            }

            /// Component-wise maximum.
            #[inline]
            pub fn max(&self, other: Self) -> Self {
                Self(self.0.max(other.0))
            }

            #[inline]
            pub fn min_component(&self) -> $scalar {
                self.0.min_element()
            }

            #[inline]
            pub fn max_component(&self) -> $scalar {
                self.0.max_element()
            }
        }

        impl ::std::ops::Index<usize> for $name {
            type Output = $scalar;

            #[inline]
            fn index(&self, i: usize) -> &$scalar {
                &self.0[i]
            }
        }

        impl ::std::ops::Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self::from_inner(self.0 + rhs.0)
            }
        }

        impl ::std::ops::Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self::from_inner(self.0 - rhs.0)
            }
        }

        impl ::std::ops::Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl ::std::ops::Mul<f64> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: f64) -> Self {
                Self::from_inner($inner::new(
                    $($crate::scalar::Scalar::scale_by(self.0.$field, rhs)),+
                ))
            }
        }

        impl ::std::ops::Mul<$name> for f64 {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> $name {
                rhs * self
            }
        }

        // Multiplies by the reciprocal, so integer components truncate once.
        impl ::std::ops::Div<f64> for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: f64) -> Self {
                self * (1.0 / rhs)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let parts = [$(self.0.$field.to_string()),+];
                write!(f, "[{}]", parts.join(", "))
            }
        }

        impl From<$inner> for $name {
            #[inline]
            fn from(v: $inner) -> Self {
                Self::from_inner(v)
            }
        }

        impl From<$name> for $inner {
            #[inline]
            fn from(v: $name) -> Self {
                v.0
            }
        }
    };
}

/// Implements the positional API for a point type paired with its vector type.
macro_rules! impl_point {
    ($name:ident, $inner:ident, $scalar:ty, $vector:ident, [$($field:ident),+]) => {
        impl $name {
            pub const ORIGIN: Self = Self($inner::ZERO);

            /// Create from components. Debug builds panic on NaN components.
            #[inline]
            pub fn new($($field: $scalar),+) -> Self {
                Self::from_inner($inner::new($($field),+))
            }

            #[inline]
            pub const fn splat(v: $scalar) -> Self {
                Self($inner::splat(v))
            }

            #[inline]
            pub(crate) fn from_inner(v: $inner) -> Self {
                let p = Self(v);
                debug_assert!(!p.has_nan(), "{} has a NaN component: {}", stringify!($name), p.0);
                p
            }

            $(
                #[inline]
                pub fn $field(&self) -> $scalar {
                    self.0.$field
                }
            )+

            pub fn has_nan(&self) -> bool {
                [$(self.0.$field),+]
                    .into_iter()
                    .any($crate::scalar::Scalar::is_nan)
            }

            /// Euclidean distance, computed in `f64` like `length`.
            #[inline]
            pub fn distance(&self, other: Self) -> f64 {
                [$(
                    $crate::scalar::Scalar::to_f64(self.0.$field)
                        - $crate::scalar::Scalar::to_f64(other.0.$field)
                ),+]
                    .into_iter()
                    .map(|d| d * d)
                    .sum::<f64>()
                    .sqrt()
            }

            #[inline]
            pub fn distance_squared(&self, other: Self) -> $scalar {
                (*self - other).length_squared()
            }

            /// `(1 - t) * self + t * other`, each weighted term scaled separately.
            #[inline]
            pub fn lerp(&self, t: f64, other: Self) -> Self {
                Self::from_inner($inner::new($(
                    $crate::scalar::Scalar::scale_by(self.0.$field, 1.0 - t)
                        + $crate::scalar::Scalar::scale_by(other.0.$field, t)
                ),+))
            }

            #[inline]
            pub fn abs(&self) -> Self {
                Self(self.0.abs())
            }

            /// Component-wise minimum.
            #[inline]
            pub fn min(&self, other: Self) -> Self {
                Self(self.0.min(other.0))
            }

            /// Component-wise maximum.
            #[inline]
            pub fn max(&self, other: Self) -> Self {
                Self(self.0.max(other.0))
            }
        }

        impl ::std::ops::Index<usize> for $name {
            type Output = $scalar;

            #[inline]
            fn index(&self, i: usize) -> &$scalar {
                &self.0[i]
            }
        }

        impl ::std::ops::Add<$vector> for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: $vector) -> Self {
                Self::from_inner(self.0 + rhs.0)
            }
        }

        impl ::std::ops::Sub<$vector> for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: $vector) -> Self {
                Self::from_inner(self.0 - rhs.0)
            }
        }

        impl ::std::ops::Sub for $name {
            type Output = $vector;

            #[inline]
            fn sub(self, rhs: Self) -> $vector {
                $vector::from_inner(self.0 - rhs.0)
            }
        }

        impl ::std::ops::Mul<f64> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: f64) -> Self {
                Self::from_inner($inner::new(
                    $($crate::scalar::Scalar::scale_by(self.0.$field, rhs)),+
                ))
            }
        }

        impl ::std::ops::Mul<$name> for f64 {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> $name {
                rhs * self
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let parts = [$(self.0.$field.to_string()),+];
                write!(f, "[{}]", parts.join(", "))
            }
        }

        impl From<$inner> for $name {
            #[inline]
            fn from(v: $inner) -> Self {
                Self::from_inner(v)
            }
        }

        impl From<$name> for $inner {
            #[inline]
            fn from(p: $name) -> Self {
                p.0
            }
        }

        impl From<$vector> for $name {
            #[inline]
            fn from(v: $vector) -> Self {
                Self(v.0)
            }
        }

        impl From<$name> for $vector {
            #[inline]
            fn from(p: $name) -> Self {
                $vector(p.0)
            }
        }
    };
}
