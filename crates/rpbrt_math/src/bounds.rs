//! Axis-aligned bounding boxes in 2D and 3D.
//!
//! A bounds is a `min`/`max` corner pair. [`new`](Bounds3f::new) sorts its
//! corners, so a freshly built bounds always has `min <= max` on every axis.
//! [`intersect`](Bounds3f::intersect) does not: two disjoint inputs produce an
//! inverted result (`min > max` on some axis), which callers detect with
//! [`is_inverted`](Bounds3f::is_inverted).

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::scalar::{lerp, Scalar};
use crate::{Point2f, Point2i, Point3f, Point3i, Ray, Vector2f, Vector2i, Vector3f, Vector3i};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds2f {
    pub min: Point2f,
    pub max: Point2f,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds2i {
    pub min: Point2i,
    pub max: Point2i,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds3f {
    pub min: Point3f,
    pub max: Point3f,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds3i {
    pub min: Point3i,
    pub max: Point3i,
}

macro_rules! impl_bounds {
    (
        $name:ident, $point:ident, $vector:ident, $scalar:ty, $param:ident,
        lowest = $lowest:expr, highest = $highest:expr,
        [$($field:ident : $axis:literal),+]
    ) => {
        impl $name {
            /// Inverted bounds that any union replaces.
            pub const EMPTY: Self = Self {
                min: $point::splat($highest),
                max: $point::splat($lowest),
            };

            /// Bounds spanning the whole representable range.
            pub const UNIVERSE: Self = Self {
                min: $point::splat($lowest),
                max: $point::splat($highest),
            };

            /// Bounds with `a` and `b` as opposite corners, in any order.
            #[inline]
            pub fn new(a: $point, b: $point) -> Self {
                Self {
                    min: a.min(b),
                    max: a.max(b),
                }
            }

            /// Degenerate bounds enclosing a single point.
            #[inline]
            pub fn from_point(p: $point) -> Self {
                Self { min: p, max: p }
            }

            /// One of the corners. Bit `n` of `corner` picks `max` (set) or
            /// `min` (clear) on axis `n`.
            #[inline]
            pub fn corner(&self, corner: usize) -> $point {
                $point::new($(self[(corner >> $axis) & 1].$field()),+)
            }

            #[inline]
            pub fn union_point(&self, p: $point) -> Self {
                Self {
                    min: self.min.min(p),
                    max: self.max.max(p),
                }
            }

            #[inline]
            pub fn union(&self, other: &Self) -> Self {
                Self {
                    min: self.min.min(other.min),
                    max: self.max.max(other.max),
                }
            }

            /// Overlap of two bounds. Disjoint inputs give an inverted result.
            #[inline]
            pub fn intersect(&self, other: &Self) -> Self {
                Self {
                    min: self.min.max(other.min),
                    max: self.max.min(other.max),
                }
            }

            #[inline]
            pub fn overlaps(&self, other: &Self) -> bool {
                true $(&& self.max.$field() >= other.min.$field()
                    && self.min.$field() <= other.max.$field())+
            }

            /// True when `min > max` on any axis.
            #[inline]
            pub fn is_inverted(&self) -> bool {
                false $(|| self.min.$field() > self.max.$field())+
            }

            /// Inclusive on both ends.
            #[inline]
            pub fn contains(&self, p: $point) -> bool {
                true $(&& p.$field() >= self.min.$field() && p.$field() <= self.max.$field())+
            }

            /// Inclusive of `min`, exclusive of `max`.
            #[inline]
            pub fn contains_exclusive(&self, p: $point) -> bool {
                true $(&& p.$field() >= self.min.$field() && p.$field() < self.max.$field())+
            }

            /// Pad by `delta` on every side.
            #[inline]
            pub fn expand(&self, delta: $scalar) -> Self {
                let pad = $vector::splat(delta);
                Self {
                    min: self.min - pad,
                    max: self.max + pad,
                }
            }

            /// `max - min`. Integer extents that do not fit in `i32` wrap.
            #[inline]
            pub fn diagonal(&self) -> $vector {
                $vector::new($(self.max.$field().sub_wrapping(self.min.$field())),+)
            }

            /// Interpolate between `min` and `max` independently on each axis.
            #[inline]
            pub fn lerp(&self, t: $param) -> $point {
                $point::new($(<$scalar as Scalar>::from_f64(lerp(
                    t.$field(),
                    self.min.$field().to_f64(),
                    self.max.$field().to_f64(),
                ))),+)
            }

            /// Position of `p` relative to the bounds: `min` maps to 0 and
            /// `max` to 1 on each axis. A zero-width axis returns the raw offset
            /// from `min`.
            #[inline]
            pub fn offset(&self, p: $point) -> $vector {
                let o = p - self.min;
                $vector::new($(
                    if self.max.$field() > self.min.$field() {
                        o.$field() / (self.max.$field() - self.min.$field())
                    } else {
                        o.$field()
                    }
                ),+)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::EMPTY
            }
        }

        impl ::std::ops::Index<usize> for $name {
            type Output = $point;

            #[inline]
            fn index(&self, i: usize) -> &$point {
                match i {
                    0 => &self.min,
                    1 => &self.max,
                    _ => panic!("bounds corner index out of range: {i}"),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "Bounds {} to {}", self.min, self.max)
            }
        }
    };
}

impl_bounds!(Bounds2f, Point2f, Vector2f, f64, Point2f,
    lowest = f64::MIN, highest = f64::MAX, [x: 0, y: 1]);
impl_bounds!(Bounds2i, Point2i, Vector2i, i32, Point2f,
    lowest = i32::MIN, highest = i32::MAX, [x: 0, y: 1]);
impl_bounds!(Bounds3f, Point3f, Vector3f, f64, Point3f,
    lowest = f64::MIN, highest = f64::MAX, [x: 0, y: 1, z: 2]);
impl_bounds!(Bounds3i, Point3i, Vector3i, i32, Point3f,
    lowest = i32::MIN, highest = i32::MAX, [x: 0, y: 1, z: 2]);

macro_rules! impl_bounds2_measures {
    ($name:ident) => {
        impl $name {
            // Extents in f64 so the integer limits cannot overflow.
            #[inline]
            fn extents(&self) -> (f64, f64) {
                (
                    self.max.x().to_f64() - self.min.x().to_f64(),
                    self.max.y().to_f64() - self.min.y().to_f64(),
                )
            }

            #[inline]
            pub fn area(&self) -> f64 {
                let (x, y) = self.extents();
                x * y
            }

            /// Index of the longest axis. Ties go to Y.
            #[inline]
            pub fn maximum_extent(&self) -> usize {
                let (x, y) = self.extents();
                if x > y {
                    0
                } else {
                    1
                }
            }
        }
    };
}

macro_rules! impl_bounds3_measures {
    ($name:ident) => {
        impl $name {
            #[inline]
            fn extents(&self) -> (f64, f64, f64) {
                (
                    self.max.x().to_f64() - self.min.x().to_f64(),
                    self.max.y().to_f64() - self.min.y().to_f64(),
                    self.max.z().to_f64() - self.min.z().to_f64(),
                )
            }

            #[inline]
            pub fn surface_area(&self) -> f64 {
                let (x, y, z) = self.extents();
                2.0 * (x * y + x * z + y * z)
            }

            #[inline]
            pub fn volume(&self) -> f64 {
                let (x, y, z) = self.extents();
                x * y * z
            }

            /// Index of the longest axis. X must be strictly longer than both
            /// others to win, and Y strictly longer than Z.
            #[inline]
            pub fn maximum_extent(&self) -> usize {
                let (x, y, z) = self.extents();
                if x > y && x > z {
                    0
                } else if y > z {
                    1
                } else {
                    2
                }
            }
        }
    };
}

impl_bounds2_measures!(Bounds2f);
impl_bounds2_measures!(Bounds2i);
impl_bounds3_measures!(Bounds3f);
impl_bounds3_measures!(Bounds3i);

impl Bounds3f {
    /// Sphere around the box: the center and the distance from it to `max`.
    ///
    /// Inverted bounds do not contain their own center and report radius 0.
    pub fn bounding_sphere(&self) -> (Point3f, f64) {
        let center = Point3f::from_inner((self.min.0 + self.max.0) * 0.5);
        let radius = if self.contains(center) {
            center.distance(self.max)
        } else {
            0.0
        };
        (center, radius)
    }

    /// Slab test against the ray's valid range `[0, t_max)`.
    ///
    /// Returns the parametric entry and exit distances when the ray hits.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<(f64, f64)> {
        let mut t0 = 0.0;
        let mut t1 = ray.t_max;
        for axis in 0..3 {
            let inv_dir = 1.0 / ray.direction[axis];
            let mut t_near = (self.min[axis] - ray.origin[axis]) * inv_dir;
            let mut t_far = (self.max[axis] - ray.origin[axis]) * inv_dir;
            if t_near > t_far {
                std::mem::swap(&mut t_near, &mut t_far);
            }
            // NaN slabs (origin on a face, zero direction) leave the range alone.
            if t_near > t0 {
                t0 = t_near;
            }
            if t_far < t1 {
                t1 = t_far;
            }
            if t0 > t1 {
                return None;
            }
        }
        if t0 >= ray.t_max {
            return None;
        }
        Some((t0, t1))
    }
}

impl From<Bounds2i> for Bounds2f {
    fn from(b: Bounds2i) -> Self {
        Self {
            min: b.min.into(),
            max: b.max.into(),
        }
    }
}

impl From<Bounds3i> for Bounds3f {
    fn from(b: Bounds3i) -> Self {
        Self {
            min: b.min.into(),
            max: b.max.into(),
        }
    }
}

impl Bounds2i {
    /// Row-major walk over the integer points of `[min, max)`.
    pub fn iter(&self) -> Bounds2iIter {
        let next = (self.min.x() < self.max.x() && self.min.y() < self.max.y()).then_some(self.min);
        Bounds2iIter {
            bounds: *self,
            next,
        }
    }
}

/// Iterator over the pixels of a [`Bounds2i`], Y outer and X inner.
#[derive(Debug, Clone)]
pub struct Bounds2iIter {
    bounds: Bounds2i,
    next: Option<Point2i>,
}

impl Iterator for Bounds2iIter {
    type Item = Point2i;

    fn next(&mut self) -> Option<Point2i> {
        let current = self.next?;
        let (mut x, mut y) = (current.x() + 1, current.y());
        if x == self.bounds.max.x() {
            x = self.bounds.min.x();
            y += 1;
        }
        self.next = (y < self.bounds.max.y()).then(|| Point2i::new(x, y));
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            Some(p) => {
                let (min, max) = (self.bounds.min, self.bounds.max);
                // Widen first: the full i32 range holds close to 2^64 points.
                let width = (i64::from(max.x()) - i64::from(min.x())) as u64;
                let rows_below = (i64::from(max.y()) - i64::from(p.y()) - 1) as u64;
                let in_row = (i64::from(max.x()) - i64::from(p.x())) as u64;
                usize::try_from(rows_below * width + in_row).unwrap_or(usize::MAX)
            }
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bounds2iIter {}

impl FusedIterator for Bounds2iIter {}

impl IntoIterator for Bounds2i {
    type Item = Point2i;
    type IntoIter = Bounds2iIter;

    fn into_iter(self) -> Bounds2iIter {
        self.iter()
    }
}

impl IntoIterator for &Bounds2i {
    type Item = Point2i;
    type IntoIter = Bounds2iIter;

    fn into_iter(self) -> Bounds2iIter {
        self.iter()
    }
}
