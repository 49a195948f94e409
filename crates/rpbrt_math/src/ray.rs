use serde::{Deserialize, Serialize};

use crate::{Point3f, Vector3f};

/// A ray in 3D space with origin, direction, extent, and time.
///
/// The ray covers `origin + t * direction` for `t` in `[0, t_max)`.
/// Intersection routines shrink `t_max` to the closest hit found so far, so
/// it only ever decreases during a traversal. `time` is used for motion blur.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Point3f,
    pub direction: Vector3f,
    pub t_max: f64,
    pub time: f64,
}

impl Ray {
    /// Create an unbounded ray at time 0.
    pub fn new(origin: Point3f, direction: Vector3f) -> Self {
        Self::with_extent(origin, direction, f64::INFINITY, 0.0)
    }

    pub fn with_extent(origin: Point3f, direction: Vector3f, t_max: f64, time: f64) -> Self {
        Self {
            origin,
            direction,
            t_max,
            time,
        }
    }

    #[inline]
    pub fn origin(&self) -> Point3f {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> Vector3f {
        self.direction
    }

    #[inline]
    pub fn t_max(&self) -> f64 {
        self.t_max
    }

    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Point3f {
        self.origin + t * self.direction
    }

    /// True when `t` lies in `[0, t_max)`.
    #[inline]
    pub fn in_range(&self, t: f64) -> bool {
        t >= 0.0 && t < self.t_max
    }

    /// Record a hit at `t` if it is closer than the current `t_max`.
    ///
    /// Returns whether `t_max` changed.
    #[inline]
    pub fn shrink_t_max(&mut self, t: f64) -> bool {
        if self.in_range(t) {
            self.t_max = t;
            true
        } else {
            false
        }
    }

    pub fn has_nan(&self) -> bool {
        self.origin.has_nan() || self.direction.has_nan() || self.t_max.is_nan()
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self::new(Point3f::ORIGIN, Vector3f::Z)
    }
}

/// A primary ray plus two auxiliary rays offset by one pixel in x and y.
///
/// The auxiliary rays estimate the footprint of the primary ray for texture
/// filtering. They are only meaningful while `has_differentials` is set.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RayDifferential {
    pub ray: Ray,
    pub has_differentials: bool,
    pub rx_origin: Point3f,
    pub ry_origin: Point3f,
    pub rx_direction: Vector3f,
    pub ry_direction: Vector3f,
}

impl RayDifferential {
    /// Create a ray differential with no auxiliary rays.
    pub fn new(origin: Point3f, direction: Vector3f) -> Self {
        Self::from(Ray::new(origin, direction))
    }

    /// Attach auxiliary rays and mark them valid.
    pub fn set_differentials(
        &mut self,
        rx_origin: Point3f,
        rx_direction: Vector3f,
        ry_origin: Point3f,
        ry_direction: Vector3f,
    ) {
        self.rx_origin = rx_origin;
        self.rx_direction = rx_direction;
        self.ry_origin = ry_origin;
        self.ry_direction = ry_direction;
        self.has_differentials = true;
    }

    /// Move the auxiliary rays toward (s < 1) or away from (s > 1) the
    /// primary ray. Does nothing when no differentials are attached.
    pub fn scale_differentials(&mut self, s: f64) {
        if !self.has_differentials {
            return;
        }
        let Ray {
            origin, direction, ..
        } = self.ray;
        self.rx_origin = origin + (self.rx_origin - origin) * s;
        self.ry_origin = origin + (self.ry_origin - origin) * s;
        self.rx_direction = direction + (self.rx_direction - direction) * s;
        self.ry_direction = direction + (self.ry_direction - direction) * s;
    }

    pub fn has_nan(&self) -> bool {
        self.ray.has_nan()
            || (self.has_differentials
                && (self.rx_origin.has_nan()
                    || self.ry_origin.has_nan()
                    || self.rx_direction.has_nan()
                    || self.ry_direction.has_nan()))
    }
}

impl From<Ray> for RayDifferential {
    fn from(ray: Ray) -> Self {
        Self {
            ray,
            has_differentials: false,
            rx_origin: ray.origin,
            ry_origin: ray.origin,
            rx_direction: ray.direction,
            ry_direction: ray.direction,
        }
    }
}

impl std::ops::Deref for RayDifferential {
    type Target = Ray;

    fn deref(&self) -> &Ray {
        &self.ray
    }
}

impl std::ops::DerefMut for RayDifferential {
    fn deref_mut(&mut self) -> &mut Ray {
        &mut self.ray
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation() {
        let origin = Point3f::new(1.0, 2.0, 3.0);
        let direction = Vector3f::new(0.0, 1.0, 0.0);
        let ray = Ray::with_extent(origin, direction, 10.0, 0.5);

        assert_eq!(ray.origin, origin);
        assert_eq!(ray.direction, direction);
        assert_eq!(ray.t_max, 10.0);
        assert_eq!(ray.time, 0.5);
    }

    #[test]
    fn test_ray_defaults() {
        let ray = Ray::new(Point3f::ORIGIN, Vector3f::X);
        assert_eq!(ray.t_max(), f64::INFINITY);
        assert_eq!(ray.time(), 0.0);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Point3f::ORIGIN, Vector3f::X);

        assert_eq!(ray.at(0.0), Point3f::ORIGIN);
        assert_eq!(ray.at(1.0), Point3f::new(1.0, 0.0, 0.0));
        assert_eq!(ray.at(2.0), Point3f::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Point3f::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_copy() {
        let ray1 = Ray::new(Point3f::ORIGIN, Vector3f::Y);
        let ray2 = ray1; // Copy, not move

        assert_eq!(ray1.origin, ray2.origin);
        assert_eq!(ray1.at(1.0), ray2.at(1.0));
    }

    #[test]
    fn test_in_range_is_half_open() {
        let ray = Ray::with_extent(Point3f::ORIGIN, Vector3f::X, 5.0, 0.0);
        assert!(ray.in_range(0.0));
        assert!(ray.in_range(4.999));
        assert!(!ray.in_range(5.0));
        assert!(!ray.in_range(-0.1));
    }

    #[test]
    fn test_shrink_t_max_only_decreases() {
        let mut ray = Ray::new(Point3f::ORIGIN, Vector3f::X);
        assert!(ray.shrink_t_max(8.0));
        assert_eq!(ray.t_max, 8.0);
        assert!(ray.shrink_t_max(3.0));
        assert!(!ray.shrink_t_max(5.0));
        assert!(!ray.shrink_t_max(3.0));
        assert!(!ray.shrink_t_max(-1.0));
        assert_eq!(ray.t_max, 3.0);
    }

    #[test]
    fn test_differential_from_ray() {
        let ray = Ray::with_extent(Point3f::new(1.0, 1.0, 1.0), Vector3f::Z, 4.0, 0.25);
        let diff = RayDifferential::from(ray);
        assert!(!diff.has_differentials);
        assert_eq!(diff.origin, ray.origin);
        assert_eq!(diff.t_max, 4.0);
        assert_eq!(diff.time(), 0.25);
        assert_eq!(diff.at(2.0), Point3f::new(1.0, 1.0, 3.0));
    }

    #[test]
    fn test_scale_differentials() {
        let mut diff = RayDifferential::new(Point3f::ORIGIN, Vector3f::Z);
        diff.set_differentials(
            Point3f::new(1.0, 0.0, 0.0),
            Vector3f::new(0.5, 0.0, 1.0),
            Point3f::new(0.0, 2.0, 0.0),
            Vector3f::new(0.0, -0.5, 1.0),
        );
        diff.scale_differentials(0.5);

        assert_eq!(diff.rx_origin, Point3f::new(0.5, 0.0, 0.0));
        assert_eq!(diff.ry_origin, Point3f::new(0.0, 1.0, 0.0));
        assert_eq!(diff.rx_direction, Vector3f::new(0.25, 0.0, 1.0));
        assert_eq!(diff.ry_direction, Vector3f::new(0.0, -0.25, 1.0));
    }

    #[test]
    fn test_scale_without_differentials_is_noop() {
        let mut diff = RayDifferential::new(Point3f::ORIGIN, Vector3f::Z);
        let before = diff;
        diff.scale_differentials(0.125);
        assert_eq!(diff, before);
    }

    #[test]
    fn test_t_max_mutable_through_differential() {
        let mut diff = RayDifferential::new(Point3f::ORIGIN, Vector3f::Z);
        assert!(diff.shrink_t_max(2.0));
        assert_eq!(diff.ray.t_max, 2.0);
    }
}
