//! Geometry kernel for a physically based ray tracer.
//!
//! Vectors, points and normals come in 2D and 3D, float (`f64`) and integer
//! (`i32`) flavours. Points, vectors and normals are distinct types, so only
//! geometrically meaningful arithmetic type-checks: point minus point is a
//! vector, point plus vector is a point, and points cannot be added.
//!
//! Each type wraps the matching glam vector, which is re-exported for callers
//! that need to drop down to raw linear algebra.

#[macro_use]
mod macros;

pub mod scalar;

mod bounds;
mod matrix;
mod normal;
mod point;
mod ray;
mod transform;
mod vector;

pub use bounds::{Bounds2f, Bounds2i, Bounds2iIter, Bounds3f, Bounds3i};
pub use matrix::{Matrix4x4, MatrixError, MatrixResult};
pub use normal::Normal3f;
pub use point::{Point2f, Point2i, Point3f, Point3i};
pub use ray::{Ray, RayDifferential};
pub use scalar::{lerp, Scalar, SINGULAR_EPSILON};
pub use transform::Transform;
pub use vector::{Vector2f, Vector2i, Vector3f, Vector3i};

// Re-export glam for convenience
pub use glam;
