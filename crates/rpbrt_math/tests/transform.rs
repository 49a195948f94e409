use approx::assert_abs_diff_eq;
use rpbrt_math::{Bounds3f, Matrix4x4, MatrixError, Normal3f, Point3f, Ray, Transform, Vector3f};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn object_to_world_round_trip() {
    init_logger();
    let object_to_world = Transform::translate(Vector3f::new(0.0, 2.0, -5.0))
        * Transform::rotate(0.3, Vector3f::new(1.0, 1.0, 0.0))
        * Transform::scale(1.5, 1.5, 1.5);
    let world_to_object = object_to_world.inverse();

    let ray = Ray::with_extent(
        Point3f::new(1.0, 2.0, 3.0),
        Vector3f::new(0.0, -1.0, 0.5),
        10.0,
        0.0,
    );
    let back = world_to_object.transform_ray(&object_to_world.transform_ray(&ray));
    assert!(back.origin.distance(ray.origin) < 1e-9);
    assert!((back.direction - ray.direction).length() < 1e-9);
    assert_eq!(back.t_max, ray.t_max);
}

#[test]
fn ray_hits_transformed_box() {
    init_logger();
    let unit = Bounds3f::new(Point3f::new(-1.0, -1.0, -1.0), Point3f::new(1.0, 1.0, 1.0));
    let world = Transform::translate(Vector3f::new(0.0, 0.0, 10.0)).transform_bounds(&unit);

    let ray = Ray::new(Point3f::ORIGIN, Vector3f::Z);
    let (t0, t1) = world.intersect_ray(&ray).unwrap();
    assert_abs_diff_eq!(t0, 9.0, epsilon = 1e-12);
    assert_abs_diff_eq!(t1, 11.0, epsilon = 1e-12);

    let short = Ray::with_extent(Point3f::ORIGIN, Vector3f::Z, 5.0, 0.0);
    assert!(world.intersect_ray(&short).is_none());
}

#[test]
fn normals_stay_perpendicular_to_surfaces() {
    init_logger();
    let t = Transform::rotate_y(0.8) * Transform::scale(3.0, 1.0, 0.5);
    let n = Normal3f::new(1.0, 2.0, 3.0).normalize();
    let (u, v) = Vector3f::from(n).coordinate_system();

    let n_world = t.transform_normal(n);
    assert_abs_diff_eq!(n_world.dot_vector(t.transform_vector(u)), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(n_world.dot_vector(t.transform_vector(v)), 0.0, epsilon = 1e-9);
}

#[test]
#[rustfmt::skip]
fn singular_matrix_is_reported() {
    init_logger();
    let flat = Matrix4x4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );
    let err = Transform::new(flat).unwrap_err();
    assert_eq!(err, MatrixError::Singular { column: 2 });
}
