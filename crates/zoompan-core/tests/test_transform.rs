use approx::assert_abs_diff_eq;
use zoompan_core::geometry::Point;
use zoompan_core::transform::AffineTransform;

fn assert_point_eq(a: Point, b: Point, eps: f64) {
    assert_abs_diff_eq!(a.x, b.x, epsilon = eps);
    assert_abs_diff_eq!(a.y, b.y, epsilon = eps);
}

#[test]
fn test_identity_maps_points_to_themselves() {
    let t = AffineTransform::identity();
    assert!(t.is_identity());
    assert_eq!(t.apply(Point::new(12.5, -3.0)), Point::new(12.5, -3.0));
    assert_eq!(t.determinant(), 1.0);
}

#[test]
fn test_translate_is_in_scaled_units() {
    let mut t = AffineTransform::identity();
    t.scale(2.0, 2.0);
    t.translate(10.0, 5.0);
    // translate concatenates on the image side, so offsets are doubled
    assert_eq!(t.to_array(), [2.0, 0.0, 0.0, 2.0, 20.0, 10.0]);
    assert_eq!(t.apply(Point::new(1.0, 1.0)), Point::new(22.0, 12.0));
}

#[test]
fn test_scale_keeps_translation() {
    let mut t = AffineTransform::identity();
    t.translate(7.0, -3.0);
    t.scale(3.0, 0.5);
    assert_eq!(t.to_array(), [3.0, 0.0, 0.0, 0.5, 7.0, -3.0]);
    assert_abs_diff_eq!(t.determinant(), 1.5);
}

#[test]
fn test_inverse_round_trips_points() {
    let mut t = AffineTransform::identity();
    t.scale(1.2, 1.2);
    t.translate(-26.0, 41.5);
    t.scale(0.8, 0.8);
    let inv = t.inverse().expect("invertible");
    let p = Point::new(160.0, 120.0);
    assert_point_eq(inv.apply(t.apply(p)), p, 1e-9);
    assert_point_eq(t.apply(inv.apply(p)), p, 1e-9);
}

#[test]
fn test_inverse_of_sheared_matrix() {
    let t = AffineTransform::from_array([2.0, 1.0, 1.0, 3.0, 4.0, -2.0]);
    let inv = t.inverse().expect("invertible");
    let p = Point::new(-5.0, 9.0);
    assert_point_eq(inv.apply(t.apply(p)), p, 1e-12);
}

#[test]
fn test_singular_matrix_has_no_inverse() {
    let mut t = AffineTransform::identity();
    t.scale(0.0, 1.0);
    assert_eq!(t.determinant(), 0.0);
    assert!(t.inverse().is_none());
}

#[test]
fn test_approx_eq_tolerance() {
    let a = AffineTransform::identity();
    let b = AffineTransform::from_array([1.0 + 1e-12, 0.0, 0.0, 1.0, 1e-12, 0.0]);
    assert!(a.approx_eq(&b, 1e-9));
    assert!(!a.approx_eq(&b, 1e-15));
}

#[test]
fn test_display_lists_rows() {
    let t = AffineTransform::from_array([1.0, 0.0, 0.0, 1.0, 2.5, -1.0]);
    assert_eq!(
        t.to_string(),
        "[[1.000000, 0.000000, 2.500000], [0.000000, 1.000000, -1.000000]]"
    );
}
