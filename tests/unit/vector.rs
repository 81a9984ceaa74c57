//! Unit tests for vector primitives

use crate::common::{assert_float_eq, sample_sweep, test_utils::EPSILON};
use geomag::{Scalar, Vector3};
use geomag::vector::{magnitude, scale};

#[test]
fn test_magnitude_pythagorean_triples() {
    assert_float_eq(magnitude(&Vector3::new(3.0, 4.0, 0.0)), 5.0, EPSILON);
    assert_float_eq(magnitude(&Vector3::new(2.0, 3.0, 6.0)), 7.0, EPSILON);
    assert_float_eq(magnitude(&Vector3::new(-1.0, -4.0, 8.0)), 9.0, EPSILON);
}

#[test]
fn test_magnitude_zero_vector_is_zero() {
    assert_eq!(magnitude(&Vector3::ZERO), 0.0);
}

#[test]
fn test_magnitude_is_pure() {
    let v = Vector3::new(1.0, 2.0, 3.0);
    let _ = magnitude(&v);
    assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_scale_to_unit_for_all_samples() {
    for sample in sample_sweep() {
        let mut v = sample;
        let m = magnitude(&v);
        scale(&mut v, 1.0 / m);
        assert_float_eq(magnitude(&v), 1.0, EPSILON);
    }
}

#[test]
fn test_scale_by_zero() {
    let mut v = Vector3::new(5.0, -6.0, 7.0);
    scale(&mut v, 0.0);
    assert!(v.is_zero());
}

#[test]
fn test_scale_negative_flips_direction() {
    let mut v = Vector3::new(1.0, -2.0, 3.0);
    scale(&mut v, -1.0);
    assert_eq!(v, Vector3::new(-1.0, 2.0, -3.0));
}

#[test]
fn test_renormalizing_unit_vector_is_stable() {
    for sample in sample_sweep() {
        let unit = sample.normalized().unwrap();
        let mut again = unit;
        let m = again.normalize().unwrap();

        assert_float_eq(m, 1.0, EPSILON);
        assert_float_eq(again.x, unit.x, EPSILON);
        assert_float_eq(again.y, unit.y, EPSILON);
        assert_float_eq(again.z, unit.z, EPSILON);
    }
}

#[test]
fn test_nan_propagates() {
    let v = Vector3::new(Scalar::NAN, 0.0, 0.0);
    assert!(magnitude(&v).is_nan());
}
