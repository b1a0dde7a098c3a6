use super::*;

#[test]
fn viewport_rejects_bad_sides() {
    assert!(Viewport::new(-1.0, 10.0).is_err());
    assert!(Viewport::new(10.0, f64::NAN).is_err());
    assert!(Viewport::new(f64::INFINITY, 10.0).is_err());
}

#[test]
fn zero_viewport_is_empty_but_valid() {
    let v = Viewport::new(0.0, 640.0).unwrap();
    assert!(v.is_empty());
    assert!(!Viewport::new(360.0, 640.0).unwrap().is_empty());
}
