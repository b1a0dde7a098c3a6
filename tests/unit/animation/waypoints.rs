use super::*;

#[test]
fn corners_are_inset_by_margin_and_extent() {
    let vp = Viewport::new(400.0, 800.0).unwrap();
    let set = WaypointSet::from_viewport(vp, 50.0, 100.0);
    assert_eq!(
        set.points(),
        &[
            Point::new(50.0, 50.0),
            Point::new(250.0, 50.0),
            Point::new(250.0, 650.0),
            Point::new(50.0, 650.0),
        ]
    );
    assert!(!set.is_degenerate());
}

#[test]
fn index_wraps_with_period_four() {
    let set = WaypointSet::from_viewport(Viewport::new(400.0, 800.0).unwrap(), 50.0, 100.0);
    assert_eq!(set.get(5), set.get(1));
    assert_eq!(WaypointSet::next_index(3), 0);
    assert_eq!(WaypointSet::next_index(0), 1);
    assert_eq!(set.index_of(Point::new(250.0, 650.0)), Some(2));
    assert_eq!(set.index_of(Point::new(1.0, 1.0)), None);
}

#[test]
fn narrow_viewport_collapses_far_edge() {
    let set = WaypointSet::from_viewport(Viewport::new(120.0, 800.0).unwrap(), 50.0, 100.0);
    assert_eq!(set.get(0).x, set.get(1).x);
    assert_eq!(set.get(2).y, 650.0);
}

#[test]
fn empty_viewport_degrades_to_single_point() {
    let set = WaypointSet::from_viewport(Viewport::new(0.0, 0.0).unwrap(), 50.0, 100.0);
    assert!(set.is_degenerate());
    assert_eq!(set.get(3), Point::new(50.0, 50.0));
}
