use super::*;
use crate::foundation::core::Viewport;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn timing() -> LegTiming {
    LegTiming {
        duration: ms(4000),
        rotation_deg: 360.0,
        position_ease: Ease::InOutEaseIn,
        rotation_ease: Ease::Linear,
    }
}

fn motion() -> CornerMotion {
    let set = WaypointSet::from_viewport(Viewport::new(400.0, 800.0).unwrap(), 50.0, 100.0);
    CornerMotion::start(set, timing()).unwrap()
}

#[test]
fn starts_at_first_corner_heading_to_second() {
    let m = motion();
    assert_eq!(m.state().position, Point::new(50.0, 50.0));
    assert_eq!(m.state().rotation_deg, 0.0);
    assert_eq!(m.target_index(), 1);
    assert_eq!(m.legs_completed(), 0);
}

#[test]
fn arrival_lands_exactly_on_waypoint_with_full_turn() {
    let mut m = motion();
    let arrivals = m.advance(ms(4000));
    assert_eq!(arrivals.len(), 1);
    assert_eq!(arrivals[0].waypoint, 1);
    assert_eq!(arrivals[0].state.position, Point::new(250.0, 50.0));
    assert_eq!(arrivals[0].state.rotation_deg, 360.0);
    assert_eq!(m.target_index(), 2);
}

#[test]
fn visited_corners_cycle_with_period_four() {
    let mut m = motion();
    let set = *m.waypoints();
    let mut visited = Vec::new();
    // ~60 fps, uneven frame lengths.
    for i in 0..6000u64 {
        let dt = Duration::from_micros(16_000 + (i % 3) * 700);
        for a in m.advance(dt) {
            assert_eq!(set.index_of(a.state.position), Some(a.waypoint));
            assert_eq!(a.state.rotation_deg, 360.0 * a.leg as f64);
            visited.push(a.waypoint);
        }
    }
    assert!(visited.len() >= 12);
    for (i, w) in visited.iter().enumerate() {
        assert_eq!(*w, (i + 1) % 4);
    }
}

#[test]
fn rotation_is_non_decreasing_and_linear() {
    let mut m = motion();
    m.advance(ms(1000));
    assert!((m.state().rotation_deg - 90.0).abs() < 1e-9);

    let mut prev = m.state().rotation_deg;
    for _ in 0..1000 {
        m.advance(ms(17));
        let r = m.state().rotation_deg;
        assert!(r >= prev);
        prev = r;
    }
}

#[test]
fn first_quarter_of_leg_lags_behind_linear() {
    let mut m = motion();
    m.advance(ms(1000));
    let p = m.state().position;
    // 50 + 200 * inOut(ease)(0.25)
    assert!((p.x - 81.536).abs() < 1e-3, "x = {}", p.x);
    assert_eq!(p.y, 50.0);
}

#[test]
fn large_step_reports_every_leg_in_order() {
    let mut m = motion();
    let arrivals = m.advance(ms(4000 * 5 + 1000));
    let order: Vec<usize> = arrivals.iter().map(|a| a.waypoint).collect();
    assert_eq!(order, vec![1, 2, 3, 0, 1]);
    assert_eq!(m.legs_completed(), 5);
    assert_eq!(m.target_index(), 2);
    assert!((m.state().rotation_deg - (1800.0 + 90.0)).abs() < 1e-9);
}

#[test]
fn position_and_rotation_finish_together() {
    let mut m = motion();
    assert!(m.advance(ms(3999)).is_empty());
    let pos = m.state().position;
    assert!(pos != Point::new(250.0, 50.0));
    assert!(m.state().rotation_deg < 360.0);
    assert_eq!(m.advance(ms(1)).len(), 1);
}

#[test]
fn degenerate_corners_still_rotate() {
    let set = WaypointSet::from_viewport(Viewport::new(0.0, 0.0).unwrap(), 50.0, 100.0);
    let mut m = CornerMotion::start(set, timing()).unwrap();
    m.advance(ms(6000));
    assert_eq!(m.state().position, Point::new(50.0, 50.0));
    assert!((m.state().rotation_deg - 540.0).abs() < 1e-9);
}

#[test]
fn invalid_timing_is_rejected() {
    let set = WaypointSet::from_viewport(Viewport::new(400.0, 800.0).unwrap(), 50.0, 100.0);
    let zero = LegTiming {
        duration: Duration::ZERO,
        ..timing()
    };
    assert!(CornerMotion::start(set, zero).is_err());
    let backwards = LegTiming {
        rotation_deg: -360.0,
        ..timing()
    };
    assert!(CornerMotion::start(set, backwards).is_err());
}

#[test]
fn month_long_step_skips_whole_circuits() {
    let mut m = motion();
    let month = Duration::from_secs(30 * 24 * 3600);
    let arrivals = m.advance(month);
    assert!(arrivals.len() <= 9, "{} arrivals", arrivals.len());
    assert_eq!(arrivals[0].leg, 1);
    assert_eq!(m.legs_completed(), 648_000);

    let last = arrivals.last().unwrap();
    assert_eq!(last.leg, 648_000);
    assert_eq!(last.waypoint, 0);
    assert_eq!(last.state.rotation_deg, 360.0 * 648_000.0);
    assert_eq!(m.target_index(), 1);
    assert_eq!(m.state().position, Point::new(50.0, 50.0));

    // Reported arrivals stay in corner order.
    for pair in arrivals.windows(2) {
        assert_eq!(pair[1].waypoint, (pair[0].waypoint + 1) % 4);
    }
}

#[test]
fn maximal_step_completes_with_few_arrivals() {
    let mut m = motion();
    let arrivals = m.advance(Duration::MAX);
    assert!(!arrivals.is_empty());
    assert!(arrivals.len() <= 9);
    assert!(m.legs_completed() > 1_000_000_000);
    assert!(m.state().rotation_deg.is_finite());
}
