use super::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn linear_tween_interpolates_midpoint() {
    let mut t = Tween::new(0.0, 10.0, ms(100), Ease::Linear);
    assert_eq!(t.value(), 0.0);
    assert_eq!(t.advance(ms(50)), Duration::ZERO);
    assert!((t.value() - 5.0).abs() < 1e-9);
    assert!(!t.is_finished());
}

#[test]
fn finished_tween_lands_exactly_on_target() {
    let from = Point::new(50.0, 50.0);
    let to = Point::new(0.1 + 0.2, 1.0 / 3.0);
    let mut t = Tween::new(from, to, ms(4000), Ease::InOutEaseIn);
    for _ in 0..240 {
        t.advance(Duration::from_micros(16_667));
    }
    assert!(t.is_finished());
    assert_eq!(t.value(), to);
    assert_eq!(t.progress(), 1.0);
}

#[test]
fn advance_returns_overshoot() {
    let mut t = Tween::new(1.0, 0.0, ms(2000), Ease::Linear);
    assert_eq!(t.advance(ms(1500)), Duration::ZERO);
    assert_eq!(t.advance(ms(800)), ms(300));
    assert_eq!(t.advance(ms(10)), ms(10));
    assert_eq!(t.value(), 0.0);
}

#[test]
fn zero_duration_tween_is_immediately_complete() {
    let mut t = Tween::new(3.0, 4.0, Duration::ZERO, Ease::Linear);
    assert!(t.is_finished());
    assert_eq!(t.value(), 4.0);
    assert_eq!(t.advance(ms(5)), ms(5));
}

#[test]
fn point_lerp_is_componentwise() {
    let p = <Point as Lerp>::lerp(&Point::new(0.0, 10.0), &Point::new(10.0, 30.0), 0.25);
    assert_eq!(p, Point::new(2.5, 15.0));
}

#[test]
fn short_spans_are_not_skipped() {
    assert_eq!(skip_whole_cycles(ms(31_999), ms(16_000)), (0, ms(31_999)));
    assert_eq!(skip_whole_cycles(ms(5), Duration::ZERO), (0, ms(5)));
}

#[test]
fn long_spans_keep_one_to_two_cycles() {
    assert_eq!(skip_whole_cycles(ms(32_000), ms(16_000)), (1, ms(16_000)));
    let (skipped, rest) = skip_whole_cycles(ms(16_000 * 10 + 250), ms(16_000));
    assert_eq!(skipped, 9);
    assert_eq!(rest, ms(16_250));
}
