use super::*;
use crate::foundation::core::Point;
use crate::form::validate::RejectionReason;
use crate::screen::notifier::RecordingNotifier;

fn screen() -> SigninScreen {
    SigninScreen::mount(
        Viewport::new(390.0, 844.0).unwrap(),
        ScreenConfig::default(),
    )
    .unwrap()
}

fn fill(s: &mut SigninScreen, u: &str, p: &str, e: &str, a: &str) {
    s.set_field(Field::Username, u);
    s.set_field(Field::Password, p);
    s.set_field(Field::NameOrEmail, e);
    s.set_field(Field::Age, a);
}

#[test]
fn mount_places_marker_on_first_corner() {
    let s = screen();
    assert_eq!(s.sample().unwrap().position, Point::new(50.0, 50.0));
    assert_eq!(s.waypoints().get(2), Point::new(240.0, 694.0));
    assert!(s.scheduler().is_running());
}

#[test]
fn mount_rejects_invalid_config() {
    let cfg = ScreenConfig {
        leg_duration_ms: 0,
        ..ScreenConfig::default()
    };
    assert!(SigninScreen::mount(Viewport::new(390.0, 844.0).unwrap(), cfg).is_err());
}

#[test]
fn each_submit_notifies_exactly_once() {
    let mut s = screen();
    let mut n = RecordingNotifier::new();

    let r = s.submit(&mut n);
    assert_eq!(r.reason(), Some(RejectionReason::UsernameEmpty));
    assert_eq!(n.received().len(), 1);
    assert_eq!(n.last().unwrap().title, "Invalid Input");

    fill(&mut s, "alice", "abc12345", "a@b.com", "30");
    let r = s.submit(&mut n);
    assert!(r.is_accepted());
    assert_eq!(n.received().len(), 2);
    assert_eq!(n.last().unwrap().title, "Success");
    assert_eq!(
        n.last().unwrap().message,
        "Signed in with:\nUsername: alice\nEmail: a@b.com\nAge: 30"
    );
    assert_eq!(s.submit_count(), 2);
}

#[test]
fn submit_keeps_fields() {
    let mut s = screen();
    fill(&mut s, "alice", "abc12345", "a@b.com", "30");
    s.submit(RecordingNotifier::new());
    assert_eq!(s.inputs().username, "alice");
    assert_eq!(s.inputs().age, "30");
}

#[test]
fn resubmitting_after_edit_recovers() {
    let mut s = screen();
    let mut n = RecordingNotifier::new();
    fill(&mut s, "alice", "abc12345", "a@b.com", "0");
    assert_eq!(s.submit(&mut n).reason(), Some(RejectionReason::AgeInvalid));
    assert_eq!(n.last().unwrap().message, "Please enter a valid age.");
    s.set_field(Field::Age, "1");
    assert!(s.submit(&mut n).is_accepted());
}

#[test]
fn frames_stop_after_teardown() {
    let mut s = screen();
    assert!(s.frame(Duration::from_millis(16)).is_some());
    s.teardown();
    assert!(s.frame(Duration::from_millis(16)).is_none());
    assert!(s.sample().is_none());
    assert!(s.tick(Duration::from_secs(10)).is_none());
}

#[test]
fn validation_still_works_after_teardown() {
    let mut s = screen();
    s.teardown();
    fill(&mut s, "alice", "abc12345", "a@b.com", "30");
    assert!(s.submit(RecordingNotifier::new()).is_accepted());
}
