//! Headless core of an animated sign-in screen.
//!
//! The crate owns the two parts of the screen that carry logic rather than layout:
//!
//! 1. **Validation**: four raw field values -> [`ValidationResult`], checked in a fixed order
//!    (username, password, email, age) and short-circuiting on the first failing rule.
//! 2. **Background motion**: an [`AnimationScheduler`] advanced by a frame clock, running a marker
//!    that glides between the four inset viewport corners while turning, and a halo that pulses
//!    in scale and opacity.
//!
//! Drawing is left to the caller: each frame it calls [`SigninScreen::frame`] and draws the
//! returned [`FrameSample`]. Submit outcomes are handed to a [`Notifier`].
//!
//! # Lifecycle
//!
//! - [`SigninScreen::mount`] captures the viewport, computes the corner set once, starts both
//!   motions, and creates empty fields.
//! - [`SigninScreen::frame`] advances both motions by the elapsed time.
//! - [`SigninScreen::submit`] validates and notifies exactly once.
//! - [`SigninScreen::unmount`] (or drop) stops the motions; no sample is produced afterwards.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod form;
mod screen;

pub use animation::corner::{Arrival, CornerMotion, LegTiming, MotionState};
pub use animation::ease::Ease;
pub use animation::pulse::{PulseHalf, PulseMotion, PulseState, PulseStyle};
pub use animation::scheduler::{AnimationScheduler, FrameSample, TickReport};
pub use animation::tween::{Lerp, Tween};
pub use animation::waypoints::{WAYPOINT_COUNT, WaypointSet};
pub use form::inputs::{Field, FormInputs};
pub use form::number::coerce as coerce_number;
pub use form::rules::{
    MIN_PASSWORD_LEN, age_positive, email_shaped, password_strong, username_present,
};
pub use form::validate::{RejectionReason, ValidationResult, validate};
pub use foundation::core::{Point, Vec2, Viewport};
pub use foundation::error::{SigninError, SigninResult};
pub use screen::config::ScreenConfig;
pub use screen::notifier::{Notification, Notifier, RecordingNotifier, TracingNotifier};
pub use screen::signin::SigninScreen;
