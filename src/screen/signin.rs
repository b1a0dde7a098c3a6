use std::time::Duration;

use crate::animation::scheduler::{AnimationScheduler, FrameSample, TickReport};
use crate::animation::waypoints::WaypointSet;
use crate::foundation::core::Viewport;
use crate::foundation::error::SigninResult;
use crate::form::inputs::{Field, FormInputs};
use crate::form::validate::{ValidationResult, validate};
use crate::screen::config::ScreenConfig;
use crate::screen::notifier::Notifier;

/// One mounted instance of the sign-in screen.
///
/// Owns the field values and both background motions. Dropping the screen (or calling
/// [`SigninScreen::unmount`]) stops the motions and discards everything typed.
pub struct SigninScreen {
    viewport: Viewport,
    config: ScreenConfig,
    waypoints: WaypointSet,
    inputs: FormInputs,
    scheduler: AnimationScheduler,
    submits: u64,
}

impl SigninScreen {
    /// Validate `config`, compute the corner set for `viewport`, and start both motions.
    #[tracing::instrument(skip(config))]
    pub fn mount(viewport: Viewport, config: ScreenConfig) -> SigninResult<Self> {
        config.validate()?;
        let waypoints = WaypointSet::from_viewport(viewport, config.margin, config.marker_extent);
        if waypoints.is_degenerate() {
            tracing::warn!("viewport too small for corner motion; marker will only rotate");
        }
        let scheduler = AnimationScheduler::start(
            waypoints,
            config.leg_timing(),
            config.pulse_half_period(),
            config.pulse_style(),
        )?;
        tracing::info!("sign-in screen mounted");
        Ok(Self {
            viewport,
            config,
            waypoints,
            inputs: FormInputs::default(),
            scheduler,
            submits: 0,
        })
    }

    /// Replace the value of one field.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.inputs.set(field, value);
    }

    /// Current field values.
    pub fn inputs(&self) -> &FormInputs {
        &self.inputs
    }

    /// Validate the current fields and notify the outcome exactly once.
    ///
    /// Fields are left as they are whatever the outcome.
    #[tracing::instrument(skip_all)]
    pub fn submit<N: Notifier>(&mut self, mut notifier: N) -> ValidationResult {
        self.submits += 1;
        let result = validate(&self.inputs);
        match result.reason() {
            None => tracing::info!(submit = self.submits, "submission accepted"),
            Some(reason) => tracing::info!(submit = self.submits, ?reason, "submission rejected"),
        }
        let (title, message) = result.notification_text();
        notifier.notify(&title, &message);
        result
    }

    /// Advance the background motions and return what to draw, or `None` once unmounted.
    pub fn frame(&mut self, dt: Duration) -> Option<FrameSample> {
        self.tick(dt).map(|r| r.sample)
    }

    /// Like [`SigninScreen::frame`] but also reports arrivals and pulse turns.
    pub fn tick(&mut self, dt: Duration) -> Option<TickReport> {
        self.scheduler.tick(dt)
    }

    /// Current values without advancing time.
    pub fn sample(&self) -> Option<FrameSample> {
        self.scheduler.sample()
    }

    /// Background motions.
    pub fn scheduler(&self) -> &AnimationScheduler {
        &self.scheduler
    }

    /// Corner set fixed at mount.
    pub fn waypoints(&self) -> &WaypointSet {
        &self.waypoints
    }

    /// Viewport captured at mount.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Active configuration.
    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    /// Number of submits so far.
    pub fn submit_count(&self) -> u64 {
        self.submits
    }

    /// Stop the motions without discarding the screen.
    pub fn teardown(&mut self) {
        self.scheduler.teardown();
    }

    /// Tear the screen down and drop its state.
    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for SigninScreen {
    fn drop(&mut self) {
        self.scheduler.teardown();
        tracing::info!(submits = self.submits, "sign-in screen unmounted");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/screen/signin.rs"]
mod tests;
