use std::time::Duration;

use smallvec::SmallVec;

use crate::animation::corner::{Arrival, CornerMotion, LegTiming};
use crate::animation::pulse::{PulseMotion, PulseStyle};
use crate::animation::waypoints::WaypointSet;
use crate::foundation::core::Point;
use crate::foundation::error::SigninResult;

/// Per-frame values polled by the view renderer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FrameSample {
    /// Marker translation.
    pub position: Point,
    /// Marker cumulative rotation, degrees.
    pub rotation_deg: f64,
    /// Halo scale multiplier.
    pub pulse_scale: f64,
    /// Halo opacity.
    pub pulse_opacity: f64,
}

/// Result of one scheduler tick.
#[derive(Clone, Debug, PartialEq)]
pub struct TickReport {
    /// Values after the tick.
    pub sample: FrameSample,
    /// Legs the marker completed during the tick, oldest first.
    pub arrivals: SmallVec<[Arrival; 2]>,
    /// Direction changes of the halo during the tick.
    pub pulse_turns: u64,
}

#[derive(Clone, Debug)]
struct Motions {
    corner: CornerMotion,
    pulse: PulseMotion,
}

impl Motions {
    fn sample(&self) -> FrameSample {
        let m = self.corner.state();
        let p = self.pulse.state();
        FrameSample {
            position: m.position,
            rotation_deg: m.rotation_deg,
            pulse_scale: p.scale,
            pulse_opacity: p.opacity,
        }
    }
}

/// Drives the corner motion and the pulse off a single frame clock.
///
/// The two motions share only the clock; neither reads the other's state. After
/// [`AnimationScheduler::teardown`] both are dropped, so no value can be observed again.
#[derive(Clone, Debug)]
pub struct AnimationScheduler {
    live: Option<Motions>,
}

impl AnimationScheduler {
    /// Start both motions at time zero.
    pub fn start(
        waypoints: WaypointSet,
        leg: LegTiming,
        pulse_half_period: Duration,
        pulse_style: PulseStyle,
    ) -> SigninResult<Self> {
        let corner = CornerMotion::start(waypoints, leg)?;
        let pulse = PulseMotion::start(pulse_half_period, pulse_style)?;
        Ok(Self {
            live: Some(Motions { corner, pulse }),
        })
    }

    /// False once torn down.
    pub fn is_running(&self) -> bool {
        self.live.is_some()
    }

    /// Advance both motions by `dt`. Returns `None` after teardown.
    pub fn tick(&mut self, dt: Duration) -> Option<TickReport> {
        let live = self.live.as_mut()?;
        let arrivals = live.corner.advance(dt);
        let pulse_turns = live.pulse.advance(dt);
        Some(TickReport {
            sample: live.sample(),
            arrivals,
            pulse_turns,
        })
    }

    /// Read current values without advancing. Returns `None` after teardown.
    pub fn sample(&self) -> Option<FrameSample> {
        self.live.as_ref().map(Motions::sample)
    }

    /// Corner motion, while running.
    pub fn corner(&self) -> Option<&CornerMotion> {
        self.live.as_ref().map(|m| &m.corner)
    }

    /// Pulse motion, while running.
    pub fn pulse(&self) -> Option<&PulseMotion> {
        self.live.as_ref().map(|m| &m.pulse)
    }

    /// Stop both motions. Idempotent.
    pub fn teardown(&mut self) {
        if let Some(m) = self.live.take() {
            tracing::debug!(
                legs = m.corner.legs_completed(),
                pulse_turns = m.pulse.turns(),
                "animations stopped"
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/scheduler.rs"]
mod tests;
