use std::time::Duration;

use crate::animation::corner::LegTiming;
use crate::animation::ease::Ease;
use crate::animation::pulse::PulseStyle;
use crate::foundation::error::{SigninError, SigninResult};

/// Tunables for the screen's background motion.
///
/// Missing JSON keys fall back to [`ScreenConfig::default`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScreenConfig {
    /// Inset of every waypoint from the viewport edge.
    pub margin: f64,
    /// Marker extent subtracted on the far edges.
    pub marker_extent: f64,
    /// Duration of one corner-to-corner leg.
    pub leg_duration_ms: u64,
    /// Degrees added per leg.
    pub rotation_per_leg_deg: f64,
    /// Easing of the marker translation.
    pub position_ease: Ease,
    /// Easing of the marker rotation.
    pub rotation_ease: Ease,
    /// Duration of one pulse half (rise or fall).
    pub pulse_half_period_ms: u64,
    /// Halo scale gain at peak phase.
    pub pulse_scale_gain: f64,
    /// Halo opacity at rest.
    pub pulse_base_opacity: f64,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            margin: 50.0,
            marker_extent: 100.0,
            leg_duration_ms: 4000,
            rotation_per_leg_deg: 360.0,
            position_ease: Ease::InOutEaseIn,
            rotation_ease: Ease::Linear,
            pulse_half_period_ms: 2000,
            pulse_scale_gain: 0.25,
            pulse_base_opacity: 0.6,
        }
    }
}

impl ScreenConfig {
    /// Parse JSON and validate.
    pub fn from_json_str(json: &str) -> SigninResult<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject zero durations and negative or non-finite geometry and styling.
    pub fn validate(&self) -> SigninResult<()> {
        if self.leg_duration_ms == 0 {
            return Err(SigninError::config("leg_duration_ms must be > 0"));
        }
        if self.pulse_half_period_ms == 0 {
            return Err(SigninError::config("pulse_half_period_ms must be > 0"));
        }
        for (name, v) in [
            ("margin", self.margin),
            ("marker_extent", self.marker_extent),
            ("rotation_per_leg_deg", self.rotation_per_leg_deg),
            ("pulse_scale_gain", self.pulse_scale_gain),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(SigninError::config(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.pulse_base_opacity) {
            return Err(SigninError::config(
                "pulse_base_opacity must be within [0, 1]",
            ));
        }
        Ok(())
    }

    pub(crate) fn leg_timing(&self) -> LegTiming {
        LegTiming {
            duration: Duration::from_millis(self.leg_duration_ms),
            rotation_deg: self.rotation_per_leg_deg,
            position_ease: self.position_ease,
            rotation_ease: self.rotation_ease,
        }
    }

    pub(crate) fn pulse_half_period(&self) -> Duration {
        Duration::from_millis(self.pulse_half_period_ms)
    }

    pub(crate) fn pulse_style(&self) -> PulseStyle {
        PulseStyle {
            scale_gain: self.pulse_scale_gain,
            base_opacity: self.pulse_base_opacity,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/screen/config.rs"]
mod tests;
