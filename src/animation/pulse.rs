use std::time::Duration;

use crate::animation::ease::Ease;
use crate::animation::tween::{Tween, skip_whole_cycles};
use crate::foundation::error::{SigninError, SigninResult};

/// Which half of the oscillation is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PulseHalf {
    /// Phase climbing 0 -> 1.
    Rising,
    /// Phase falling 1 -> 0.
    Falling,
}

impl PulseHalf {
    fn flipped(self) -> Self {
        match self {
            Self::Rising => Self::Falling,
            Self::Falling => Self::Rising,
        }
    }

    fn endpoints(self) -> (f64, f64) {
        match self {
            Self::Rising => (0.0, 1.0),
            Self::Falling => (1.0, 0.0),
        }
    }
}

/// Mapping from phase to the halo's scale and opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseStyle {
    /// Scale added at full phase (`scale = 1 + gain * phase`).
    pub scale_gain: f64,
    /// Opacity at zero phase (`opacity = base * (1 - phase)`).
    pub base_opacity: f64,
}

/// Halo values read by the view renderer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PulseState {
    /// Progress in `[0, 1]`.
    pub phase: f64,
    /// Scale multiplier.
    pub scale: f64,
    /// Opacity in `[0, base_opacity]`.
    pub opacity: f64,
}

/// Back-and-forth linear oscillation: rise over one half period, fall over the next, forever.
#[derive(Clone, Debug)]
pub struct PulseMotion {
    half_period: Duration,
    style: PulseStyle,
    half: PulseHalf,
    tween: Tween<f64>,
    turns: u64,
}

impl PulseMotion {
    /// Start rising from phase 0.
    pub fn start(half_period: Duration, style: PulseStyle) -> SigninResult<Self> {
        if half_period.is_zero() {
            return Err(SigninError::animation("pulse half period must be > 0"));
        }
        let half = PulseHalf::Rising;
        Ok(Self {
            half_period,
            style,
            half,
            tween: Self::tween_for(half, half_period),
            turns: 0,
        })
    }

    fn tween_for(half: PulseHalf, half_period: Duration) -> Tween<f64> {
        let (from, to) = half.endpoints();
        Tween::new(from, to, half_period, Ease::Linear)
    }

    /// Advance by `dt`; returns how many times the direction flipped.
    ///
    /// Whole periods beyond the first two are counted without being stepped through.
    pub fn advance(&mut self, dt: Duration) -> u64 {
        let mut flips: u64 = 0;
        let mut left = dt;
        loop {
            left = self.tween.advance(left);
            if !self.tween.is_finished() {
                break;
            }
            self.half = self.half.flipped();
            self.tween = Self::tween_for(self.half, self.half_period);
            self.turns += 1;
            flips += 1;
            tracing::trace!(half = ?self.half, turns = self.turns, "pulse turned");

            let period = self.half_period.saturating_mul(2);
            let (periods, rest) = skip_whole_cycles(left, period);
            if periods > 0 {
                let skipped = u64::try_from(periods * 2).unwrap_or(u64::MAX);
                self.turns = self.turns.saturating_add(skipped);
                flips = flips.saturating_add(skipped);
                left = rest;
            }
            if left.is_zero() {
                break;
            }
        }
        flips
    }

    /// Current phase in `[0, 1]`.
    pub fn phase(&self) -> f64 {
        self.tween.value()
    }

    /// Half currently running.
    pub fn half(&self) -> PulseHalf {
        self.half
    }

    /// Total direction changes since start.
    pub fn turns(&self) -> u64 {
        self.turns
    }

    /// Current phase with derived scale and opacity.
    pub fn state(&self) -> PulseState {
        let phase = self.phase();
        PulseState {
            phase,
            scale: 1.0 + self.style.scale_gain * phase,
            opacity: self.style.base_opacity * (1.0 - phase),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/pulse.rs"]
mod tests;
