use std::time::Duration;

use smallvec::SmallVec;

use crate::animation::ease::Ease;
use crate::animation::tween::{Tween, skip_whole_cycles};
use crate::animation::waypoints::{WAYPOINT_COUNT, WaypointSet};
use crate::foundation::core::Point;
use crate::foundation::error::{SigninError, SigninResult};

/// Timing parameters for one corner-to-corner leg.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegTiming {
    /// Length of every leg. Must be non-zero.
    pub duration: Duration,
    /// Rotation added per leg, in degrees. Must be finite and >= 0.
    pub rotation_deg: f64,
    /// Easing of the translation.
    pub position_ease: Ease,
    /// Easing of the rotation.
    pub rotation_ease: Ease,
}

/// Live marker transform read by the view renderer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct MotionState {
    /// Current translation.
    pub position: Point,
    /// Cumulative rotation in degrees; grows without wrapping.
    pub rotation_deg: f64,
}

/// Emitted each time a leg completes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arrival {
    /// 1-based count of completed legs.
    pub leg: u64,
    /// Waypoint index the marker reached.
    pub waypoint: usize,
    /// Marker state at the instant of arrival.
    pub state: MotionState,
}

/// Translation and rotation of one leg, advanced together and joined on completion.
#[derive(Clone, Debug)]
struct Leg {
    target: usize,
    position: Tween<Point>,
    rotation: Tween<f64>,
}

impl Leg {
    fn new(from: Point, rotation: f64, target: usize, to: Point, timing: &LegTiming) -> Self {
        Self {
            target,
            position: Tween::new(from, to, timing.duration, timing.position_ease),
            rotation: Tween::new(
                rotation,
                rotation + timing.rotation_deg,
                timing.duration,
                timing.rotation_ease,
            ),
        }
    }

    fn advance(&mut self, dt: Duration) -> Duration {
        let left_pos = self.position.advance(dt);
        let left_rot = self.rotation.advance(dt);
        left_pos.min(left_rot)
    }

    fn is_finished(&self) -> bool {
        self.position.is_finished() && self.rotation.is_finished()
    }

    fn state(&self) -> MotionState {
        MotionState {
            position: self.position.value(),
            rotation_deg: self.rotation.value(),
        }
    }
}

/// Marker motion that cycles through the four waypoints forever.
///
/// There is no idle state: the marker starts at waypoint 0 already travelling to waypoint 1,
/// and every arrival immediately starts the leg to the following corner.
#[derive(Clone, Debug)]
pub struct CornerMotion {
    waypoints: WaypointSet,
    timing: LegTiming,
    leg: Leg,
    legs_completed: u64,
}

impl CornerMotion {
    /// Begin the first leg, from waypoint 0 towards waypoint 1, with zero rotation.
    pub fn start(waypoints: WaypointSet, timing: LegTiming) -> SigninResult<Self> {
        if timing.duration.is_zero() {
            return Err(SigninError::animation("leg duration must be > 0"));
        }
        if !timing.rotation_deg.is_finite() || timing.rotation_deg < 0.0 {
            return Err(SigninError::animation(
                "rotation per leg must be finite and >= 0",
            ));
        }
        let target = WaypointSet::next_index(0);
        let leg = Leg::new(waypoints.get(0), 0.0, target, waypoints.get(target), &timing);
        Ok(Self {
            waypoints,
            timing,
            leg,
            legs_completed: 0,
        })
    }

    /// Advance by `dt`, completing as many legs as `dt` covers.
    ///
    /// Arrivals are returned in the order they happened. A step spanning two or more full
    /// circuits skips the whole circuits in between: they count towards
    /// [`CornerMotion::legs_completed`] and the rotation, but are not reported, so at most nine
    /// arrivals come back from one call.
    pub fn advance(&mut self, dt: Duration) -> SmallVec<[Arrival; 2]> {
        let mut arrivals = SmallVec::new();
        let mut left = dt;
        loop {
            left = self.leg.advance(left);
            if !self.leg.is_finished() {
                break;
            }

            let reached = self.leg.state();
            self.legs_completed = self.legs_completed.saturating_add(1);
            arrivals.push(Arrival {
                leg: self.legs_completed,
                waypoint: self.leg.target,
                state: reached,
            });
            tracing::debug!(
                leg = self.legs_completed,
                waypoint = self.leg.target,
                rotation_deg = reached.rotation_deg,
                "marker reached corner"
            );

            let mut rotation = reached.rotation_deg;
            let circuit = self.timing.duration.saturating_mul(WAYPOINT_COUNT as u32);
            let (circuits, rest) = skip_whole_cycles(left, circuit);
            if circuits > 0 {
                let legs = circuits * WAYPOINT_COUNT as u128;
                let skipped_legs = u64::try_from(legs).unwrap_or(u64::MAX);
                self.legs_completed = self.legs_completed.saturating_add(skipped_legs);
                rotation += self.timing.rotation_deg * legs as f64;
                left = rest;
                tracing::debug!(
                    skipped_legs,
                    legs_completed = self.legs_completed,
                    "marker skipped whole circuits"
                );
            }

            let next = WaypointSet::next_index(self.leg.target);
            self.leg = Leg::new(
                reached.position,
                rotation,
                next,
                self.waypoints.get(next),
                &self.timing,
            );
            if left.is_zero() {
                break;
            }
        }
        arrivals
    }

    /// Current interpolated transform.
    pub fn state(&self) -> MotionState {
        self.leg.state()
    }

    /// Waypoint index of the leg in flight.
    pub fn target_index(&self) -> usize {
        self.leg.target
    }

    /// Number of legs completed since start.
    pub fn legs_completed(&self) -> u64 {
        self.legs_completed
    }

    /// The corner set this motion travels between.
    pub fn waypoints(&self) -> &WaypointSet {
        &self.waypoints
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/corner.rs"]
mod tests;
