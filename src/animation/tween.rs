use std::time::Duration;

use crate::animation::ease::Ease;
use crate::foundation::core::Point;

/// Interpolation contract for tweened value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a.lerp(*b, t)
    }
}

/// A single timed interpolation from `from` to `to`.
///
/// Once finished, [`Tween::value`] returns `to` exactly, never a lerped approximation.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween<T> {
    from: T,
    to: T,
    duration: Duration,
    ease: Ease,
    elapsed: Duration,
}

impl<T> Tween<T>
where
    T: Lerp + Clone,
{
    /// Start a tween at progress 0.
    pub fn new(from: T, to: T, duration: Duration, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration,
            ease,
            elapsed: Duration::ZERO,
        }
    }

    /// Linear progress in `[0, 1]`. A zero-length tween is always complete.
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() || self.elapsed >= self.duration {
            return 1.0;
        }
        self.elapsed.as_secs_f64() / self.duration.as_secs_f64()
    }

    /// True once the full duration has elapsed.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Current eased value.
    pub fn value(&self) -> T {
        if self.is_finished() {
            return self.to.clone();
        }
        T::lerp(&self.from, &self.to, self.ease.apply(self.progress()))
    }

    /// End value.
    pub fn target(&self) -> &T {
        &self.to
    }

    /// Advance by `dt` and return the part of `dt` left over past completion.
    pub fn advance(&mut self, dt: Duration) -> Duration {
        let remaining = self.duration.saturating_sub(self.elapsed);
        if dt >= remaining {
            self.elapsed = self.duration;
            dt - remaining
        } else {
            self.elapsed += dt;
            Duration::ZERO
        }
    }
}

/// Split `left` into whole `cycle`s to skip, keeping between one and two cycles to step through.
///
/// Returns `(0, left)` when `left` spans fewer than two cycles.
pub(crate) fn skip_whole_cycles(left: Duration, cycle: Duration) -> (u128, Duration) {
    let cycle_ns = cycle.as_nanos();
    let left_ns = left.as_nanos();
    if cycle_ns == 0 || left_ns < cycle_ns * 2 {
        return (0, left);
    }
    let skipped = left_ns / cycle_ns - 1;
    let rest = left_ns % cycle_ns + cycle_ns;
    // `rest <= left`, so it fits back into a `Duration`.
    let rest = Duration::new(
        (rest / 1_000_000_000) as u64,
        (rest % 1_000_000_000) as u32,
    );
    (skipped, rest)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
