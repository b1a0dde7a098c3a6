/// Easing curves used by the background motions.
///
/// Every curve maps `[0, 1]` onto `[0, 1]`, fixes both endpoints, and is non-decreasing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Constant velocity.
    Linear,
    /// Accelerating curve, cubic Bézier `(0.42, 0.0, 1.0, 1.0)`.
    EaseIn,
    /// [`Ease::EaseIn`] run forwards then mirrored (slow start, slow finish).
    #[default]
    InOutEaseIn,
    /// Symmetric quadratic ease-in-out.
    InOutQuad,
    /// Symmetric cubic ease-in-out.
    InOutCubic,
}

const EASE_IN: CubicBezier = CubicBezier::new(0.42, 0.0, 1.0, 1.0);

impl Ease {
    /// Map linear progress `t` to eased progress. Input is clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::EaseIn => EASE_IN.solve(t),
            Self::InOutEaseIn => in_out(t, |x| EASE_IN.solve(x)),
            Self::InOutQuad => in_out(t, |x| x * x),
            Self::InOutCubic => in_out(t, |x| x * x * x),
        }
    }
}

/// Run `f` forwards over the first half and mirrored over the second.
fn in_out(t: f64, f: impl Fn(f64) -> f64) -> f64 {
    if t < 0.5 {
        f(t * 2.0) / 2.0
    } else {
        1.0 - f((1.0 - t) * 2.0) / 2.0
    }
}

/// Unit cubic Bézier with fixed endpoints `(0,0)` and `(1,1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    const NEWTON_ITERATIONS: usize = 8;
    const NEWTON_MIN_SLOPE: f64 = 1e-3;
    const EPSILON: f64 = 1e-7;
    const BISECT_ITERATIONS: usize = 40;

    pub(crate) const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn coord(t: f64, p1: f64, p2: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    }

    fn slope(t: f64, p1: f64, p2: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
    }

    /// Curve parameter whose x coordinate equals `x`.
    fn param_for_x(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..Self::NEWTON_ITERATIONS {
            let dx = Self::coord(t, self.x1, self.x2) - x;
            if dx.abs() < Self::EPSILON {
                return t;
            }
            let d = Self::slope(t, self.x1, self.x2);
            if d.abs() < Self::NEWTON_MIN_SLOPE {
                break;
            }
            t = (t - dx / d).clamp(0.0, 1.0);
        }

        // Newton stalled on a flat region; x(t) is monotone for x1,x2 in [0,1].
        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..Self::BISECT_ITERATIONS {
            let cx = Self::coord(t, self.x1, self.x2);
            if (cx - x).abs() < Self::EPSILON {
                break;
            }
            if cx < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    pub(crate) fn solve(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        let t = self.param_for_x(x).clamp(0.0, 1.0);
        Self::coord(t, self.y1, self.y2)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
