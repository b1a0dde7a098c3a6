use crate::foundation::error::{SigninError, SigninResult};

pub use kurbo::{Point, Vec2};

/// Window dimensions captured when the screen is mounted.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in layout units.
    pub width: f64,
    /// Height in layout units.
    pub height: f64,
}

impl Viewport {
    /// Build a viewport, rejecting negative or non-finite sides.
    pub fn new(width: f64, height: f64) -> SigninResult<Self> {
        if !width.is_finite() || !height.is_finite() {
            return Err(SigninError::config("viewport sides must be finite"));
        }
        if width < 0.0 || height < 0.0 {
            return Err(SigninError::config("viewport sides must be >= 0"));
        }
        Ok(Self { width, height })
    }

    /// True when either side has no extent.
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
