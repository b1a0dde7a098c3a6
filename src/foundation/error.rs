/// Result of fallible screen and animation setup.
pub type SigninResult<T> = Result<T, SigninError>;

/// Why mounting the screen or starting its motions failed.
///
/// Form rejections are not errors; they are returned as
/// [`crate::ValidationResult::Rejected`] values.
#[derive(thiserror::Error, Debug)]
pub enum SigninError {
    /// A tunable or the viewport is out of range.
    #[error("config error: {0}")]
    Config(String),

    /// A motion was started with unusable timing.
    #[error("animation error: {0}")]
    Animation(String),

    /// A config document could not be parsed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Failure reported by a caller-supplied source, such as reading a config file.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SigninError {
    /// Build a [`SigninError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`SigninError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`SigninError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for SigninError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
