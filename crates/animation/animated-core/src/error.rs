//! Error types for the animation core

use serde::{Deserialize, Serialize};

/// Failures surfaced at the edges of the core.
///
/// Advancing a transition never fails; errors only come from building a
/// transition with missing parameters or from converting untrusted time
/// values into [`Millis`](crate::time::Millis).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AnimationError {
    /// `build()` was called before `to` or `by`
    #[error("Transition has no end value: call `to` or `by` before `build`")]
    MissingEnd,

    /// `build()` was called before `during`
    #[error("Transition has no duration: call `during` before `build`")]
    MissingDuration,

    /// A time delta below zero
    #[error("Negative time delta: {delta} ms")]
    NegativeDelta { delta: i64 },

    /// A time delta that does not fit the millisecond range
    #[error("Time delta out of range: {delta} ms")]
    DeltaOverflow { delta: i64 },

    /// Invalid configuration value
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic animation error
    #[error("Animation error: {message}")]
    Generic { message: String },
}

impl AnimationError {
    /// Create a new generic error
    pub fn new(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }

    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::MissingEnd | Self::MissingDuration => "builder",
            Self::NegativeDelta { .. } | Self::DeltaOverflow { .. } => "time",
            Self::InvalidConfig { .. } => "config",
            Self::SerializationError { .. } => "serialization",
            Self::Generic { .. } => "generic",
        }
    }
}

impl From<serde_json::Error> for AnimationError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            reason: err.to_string(),
        }
    }
}
