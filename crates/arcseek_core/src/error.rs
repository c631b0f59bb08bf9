//! Error types for arcseek_core

use thiserror::Error;

/// Configuration errors raised when a setter or constructor receives a value
/// the range engine cannot work with.
///
/// Touches that fall outside the track or would break thumb ordering are not
/// errors; they are ignored and reported through [`crate::Response`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RangeError {
    /// `max_progress` must be strictly positive
    #[error("max progress must be greater than zero, got {0}")]
    InvalidMaxProgress(i32),

    /// `min_thumb_difference` must not be negative
    #[error("min thumb difference must not be negative, got {0}")]
    NegativeMinThumbDifference(i32),

    /// An angle setting was NaN or infinite
    #[error("{name} must be a finite angle, got {value}")]
    NonFiniteAngle {
        /// Which setting was rejected
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Control or thumb dimensions were negative or not finite
    #[error("Invalid metrics: {0}")]
    InvalidMetrics(String),
}

/// Result type for arcseek_core operations
pub type Result<T> = std::result::Result<T, RangeError>;
