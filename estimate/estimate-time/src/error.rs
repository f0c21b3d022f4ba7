//! Error types for print-time estimation.

use thiserror::Error;

/// Result type for print-time estimation.
pub type EstimationResult<T> = Result<T, EstimationError>;

/// The geometry/parameter combination has no physical interpretation.
///
/// These errors are recoverable: callers usually fall back to a default
/// duration (see [`crate::estimate_or_fallback`]).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimationError {
    /// Volume is zero, negative or not finite.
    #[error("volume must be > 0 mm³, got {volume_mm3}")]
    NonPositiveVolume {
        /// Offending volume in mm³.
        volume_mm3: f64,
    },

    /// A process parameter is out of range.
    #[error("invalid {name} = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
        /// Constraint that was violated.
        reason: &'static str,
    },

    /// The shells alone need more material than the model holds.
    #[error(
        "shell volume {shell_volume_mm3:.1} mm³ exceeds model volume {volume_mm3:.1} mm³ \
         (part too thin for {shells} shell(s))"
    )]
    NegativeInteriorVolume {
        /// Model volume in mm³.
        volume_mm3: f64,
        /// Estimated shell volume in mm³.
        shell_volume_mm3: f64,
        /// Number of shells.
        shells: u32,
    },

    /// The computation overflowed or produced NaN.
    #[error("estimate is not finite")]
    NonFiniteResult,
}

impl EstimationError {
    /// Create an `InvalidParameter` error.
    #[must_use]
    pub const fn invalid_parameter(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}
