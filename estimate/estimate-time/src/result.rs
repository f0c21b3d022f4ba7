//! Print-time estimation results.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Intermediate quantities of the cuboid heuristic.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EstimateDetails {
    /// Number of layers (fractional, the heuristic does not round).
    pub layers: f64,

    /// Number of shells (perimeters).
    pub shells: u32,

    /// Extrusion width in mm.
    pub extrusion_width: f64,

    /// Volume of the outer walls in mm³.
    pub shell_volume_mm3: f64,

    /// Volume of the sparse infill in mm³.
    pub infill_volume_mm3: f64,

    /// Length of extruded path in mm.
    pub total_extrusion_mm: f64,
}

/// Output of [`crate::estimate_print_time`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrintTimeEstimate {
    /// Estimated duration in hours.
    pub print_time_hours: f64,

    /// Intermediate values.
    pub details: EstimateDetails,
}

/// Where a [`TimeEstimate`] came from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimeSource {
    /// The cuboid heuristic succeeded.
    Heuristic(EstimateDetails),

    /// Volume divided by a fixed throughput.
    Throughput {
        /// Throughput used, in cm³ per hour.
        cm3_per_hour: f64,
    },

    /// Supplied by the caller.
    Provided,

    /// The job has no volume and therefore takes no time.
    EmptyJob,

    /// The heuristic failed and the fallback duration was used.
    Fallback {
        /// Why the heuristic failed.
        reason: String,
    },
}

/// A print duration together with its provenance.
///
/// # Example
///
/// ```
/// use estimate_time::{estimate_or_fallback, FallbackPolicy};
/// use estimate_types::ProcessParameters;
///
/// let time = estimate_or_fallback(0.0, &ProcessParameters::default(), &FallbackPolicy::default());
/// assert!(time.is_fallback());
/// assert!((time.hours - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeEstimate {
    /// Duration in hours.
    pub hours: f64,

    /// How the duration was obtained.
    pub source: TimeSource,
}

impl TimeEstimate {
    /// Whether the fallback duration was used.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self.source, TimeSource::Fallback { .. })
    }

    /// Heuristic details, if the heuristic produced this estimate.
    #[must_use]
    pub const fn details(&self) -> Option<&EstimateDetails> {
        match &self.source {
            TimeSource::Heuristic(details) => Some(details),
            _ => None,
        }
    }

    /// Duration in minutes.
    #[must_use]
    pub fn minutes(&self) -> f64 {
        self.hours * 60.0
    }
}

impl From<PrintTimeEstimate> for TimeEstimate {
    fn from(estimate: PrintTimeEstimate) -> Self {
        Self {
            hours: estimate.print_time_hours,
            source: TimeSource::Heuristic(estimate.details),
        }
    }
}
