//! Time models and the fallback policy.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use estimate_types::ProcessParameters;
use estimate_types::units::cm3_to_mm3;
use tracing::warn;

use crate::error::{EstimationError, EstimationResult};
use crate::estimator::estimate_print_time;
use crate::result::{TimeEstimate, TimeSource};

/// Duration used when the heuristic cannot produce an estimate, in hours.
pub const DEFAULT_FALLBACK_HOURS: f64 = 1.0;

/// Volume printed per hour by the throughput model, in cm³/h.
pub const DEFAULT_THROUGHPUT_CM3_PER_HOUR: f64 = 11.0;

/// What to do when an estimate fails.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FallbackPolicy {
    /// Duration substituted for a failed estimate, in hours.
    pub fallback_hours: f64,
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self {
            fallback_hours: DEFAULT_FALLBACK_HOURS,
        }
    }
}

impl FallbackPolicy {
    /// Use `hours` as the fallback duration.
    #[must_use]
    pub const fn with_fallback_hours(mut self, hours: f64) -> Self {
        self.fallback_hours = hours;
        self
    }

    fn apply(&self, error: &EstimationError) -> TimeEstimate {
        warn!(
            error = %error,
            fallback_hours = self.fallback_hours,
            "Print-time estimate failed; using fallback duration"
        );
        TimeEstimate {
            hours: self.fallback_hours,
            source: TimeSource::Fallback {
                reason: error.to_string(),
            },
        }
    }
}

/// Run the heuristic and fall back to `policy` on failure.
///
/// Never fails: an [`EstimationError`] is logged at `warn` level and turned
/// into a [`TimeSource::Fallback`] estimate.
#[must_use]
pub fn estimate_or_fallback(
    volume_mm3: f64,
    params: &ProcessParameters,
    policy: &FallbackPolicy,
) -> TimeEstimate {
    match estimate_print_time(volume_mm3, params) {
        Ok(estimate) => estimate.into(),
        Err(error) => policy.apply(&error),
    }
}

/// Print time as volume over a fixed throughput.
///
/// This is the quick estimate used when no process parameters are known.
/// A zero volume takes zero time.
///
/// # Errors
///
/// Returns [`EstimationError::InvalidParameter`] for a negative volume or a
/// non-positive throughput.
///
/// # Example
///
/// ```
/// use estimate_time::{throughput_print_time, DEFAULT_THROUGHPUT_CM3_PER_HOUR};
///
/// let time = throughput_print_time(22.0, DEFAULT_THROUGHPUT_CM3_PER_HOUR).unwrap();
/// assert!((time.hours - 2.0).abs() < 1e-12);
/// ```
pub fn throughput_print_time(volume_cm3: f64, cm3_per_hour: f64) -> EstimationResult<TimeEstimate> {
    if !(volume_cm3.is_finite() && volume_cm3 >= 0.0) {
        return Err(EstimationError::invalid_parameter(
            "volume_cm3",
            volume_cm3,
            "must be >= 0",
        ));
    }
    if !(cm3_per_hour.is_finite() && cm3_per_hour > 0.0) {
        return Err(EstimationError::invalid_parameter(
            "cm3_per_hour",
            cm3_per_hour,
            "must be > 0",
        ));
    }
    Ok(TimeEstimate {
        hours: volume_cm3 / cm3_per_hour,
        source: TimeSource::Throughput { cm3_per_hour },
    })
}

/// How a pipeline turns a volume into a duration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimeModel {
    /// The cuboid heuristic with these process parameters.
    Heuristic(ProcessParameters),

    /// Volume over a fixed throughput in cm³/h.
    Throughput(f64),

    /// A duration known in advance (e.g. from a slicer), in hours.
    Fixed(f64),
}

impl Default for TimeModel {
    fn default() -> Self {
        Self::Heuristic(ProcessParameters::default())
    }
}

impl TimeModel {
    /// Estimate the print time of `volume_cm3`, falling back on failure.
    ///
    /// An empty job (zero volume) takes zero time under the heuristic and
    /// throughput models.
    #[must_use]
    pub fn estimate(&self, volume_cm3: f64, policy: &FallbackPolicy) -> TimeEstimate {
        let result = match self {
            Self::Heuristic(_) | Self::Throughput(_) if volume_cm3.abs() < f64::EPSILON => {
                Ok(TimeEstimate {
                    hours: 0.0,
                    source: TimeSource::EmptyJob,
                })
            }
            Self::Heuristic(params) => {
                estimate_print_time(cm3_to_mm3(volume_cm3), params).map(TimeEstimate::from)
            }
            Self::Throughput(cm3_per_hour) => throughput_print_time(volume_cm3, *cm3_per_hour),
            Self::Fixed(hours) if hours.is_finite() && *hours >= 0.0 => Ok(TimeEstimate {
                hours: *hours,
                source: TimeSource::Provided,
            }),
            Self::Fixed(hours) => Err(EstimationError::invalid_parameter(
                "print_time_hours",
                *hours,
                "must be >= 0",
            )),
        };
        result.unwrap_or_else(|error| policy.apply(&error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn fallback_on_failure() {
        let policy = FallbackPolicy::default();
        let thin = ProcessParameters::default().with_shell_thickness(4.0);
        let time = estimate_or_fallback(1000.0, &thin, &policy);

        assert!(time.is_fallback());
        assert_relative_eq!(time.hours, DEFAULT_FALLBACK_HOURS);
        match time.source {
            TimeSource::Fallback { reason } => assert!(reason.contains("shell volume")),
            other => panic!("unexpected source {other:?}"),
        }
    }

    #[test]
    fn custom_fallback_duration() {
        let policy = FallbackPolicy::default().with_fallback_hours(3.5);
        let time = estimate_or_fallback(-1.0, &ProcessParameters::default(), &policy);
        assert_relative_eq!(time.hours, 3.5);
    }

    #[test]
    fn success_keeps_details() {
        let time = estimate_or_fallback(8000.0, &ProcessParameters::default(), &FallbackPolicy::default());
        assert!(!time.is_fallback());
        assert_eq!(time.details().map(|d| d.shells), Some(2));
        assert_relative_eq!(time.minutes(), time.hours * 60.0);
    }

    #[test]
    fn throughput_model() {
        let time = throughput_print_time(5.5, 11.0).unwrap();
        assert_relative_eq!(time.hours, 0.5);
        assert!(throughput_print_time(0.0, 11.0).is_ok());
        assert!(throughput_print_time(-1.0, 11.0).is_err());
        assert!(throughput_print_time(1.0, 0.0).is_err());
    }

    #[test]
    fn model_heuristic_converts_to_mm3() {
        let time = TimeModel::default().estimate(8.0, &FallbackPolicy::default());
        assert_relative_eq!(time.hours, 0.288_490_617_283_950_6, epsilon = 1e-9);
    }

    #[test]
    fn model_empty_job_takes_no_time() {
        let policy = FallbackPolicy::default();
        for model in [TimeModel::default(), TimeModel::Throughput(11.0)] {
            let time = model.estimate(0.0, &policy);
            assert_eq!(time.source, TimeSource::EmptyJob);
            assert_relative_eq!(time.hours, 0.0);
        }
    }

    #[test]
    fn model_fixed_duration() {
        let policy = FallbackPolicy::default();
        let time = TimeModel::Fixed(2.75).estimate(100.0, &policy);
        assert_eq!(time.source, TimeSource::Provided);
        assert_relative_eq!(time.hours, 2.75);

        assert!(TimeModel::Fixed(-1.0).estimate(100.0, &policy).is_fallback());
    }

    #[test]
    fn model_throughput_falls_back_on_bad_rate() {
        let time = TimeModel::Throughput(0.0).estimate(10.0, &FallbackPolicy::default());
        assert!(time.is_fallback());
    }
}
