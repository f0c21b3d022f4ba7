//! Heuristic print-time estimation for FDM printing.
//!
//! Turns a solid volume and a set of [`ProcessParameters`] into a duration.
//! The model approximates the part as a cube of equal volume, so it is a
//! quick ballpark figure rather than a slicer-grade prediction.
//!
//! # Algorithm
//!
//! 1. extrusion width = 1.2 × nozzle diameter
//! 2. shells = round(shell thickness / extrusion width), ties to even
//! 3. cube side = ∛volume, layers = side / layer height
//! 4. shell volume = 6 × side² × extrusion width × shells
//! 5. infill volume = (volume − shell volume) × infill %
//! 6. path length = (shell + infill volume) / (extrusion width × layer height)
//! 7. time = (path / speed × (1 + 30/accel + 2/jerk) + 2 × layers / retract speed)
//! 8. +10 % for travel moves
//!
//! A negative interior volume (part thinner than its shells) is reported as
//! [`EstimationError::NegativeInteriorVolume`], never clamped.
//!
//! # Fallback
//!
//! [`estimate_or_fallback`] and [`TimeModel::estimate`] never fail: on an
//! [`EstimationError`] they log a warning and substitute
//! [`FallbackPolicy::fallback_hours`] (1 hour by default).
//!
//! # Example
//!
//! ```
//! use estimate_time::{estimate_print_time, EstimationError};
//! use estimate_types::ProcessParameters;
//!
//! let params = ProcessParameters::default();
//! let estimate = estimate_print_time(27_000.0, &params).unwrap();
//! println!("{:.2} h over {:.0} layers", estimate.print_time_hours, estimate.details.layers);
//!
//! let thin = params.with_shell_thickness(4.0);
//! assert!(matches!(
//!     estimate_print_time(1000.0, &thin),
//!     Err(EstimationError::NegativeInteriorVolume { .. })
//! ));
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod estimator;
mod fallback;
mod result;

pub use error::{EstimationError, EstimationResult};
pub use estimate_types::ProcessParameters;
pub use estimator::{TRAVEL_OVERHEAD, estimate_print_time};
pub use fallback::{
    DEFAULT_FALLBACK_HOURS, DEFAULT_THROUGHPUT_CM3_PER_HOUR, FallbackPolicy, TimeModel,
    estimate_or_fallback, throughput_print_time,
};
pub use result::{EstimateDetails, PrintTimeEstimate, TimeEstimate, TimeSource};
