//! 3D print cost and time estimation.
//!
//! This umbrella crate re-exports the estimate-* crates and adds
//! [`Selection`], which builds a [`cost::CostEstimator`] from catalog names.
//!
//! # Quick Start
//!
//! ```
//! use estimate::prelude::*;
//!
//! let catalog = builtin_catalog().unwrap();
//! let estimator = Selection::new("PETG", "Prusa Research", "Prusa MK4")
//!     .with_rate_preset("Economy 7 Night (0.20£/kWh)")
//!     .resolve(catalog)
//!     .unwrap()
//!     .with_markup_pct(30.0);
//!
//! let job = estimator
//!     .estimate_job(&PrintJobGeometry::from_volume_cm3(25.0))
//!     .unwrap();
//! println!("{}", job.breakdown.summary());
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Value types: `Material`, `PrinterProfile`, `CostBreakdown`, units
//! - [`catalog`] - JSON catalog of materials, printers, tariffs and currencies
//! - [`time`] - Print-time heuristic and fallback policy
//! - [`cost`] - Cost formulas, business pricing and the job pipeline
//!
//! # Feature Flags
//!
//! - `serde` (default) - Serialize parameters and results
//! - `parallel` - Price batches on the rayon thread pool

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

mod selection;

// =============================================================================
// Re-exports
// =============================================================================

/// Value types, units and rounding.
pub use estimate_types as types;

/// Material, printer, tariff and currency catalog.
pub use estimate_catalog as catalog;

/// Print-time heuristic and fallback policy.
pub use estimate_time as time;

/// Cost formulas, business pricing and the job pipeline.
pub use estimate_cost as cost;

pub use selection::{DEFAULT_RATE_PRESET, RateChoice, Selection};

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for estimating print jobs.
///
/// # Usage
///
/// ```
/// use estimate::prelude::*;
/// ```
pub mod prelude {
    // Value types
    pub use estimate_types::{
        BoundingBox, CostBreakdown, Currency, ElectricityRate, Material, PrintJobGeometry,
        PrinterProfile, ProcessParameters,
    };

    // Catalog
    pub use estimate_catalog::{Catalog, CatalogLoadError, builtin_catalog};

    // Time
    pub use estimate_time::{EstimationError, FallbackPolicy, TimeEstimate, TimeModel, TimeSource};

    // Pricing
    pub use estimate_cost::{
        BusinessParams, CostEstimator, CustomOverrides, JobEstimate, PricingError, PricingMode,
    };

    // Setup
    pub use crate::{RateChoice, Selection};
}
