//! Cost and business pricing for 3D print jobs.
//!
//! Two layers:
//!
//! - **Formulas**: [`material_cost`], [`energy_cost`] and [`total_cost`]
//!   (rounded to 4 decimal places), plus the business stages
//!   [`depreciation`], [`labour`], [`apply_fail_rate`] and
//!   [`final_business_price`] (unrounded).
//! - **Pipeline**: [`CostEstimator`] resolves a material, printer and tariff
//!   into the output currency, estimates the print time and returns a
//!   [`CostBreakdown`] for each job.
//!
//! Negative or NaN quantities are rejected with
//! [`PricingError::InvalidInput`]; nothing is clamped.
//!
//! # Business pipeline
//!
//! ```text
//! base     = material + energy + depreciation + labour
//! adjusted = base / (1 - fail% / 100) + shipping
//! final    = adjusted × (1 + markup% / 100)
//! ```
//!
//! A failure rate of 100 % yields an infinite price.
//!
//! # Example
//!
//! ```
//! use estimate_cost::{BusinessParams, CostEstimator, PricingMode};
//! use estimate_time::TimeModel;
//! use estimate_types::{ElectricityRate, Material, PrintJobGeometry, PrinterProfile};
//!
//! let estimator = CostEstimator::new(
//!     Material::new("PETG", 1.27, 22.0),
//!     PrinterProfile::new("Prusa Research", "MK4").with_costs(1000.0, 0.0, 0.0),
//!     ElectricityRate::preset("Standard Variable", 0.34),
//! )
//! .with_time_model(TimeModel::Throughput(11.0))
//! .with_mode(PricingMode::Business(
//!     BusinessParams::default().with_hourly_rate(15.0).with_fail_rate_pct(5.0),
//! ));
//!
//! let job = estimator.estimate_job(&PrintJobGeometry::from_volume_cm3(33.0)).unwrap();
//! assert!((job.time.hours - 3.0).abs() < 1e-9);
//! assert!(job.breakdown.total_cost > job.breakdown.base_cost());
//! ```
//!
//! # Features
//!
//! - `serde`: serialize parameters and results.
//! - `parallel`: run [`CostEstimator::estimate_batch`] on the rayon pool.

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod business;
mod calculator;
mod error;
mod params;
mod pipeline;

pub use business::{apply_fail_rate, depreciation, final_business_price, labour};
pub use calculator::{energy_cost, material_cost, total_cost};
pub use error::{PricingError, PricingResult};
pub use estimate_types::CostBreakdown;
pub use params::{BusinessParams, CustomOverrides, PricingMode};
pub use pipeline::{CostEstimator, DEFAULT_MARKUP_PCT, JobEstimate, JobInputs, price_job};
