//! Value types shared by the print cost and time estimators.
//!
//! This crate provides the plain data the estimation crates exchange:
//!
//! - [`Material`] - Filament density, price and available diameters
//! - [`PrinterProfile`] - Printer hardware cost, lifetime and power draw
//! - [`ElectricityRate`] - Preset or custom price per kWh
//! - [`Currency`] - Display symbol and fixed conversion multiplier
//! - [`PrintJobGeometry`] / [`BoundingBox`] - Facts supplied by a mesh loader
//! - [`ProcessParameters`] - Slicer-style settings for the time heuristic
//! - [`CostBreakdown`] - Result of a priced job
//!
//! # Layer 0 Crate
//!
//! No I/O and no logging happen here. Every type is a value object that is
//! `Send + Sync`, so independent jobs can be estimated from any thread.
//!
//! # Units
//!
//! Volumes are cm³ unless a name says `mm3`. Lengths are mm, speeds mm/s,
//! power W, time hours. Money is whatever currency the caller chose; the
//! [`units`] module holds the conversions and the rounding policy.
//!
//! # Example
//!
//! ```
//! use estimate_types::{BoundingBox, PrintJobGeometry};
//!
//! let job = PrintJobGeometry::new(8.0, BoundingBox::new(20.0, 20.0, 20.0));
//! assert!((job.volume_mm3() - 8000.0).abs() < 1e-9);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod breakdown;
mod currency;
mod electricity;
mod geometry;
mod material;
mod printer;
mod process;
pub mod units;

pub use breakdown::CostBreakdown;
pub use currency::Currency;
pub use electricity::ElectricityRate;
pub use geometry::{BoundingBox, PrintJobGeometry};
pub use material::Material;
pub use printer::PrinterProfile;
pub use process::ProcessParameters;
