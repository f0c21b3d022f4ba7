//! Catalog of materials, printers, electricity tariffs and currencies.
//!
//! The catalog is static configuration: it is loaded once per process
//! from a declarative JSON source and is read-only afterwards. A missing
//! or malformed source is a fatal configuration error
//! ([`CatalogLoadError`]), never a per-request failure.
//!
//! # Schema
//!
//! ```json
//! {
//!   "currency": "GBP",
//!   "materials": { "PLA": { "density_g_cm3": 1.24, "cost_per_kg": 25.0, "diameters": [1.75] } },
//!   "printers": { "Bambu Lab": { "A1": { "cost": 499, "upgrades": 50, "maintenance": 50,
//!                                        "lifetime_hours": 5000, "avg_power_watts": 100 } } },
//!   "electricity_rates": { "Standard Rate (0.34£/kWh)": 0.34 },
//!   "currencies": { "USD": { "symbol": "$", "rate": 1.27 } }
//! }
//! ```
//!
//! All prices are quoted in `currency`. Only `materials` is required.
//!
//! # Example
//!
//! ```
//! use estimate_catalog::get_materials;
//!
//! let materials = get_materials().unwrap();
//! assert!(materials.contains_key("PETG"));
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod catalog;
mod error;
mod reconcile;
mod schema;

use std::collections::BTreeMap;
use std::sync::OnceLock;

use estimate_types::Material;

pub use catalog::Catalog;
pub use error::{CatalogLoadError, CatalogResult};
pub use reconcile::{Divergence, PowerTable, PrinterDivergence, diverging_printers};

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

/// The bundled catalog, parsed on first use and shared for the process lifetime.
///
/// # Errors
///
/// Returns the load error if the bundled data is broken; nothing is cached
/// in that case.
pub fn builtin_catalog() -> CatalogResult<&'static Catalog> {
    if let Some(catalog) = BUILTIN.get() {
        return Ok(catalog);
    }
    let catalog = Catalog::builtin()?;
    Ok(BUILTIN.get_or_init(|| catalog))
}

/// Materials of the bundled catalog keyed by name.
///
/// # Errors
///
/// See [`builtin_catalog`].
pub fn get_materials() -> CatalogResult<&'static BTreeMap<String, Material>> {
    builtin_catalog().map(Catalog::materials)
}
