//! Divergence report between the catalog and a second printer power table.
//!
//! Two printer tables have been in circulation: the full profile table the
//! builtin catalog is built from, and an older power-only table. Neither
//! is declared canonical here; this module only lists where they disagree
//! so the catalog owner can reconcile them.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::warn;

use crate::Catalog;
use crate::error::{CatalogLoadError, CatalogResult};

/// Power-only printer table bundled with the crate.
const LEGACY_POWER_JSON: &str = include_str!("../data/power-table.json");

/// Power tolerance in watts below which two figures agree.
const POWER_TOLERANCE_WATTS: f64 = 1e-6;

/// Printer power table: make → model → average watts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PowerTable {
    entries: BTreeMap<String, BTreeMap<String, f64>>,
}

impl PowerTable {
    /// The power-only table bundled with the crate.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled data is broken.
    pub fn legacy() -> CatalogResult<Self> {
        Self::from_json_str(LEGACY_POWER_JSON)
    }

    /// Parse a power table from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogLoadError::Parse`] for malformed JSON and
    /// [`CatalogLoadError::InvalidEntry`] for non-positive power figures.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        Self::validated(serde_json::from_str(json)?)
    }

    /// Load a power table from a file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogLoadError::Io`] if the file cannot be read, otherwise
    /// as [`PowerTable::from_json_str`].
    pub fn load_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let entries = {
            let file = File::open(path).map_err(|source| CatalogLoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            serde_json::from_reader(BufReader::new(file))?
        };
        Self::validated(entries)
    }

    fn validated(entries: BTreeMap<String, BTreeMap<String, f64>>) -> CatalogResult<Self> {
        for (make, models) in &entries {
            for (model, watts) in models {
                if !(watts.is_finite() && *watts > 0.0) {
                    return Err(CatalogLoadError::invalid_entry(
                        format!("{make}.{model}"),
                        format!("power must be > 0, got {watts}"),
                    ));
                }
            }
        }
        Ok(Self { entries })
    }

    /// Power of one model, if listed.
    #[must_use]
    pub fn power(&self, make: &str, model: &str) -> Option<f64> {
        self.entries.get(make)?.get(model).copied()
    }

    /// Number of models in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    /// Whether the table lists no model.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// How a printer differs between the catalog and a power table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Divergence {
    /// Both list the printer with different power figures.
    PowerMismatch {
        /// Watts in the catalog.
        catalog_watts: f64,
        /// Watts in the power table.
        table_watts: f64,
    },
    /// Only the power table lists the printer.
    MissingFromCatalog,
    /// Only the catalog lists the printer.
    MissingFromTable,
}

/// One diverging printer.
#[derive(Debug, Clone, PartialEq)]
pub struct PrinterDivergence {
    /// Manufacturer.
    pub make: String,
    /// Model.
    pub model: String,
    /// What differs.
    pub divergence: Divergence,
}

/// List every printer on which `catalog` and `table` disagree.
///
/// Each divergence is also logged at `warn` level.
///
/// # Example
///
/// ```
/// use estimate_catalog::{diverging_printers, Catalog, PowerTable};
///
/// let catalog = Catalog::builtin().unwrap();
/// let table = PowerTable::legacy().unwrap();
/// assert!(diverging_printers(&catalog, &table).is_empty());
/// ```
#[must_use]
pub fn diverging_printers(catalog: &Catalog, table: &PowerTable) -> Vec<PrinterDivergence> {
    let mut found = Vec::new();

    for profile in catalog.printers() {
        let divergence = match table.power(&profile.make, &profile.model) {
            None => Some(Divergence::MissingFromTable),
            Some(watts) if (watts - profile.avg_power_watts).abs() > POWER_TOLERANCE_WATTS => {
                Some(Divergence::PowerMismatch {
                    catalog_watts: profile.avg_power_watts,
                    table_watts: watts,
                })
            }
            Some(_) => None,
        };
        if let Some(divergence) = divergence {
            found.push(PrinterDivergence {
                make: profile.make.clone(),
                model: profile.model.clone(),
                divergence,
            });
        }
    }

    for (make, models) in &table.entries {
        for model in models.keys() {
            if catalog.printer(make, model).is_err() {
                found.push(PrinterDivergence {
                    make: make.clone(),
                    model: model.clone(),
                    divergence: Divergence::MissingFromCatalog,
                });
            }
        }
    }

    for d in &found {
        warn!(make = %d.make, model = %d.model, divergence = ?d.divergence, "Printer tables disagree");
    }

    found
}
