//! Catalog-driven estimator setup.

use estimate_catalog::{Catalog, CatalogResult};
use estimate_cost::CostEstimator;
use estimate_types::ElectricityRate;
use tracing::debug;

/// Tariff preset used when none is chosen.
pub const DEFAULT_RATE_PRESET: &str = "Standard Rate (0.34£/kWh)";

/// How the electricity tariff is picked.
#[derive(Debug, Clone, PartialEq)]
pub enum RateChoice {
    /// A catalog preset, by label.
    Preset(String),
    /// A price per kWh in the output currency.
    Custom(f64),
}

impl Default for RateChoice {
    fn default() -> Self {
        Self::Preset(DEFAULT_RATE_PRESET.to_string())
    }
}

/// Names of the catalog entries a job is priced with.
///
/// # Example
///
/// ```
/// use estimate::{Selection, catalog::builtin_catalog};
///
/// let estimator = Selection::new("PLA", "Bambu Lab", "A1")
///     .with_currency("usd")
///     .resolve(builtin_catalog().unwrap())
///     .unwrap();
/// assert_eq!(estimator.currency().code, "USD");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Material name.
    pub material: String,

    /// Printer manufacturer.
    pub make: String,

    /// Printer model.
    pub model: String,

    /// Electricity tariff.
    pub rate: RateChoice,

    /// Output currency code, or `None` for the catalog's base currency.
    pub currency: Option<String>,
}

impl Selection {
    /// Select a material and printer with the default tariff and currency.
    #[must_use]
    pub fn new(
        material: impl Into<String>,
        make: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            material: material.into(),
            make: make.into(),
            model: model.into(),
            rate: RateChoice::default(),
            currency: None,
        }
    }

    /// Use the catalog tariff with this label.
    #[must_use]
    pub fn with_rate_preset(mut self, label: impl Into<String>) -> Self {
        self.rate = RateChoice::Preset(label.into());
        self
    }

    /// Use a custom tariff, already in the output currency.
    #[must_use]
    pub fn with_custom_rate(mut self, per_kwh: f64) -> Self {
        self.rate = RateChoice::Custom(per_kwh);
        self
    }

    /// Price in the currency with this code.
    #[must_use]
    pub fn with_currency(mut self, code: impl Into<String>) -> Self {
        self.currency = Some(code.into());
        self
    }

    /// Look every name up in `catalog` and build an estimator.
    ///
    /// The estimator starts in hobby mode with the default markup; adjust
    /// it with its `with_*` methods.
    ///
    /// # Errors
    ///
    /// Returns [`estimate_catalog::CatalogLoadError::UnknownEntry`] if a
    /// name is not in the catalog.
    pub fn resolve(&self, catalog: &Catalog) -> CatalogResult<CostEstimator> {
        let material = catalog.material(&self.material)?.clone();
        let printer = catalog.printer(&self.make, &self.model)?.clone();
        let electricity = match &self.rate {
            RateChoice::Preset(label) => catalog.electricity_rate(label)?,
            RateChoice::Custom(per_kwh) => ElectricityRate::Custom(*per_kwh),
        };
        let currency = match &self.currency {
            Some(code) => catalog.currency(code)?,
            None => catalog.currency(catalog.base_currency())?,
        };

        debug!(
            material = %material.name,
            printer = %printer.label(),
            per_kwh = electricity.per_kwh(),
            currency = %currency.code,
            "Resolved selection"
        );

        Ok(CostEstimator::new(material, printer, electricity).with_currency(currency))
    }
}
