//! Printer hardware profile.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A fully resolved printer profile.
///
/// Catalog profiles are static defaults. A caller who customises any field
/// supplies a whole replacement profile; profiles are never merged field
/// by field.
///
/// # Example
///
/// ```
/// use estimate_types::PrinterProfile;
///
/// let mk4 = PrinterProfile::new("Prusa Research", "Prusa MK4")
///     .with_costs(799.0, 100.0, 75.0)
///     .with_lifetime_hours(5000.0)
///     .with_power_watts(90.0);
///
/// assert!((mk4.hardware_cost() - 974.0).abs() < 1e-9);
/// assert_eq!(mk4.label(), "Prusa Research Prusa MK4");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrinterProfile {
    /// Manufacturer.
    pub make: String,

    /// Model name, a single model (never a grouped display label).
    pub model: String,

    /// Purchase price.
    pub purchase_cost: f64,

    /// Planned upgrade spend over the printer's life.
    pub upgrades_cost: f64,

    /// Expected maintenance spend over the printer's life.
    pub maintenance_cost: f64,

    /// Expected operating lifetime in hours.
    pub lifetime_hours: f64,

    /// Average power draw while printing, in watts.
    pub avg_power_watts: f64,
}

impl PrinterProfile {
    /// Create a profile with zero costs, 5000 h lifetime and 120 W draw.
    ///
    /// The lifetime and power defaults match what an unlisted printer is
    /// assumed to have.
    #[must_use]
    pub fn new(make: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            purchase_cost: 0.0,
            upgrades_cost: 0.0,
            maintenance_cost: 0.0,
            lifetime_hours: 5000.0,
            avg_power_watts: 120.0,
        }
    }

    /// Set purchase, upgrade and maintenance costs.
    #[must_use]
    pub fn with_costs(mut self, purchase: f64, upgrades: f64, maintenance: f64) -> Self {
        self.purchase_cost = purchase;
        self.upgrades_cost = upgrades;
        self.maintenance_cost = maintenance;
        self
    }

    /// Set the expected lifetime in hours.
    #[must_use]
    pub fn with_lifetime_hours(mut self, hours: f64) -> Self {
        self.lifetime_hours = hours;
        self
    }

    /// Set the average power draw in watts.
    #[must_use]
    pub fn with_power_watts(mut self, watts: f64) -> Self {
        self.avg_power_watts = watts;
        self
    }

    /// Total hardware spend amortised by depreciation.
    #[must_use]
    pub fn hardware_cost(&self) -> f64 {
        self.purchase_cost + self.upgrades_cost + self.maintenance_cost
    }

    /// Every monetary field multiplied by `rate`.
    #[must_use]
    pub fn scaled(&self, rate: f64) -> Self {
        Self {
            purchase_cost: self.purchase_cost * rate,
            upgrades_cost: self.upgrades_cost * rate,
            maintenance_cost: self.maintenance_cost * rate,
            ..self.clone()
        }
    }

    /// `"<make> <model>"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}
