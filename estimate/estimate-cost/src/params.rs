//! Pricing mode and caller overrides.

use estimate_types::PrinterProfile;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Extra charges applied when quoting for a customer.
///
/// # Example
///
/// ```
/// use estimate_cost::BusinessParams;
///
/// let params = BusinessParams::default()
///     .with_hourly_rate(25.0)
///     .with_fail_rate_pct(10.0);
///
/// assert!((params.setup_hours - 0.25).abs() < f64::EPSILON);
/// assert!((params.labour_hours() - 0.5).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BusinessParams {
    /// Machine setup time in hours.
    pub setup_hours: f64,

    /// Post-processing time in hours.
    pub post_hours: f64,

    /// Labour rate per hour, in the output currency.
    pub hourly_rate: f64,

    /// Share of prints expected to fail, in percent.
    pub fail_rate_pct: f64,

    /// Flat shipping charge, in the output currency.
    pub shipping_cost: f64,
}

impl Default for BusinessParams {
    fn default() -> Self {
        Self {
            setup_hours: 0.25,
            post_hours: 0.25,
            hourly_rate: 0.0,
            fail_rate_pct: 0.0,
            shipping_cost: 0.0,
        }
    }
}

impl BusinessParams {
    /// Set setup and post-processing hours.
    #[must_use]
    pub const fn with_labour_hours(mut self, setup_hours: f64, post_hours: f64) -> Self {
        self.setup_hours = setup_hours;
        self.post_hours = post_hours;
        self
    }

    /// Set the hourly labour rate.
    #[must_use]
    pub const fn with_hourly_rate(mut self, rate: f64) -> Self {
        self.hourly_rate = rate;
        self
    }

    /// Set the expected failure rate in percent.
    #[must_use]
    pub const fn with_fail_rate_pct(mut self, pct: f64) -> Self {
        self.fail_rate_pct = pct;
        self
    }

    /// Set the shipping charge.
    #[must_use]
    pub const fn with_shipping_cost(mut self, cost: f64) -> Self {
        self.shipping_cost = cost;
        self
    }

    /// Total operator hours.
    #[must_use]
    pub fn labour_hours(&self) -> f64 {
        self.setup_hours + self.post_hours
    }
}

/// Which price formula a job is quoted with.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PricingMode {
    /// Material and energy with markup, plus depreciation.
    #[default]
    Hobby,

    /// Full pipeline with labour, failures and shipping.
    Business(BusinessParams),
}

impl PricingMode {
    /// Short name for logs and reports.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hobby => "hobby",
            Self::Business(_) => "business",
        }
    }
}

/// Values that replace catalog data for a single estimate.
///
/// Overrides are given in the output currency and are never converted.
/// A printer override replaces the whole profile, power draw included.
///
/// # Example
///
/// ```
/// use estimate_cost::CustomOverrides;
/// use estimate_types::PrinterProfile;
///
/// let overrides = CustomOverrides::default()
///     .with_cost_per_kg(18.5)
///     .with_printer(PrinterProfile::new("Custom", "Workshop").with_power_watts(90.0));
///
/// assert!(!overrides.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CustomOverrides {
    /// Printer used instead of the selected catalog model.
    pub printer: Option<PrinterProfile>,

    /// Filament price per kg used instead of the material's catalog price.
    pub cost_per_kg: Option<f64>,
}

impl CustomOverrides {
    /// Replace the printer profile.
    #[must_use]
    pub fn with_printer(mut self, printer: PrinterProfile) -> Self {
        self.printer = Some(printer);
        self
    }

    /// Replace the filament price.
    #[must_use]
    pub fn with_cost_per_kg(mut self, cost_per_kg: f64) -> Self {
        self.cost_per_kg = Some(cost_per_kg);
        self
    }

    /// Whether nothing is overridden.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.printer.is_none() && self.cost_per_kg.is_none()
    }
}
