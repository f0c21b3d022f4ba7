//! Priced job result.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Currency;

/// Cost breakdown of one print job.
///
/// All amounts are in `currency`. Components that a pricing mode does not
/// use are zero. `fail_adjusted_cost` is infinite when the failure rate
/// is 100 %, and so is `total_cost` in that case.
///
/// # Example
///
/// ```
/// use estimate_types::{CostBreakdown, Currency};
///
/// let breakdown = CostBreakdown {
///     material_cost: 0.25,
///     energy_cost: 0.07,
///     markup_amount: 0.064,
///     total_cost: 0.384,
///     ..CostBreakdown::zero(Currency::gbp())
/// };
///
/// assert!((breakdown.direct_cost() - 0.32).abs() < 1e-12);
/// assert!(breakdown.is_finite());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CostBreakdown {
    /// Filament cost.
    pub material_cost: f64,

    /// Electricity cost.
    pub energy_cost: f64,

    /// Share of the printer's amortised hardware cost.
    pub depreciation_cost: f64,

    /// Setup and post-processing labour.
    pub labour_cost: f64,

    /// Base cost inflated for expected reprints.
    pub fail_adjusted_cost: f64,

    /// Shipping charged on top of the adjusted cost.
    pub shipping_cost: f64,

    /// Amount added by the markup percentage.
    pub markup_amount: f64,

    /// Final price.
    pub total_cost: f64,

    /// Print time the job was priced with, in hours.
    pub print_time_hours: f64,

    /// Currency of every amount above.
    pub currency: Currency,
}

impl CostBreakdown {
    /// An all-zero breakdown in `currency`.
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self {
            material_cost: 0.0,
            energy_cost: 0.0,
            depreciation_cost: 0.0,
            labour_cost: 0.0,
            fail_adjusted_cost: 0.0,
            shipping_cost: 0.0,
            markup_amount: 0.0,
            total_cost: 0.0,
            print_time_hours: 0.0,
            currency,
        }
    }

    /// Material plus energy.
    #[must_use]
    pub fn direct_cost(&self) -> f64 {
        self.material_cost + self.energy_cost
    }

    /// Material, energy, depreciation and labour.
    #[must_use]
    pub fn base_cost(&self) -> f64 {
        self.direct_cost() + self.depreciation_cost + self.labour_cost
    }

    /// Whether the total is a finite price.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.total_cost.is_finite()
    }

    /// Labelled rows in display order.
    #[must_use]
    pub fn rows(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("Material", self.material_cost),
            ("Energy", self.energy_cost),
            ("Depreciation", self.depreciation_cost),
            ("Labour", self.labour_cost),
            ("Fail-adjusted", self.fail_adjusted_cost),
            ("Shipping", self.shipping_cost),
            ("Markup", self.markup_amount),
            ("Total", self.total_cost),
        ]
    }

    /// One-line human readable summary.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} total ({:.1}h print)",
            self.currency.format(self.total_cost),
            self.print_time_hours
        )
    }
}
