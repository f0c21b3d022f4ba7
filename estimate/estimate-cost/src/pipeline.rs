//! End-to-end job pricing.
//!
//! [`CostEstimator`] resolves catalog data into the output currency,
//! estimates the print time and hands a flat [`JobInputs`] record to
//! [`price_job`]. The estimator holds no mutable state and can be shared
//! across threads.

use estimate_time::{FallbackPolicy, TimeEstimate, TimeModel};
use estimate_types::{
    CostBreakdown, Currency, ElectricityRate, Material, PrintJobGeometry, PrinterProfile,
};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::business::{apply_fail_rate, depreciation, final_business_price, labour};
use crate::calculator::{energy_cost, material_cost, total_cost};
use crate::error::{PricingError, PricingResult, non_negative};
use crate::params::{BusinessParams, CustomOverrides, PricingMode};

/// Default markup in percent.
pub const DEFAULT_MARKUP_PCT: f64 = 20.0;

/// Everything needed to price one job, already in the output currency.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JobInputs {
    /// Part volume in cm³.
    pub volume_cm3: f64,

    /// Filament density in g/cm³.
    pub density_g_cm3: f64,

    /// Filament price per kg.
    pub cost_per_kg: f64,

    /// Printer the job runs on.
    pub printer: PrinterProfile,

    /// Electricity price per kWh.
    pub rate_per_kwh: f64,

    /// Markup in percent.
    pub markup_pct: f64,

    /// Print time in hours.
    pub print_time_hours: f64,

    /// Currency of every amount above.
    pub currency: Currency,
}

/// Price a job.
///
/// Hobby mode marks up material and energy, then adds depreciation.
/// Business mode adds depreciation and labour to the base, inflates it for
/// failures, adds shipping and applies the markup last.
///
/// # Errors
///
/// Returns [`crate::PricingError::InvalidInput`] if any quantity is
/// negative or NaN.
pub fn price_job(inputs: &JobInputs, mode: &PricingMode) -> PricingResult<CostBreakdown> {
    let material = material_cost(inputs.volume_cm3, inputs.density_g_cm3, inputs.cost_per_kg)?;
    let energy = energy_cost(
        inputs.print_time_hours,
        inputs.printer.avg_power_watts,
        inputs.rate_per_kwh,
    )?;
    let depreciation_cost = depreciation(
        inputs.printer.hardware_cost(),
        inputs.printer.lifetime_hours,
        inputs.print_time_hours,
    )?;

    let mut breakdown = CostBreakdown {
        material_cost: material,
        energy_cost: energy,
        depreciation_cost,
        print_time_hours: inputs.print_time_hours,
        ..CostBreakdown::zero(inputs.currency.clone())
    };

    match mode {
        PricingMode::Hobby => {
            let marked_up = total_cost(material, energy, inputs.markup_pct)?;
            breakdown.markup_amount = marked_up - breakdown.direct_cost();
            breakdown.fail_adjusted_cost = breakdown.base_cost();
            breakdown.total_cost = marked_up + depreciation_cost;
        }
        PricingMode::Business(params) => {
            price_business(&mut breakdown, params, inputs.markup_pct)?;
        }
    }

    debug!(
        mode = mode.as_str(),
        material = breakdown.material_cost,
        energy = breakdown.energy_cost,
        depreciation = breakdown.depreciation_cost,
        total = breakdown.total_cost,
        "Priced job"
    );

    Ok(breakdown)
}

fn price_business(
    breakdown: &mut CostBreakdown,
    params: &BusinessParams,
    markup_pct: f64,
) -> PricingResult<()> {
    let markup_pct = non_negative("markup_pct", markup_pct)?;
    breakdown.labour_cost = labour(params.setup_hours, params.post_hours, params.hourly_rate)?;

    let base = breakdown.base_cost();
    let adjusted = apply_fail_rate(base, params.fail_rate_pct)?;
    let total = final_business_price(base, params.fail_rate_pct, params.shipping_cost, markup_pct)?;

    breakdown.fail_adjusted_cost = adjusted;
    breakdown.shipping_cost = params.shipping_cost;
    breakdown.total_cost = total;
    breakdown.markup_amount = if total.is_finite() {
        total - (adjusted + params.shipping_cost)
    } else if markup_pct > 0.0 {
        f64::INFINITY
    } else {
        0.0
    };
    Ok(())
}

/// Priced job together with the time it was priced with.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JobEstimate {
    /// Cost breakdown.
    pub breakdown: CostBreakdown,

    /// Print time and how it was obtained.
    pub time: TimeEstimate,
}

/// Prices print jobs for one material, printer and tariff.
///
/// Catalog amounts (filament price, printer costs, preset tariffs) are
/// quoted in the catalog's base currency and converted with
/// `currency.rate`. Custom tariffs, overrides and business charges are
/// taken to already be in the output currency.
///
/// # Example
///
/// ```
/// use estimate_cost::CostEstimator;
/// use estimate_time::TimeModel;
/// use estimate_types::{ElectricityRate, Material, PrintJobGeometry, PrinterProfile};
///
/// let estimator = CostEstimator::new(
///     Material::new("PLA", 1.24, 20.0),
///     PrinterProfile::new("Bambu Lab", "A1").with_costs(300.0, 0.0, 0.0),
///     ElectricityRate::preset("Standard Variable", 0.34),
/// )
/// .with_time_model(TimeModel::Fixed(4.0));
///
/// let job = estimator.estimate_job(&PrintJobGeometry::from_volume_cm3(10.0)).unwrap();
/// assert!((job.breakdown.material_cost - 0.248).abs() < 1e-9);
/// assert!((job.time.hours - 4.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CostEstimator {
    material: Material,
    printer: PrinterProfile,
    electricity: ElectricityRate,
    currency: Currency,
    markup_pct: f64,
    mode: PricingMode,
    time_model: TimeModel,
    fallback: FallbackPolicy,
    overrides: CustomOverrides,
}

impl CostEstimator {
    /// Create an estimator in the base currency, hobby mode, with the
    /// default markup and the heuristic time model.
    #[must_use]
    pub fn new(material: Material, printer: PrinterProfile, electricity: ElectricityRate) -> Self {
        Self {
            material,
            printer,
            electricity,
            currency: Currency::default(),
            markup_pct: DEFAULT_MARKUP_PCT,
            mode: PricingMode::default(),
            time_model: TimeModel::default(),
            fallback: FallbackPolicy::default(),
            overrides: CustomOverrides::default(),
        }
    }

    /// Set the output currency.
    #[must_use]
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Set the markup percentage.
    #[must_use]
    pub fn with_markup_pct(mut self, markup_pct: f64) -> Self {
        self.markup_pct = markup_pct;
        self
    }

    /// Set the pricing mode.
    #[must_use]
    pub fn with_mode(mut self, mode: PricingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set how print time is obtained.
    #[must_use]
    pub fn with_time_model(mut self, time_model: TimeModel) -> Self {
        self.time_model = time_model;
        self
    }

    /// Set the duration used when time estimation fails.
    #[must_use]
    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    /// Replace catalog values for this estimator.
    #[must_use]
    pub fn with_overrides(mut self, overrides: CustomOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Output currency.
    #[must_use]
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Pricing mode.
    #[must_use]
    pub const fn mode(&self) -> &PricingMode {
        &self.mode
    }

    /// Resolve the inputs for a job that takes `print_time_hours`.
    #[must_use]
    pub fn inputs(&self, geometry: &PrintJobGeometry, print_time_hours: f64) -> JobInputs {
        let rate = self.currency.rate;
        let cost_per_kg = self
            .overrides
            .cost_per_kg
            .unwrap_or_else(|| self.currency.convert(self.material.base_cost_per_kg));
        let printer = self
            .overrides
            .printer
            .clone()
            .unwrap_or_else(|| self.printer.scaled(rate));

        JobInputs {
            volume_cm3: geometry.volume_cm3,
            density_g_cm3: self.material.density_g_per_cm3,
            cost_per_kg,
            printer,
            rate_per_kwh: self.electricity.per_kwh_in(rate),
            markup_pct: self.markup_pct,
            print_time_hours,
            currency: self.currency.clone(),
        }
    }

    /// Estimate the time and cost of one job.
    ///
    /// A failed time estimate falls back to the policy's duration and is
    /// flagged on [`JobEstimate::time`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::PricingError::InvalidInput`] if the volume or any
    /// resolved quantity is negative or NaN, or if a bounding-box extent is
    /// negative or not finite.
    pub fn estimate_job(&self, geometry: &PrintJobGeometry) -> PricingResult<JobEstimate> {
        non_negative("volume_cm3", geometry.volume_cm3)?;
        if let Some((axis, extent)) = geometry.bounding_box_mm.invalid_extent() {
            debug!(axis, extent, "Rejected bounding box");
            return Err(PricingError::invalid_input("bounding_box_mm", extent));
        }

        let time = self.time_model.estimate(geometry.volume_cm3, &self.fallback);
        let inputs = self.inputs(geometry, time.hours);
        let breakdown = price_job(&inputs, &self.mode)?;

        info!(
            volume_cm3 = geometry.volume_cm3,
            material = %self.material.name,
            printer = %inputs.printer.label(),
            hours = time.hours,
            fallback = time.is_fallback(),
            total = breakdown.total_cost,
            currency = %self.currency.code,
            "Estimated job"
        );

        Ok(JobEstimate { breakdown, time })
    }

    /// Estimate several independent jobs, in input order.
    #[cfg(not(feature = "parallel"))]
    #[must_use]
    pub fn estimate_batch(&self, jobs: &[PrintJobGeometry]) -> Vec<PricingResult<JobEstimate>> {
        jobs.iter().map(|job| self.estimate_job(job)).collect()
    }

    /// Estimate several independent jobs in parallel, in input order.
    #[cfg(feature = "parallel")]
    #[must_use]
    pub fn estimate_batch(&self, jobs: &[PrintJobGeometry]) -> Vec<PricingResult<JobEstimate>> {
        jobs.par_iter().map(|job| self.estimate_job(job)).collect()
    }
}
