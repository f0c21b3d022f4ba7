//! Basic cost formulas: material, energy and marked-up total.
//!
//! Every result is rounded to four decimal places
//! ([`estimate_types::units::round_currency`]).

use estimate_types::units::{grams_to_kg, kwh, round_currency};

use crate::error::{PricingResult, non_negative};

/// Cost of the filament for a part.
///
/// `(volume_cm3 × density_g_cm3 / 1000) × cost_per_kg`, rounded to 4 dp.
///
/// # Errors
///
/// Returns [`crate::PricingError::InvalidInput`] if any argument is negative
/// or NaN.
///
/// # Example
///
/// ```
/// use estimate_cost::material_cost;
///
/// // 10 cm³ of PLA at 20/kg
/// let cost = material_cost(10.0, 1.24, 20.0).unwrap();
/// assert!((cost - 0.248).abs() < 1e-3);
/// ```
pub fn material_cost(volume_cm3: f64, density_g_cm3: f64, cost_per_kg: f64) -> PricingResult<f64> {
    let volume_cm3 = non_negative("volume_cm3", volume_cm3)?;
    let density_g_cm3 = non_negative("density_g_cm3", density_g_cm3)?;
    let cost_per_kg = non_negative("cost_per_kg", cost_per_kg)?;

    Ok(round_currency(grams_to_kg(volume_cm3 * density_g_cm3) * cost_per_kg))
}

/// Cost of the electricity a print draws.
///
/// `(power_watts × time_hours / 1000) × rate_per_kwh`, rounded to 4 dp.
///
/// # Errors
///
/// Returns [`crate::PricingError::InvalidInput`] if any argument is negative
/// or NaN.
///
/// # Example
///
/// ```
/// use estimate_cost::energy_cost;
///
/// // 4 h at 120 W and 0.15/kWh
/// let cost = energy_cost(4.0, 120.0, 0.15).unwrap();
/// assert!((cost - 0.072).abs() < 1e-3);
/// ```
pub fn energy_cost(time_hours: f64, power_watts: f64, rate_per_kwh: f64) -> PricingResult<f64> {
    let time_hours = non_negative("time_hours", time_hours)?;
    let power_watts = non_negative("power_watts", power_watts)?;
    let rate_per_kwh = non_negative("rate_per_kwh", rate_per_kwh)?;

    Ok(round_currency(kwh(power_watts, time_hours) * rate_per_kwh))
}

/// Material plus energy with a percentage markup.
///
/// `(material_cost + energy_cost) × (1 + markup_pct / 100)`, rounded to
/// 4 dp. Any non-negative markup is accepted, including values above 100.
///
/// # Errors
///
/// Returns [`crate::PricingError::InvalidInput`] if any argument is negative
/// or NaN.
pub fn total_cost(material_cost: f64, energy_cost: f64, markup_pct: f64) -> PricingResult<f64> {
    let material_cost = non_negative("material_cost", material_cost)?;
    let energy_cost = non_negative("energy_cost", energy_cost)?;
    let markup_pct = non_negative("markup_pct", markup_pct)?;

    Ok(round_currency(
        (material_cost + energy_cost) * (1.0 + markup_pct / 100.0),
    ))
}
