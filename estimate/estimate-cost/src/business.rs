//! Business pricing stages: depreciation, labour, failure allowance and the
//! final marked-up price.
//!
//! These stages are not rounded. [`final_business_price`] is defined as an
//! exact composition of [`apply_fail_rate`], shipping and markup.

use crate::error::{PricingResult, non_negative};

/// Share of the printer's hardware cost consumed by one print.
///
/// `(printer_cost / lifetime_hours) × print_time_hours`, or `0` when the
/// lifetime is zero, negative or NaN.
///
/// # Errors
///
/// Returns [`crate::PricingError::InvalidInput`] if `printer_cost` or
/// `print_time_hours` is negative or NaN.
///
/// # Example
///
/// ```
/// use estimate_cost::depreciation;
///
/// assert!((depreciation(400.0, 2000.0, 10.0).unwrap() - 2.0).abs() < 1e-12);
/// assert!(depreciation(400.0, 0.0, 10.0).unwrap().abs() < f64::EPSILON);
/// ```
pub fn depreciation(printer_cost: f64, lifetime_hours: f64, print_time_hours: f64) -> PricingResult<f64> {
    let printer_cost = non_negative("printer_cost", printer_cost)?;
    let print_time_hours = non_negative("print_time_hours", print_time_hours)?;

    if lifetime_hours.is_nan() || lifetime_hours <= 0.0 {
        return Ok(0.0);
    }
    Ok(printer_cost / lifetime_hours * print_time_hours)
}

/// Operator time charged for setup and post-processing.
///
/// # Errors
///
/// Returns [`crate::PricingError::InvalidInput`] if any argument is negative
/// or NaN.
pub fn labour(setup_hours: f64, post_hours: f64, hourly_rate: f64) -> PricingResult<f64> {
    let setup_hours = non_negative("setup_hours", setup_hours)?;
    let post_hours = non_negative("post_hours", post_hours)?;
    let hourly_rate = non_negative("hourly_rate", hourly_rate)?;

    Ok((setup_hours + post_hours) * hourly_rate)
}

/// Inflate `base_cost` so the successful prints pay for the failed ones.
///
/// `base_cost / (1 - fail_rate_pct / 100)`. A failure rate of 100 % or more
/// means no print ever succeeds and the price is `f64::INFINITY`.
///
/// # Errors
///
/// Returns [`crate::PricingError::InvalidInput`] if any argument is negative
/// or NaN.
///
/// # Example
///
/// ```
/// use estimate_cost::apply_fail_rate;
///
/// let adjusted = apply_fail_rate(100.0, 10.0).unwrap();
/// assert!((adjusted - 111.1111).abs() < 1e-4);
/// assert!(apply_fail_rate(100.0, 100.0).unwrap().is_infinite());
/// ```
pub fn apply_fail_rate(base_cost: f64, fail_rate_pct: f64) -> PricingResult<f64> {
    let base_cost = non_negative("base_cost", base_cost)?;
    let fail_rate_pct = non_negative("fail_rate_pct", fail_rate_pct)?;

    if fail_rate_pct >= 100.0 {
        return Ok(f64::INFINITY);
    }
    Ok(base_cost / (1.0 - fail_rate_pct / 100.0))
}

/// Price quoted to a customer.
///
/// `(apply_fail_rate(base_cost, fail_rate_pct) + shipping_cost) ×
/// (1 + markup_pct / 100)`.
///
/// # Errors
///
/// Returns [`crate::PricingError::InvalidInput`] if any argument is negative
/// or NaN.
pub fn final_business_price(
    base_cost: f64,
    fail_rate_pct: f64,
    shipping_cost: f64,
    markup_pct: f64,
) -> PricingResult<f64> {
    let adjusted = apply_fail_rate(base_cost, fail_rate_pct)?;
    let shipping_cost = non_negative("shipping_cost", shipping_cost)?;
    let markup_pct = non_negative("markup_pct", markup_pct)?;

    Ok((adjusted + shipping_cost) * (1.0 + markup_pct / 100.0))
}
