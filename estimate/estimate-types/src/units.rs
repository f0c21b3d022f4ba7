//! Unit conversions and the rounding policy shared by every estimator.
//!
//! Monetary results of the basic cost formulas are rounded to the nearest
//! value with [`CURRENCY_DECIMALS`] places. Business pricing stages are left
//! unrounded so they compose exactly.

/// Decimal places kept by [`round_currency`].
pub const CURRENCY_DECIMALS: usize = 4;

/// Cubic millimetres per cubic centimetre.
pub const MM3_PER_CM3: f64 = 1000.0;

/// Grams per kilogram.
pub const GRAMS_PER_KG: f64 = 1000.0;

/// Watt-hours per kilowatt-hour.
pub const WH_PER_KWH: f64 = 1000.0;

/// Seconds per hour.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Round `value` to the nearest number with `places` decimal places.
///
/// Works on the exact decimal expansion of `value`, so `0.35 / 1000`
/// (stored just below 0.00035) rounds down to 0.0003. Exact ties go to
/// the even digit. Infinite and NaN values pass through unchanged.
///
/// # Example
///
/// ```
/// use estimate_types::units::round_to;
///
/// assert!((round_to(0.123_456, 4) - 0.1235).abs() < 1e-12);
/// assert!(round_to(f64::INFINITY, 4).is_infinite());
/// ```
#[must_use]
pub fn round_to(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.places$}").parse().unwrap_or(value)
}

/// Round a monetary amount to [`CURRENCY_DECIMALS`] places.
#[must_use]
pub fn round_currency(value: f64) -> f64 {
    round_to(value, CURRENCY_DECIMALS)
}

/// Convert cm³ to mm³.
#[must_use]
pub const fn cm3_to_mm3(volume_cm3: f64) -> f64 {
    volume_cm3 * MM3_PER_CM3
}

/// Convert grams to kilograms.
#[must_use]
pub const fn grams_to_kg(grams: f64) -> f64 {
    grams / GRAMS_PER_KG
}

/// Energy in kWh drawn by a load of `power_watts` running for `hours`.
#[must_use]
pub const fn kwh(power_watts: f64, hours: f64) -> f64 {
    power_watts * hours / WH_PER_KWH
}

/// Convert seconds to hours.
#[must_use]
pub const fn seconds_to_hours(seconds: f64) -> f64 {
    seconds / SECONDS_PER_HOUR
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn round_to_four_places() {
        assert_relative_eq!(round_currency(0.248_04), 0.248);
        assert_relative_eq!(round_currency(0.384_06), 0.3841);
        assert_relative_eq!(round_currency(2.0), 2.0);
    }

    #[test]
    fn round_uses_exact_decimal_value() {
        // Both are stored just below the half-way point.
        assert_relative_eq!(round_currency(0.35 / 1000.0), 0.0003);
        assert_relative_eq!(round_currency(1.15 / 1000.0), 0.0011);
        assert_relative_eq!(round_currency(-0.248_06), -0.2481);
    }

    #[test]
    fn round_passes_non_finite_through() {
        assert!(round_currency(f64::INFINITY).is_infinite());
        assert!(round_currency(f64::NAN).is_nan());
    }

    #[test]
    fn round_is_idempotent() {
        let once = round_currency(1.234_567_8);
        assert!((round_currency(once) - once).abs() < f64::EPSILON);
    }

    #[test]
    fn volume_conversions() {
        assert_relative_eq!(cm3_to_mm3(8.0), 8000.0);
        assert_relative_eq!(cm3_to_mm3(0.0), 0.0);
    }

    #[test]
    fn energy_in_kwh() {
        assert_relative_eq!(kwh(120.0, 4.0), 0.48);
        assert_relative_eq!(kwh(0.0, 4.0), 0.0);
    }

    #[test]
    fn time_conversion() {
        assert_relative_eq!(seconds_to_hours(5400.0), 1.5);
    }
}
