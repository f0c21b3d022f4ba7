//! Electricity tariffs.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Price of electricity per kWh.
///
/// Either one of the catalog's named presets or a custom value typed in
/// by the user. Preset prices are quoted in the catalog currency; custom
/// prices are taken to already be in the caller's currency.
///
/// # Example
///
/// ```
/// use estimate_types::ElectricityRate;
///
/// let night = ElectricityRate::preset("Economy 7 Night", 0.20);
/// assert!((night.per_kwh_in(1.27) - 0.254).abs() < 1e-12);
///
/// let custom = ElectricityRate::Custom(0.30);
/// assert!((custom.per_kwh_in(1.27) - 0.30).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ElectricityRate {
    /// A named tariff from the catalog.
    Preset {
        /// Display label of the tariff.
        label: String,
        /// Price per kWh in the catalog currency.
        per_kwh: f64,
    },
    /// A user-supplied price per kWh in the caller's currency.
    Custom(f64),
}

impl ElectricityRate {
    /// Create a preset tariff.
    #[must_use]
    pub fn preset(label: impl Into<String>, per_kwh: f64) -> Self {
        Self::Preset {
            label: label.into(),
            per_kwh,
        }
    }

    /// Raw price per kWh as stored.
    #[must_use]
    pub const fn per_kwh(&self) -> f64 {
        match self {
            Self::Preset { per_kwh, .. } => *per_kwh,
            Self::Custom(per_kwh) => *per_kwh,
        }
    }

    /// Price per kWh in a currency with multiplier `rate`.
    ///
    /// Only presets are converted.
    #[must_use]
    pub fn per_kwh_in(&self, rate: f64) -> f64 {
        match self {
            Self::Preset { per_kwh, .. } => per_kwh * rate,
            Self::Custom(per_kwh) => *per_kwh,
        }
    }

    /// Whether this is a custom tariff.
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_is_converted() {
        let rate = ElectricityRate::preset("Standard Rate", 0.34);
        assert!((rate.per_kwh() - 0.34).abs() < f64::EPSILON);
        assert!((rate.per_kwh_in(2.0) - 0.68).abs() < 1e-12);
        assert!(!rate.is_custom());
    }

    #[test]
    fn custom_is_not_converted() {
        let rate = ElectricityRate::Custom(0.3);
        assert!((rate.per_kwh_in(1.17) - 0.3).abs() < f64::EPSILON);
        assert!(rate.is_custom());
    }
}
