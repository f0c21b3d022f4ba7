//! Display currency with a fixed conversion multiplier.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A currency the results are reported in.
///
/// `rate` converts one unit of the catalog's base currency into this
/// currency. Rates are fixed multipliers, not live exchange rates.
///
/// # Example
///
/// ```
/// use estimate_types::Currency;
///
/// let usd = Currency::new("USD", "$", 1.27);
/// assert!((usd.convert(10.0) - 12.7).abs() < 1e-12);
/// assert_eq!(usd.format(3.14159), "$3.14");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Currency {
    /// ISO-style code (e.g. `"GBP"`).
    pub code: String,

    /// Display symbol (e.g. `"£"`).
    pub symbol: String,

    /// Multiplier from the catalog base currency.
    pub rate: f64,
}

impl Default for Currency {
    fn default() -> Self {
        Self::gbp()
    }
}

impl Currency {
    /// Create a currency.
    #[must_use]
    pub fn new(code: impl Into<String>, symbol: impl Into<String>, rate: f64) -> Self {
        Self {
            code: code.into(),
            symbol: symbol.into(),
            rate,
        }
    }

    /// Pound sterling, the catalog base currency.
    #[must_use]
    pub fn gbp() -> Self {
        Self::new("GBP", "£", 1.0)
    }

    /// Convert an amount in the base currency into this currency.
    #[must_use]
    pub fn convert(&self, base_amount: f64) -> f64 {
        base_amount * self.rate
    }

    /// Format an amount with the symbol and two decimals.
    #[must_use]
    pub fn format(&self, amount: f64) -> String {
        if amount.is_infinite() {
            return format!("{}∞", self.symbol);
        }
        format!("{}{amount:.2}", self.symbol)
    }
}
