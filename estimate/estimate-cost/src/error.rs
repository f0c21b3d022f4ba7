//! Error types for pricing.

use thiserror::Error;

/// Result type for pricing operations.
pub type PricingResult<T> = Result<T, PricingError>;

/// Errors raised by the pricing functions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// A physical or monetary quantity is negative or NaN.
    ///
    /// Inputs are never clamped; callers should reject such values before
    /// pricing.
    #[error("invalid input: {quantity} must be a non-negative number, got {value}")]
    InvalidInput {
        /// Name of the offending quantity.
        quantity: &'static str,
        /// Offending value.
        value: f64,
    },
}

impl PricingError {
    /// Create an `InvalidInput` error.
    #[must_use]
    pub const fn invalid_input(quantity: &'static str, value: f64) -> Self {
        Self::InvalidInput { quantity, value }
    }
}

/// Pass `value` through if it is a non-negative number.
pub(crate) fn non_negative(quantity: &'static str, value: f64) -> PricingResult<f64> {
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(PricingError::invalid_input(quantity, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_quantity() {
        let err = PricingError::invalid_input("density_g_cm3", -1.0);
        assert_eq!(
            err.to_string(),
            "invalid input: density_g_cm3 must be a non-negative number, got -1"
        );
    }

    #[test]
    fn non_negative_accepts_zero_and_infinity() {
        assert_eq!(non_negative("x", 0.0), Ok(0.0));
        assert_eq!(non_negative("x", f64::INFINITY), Ok(f64::INFINITY));
    }

    #[test]
    fn non_negative_rejects_negative_and_nan() {
        assert!(non_negative("x", -0.001).is_err());
        assert!(non_negative("x", f64::NAN).is_err());
    }
}
