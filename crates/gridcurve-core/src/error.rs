//! Error types for gridcurve domain values.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while constructing or parsing domain values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A price point carries a non-finite or negative value.
    #[error("Invalid price point ({period}, {price}): {reason}")]
    InvalidPoint {
        /// Period of the offending point.
        period: f64,
        /// Price of the offending point.
        price: f64,
        /// Reason for invalidity.
        reason: String,
    },

    /// Periods are not strictly increasing.
    #[error("Periods must be strictly increasing: {previous} followed by {next}")]
    NonMonotonic {
        /// Period that came first.
        previous: f64,
        /// Period that followed it.
        next: f64,
    },

    /// The same period appears twice.
    #[error("Duplicate period: {period}")]
    DuplicatePeriod {
        /// The repeated period.
        period: f64,
    },

    /// Unrecognized provider name.
    #[error("Unknown provider '{name}' (expected one of: epex, nordpool, bloomberg)")]
    UnknownProvider {
        /// The name that failed to parse.
        name: String,
    },

    /// Unrecognized currency code.
    #[error("Unknown currency '{code}'")]
    UnknownCurrency {
        /// The code that failed to parse.
        code: String,
    },

    /// Unrecognized market product.
    #[error("Unknown product '{name}' (expected DayAhead or Intraday)")]
    UnknownProduct {
        /// The name that failed to parse.
        name: String,
    },

    /// Date outside the calendar or in the wrong format.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },
}

impl CoreError {
    /// Creates an invalid point error.
    #[must_use]
    pub fn invalid_point(period: f64, price: f64, reason: impl Into<String>) -> Self {
        Self::InvalidPoint {
            period,
            price,
            reason: reason.into(),
        }
    }

    /// Creates an unknown provider error.
    #[must_use]
    pub fn unknown_provider(name: impl Into<String>) -> Self {
        Self::UnknownProvider { name: name.into() }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::unknown_provider("iex");
        let msg = err.to_string();
        assert!(msg.contains("'iex'"));
        assert!(msg.contains("nordpool"));
    }

    #[test]
    fn test_non_monotonic_display() {
        let err = CoreError::NonMonotonic {
            previous: 3.0,
            next: 2.0,
        };
        assert!(err.to_string().contains("3 followed by 2"));
    }
}
