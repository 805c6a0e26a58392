//! A single (period, price) observation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// A price observed or sampled at one period.
///
/// The period is an hour of day (0-23) for spot data or a tenor in months
/// ahead for forward data. Both fields are finite and the period is never
/// negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Hour of day or tenor in months.
    pub period: f64,
    /// Price in the query currency per MWh.
    pub price: f64,
}

impl PricePoint {
    /// Creates a validated price point.
    pub fn new(period: f64, price: f64) -> CoreResult<Self> {
        let point = Self { period, price };
        point.validate()?;
        Ok(point)
    }

    /// Checks the point invariants.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.period.is_finite() {
            return Err(CoreError::invalid_point(
                self.period,
                self.price,
                "period is not finite",
            ));
        }
        if self.period < 0.0 {
            return Err(CoreError::invalid_point(
                self.period,
                self.price,
                "period is negative",
            ));
        }
        if !self.price.is_finite() {
            return Err(CoreError::invalid_point(
                self.period,
                self.price,
                "price is not finite",
            ));
        }
        Ok(())
    }
}

impl fmt::Display for PricePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}", self.period, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_point() {
        let p = PricePoint::new(3.0, 98.5).unwrap();
        assert_eq!(p.period, 3.0);
        assert_eq!(p.price, 98.5);
    }

    #[test]
    fn test_negative_prices_allowed() {
        // Oversupplied hours clear below zero
        assert!(PricePoint::new(14.0, -12.3).is_ok());
    }

    #[test]
    fn test_invalid_points() {
        assert!(PricePoint::new(-1.0, 50.0).is_err());
        assert!(PricePoint::new(f64::NAN, 50.0).is_err());
        assert!(PricePoint::new(1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(PricePoint::new(7.0, 81.456).unwrap().to_string(), "7: 81.46");
    }
}
