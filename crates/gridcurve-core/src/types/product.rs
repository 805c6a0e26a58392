//! Market products.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Traded power product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Product {
    /// Day-ahead auction, hourly delivery on the following day.
    #[default]
    DayAhead,
    /// Continuous intraday trading.
    Intraday,
}

impl Product {
    /// Returns the name sent to providers.
    #[must_use]
    pub fn wire_name(&self) -> &'static str {
        match self {
            Product::DayAhead => "DayAhead",
            Product::Intraday => "Intraday",
        }
    }
}

impl FromStr for Product {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "dayahead" => Ok(Product::DayAhead),
            "intraday" => Ok(Product::Intraday),
            _ => Err(CoreError::UnknownProduct {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("DayAhead".parse::<Product>().unwrap(), Product::DayAhead);
        assert_eq!("day-ahead".parse::<Product>().unwrap(), Product::DayAhead);
        assert_eq!("intraday".parse::<Product>().unwrap(), Product::Intraday);
        assert!("weekly".parse::<Product>().is_err());
    }

    #[test]
    fn test_wire_name() {
        assert_eq!(Product::DayAhead.wire_name(), "DayAhead");
        assert_eq!(Product::Intraday.to_string(), "Intraday");
    }
}
