//! Price queries.

use chrono::{Local, NaiveDate};
use gridcurve_core::{Currency, Product};
use serde::{Deserialize, Serialize};

use crate::error::{SourceError, SourceResult};

/// Parameters of a single price request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuery {
    /// Market area, e.g. `UK`.
    pub market: String,
    /// Traded product.
    pub product: Product,
    /// Delivery date.
    pub date: NaiveDate,
    /// Price currency.
    pub currency: Currency,
}

impl Default for PriceQuery {
    fn default() -> Self {
        Self {
            market: "UK".to_string(),
            product: Product::default(),
            date: Local::now().date_naive(),
            currency: Currency::default(),
        }
    }
}

impl PriceQuery {
    /// Creates a day-ahead GBP query for a market and date.
    pub fn new(market: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            market: market.into(),
            date,
            ..Self::default()
        }
    }

    /// Sets the product.
    #[must_use]
    pub fn with_product(mut self, product: Product) -> Self {
        self.product = product;
        self
    }

    /// Sets the currency.
    #[must_use]
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Returns the delivery date as `YYYY-MM-DD`.
    #[must_use]
    pub fn date_param(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Rejects queries no provider could answer.
    pub fn validate(&self) -> SourceResult<()> {
        if self.market.trim().is_empty() {
            return Err(SourceError::invalid_query("market must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query = PriceQuery::default();
        assert_eq!(query.market, "UK");
        assert_eq!(query.product, Product::DayAhead);
        assert_eq!(query.currency, Currency::GBP);
    }

    #[test]
    fn test_builder() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 16).unwrap();
        let query = PriceQuery::new("DE-LU", date)
            .with_product(Product::Intraday)
            .with_currency(Currency::EUR);

        assert_eq!(query.date_param(), "2024-02-16");
        assert_eq!(query.product, Product::Intraday);
        assert_eq!(query.currency, Currency::EUR);
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_empty_market_rejected() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 16).unwrap();
        let err = PriceQuery::new(" ", date).validate().unwrap_err();
        assert!(matches!(err, SourceError::InvalidQuery { .. }));
    }
}
