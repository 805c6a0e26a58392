//! EPEX SPOT market data.

use gridcurve_config::SourcesConfig;
use gridcurve_core::{PriceTable, Provider};
use tracing::debug;

use crate::error::SourceResult;
use crate::http::HttpClient;
use crate::query::PriceQuery;
use crate::response::parse_hourly_prices;
use crate::PriceSource;

/// Hourly prices from the EPEX SPOT market data endpoint.
///
/// `GET <url>?market=UK&product=DayAhead&date=2024-02-16&currency=GBP`
#[derive(Debug, Clone)]
pub struct EpexSource {
    url: String,
    http: HttpClient,
}

impl EpexSource {
    /// Creates a source for an endpoint URL.
    pub fn new(url: impl Into<String>, http: HttpClient) -> Self {
        Self {
            url: url.into(),
            http,
        }
    }

    /// Creates a source from the configured endpoint and timeout.
    pub fn from_config(config: &SourcesConfig) -> SourceResult<Self> {
        let http = HttpClient::new(Provider::Epex, config.timeout())?;
        Ok(Self::new(config.epex.url.clone(), http))
    }

    fn params(query: &PriceQuery) -> Vec<(&'static str, String)> {
        vec![
            ("market", query.market.clone()),
            ("product", query.product.wire_name().to_string()),
            ("date", query.date_param()),
            ("currency", query.currency.code().to_string()),
        ]
    }
}

impl PriceSource for EpexSource {
    fn provider(&self) -> Provider {
        Provider::Epex
    }

    fn fetch(&self, query: &PriceQuery) -> SourceResult<PriceTable> {
        query.validate()?;

        let body = self.http.get_text(&self.url, &Self::params(query), None)?;
        let table = parse_hourly_prices(Provider::Epex, &body)?;

        debug!("Parsed {} EPEX price rows for {}", table.len(), query.date);
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use gridcurve_core::{Currency, Product};

    #[test]
    fn test_params() {
        let query = PriceQuery::new("UK", NaiveDate::from_ymd_opt(2024, 2, 16).unwrap())
            .with_product(Product::Intraday)
            .with_currency(Currency::EUR);

        let params = EpexSource::params(&query);
        assert_eq!(
            params,
            vec![
                ("market", "UK".to_string()),
                ("product", "Intraday".to_string()),
                ("date", "2024-02-16".to_string()),
                ("currency", "EUR".to_string()),
            ]
        );
    }
}
