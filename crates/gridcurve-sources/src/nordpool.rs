//! Nord Pool market data.

use gridcurve_config::SourcesConfig;
use gridcurve_core::{PriceTable, Provider};
use tracing::debug;

use crate::error::SourceResult;
use crate::http::HttpClient;
use crate::query::PriceQuery;
use crate::response::parse_hourly_prices;
use crate::PriceSource;

/// Hourly prices from the Nord Pool market data endpoint.
///
/// `GET <url>?market=UK&date=2024-02-16&currency=GBP`, with
/// `Authorization: Bearer <token>` when a token is configured. Nord Pool
/// serves day-ahead data only, so the product is not sent.
#[derive(Debug, Clone)]
pub struct NordPoolSource {
    url: String,
    token: Option<String>,
    http: HttpClient,
}

impl NordPoolSource {
    /// Creates a source for an endpoint URL.
    pub fn new(url: impl Into<String>, token: Option<String>, http: HttpClient) -> Self {
        Self {
            url: url.into(),
            token,
            http,
        }
    }

    /// Creates a source from the configured endpoint, token and timeout.
    pub fn from_config(config: &SourcesConfig) -> SourceResult<Self> {
        let http = HttpClient::new(Provider::NordPool, config.timeout())?;
        Ok(Self::new(
            config.nordpool.url.clone(),
            config.nordpool.token.clone(),
            http,
        ))
    }

    fn params(query: &PriceQuery) -> Vec<(&'static str, String)> {
        vec![
            ("market", query.market.clone()),
            ("date", query.date_param()),
            ("currency", query.currency.code().to_string()),
        ]
    }
}

impl PriceSource for NordPoolSource {
    fn provider(&self) -> Provider {
        Provider::NordPool
    }

    fn fetch(&self, query: &PriceQuery) -> SourceResult<PriceTable> {
        query.validate()?;

        let body = self
            .http
            .get_text(&self.url, &Self::params(query), self.token.as_deref())?;
        let table = parse_hourly_prices(Provider::NordPool, &body)?;

        debug!("Parsed {} Nord Pool price rows for {}", table.len(), query.date);
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_params_omit_product() {
        let query = PriceQuery::new("UK", NaiveDate::from_ymd_opt(2024, 2, 16).unwrap());
        let params = NordPoolSource::params(&query);
        assert_eq!(params.len(), 3);
        assert!(params.iter().all(|(k, _)| *k != "product"));
    }
}
