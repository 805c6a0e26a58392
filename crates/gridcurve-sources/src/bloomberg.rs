//! Bloomberg historical data.
//!
//! Bloomberg exposes a single historical query: one security, one field and
//! a date range, answered with `(date, value)` rows. [`HistoricalDataClient`]
//! models that query; [`HttpHistoricalClient`] reaches it through an HTTP
//! bridge:
//!
//! ```text
//! GET <url>?ticker=UKBL1+Index&field=PX_LAST&start=2024-02-15&end=2024-02-16
//! {"data": [{"date": "2024-02-15", "value": 61.4}, ...]}
//! ```

use chrono::{Days, NaiveDate};
use gridcurve_config::SourcesConfig;
use gridcurve_core::{PricePoint, PriceTable, Provider};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SourceError, SourceResult};
use crate::http::HttpClient;
use crate::query::PriceQuery;
use crate::PriceSource;

/// One historical data request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoricalRequest {
    /// Security, e.g. `UKBL1 Index`.
    pub ticker: String,
    /// Field, e.g. `PX_LAST`.
    pub field: String,
    /// First date, inclusive.
    pub start: NaiveDate,
    /// Last date, inclusive.
    pub end: NaiveDate,
}

/// One row of a historical data answer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRow {
    /// Observation date.
    pub date: NaiveDate,
    /// Field value on that date.
    pub value: f64,
}

/// Access to Bloomberg historical data.
pub trait HistoricalDataClient: Send + Sync {
    /// Runs a historical data request.
    fn historical(&self, request: &HistoricalRequest) -> SourceResult<Vec<HistoricalRow>>;
}

#[derive(Debug, Deserialize)]
struct HistoricalBody {
    data: Vec<HistoricalRow>,
}

/// Historical data over an HTTP bridge.
#[derive(Debug, Clone)]
pub struct HttpHistoricalClient {
    url: String,
    http: HttpClient,
}

impl HttpHistoricalClient {
    /// Creates a client for a bridge URL.
    pub fn new(url: impl Into<String>, http: HttpClient) -> Self {
        Self {
            url: url.into(),
            http,
        }
    }
}

impl HistoricalDataClient for HttpHistoricalClient {
    fn historical(&self, request: &HistoricalRequest) -> SourceResult<Vec<HistoricalRow>> {
        let params = [
            ("ticker", request.ticker.clone()),
            ("field", request.field.clone()),
            ("start", request.start.format("%Y-%m-%d").to_string()),
            ("end", request.end.format("%Y-%m-%d").to_string()),
        ];
        let body = self.http.get_text(&self.url, &params, None)?;

        let parsed: HistoricalBody = serde_json::from_str(&body)
            .map_err(|e| SourceError::malformed(Provider::Bloomberg, e.to_string()))?;
        Ok(parsed.data)
    }
}

/// Prices from Bloomberg historical data.
///
/// The query date opens a two-day window `[date, date + 1]`. Each row
/// becomes a point whose period is its day offset from the query date.
/// Market, product and currency are fixed by the ticker and not sent.
#[derive(Debug, Clone)]
pub struct BloombergSource<C = HttpHistoricalClient> {
    client: C,
    ticker: String,
    field: String,
}

impl BloombergSource<HttpHistoricalClient> {
    /// Creates a source from the configured bridge, ticker, field and timeout.
    pub fn from_config(config: &SourcesConfig) -> SourceResult<Self> {
        let http = HttpClient::new(Provider::Bloomberg, config.timeout())?;
        let client = HttpHistoricalClient::new(config.bloomberg.url.clone(), http);
        Ok(Self::new(
            client,
            config.bloomberg.ticker.clone(),
            config.bloomberg.field.clone(),
        ))
    }
}

impl<C: HistoricalDataClient> BloombergSource<C> {
    /// Creates a source over any historical data client.
    pub fn new(client: C, ticker: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            client,
            ticker: ticker.into(),
            field: field.into(),
        }
    }

    fn request_for(&self, query: &PriceQuery) -> SourceResult<HistoricalRequest> {
        let end = query
            .date
            .checked_add_days(Days::new(1))
            .ok_or_else(|| SourceError::invalid_query(format!("no day after {}", query.date)))?;

        Ok(HistoricalRequest {
            ticker: self.ticker.clone(),
            field: self.field.clone(),
            start: query.date,
            end,
        })
    }
}

impl<C: HistoricalDataClient> PriceSource for BloombergSource<C> {
    fn provider(&self) -> Provider {
        Provider::Bloomberg
    }

    fn fetch(&self, query: &PriceQuery) -> SourceResult<PriceTable> {
        query.validate()?;
        let request = self.request_for(query)?;

        let rows = self.client.historical(&request)?;
        debug!(
            "Received {} {} rows for {} from {} to {}",
            rows.len(),
            request.field,
            request.ticker,
            request.start,
            request.end
        );

        let points = rows
            .iter()
            .map(|row| {
                if row.date < request.start || row.date > request.end {
                    return Err(SourceError::malformed(
                        Provider::Bloomberg,
                        format!(
                            "row dated {} outside {} to {}",
                            row.date, request.start, request.end
                        ),
                    ));
                }
                Ok(PricePoint {
                    period: (row.date - request.start).num_days() as f64,
                    price: row.value,
                })
            })
            .collect::<SourceResult<Vec<_>>>()?;

        PriceTable::from_unsorted(points)
            .map_err(|e| SourceError::malformed(Provider::Bloomberg, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct CannedClient {
        rows: Vec<HistoricalRow>,
        seen: Mutex<Vec<HistoricalRequest>>,
    }

    impl CannedClient {
        fn new(rows: Vec<HistoricalRow>) -> Self {
            Self {
                rows,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl HistoricalDataClient for CannedClient {
        fn historical(&self, request: &HistoricalRequest) -> SourceResult<Vec<HistoricalRow>> {
            self.seen.lock().unwrap().push(request.clone());
            Ok(self.rows.clone())
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, d).unwrap()
    }

    #[test]
    fn test_request_window() {
        let source = BloombergSource::new(CannedClient::new(vec![]), "UKBL1 Index", "PX_LAST");
        let table = source.fetch(&PriceQuery::new("UK", day(15))).unwrap();
        assert!(table.is_empty());

        let seen = source.client.seen.lock().unwrap();
        assert_eq!(
            seen[0],
            HistoricalRequest {
                ticker: "UKBL1 Index".to_string(),
                field: "PX_LAST".to_string(),
                start: day(15),
                end: day(16),
            }
        );
    }

    #[test]
    fn test_rows_become_day_offsets() {
        let rows = vec![
            HistoricalRow {
                date: day(16),
                value: 63.0,
            },
            HistoricalRow {
                date: day(15),
                value: 61.4,
            },
        ];
        let source = BloombergSource::new(CannedClient::new(rows), "UKBL1 Index", "PX_LAST");
        let table = source.fetch(&PriceQuery::new("UK", day(15))).unwrap();

        assert_eq!(table.periods(), vec![0.0, 1.0]);
        assert_eq!(table.prices(), vec![61.4, 63.0]);
    }

    #[test]
    fn test_row_before_window_is_malformed() {
        let rows = vec![HistoricalRow {
            date: day(14),
            value: 60.0,
        }];
        let source = BloombergSource::new(CannedClient::new(rows), "UKBL1 Index", "PX_LAST");
        let err = source.fetch(&PriceQuery::new("UK", day(15))).unwrap_err();
        assert!(matches!(err, SourceError::MalformedResponse { .. }));
    }

    #[test]
    fn test_row_after_window_is_malformed() {
        let rows = vec![
            HistoricalRow {
                date: day(15),
                value: 61.4,
            },
            HistoricalRow {
                date: day(20),
                value: 60.0,
            },
        ];
        let source = BloombergSource::new(CannedClient::new(rows), "UKBL1 Index", "PX_LAST");
        let err = source.fetch(&PriceQuery::new("UK", day(15))).unwrap_err();
        assert!(matches!(err, SourceError::MalformedResponse { .. }));
    }
}
