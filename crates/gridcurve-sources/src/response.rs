//! Decoding of hourly price bodies.
//!
//! EPEX and Nord Pool both answer with
//!
//! ```json
//! {"prices": [[0, 55.2], [1, 54.8], ["02", 53.5]]}
//! ```
//!
//! Hours may be numbers or numeric strings. Rows may arrive in any order.

use gridcurve_core::{PricePoint, PriceTable, Provider};
use serde::Deserialize;

use crate::error::{SourceError, SourceResult};

#[derive(Debug, Deserialize)]
struct PricesBody {
    prices: Vec<(Cell, Cell)>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Cell {
    Number(f64),
    Text(String),
}

impl Cell {
    fn to_f64(&self, what: &str) -> Result<f64, String> {
        match self {
            Cell::Number(v) => Ok(*v),
            Cell::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("{what} '{s}' is not a number")),
        }
    }
}

/// Parses an hourly price body into a sorted table.
pub fn parse_hourly_prices(provider: Provider, body: &str) -> SourceResult<PriceTable> {
    let parsed: PricesBody =
        serde_json::from_str(body).map_err(|e| SourceError::malformed(provider, e.to_string()))?;

    let points = parsed
        .prices
        .iter()
        .enumerate()
        .map(|(row, (hour, price))| {
            let period = hour
                .to_f64("hour")
                .map_err(|e| SourceError::malformed(provider, format!("row {row}: {e}")))?;
            let price = price
                .to_f64("price")
                .map_err(|e| SourceError::malformed(provider, format!("row {row}: {e}")))?;
            Ok(PricePoint { period, price })
        })
        .collect::<SourceResult<Vec<_>>>()?;

    PriceTable::from_unsorted(points).map_err(|e| SourceError::malformed(provider, e.to_string()))
}
