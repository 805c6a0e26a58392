//! # gridcurve Sources
//!
//! Electricity price adapters.
//!
//! Each provider is one [`PriceSource`] implementation. [`connect`] is the
//! single place that maps a [`Provider`] to its implementation, so callers
//! only ever pass the provider along as a value.
//!
//! | Provider | Endpoint | Result periods |
//! |----------|----------|----------------|
//! | EPEX SPOT | market data REST | hour of day |
//! | Nord Pool | market data REST, optional bearer token | hour of day |
//! | Bloomberg | historical data bridge | day offset from the query date |
//!
//! Adapters never print. Failures come back as [`SourceError`] and are
//! logged through `tracing`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use gridcurve_config::SourcesConfig;
//! use gridcurve_core::Provider;
//! use gridcurve_sources::{connect, PriceQuery};
//!
//! let source = connect(Provider::Epex, &SourcesConfig::default()).unwrap();
//! let query = PriceQuery::new("UK", NaiveDate::from_ymd_opt(2024, 2, 16).unwrap());
//! let table = source.fetch(&query).unwrap();
//! println!("{} hourly prices", table.len());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::uninlined_format_args)]

pub mod bloomberg;
pub mod epex;
pub mod error;
pub mod http;
pub mod nordpool;
pub mod query;
pub mod response;

pub use bloomberg::{
    BloombergSource, HistoricalDataClient, HistoricalRequest, HistoricalRow, HttpHistoricalClient,
};
pub use epex::EpexSource;
pub use error::{SourceError, SourceResult};
pub use nordpool::NordPoolSource;
pub use query::PriceQuery;

use gridcurve_config::SourcesConfig;
use gridcurve_core::{PriceTable, Provider};
use tracing::debug;

/// A provider of electricity prices.
pub trait PriceSource: Send + Sync {
    /// Returns the provider this source talks to.
    fn provider(&self) -> Provider;

    /// Fetches the prices for a query.
    ///
    /// The table holds exactly the periods the provider returned, sorted.
    fn fetch(&self, query: &PriceQuery) -> SourceResult<PriceTable>;
}

/// Creates the price source for a provider.
pub fn connect(provider: Provider, config: &SourcesConfig) -> SourceResult<Box<dyn PriceSource>> {
    debug!(
        "Connecting {} at {} (timeout {}s)",
        provider,
        config.url_for(provider),
        config.timeout_secs
    );

    let source: Box<dyn PriceSource> = match provider {
        Provider::Epex => Box::new(EpexSource::from_config(config)?),
        Provider::NordPool => Box::new(NordPoolSource::from_config(config)?),
        Provider::Bloomberg => Box::new(BloombergSource::from_config(config)?),
    };
    Ok(source)
}

/// Fetches prices from a provider in one call.
pub fn fetch(
    provider: Provider,
    config: &SourcesConfig,
    query: &PriceQuery,
) -> SourceResult<PriceTable> {
    connect(provider, config)?.fetch(query)
}
