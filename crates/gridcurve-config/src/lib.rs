//! # gridcurve Config
//!
//! TOML configuration for the gridcurve toolkit.
//!
//! ```toml
//! provider = "epex"
//!
//! [query]
//! market = "UK"
//! product = "DayAhead"
//! currency = "GBP"
//!
//! [sources]
//! timeout_secs = 30
//!
//! [sources.nordpool]
//! token = "..."
//!
//! [curve]
//! interpolation = "cubic-spline"
//! extrapolation = "flat"
//!
//! [hedge]
//! exposure_per_period = 100.0
//! horizon_periods = 12
//! ```
//!
//! Missing sections and fields take their defaults. Loaded files are
//! validated with [`Validate`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod settings;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use settings::{
    AppConfig, BloombergConfig, CurveConfig, EpexConfig, HedgeConfig, NordPoolConfig,
    QueryConfig, SourcesConfig,
};
