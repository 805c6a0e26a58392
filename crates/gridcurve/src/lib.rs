//! # gridcurve
//!
//! Electricity price retrieval and forward curve analytics.
//!
//! This crate re-exports the public API of the gridcurve workspace:
//!
//! - [`types`]: price points, price tables, providers, currencies
//! - [`math`]: interpolation and extrapolation primitives
//! - [`curves`]: forward curves and hedge cost estimates
//! - [`sources`]: EPEX SPOT, Nord Pool and Bloomberg price sources
//! - [`config`]: TOML application configuration
//!
//! ## Example
//!
//! ```rust
//! use gridcurve::prelude::*;
//!
//! let quotes = PriceTable::from_pairs([(0.0, 90.0), (1.0, 92.0), (3.0, 98.0), (12.0, 105.0)])?;
//! let curve = build_curve(&quotes)?;
//!
//! let cost = estimate_hedge_cost(&curve, 100.0, 12)?;
//! assert!(cost > 9_000.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use gridcurve_config as config;
pub use gridcurve_core as types;
pub use gridcurve_curves as curves;
pub use gridcurve_math as math;
pub use gridcurve_sources as sources;

pub use gridcurve_config::AppConfig;
pub use gridcurve_core::{Currency, PricePoint, PriceTable, Product, Provider};
pub use gridcurve_curves::{
    build_curve, estimate_hedge_cost, sample, ExtrapolationMethod, ForwardCurve,
    ForwardCurveBuilder, HedgeEstimate, InterpolationMethod,
};
pub use gridcurve_sources::{connect, fetch, PriceQuery, PriceSource};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use gridcurve_config::{AppConfig, ConfigError, Validate};
    pub use gridcurve_core::prelude::*;
    pub use gridcurve_curves::prelude::*;
    pub use gridcurve_sources::{connect, fetch, PriceQuery, PriceSource, SourceError};
}
