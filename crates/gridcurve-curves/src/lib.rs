//! # gridcurve Curves
//!
//! Forward price curve construction for power markets.
//!
//! Quoted `(tenor, price)` pairs are fitted with a natural cubic spline
//! (or straight lines on request) and extended past the quoted range by an
//! explicit extrapolation rule, flat by default. The resulting
//! [`ForwardCurve`] is immutable and can be sampled at any tenor or used to
//! price a rolling hedge.
//!
//! ## Example
//!
//! ```rust
//! use gridcurve_core::PriceTable;
//! use gridcurve_curves::{build_curve, estimate_hedge_cost, sample};
//!
//! let quotes = PriceTable::from_pairs([
//!     (0.0, 90.0),
//!     (1.0, 92.0),
//!     (2.0, 94.0),
//!     (3.0, 98.0),
//!     (12.0, 105.0),
//! ])
//! .unwrap();
//!
//! let curve = build_curve(&quotes).unwrap();
//! let points = sample(&curve, &[0.0, 6.0, 12.0]).unwrap();
//! assert!((points[0].price - 90.0).abs() < 1e-9);
//!
//! let cost = estimate_hedge_cost(&curve, 100.0, 12).unwrap();
//! assert!(cost > 9000.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::uninlined_format_args)]

pub mod builder;
pub mod error;
pub mod forward_curve;
pub mod hedge;
pub mod interpolation;

pub use builder::ForwardCurveBuilder;
pub use error::{CurveError, CurveResult};
pub use forward_curve::{ForwardCurve, MIN_POINTS};
pub use hedge::{estimate_hedge_cost, HedgeEstimate, HedgePeriod, MAX_HORIZON_PERIODS};
pub use interpolation::{ExtrapolationMethod, InterpolationMethod};

use gridcurve_core::{PricePoint, PriceTable};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::builder::ForwardCurveBuilder;
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::forward_curve::ForwardCurve;
    pub use crate::hedge::{estimate_hedge_cost, HedgeEstimate, HedgePeriod};
    pub use crate::interpolation::{ExtrapolationMethod, InterpolationMethod};
    pub use crate::{build_curve, sample};
}

/// Builds a forward curve with the default natural cubic spline and flat
/// extrapolation.
///
/// # Errors
///
/// Returns [`CurveError::InsufficientPoints`] for fewer than two points.
pub fn build_curve(points: &PriceTable) -> CurveResult<ForwardCurve> {
    ForwardCurve::new(
        points,
        InterpolationMethod::default(),
        ExtrapolationMethod::default(),
    )
}

/// Samples a curve at the given tenors, one point per tenor in input order.
pub fn sample(curve: &ForwardCurve, tenors: &[f64]) -> CurveResult<Vec<PricePoint>> {
    curve.sample(tenors)
}
