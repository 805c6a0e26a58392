//! # gridcurve Math
//!
//! Numerical building blocks for the gridcurve forward curve builder.
//!
//! This crate provides:
//!
//! - **Interpolation**: Natural cubic spline and linear interpolation
//! - **Extrapolation**: Flat and linear extension beyond the data range
//!
//! Everything here works on plain `f64` slices and knows nothing about
//! prices or tenors; the domain lives in `gridcurve-curves`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod extrapolation;
pub mod interpolation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::extrapolation::{
        ExtrapolationMethod, Extrapolator, FlatExtrapolator, LinearExtrapolator,
    };
    pub use crate::interpolation::{CubicSpline, Interpolator, LinearInterpolator};
}

pub use error::{MathError, MathResult};
