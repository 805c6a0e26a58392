//! Extrapolation methods for forward curves.
//!
//! Extrapolators extend a curve beyond its boundary knots, on either side:
//!
//! - [`FlatExtrapolator`]: Constant extension from the boundary point
//! - [`LinearExtrapolator`]: Continues with the boundary slope
//!
//! # Choosing an Extrapolation Method
//!
//! | Method | Use Case | Properties |
//! |--------|----------|------------|
//! | Flat | Default, conservative | Bounded by the observed prices |
//! | Linear | Trend continuation | Unbounded, may go negative |
//! | Polynomial | Diagnostics | Boundary cubic keeps growing, diverges quickly |
//!
//! # Example
//!
//! ```rust
//! use gridcurve_math::extrapolation::{FlatExtrapolator, Extrapolator};
//!
//! // Last quote: 105 at 12 months, rising 0.8 per month
//! let price = FlatExtrapolator.extrapolate(18.0, 12.0, 105.0, 0.8);
//! assert_eq!(price, 105.0);
//! ```

mod flat;
mod linear;

pub use flat::FlatExtrapolator;
pub use linear::LinearExtrapolator;

use serde::{Deserialize, Serialize};

use crate::error::MathError;

/// Trait for extrapolation methods.
pub trait Extrapolator: Send + Sync {
    /// Extrapolates to `t` given the nearest boundary point.
    ///
    /// # Arguments
    ///
    /// * `t` - Target point for extrapolation
    /// * `boundary_t` - Location of the boundary knot (first or last)
    /// * `boundary_value` - Value at the boundary knot
    /// * `boundary_derivative` - Derivative (slope) at the boundary knot
    fn extrapolate(
        &self,
        t: f64,
        boundary_t: f64,
        boundary_value: f64,
        boundary_derivative: f64,
    ) -> f64;

    /// Returns the name of the extrapolation method.
    fn name(&self) -> &'static str;
}

/// Configuration for extrapolation beyond curve boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtrapolationMethod {
    /// No extrapolation - return error outside range
    None,
    /// Constant value from boundary
    #[default]
    Flat,
    /// Linear continuation with boundary slope
    Linear,
    /// Keep evaluating the boundary polynomial piece
    Polynomial,
}

impl ExtrapolationMethod {
    /// Returns the extrapolator implementing this method, if it is one of
    /// the boundary-point methods.
    #[must_use]
    pub fn extrapolator(self) -> Option<Box<dyn Extrapolator>> {
        match self {
            Self::Flat => Some(Box::new(FlatExtrapolator)),
            Self::Linear => Some(Box::new(LinearExtrapolator)),
            Self::None | Self::Polynomial => None,
        }
    }

    /// Returns the name used in config files and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Flat => "flat",
            Self::Linear => "linear",
            Self::Polynomial => "polynomial",
        }
    }
}

impl std::fmt::Display for ExtrapolationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::None => "None",
            Self::Flat => "Flat",
            Self::Linear => "Linear",
            Self::Polynomial => "Polynomial",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for ExtrapolationMethod {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "flat" => Ok(Self::Flat),
            "linear" => Ok(Self::Linear),
            "polynomial" => Ok(Self::Polynomial),
            other => Err(MathError::invalid_input(format!(
                "unknown extrapolation method '{other}'"
            ))),
        }
    }
}
