//! Flat (constant) extrapolation.

use super::Extrapolator;

/// Flat extrapolation - constant value from the boundary point.
///
/// Beyond the last quoted tenor the curve stays at the last quoted price,
/// and before the first tenor it stays at the first price. The slope jumps
/// to zero at the boundary.
///
/// # Example
///
/// ```rust
/// use gridcurve_math::extrapolation::{FlatExtrapolator, Extrapolator};
///
/// let extrap = FlatExtrapolator::new();
/// assert_eq!(extrap.extrapolate(24.0, 12.0, 105.0, 0.8), 105.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatExtrapolator;

impl FlatExtrapolator {
    /// Creates a new flat extrapolator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Extrapolator for FlatExtrapolator {
    fn extrapolate(
        &self,
        _t: f64,
        _boundary_t: f64,
        boundary_value: f64,
        _boundary_derivative: f64,
    ) -> f64 {
        boundary_value
    }

    fn name(&self) -> &'static str {
        "Flat"
    }
}
