//! Linear extrapolation.

use super::Extrapolator;

/// Linear extrapolation - continues with the boundary slope.
///
/// `y = y0 + slope * (t - t0)`, valid on both sides of the data.
///
/// Prices can turn negative far from the data when the boundary slope
/// points down.
///
/// # Example
///
/// ```rust
/// use gridcurve_math::extrapolation::{LinearExtrapolator, Extrapolator};
///
/// let price = LinearExtrapolator.extrapolate(14.0, 12.0, 105.0, 0.5);
/// assert!((price - 106.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearExtrapolator;

impl LinearExtrapolator {
    /// Creates a new linear extrapolator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Extrapolator for LinearExtrapolator {
    fn extrapolate(
        &self,
        t: f64,
        boundary_t: f64,
        boundary_value: f64,
        boundary_derivative: f64,
    ) -> f64 {
        boundary_value + boundary_derivative * (t - boundary_t)
    }

    fn name(&self) -> &'static str {
        "Linear"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_at_boundary() {
        let value = LinearExtrapolator::new().extrapolate(12.0, 12.0, 105.0, 0.8);
        assert_relative_eq!(value, 105.0, epsilon = 1e-15);
    }

    #[test]
    fn test_linear_with_negative_slope() {
        let value = LinearExtrapolator.extrapolate(22.0, 12.0, 105.0, -1.5);
        assert_relative_eq!(value, 90.0, epsilon = 1e-10);
    }

    #[test]
    fn test_linear_name() {
        assert_eq!(LinearExtrapolator.name(), "Linear");
    }
}
