//! Interpolation methods for forward curve construction.
//!
//! # Available Methods
//!
//! - [`CubicSpline`]: Natural cubic spline (C2, passes through every knot)
//! - [`LinearInterpolator`]: Piecewise linear (C0)
//!
//! | Method | Smoothness | Minimum knots | Use Case |
//! |--------|------------|---------------|----------|
//! | Cubic Spline | C2 | 2 | Forward price curves (default) |
//! | Linear | C0 | 2 | Sparse or noisy quotes |
//!
//! A natural spline with only two knots has zero curvature at both ends and
//! is therefore exactly the straight line between them.

mod cubic_spline;
mod linear;

pub use cubic_spline::CubicSpline;
pub use linear::LinearInterpolator;

use crate::error::MathResult;

/// Trait for interpolation methods.
///
/// All interpolation methods implement this trait, providing a unified
/// interface for curve construction.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns the first derivative at x.
    ///
    /// Used to extend a curve linearly past its boundary knots.
    fn derivative(&self, x: f64) -> MathResult<f64>;

    /// Returns true if extrapolation is allowed.
    fn allows_extrapolation(&self) -> bool {
        false
    }

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}

/// Finds the index i such that xs[i] <= x < xs[i+1], clamped to the
/// first and last segments.
pub(crate) fn find_segment(xs: &[f64], x: f64) -> usize {
    match xs.binary_search_by(|probe| probe.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal)) {
        Ok(i) => i.min(xs.len() - 2),
        Err(i) => (i.saturating_sub(1)).min(xs.len() - 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_all_interpolators_through_points() {
        let tenors = vec![0.0, 1.0, 2.0, 3.0, 12.0];
        let prices = vec![90.0, 92.0, 94.0, 98.0, 105.0];

        let linear = LinearInterpolator::new(tenors.clone(), prices.clone()).unwrap();
        let spline = CubicSpline::new(tenors.clone(), prices.clone()).unwrap();

        for (t, p) in tenors.iter().zip(prices.iter()) {
            assert_relative_eq!(linear.interpolate(*t).unwrap(), *p, epsilon = 1e-10);
            assert_relative_eq!(spline.interpolate(*t).unwrap(), *p, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_derivative_consistency() {
        let tenors = vec![0.0, 1.0, 2.0, 3.0, 12.0];
        let prices = vec![90.0, 92.0, 94.0, 98.0, 105.0];

        let linear = LinearInterpolator::new(tenors.clone(), prices.clone()).unwrap();
        check_derivative(&linear, 1.5, "Linear");

        let spline = CubicSpline::new(tenors, prices).unwrap();
        check_derivative(&spline, 1.5, "CubicSpline");
        check_derivative(&spline, 7.25, "CubicSpline");
    }

    fn check_derivative(interp: &dyn Interpolator, t: f64, name: &str) {
        let h = 1e-6;
        let y_plus = interp.interpolate(t + h).unwrap();
        let y_minus = interp.interpolate(t - h).unwrap();
        let numerical = (y_plus - y_minus) / (2.0 * h);

        let analytical = interp.derivative(t).unwrap();

        assert!(
            (analytical - numerical).abs() < 1e-4,
            "{} derivative at t={}: analytical={}, numerical={}",
            name,
            t,
            analytical,
            numerical
        );
    }

    #[test]
    fn test_find_segment_clamps() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(find_segment(&xs, -5.0), 0);
        assert_eq!(find_segment(&xs, 0.0), 0);
        assert_eq!(find_segment(&xs, 1.5), 1);
        assert_eq!(find_segment(&xs, 3.0), 2);
        assert_eq!(find_segment(&xs, 10.0), 2);
    }

    fn knots() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
        proptest::collection::vec((0.5f64..3.0, 20.0f64..300.0), 2..12).prop_map(|steps| {
            let mut t = 0.0;
            steps
                .into_iter()
                .map(|(dt, price)| {
                    let tenor = t;
                    t += dt;
                    (tenor, price)
                })
                .unzip()
        })
    }

    proptest! {
        #[test]
        fn prop_spline_reproduces_knots((xs, ys) in knots()) {
            let spline = CubicSpline::new(xs.clone(), ys.clone()).unwrap();
            for (x, y) in xs.iter().zip(&ys) {
                let value = spline.interpolate(*x).unwrap();
                prop_assert!((value - y).abs() <= 1e-9 * (1.0 + y.abs()));
            }
        }

        #[test]
        fn prop_linear_stays_between_neighbours((xs, ys) in knots(), frac in 0.0f64..1.0) {
            let linear = LinearInterpolator::new(xs.clone(), ys.clone()).unwrap();
            for i in 0..xs.len() - 1 {
                let x = xs[i] + frac * (xs[i + 1] - xs[i]);
                let value = linear.interpolate(x).unwrap();
                let lo = ys[i].min(ys[i + 1]);
                let hi = ys[i].max(ys[i + 1]);
                prop_assert!(value >= lo - 1e-9 && value <= hi + 1e-9);
            }
        }
    }
}
