//! Fluent builder for forward curves.
//!
//! # Example
//!
//! ```rust
//! use gridcurve_curves::builder::ForwardCurveBuilder;
//! use gridcurve_curves::interpolation::ExtrapolationMethod;
//!
//! let curve = ForwardCurveBuilder::new()
//!     .add_point(1.0, 92.0)
//!     .add_point(3.0, 98.0)
//!     .add_point(12.0, 105.0)
//!     .with_extrapolation(ExtrapolationMethod::Linear)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(curve.tenor_bounds(), (1.0, 12.0));
//! ```

use gridcurve_core::{PricePoint, PriceTable};

use crate::error::CurveResult;
use crate::forward_curve::ForwardCurve;
use crate::interpolation::{ExtrapolationMethod, InterpolationMethod};

/// Fluent builder for constructing forward curves.
///
/// Points may be added in any order; they are sorted by tenor on
/// [`build`](Self::build). Duplicate tenors are rejected there.
///
/// # Default Settings
///
/// - Interpolation: natural cubic spline
/// - Extrapolation: flat
#[derive(Debug, Clone, Default)]
pub struct ForwardCurveBuilder {
    points: Vec<PricePoint>,
    interpolation: InterpolationMethod,
    extrapolation: ExtrapolationMethod,
}

impl ForwardCurveBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from the points of an existing table.
    #[must_use]
    pub fn from_table(table: &PriceTable) -> Self {
        Self {
            points: table.points().to_vec(),
            ..Self::default()
        }
    }

    /// Adds a quoted price at a tenor in months.
    #[must_use]
    pub fn add_point(mut self, tenor: f64, price: f64) -> Self {
        self.points.push(PricePoint {
            period: tenor,
            price,
        });
        self
    }

    /// Adds several `(tenor, price)` quotes.
    #[must_use]
    pub fn with_points<I>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        self.points.extend(
            points
                .into_iter()
                .map(|(period, price)| PricePoint { period, price }),
        );
        self
    }

    /// Sets the interpolation method.
    #[must_use]
    pub fn with_interpolation(mut self, method: InterpolationMethod) -> Self {
        self.interpolation = method;
        self
    }

    /// Sets the extrapolation method.
    #[must_use]
    pub fn with_extrapolation(mut self, method: ExtrapolationMethod) -> Self {
        self.extrapolation = method;
        self
    }

    /// Returns the number of points added so far.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Builds the curve.
    ///
    /// # Errors
    ///
    /// Fails on invalid or duplicate points and on fewer than two points.
    pub fn build(self) -> CurveResult<ForwardCurve> {
        let table = PriceTable::from_unsorted(self.points)?;
        ForwardCurve::new(&table, self.interpolation, self.extrapolation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CurveError;
    use approx::assert_relative_eq;

    #[test]
    fn test_builder_sorts_points() {
        let curve = ForwardCurveBuilder::new()
            .add_point(12.0, 105.0)
            .add_point(0.0, 90.0)
            .add_point(3.0, 98.0)
            .build()
            .unwrap();

        assert_eq!(curve.tenors(), &[0.0, 3.0, 12.0]);
        assert_relative_eq!(curve.value_at(3.0).unwrap(), 98.0, epsilon = 1e-10);
    }

    #[test]
    fn test_builder_settings() {
        let curve = ForwardCurveBuilder::new()
            .with_points([(1.0, 50.0), (2.0, 60.0)])
            .with_interpolation(InterpolationMethod::Linear)
            .with_extrapolation(ExtrapolationMethod::None)
            .build()
            .unwrap();

        assert_eq!(curve.interpolation(), InterpolationMethod::Linear);
        assert_eq!(curve.extrapolation(), ExtrapolationMethod::None);
        assert_relative_eq!(curve.value_at(1.5).unwrap(), 55.0, epsilon = 1e-10);
    }

    #[test]
    fn test_builder_rejects_duplicates() {
        let err = ForwardCurveBuilder::new()
            .add_point(1.0, 50.0)
            .add_point(1.0, 51.0)
            .add_point(2.0, 60.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, CurveError::NonMonotonicTenors { .. }));
    }

    #[test]
    fn test_builder_rejects_bad_values() {
        let err = ForwardCurveBuilder::new()
            .add_point(1.0, f64::NAN)
            .add_point(2.0, 60.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, CurveError::InvalidValue { .. }));
    }

    #[test]
    fn test_builder_insufficient_points() {
        let builder = ForwardCurveBuilder::new().add_point(1.0, 50.0);
        assert_eq!(builder.point_count(), 1);
        assert_eq!(
            builder.build().unwrap_err(),
            CurveError::insufficient_points(2, 1)
        );
    }

    #[test]
    fn test_from_table() {
        let table = PriceTable::from_pairs([(0.0, 90.0), (6.0, 100.0)]).unwrap();
        let curve = ForwardCurveBuilder::from_table(&table).build().unwrap();
        assert_relative_eq!(curve.value_at(3.0).unwrap(), 95.0, epsilon = 1e-10);
    }
}
