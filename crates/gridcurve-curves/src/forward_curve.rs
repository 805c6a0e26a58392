//! Forward price curve.
//!
//! A [`ForwardCurve`] maps tenor (months ahead) to price. It is fitted once
//! from a snapshot of quoted tenors and never changes afterwards.

use std::sync::Arc;

use gridcurve_core::{PricePoint, PriceTable};
use gridcurve_math::interpolation::{CubicSpline, Interpolator, LinearInterpolator};

use crate::error::{CurveError, CurveResult};
use crate::interpolation::{ExtrapolationMethod, InterpolationMethod};

/// Minimum number of quoted tenors a curve needs.
pub const MIN_POINTS: usize = 2;

/// Continuous forward price curve over quoted tenors.
///
/// Inside `[min_tenor, max_tenor]` the curve follows its interpolator.
/// Outside, it follows its [`ExtrapolationMethod`]:
///
/// - `Flat` (default): the boundary price is held constant
/// - `Linear`: continues with the fitted slope at the boundary
/// - `Polynomial`: keeps evaluating the boundary piece
/// - `None`: evaluation fails with [`CurveError::TenorOutOfRange`]
#[derive(Clone)]
pub struct ForwardCurve {
    /// Quoted tenors in months.
    tenors: Vec<f64>,
    /// Quoted prices at each tenor.
    prices: Vec<f64>,
    /// Interpolator instance.
    interpolator: Arc<dyn Interpolator>,
    /// Interpolation method.
    interpolation: InterpolationMethod,
    /// Extrapolation method.
    extrapolation: ExtrapolationMethod,
}

impl std::fmt::Debug for ForwardCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForwardCurve")
            .field("tenors", &self.tenors)
            .field("prices", &self.prices)
            .field("interpolation", &self.interpolation)
            .field("extrapolation", &self.extrapolation)
            .finish()
    }
}

impl ForwardCurve {
    /// Fits a curve through the points of a price table.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InsufficientPoints`] for fewer than two points.
    pub fn new(
        table: &PriceTable,
        interpolation: InterpolationMethod,
        extrapolation: ExtrapolationMethod,
    ) -> CurveResult<Self> {
        if table.len() < MIN_POINTS {
            return Err(CurveError::insufficient_points(MIN_POINTS, table.len()));
        }

        let tenors = table.periods();
        let prices = table.prices();
        let interpolator = Self::create_interpolator(&tenors, &prices, interpolation, extrapolation)?;

        Ok(Self {
            tenors,
            prices,
            interpolator,
            interpolation,
            extrapolation,
        })
    }

    /// Creates the appropriate interpolator.
    fn create_interpolator(
        tenors: &[f64],
        prices: &[f64],
        interpolation: InterpolationMethod,
        extrapolation: ExtrapolationMethod,
    ) -> CurveResult<Arc<dyn Interpolator>> {
        let tenors_vec = tenors.to_vec();
        let prices_vec = prices.to_vec();
        let extend = extrapolation == ExtrapolationMethod::Polynomial;

        let interpolator: Arc<dyn Interpolator> = match interpolation {
            InterpolationMethod::CubicSpline => {
                let spline = CubicSpline::new(tenors_vec, prices_vec)?;
                if extend {
                    Arc::new(spline.with_extrapolation())
                } else {
                    Arc::new(spline)
                }
            }
            InterpolationMethod::Linear => {
                let linear = LinearInterpolator::new(tenors_vec, prices_vec)?;
                if extend {
                    Arc::new(linear.with_extrapolation())
                } else {
                    Arc::new(linear)
                }
            }
        };
        Ok(interpolator)
    }

    /// Returns the curve price at a tenor.
    ///
    /// # Errors
    ///
    /// Fails for non-finite or negative tenors, and for tenors outside the
    /// quoted range when extrapolation is `None`.
    pub fn value_at(&self, tenor: f64) -> CurveResult<f64> {
        if !tenor.is_finite() || tenor < 0.0 {
            return Err(CurveError::invalid_value(format!(
                "tenor must be finite and non-negative, got {tenor}"
            )));
        }

        if self.in_range(tenor) {
            return Ok(self.interpolator.interpolate(tenor)?);
        }

        self.extrapolate(tenor)
    }

    /// Handles extrapolation for out-of-range tenors.
    fn extrapolate(&self, tenor: f64) -> CurveResult<f64> {
        let (min, max) = self.tenor_bounds();

        if self.extrapolation == ExtrapolationMethod::Polynomial {
            return Ok(self.interpolator.interpolate(tenor)?);
        }

        let Some(extrapolator) = self.extrapolation.extrapolator() else {
            return Err(CurveError::tenor_out_of_range(tenor, min, max));
        };

        let (boundary, price) = if tenor < min {
            (min, self.prices[0])
        } else {
            (max, self.prices[self.prices.len() - 1])
        };
        let slope = self.interpolator.derivative(boundary)?;

        Ok(extrapolator.extrapolate(tenor, boundary, price, slope))
    }

    /// Returns the slope of the curve at a tenor inside the quoted range.
    #[must_use]
    pub fn derivative_at(&self, tenor: f64) -> Option<f64> {
        if !self.in_range(tenor) {
            return None;
        }
        self.interpolator.derivative(tenor).ok()
    }

    /// Samples the curve at each tenor, preserving order and length.
    pub fn sample(&self, tenors: &[f64]) -> CurveResult<Vec<PricePoint>> {
        tenors
            .iter()
            .map(|&period| {
                self.value_at(period)
                    .map(|price| PricePoint { period, price })
            })
            .collect()
    }

    /// Samples the curve on an evenly spaced grid of `steps` tenors from
    /// `start` to `end` inclusive.
    pub fn sample_range(&self, start: f64, end: f64, steps: usize) -> CurveResult<Vec<PricePoint>> {
        if steps < 2 {
            return Err(CurveError::invalid_value(format!(
                "sample grid needs at least 2 steps, got {steps}"
            )));
        }
        if !(start.is_finite() && end.is_finite()) || end <= start {
            return Err(CurveError::invalid_value(format!(
                "sample range [{start}, {end}] is empty"
            )));
        }

        let step = (end - start) / (steps - 1) as f64;
        let grid: Vec<f64> = (0..steps)
            .map(|i| if i == steps - 1 { end } else { start + step * i as f64 })
            .collect();
        self.sample(&grid)
    }

    /// Returns true if the tenor lies within the quoted range.
    #[must_use]
    pub fn in_range(&self, tenor: f64) -> bool {
        let (min, max) = self.tenor_bounds();
        tenor >= min && tenor <= max
    }

    /// Returns `(min_tenor, max_tenor)`.
    #[must_use]
    pub fn tenor_bounds(&self) -> (f64, f64) {
        (self.tenors[0], self.tenors[self.tenors.len() - 1])
    }

    /// Returns the quoted tenors.
    #[must_use]
    pub fn tenors(&self) -> &[f64] {
        &self.tenors
    }

    /// Returns the quoted prices.
    #[must_use]
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// Returns the interpolation method.
    #[must_use]
    pub fn interpolation(&self) -> InterpolationMethod {
        self.interpolation
    }

    /// Returns the extrapolation method.
    #[must_use]
    pub fn extrapolation(&self) -> ExtrapolationMethod {
        self.extrapolation
    }
}
