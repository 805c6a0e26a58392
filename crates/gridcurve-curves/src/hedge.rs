//! Rolling hedge cost estimate.
//!
//! Buying `exposure_per_period` MWh forward in each of the next
//! `horizon_periods` months at the curve price costs, on average per period:
//!
//! ```text
//! sum(price(i) * exposure, i = 1..=horizon) / horizon
//! ```
//!
//! Tenors past the end of the curve are priced by its extrapolation.

use serde::Serialize;

use crate::error::{CurveError, CurveResult};
use crate::forward_curve::ForwardCurve;

/// Longest hedge horizon, in monthly periods (100 years).
pub const MAX_HORIZON_PERIODS: u32 = 1200;

/// Cost of hedging one forward period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HedgePeriod {
    /// Tenor in months ahead.
    pub period: u32,
    /// Curve price at that tenor.
    pub price: f64,
    /// `price * exposure_per_period`.
    pub cost: f64,
}

/// Full hedge cost breakdown over a horizon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HedgeEstimate {
    /// Volume hedged in each period.
    pub exposure_per_period: f64,
    /// Number of periods hedged.
    pub horizon_periods: u32,
    /// Per-period prices and costs, tenors 1 through horizon.
    pub schedule: Vec<HedgePeriod>,
    /// Sum of period costs.
    pub total_cost: f64,
    /// Mean curve price over the horizon.
    pub average_price: f64,
    /// Mean cost per period.
    pub average_cost: f64,
}

impl HedgeEstimate {
    /// Prices a rolling hedge off the curve.
    ///
    /// # Errors
    ///
    /// - [`CurveError::InvalidHorizon`] when `horizon_periods` is zero or
    ///   above [`MAX_HORIZON_PERIODS`]
    /// - [`CurveError::InvalidValue`] when the exposure or the total cost is
    ///   not finite
    pub fn compute(
        curve: &ForwardCurve,
        exposure_per_period: f64,
        horizon_periods: u32,
    ) -> CurveResult<Self> {
        if horizon_periods == 0 || horizon_periods > MAX_HORIZON_PERIODS {
            return Err(CurveError::InvalidHorizon {
                horizon: horizon_periods,
            });
        }
        if !exposure_per_period.is_finite() {
            return Err(CurveError::invalid_value(format!(
                "exposure must be finite, got {exposure_per_period}"
            )));
        }

        let tenors: Vec<f64> = (1..=horizon_periods).map(f64::from).collect();
        let sampled = curve.sample(&tenors)?;

        let schedule: Vec<HedgePeriod> = (1..=horizon_periods)
            .zip(sampled)
            .map(|(period, point)| HedgePeriod {
                period,
                price: point.price,
                cost: point.price * exposure_per_period,
            })
            .collect();

        let n = f64::from(horizon_periods);
        let total_cost: f64 = schedule.iter().map(|p| p.cost).sum();
        if !total_cost.is_finite() {
            return Err(CurveError::invalid_value(format!(
                "hedge cost overflows for exposure {exposure_per_period}"
            )));
        }
        let average_price = schedule.iter().map(|p| p.price).sum::<f64>() / n;

        Ok(Self {
            exposure_per_period,
            horizon_periods,
            schedule,
            total_cost,
            average_price,
            average_cost: total_cost / n,
        })
    }
}

/// Estimates the average per-period cost of a rolling hedge.
///
/// Equivalent to `HedgeEstimate::compute(..)?.average_cost`.
pub fn estimate_hedge_cost(
    curve: &ForwardCurve,
    exposure_per_period: f64,
    horizon_periods: u32,
) -> CurveResult<f64> {
    HedgeEstimate::compute(curve, exposure_per_period, horizon_periods).map(|e| e.average_cost)
}
