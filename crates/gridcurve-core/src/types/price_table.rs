//! Ordered price tables.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::PricePoint;
use crate::error::{CoreError, CoreResult};

/// UK peak block, 07:00 to 19:00, as hour-of-day periods.
pub const PEAK_HOURS: RangeInclusive<u32> = 7..=18;

/// An ordered sequence of price points.
///
/// Periods are strictly increasing, so no period appears twice. A table may
/// be empty or partial (a provider can return fewer than 24 hours).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<PricePoint>", into = "Vec<PricePoint>")]
pub struct PriceTable {
    points: Vec<PricePoint>,
}

/// Descriptive statistics over a price table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceSummary {
    /// Number of points.
    pub count: usize,
    /// Cheapest point (first one on ties).
    pub min: PricePoint,
    /// Most expensive point (first one on ties).
    pub max: PricePoint,
    /// Arithmetic mean price.
    pub mean: f64,
    /// Mean over peak hours, when any are present.
    pub peak_mean: Option<f64>,
}

impl PriceTable {
    /// Creates a table from points already in increasing period order.
    pub fn new(points: Vec<PricePoint>) -> CoreResult<Self> {
        for point in &points {
            point.validate()?;
        }
        for pair in points.windows(2) {
            let (prev, next) = (pair[0].period, pair[1].period);
            if next == prev {
                return Err(CoreError::DuplicatePeriod { period: next });
            }
            if next < prev {
                return Err(CoreError::NonMonotonic {
                    previous: prev,
                    next,
                });
            }
        }
        Ok(Self { points })
    }

    /// Creates a table from `(period, price)` pairs in increasing order.
    pub fn from_pairs<I>(pairs: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let points = pairs
            .into_iter()
            .map(|(period, price)| PricePoint { period, price })
            .collect();
        Self::new(points)
    }

    /// Creates a table from points in any order, sorting by period.
    ///
    /// Duplicate periods are still rejected.
    pub fn from_unsorted(mut points: Vec<PricePoint>) -> CoreResult<Self> {
        for point in &points {
            point.validate()?;
        }
        points.sort_by(|a, b| a.period.total_cmp(&b.period));
        Self::new(points)
    }

    /// Creates an empty table.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the table has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the points as a slice.
    #[must_use]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Iterates over the points in period order.
    pub fn iter(&self) -> std::slice::Iter<'_, PricePoint> {
        self.points.iter()
    }

    /// Returns the first point.
    #[must_use]
    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    /// Returns the last point.
    #[must_use]
    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Returns the periods in order.
    #[must_use]
    pub fn periods(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.period).collect()
    }

    /// Returns the prices in period order.
    #[must_use]
    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }

    /// Returns the price at an exact period, if present.
    #[must_use]
    pub fn price_at(&self, period: f64) -> Option<f64> {
        self.points
            .binary_search_by(|p| p.period.total_cmp(&period))
            .ok()
            .map(|i| self.points[i].price)
    }

    /// Computes descriptive statistics, or `None` for an empty table.
    #[must_use]
    pub fn summary(&self) -> Option<PriceSummary> {
        let first = *self.points.first()?;

        let mut min = first;
        let mut max = first;
        let mut sum = 0.0;
        let mut peak_sum = 0.0;
        let mut peak_count = 0usize;

        for point in &self.points {
            if point.price < min.price {
                min = *point;
            }
            if point.price > max.price {
                max = *point;
            }
            sum += point.price;
            if is_peak_hour(point.period) {
                peak_sum += point.price;
                peak_count += 1;
            }
        }

        Some(PriceSummary {
            count: self.points.len(),
            min,
            max,
            mean: sum / self.points.len() as f64,
            peak_mean: (peak_count > 0).then(|| peak_sum / peak_count as f64),
        })
    }
}

fn is_peak_hour(period: f64) -> bool {
    let start = f64::from(*PEAK_HOURS.start());
    let end = f64::from(*PEAK_HOURS.end()) + 1.0;
    period >= start && period < end
}

impl TryFrom<Vec<PricePoint>> for PriceTable {
    type Error = CoreError;

    fn try_from(points: Vec<PricePoint>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<PriceTable> for Vec<PricePoint> {
    fn from(table: PriceTable) -> Self {
        table.points
    }
}

impl<'a> IntoIterator for &'a PriceTable {
    type Item = &'a PricePoint;
    type IntoIter = std::slice::Iter<'a, PricePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
