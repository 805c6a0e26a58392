//! Error types for curve operations.

use gridcurve_core::CoreError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Not enough data points for interpolation.
    #[error("Insufficient points: need at least {required}, got {got}")]
    InsufficientPoints {
        /// Minimum required points.
        required: usize,
        /// Actual number of points provided.
        got: usize,
    },

    /// Tenors are not strictly increasing.
    #[error("Non-monotonic tenors: {prev:.4} >= {current:.4}")]
    NonMonotonicTenors {
        /// Previous tenor value.
        prev: f64,
        /// Current tenor value.
        current: f64,
    },

    /// Requested tenor is outside the curve's range and extrapolation is off.
    #[error("Tenor {requested:.4} out of range [{min:.4}, {max:.4}]")]
    TenorOutOfRange {
        /// The requested tenor in months.
        requested: f64,
        /// Minimum valid tenor.
        min: f64,
        /// Maximum valid tenor.
        max: f64,
    },

    /// Hedge horizon outside `1..=MAX_HORIZON_PERIODS`.
    #[error("Invalid horizon: {horizon} (must be 1 to 1200 periods)")]
    InvalidHorizon {
        /// The rejected horizon.
        horizon: u32,
    },

    /// Input value is not usable (non-finite, negative tenor, bad grid).
    #[error("Invalid value: {reason}")]
    InvalidValue {
        /// Description of the problem.
        reason: String,
    },

    /// Interpolation failed.
    #[error("Interpolation error: {reason}")]
    InterpolationError {
        /// Description of the interpolation error.
        reason: String,
    },
}

impl CurveError {
    /// Creates an insufficient points error.
    #[must_use]
    pub fn insufficient_points(required: usize, got: usize) -> Self {
        Self::InsufficientPoints { required, got }
    }

    /// Creates a tenor out of range error.
    #[must_use]
    pub fn tenor_out_of_range(requested: f64, min: f64, max: f64) -> Self {
        Self::TenorOutOfRange {
            requested,
            min,
            max,
        }
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }

    /// Creates an interpolation error.
    #[must_use]
    pub fn interpolation_error(reason: impl Into<String>) -> Self {
        Self::InterpolationError {
            reason: reason.into(),
        }
    }
}

impl From<CoreError> for CurveError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NonMonotonic { previous, next } => Self::NonMonotonicTenors {
                prev: previous,
                current: next,
            },
            CoreError::DuplicatePeriod { period } => Self::NonMonotonicTenors {
                prev: period,
                current: period,
            },
            other => Self::invalid_value(other.to_string()),
        }
    }
}

impl From<gridcurve_math::MathError> for CurveError {
    fn from(err: gridcurve_math::MathError) -> Self {
        Self::interpolation_error(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CurveError::insufficient_points(2, 1);
        assert_eq!(err.to_string(), "Insufficient points: need at least 2, got 1");

        let err = CurveError::InvalidHorizon { horizon: 0 };
        assert!(err.to_string().contains("Invalid horizon: 0"));
    }

    #[test]
    fn test_from_core_error() {
        let err: CurveError = CoreError::DuplicatePeriod { period: 3.0 }.into();
        assert!(matches!(err, CurveError::NonMonotonicTenors { .. }));

        let err: CurveError = CoreError::invalid_point(1.0, f64::NAN, "price is not finite").into();
        assert!(matches!(err, CurveError::InvalidValue { .. }));
    }
}
