//! Interpolation methods for forward curves.

use serde::{Deserialize, Serialize};

pub use gridcurve_math::extrapolation::ExtrapolationMethod;

use crate::error::CurveError;

/// Interpolation methods for forward price curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum InterpolationMethod {
    /// Natural cubic spline through the quoted tenors.
    #[default]
    CubicSpline,

    /// Straight lines between quoted tenors.
    Linear,
}

impl InterpolationMethod {
    /// Returns true if this method produces smooth curves.
    #[must_use]
    pub fn is_smooth(&self) -> bool {
        matches!(self, Self::CubicSpline)
    }

    /// Returns the name used in config files and on the command line.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CubicSpline => "cubic-spline",
            Self::Linear => "linear",
        }
    }
}

impl std::fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::CubicSpline => "Cubic Spline",
            Self::Linear => "Linear",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for InterpolationMethod {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['_', ' '], "-").as_str() {
            "cubic-spline" | "cubic" | "spline" => Ok(Self::CubicSpline),
            "linear" => Ok(Self::Linear),
            other => Err(CurveError::invalid_value(format!(
                "unknown interpolation method '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_spline() {
        assert_eq!(InterpolationMethod::default(), InterpolationMethod::CubicSpline);
        assert!(InterpolationMethod::CubicSpline.is_smooth());
        assert!(!InterpolationMethod::Linear.is_smooth());
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "cubic-spline".parse::<InterpolationMethod>().unwrap(),
            InterpolationMethod::CubicSpline
        );
        assert_eq!(
            "Cubic Spline".parse::<InterpolationMethod>().unwrap(),
            InterpolationMethod::CubicSpline
        );
        assert_eq!(
            "LINEAR".parse::<InterpolationMethod>().unwrap(),
            InterpolationMethod::Linear
        );
        assert!("nelson-siegel".parse::<InterpolationMethod>().is_err());
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&InterpolationMethod::CubicSpline).unwrap();
        assert_eq!(json, "\"cubic-spline\"");
        let json = serde_json::to_string(&ExtrapolationMethod::Flat).unwrap();
        assert_eq!(json, "\"flat\"");
    }
}
