//! Configuration file model.
//!
//! Every field has a default, so an empty file (or no file) is a complete
//! configuration.

use std::path::Path;
use std::time::Duration;

use gridcurve_core::{Currency, Product, Provider};
use gridcurve_curves::{ExtrapolationMethod, InterpolationMethod, MAX_HORIZON_PERIODS};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Provider used when none is given on the command line
    #[serde(default)]
    pub provider: Provider,

    /// Default query parameters
    #[serde(default)]
    pub query: QueryConfig,

    /// Provider endpoints and HTTP settings
    #[serde(default)]
    pub sources: SourcesConfig,

    /// Curve construction settings
    #[serde(default)]
    pub curve: CurveConfig,

    /// Hedge estimate settings
    #[serde(default)]
    pub hedge: HedgeConfig,
}

/// Default query parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Market area
    #[serde(default = "default_market")]
    pub market: String,

    /// Traded product
    #[serde(default)]
    pub product: Product,

    /// Price currency
    #[serde(default)]
    pub currency: Currency,
}

/// Provider endpoints and HTTP settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Timeout for each HTTP request, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// EPEX SPOT endpoint
    #[serde(default)]
    pub epex: EpexConfig,

    /// Nord Pool endpoint
    #[serde(default)]
    pub nordpool: NordPoolConfig,

    /// Bloomberg bridge endpoint
    #[serde(default)]
    pub bloomberg: BloombergConfig,
}

/// EPEX SPOT endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpexConfig {
    /// Market data URL
    #[serde(default = "default_epex_url")]
    pub url: String,
}

/// Nord Pool endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NordPoolConfig {
    /// Market data URL
    #[serde(default = "default_nordpool_url")]
    pub url: String,

    /// Bearer token, sent when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Bloomberg historical data bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloombergConfig {
    /// Bridge URL
    #[serde(default = "default_bloomberg_url")]
    pub url: String,

    /// Security to request
    #[serde(default = "default_ticker")]
    pub ticker: String,

    /// Field to request
    #[serde(default = "default_field")]
    pub field: String,
}

/// Curve construction settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Interpolation between quoted tenors
    #[serde(default)]
    pub interpolation: InterpolationMethod,

    /// Extrapolation beyond quoted tenors
    #[serde(default)]
    pub extrapolation: ExtrapolationMethod,
}

/// Hedge estimate settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HedgeConfig {
    /// MWh hedged in each period
    #[serde(default = "default_exposure")]
    pub exposure_per_period: f64,

    /// Number of monthly periods hedged
    #[serde(default = "default_horizon")]
    pub horizon_periods: u32,
}

fn default_market() -> String {
    "UK".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_epex_url() -> String {
    "https://api.epexspot.com/public/marketdata".to_string()
}

fn default_nordpool_url() -> String {
    "https://www.nordpoolgroup.com/api/marketdata".to_string()
}

fn default_bloomberg_url() -> String {
    "http://localhost:8194/historical".to_string()
}

fn default_ticker() -> String {
    "UKBL1 Index".to_string()
}

fn default_field() -> String {
    "PX_LAST".to_string()
}

fn default_exposure() -> f64 {
    100.0
}

fn default_horizon() -> u32 {
    12
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            market: default_market(),
            product: Product::default(),
            currency: Currency::default(),
        }
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            epex: EpexConfig::default(),
            nordpool: NordPoolConfig::default(),
            bloomberg: BloombergConfig::default(),
        }
    }
}

impl SourcesConfig {
    /// Returns the per-request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Returns the endpoint URL configured for a provider.
    #[must_use]
    pub fn url_for(&self, provider: Provider) -> &str {
        match provider {
            Provider::Epex => &self.epex.url,
            Provider::NordPool => &self.nordpool.url,
            Provider::Bloomberg => &self.bloomberg.url,
        }
    }
}

impl Default for EpexConfig {
    fn default() -> Self {
        Self {
            url: default_epex_url(),
        }
    }
}

impl Default for NordPoolConfig {
    fn default() -> Self {
        Self {
            url: default_nordpool_url(),
            token: None,
        }
    }
}

impl Default for BloombergConfig {
    fn default() -> Self {
        Self {
            url: default_bloomberg_url(),
            ticker: default_ticker(),
            field: default_field(),
        }
    }
}

impl Default for HedgeConfig {
    fn default() -> Self {
        Self {
            exposure_per_period: default_exposure(),
            horizon_periods: default_horizon(),
        }
    }
}

impl AppConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Deserialization(e.to_string()))?;
        config.validate_or_error()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound {
                    path: path.display().to_string(),
                }
            } else {
                ConfigError::Io {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                }
            }
        })?;
        Self::from_toml_str(&content)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialization(e.to_string()))
    }

    /// Writes the configuration to a TOML file, creating parent directories.
    pub fn write_to(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let io_err = |e: std::io::Error| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, self.to_toml_string()?).map_err(io_err)
    }
}

fn check_url(field: &str, url: &str, errors: &mut Vec<ValidationError>) {
    let url = url.trim();
    if url.is_empty() {
        errors.push(ValidationError::new(field, "URL must not be empty"));
    } else if !(url.starts_with("http://") || url.starts_with("https://")) {
        errors.push(ValidationError::new(
            field,
            format!("URL must start with http:// or https://, got '{url}'"),
        ));
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.query.market.trim().is_empty() {
            errors.push(ValidationError::new("query.market", "market must not be empty"));
        }

        errors.extend(self.sources.validate());

        if self.hedge.horizon_periods == 0 || self.hedge.horizon_periods > MAX_HORIZON_PERIODS {
            errors.push(ValidationError::new(
                "hedge.horizon_periods",
                format!("horizon must be 1 to {MAX_HORIZON_PERIODS} periods"),
            ));
        }
        if !self.hedge.exposure_per_period.is_finite() {
            errors.push(ValidationError::new(
                "hedge.exposure_per_period",
                "exposure must be a finite number",
            ));
        }

        errors
    }
}

impl Validate for SourcesConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.timeout_secs == 0 {
            errors.push(ValidationError::new(
                "sources.timeout_secs",
                "timeout must be at least 1 second",
            ));
        }
        check_url("sources.epex.url", &self.epex.url, &mut errors);
        check_url("sources.nordpool.url", &self.nordpool.url, &mut errors);
        check_url("sources.bloomberg.url", &self.bloomberg.url, &mut errors);

        if self.bloomberg.ticker.trim().is_empty() {
            errors.push(ValidationError::new("sources.bloomberg.ticker", "ticker must not be empty"));
        }
        if self.bloomberg.field.trim().is_empty() {
            errors.push(ValidationError::new("sources.bloomberg.field", "field must not be empty"));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.is_valid());
        assert_eq!(config.provider, Provider::Epex);
        assert_eq!(config.query.market, "UK");
        assert_eq!(config.query.currency, Currency::GBP);
        assert_eq!(config.sources.timeout(), Duration::from_secs(30));
        assert_eq!(config.sources.bloomberg.ticker, "UKBL1 Index");
        assert_eq!(config.curve.interpolation, InterpolationMethod::CubicSpline);
        assert_eq!(config.curve.extrapolation, ExtrapolationMethod::Flat);
        assert_eq!(config.hedge.horizon_periods, 12);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = AppConfig::from_toml_str(
            r#"
            provider = "nordpool"

            [sources.nordpool]
            token = "secret"

            [curve]
            extrapolation = "linear"

            [hedge]
            horizon_periods = 6
            "#,
        )
        .unwrap();

        assert_eq!(config.provider, Provider::NordPool);
        assert_eq!(config.sources.nordpool.token.as_deref(), Some("secret"));
        assert_eq!(
            config.sources.nordpool.url,
            "https://www.nordpoolgroup.com/api/marketdata"
        );
        assert_eq!(config.curve.extrapolation, ExtrapolationMethod::Linear);
        assert_eq!(config.curve.interpolation, InterpolationMethod::CubicSpline);
        assert_eq!(config.hedge.horizon_periods, 6);
        assert!((config.hedge.exposure_per_period - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_provider_rejected() {
        let err = AppConfig::from_toml_str("provider = \"reuters\"").unwrap_err();
        assert!(matches!(err, ConfigError::Deserialization(_)));
    }

    #[test]
    fn test_validation_errors_reported() {
        let mut config = AppConfig::default();
        config.sources.timeout_secs = 0;
        config.sources.epex.url = "ftp://example.com".to_string();
        config.hedge.horizon_periods = 0;
        config.hedge.exposure_per_period = f64::NAN;
        config.query.market = "  ".to_string();

        let fields: Vec<String> = config.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "query.market",
                "sources.timeout_secs",
                "sources.epex.url",
                "hedge.horizon_periods",
                "hedge.exposure_per_period",
            ]
        );
        assert!(matches!(
            config.validate_or_error(),
            Err(ConfigError::MultipleValidationErrors(_))
        ));
    }

    #[test]
    fn test_from_toml_rejects_invalid_values() {
        let err = AppConfig::from_toml_str("[hedge]\nhorizon_periods = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "hedge.horizon_periods"));
    }

    #[test]
    fn test_horizon_above_limit_rejected() {
        let err = AppConfig::from_toml_str("[hedge]\nhorizon_periods = 4000000000\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "hedge.horizon_periods"));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.provider = Provider::Bloomberg;
        config.hedge.exposure_per_period = 250.0;
        config.write_to(&path).unwrap();

        let loaded = AppConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
        assert_eq!(AppConfig::load(None).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_load_hand_written_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[query]\nmarket = \"DE-LU\"\ncurrency = \"EUR\"").unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.query.market, "DE-LU");
        assert_eq!(config.query.currency, Currency::EUR);
        assert_eq!(config.query.product, Product::DayAhead);
    }

    #[test]
    fn test_url_for() {
        let sources = SourcesConfig::default();
        assert_eq!(
            sources.url_for(Provider::Epex),
            "https://api.epexspot.com/public/marketdata"
        );
        assert_eq!(sources.url_for(Provider::Bloomberg), "http://localhost:8194/historical");
    }
}
