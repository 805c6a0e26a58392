//! CLI command implementations.

pub mod config;
pub mod curve;
pub mod hedge;
pub mod prices;

pub use config::ConfigArgs;
pub use curve::CurveArgs;
pub use hedge::HedgeArgs;
pub use prices::PricesArgs;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use gridcurve_config::AppConfig;
use gridcurve_core::{PricePoint, PriceTable};
use gridcurve_curves::{ExtrapolationMethod, InterpolationMethod};
use serde::Deserialize;
use tracing::debug;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Configuration location and output settings shared by all commands.
pub struct Context {
    /// Explicit `--config` file, or the default location.
    pub config_path: Option<PathBuf>,
    explicit: bool,
    pub format: OutputFormat,
}

impl Context {
    pub fn new(explicit: Option<&Path>, format: OutputFormat) -> Self {
        Self {
            config_path: explicit.map(Path::to_path_buf).or_else(default_config_path),
            explicit: explicit.is_some(),
            format,
        }
    }

    /// Returns the file the configuration is read from, if any.
    ///
    /// An explicit path is always used; the default one only if it exists.
    pub fn config_source(&self) -> Option<&Path> {
        self.config_path
            .as_deref()
            .filter(|path| self.explicit || path.exists())
    }

    /// Loads the configuration, falling back to defaults when there is no
    /// file to read.
    pub fn load_config(&self) -> Result<AppConfig> {
        match self.config_source() {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                Ok(AppConfig::from_file(path).map_err(|e| CliError::Config(e.to_string()))?)
            }
            None => {
                debug!("Using default configuration");
                Ok(AppConfig::default())
            }
        }
    }
}

/// Returns `<config dir>/gridcurve/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .map(|dir| dir.join("gridcurve").join("config.toml"))
}

/// Tenor quotes given inline or in a CSV file.
#[derive(Args, Debug, Clone)]
pub struct QuoteArgs {
    /// Tenors in months (comma-separated, e.g. "0,1,2,3,12")
    #[arg(short, long, requires = "prices", conflicts_with = "input")]
    pub tenors: Option<String>,

    /// Prices at each tenor (comma-separated, e.g. "90,92,94,98,105")
    #[arg(short, long, requires = "tenors")]
    pub prices: Option<String>,

    /// CSV file with `tenor,price` columns
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

/// Curve construction overrides.
#[derive(Args, Debug, Clone, Copy)]
pub struct CurveMethodArgs {
    /// Interpolation method (default from config: cubic-spline)
    #[arg(long)]
    pub interpolation: Option<InterpolationMethod>,

    /// Extrapolation method: none, flat, linear, polynomial (default from config: flat)
    #[arg(long)]
    pub extrapolation: Option<ExtrapolationMethod>,
}

impl CurveMethodArgs {
    /// Resolves the methods against the configuration.
    pub fn resolve(self, config: &AppConfig) -> (InterpolationMethod, ExtrapolationMethod) {
        (
            self.interpolation.unwrap_or(config.curve.interpolation),
            self.extrapolation.unwrap_or(config.curve.extrapolation),
        )
    }
}

#[derive(Debug, Deserialize)]
struct QuoteRow {
    tenor: f64,
    price: f64,
}

impl QuoteArgs {
    /// Loads the quotes into a table, sorted by tenor.
    pub fn load(&self) -> CliResult<PriceTable> {
        let points = match (&self.tenors, &self.prices, &self.input) {
            (Some(tenors), Some(prices), _) => zip_quotes(tenors, prices)?,
            (_, _, Some(path)) => read_quotes_csv(path)?,
            _ => return Err(CliError::MissingQuotes),
        };
        PriceTable::from_unsorted(points).map_err(|e| CliError::InvalidInput(e.to_string()))
    }
}

fn zip_quotes(tenors: &str, prices: &str) -> CliResult<Vec<PricePoint>> {
    let tenors = parse_list(tenors, "tenor")?;
    let prices = parse_list(prices, "price")?;
    if tenors.len() != prices.len() {
        return Err(CliError::InvalidInput(format!(
            "{} tenors but {} prices",
            tenors.len(),
            prices.len()
        )));
    }
    Ok(tenors
        .into_iter()
        .zip(prices)
        .map(|(period, price)| PricePoint { period, price })
        .collect())
}

fn read_quotes_csv(path: &Path) -> CliResult<Vec<PricePoint>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| CliError::InvalidInput(format!("{}: {e}", path.display())))?;

    reader
        .deserialize::<QuoteRow>()
        .map(|row| {
            row.map(|r| PricePoint {
                period: r.tenor,
                price: r.price,
            })
            .map_err(|e| CliError::InvalidInput(format!("{}: {e}", path.display())))
        })
        .collect()
}

/// Parses a comma-separated list of numbers.
pub fn parse_list(s: &str, what: &str) -> CliResult<Vec<f64>> {
    s.split(',')
        .filter(|item| !item.trim().is_empty())
        .map(|item| {
            item.trim()
                .parse::<f64>()
                .map_err(|_| CliError::InvalidInput(format!("Invalid {what}: '{}'", item.trim())))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_list() {
        assert_eq!(parse_list("0, 1,2.5", "tenor").unwrap(), vec![0.0, 1.0, 2.5]);
        assert_eq!(parse_list("1,2,", "tenor").unwrap(), vec![1.0, 2.0]);
        assert!(parse_list("1,x", "tenor").is_err());
    }

    #[test]
    fn test_inline_quotes() {
        let args = QuoteArgs {
            tenors: Some("12,0,3".to_string()),
            prices: Some("105,90,98".to_string()),
            input: None,
        };
        let table = args.load().unwrap();
        assert_eq!(table.periods(), vec![0.0, 3.0, 12.0]);
        assert_eq!(table.prices(), vec![90.0, 98.0, 105.0]);
    }

    #[test]
    fn test_mismatched_quotes() {
        let args = QuoteArgs {
            tenors: Some("0,1,2".to_string()),
            prices: Some("90,92".to_string()),
            input: None,
        };
        assert!(matches!(args.load(), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_csv_quotes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tenor,price\n0,90\n 1 , 92\n12,105").unwrap();

        let args = QuoteArgs {
            tenors: None,
            prices: None,
            input: Some(file.path().to_path_buf()),
        };
        let table = args.load().unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.price_at(1.0), Some(92.0));
    }

    #[test]
    fn test_missing_quotes() {
        let args = QuoteArgs {
            tenors: None,
            prices: None,
            input: None,
        };
        assert!(matches!(args.load(), Err(CliError::MissingQuotes)));
    }
}
