//! Prices command implementation.
//!
//! Fetches hourly prices from one provider and prints or charts them.

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use serde::Serialize;

use gridcurve_config::AppConfig;
use gridcurve_core::{Currency, PricePoint, PriceSummary, PriceTable, Product, Provider};
use gridcurve_sources::{connect, PriceQuery};

use crate::chart::{write_line_chart, ChartLabels};
use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{
    format_period, format_price, print_header, print_json, print_output, print_success,
    print_warning, KeyValue, PointRow,
};

/// Arguments for the prices command.
#[derive(Args, Debug)]
pub struct PricesArgs {
    /// Data provider: epex, nordpool or bloomberg (default from config)
    #[arg(long)]
    pub provider: Option<Provider>,

    /// Market area (default from config: UK)
    #[arg(short, long)]
    pub market: Option<String>,

    /// Product: DayAhead or Intraday (default from config)
    #[arg(long)]
    pub product: Option<Product>,

    /// Delivery date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Price currency, e.g. GBP or EUR (default from config)
    #[arg(long)]
    pub currency: Option<Currency>,

    /// Write an SVG line chart of the prices to this file
    #[arg(long, value_name = "FILE")]
    pub chart: Option<PathBuf>,
}

impl PricesArgs {
    fn resolve(&self, config: &AppConfig) -> (Provider, PriceQuery) {
        let provider = self.provider.unwrap_or(config.provider);
        let query = PriceQuery {
            market: self
                .market
                .clone()
                .unwrap_or_else(|| config.query.market.clone()),
            product: self.product.unwrap_or(config.query.product),
            date: self.date.unwrap_or_else(|| Local::now().date_naive()),
            currency: self.currency.unwrap_or(config.query.currency),
        };
        (provider, query)
    }
}

#[derive(Serialize)]
struct PricesReport<'a> {
    provider: Provider,
    #[serde(flatten)]
    query: &'a PriceQuery,
    prices: &'a [PricePoint],
    summary: Option<PriceSummary>,
}

/// Execute the prices command.
pub fn execute(args: PricesArgs, ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;
    let (provider, query) = args.resolve(&config);

    let source = connect(provider, &config.sources)?;
    let table = source.fetch(&query)?;

    if table.is_empty() {
        print_warning(&format!("{provider} returned no prices for {}", query.date));
    }

    print_prices(provider, &query, &table, ctx.format)?;

    if let Some(path) = &args.chart {
        if table.is_empty() {
            print_warning("Nothing to chart");
        } else {
            let labels = chart_labels(provider, &query);
            write_line_chart(path, &labels, table.points(), table.points())?;
            if ctx.format == OutputFormat::Table {
                print_success(&format!("Chart written to {}", path.display()));
            }
        }
    }

    Ok(())
}

fn print_prices(
    provider: Provider,
    query: &PriceQuery,
    table: &PriceTable,
    format: OutputFormat,
) -> Result<()> {
    let rows: Vec<PointRow> = table.iter().map(PointRow::from).collect();

    match format {
        OutputFormat::Table => {
            print_header(&format!(
                "{} {} {} prices for {} ({})",
                provider, query.market, query.product, query.date, query.currency
            ));
            print_output(&rows, format)?;
            if let Some(summary) = table.summary() {
                print_header("Summary");
                print_output(&summary_rows(&summary, query.currency), format)?;
            }
        }
        OutputFormat::Json => print_json(&PricesReport {
            provider,
            query,
            prices: table.points(),
            summary: table.summary(),
        })?,
        OutputFormat::Csv | OutputFormat::Minimal => print_output(&rows, format)?,
    }
    Ok(())
}

fn summary_rows(summary: &PriceSummary, currency: Currency) -> Vec<KeyValue> {
    let symbol = currency.symbol();
    let mut rows = vec![
        KeyValue::new("Periods", summary.count.to_string()),
        KeyValue::new(
            "Min",
            format!(
                "{} at {}",
                format_price(summary.min.price, symbol),
                format_period(summary.min.period)
            ),
        ),
        KeyValue::new(
            "Max",
            format!(
                "{} at {}",
                format_price(summary.max.price, symbol),
                format_period(summary.max.period)
            ),
        ),
        KeyValue::new("Mean", format_price(summary.mean, symbol)),
    ];
    if let Some(peak) = summary.peak_mean {
        rows.push(KeyValue::new("Peak mean (07-19)", format_price(peak, symbol)));
    }
    rows
}

fn chart_labels(provider: Provider, query: &PriceQuery) -> ChartLabels {
    let product = match query.product {
        Product::DayAhead => "Day-Ahead",
        Product::Intraday => "Intraday",
    };
    let x_desc = match provider {
        Provider::Bloomberg => format!("Days from {}", query.date),
        Provider::Epex | Provider::NordPool => "Hour of Day".to_string(),
    };
    ChartLabels {
        title: format!("{} {} Power Prices ({})", query.market, product, query.date),
        x_desc,
        y_desc: format!("Power Price ({}/MWh)", query.currency.symbol()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_falls_back_to_config() {
        let mut config = AppConfig::default();
        config.provider = Provider::NordPool;
        config.query.market = "N2EX".to_string();

        let args = PricesArgs {
            provider: None,
            market: None,
            product: None,
            date: NaiveDate::from_ymd_opt(2024, 2, 16),
            currency: Some(Currency::EUR),
            chart: None,
        };
        let (provider, query) = args.resolve(&config);
        assert_eq!(provider, Provider::NordPool);
        assert_eq!(query.market, "N2EX");
        assert_eq!(query.currency, Currency::EUR);
        assert_eq!(query.product, Product::DayAhead);
    }

    #[test]
    fn test_chart_labels() {
        let query = PriceQuery::new("UK", NaiveDate::from_ymd_opt(2024, 2, 16).unwrap());
        let labels = chart_labels(Provider::Epex, &query);
        assert_eq!(labels.title, "UK Day-Ahead Power Prices (2024-02-16)");
        assert_eq!(labels.x_desc, "Hour of Day");
        assert_eq!(labels.y_desc, "Power Price (£/MWh)");
    }

    #[test]
    fn test_summary_rows() {
        let table = PriceTable::from_pairs([(6.0, 50.0), (8.0, 90.0)]).unwrap();
        let rows = summary_rows(&table.summary().unwrap(), Currency::GBP);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[1].value, "£50.00 at 6");
        assert_eq!(rows[4].value, "£90.00");
    }
}
