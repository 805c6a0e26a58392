//! Hedge command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use gridcurve_core::Currency;
use gridcurve_curves::{ForwardCurve, HedgeEstimate, HedgePeriod, MAX_HORIZON_PERIODS};

use crate::cli::OutputFormat;
use crate::commands::{Context, CurveMethodArgs, QuoteArgs};
use crate::output::{format_price, print_header, print_json, print_output, KeyValue};

/// Arguments for the hedge command.
#[derive(Args, Debug)]
pub struct HedgeArgs {
    #[command(flatten)]
    pub quotes: QuoteArgs,

    #[command(flatten)]
    pub methods: CurveMethodArgs,

    /// Volume hedged in each period, in MWh (default from config: 100)
    #[arg(short, long, allow_hyphen_values = true)]
    pub exposure: Option<f64>,

    /// Number of monthly periods to hedge, at most 1200 (default from config: 12)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_HORIZON_PERIODS)))]
    pub horizon: Option<u32>,
}

/// One row of the hedge schedule.
#[derive(Debug, Serialize, Tabled)]
struct ScheduleRow {
    #[tabled(rename = "Month")]
    period: u32,
    #[tabled(rename = "Price", display_with = "two_decimals")]
    price: f64,
    #[tabled(rename = "Cost", display_with = "two_decimals")]
    cost: f64,
}

impl From<&HedgePeriod> for ScheduleRow {
    fn from(p: &HedgePeriod) -> Self {
        Self {
            period: p.period,
            price: p.price,
            cost: p.cost,
        }
    }
}

fn two_decimals(value: &f64) -> String {
    format!("{value:.2}")
}

/// Execute the hedge command.
pub fn execute(args: HedgeArgs, ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;
    let table = args.quotes.load()?;
    let (interpolation, extrapolation) = args.methods.resolve(&config);

    let exposure = args.exposure.unwrap_or(config.hedge.exposure_per_period);
    let horizon = args.horizon.unwrap_or(config.hedge.horizon_periods);

    let curve = ForwardCurve::new(&table, interpolation, extrapolation)?;
    let estimate = HedgeEstimate::compute(&curve, exposure, horizon)?;

    let schedule: Vec<ScheduleRow> = estimate.schedule.iter().map(ScheduleRow::from).collect();

    match ctx.format {
        OutputFormat::Table => {
            print_header("Hedge cost estimate");
            print_output(&summary(&estimate, config.query.currency), ctx.format)?;
            print_header("Schedule");
            print_output(&schedule, ctx.format)?;
        }
        OutputFormat::Json => print_json(&estimate)?,
        OutputFormat::Csv => print_output(&schedule, ctx.format)?,
        OutputFormat::Minimal => println!("{:.2}", estimate.average_cost),
    }

    Ok(())
}

fn summary(estimate: &HedgeEstimate, currency: Currency) -> Vec<KeyValue> {
    let symbol = currency.symbol();
    vec![
        KeyValue::new(
            "Exposure per period",
            format!("{} MWh", estimate.exposure_per_period),
        ),
        KeyValue::new("Horizon", format!("{} months", estimate.horizon_periods)),
        KeyValue::new("Average price", format_price(estimate.average_price, symbol)),
        KeyValue::new("Total cost", format_price(estimate.total_cost, symbol)),
        KeyValue::new(
            "Average cost per period",
            format_price(estimate.average_cost, symbol),
        ),
    ]
}
