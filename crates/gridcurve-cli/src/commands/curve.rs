//! Curve command implementation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use gridcurve_core::{Currency, PricePoint, PriceTable};
use gridcurve_curves::{ExtrapolationMethod, ForwardCurve, InterpolationMethod};

use crate::chart::{write_line_chart, ChartLabels};
use crate::cli::OutputFormat;
use crate::commands::{parse_list, Context, CurveMethodArgs, QuoteArgs};
use crate::output::{
    format_period, print_header, print_json, print_output, print_success, KeyValue, PointRow,
};

/// Points drawn along the charted curve.
const CHART_SAMPLES: usize = 200;

/// Upper bound for `--steps`.
const MAX_STEPS: u32 = 10_000;

/// Arguments for the curve command.
#[derive(Args, Debug)]
pub struct CurveArgs {
    #[command(flatten)]
    pub quotes: QuoteArgs,

    #[command(flatten)]
    pub methods: CurveMethodArgs,

    /// Tenors to evaluate (comma-separated). Overrides --steps.
    #[arg(long, conflicts_with_all = ["steps", "max_tenor"])]
    pub at: Option<String>,

    /// Number of evenly spaced sample points (2 to 10000)
    #[arg(long, default_value = "25", value_parser = clap::value_parser!(u32).range(2..=i64::from(MAX_STEPS)))]
    pub steps: u32,

    /// Last sampled tenor (default: last quoted tenor)
    #[arg(long)]
    pub max_tenor: Option<f64>,

    /// Write an SVG chart of the curve to this file
    #[arg(long, value_name = "FILE")]
    pub chart: Option<PathBuf>,
}

#[derive(Serialize)]
struct CurveReport<'a> {
    interpolation: InterpolationMethod,
    extrapolation: ExtrapolationMethod,
    quotes: &'a [PricePoint],
    curve: &'a [PricePoint],
}

/// Execute the curve command.
pub fn execute(args: CurveArgs, ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;
    let table = args.quotes.load()?;
    let (interpolation, extrapolation) = args.methods.resolve(&config);

    let curve = ForwardCurve::new(&table, interpolation, extrapolation)?;

    let points = match &args.at {
        Some(at) => curve.sample(&parse_list(at, "tenor")?)?,
        None => {
            let (start, last) = curve.tenor_bounds();
            curve.sample_range(start, args.max_tenor.unwrap_or(last), args.steps as usize)?
        }
    };

    match ctx.format {
        OutputFormat::Table => {
            print_header("Forward curve");
            print_output(&curve_info(&curve, &table), ctx.format)?;
            print_header("Curve");
            print_output(&rows(&points), ctx.format)?;
        }
        OutputFormat::Json => print_json(&CurveReport {
            interpolation,
            extrapolation,
            quotes: table.points(),
            curve: &points,
        })?,
        OutputFormat::Csv | OutputFormat::Minimal => print_output(&rows(&points), ctx.format)?,
    }

    if let Some(path) = &args.chart {
        let line = chart_line(&curve, &points)?;
        let labels = chart_labels(&curve, config.query.currency);
        write_line_chart(path, &labels, &line, table.points())?;
        if ctx.format == OutputFormat::Table {
            print_success(&format!("Chart written to {}", path.display()));
        }
    }

    Ok(())
}

fn rows(points: &[PricePoint]) -> Vec<PointRow> {
    points.iter().map(PointRow::from).collect()
}

fn curve_info(curve: &ForwardCurve, table: &PriceTable) -> Vec<KeyValue> {
    let (min, max) = curve.tenor_bounds();
    vec![
        KeyValue::new("Quotes", table.len().to_string()),
        KeyValue::new(
            "Quoted tenors",
            format!("{} to {}", format_period(min), format_period(max)),
        ),
        KeyValue::new("Interpolation", curve.interpolation().as_str()),
        KeyValue::new("Extrapolation", curve.extrapolation().as_str()),
    ]
}

/// Samples the curve densely over the quoted tenors and every requested one.
fn chart_line(curve: &ForwardCurve, requested: &[PricePoint]) -> Result<Vec<PricePoint>> {
    let (min, max) = curve.tenor_bounds();
    let (start, end) = requested
        .iter()
        .fold((min, max), |(lo, hi), p| (lo.min(p.period), hi.max(p.period)));
    Ok(curve.sample_range(start, end, CHART_SAMPLES)?)
}

fn chart_labels(curve: &ForwardCurve, currency: Currency) -> ChartLabels {
    ChartLabels {
        title: format!(
            "Forward Curve ({}, {} extrapolation)",
            curve.interpolation(),
            curve.extrapolation()
        ),
        x_desc: "Tenor (months)".to_string(),
        y_desc: format!("Price ({}/MWh)", currency.symbol()),
    }
}
