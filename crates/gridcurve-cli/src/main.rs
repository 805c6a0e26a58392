//! gridcurve - electricity price retrieval and forward curve analytics.
//!
//! # Usage
//!
//! ```bash
//! # UK day-ahead hourly prices from EPEX, charted to SVG
//! gridcurve prices --provider epex --date 2024-02-16 --chart prices.svg
//!
//! # Fit a forward curve through tenor quotes
//! gridcurve curve --tenors 0,1,2,3,12 --prices 90,92,94,98,105 --steps 13
//!
//! # Average monthly cost of hedging 100 MWh per month for a year
//! gridcurve hedge --tenors 0,1,2,3,12 --prices 90,92,94,98,105 --exposure 100 --horizon 12
//!
//! # Write the default configuration file
//! gridcurve config init
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod chart;
mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = commands::Context::new(cli.config.as_deref(), cli.format);

    match cli.command {
        Commands::Prices(args) => commands::prices::execute(args, &ctx),
        Commands::Curve(args) => commands::curve::execute(args, &ctx),
        Commands::Hedge(args) => commands::hedge::execute(args, &ctx),
        Commands::Config(args) => commands::config::execute(args, &ctx),
    }
}

/// Logs go to stderr so JSON and CSV on stdout stay clean.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
