//! Config command implementation.

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};

use gridcurve_config::AppConfig;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::error::CliError;
use crate::output::{print_info, print_json, print_success};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.action {
        ConfigAction::Show => show(ctx),
        ConfigAction::Path => {
            let path = ctx
                .config_path
                .as_deref()
                .ok_or_else(|| anyhow!("No configuration directory on this system"))?;
            println!("{}", path.display());
            Ok(())
        }
        ConfigAction::Init { force } => init(ctx, force),
    }
}

fn show(ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;

    if ctx.format == OutputFormat::Json {
        return print_json(&config);
    }

    match ctx.config_source() {
        Some(path) => print_info(&format!("Loaded from {}", path.display())),
        None => print_info("No configuration file found, using defaults"),
    }
    let toml = config
        .to_toml_string()
        .map_err(|e| CliError::Config(e.to_string()))?;
    print!("{toml}");
    Ok(())
}

fn init(ctx: &Context, force: bool) -> Result<()> {
    let path = ctx
        .config_path
        .as_deref()
        .ok_or_else(|| anyhow!("No configuration directory on this system"))?;

    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ))
        .into());
    }

    AppConfig::default()
        .write_to(path)
        .map_err(|e| CliError::Config(e.to_string()))?;
    print_success(&format!("Wrote default configuration to {}", path.display()));
    Ok(())
}
