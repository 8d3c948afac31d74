//! optpricer CLI - European option pricing from the command line
//!
//! # Commands
//!
//! - `optpricer price` - Black-Scholes prices of calls, puts and straddles
//! - `optpricer greeks` - Delta, gamma, theta and vega (analytic or finite difference)
//! - `optpricer implied-vol` - Volatility implied by a premium
//! - `optpricer simulate` - Monte Carlo estimate with antithetic pairs
//!
//! # Configuration
//!
//! Settings come from built-in defaults, then the TOML file named by
//! `--config`, then command-line flags. `RUST_LOG` overrides the log level.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::greeks::GreeksArgs;
use commands::implied_vol::ImpliedVolArgs;
use commands::price::PriceArgs;
use commands::simulate::SimulateArgs;
use config::{CliConfig, LogLevel};
use output::OutputFormat;

/// Black-Scholes and Monte Carlo option pricer
#[derive(Parser)]
#[command(name = "optpricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price options with the closed-form model
    Price(PriceArgs),

    /// Compute price sensitivities
    Greeks(GreeksArgs),

    /// Solve for the volatility implied by a premium
    ImpliedVol(ImpliedVolArgs),

    /// Estimate prices by Monte Carlo simulation
    Simulate(SimulateArgs),
}

fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref())
        .context("failed to load configuration")?
        .merge_with_cli(cli.log_level, cli.verbose);

    init_tracing(config.log_level);
    info!("optpricer v{}", env!("CARGO_PKG_VERSION"));
    debug!("Configuration: {:?}", config);

    let output = match &cli.command {
        Commands::Price(args) => commands::price::run(args, cli.format),
        Commands::Greeks(args) => commands::greeks::run(args, cli.format),
        Commands::ImpliedVol(args) => {
            commands::implied_vol::run(args, &config.implied_vol, cli.format)
        }
        Commands::Simulate(args) => {
            commands::simulate::run(args, &config.monte_carlo, cli.format)
        }
    }?;

    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pricer_core::types::OptionType;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_price_with_negative_inputs() {
        let cli = Cli::try_parse_from([
            "optpricer", "price", "-t", "put", "--vol", "-0.2", "--time", "1", "--spot", "100",
            "--strike", "90", "--rate", "-0.01",
        ])
        .unwrap();

        match cli.command {
            Commands::Price(args) => {
                assert_eq!(args.option_type, Some(OptionType::Put));
                assert_eq!(args.vol, -0.2);
                assert_eq!(args.market.rate, -0.01);
                assert_eq!(args.market.dividend, 0.0);
            }
            _ => panic!("Expected price command"),
        }
        assert_eq!(cli.format, OutputFormat::Table);
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "optpricer", "simulate", "--vol", "0.2", "--time", "1", "--spot", "100", "--strike",
            "100", "--paths", "1000", "--seed", "9", "--format", "json", "--log-level", "debug",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        match cli.command {
            Commands::Simulate(args) => {
                assert_eq!(args.paths, Some(1000));
                assert_eq!(args.seed, Some(9));
                assert_eq!(args.option_type, None);
            }
            _ => panic!("Expected simulate command"),
        }
    }

    #[test]
    fn test_implied_vol_requires_option_type() {
        let result = Cli::try_parse_from([
            "optpricer", "implied-vol", "--premium", "10", "--time", "1", "--spot", "100",
            "--strike", "100",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_option_type_rejected() {
        let result = Cli::try_parse_from([
            "optpricer", "price", "-t", "butterfly", "--vol", "0.2", "--time", "1", "--spot",
            "100", "--strike", "100",
        ]);
        assert!(result.is_err());
    }
}
