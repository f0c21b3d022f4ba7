//! `printcost`: quote the cost and print time of 3D print jobs.
//!
//! # Commands
//!
//! - `printcost quote 12.5 40` - Quote one job per volume (cm³)
//! - `printcost materials` - List catalog materials
//! - `printcost printers [--make <MAKE>]` - List catalog printers
//! - `printcost rates` - List electricity tariffs
//! - `printcost currencies` - List output currencies
//! - `printcost reconcile` - Compare printer power figures with a power table
//! - `printcost export` - Print the catalog as JSON
//!
//! Pass `--catalog <FILE>` to use a catalog file instead of the built-in one.
//! Logging goes to stderr; set `RUST_LOG` or pass `-v` for more detail.

mod list;
mod quote;
mod reconcile;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use estimate::catalog::Catalog;
use tracing_subscriber::EnvFilter;

/// Cost and print-time quotes for FDM print jobs
#[derive(Parser)]
#[command(name = "printcost")]
#[command(about = "Cost and print-time quotes for 3D print jobs", long_about = None)]
#[command(version)]
struct Cli {
    /// Catalog JSON file to use instead of the built-in catalog
    #[arg(long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quote one or more jobs
    Quote(quote::QuoteArgs),

    /// List materials with density and price
    Materials,

    /// List printers with hardware cost, lifetime and power draw
    Printers {
        /// Only show this manufacturer
        #[arg(long)]
        make: Option<String>,
    },

    /// List electricity tariffs
    Rates,

    /// List output currencies
    Currencies,

    /// Report printers whose power figures disagree with a power table
    Reconcile {
        /// Power table JSON file (make -> model -> watts); defaults to the bundled table
        #[arg(long, value_name = "FILE")]
        power_table: Option<PathBuf>,

        /// Exit with an error if any printer disagrees
        #[arg(long)]
        strict: bool,
    },

    /// Print the catalog as JSON
    Export,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let catalog = load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Commands::Quote(args) => quote::run(&catalog, &args),
        Commands::Materials => {
            list::materials(&catalog);
            Ok(())
        }
        Commands::Printers { make } => list::printers(&catalog, make.as_deref()),
        Commands::Rates => {
            list::rates(&catalog);
            Ok(())
        }
        Commands::Currencies => {
            list::currencies(&catalog);
            Ok(())
        }
        Commands::Reconcile {
            power_table,
            strict,
        } => reconcile::run(&catalog, power_table.as_deref(), strict),
        Commands::Export => {
            let json = catalog.to_json_pretty().context("Failed to serialize catalog")?;
            println!("{json}");
            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => Catalog::builtin().context("Built-in catalog is invalid"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use estimate::prelude::*;

    fn quote_args(argv: &[&str]) -> quote::QuoteArgs {
        let mut full = vec!["printcost", "quote"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).unwrap().command {
            Commands::Quote(args) => args,
            _ => panic!("expected quote"),
        }
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn quote_defaults() {
        let args = quote_args(&["10"]);
        assert_eq!(args.material, "PLA");
        assert_eq!(args.rate, estimate::DEFAULT_RATE_PRESET);
        assert!((args.markup - 20.0).abs() < f64::EPSILON);
        assert!(!args.business.business);
    }

    #[test]
    fn quote_with_fixed_hours() {
        let catalog = Catalog::builtin().unwrap();
        let args = quote_args(&["10", "--hours", "2"]);
        let job = quote::build_estimator(&catalog, &args)
            .unwrap()
            .estimate_job(&PrintJobGeometry::from_volume_cm3(10.0))
            .unwrap();

        assert!(matches!(job.time.source, TimeSource::Provided));
        assert!((job.breakdown.material_cost - 0.31).abs() < 1e-12);
        assert!((job.breakdown.energy_cost - 0.068).abs() < 1e-12);
    }

    #[test]
    fn bare_throughput_flag_uses_default_rate() {
        let args = quote_args(&["22", "--throughput"]);
        assert_eq!(args.throughput, Some(11.0));
    }

    #[test]
    fn business_flags_require_business() {
        let parsed = Cli::try_parse_from(["printcost", "quote", "10", "--hourly-rate", "20"]);
        assert!(parsed.is_err());

        let catalog = Catalog::builtin().unwrap();
        let args = quote_args(&["10", "--business", "--hourly-rate", "20", "--fail-rate", "10"]);
        let estimator = quote::build_estimator(&catalog, &args).unwrap();
        assert!(matches!(estimator.mode(), PricingMode::Business(p) if (p.hourly_rate - 20.0).abs() < f64::EPSILON));
    }

    #[test]
    fn printer_overrides_keep_unset_catalog_values() {
        let catalog = Catalog::builtin().unwrap();
        let args = quote_args(&["10", "--hours", "2", "--power-watts", "200"]);
        let job = quote::build_estimator(&catalog, &args)
            .unwrap()
            .estimate_job(&PrintJobGeometry::from_volume_cm3(10.0))
            .unwrap();

        // 0.4 kWh × 0.34
        assert!((job.breakdown.energy_cost - 0.136).abs() < 1e-12);
        // 599 / 5000 h × 2 h
        assert!((job.breakdown.depreciation_cost - 0.2396).abs() < 1e-12);
    }

    #[test]
    fn unknown_material_is_an_error() {
        let catalog = Catalog::builtin().unwrap();
        let args = quote_args(&["10", "--material", "Unobtainium"]);
        assert!(quote::build_estimator(&catalog, &args).is_err());
    }

    #[test]
    fn catalog_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, Catalog::builtin().unwrap().to_json_pretty().unwrap()).unwrap();

        let loaded = load_catalog(Some(&path)).unwrap();
        assert_eq!(loaded.printer_count(), Catalog::builtin().unwrap().printer_count());
        assert!(load_catalog(Some(&dir.path().join("missing.json"))).is_err());
    }
}
