//! modnav - Product module catalog and related-module navigation
//!
//! CLI entry point.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use modnav::catalog::builtin::BUILTIN_CATALOG;
use modnav::catalog::config::read_records;
use modnav::cli::{print_modules, print_selection, render_diagnostic_report};
use modnav::{diagnose, random_modules, select_next, ModuleCatalog};

/// Related-module navigation for product pages
///
/// Lists the product module catalog and previews what the "related modules"
/// widgets on a page would show.
#[derive(Parser, Debug)]
#[command(name = "modnav", version, about)]
struct Cli {
    /// Path to a modules.toml catalog (the built-in catalog when omitted)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Print JSON to stdout instead of formatted cards
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every module in catalog order
    List,
    /// Random modules, leaving out the current page's module
    Random {
        /// How many modules to pick
        #[arg(long, default_value_t = 4)]
        count: usize,
        /// Link of the module to leave out
        #[arg(long)]
        exclude: Option<String>,
    },
    /// The modules that follow the current one in catalog order
    Next {
        /// How many modules to pick
        #[arg(long, default_value_t = 4)]
        count: usize,
        /// Link of the current module
        #[arg(long)]
        current: String,
    },
    /// Check the catalog definition for problems
    Doctor,
}

/// Load the catalog named on the command line, or the built-in one.
fn load_catalog(path: Option<&Path>) -> Result<ModuleCatalog> {
    match path {
        Some(path) => ModuleCatalog::from_path(path),
        None => ModuleCatalog::builtin(),
    }
}

/// Read the catalog definition without validating it.
fn load_catalog_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display())),
        None => Ok(BUILTIN_CATALOG.to_string()),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    modnav::log::init_logger(cli.verbose);

    let catalog_path = cli.catalog.as_deref();

    match cli.command {
        Command::List => {
            let catalog = load_catalog(catalog_path)?;
            tracing::debug!(modules = catalog.len(), "Loaded catalog");
            if cli.json {
                print_json(&catalog.all())?;
            } else {
                let modules: Vec<_> = catalog.iter().collect();
                print_modules("Modules", &modules);
            }
        }
        Command::Random { count, exclude } => {
            let catalog = load_catalog(catalog_path)?;
            let modules = random_modules(&catalog, count, exclude.as_deref());
            if cli.json {
                print_json(&modules)?;
            } else {
                print_modules("You might also like", &modules);
            }
        }
        Command::Next { count, current } => {
            let catalog = load_catalog(catalog_path)?;
            let selection = select_next(&catalog, count, &current);
            if cli.json {
                print_json(&selection)?;
            } else {
                print_selection("Keep reading", &current, &selection);
            }
        }
        Command::Doctor => {
            let source = load_catalog_source(catalog_path)?;
            let records = read_records(&source)?;
            let report = diagnose(&records);
            render_diagnostic_report(&report);
            if report.error_count() > 0 {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
