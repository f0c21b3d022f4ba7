//! Printer power table reconciliation.

use std::path::Path;

use anyhow::{Context, Result, bail};
use estimate::catalog::{Catalog, Divergence, PowerTable, diverging_printers};
use owo_colors::OwoColorize;

pub fn run(catalog: &Catalog, power_table: Option<&Path>, strict: bool) -> Result<()> {
    let table = match power_table {
        Some(path) => PowerTable::load_file(path)
            .with_context(|| format!("Failed to load power table from {}", path.display()))?,
        None => PowerTable::legacy().context("Bundled power table is invalid")?,
    };

    let report = diverging_printers(catalog, &table);
    if report.is_empty() {
        println!(
            "{} {} catalog printers match {} table entries",
            "✓".green().bold(),
            catalog.printer_count(),
            table.len()
        );
        return Ok(());
    }

    for entry in &report {
        let detail = match entry.divergence {
            Divergence::PowerMismatch {
                catalog_watts,
                table_watts,
            } => format!("catalog {catalog_watts:.0} W, table {table_watts:.0} W"),
            Divergence::MissingFromCatalog => "only in power table".to_string(),
            Divergence::MissingFromTable => "only in catalog".to_string(),
        };
        println!("{} {} {}: {}", "✗".red().bold(), entry.make, entry.model, detail);
    }
    println!();
    println!("{} diverging printers", report.len());

    if strict {
        bail!("{} printers disagree with the power table", report.len());
    }
    Ok(())
}
