//! Catalog listings.

use anyhow::Result;
use estimate::catalog::Catalog;
use owo_colors::OwoColorize;

pub fn materials(catalog: &Catalog) {
    let base = base_currency(catalog);

    println!(
        "{}",
        format!("{:<26} {:>8} {:>10}  {}", "Material", "g/cm³", "per kg", "Diameters (mm)").bold()
    );
    for material in catalog.materials().values() {
        let diameters: Vec<String> = material
            .supported_diameters_mm
            .iter()
            .map(|d| format!("{d:.2}"))
            .collect();
        println!(
            "{:<26} {:>8.2} {:>10}  {}",
            material.name,
            material.density_g_per_cm3,
            base.format(material.base_cost_per_kg),
            diameters.join(", ")
        );
    }
}

pub fn printers(catalog: &Catalog, make: Option<&str>) -> Result<()> {
    let base = base_currency(catalog);
    let makes: Vec<&str> = match make {
        Some(make) => {
            catalog.models(make)?;
            vec![make]
        }
        None => catalog.makes().collect(),
    };

    println!(
        "{}",
        format!(
            "{:<24} {:>10} {:>10} {:>10} {:>8}",
            "Model", "Cost", "Upgrades", "Upkeep", "Watts"
        )
        .bold()
    );
    for make in makes {
        println!("{}", make.cyan().bold());
        for model in catalog.models(make)? {
            let printer = catalog.printer(make, model)?;
            println!(
                "  {:<22} {:>10} {:>10} {:>10} {:>8.0}",
                printer.model,
                base.format(printer.purchase_cost),
                base.format(printer.upgrades_cost),
                base.format(printer.maintenance_cost),
                printer.avg_power_watts
            );
        }
    }
    println!();
    println!("{} printers", catalog.printer_count());
    Ok(())
}

pub fn rates(catalog: &Catalog) {
    let base = base_currency(catalog);

    println!("{}", format!("{:<36} {:>10}", "Tariff", "per kWh").bold());
    for (label, per_kwh) in catalog.electricity_rates() {
        println!("{label:<36} {:>10}", base.format(*per_kwh));
    }
}

pub fn currencies(catalog: &Catalog) {
    println!("{}", format!("{:<6} {:<6} {:>8}", "Code", "Symbol", "Rate").bold());
    for currency in catalog.currencies().values() {
        let marker = if currency.code == catalog.base_currency() {
            " (base)"
        } else {
            ""
        };
        println!(
            "{:<6} {:<6} {:>8.2}{}",
            currency.code,
            currency.symbol,
            currency.rate,
            marker.dimmed()
        );
    }
}

fn base_currency(catalog: &Catalog) -> estimate::types::Currency {
    catalog.currency(catalog.base_currency()).unwrap_or_default()
}
