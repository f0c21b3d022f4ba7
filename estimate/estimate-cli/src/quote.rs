//! The `quote` command.

use anyhow::{Context, Result};
use clap::Args;
use estimate::catalog::Catalog;
use estimate::cost::{
    BusinessParams, CostEstimator, CustomOverrides, DEFAULT_MARKUP_PCT, JobEstimate, PricingMode,
};
use estimate::time::{DEFAULT_FALLBACK_HOURS, FallbackPolicy, TimeModel, TimeSource};
use estimate::types::{Currency, PrintJobGeometry, ProcessParameters};
use estimate::{DEFAULT_RATE_PRESET, Selection};
use owo_colors::OwoColorize;
use tracing::info;

#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Part volumes in cm³, one quote each
    #[arg(required = true, value_name = "CM3", allow_negative_numbers = true)]
    pub volumes: Vec<f64>,

    /// Filament material
    #[arg(long, default_value = "PLA")]
    pub material: String,

    /// Printer manufacturer
    #[arg(long, default_value = "Bambu Lab")]
    pub make: String,

    /// Printer model
    #[arg(long, default_value = "A1")]
    pub model: String,

    /// Electricity tariff label from the catalog
    #[arg(long, default_value = DEFAULT_RATE_PRESET)]
    pub rate: String,

    /// Custom electricity price per kWh in the output currency
    #[arg(long, conflicts_with = "rate")]
    pub custom_rate: Option<f64>,

    /// Output currency code (defaults to the catalog's base currency)
    #[arg(long)]
    pub currency: Option<String>,

    /// Markup in percent
    #[arg(long, default_value_t = DEFAULT_MARKUP_PCT)]
    pub markup: f64,

    /// Known print time in hours (skips estimation)
    #[arg(long, conflicts_with = "throughput")]
    pub hours: Option<f64>,

    /// Estimate time from a throughput in cm³/h instead of the heuristic
    #[arg(long, num_args = 0..=1, default_missing_value = "11", value_name = "CM3_PER_H")]
    pub throughput: Option<f64>,

    /// Hours assumed when time estimation fails
    #[arg(long, default_value_t = DEFAULT_FALLBACK_HOURS)]
    pub fallback_hours: f64,

    #[command(flatten)]
    pub process: ProcessArgs,

    #[command(flatten)]
    pub printer: PrinterArgs,

    #[command(flatten)]
    pub business: BusinessArgs,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Slicer settings for the time heuristic.
#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Nozzle diameter in mm
    #[arg(long)]
    pub nozzle: Option<f64>,

    /// Layer height in mm
    #[arg(long)]
    pub layer_height: Option<f64>,

    /// Print speed in mm/s
    #[arg(long)]
    pub speed: Option<f64>,

    /// Infill density in percent
    #[arg(long)]
    pub infill: Option<f64>,

    /// Wall thickness in mm
    #[arg(long)]
    pub shell: Option<f64>,
}

impl ProcessArgs {
    fn params(&self) -> ProcessParameters {
        let mut params = ProcessParameters::default();
        if let Some(mm) = self.nozzle {
            params = params.with_nozzle_diameter(mm);
        }
        if let Some(mm) = self.layer_height {
            params = params.with_layer_height(mm);
        }
        if let Some(speed) = self.speed {
            params = params.with_print_speed(speed);
        }
        if let Some(pct) = self.infill {
            params = params.with_infill_density(pct);
        }
        if let Some(mm) = self.shell {
            params = params.with_shell_thickness(mm);
        }
        params
    }
}

/// Replacements for the catalog printer and filament price, in the output currency.
#[derive(Args, Debug)]
pub struct PrinterArgs {
    /// Printer purchase cost
    #[arg(long)]
    pub printer_cost: Option<f64>,

    /// Upgrades spent on the printer
    #[arg(long)]
    pub upgrades_cost: Option<f64>,

    /// Maintenance spent on the printer
    #[arg(long)]
    pub maintenance_cost: Option<f64>,

    /// Expected printer lifetime in hours
    #[arg(long)]
    pub lifetime_hours: Option<f64>,

    /// Average power draw in watts
    #[arg(long)]
    pub power_watts: Option<f64>,

    /// Filament price per kg
    #[arg(long)]
    pub cost_per_kg: Option<f64>,
}

impl PrinterArgs {
    const fn touches_printer(&self) -> bool {
        self.printer_cost.is_some()
            || self.upgrades_cost.is_some()
            || self.maintenance_cost.is_some()
            || self.lifetime_hours.is_some()
            || self.power_watts.is_some()
    }

    fn overrides(&self, catalog: &Catalog, args: &QuoteArgs, currency: &Currency) -> Result<CustomOverrides> {
        let mut overrides = CustomOverrides::default();
        if let Some(cost) = self.cost_per_kg {
            overrides = overrides.with_cost_per_kg(cost);
        }
        if self.touches_printer() {
            let mut printer = catalog.printer(&args.make, &args.model)?.scaled(currency.rate);
            printer.purchase_cost = self.printer_cost.unwrap_or(printer.purchase_cost);
            printer.upgrades_cost = self.upgrades_cost.unwrap_or(printer.upgrades_cost);
            printer.maintenance_cost = self.maintenance_cost.unwrap_or(printer.maintenance_cost);
            printer.lifetime_hours = self.lifetime_hours.unwrap_or(printer.lifetime_hours);
            printer.avg_power_watts = self.power_watts.unwrap_or(printer.avg_power_watts);
            overrides = overrides.with_printer(printer);
        }
        Ok(overrides)
    }
}

/// Business pricing charges.
#[derive(Args, Debug)]
pub struct BusinessArgs {
    /// Quote with labour, failure allowance and shipping
    #[arg(long)]
    pub business: bool,

    /// Setup hours
    #[arg(long, default_value_t = 0.25, requires = "business")]
    pub setup_hours: f64,

    /// Post-processing hours
    #[arg(long, default_value_t = 0.25, requires = "business")]
    pub post_hours: f64,

    /// Labour rate per hour
    #[arg(long, default_value_t = 0.0, requires = "business")]
    pub hourly_rate: f64,

    /// Expected failure rate in percent
    #[arg(long, default_value_t = 0.0, requires = "business")]
    pub fail_rate: f64,

    /// Shipping charge
    #[arg(long, default_value_t = 0.0, requires = "business")]
    pub shipping: f64,
}

impl BusinessArgs {
    fn mode(&self) -> PricingMode {
        if !self.business {
            return PricingMode::Hobby;
        }
        PricingMode::Business(
            BusinessParams::default()
                .with_labour_hours(self.setup_hours, self.post_hours)
                .with_hourly_rate(self.hourly_rate)
                .with_fail_rate_pct(self.fail_rate)
                .with_shipping_cost(self.shipping),
        )
    }
}

impl QuoteArgs {
    fn time_model(&self) -> TimeModel {
        match (self.hours, self.throughput) {
            (Some(hours), _) => TimeModel::Fixed(hours),
            (None, Some(cm3_per_hour)) => TimeModel::Throughput(cm3_per_hour),
            (None, None) => TimeModel::Heuristic(self.process.params()),
        }
    }
}

/// Build the estimator described by `args`.
pub fn build_estimator(catalog: &Catalog, args: &QuoteArgs) -> Result<CostEstimator> {
    let mut selection = Selection::new(&args.material, &args.make, &args.model);
    selection = match args.custom_rate {
        Some(per_kwh) => selection.with_custom_rate(per_kwh),
        None => selection.with_rate_preset(&args.rate),
    };
    if let Some(code) = &args.currency {
        selection = selection.with_currency(code);
    }

    let estimator = selection
        .resolve(catalog)
        .context("Selection not found in catalog")?;
    let overrides = args
        .printer
        .overrides(catalog, args, estimator.currency())
        .context("Selection not found in catalog")?;

    Ok(estimator
        .with_markup_pct(args.markup)
        .with_mode(args.business.mode())
        .with_time_model(args.time_model())
        .with_fallback(FallbackPolicy::default().with_fallback_hours(args.fallback_hours))
        .with_overrides(overrides))
}

pub fn run(catalog: &Catalog, args: &QuoteArgs) -> Result<()> {
    let estimator = build_estimator(catalog, args)?;

    let jobs: Vec<PrintJobGeometry> = args
        .volumes
        .iter()
        .map(|v| PrintJobGeometry::from_volume_cm3(*v))
        .collect();
    let estimates = estimator
        .estimate_batch(&jobs)
        .into_iter()
        .zip(&args.volumes)
        .map(|(result, volume)| result.with_context(|| format!("Failed to price {volume} cm³")))
        .collect::<Result<Vec<_>>>()?;

    info!(jobs = estimates.len(), mode = estimator.mode().as_str(), "Quoted jobs");

    if args.json {
        let json = serde_json::to_string_pretty(&estimates).context("Failed to serialize quote")?;
        println!("{json}");
        return Ok(());
    }

    for (estimate, volume) in estimates.iter().zip(&args.volumes) {
        print_quote(args, *volume, estimate, estimator.mode());
    }
    Ok(())
}

fn print_quote(args: &QuoteArgs, volume: f64, estimate: &JobEstimate, mode: &PricingMode) {
    let breakdown = &estimate.breakdown;
    let currency = &breakdown.currency;

    println!(
        "{}",
        format!("{} on {} {}, {volume:.2} cm³", args.material, args.make, args.model).bold()
    );

    let time = format!("{:.2} h", estimate.time.hours);
    let source = describe_source(&estimate.time.source);
    if estimate.time.is_fallback() {
        println!("  {:<16} {} ({})", "Print time", time, source.yellow());
    } else {
        println!("  {:<16} {} ({})", "Print time", time, source.dimmed());
    }

    let business_only = ["Labour", "Fail-adjusted", "Shipping"];
    for (label, value) in breakdown.rows() {
        if matches!(mode, PricingMode::Hobby) && business_only.contains(&label) {
            continue;
        }
        let amount = currency.format(value);
        if label == "Total" {
            println!("  {:<16} {}", label.bold(), amount.green().bold());
        } else {
            println!("  {label:<16} {amount}");
        }
    }
    println!();
}

fn describe_source(source: &TimeSource) -> String {
    match source {
        TimeSource::Heuristic(details) => format!("heuristic, {:.0} layers", details.layers),
        TimeSource::Throughput { cm3_per_hour } => format!("{cm3_per_hour} cm³/h"),
        TimeSource::Provided => "given".to_string(),
        TimeSource::EmptyJob => "empty job".to_string(),
        TimeSource::Fallback { reason } => format!("fallback: {reason}"),
    }
}
