//! Validated, read-only catalog.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use estimate_types::{Currency, ElectricityRate, Material, PrinterProfile};
use tracing::{debug, info};

use crate::error::{CatalogLoadError, CatalogResult};
use crate::schema::{CatalogDocument, CurrencyRecord, MaterialRecord, PrinterRecord, UniqueMap};

/// Catalog bundled with the crate.
const BUILTIN_JSON: &str = include_str!("../data/catalog.json");

/// Materials, printers, electricity tariffs and currencies.
///
/// A catalog is loaded once and never changes afterwards. All entries are
/// validated at load time so lookups only fail on unknown names.
///
/// # Example
///
/// ```
/// use estimate_catalog::Catalog;
///
/// let catalog = Catalog::builtin().unwrap();
/// let pla = catalog.material("PLA").unwrap();
/// assert!((pla.density_g_per_cm3 - 1.24).abs() < 1e-12);
///
/// let a1 = catalog.printer("Bambu Lab", "A1").unwrap();
/// assert!((a1.avg_power_watts - 100.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    base_currency: String,
    materials: BTreeMap<String, Material>,
    printers: BTreeMap<String, BTreeMap<String, PrinterProfile>>,
    electricity_rates: BTreeMap<String, f64>,
    currencies: BTreeMap<String, Currency>,
}

impl Catalog {
    /// The catalog bundled with the crate.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled data is broken.
    pub fn builtin() -> CatalogResult<Self> {
        Self::from_json_str(BUILTIN_JSON)
    }

    /// Parse and validate a catalog from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogLoadError::Parse`] for malformed JSON or missing
    /// fields, [`CatalogLoadError::InvalidEntry`] for out-of-range values and
    /// [`CatalogLoadError::Empty`] if no material is listed.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Load and validate a catalog file.
    ///
    /// The file is closed before validation starts.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogLoadError::Io`] if the file cannot be opened or read,
    /// and any error [`Catalog::from_json_str`] can return.
    pub fn load_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading catalog file");

        let document: CatalogDocument = {
            let file = File::open(path).map_err(|source| CatalogLoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            serde_json::from_reader(BufReader::new(file))?
        };

        Self::from_document(document)
    }

    fn from_document(document: CatalogDocument) -> CatalogResult<Self> {
        if document.materials.0.is_empty() {
            return Err(CatalogLoadError::Empty);
        }
        if document.currency.trim().is_empty() {
            return Err(CatalogLoadError::invalid_entry("currency", "must not be empty"));
        }

        let materials = document
            .materials
            .0
            .into_iter()
            .map(|(name, record)| convert_material(name, record).map(|m| (m.name.clone(), m)))
            .collect::<CatalogResult<BTreeMap<_, _>>>()?;

        let mut printers = BTreeMap::new();
        for (make, models) in document.printers.0 {
            check_name("printers", &make)?;
            let mut profiles = BTreeMap::new();
            for (model, record) in models.0 {
                let profile = convert_printer(&make, model, record)?;
                profiles.insert(profile.model.clone(), profile);
            }
            printers.insert(make, profiles);
        }

        for (label, per_kwh) in &document.electricity_rates.0 {
            check_name("electricity_rates", label)?;
            check_non_negative(&format!("electricity_rates.{label}"), "rate", *per_kwh)?;
        }

        let base_currency = document.currency.to_ascii_uppercase();
        let mut currencies = BTreeMap::new();
        for (code, record) in document.currencies.0 {
            let currency = convert_currency(code.clone(), record)?;
            if currencies.contains_key(&currency.code) {
                return Err(CatalogLoadError::invalid_entry(
                    format!("currencies.{code}"),
                    format!("duplicates currency code {} (codes ignore case)", currency.code),
                ));
            }
            currencies.insert(currency.code.clone(), currency);
        }

        match currencies.get(&base_currency) {
            Some(base) if (base.rate - 1.0).abs() > 1e-9 => {
                return Err(CatalogLoadError::invalid_entry(
                    format!("currencies.{base_currency}"),
                    format!("base currency rate must be 1.0, got {}", base.rate),
                ));
            }
            Some(_) => {}
            None => {
                currencies.insert(
                    base_currency.clone(),
                    Currency::new(base_currency.clone(), base_currency.clone(), 1.0),
                );
            }
        }

        let catalog = Self {
            base_currency,
            materials,
            printers,
            electricity_rates: document.electricity_rates.0,
            currencies,
        };

        info!(
            materials = catalog.materials.len(),
            printers = catalog.printer_count(),
            electricity_rates = catalog.electricity_rates.len(),
            currencies = catalog.currencies.len(),
            "Catalog loaded"
        );

        Ok(catalog)
    }

    /// Serialize the catalog back to pretty JSON in the on-disk schema.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogLoadError::Parse`] if serialization fails.
    pub fn to_json_pretty(&self) -> CatalogResult<String> {
        let document = CatalogDocument {
            currency: self.base_currency.clone(),
            materials: self
                .materials
                .values()
                .map(|m| {
                    (
                        m.name.clone(),
                        MaterialRecord {
                            density_g_cm3: m.density_g_per_cm3,
                            cost_per_kg: m.base_cost_per_kg,
                            diameters: m.supported_diameters_mm.clone(),
                        },
                    )
                })
                .collect(),
            printers: self
                .printers
                .iter()
                .map(|(make, models)| {
                    let records: UniqueMap<PrinterRecord> = models
                        .values()
                        .map(|p| {
                            (
                                p.model.clone(),
                                PrinterRecord {
                                    cost: p.purchase_cost,
                                    upgrades: p.upgrades_cost,
                                    maintenance: p.maintenance_cost,
                                    lifetime_hours: p.lifetime_hours,
                                    avg_power_watts: p.avg_power_watts,
                                },
                            )
                        })
                        .collect();
                    (make.clone(), records)
                })
                .collect(),
            electricity_rates: UniqueMap(self.electricity_rates.clone()),
            currencies: self
                .currencies
                .values()
                .map(|c| {
                    (
                        c.code.clone(),
                        CurrencyRecord {
                            symbol: c.symbol.clone(),
                            rate: c.rate,
                        },
                    )
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }

    /// Code of the currency catalog prices are quoted in.
    #[must_use]
    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    /// All materials keyed by name.
    #[must_use]
    pub const fn materials(&self) -> &BTreeMap<String, Material> {
        &self.materials
    }

    /// Look up a material by name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogLoadError::UnknownEntry`] if the material is not listed.
    pub fn material(&self, name: &str) -> CatalogResult<&Material> {
        self.materials
            .get(name)
            .ok_or_else(|| CatalogLoadError::unknown("material", name))
    }

    /// Printer manufacturers in alphabetical order.
    pub fn makes(&self) -> impl Iterator<Item = &str> {
        self.printers.keys().map(String::as_str)
    }

    /// Models offered by `make`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogLoadError::UnknownEntry`] if the make is not listed.
    pub fn models(&self, make: &str) -> CatalogResult<Vec<&str>> {
        self.printers
            .get(make)
            .map(|models| models.keys().map(String::as_str).collect())
            .ok_or_else(|| CatalogLoadError::unknown("printer make", make))
    }

    /// Look up a single printer model.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogLoadError::UnknownEntry`] if the make or model is not listed.
    pub fn printer(&self, make: &str, model: &str) -> CatalogResult<&PrinterProfile> {
        self.printers
            .get(make)
            .ok_or_else(|| CatalogLoadError::unknown("printer make", make))?
            .get(model)
            .ok_or_else(|| CatalogLoadError::unknown("printer", format!("{make} {model}")))
    }

    /// Every printer profile, grouped by make.
    pub fn printers(&self) -> impl Iterator<Item = &PrinterProfile> {
        self.printers.values().flat_map(BTreeMap::values)
    }

    /// Number of printer models across all makes.
    #[must_use]
    pub fn printer_count(&self) -> usize {
        self.printers.values().map(BTreeMap::len).sum()
    }

    /// Electricity tariffs keyed by label, in the base currency.
    #[must_use]
    pub const fn electricity_rates(&self) -> &BTreeMap<String, f64> {
        &self.electricity_rates
    }

    /// Look up an electricity tariff by label.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogLoadError::UnknownEntry`] if the label is not listed.
    pub fn electricity_rate(&self, label: &str) -> CatalogResult<ElectricityRate> {
        self.electricity_rates
            .get(label)
            .map(|per_kwh| ElectricityRate::preset(label, *per_kwh))
            .ok_or_else(|| CatalogLoadError::unknown("electricity rate", label))
    }

    /// All currencies keyed by code.
    #[must_use]
    pub const fn currencies(&self) -> &BTreeMap<String, Currency> {
        &self.currencies
    }

    /// Look up a currency by code, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogLoadError::UnknownEntry`] if the code is not listed.
    pub fn currency(&self, code: &str) -> CatalogResult<Currency> {
        self.currencies
            .get(&code.to_ascii_uppercase())
            .cloned()
            .ok_or_else(|| CatalogLoadError::unknown("currency", code))
    }
}

fn check_name(section: &str, name: &str) -> CatalogResult<()> {
    if name.trim().is_empty() {
        return Err(CatalogLoadError::invalid_entry(section, "empty name"));
    }
    Ok(())
}

fn check_positive(entry: &str, field: &str, value: f64) -> CatalogResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CatalogLoadError::invalid_entry(
            entry,
            format!("{field} must be > 0, got {value}"),
        ))
    }
}

fn check_non_negative(entry: &str, field: &str, value: f64) -> CatalogResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CatalogLoadError::invalid_entry(
            entry,
            format!("{field} must be >= 0, got {value}"),
        ))
    }
}

fn convert_material(name: String, record: MaterialRecord) -> CatalogResult<Material> {
    check_name("materials", &name)?;
    let entry = format!("materials.{name}");
    check_positive(&entry, "density_g_cm3", record.density_g_cm3)?;
    check_non_negative(&entry, "cost_per_kg", record.cost_per_kg)?;
    for diameter in &record.diameters {
        check_positive(&entry, "diameter", *diameter)?;
    }
    Ok(Material::new(name, record.density_g_cm3, record.cost_per_kg).with_diameters(record.diameters))
}

fn convert_printer(make: &str, model: String, record: PrinterRecord) -> CatalogResult<PrinterProfile> {
    check_name("printers", &model)?;
    let entry = format!("printers.{make}.{model}");
    check_non_negative(&entry, "cost", record.cost)?;
    check_non_negative(&entry, "upgrades", record.upgrades)?;
    check_non_negative(&entry, "maintenance", record.maintenance)?;
    check_positive(&entry, "lifetime_hours", record.lifetime_hours)?;
    check_positive(&entry, "avg_power_watts", record.avg_power_watts)?;
    Ok(PrinterProfile::new(make, model)
        .with_costs(record.cost, record.upgrades, record.maintenance)
        .with_lifetime_hours(record.lifetime_hours)
        .with_power_watts(record.avg_power_watts))
}

fn convert_currency(code: String, record: CurrencyRecord) -> CatalogResult<Currency> {
    check_name("currencies", &code)?;
    check_positive(&format!("currencies.{code}"), "rate", record.rate)?;
    Ok(Currency::new(code.to_ascii_uppercase(), record.symbol, record.rate))
}
