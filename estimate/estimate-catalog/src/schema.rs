//! On-disk catalog schema.
//!
//! These records mirror the JSON layout one to one. They are validated and
//! converted into `estimate_types` values by [`crate::Catalog`].

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

fn default_base_currency() -> String {
    "GBP".to_string()
}

/// Whole catalog document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct CatalogDocument {
    /// Currency every price in the document is quoted in.
    #[serde(default = "default_base_currency")]
    pub currency: String,

    pub materials: UniqueMap<MaterialRecord>,

    #[serde(default)]
    pub printers: UniqueMap<UniqueMap<PrinterRecord>>,

    #[serde(default)]
    pub electricity_rates: UniqueMap<f64>,

    #[serde(default)]
    pub currencies: UniqueMap<CurrencyRecord>,
}

/// JSON object whose keys must all be distinct.
///
/// A plain map keeps the last of two equal keys; this one fails to parse.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub(crate) struct UniqueMap<V>(pub BTreeMap<String, V>);

impl<V> Default for UniqueMap<V> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<V> FromIterator<(String, V)> for UniqueMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for UniqueMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct UniqueVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for UniqueVisitor<V> {
            type Value = UniqueMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object with unique keys")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = BTreeMap::new();
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    match map.entry(key) {
                        Entry::Occupied(entry) => {
                            return Err(de::Error::custom(format!(
                                "duplicate key '{}'",
                                entry.key()
                            )));
                        }
                        Entry::Vacant(entry) => {
                            entry.insert(value);
                        }
                    }
                }
                Ok(UniqueMap(map))
            }
        }

        deserializer.deserialize_map(UniqueVisitor(PhantomData))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct MaterialRecord {
    pub density_g_cm3: f64,
    pub cost_per_kg: f64,
    #[serde(default)]
    pub diameters: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct PrinterRecord {
    pub cost: f64,
    pub upgrades: f64,
    pub maintenance: f64,
    pub lifetime_hours: f64,
    pub avg_power_watts: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct CurrencyRecord {
    pub symbol: String,
    pub rate: f64,
}
