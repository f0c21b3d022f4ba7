//! Printing material (filament) properties.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A printing material as listed in the catalog.
///
/// Materials are identified by name. Prices are quoted in the catalog's
/// base currency; the pricing pipeline applies the caller's currency
/// multiplier.
///
/// # Example
///
/// ```
/// use estimate_types::Material;
///
/// let pla = Material::new("PLA", 1.24, 25.0).with_diameters(vec![1.75, 2.85]);
/// assert!(pla.supports_diameter(1.75));
/// assert!(!pla.supports_diameter(3.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Material {
    /// Unique material name (e.g. `"PLA"`).
    pub name: String,

    /// Density in g/cm³.
    pub density_g_per_cm3: f64,

    /// Price per kilogram in the catalog currency.
    pub base_cost_per_kg: f64,

    /// Filament diameters the material is sold in, in mm.
    pub supported_diameters_mm: Vec<f64>,
}

impl Material {
    /// Create a material with no listed diameters.
    #[must_use]
    pub fn new(name: impl Into<String>, density_g_per_cm3: f64, base_cost_per_kg: f64) -> Self {
        Self {
            name: name.into(),
            density_g_per_cm3,
            base_cost_per_kg,
            supported_diameters_mm: Vec::new(),
        }
    }

    /// Set the available filament diameters.
    #[must_use]
    pub fn with_diameters(mut self, diameters_mm: Vec<f64>) -> Self {
        self.supported_diameters_mm = diameters_mm;
        self
    }

    /// Whether the material is sold in the given diameter.
    #[must_use]
    pub fn supports_diameter(&self, diameter_mm: f64) -> bool {
        self.supported_diameters_mm
            .iter()
            .any(|d| (d - diameter_mm).abs() < 1e-6)
    }
}
