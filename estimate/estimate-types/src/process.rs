//! Print process parameters consumed by the time heuristic.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Extrusion width as a multiple of the nozzle diameter.
pub const EXTRUSION_WIDTH_FACTOR: f64 = 1.2;

/// Slicer-style settings for one print.
///
/// Only the time estimator reads these. All values are expected to be
/// positive; `infill_density` is a percentage in `0..=100`.
///
/// # Example
///
/// ```
/// use estimate_types::ProcessParameters;
///
/// let params = ProcessParameters::default()
///     .with_layer_height(0.28)
///     .with_infill_density(15.0);
///
/// assert!((params.nozzle_diameter - 0.4).abs() < 1e-12);
/// assert!((params.extrusion_width() - 0.48).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProcessParameters {
    /// Nozzle diameter in mm.
    pub nozzle_diameter: f64,

    /// Layer height in mm.
    pub layer_height: f64,

    /// Print speed in mm/s.
    pub print_speed: f64,

    /// Infill density in percent (0-100).
    pub infill_density: f64,

    /// Total wall (shell) thickness in mm.
    pub shell_thickness: f64,

    /// Acceleration in mm/s².
    pub acceleration: f64,

    /// Jerk in mm/s.
    pub jerk: f64,

    /// Retraction speed in mm/s.
    pub retraction_speed: f64,
}

impl Default for ProcessParameters {
    fn default() -> Self {
        Self {
            nozzle_diameter: 0.4,
            layer_height: 0.2,
            print_speed: 50.0,
            infill_density: 20.0,
            shell_thickness: 1.2,
            acceleration: 500.0,
            jerk: 8.0,
            retraction_speed: 45.0,
        }
    }
}

impl ProcessParameters {
    /// Width of one extruded line in mm.
    #[must_use]
    pub const fn extrusion_width(&self) -> f64 {
        self.nozzle_diameter * EXTRUSION_WIDTH_FACTOR
    }

    /// Set the nozzle diameter.
    #[must_use]
    pub const fn with_nozzle_diameter(mut self, mm: f64) -> Self {
        self.nozzle_diameter = mm;
        self
    }

    /// Set the layer height.
    #[must_use]
    pub const fn with_layer_height(mut self, mm: f64) -> Self {
        self.layer_height = mm;
        self
    }

    /// Set the print speed.
    #[must_use]
    pub const fn with_print_speed(mut self, mm_per_s: f64) -> Self {
        self.print_speed = mm_per_s;
        self
    }

    /// Set the infill density percentage.
    #[must_use]
    pub const fn with_infill_density(mut self, percent: f64) -> Self {
        self.infill_density = percent;
        self
    }

    /// Set the shell thickness.
    #[must_use]
    pub const fn with_shell_thickness(mut self, mm: f64) -> Self {
        self.shell_thickness = mm;
        self
    }

    /// Set acceleration and jerk together.
    #[must_use]
    pub const fn with_motion(mut self, acceleration: f64, jerk: f64) -> Self {
        self.acceleration = acceleration;
        self.jerk = jerk;
        self
    }

    /// Set the retraction speed.
    #[must_use]
    pub const fn with_retraction_speed(mut self, mm_per_s: f64) -> Self {
        self.retraction_speed = mm_per_s;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let p = ProcessParameters::default();
        assert!((p.layer_height - 0.2).abs() < f64::EPSILON);
        assert!((p.print_speed - 50.0).abs() < f64::EPSILON);
        assert!((p.infill_density - 20.0).abs() < f64::EPSILON);
        assert!((p.retraction_speed - 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn builder_methods() {
        let p = ProcessParameters::default()
            .with_nozzle_diameter(0.6)
            .with_print_speed(80.0)
            .with_shell_thickness(2.0)
            .with_motion(1000.0, 10.0)
            .with_retraction_speed(30.0);

        assert!((p.extrusion_width() - 0.72).abs() < 1e-12);
        assert!((p.print_speed - 80.0).abs() < f64::EPSILON);
        assert!((p.shell_thickness - 2.0).abs() < f64::EPSILON);
        assert!((p.acceleration - 1000.0).abs() < f64::EPSILON);
        assert!((p.jerk - 10.0).abs() < f64::EPSILON);
        assert!((p.retraction_speed - 30.0).abs() < f64::EPSILON);
    }
}
