//! Cuboid print-time heuristic.
//!
//! The model is treated as a cube of the same volume. Walls are the six
//! cube faces times the shell count, the remainder is filled at the infill
//! density, and the extruded path length is divided by the print speed.
//! Motion overheads are folded in as constant factors. This is a rough
//! approximation, not a slicing simulation: real times depend on the shape,
//! the slicer and the firmware.

// Shell counts are small non-negative integers.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use estimate_types::ProcessParameters;
use estimate_types::units::seconds_to_hours;
use tracing::debug;

use crate::error::{EstimationError, EstimationResult};
use crate::result::{EstimateDetails, PrintTimeEstimate};

/// Acceleration penalty numerator, in mm/s².
const ACCELERATION_PENALTY: f64 = 30.0;

/// Jerk penalty numerator, in mm/s.
const JERK_PENALTY: f64 = 2.0;

/// Retraction travel per layer in mm.
const RETRACTION_MM_PER_LAYER: f64 = 2.0;

/// Multiplier covering non-printing travel moves.
pub const TRAVEL_OVERHEAD: f64 = 1.1;

/// Estimate how long an FDM print of `volume_mm3` takes.
///
/// # Errors
///
/// - [`EstimationError::NonPositiveVolume`] if the volume is not > 0
/// - [`EstimationError::InvalidParameter`] for a non-positive nozzle
///   diameter (zero extrusion width), layer height, speed, acceleration,
///   jerk or retraction speed, an infill outside 0-100 % or a negative
///   shell thickness
/// - [`EstimationError::NegativeInteriorVolume`] when the shells alone
///   exceed the model volume
/// - [`EstimationError::NonFiniteResult`] on overflow
///
/// # Example
///
/// ```
/// use estimate_time::estimate_print_time;
/// use estimate_types::ProcessParameters;
///
/// // A 20 mm cube with default settings.
/// let estimate = estimate_print_time(8000.0, &ProcessParameters::default()).unwrap();
/// assert!((estimate.print_time_hours - 0.288_490_6).abs() < 1e-6);
/// assert_eq!(estimate.details.shells, 2);
/// ```
pub fn estimate_print_time(
    volume_mm3: f64,
    params: &ProcessParameters,
) -> EstimationResult<PrintTimeEstimate> {
    if !(volume_mm3.is_finite() && volume_mm3 > 0.0) {
        return Err(EstimationError::NonPositiveVolume { volume_mm3 });
    }
    validate_params(params)?;

    let extrusion_width = params.extrusion_width();
    let shells = (params.shell_thickness / extrusion_width).round_ties_even() as u32;

    let dimension = volume_mm3.cbrt();
    let layers = dimension / params.layer_height;

    let shell_volume_mm3 = 6.0 * dimension * dimension * extrusion_width * f64::from(shells);
    let interior_volume = volume_mm3 - shell_volume_mm3;
    if interior_volume < 0.0 {
        return Err(EstimationError::NegativeInteriorVolume {
            volume_mm3,
            shell_volume_mm3,
            shells,
        });
    }
    let infill_volume_mm3 = interior_volume * params.infill_density / 100.0;

    let total_extrusion_mm =
        (shell_volume_mm3 + infill_volume_mm3) / (extrusion_width * params.layer_height);

    let base_time_s = total_extrusion_mm / params.print_speed;
    let acceleration_factor =
        1.0 + ACCELERATION_PENALTY / params.acceleration + JERK_PENALTY / params.jerk;
    let retraction_time_s = layers * RETRACTION_MM_PER_LAYER / params.retraction_speed;

    let print_time_hours =
        seconds_to_hours(base_time_s * acceleration_factor + retraction_time_s) * TRAVEL_OVERHEAD;

    if !print_time_hours.is_finite() {
        return Err(EstimationError::NonFiniteResult);
    }

    debug!(
        volume_mm3,
        layers,
        shells,
        shell_volume_mm3,
        infill_volume_mm3,
        print_time_hours,
        "Estimated print time"
    );

    Ok(PrintTimeEstimate {
        print_time_hours,
        details: EstimateDetails {
            layers,
            shells,
            extrusion_width,
            shell_volume_mm3,
            infill_volume_mm3,
            total_extrusion_mm,
        },
    })
}

fn require_positive(name: &'static str, value: f64) -> EstimationResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(EstimationError::invalid_parameter(name, value, "must be > 0"))
    }
}

fn validate_params(params: &ProcessParameters) -> EstimationResult<()> {
    if !(params.nozzle_diameter.is_finite() && params.nozzle_diameter > 0.0) {
        return Err(EstimationError::invalid_parameter(
            "nozzle_diameter",
            params.nozzle_diameter,
            "extrusion width must be > 0",
        ));
    }
    require_positive("layer_height", params.layer_height)?;
    require_positive("print_speed", params.print_speed)?;
    require_positive("acceleration", params.acceleration)?;
    require_positive("jerk", params.jerk)?;
    require_positive("retraction_speed", params.retraction_speed)?;
    if !(0.0..=100.0).contains(&params.infill_density) {
        return Err(EstimationError::invalid_parameter(
            "infill_density",
            params.infill_density,
            "must be within 0-100 %",
        ));
    }
    if !(params.shell_thickness.is_finite() && params.shell_thickness >= 0.0) {
        return Err(EstimationError::invalid_parameter(
            "shell_thickness",
            params.shell_thickness,
            "must be >= 0",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn defaults() -> ProcessParameters {
        ProcessParameters::default()
    }

    #[test]
    fn twenty_mm_cube() {
        let estimate = estimate_print_time(8000.0, &defaults()).unwrap();
        let d = estimate.details;

        assert_relative_eq!(estimate.print_time_hours, 0.288_490_617_283_950_6, epsilon = 1e-9);
        assert_relative_eq!(d.layers, 100.0, epsilon = 1e-9);
        assert_eq!(d.shells, 2);
        assert_relative_eq!(d.extrusion_width, 0.48, epsilon = 1e-12);
        assert_relative_eq!(d.shell_volume_mm3, 2304.0, epsilon = 1e-6);
        assert_relative_eq!(d.infill_volume_mm3, 1139.2, epsilon = 1e-6);
        assert_relative_eq!(d.total_extrusion_mm, 35_866.666_666, epsilon = 1e-3);
    }

    #[test]
    fn ten_cm3_part() {
        let estimate = estimate_print_time(10_000.0, &defaults()).unwrap();
        assert_relative_eq!(estimate.print_time_hours, 0.346_606_082, epsilon = 1e-8);
        assert_relative_eq!(estimate.details.layers, 107.721_734_5, epsilon = 1e-6);
    }

    #[test]
    fn shell_count_rounds_half_to_even() {
        // 1.2 / 0.48 = 2.5 -> 2 shells; 2.0 / 0.48 = 4.17 -> 4 shells.
        assert_eq!(estimate_print_time(1e6, &defaults()).unwrap().details.shells, 2);
        let thick = defaults().with_shell_thickness(2.0);
        let estimate = estimate_print_time(1e6, &thick).unwrap();
        assert_eq!(estimate.details.shells, 4);
        assert_relative_eq!(estimate.print_time_hours, 24.370_364_197, epsilon = 1e-6);
    }

    #[test]
    fn thin_part_is_an_error() {
        let params = defaults().with_shell_thickness(4.0);
        let err = estimate_print_time(1000.0, &params).unwrap_err();
        match err {
            EstimationError::NegativeInteriorVolume { shells, shell_volume_mm3, .. } => {
                assert_eq!(shells, 8);
                assert_relative_eq!(shell_volume_mm3, 2304.0, epsilon = 1e-6);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn zero_shells_allowed() {
        let params = defaults().with_shell_thickness(0.0);
        let estimate = estimate_print_time(1000.0, &params).unwrap();
        assert_eq!(estimate.details.shells, 0);
        assert_relative_eq!(estimate.details.shell_volume_mm3, 0.0);
    }

    #[test]
    fn rejects_non_positive_volume() {
        assert!(matches!(
            estimate_print_time(0.0, &defaults()),
            Err(EstimationError::NonPositiveVolume { .. })
        ));
        assert!(estimate_print_time(-5.0, &defaults()).is_err());
        assert!(estimate_print_time(f64::NAN, &defaults()).is_err());
    }

    #[test]
    fn rejects_zero_extrusion_width() {
        let params = defaults().with_nozzle_diameter(0.0);
        assert!(matches!(
            estimate_print_time(1000.0, &params),
            Err(EstimationError::InvalidParameter { name: "nozzle_diameter", .. })
        ));
    }

    #[test]
    fn rejects_zero_speed_and_motion() {
        let cases = [
            (defaults().with_print_speed(0.0), "print_speed"),
            (defaults().with_layer_height(0.0), "layer_height"),
            (defaults().with_motion(0.0, 8.0), "acceleration"),
            (defaults().with_motion(500.0, 0.0), "jerk"),
            (defaults().with_retraction_speed(-1.0), "retraction_speed"),
            (defaults().with_infill_density(120.0), "infill_density"),
            (defaults().with_shell_thickness(-0.1), "shell_thickness"),
        ];
        for (params, expected) in cases {
            match estimate_print_time(1000.0, &params) {
                Err(EstimationError::InvalidParameter { name, .. }) => assert_eq!(name, expected),
                other => panic!("{expected}: unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn more_infill_takes_longer() {
        let sparse = estimate_print_time(27_000.0, &defaults().with_infill_density(10.0)).unwrap();
        let dense = estimate_print_time(27_000.0, &defaults().with_infill_density(80.0)).unwrap();
        assert!(dense.print_time_hours > sparse.print_time_hours);
    }

    #[test]
    fn faster_print_is_shorter() {
        let slow = estimate_print_time(27_000.0, &defaults()).unwrap();
        let fast = estimate_print_time(27_000.0, &defaults().with_print_speed(100.0)).unwrap();
        assert!(fast.print_time_hours < slow.print_time_hours);
    }
}
