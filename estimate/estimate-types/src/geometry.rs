//! Geometric facts about a job, as produced by an external mesh loader.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::units::cm3_to_mm3;

/// Axis-aligned extent of a model in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingBox {
    /// Extent along X in mm.
    pub x: f64,
    /// Extent along Y in mm.
    pub y: f64,
    /// Extent along Z in mm.
    pub z: f64,
}

impl BoundingBox {
    /// Create a bounding box from its three extents.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Volume of the box in mm³.
    #[must_use]
    pub const fn volume_mm3(&self) -> f64 {
        self.x * self.y * self.z
    }

    /// Whether every extent is finite and non-negative.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.invalid_extent().is_none()
    }

    /// First extent that is negative, NaN or infinite, with its axis name.
    #[must_use]
    pub fn invalid_extent(&self) -> Option<(&'static str, f64)> {
        [("x", self.x), ("y", self.y), ("z", self.z)]
            .into_iter()
            .find(|(_, v)| !(v.is_finite() && *v >= 0.0))
    }
}

/// Geometry of one print job.
///
/// The loader is expected to reject degenerate meshes. A zero volume is
/// still a valid input and prices to zero material.
///
/// # Example
///
/// ```
/// use estimate_types::{BoundingBox, PrintJobGeometry};
///
/// let job = PrintJobGeometry::from_volume_cm3(27.0);
/// assert!((job.volume_mm3() - 27_000.0).abs() < 1e-9);
/// assert_eq!(job.bounding_box_mm, BoundingBox::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrintJobGeometry {
    /// Solid volume in cm³.
    pub volume_cm3: f64,

    /// Bounding box in mm.
    pub bounding_box_mm: BoundingBox,
}

impl PrintJobGeometry {
    /// Create job geometry.
    #[must_use]
    pub const fn new(volume_cm3: f64, bounding_box_mm: BoundingBox) -> Self {
        Self {
            volume_cm3,
            bounding_box_mm,
        }
    }

    /// Geometry known only by its volume.
    #[must_use]
    pub fn from_volume_cm3(volume_cm3: f64) -> Self {
        Self::new(volume_cm3, BoundingBox::default())
    }

    /// Solid volume in mm³.
    #[must_use]
    pub const fn volume_mm3(&self) -> f64 {
        cm3_to_mm3(self.volume_cm3)
    }

    /// Whether the volume is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.volume_cm3.abs() < f64::EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_box_volume() {
        let bbox = BoundingBox::new(10.0, 20.0, 5.0);
        assert!((bbox.volume_mm3() - 1000.0).abs() < f64::EPSILON);
        assert!(bbox.is_valid());
    }

    #[test]
    fn bounding_box_rejects_negative() {
        assert!(!BoundingBox::new(-1.0, 1.0, 1.0).is_valid());
        assert!(!BoundingBox::new(f64::NAN, 1.0, 1.0).is_valid());
        assert!(BoundingBox::new(1.0, 2.0, 3.0).invalid_extent().is_none());
        assert!(matches!(
            BoundingBox::new(1.0, -2.0, f64::INFINITY).invalid_extent(),
            Some(("y", _))
        ));
    }

    #[test]
    fn zero_volume_is_empty() {
        assert!(PrintJobGeometry::from_volume_cm3(0.0).is_empty());
        assert!(!PrintJobGeometry::from_volume_cm3(0.1).is_empty());
    }
}
