use std::f64::consts::TAU;

use crate::error::{Result, SolidError};
use crate::math::{Point3, TOLERANCE};

use super::angle_within;

/// A cylindrical section along the local Z axis.
///
/// With a zero inner radius and a full sweep this is a solid cylinder;
/// with a positive inner radius it is a bored cylinder. The section spans
/// `[-half_length, half_length]` in Z.
#[derive(Debug, Clone)]
pub struct Tube {
    inner_radius: f64,
    outer_radius: f64,
    half_length: f64,
    start_angle: f64,
    sweep_angle: f64,
}

impl Tube {
    /// Creates a new tube section.
    ///
    /// # Arguments
    ///
    /// * `inner_radius` - Bore radius; zero makes the tube solid
    /// * `outer_radius` - Outer radius (must be positive)
    /// * `half_length` - Half-extent along Z (must be positive)
    /// * `start_angle` - Start of the angular section, radians
    /// * `sweep_angle` - Angular sweep in `(0, 2*pi]`, radians
    ///
    /// # Errors
    ///
    /// Returns an error if a radius is out of range, the inner radius
    /// reaches the outer, the half-length is non-positive, or the sweep is
    /// outside `(0, 2*pi]`.
    pub fn new(
        inner_radius: f64,
        outer_radius: f64,
        half_length: f64,
        start_angle: f64,
        sweep_angle: f64,
    ) -> Result<Self> {
        if inner_radius < 0.0 {
            return Err(SolidError::NegativeRadius {
                parameter: "tube inner radius",
                value: inner_radius,
            }
            .into());
        }
        if outer_radius < TOLERANCE {
            return Err(SolidError::NonPositiveRadius {
                parameter: "tube outer radius",
                value: outer_radius,
            }
            .into());
        }
        if inner_radius > outer_radius - TOLERANCE {
            return Err(SolidError::InnerExceedsOuter {
                inner: inner_radius,
                outer: outer_radius,
            }
            .into());
        }
        if half_length < TOLERANCE {
            return Err(SolidError::NonPositiveHalfLength(half_length).into());
        }
        if sweep_angle < TOLERANCE || sweep_angle > TAU + TOLERANCE {
            return Err(SolidError::InvalidSweep(sweep_angle).into());
        }
        Ok(Self {
            inner_radius,
            outer_radius,
            half_length,
            start_angle,
            sweep_angle,
        })
    }

    /// Creates a solid cylinder: zero bore, full revolution.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius or half-length is non-positive.
    pub fn solid(radius: f64, half_length: f64) -> Result<Self> {
        Self::new(0.0, radius, half_length, 0.0, TAU)
    }

    /// Creates a bored cylinder with a full revolution.
    ///
    /// # Errors
    ///
    /// Returns an error if the radii or half-length are out of range.
    pub fn bored(inner_radius: f64, outer_radius: f64, half_length: f64) -> Result<Self> {
        Self::new(inner_radius, outer_radius, half_length, 0.0, TAU)
    }

    /// Returns the bore radius.
    #[must_use]
    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    /// Returns the outer radius.
    #[must_use]
    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    /// Returns the half-extent along Z.
    #[must_use]
    pub fn half_length(&self) -> f64 {
        self.half_length
    }

    /// Returns the start of the angular section in radians.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Returns the angular sweep in radians.
    #[must_use]
    pub fn sweep_angle(&self) -> f64 {
        self.sweep_angle
    }

    /// Radius of the smallest origin-centered sphere containing the tube.
    #[must_use]
    pub fn bounding_radius(&self) -> f64 {
        self.outer_radius.hypot(self.half_length)
    }

    /// Tests whether a local-frame point lies inside the tube.
    #[must_use]
    pub fn contains_local(&self, point: &Point3) -> bool {
        if point.z.abs() > self.half_length + TOLERANCE {
            return false;
        }
        let rho = point.x.hypot(point.y);
        if rho < self.inner_radius - TOLERANCE || rho > self.outer_radius + TOLERANCE {
            return false;
        }
        angle_within(self.start_angle, self.sweep_angle, point.y.atan2(point.x))
    }

    /// Distance by which a ball at `center` pokes outside the tube.
    ///
    /// The angular section is ignored; partial sweeps are treated as full.
    #[must_use]
    pub fn ball_overhang(&self, center: &Point3, radius: f64) -> f64 {
        let rho = center.x.hypot(center.y);
        let axial = (center.z.abs() + radius) - self.half_length;
        let radial = (rho + radius) - self.outer_radius;
        let bore = if self.inner_radius > 0.0 {
            self.inner_radius - (rho - radius)
        } else {
            0.0
        };
        axial.max(radial).max(bore).max(0.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn solid_cylinder_has_full_sweep() {
        let tube = Tube::solid(5.0, 0.1).unwrap();
        assert!((tube.sweep_angle() - TAU).abs() < TOLERANCE);
        assert!((tube.inner_radius()).abs() < TOLERANCE);
    }

    #[test]
    fn contains_respects_bore() {
        let tube = Tube::bored(5.0, 20.0, 10.0).unwrap();
        assert!(tube.contains_local(&Point3::new(10.0, 0.0, 0.0)));
        assert!(!tube.contains_local(&Point3::new(2.0, 0.0, 0.0)));
        assert!(!tube.contains_local(&Point3::new(21.0, 0.0, 0.0)));
        assert!(!tube.contains_local(&Point3::new(10.0, 0.0, 11.0)));
    }

    #[test]
    fn half_sweep_excludes_far_side() {
        let tube = Tube::new(0.0, 5.0, 1.0, 0.0, std::f64::consts::PI).unwrap();
        assert!(tube.contains_local(&Point3::new(0.0, 3.0, 0.0)));
        assert!(!tube.contains_local(&Point3::new(0.0, -3.0, 0.0)));
    }

    #[test]
    fn bounding_radius_reaches_rim() {
        let tube = Tube::solid(3.0, 4.0).unwrap();
        assert!((tube.bounding_radius() - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn ball_overhang_past_face() {
        let tube = Tube::solid(50.0, 10.0).unwrap();
        let overhang = tube.ball_overhang(&Point3::new(0.0, 0.0, 8.0), 5.0);
        assert!((overhang - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn negative_inner_radius_fails() {
        assert!(Tube::new(-1.0, 5.0, 1.0, 0.0, TAU).is_err());
    }

    #[test]
    fn inner_reaching_outer_fails() {
        assert!(Tube::bored(5.0, 5.0, 1.0).is_err());
        assert!(Tube::bored(6.0, 5.0, 1.0).is_err());
    }

    #[test]
    fn zero_half_length_fails() {
        assert!(Tube::solid(5.0, 0.0).is_err());
    }

    #[test]
    fn out_of_range_sweep_fails() {
        assert!(Tube::new(0.0, 5.0, 1.0, 0.0, 0.0).is_err());
        assert!(Tube::new(0.0, 5.0, 1.0, 0.0, TAU + 0.1).is_err());
    }
}
