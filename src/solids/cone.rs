use std::f64::consts::TAU;

use crate::error::{Result, SolidError};
use crate::math::{Point3, TOLERANCE};

use super::angle_within;

/// A truncated cone section along the local Z axis.
///
/// Radii are given independently at the -Z (`lo`) and +Z (`hi`) faces and
/// vary linearly between them; positive inner radii bore an axial channel
/// through the solid. The section spans `[-half_length, half_length]` in Z.
#[derive(Debug, Clone)]
pub struct Cone {
    inner_radius_lo: f64,
    outer_radius_lo: f64,
    inner_radius_hi: f64,
    outer_radius_hi: f64,
    half_length: f64,
    start_angle: f64,
    sweep_angle: f64,
}

impl Cone {
    /// Creates a new cone section.
    ///
    /// # Errors
    ///
    /// Returns an error if a radius is out of range at either face, the
    /// half-length is non-positive, or the sweep is outside `(0, 2*pi]`.
    pub fn new(
        inner_radius_lo: f64,
        outer_radius_lo: f64,
        inner_radius_hi: f64,
        outer_radius_hi: f64,
        half_length: f64,
        start_angle: f64,
        sweep_angle: f64,
    ) -> Result<Self> {
        for (parameter, value) in [
            ("cone inner radius at -z", inner_radius_lo),
            ("cone inner radius at +z", inner_radius_hi),
            ("cone outer radius at -z", outer_radius_lo),
            ("cone outer radius at +z", outer_radius_hi),
        ] {
            if value < 0.0 {
                return Err(SolidError::NegativeRadius { parameter, value }.into());
            }
        }
        if outer_radius_lo.max(outer_radius_hi) < TOLERANCE {
            return Err(SolidError::NonPositiveRadius {
                parameter: "cone outer radius",
                value: outer_radius_lo.max(outer_radius_hi),
            }
            .into());
        }
        if inner_radius_lo > outer_radius_lo - TOLERANCE {
            return Err(SolidError::InnerExceedsOuter {
                inner: inner_radius_lo,
                outer: outer_radius_lo,
            }
            .into());
        }
        if inner_radius_hi > outer_radius_hi - TOLERANCE {
            return Err(SolidError::InnerExceedsOuter {
                inner: inner_radius_hi,
                outer: outer_radius_hi,
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
            inner_radius_lo,
            outer_radius_lo,
            inner_radius_hi,
            outer_radius_hi,
            half_length,
            start_angle,
            sweep_angle,
        })
    }

    /// Creates a bored cone with a full revolution and a constant bore.
    ///
    /// # Errors
    ///
    /// Returns an error if the radii or half-length are out of range.
    pub fn bored(
        bore_radius: f64,
        outer_radius_lo: f64,
        outer_radius_hi: f64,
        half_length: f64,
    ) -> Result<Self> {
        Self::new(
            bore_radius,
            outer_radius_lo,
            bore_radius,
            outer_radius_hi,
            half_length,
            0.0,
            TAU,
        )
    }

    /// Returns the inner radius at the -Z face.
    #[must_use]
    pub fn inner_radius_lo(&self) -> f64 {
        self.inner_radius_lo
    }

    /// Returns the outer radius at the -Z face.
    #[must_use]
    pub fn outer_radius_lo(&self) -> f64 {
        self.outer_radius_lo
    }

    /// Returns the inner radius at the +Z face.
    #[must_use]
    pub fn inner_radius_hi(&self) -> f64 {
        self.inner_radius_hi
    }

    /// Returns the outer radius at the +Z face.
    #[must_use]
    pub fn outer_radius_hi(&self) -> f64 {
        self.outer_radius_hi
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

    /// Radius of the smallest origin-centered sphere containing the cone.
    #[must_use]
    pub fn bounding_radius(&self) -> f64 {
        self.outer_radius_lo
            .max(self.outer_radius_hi)
            .hypot(self.half_length)
    }

    /// Inner radius at height `z`, linearly interpolated between the faces.
    fn inner_at(&self, z: f64) -> f64 {
        let t = (z + self.half_length) / (2.0 * self.half_length);
        self.inner_radius_lo + t * (self.inner_radius_hi - self.inner_radius_lo)
    }

    /// Outer radius at height `z`, linearly interpolated between the faces.
    fn outer_at(&self, z: f64) -> f64 {
        let t = (z + self.half_length) / (2.0 * self.half_length);
        self.outer_radius_lo + t * (self.outer_radius_hi - self.outer_radius_lo)
    }

    /// Tests whether a local-frame point lies inside the cone.
    #[must_use]
    pub fn contains_local(&self, point: &Point3) -> bool {
        if point.z.abs() > self.half_length + TOLERANCE {
            return false;
        }
        let rho = point.x.hypot(point.y);
        if rho < self.inner_at(point.z) - TOLERANCE || rho > self.outer_at(point.z) + TOLERANCE {
            return false;
        }
        angle_within(self.start_angle, self.sweep_angle, point.y.atan2(point.x))
    }

    /// Distance by which a ball at `center` pokes outside the cone.
    ///
    /// The radial bound is the tightest outer radius over the ball's Z
    /// span, so the test is conservative near the slanted wall. Partial
    /// sweeps are treated as full.
    #[must_use]
    pub fn ball_overhang(&self, center: &Point3, radius: f64) -> f64 {
        let rho = center.x.hypot(center.y);
        let axial = (center.z.abs() + radius) - self.half_length;

        let z_lo = (center.z - radius).clamp(-self.half_length, self.half_length);
        let z_hi = (center.z + radius).clamp(-self.half_length, self.half_length);
        let outer_bound = self.outer_at(z_lo).min(self.outer_at(z_hi));
        let inner_bound = self.inner_at(z_lo).max(self.inner_at(z_hi));

        let radial = (rho + radius) - outer_bound;
        let bore = if inner_bound > 0.0 {
            inner_bound - (rho - radius)
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

    fn straightener_cone() -> Cone {
        // Bore 5, widening 15 -> 20 over a height of 20.
        Cone::bored(5.0, 15.0, 20.0, 10.0).unwrap()
    }

    #[test]
    fn radii_interpolate_along_z() {
        let cone = straightener_cone();
        // Mid-plane outer radius is 17.5.
        assert!(cone.contains_local(&Point3::new(17.0, 0.0, 0.0)));
        assert!(!cone.contains_local(&Point3::new(18.0, 0.0, 0.0)));
        // Narrow face only reaches 15.
        assert!(!cone.contains_local(&Point3::new(17.0, 0.0, -10.0)));
        assert!(cone.contains_local(&Point3::new(19.5, 0.0, 10.0)));
    }

    #[test]
    fn bore_is_excluded_at_both_faces() {
        let cone = straightener_cone();
        assert!(!cone.contains_local(&Point3::new(4.0, 0.0, -9.0)));
        assert!(!cone.contains_local(&Point3::new(4.0, 0.0, 9.0)));
        assert!(cone.contains_local(&Point3::new(6.0, 0.0, 9.0)));
    }

    #[test]
    fn bounding_radius_uses_wide_face() {
        let cone = straightener_cone();
        let expected = 20.0_f64.hypot(10.0);
        assert!((cone.bounding_radius() - expected).abs() < TOLERANCE);
    }

    #[test]
    fn inner_reaching_outer_fails() {
        assert!(Cone::bored(15.0, 15.0, 20.0, 10.0).is_err());
        assert!(Cone::bored(16.0, 15.0, 20.0, 10.0).is_err());
    }

    #[test]
    fn negative_radius_fails() {
        assert!(Cone::new(-1.0, 15.0, 5.0, 20.0, 10.0, 0.0, TAU).is_err());
    }

    #[test]
    fn zero_half_length_fails() {
        assert!(Cone::bored(5.0, 15.0, 20.0, 0.0).is_err());
    }

    #[test]
    fn ball_overhang_zero_when_contained() {
        let cone = straightener_cone();
        assert!(cone.ball_overhang(&Point3::new(10.0, 0.0, 0.0), 2.0) < TOLERANCE);
    }
}
