use crate::error::{Result, SolidError};
use crate::math::{Point3, TOLERANCE};

/// A full solid sphere centered on the local origin.
#[derive(Debug, Clone)]
pub struct Orb {
    radius: f64,
}

impl Orb {
    /// Creates a new orb.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive.
    pub fn new(radius: f64) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(SolidError::NonPositiveRadius {
                parameter: "orb radius",
                value: radius,
            }
            .into());
        }
        Ok(Self { radius })
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Radius of the smallest origin-centered sphere containing the orb.
    #[must_use]
    pub fn bounding_radius(&self) -> f64 {
        self.radius
    }

    /// Tests whether a local-frame point lies inside the orb.
    #[must_use]
    pub fn contains_local(&self, point: &Point3) -> bool {
        point.coords.norm() <= self.radius + TOLERANCE
    }

    /// Distance by which a ball at `center` pokes outside the orb.
    #[must_use]
    pub fn ball_overhang(&self, center: &Point3, radius: f64) -> f64 {
        (center.coords.norm() + radius - self.radius).max(0.0)
    }
}
