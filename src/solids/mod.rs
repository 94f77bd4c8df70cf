mod cone;
mod orb;
mod tube;

pub use cone::Cone;
pub use orb::Orb;
pub use tube::Tube;

use std::f64::consts::TAU;

use crate::math::{Point3, TOLERANCE};

/// A solid geometric primitive, described in its own local frame.
///
/// The local origin is the solid's centroid; rotationally symmetric solids
/// take +Z as their symmetry axis.
#[derive(Debug, Clone)]
pub enum Shape {
    /// A full solid sphere.
    Orb(Orb),
    /// A cylindrical section, hollow when the inner radius is positive.
    Tube(Tube),
    /// A truncated cone section, hollow when the inner radii are positive.
    Cone(Cone),
}

impl Shape {
    /// Radius of the smallest origin-centered sphere containing the solid.
    #[must_use]
    pub fn bounding_radius(&self) -> f64 {
        match self {
            Self::Orb(orb) => orb.bounding_radius(),
            Self::Tube(tube) => tube.bounding_radius(),
            Self::Cone(cone) => cone.bounding_radius(),
        }
    }

    /// Half-extent of the solid along its local Z axis.
    #[must_use]
    pub fn half_extent_z(&self) -> f64 {
        match self {
            Self::Orb(orb) => orb.radius(),
            Self::Tube(tube) => tube.half_length(),
            Self::Cone(cone) => cone.half_length(),
        }
    }

    /// Largest radial extent from the local Z axis.
    #[must_use]
    pub fn max_outer_radius(&self) -> f64 {
        match self {
            Self::Orb(orb) => orb.radius(),
            Self::Tube(tube) => tube.outer_radius(),
            Self::Cone(cone) => cone.outer_radius_lo().max(cone.outer_radius_hi()),
        }
    }

    /// `true` when the solid's angular sweep is a full revolution.
    #[must_use]
    pub fn is_full_revolution(&self) -> bool {
        match self {
            Self::Orb(_) => true,
            Self::Tube(tube) => (tube.sweep_angle() - TAU).abs() < TOLERANCE,
            Self::Cone(cone) => (cone.sweep_angle() - TAU).abs() < TOLERANCE,
        }
    }

    /// Tests whether a point in the solid's local frame lies inside it.
    #[must_use]
    pub fn contains_local(&self, point: &Point3) -> bool {
        match self {
            Self::Orb(orb) => orb.contains_local(point),
            Self::Tube(tube) => tube.contains_local(point),
            Self::Cone(cone) => cone.contains_local(point),
        }
    }

    /// Distance by which a ball at `center` pokes outside the solid, or
    /// zero when the ball is entirely contained.
    ///
    /// Conservative for partial sweeps, which are treated as full.
    #[must_use]
    pub fn ball_overhang(&self, center: &Point3, radius: f64) -> f64 {
        match self {
            Self::Orb(orb) => orb.ball_overhang(center, radius),
            Self::Tube(tube) => tube.ball_overhang(center, radius),
            Self::Cone(cone) => cone.ball_overhang(center, radius),
        }
    }
}

/// Tests whether an angle falls inside a `[start, start + sweep]` section.
pub(crate) fn angle_within(start: f64, sweep: f64, angle: f64) -> bool {
    if sweep >= TAU - TOLERANCE {
        return true;
    }
    let mut rel = (angle - start) % TAU;
    if rel < 0.0 {
        rel += TAU;
    }
    rel <= sweep + TOLERANCE
}
