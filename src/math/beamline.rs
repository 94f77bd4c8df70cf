//! Transforms for volumes laid out along the beam axis.
//!
//! The beam travels along +Z from the origin. The whole downstream
//! assembly is tilted by one shared beam-to-detector angle about +Y, so a
//! volume at standoff `D` ends up at `(D - H) * (sin(theta), 0, cos(theta))`
//! in the world frame, where `H` is its half-extent along the beam.

use super::{Isometry, Point3, Rotation3, Translation3, Vector3};

/// The shared rotation tilting the beam axis by `theta` radians about +Y.
#[must_use]
pub fn beam_rotation(theta: f64) -> Rotation3 {
    Rotation3::from_axis_angle(&Vector3::y_axis(), theta)
}

/// Center of a volume placed on the tilted beam axis, in the world frame.
///
/// `distance` is measured from the origin along the unrotated beam axis to
/// the volume's downstream face; the center sits a half-extent closer.
#[must_use]
pub fn standoff_position(distance: f64, half_extent: f64, theta: f64) -> Point3 {
    let d = distance - half_extent;
    Point3::new(d * theta.sin(), 0.0, d * theta.cos())
}

/// Full placement transform for a beam-axis volume: the shared rotation
/// combined with the world-frame position.
#[must_use]
pub fn beamline_transform(position: Point3, theta: f64) -> Isometry {
    Isometry::from_parts(Translation3::from(position.coords), beam_rotation(theta))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use approx::assert_relative_eq;

    #[test]
    fn rotation_tilts_beam_axis() {
        let theta = 30.0_f64.to_radians();
        let tilted = beam_rotation(theta) * Vector3::z();
        assert_relative_eq!(tilted.x, theta.sin(), epsilon = 1e-12);
        assert_relative_eq!(tilted.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(tilted.z, theta.cos(), epsilon = 1e-12);
    }

    #[test]
    fn zero_angle_keeps_position_on_z() {
        let p = standoff_position(100.0, 10.0, 0.0);
        assert!((p - Point3::new(0.0, 0.0, 90.0)).norm() < TOLERANCE);
    }

    #[test]
    fn standoff_subtracts_half_extent() {
        let theta = 30.0_f64.to_radians();
        let p = standoff_position(70.0, 10.0, theta);
        assert_relative_eq!(p.x, 60.0 * theta.sin(), epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 60.0 * theta.cos(), epsilon = 1e-12);
    }

    #[test]
    fn transform_carries_rotation_and_translation() {
        let theta = 30.0_f64.to_radians();
        let position = standoff_position(90.0, 10.0, theta);
        let t = beamline_transform(position, theta);
        assert!((t.translation.vector - position.coords).norm() < TOLERANCE);
        // Local +Z maps onto the tilted beam direction.
        let axis = t.rotation * Vector3::z();
        assert_relative_eq!(axis.x, theta.sin(), epsilon = 1e-12);
        assert_relative_eq!(axis.z, theta.cos(), epsilon = 1e-12);
    }
}
