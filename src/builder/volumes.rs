//! Pure per-volume descriptions of the beamline.
//!
//! Each function returns a [`VolumeSpec`] with the shape, material
//! reference, and pre-rotation position, so dimensions and positions are
//! testable without touching a store or catalog.

use crate::error::Result;
use crate::math::beamline::standoff_position;
use crate::math::Point3;
use crate::solids::{Cone, Orb, Shape, Tube};

use super::constants as dims;

/// How a volume's material is obtained from the catalog.
#[derive(Debug, Clone)]
pub enum MaterialSpec {
    /// Find-or-build a reference material by name.
    Standard(&'static str),
    /// The detector's custom Ar/CF4 gas mixture.
    DetectorGas,
}

/// A fully described volume awaiting placement.
#[derive(Debug, Clone)]
pub struct VolumeSpec {
    /// Volume and placement name.
    pub name: &'static str,
    /// The solid, in its local frame.
    pub shape: Shape,
    /// Material reference, resolved at assembly time.
    pub material: MaterialSpec,
    /// Center position in the world frame, before the shared rotation.
    pub position: Point3,
}

/// The spherical air envelope everything else lives in.
///
/// # Errors
///
/// Returns an error if the configured dimensions are degenerate.
pub fn world() -> Result<VolumeSpec> {
    Ok(VolumeSpec {
        name: "World",
        shape: Shape::Orb(Orb::new(dims::WORLD_RADIUS)?),
        material: MaterialSpec::Standard("air"),
        position: Point3::origin(),
    })
}

/// Polyethylene disc the neutron beam knocks recoil protons out of.
///
/// # Errors
///
/// Returns an error if the configured dimensions are degenerate.
pub fn target() -> Result<VolumeSpec> {
    Ok(VolumeSpec {
        name: "Target",
        shape: Shape::Tube(Tube::solid(dims::TARGET_RADIUS, dims::TARGET_HEIGHT / 2.0)?),
        material: MaterialSpec::Standard("polyethylene"),
        position: Point3::origin(),
    })
}

/// Iron cone with an axial bore, widening downstream; absorbs off-axis
/// protons and neutrons that missed the target.
///
/// # Errors
///
/// Returns an error if the configured dimensions are degenerate.
pub fn straightener_1(theta: f64) -> Result<VolumeSpec> {
    let half = dims::STRAIGHTENER_1_HEIGHT / 2.0;
    Ok(VolumeSpec {
        name: "Straightener1",
        shape: Shape::Cone(Cone::bored(
            dims::STRAIGHTENER_BORE_RADIUS,
            dims::STRAIGHTENER_1_SMALL_RADIUS,
            dims::STRAIGHTENER_1_BIG_RADIUS,
            half,
        )?),
        material: MaterialSpec::Standard("iron"),
        position: standoff_position(dims::STRAIGHTENER_1_STANDOFF, half, theta),
    })
}

/// Lead bored cylinder, the second collimation stage.
///
/// # Errors
///
/// Returns an error if the configured dimensions are degenerate.
pub fn straightener_2(theta: f64) -> Result<VolumeSpec> {
    let half = dims::STRAIGHTENER_2_HEIGHT / 2.0;
    Ok(VolumeSpec {
        name: "Straightener2",
        shape: Shape::Tube(Tube::bored(
            dims::STRAIGHTENER_BORE_RADIUS,
            dims::STRAIGHTENER_2_RADIUS,
            half,
        )?),
        material: MaterialSpec::Standard("lead"),
        position: standoff_position(dims::STRAIGHTENER_2_STANDOFF, half, theta),
    })
}

/// Thin titanium disc sealing the gas volume against the beam vacuum.
///
/// # Errors
///
/// Returns an error if the configured dimensions are degenerate.
pub fn window(theta: f64) -> Result<VolumeSpec> {
    let half = dims::WINDOW_HEIGHT / 2.0;
    Ok(VolumeSpec {
        name: "TiWindow",
        shape: Shape::Tube(Tube::solid(dims::WINDOW_RADIUS, half)?),
        material: MaterialSpec::Standard("titanium"),
        position: standoff_position(dims::WINDOW_STANDOFF, half, theta),
    })
}

/// Ar/CF4-filled cylindrical sensitive volume.
///
/// # Errors
///
/// Returns an error if the configured dimensions are degenerate.
pub fn detector_body(theta: f64) -> Result<VolumeSpec> {
    let half = dims::DETECTOR_HEIGHT / 2.0;
    Ok(VolumeSpec {
        name: "Detector",
        shape: Shape::Tube(Tube::solid(dims::DETECTOR_RADIUS, half)?),
        material: MaterialSpec::DetectorGas,
        position: standoff_position(dims::DETECTOR_STANDOFF, half, theta),
    })
}
