//! Beamline dimensions from the telescope's engineering layout.
//!
//! Lengths in millimetres, temperatures in kelvin, pressures in
//! atmospheres, densities in g/cm3.

/// Radius of the spherical air envelope everything lives in.
pub const WORLD_RADIUS: f64 = 1300.0;

/// Angle between the neutron beam and the detector axis, degrees.
///
/// Chosen to keep direct beam out of the detector background without
/// starving it of recoil protons.
pub const BEAM_ANGLE_DEG: f64 = 30.0;

pub const TARGET_RADIUS: f64 = 5.0;
pub const TARGET_HEIGHT: f64 = 0.2;

/// Axial bore shared by both straighteners.
pub const STRAIGHTENER_BORE_RADIUS: f64 = 5.0;
pub const STRAIGHTENER_1_SMALL_RADIUS: f64 = 15.0;
pub const STRAIGHTENER_1_BIG_RADIUS: f64 = 20.0;
pub const STRAIGHTENER_1_HEIGHT: f64 = 20.0;
pub const STRAIGHTENER_1_STANDOFF: f64 = 70.0;
pub const STRAIGHTENER_2_RADIUS: f64 = 20.0;
pub const STRAIGHTENER_2_HEIGHT: f64 = 20.0;
pub const STRAIGHTENER_2_STANDOFF: f64 = 90.0;

pub const WINDOW_RADIUS: f64 = 10.0;
pub const WINDOW_HEIGHT: f64 = 0.02;
pub const WINDOW_STANDOFF: f64 = 100.0;

pub const DETECTOR_RADIUS: f64 = 50.0;
pub const DETECTOR_HEIGHT: f64 = 1000.0;
pub const DETECTOR_STANDOFF: f64 = 1100.0;

/// Ar/CF4 fill at 4 atm: 90% argon, 10% carbon tetrafluoride by mole
/// fraction of gas molecules, decomposed to atoms as Ar:C:F = 9:1:4.
pub const GAS_NAME: &str = "Ar_0.9-CF4_0.1";
pub const GAS_DENSITY: f64 = 0.00798;
pub const GAS_TEMPERATURE: f64 = 293.15;
pub const GAS_PRESSURE: f64 = 4.0;
pub const GAS_ARGON_ATOMS: u32 = 9;
pub const GAS_CARBON_ATOMS: u32 = 1;
pub const GAS_FLUORINE_ATOMS: u32 = 4;
