pub mod beamline;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3D rotation matrix type.
pub type Rotation3 = nalgebra::Rotation3<f64>;

/// 3D translation type.
pub type Translation3 = nalgebra::Translation3<f64>;

/// Rigid-body transform: a rotation followed by a translation.
pub type Isometry = nalgebra::IsometryMatrix3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
