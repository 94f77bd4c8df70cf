use crate::materials::MaterialId;
use crate::solids::Shape;

slotmap::new_key_type! {
    /// Unique identifier for a logical volume in the geometry store.
    pub struct LogicalId;
}

/// The pairing of a shape with a material, independent of any position.
#[derive(Debug, Clone)]
pub struct LogicalVolume {
    /// Volume name.
    pub name: String,
    /// The solid bounding this volume.
    pub shape: Shape,
    /// The material filling it.
    pub material: MaterialId,
}
