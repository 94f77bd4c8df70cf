use crate::math::Isometry;

use super::logical::LogicalId;

slotmap::new_key_type! {
    /// Unique identifier for a placement in the geometry store.
    pub struct PlacementId;
}

/// A positioned instance of a logical volume inside a parent.
#[derive(Debug, Clone)]
pub struct Placement {
    /// Placement name, conventionally the logical volume's.
    pub name: String,
    /// The logical volume being placed.
    pub logical: LogicalId,
    /// Parent placement; `None` only for the root.
    pub parent: Option<PlacementId>,
    /// Transform from the volume's local frame into the parent frame.
    pub transform: Isometry,
    /// Copy index for repeated placements of the same logical volume.
    pub copy_no: u32,
    /// Whether geometric checks ran when this placement was made.
    pub checked: bool,
}
