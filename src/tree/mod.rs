pub mod logical;
mod place;
pub mod placement;

pub use logical::{LogicalId, LogicalVolume};
pub use place::{Place, PlacementDiagnostic};
pub use placement::{Placement, PlacementId};

use slotmap::SlotMap;

use crate::error::PlacementError;

/// Central arena that owns the geometry tree.
///
/// Logical volumes and placements reference each other via typed ids
/// (generational indices); the tree is rooted at the single world
/// placement. Geometric inconsistencies found while placing are recorded
/// as diagnostics, never as construction failures.
#[derive(Debug, Default)]
pub struct GeometryStore {
    logicals: SlotMap<LogicalId, LogicalVolume>,
    placements: SlotMap<PlacementId, Placement>,
    root: Option<PlacementId>,
    diagnostics: Vec<PlacementDiagnostic>,
}

impl GeometryStore {
    /// Creates a new, empty geometry store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a logical volume and returns its ID.
    pub fn add_logical(&mut self, data: LogicalVolume) -> LogicalId {
        self.logicals.insert(data)
    }

    /// Returns a reference to the logical volume, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn logical(&self, id: LogicalId) -> Result<&LogicalVolume, PlacementError> {
        self.logicals
            .get(id)
            .ok_or_else(|| PlacementError::EntityNotFound("logical volume".into()))
    }

    /// Number of logical volumes in the store.
    #[must_use]
    pub fn logical_count(&self) -> usize {
        self.logicals.len()
    }

    /// Returns a reference to the placement, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn placement(&self, id: PlacementId) -> Result<&Placement, PlacementError> {
        self.placements
            .get(id)
            .ok_or_else(|| PlacementError::EntityNotFound("placement".into()))
    }

    /// Returns the root placement, if one has been made.
    #[must_use]
    pub fn root(&self) -> Option<PlacementId> {
        self.root
    }

    /// Iterates over all placements in insertion order.
    pub fn placements(&self) -> impl Iterator<Item = (PlacementId, &Placement)> {
        self.placements.iter()
    }

    /// Number of placements in the tree.
    #[must_use]
    pub fn placement_count(&self) -> usize {
        self.placements.len()
    }

    /// Iterates over the direct children of a placement.
    pub fn children(&self, parent: PlacementId) -> impl Iterator<Item = PlacementId> + '_ {
        self.placements
            .iter()
            .filter(move |(_, p)| p.parent == Some(parent))
            .map(|(id, _)| id)
    }

    /// Finds a placement by name.
    #[must_use]
    pub fn placement_by_name(&self, name: &str) -> Option<PlacementId> {
        self.placements
            .iter()
            .find(|(_, p)| p.name == name)
            .map(|(id, _)| id)
    }

    /// Geometric inconsistencies recorded while placing, in order found.
    #[must_use]
    pub fn diagnostics(&self) -> &[PlacementDiagnostic] {
        &self.diagnostics
    }
}
