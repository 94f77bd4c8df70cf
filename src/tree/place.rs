use tracing::warn;

use crate::error::{PlacementError, Result};
use crate::math::{Isometry, Point3, TOLERANCE};

use super::{GeometryStore, LogicalId, Placement, PlacementId};

/// A geometric inconsistency detected at placement time.
///
/// Diagnostics never abort construction; they are recorded on the store
/// and logged at WARN so the caller can decide what to do with them.
#[derive(Debug, Clone)]
pub enum PlacementDiagnostic {
    /// The child's bounding sphere extends past its parent's boundary.
    Protrusion {
        placement: PlacementId,
        parent: PlacementId,
        /// How far the child's farthest extent reaches beyond the parent,
        /// in the same length units as the geometry.
        overhang: f64,
    },
    /// Two sibling placements' bounding geometry interpenetrates.
    SiblingOverlap {
        first: PlacementId,
        second: PlacementId,
        /// Interpenetration depth of the bounding geometry.
        depth: f64,
    },
}

/// Places a logical volume inside a parent at a rigid transform.
///
/// The root placement is made by omitting the parent; only one root may
/// exist per store. When overlap checking is on, the placement is tested
/// for containment in its parent and for intersection with its siblings.
pub struct Place {
    logical: LogicalId,
    name: String,
    parent: Option<PlacementId>,
    transform: Isometry,
    copy_no: u32,
    check: bool,
}

impl Place {
    /// Creates a new `Place` operation with an identity transform, no
    /// parent, copy index 0, and overlap checking enabled.
    #[must_use]
    pub fn new(logical: LogicalId, name: impl Into<String>) -> Self {
        Self {
            logical,
            name: name.into(),
            parent: None,
            transform: Isometry::identity(),
            copy_no: 0,
            check: true,
        }
    }

    /// Sets the parent placement.
    #[must_use]
    pub fn under(mut self, parent: PlacementId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Sets the transform into the parent frame.
    #[must_use]
    pub fn at(mut self, transform: Isometry) -> Self {
        self.transform = transform;
        self
    }

    /// Sets the copy index for repeated placements.
    #[must_use]
    pub fn copy_no(mut self, copy_no: u32) -> Self {
        self.copy_no = copy_no;
        self
    }

    /// Enables or disables geometric checking for this placement.
    #[must_use]
    pub fn check_overlaps(mut self, check: bool) -> Self {
        self.check = check;
        self
    }

    /// Executes the operation, inserting the placement into the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the logical volume or parent is unknown, or a
    /// root placement already exists and no parent was given. Geometric
    /// inconsistencies are recorded as diagnostics, not errors.
    pub fn execute(self, store: &mut GeometryStore) -> Result<PlacementId> {
        store.logical(self.logical)?;
        match self.parent {
            Some(parent) => {
                store.placement(parent)?;
            }
            None => {
                if let Some(root) = store.root {
                    let name = store.placement(root)?.name.clone();
                    return Err(PlacementError::RootAlreadyExists(name).into());
                }
            }
        }

        let id = store.placements.insert(Placement {
            name: self.name,
            logical: self.logical,
            parent: self.parent,
            transform: self.transform,
            copy_no: self.copy_no,
            checked: self.check,
        });
        if self.parent.is_none() {
            store.root = Some(id);
        }

        if self.check {
            if let Some(parent) = self.parent {
                let mut found = check_containment(store, id, parent);
                found.extend(check_siblings(store, id, parent));
                store.diagnostics.extend(found);
            }
        }
        Ok(id)
    }
}

/// Tests whether the new placement's bounding sphere stays inside its
/// parent's shape.
fn check_containment(
    store: &GeometryStore,
    id: PlacementId,
    parent: PlacementId,
) -> Vec<PlacementDiagnostic> {
    let Some((placement, parent_placement)) = store.placements.get(id).zip(store.placements.get(parent)) else {
        return Vec::new();
    };
    let Some((logical, parent_logical)) = store
        .logicals
        .get(placement.logical)
        .zip(store.logicals.get(parent_placement.logical))
    else {
        return Vec::new();
    };

    let center = Point3::from(placement.transform.translation.vector);
    let overhang = parent_logical
        .shape
        .ball_overhang(&center, logical.shape.bounding_radius());
    if overhang > TOLERANCE {
        warn!(
            child = %placement.name,
            parent = %parent_placement.name,
            overhang,
            "placement protrudes outside its parent"
        );
        return vec![PlacementDiagnostic::Protrusion {
            placement: id,
            parent,
            overhang,
        }];
    }
    Vec::new()
}

/// Tests the new placement against every sibling under the same parent.
///
/// A bounding-sphere pass filters distant pairs; co-rotated pairs are then
/// refined as bounding cylinders in the shared local frame. Bores are
/// ignored, so the test can flag nested bored solids that do not truly
/// intersect.
fn check_siblings(
    store: &GeometryStore,
    id: PlacementId,
    parent: PlacementId,
) -> Vec<PlacementDiagnostic> {
    let mut found = Vec::new();
    let Some(placement) = store.placements.get(id) else {
        return found;
    };
    let Some(logical) = store.logicals.get(placement.logical) else {
        return found;
    };
    let radius = logical.shape.bounding_radius();

    for (sibling_id, sibling) in &store.placements {
        if sibling_id == id || sibling.parent != Some(parent) {
            continue;
        }
        let Some(sibling_logical) = store.logicals.get(sibling.logical) else {
            continue;
        };
        let sibling_radius = sibling_logical.shape.bounding_radius();

        let offset = sibling.transform.translation.vector - placement.transform.translation.vector;
        let sphere_depth = (radius + sibling_radius) - offset.norm();
        if sphere_depth <= TOLERANCE {
            continue;
        }

        let co_rotated = (placement.transform.rotation.matrix()
            - sibling.transform.rotation.matrix())
        .norm()
            < TOLERANCE;
        let depth = if co_rotated {
            // Both solids are Z-symmetric about the shared rotated axis;
            // compare axial spans and radial extents in that frame.
            let local = placement.transform.rotation.inverse() * offset;
            let axial_depth = (logical.shape.half_extent_z() + sibling_logical.shape.half_extent_z())
                - local.z.abs();
            let radial_depth = (logical.shape.max_outer_radius()
                + sibling_logical.shape.max_outer_radius())
                - local.x.hypot(local.y);
            if axial_depth <= TOLERANCE || radial_depth <= TOLERANCE {
                continue;
            }
            axial_depth.min(radial_depth)
        } else {
            sphere_depth
        };

        warn!(
            first = %placement.name,
            second = %sibling.name,
            depth,
            "sibling volumes overlap"
        );
        found.push(PlacementDiagnostic::SiblingOverlap {
            first: id,
            second: sibling_id,
            depth,
        });
    }
    found
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::materials::{MaterialCatalog, MaterialId};
    use crate::math::{beamline::beamline_transform, Translation3};
    use crate::solids::{Orb, Shape, Tube};
    use crate::tree::LogicalVolume;

    fn iron(catalog: &mut MaterialCatalog) -> MaterialId {
        catalog.find_or_build_material("iron").unwrap()
    }

    fn world(store: &mut GeometryStore, catalog: &mut MaterialCatalog, radius: f64) -> PlacementId {
        let material = catalog.find_or_build_material("air").unwrap();
        let logical = store.add_logical(LogicalVolume {
            name: "World".into(),
            shape: Shape::Orb(Orb::new(radius).unwrap()),
            material,
        });
        Place::new(logical, "World").execute(store).unwrap()
    }

    fn tube_at(
        store: &mut GeometryStore,
        catalog: &mut MaterialCatalog,
        name: &str,
        parent: PlacementId,
        z: f64,
    ) -> PlacementId {
        let material = iron(catalog);
        let logical = store.add_logical(LogicalVolume {
            name: name.into(),
            shape: Shape::Tube(Tube::solid(5.0, 5.0).unwrap()),
            material,
        });
        Place::new(logical, name)
            .under(parent)
            .at(Isometry::from_parts(
                Translation3::new(0.0, 0.0, z),
                nalgebra::Rotation3::identity(),
            ))
            .execute(store)
            .unwrap()
    }

    #[test]
    fn only_one_root_allowed() {
        let mut store = GeometryStore::new();
        let mut catalog = MaterialCatalog::new();
        world(&mut store, &mut catalog, 100.0);

        let material = iron(&mut catalog);
        let logical = store.add_logical(LogicalVolume {
            name: "Second".into(),
            shape: Shape::Orb(Orb::new(1.0).unwrap()),
            material,
        });
        let result = Place::new(logical, "Second").execute(&mut store);
        assert!(result.is_err());
    }

    #[test]
    fn stale_logical_id_is_an_error() {
        let mut other = GeometryStore::new();
        let mut catalog = MaterialCatalog::new();
        let material = iron(&mut catalog);
        let logical = other.add_logical(LogicalVolume {
            name: "Orphan".into(),
            shape: Shape::Orb(Orb::new(1.0).unwrap()),
            material,
        });

        let mut store = GeometryStore::new();
        assert!(Place::new(logical, "Orphan").execute(&mut store).is_err());
    }

    #[test]
    fn children_are_listed() {
        let mut store = GeometryStore::new();
        let mut catalog = MaterialCatalog::new();
        let root = world(&mut store, &mut catalog, 100.0);
        let a = tube_at(&mut store, &mut catalog, "A", root, 0.0);
        let b = tube_at(&mut store, &mut catalog, "B", root, 50.0);

        let children: Vec<_> = store.children(root).collect();
        assert_eq!(children.len(), 2);
        assert!(children.contains(&a));
        assert!(children.contains(&b));
    }

    #[test]
    fn contained_child_has_no_diagnostics() {
        let mut store = GeometryStore::new();
        let mut catalog = MaterialCatalog::new();
        let root = world(&mut store, &mut catalog, 100.0);
        tube_at(&mut store, &mut catalog, "Inside", root, 0.0);
        assert!(store.diagnostics().is_empty());
    }

    #[test]
    fn protrusion_is_reported() {
        let mut store = GeometryStore::new();
        let mut catalog = MaterialCatalog::new();
        let root = world(&mut store, &mut catalog, 10.0);
        // Bounding radius is hypot(5, 5) ~ 7.07; at z = 8 the child's
        // farthest extent reaches ~15.07, past the radius-10 world.
        let id = tube_at(&mut store, &mut catalog, "Poking", root, 8.0);

        assert_eq!(store.diagnostics().len(), 1);
        match &store.diagnostics()[0] {
            PlacementDiagnostic::Protrusion {
                placement,
                parent,
                overhang,
            } => {
                assert_eq!(*placement, id);
                assert_eq!(*parent, root);
                let expected = 8.0 + 5.0_f64.hypot(5.0) - 10.0;
                assert!((overhang - expected).abs() < 1e-9);
            }
            other => panic!("expected protrusion, got {other:?}"),
        }
    }

    #[test]
    fn overlapping_siblings_are_reported() {
        let mut store = GeometryStore::new();
        let mut catalog = MaterialCatalog::new();
        let root = world(&mut store, &mut catalog, 100.0);
        let a = tube_at(&mut store, &mut catalog, "A", root, 0.0);
        let b = tube_at(&mut store, &mut catalog, "B", root, 8.0);

        let overlaps: Vec<_> = store
            .diagnostics()
            .iter()
            .filter(|d| matches!(d, PlacementDiagnostic::SiblingOverlap { .. }))
            .collect();
        assert_eq!(overlaps.len(), 1);
        match overlaps[0] {
            PlacementDiagnostic::SiblingOverlap {
                first,
                second,
                depth,
            } => {
                assert_eq!(*first, b);
                assert_eq!(*second, a);
                // Axial spans [-5, 5] and [3, 13] interpenetrate by 2.
                assert!((depth - 2.0).abs() < 1e-9);
            }
            PlacementDiagnostic::Protrusion { .. } => unreachable!(),
        }
    }

    #[test]
    fn touching_siblings_do_not_overlap() {
        let mut store = GeometryStore::new();
        let mut catalog = MaterialCatalog::new();
        let root = world(&mut store, &mut catalog, 100.0);
        tube_at(&mut store, &mut catalog, "A", root, 0.0);
        tube_at(&mut store, &mut catalog, "B", root, 10.0);
        assert!(store.diagnostics().is_empty());
    }

    #[test]
    fn co_rotated_siblings_use_the_shared_frame() {
        let mut store = GeometryStore::new();
        let mut catalog = MaterialCatalog::new();
        let root = world(&mut store, &mut catalog, 1000.0);
        let theta = 30.0_f64.to_radians();
        let material = iron(&mut catalog);

        // Two tubes stacked along the tilted beam axis, faces touching;
        // their bounding spheres intersect but the solids do not.
        for (name, distance) in [("Near", 70.0), ("Far", 90.0)] {
            let logical = store.add_logical(LogicalVolume {
                name: name.into(),
                shape: Shape::Tube(Tube::solid(20.0, 10.0).unwrap()),
                material,
            });
            let position = crate::math::beamline::standoff_position(distance, 10.0, theta);
            Place::new(logical, name)
                .under(root)
                .at(beamline_transform(position, theta))
                .execute(&mut store)
                .unwrap();
        }
        assert!(store.diagnostics().is_empty());
    }

    #[test]
    fn unchecked_placement_records_nothing() {
        let mut store = GeometryStore::new();
        let mut catalog = MaterialCatalog::new();
        let root = world(&mut store, &mut catalog, 10.0);
        let material = iron(&mut catalog);
        let logical = store.add_logical(LogicalVolume {
            name: "Poking".into(),
            shape: Shape::Tube(Tube::solid(5.0, 5.0).unwrap()),
            material,
        });
        Place::new(logical, "Poking")
            .under(root)
            .at(Isometry::from_parts(
                Translation3::new(0.0, 0.0, 8.0),
                nalgebra::Rotation3::identity(),
            ))
            .check_overlaps(false)
            .execute(&mut store)
            .unwrap();
        assert!(store.diagnostics().is_empty());
    }
}
