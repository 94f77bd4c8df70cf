//! Assembly of the recoil-telescope beamline.
//!
//! Construction is one linear pass: world, target, straightener 1,
//! straightener 2, the optional titanium window, then the gas detector.
//! Every non-world volume shares a single beam rotation; positions follow
//! `(D - H) * (sin(theta), 0, cos(theta))` for standoff `D` and half-extent
//! `H`.

pub mod constants;
mod volumes;

pub use volumes::{
    detector_body, straightener_1, straightener_2, target, window, world, MaterialSpec,
    VolumeSpec,
};

use std::io::Write;

use tracing::debug;

use crate::error::{MaterialError, PlacementError, Result};
use crate::materials::{write_tables, BuildMixture, MaterialCatalog, MaterialId, State};
use crate::math::beamline::beamline_transform;
use crate::math::Isometry;
use crate::tree::{GeometryStore, LogicalVolume, Place, PlacementId};

/// Runtime configuration for beamline assembly.
#[derive(Debug, Clone)]
pub struct BeamlineConfig {
    /// Include the titanium window between the collimators and the gas
    /// volume.
    pub include_window: bool,
    /// Beam-to-detector angle in degrees.
    pub beam_angle_deg: f64,
    /// Run geometric containment/overlap checks at placement time.
    pub check_overlaps: bool,
}

impl Default for BeamlineConfig {
    fn default() -> Self {
        Self {
            include_window: true,
            beam_angle_deg: constants::BEAM_ANGLE_DEG,
            check_overlaps: true,
        }
    }
}

/// Assembles the full beamline into a geometry store.
///
/// Materials resolve through the injected catalog; an optional sink
/// receives the registry dump once construction succeeds. The operation
/// returns the root (world) placement, the entry point for everything
/// downstream of this crate.
pub struct BuildBeamline<'a> {
    config: BeamlineConfig,
    dump_sink: Option<&'a mut dyn Write>,
}

impl<'a> BuildBeamline<'a> {
    /// Creates a new `BuildBeamline` operation.
    #[must_use]
    pub fn new(config: BeamlineConfig) -> Self {
        Self {
            config,
            dump_sink: None,
        }
    }

    /// Registers a sink that receives the isotope, element, and material
    /// tables after construction. Without one, nothing is dumped.
    #[must_use]
    pub fn dump_registries(mut self, sink: &'a mut dyn Write) -> Self {
        self.dump_sink = Some(sink);
        self
    }

    /// Executes the operation, returning the root placement.
    ///
    /// # Errors
    ///
    /// Returns an error if a material cannot be resolved, a placement is
    /// invalid (the store already has a root), or the registry dump fails
    /// to write. Geometric diagnostics are recorded on the store, not
    /// returned as errors.
    pub fn execute(
        self,
        store: &mut GeometryStore,
        catalog: &mut MaterialCatalog,
    ) -> Result<PlacementId> {
        let theta = self.config.beam_angle_deg.to_radians();
        let check = self.config.check_overlaps;

        let root = place_spec(store, catalog, volumes::world()?, None, Isometry::identity(), check)?;

        let mut specs = vec![
            volumes::target()?,
            volumes::straightener_1(theta)?,
            volumes::straightener_2(theta)?,
        ];
        if self.config.include_window {
            specs.push(volumes::window(theta)?);
        }
        specs.push(volumes::detector_body(theta)?);

        for spec in specs {
            let transform = beamline_transform(spec.position, theta);
            place_spec(store, catalog, spec, Some(root), transform, check)?;
        }

        debug!(
            placements = store.placement_count(),
            diagnostics = store.diagnostics().len(),
            "beamline assembled"
        );

        if let Some(sink) = self.dump_sink {
            write_tables(catalog, sink)?;
        }
        Ok(root)
    }
}

/// Resolves a volume spec's material, wraps it into a logical volume, and
/// places it.
fn place_spec(
    store: &mut GeometryStore,
    catalog: &mut MaterialCatalog,
    spec: VolumeSpec,
    parent: Option<PlacementId>,
    transform: Isometry,
    check: bool,
) -> Result<PlacementId> {
    // Validate the attachment point before inserting anything, so a
    // rejected placement does not strand a logical volume in the store.
    match parent {
        Some(parent) => {
            store.placement(parent)?;
        }
        None => {
            if let Some(root) = store.root() {
                let name = store.placement(root)?.name.clone();
                return Err(PlacementError::RootAlreadyExists(name).into());
            }
        }
    }
    let material = match spec.material {
        MaterialSpec::Standard(name) => catalog.find_or_build_material(name)?,
        MaterialSpec::DetectorGas => detector_gas(catalog)?,
    };
    let logical = store.add_logical(LogicalVolume {
        name: spec.name.into(),
        shape: spec.shape,
        material,
    });
    let mut place = Place::new(logical, spec.name)
        .at(transform)
        .check_overlaps(check);
    if let Some(parent) = parent {
        place = place.under(parent);
    }
    place.execute(store)
}

/// Finds or builds the detector's Ar/CF4 fill.
fn detector_gas(catalog: &mut MaterialCatalog) -> std::result::Result<MaterialId, MaterialError> {
    if let Some(id) = catalog.find_material(constants::GAS_NAME) {
        return Ok(id);
    }
    BuildMixture::new(
        constants::GAS_NAME,
        constants::GAS_DENSITY,
        3,
        State::Gas,
        constants::GAS_TEMPERATURE,
        constants::GAS_PRESSURE,
    )
    .with_element("Ar", constants::GAS_ARGON_ATOMS)
    .with_element("C", constants::GAS_CARBON_ATOMS)
    .with_element("F", constants::GAS_FLUORINE_ATOMS)
    .execute(catalog)
}
