//! Builds the full beamline and prints the placement table, any geometry
//! diagnostics, and the material registries.
//!
//! Run with `RUST_LOG=debug` to see catalog and placement tracing.

use detgeo::builder::{BeamlineConfig, BuildBeamline};
use detgeo::materials::MaterialCatalog;
use detgeo::tree::{GeometryStore, PlacementDiagnostic};

fn main() -> detgeo::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut store = GeometryStore::new();
    let mut catalog = MaterialCatalog::new();
    let mut stdout = std::io::stdout();

    BuildBeamline::new(BeamlineConfig::default())
        .dump_registries(&mut stdout)
        .execute(&mut store, &mut catalog)?;

    println!("placements:");
    for (_, placement) in store.placements() {
        let logical = store.logical(placement.logical)?;
        let material = catalog.material(logical.material)?;
        let t = placement.transform.translation.vector;
        println!(
            "  {:<14} {:<16} at ({:8.2}, {:6.2}, {:8.2}) mm",
            placement.name, material.name, t.x, t.y, t.z
        );
    }

    if store.diagnostics().is_empty() {
        println!("no geometry diagnostics");
    } else {
        println!("geometry diagnostics:");
        for diagnostic in store.diagnostics() {
            match diagnostic {
                PlacementDiagnostic::Protrusion {
                    placement,
                    parent,
                    overhang,
                } => {
                    println!(
                        "  {} protrudes {overhang:.2} mm outside {}",
                        store.placement(*placement)?.name,
                        store.placement(*parent)?.name
                    );
                }
                PlacementDiagnostic::SiblingOverlap {
                    first,
                    second,
                    depth,
                } => {
                    println!(
                        "  {} overlaps {} by {depth:.2} mm",
                        store.placement(*first)?.name,
                        store.placement(*second)?.name
                    );
                }
            }
        }
    }
    Ok(())
}
