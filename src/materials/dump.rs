//! Plain-text dump of the catalog's isotope, element, and material tables.
//!
//! Written to a caller-supplied sink; there is no default destination.

use std::io::{self, Write};

use super::catalog::MaterialCatalog;

/// Writes the isotope, element, and material tables to `out`.
///
/// # Errors
///
/// Returns any error raised by the sink.
pub fn write_tables(catalog: &MaterialCatalog, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "=== isotope table ===")?;
    for (_, element) in catalog.elements() {
        for isotope in &element.isotopes {
            writeln!(
                out,
                "{}{}  mass {:.5} g/mol  abundance {:.4}%",
                element.symbol,
                isotope.nucleons,
                isotope.atomic_mass,
                isotope.abundance * 100.0
            )?;
        }
    }

    writeln!(out, "=== element table ===")?;
    for (_, element) in catalog.elements() {
        writeln!(
            out,
            "{} ({})  Z = {}  molar mass {:.3} g/mol  {} isotopes",
            element.symbol,
            element.name,
            element.atomic_number,
            element.molar_mass,
            element.isotopes.len()
        )?;
    }

    writeln!(out, "=== material table ===")?;
    for (_, material) in catalog.materials() {
        write!(
            out,
            "{}  {:.5} g/cm3  {}  {:.2} K  {:.1} atm  atoms:",
            material.name, material.density, material.state, material.temperature, material.pressure
        )?;
        for component in &material.components {
            match catalog.element(component.element) {
                Ok(element) => write!(out, " {}:{}", element.symbol, component.atoms)?,
                Err(_) => write!(out, " ?:{}", component.atoms)?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
