use std::fmt;

use super::element::ElementId;

slotmap::new_key_type! {
    /// Unique identifier for a material in the material catalog.
    pub struct MaterialId;
}

/// Room temperature in kelvin, the default for instantiated materials.
pub const NTP_TEMPERATURE: f64 = 293.15;

/// Standard pressure in atmospheres.
pub const STANDARD_PRESSURE: f64 = 1.0;

/// Physical state of a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Solid,
    Liquid,
    Gas,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid => write!(f, "solid"),
            Self::Liquid => write!(f, "liquid"),
            Self::Gas => write!(f, "gas"),
        }
    }
}

/// One element of a material's composition, by atom count.
#[derive(Debug, Clone, Copy)]
pub struct Component {
    /// The element contributing the atoms.
    pub element: ElementId,
    /// Atom count relative to the other components.
    pub atoms: u32,
}

/// A material instantiated in the catalog.
///
/// Composition is stored as exact atom-count ratios; density and the
/// thermodynamic state are carried as given, never re-derived from the
/// composition.
#[derive(Debug, Clone)]
pub struct Material {
    /// Material name, unique within a catalog.
    pub name: String,
    /// Density in g/cm3.
    pub density: f64,
    /// Physical state.
    pub state: State,
    /// Temperature in kelvin.
    pub temperature: f64,
    /// Pressure in atmospheres.
    pub pressure: f64,
    /// Composition as atom-count ratios.
    pub components: Vec<Component>,
}

impl Material {
    /// Total atom count over all components.
    #[must_use]
    pub fn total_atoms(&self) -> u32 {
        self.components.iter().map(|c| c.atoms).sum()
    }

    /// Atom count contributed by `element`, zero if absent.
    #[must_use]
    pub fn atoms_of(&self, element: ElementId) -> u32 {
        self.components
            .iter()
            .filter(|c| c.element == element)
            .map(|c| c.atoms)
            .sum()
    }
}
