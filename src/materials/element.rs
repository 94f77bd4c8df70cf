slotmap::new_key_type! {
    /// Unique identifier for an element in the material catalog.
    pub struct ElementId;
}

/// A naturally occurring isotope of an element.
#[derive(Debug, Clone, Copy)]
pub struct Isotope {
    /// Nucleon count (mass number).
    pub nucleons: u32,
    /// Atomic mass in g/mol.
    pub atomic_mass: f64,
    /// Natural abundance as a mole fraction.
    pub abundance: f64,
}

/// A chemical element instantiated in the catalog.
#[derive(Debug, Clone)]
pub struct Element {
    /// Chemical symbol, e.g. "Ar".
    pub symbol: String,
    /// Full element name.
    pub name: String,
    /// Atomic number.
    pub atomic_number: u32,
    /// Mean molar mass in g/mol, weighted over the natural composition.
    pub molar_mass: f64,
    /// Natural isotope composition.
    pub isotopes: Vec<Isotope>,
}
