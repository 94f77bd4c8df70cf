use std::collections::HashMap;

use slotmap::SlotMap;
use tracing::debug;

use crate::error::MaterialError;
use crate::math::TOLERANCE;

use super::element::{Element, ElementId, Isotope};
use super::material::{Component, Material, MaterialId, State, NTP_TEMPERATURE, STANDARD_PRESSURE};
use super::nist;

/// Injectable find-or-create registry of elements and materials.
///
/// The catalog is append-only: lookups instantiate reference entries on
/// first use and later lookups return the same id. Entries are never
/// removed or mutated once inserted.
#[derive(Debug, Default)]
pub struct MaterialCatalog {
    elements: SlotMap<ElementId, Element>,
    materials: SlotMap<MaterialId, Material>,
    element_index: HashMap<String, ElementId>,
    material_index: HashMap<String, MaterialId>,
}

impl MaterialCatalog {
    /// Creates a new, empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the element for a chemical symbol, instantiating it from
    /// the reference table on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbol is not in the reference table.
    pub fn find_or_build_element(&mut self, symbol: &str) -> Result<ElementId, MaterialError> {
        if let Some(&id) = self.element_index.get(symbol) {
            return Ok(id);
        }
        let record = nist::find_element(symbol)
            .ok_or_else(|| MaterialError::UnknownElement(symbol.to_owned()))?;
        let id = self.elements.insert(Element {
            symbol: record.symbol.to_owned(),
            name: record.name.to_owned(),
            atomic_number: record.atomic_number,
            molar_mass: record.molar_mass,
            isotopes: record
                .isotopes
                .iter()
                .map(|&(nucleons, atomic_mass, abundance)| Isotope {
                    nucleons,
                    atomic_mass,
                    abundance,
                })
                .collect(),
        });
        self.element_index.insert(record.symbol.to_owned(), id);
        debug!(symbol, "instantiated element from reference table");
        Ok(id)
    }

    /// Returns the material for a name, instantiating it and its component
    /// elements from the reference table on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not in the reference table.
    pub fn find_or_build_material(&mut self, name: &str) -> Result<MaterialId, MaterialError> {
        if let Some(&id) = self.material_index.get(name) {
            return Ok(id);
        }
        let record = nist::find_material(name)
            .ok_or_else(|| MaterialError::UnknownMaterial(name.to_owned()))?;
        // The reference lookup ignores case; index under the canonical
        // spelling so every spelling resolves to the same entry.
        if let Some(&id) = self.material_index.get(record.name) {
            return Ok(id);
        }
        let components = record
            .composition
            .iter()
            .map(|&(symbol, atoms)| {
                Ok(Component {
                    element: self.find_or_build_element(symbol)?,
                    atoms,
                })
            })
            .collect::<Result<Vec<_>, MaterialError>>()?;
        let id = self.materials.insert(Material {
            name: record.name.to_owned(),
            density: record.density,
            state: record.state,
            temperature: NTP_TEMPERATURE,
            pressure: STANDARD_PRESSURE,
            components,
        });
        self.material_index.insert(record.name.to_owned(), id);
        debug!(name, "instantiated material from reference table");
        Ok(id)
    }

    /// Returns the id of an already instantiated material, if any.
    #[must_use]
    pub fn find_material(&self, name: &str) -> Option<MaterialId> {
        self.material_index.get(name).copied()
    }

    /// Returns a reference to the element data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not belong to this catalog.
    pub fn element(&self, id: ElementId) -> Result<&Element, MaterialError> {
        self.elements
            .get(id)
            .ok_or_else(|| MaterialError::EntityNotFound("element".into()))
    }

    /// Returns a reference to the material data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the id does not belong to this catalog.
    pub fn material(&self, id: MaterialId) -> Result<&Material, MaterialError> {
        self.materials
            .get(id)
            .ok_or_else(|| MaterialError::EntityNotFound("material".into()))
    }

    /// Iterates over all instantiated elements.
    pub fn elements(&self) -> impl Iterator<Item = (ElementId, &Element)> {
        self.elements.iter()
    }

    /// Iterates over all instantiated materials.
    pub fn materials(&self) -> impl Iterator<Item = (MaterialId, &Material)> {
        self.materials.iter()
    }

    fn insert_mixture(&mut self, material: Material) -> MaterialId {
        let name = material.name.clone();
        let id = self.materials.insert(material);
        self.material_index.insert(name, id);
        id
    }
}

/// Constructs a multi-element mixture in the catalog.
///
/// Mirrors the declare-then-add shape of the registry API it stands in
/// for: the component count is declared up front, each element is added
/// with its atom count, and `execute` rejects a mismatch.
pub struct BuildMixture {
    name: String,
    density: f64,
    declared_components: usize,
    state: State,
    temperature: f64,
    pressure: f64,
    components: Vec<(String, u32)>,
}

impl BuildMixture {
    /// Creates a new `BuildMixture` operation.
    ///
    /// * `density` - g/cm3
    /// * `temperature` - kelvin
    /// * `pressure` - atmospheres
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        density: f64,
        declared_components: usize,
        state: State,
        temperature: f64,
        pressure: f64,
    ) -> Self {
        Self {
            name: name.into(),
            density,
            declared_components,
            state,
            temperature,
            pressure,
            components: Vec::new(),
        }
    }

    /// Adds an element to the mixture by symbol and atom count.
    #[must_use]
    pub fn with_element(mut self, symbol: &str, atoms: u32) -> Self {
        self.components.push((symbol.to_owned(), atoms));
        self
    }

    /// Executes the operation, inserting the mixture into the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the density is non-positive, the name is
    /// already taken, the added components do not match the declared
    /// count, an atom count is zero, or an element symbol is unknown.
    pub fn execute(self, catalog: &mut MaterialCatalog) -> Result<MaterialId, MaterialError> {
        if self.density < TOLERANCE {
            return Err(MaterialError::InvalidDensity(self.density));
        }
        if catalog.material_index.contains_key(&self.name) {
            return Err(MaterialError::NameInUse(self.name));
        }
        if self.components.len() != self.declared_components {
            return Err(MaterialError::ComponentCountMismatch {
                name: self.name,
                declared: self.declared_components,
                added: self.components.len(),
            });
        }
        let mut components = Vec::with_capacity(self.components.len());
        for (symbol, atoms) in &self.components {
            if *atoms == 0 {
                return Err(MaterialError::ZeroAtomCount(symbol.clone()));
            }
            components.push(Component {
                element: catalog.find_or_build_element(symbol)?,
                atoms: *atoms,
            });
        }
        debug!(name = %self.name, components = components.len(), "built mixture");
        Ok(catalog.insert_mixture(Material {
            name: self.name,
            density: self.density,
            state: self.state,
            temperature: self.temperature,
            pressure: self.pressure,
            components,
        }))
    }
}
