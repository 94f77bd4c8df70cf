mod catalog;
mod dump;
mod element;
mod material;
mod nist;

pub use catalog::{BuildMixture, MaterialCatalog};
pub use dump::write_tables;
pub use element::{Element, ElementId, Isotope};
pub use material::{
    Component, Material, MaterialId, State, NTP_TEMPERATURE, STANDARD_PRESSURE,
};
