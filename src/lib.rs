pub mod builder;
pub mod error;
pub mod materials;
pub mod math;
pub mod solids;
pub mod tree;

pub use error::{DetgeoError, Result};
