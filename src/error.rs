use thiserror::Error;

/// Top-level error type for the detgeo geometry kernel.
#[derive(Debug, Error)]
pub enum DetgeoError {
    #[error(transparent)]
    Material(#[from] MaterialError),

    #[error(transparent)]
    Solid(#[from] SolidError),

    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error("failed to write registry dump")]
    Dump(#[from] std::io::Error),
}

/// Errors raised by the material catalog.
#[derive(Debug, Error)]
pub enum MaterialError {
    #[error("unknown element symbol: {0}")]
    UnknownElement(String),

    #[error("unknown material: {0}")]
    UnknownMaterial(String),

    #[error("material name already in use: {0}")]
    NameInUse(String),

    #[error("mixture {name} declares {declared} components but {added} were added")]
    ComponentCountMismatch {
        name: String,
        declared: usize,
        added: usize,
    },

    #[error("density {0} g/cm3 must be positive")]
    InvalidDensity(f64),

    #[error("component {0} has a zero atom count")]
    ZeroAtomCount(String),

    #[error("entity not found: {0}")]
    EntityNotFound(String),
}

/// Errors raised by solid constructors.
#[derive(Debug, Error)]
pub enum SolidError {
    #[error("{parameter} = {value} must be non-negative")]
    NegativeRadius {
        parameter: &'static str,
        value: f64,
    },

    #[error("{parameter} = {value} must be positive")]
    NonPositiveRadius {
        parameter: &'static str,
        value: f64,
    },

    #[error("inner radius {inner} must be smaller than outer radius {outer}")]
    InnerExceedsOuter { inner: f64, outer: f64 },

    #[error("half-length {0} must be positive")]
    NonPositiveHalfLength(f64),

    #[error("angular sweep {0} rad is outside (0, 2*pi]")]
    InvalidSweep(f64),
}

/// Errors raised when assembling the placement tree.
#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("a root placement already exists: {0}")]
    RootAlreadyExists(String),
}

/// Convenience type alias for results using [`DetgeoError`].
pub type Result<T> = std::result::Result<T, DetgeoError>;
