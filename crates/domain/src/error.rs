//! Common error types used across the workspace.
//!
//! Errors in this module are reserved for malformed construction arguments
//! and broken configuration. Expected negative outcomes (duplicates, unknown
//! models, invalid readings) are reported through `Option` / `bool` instead.

/// Top-level error for the smarthome workspace.
#[derive(Debug, thiserror::Error)]
pub enum SmartHomeError {
    #[error("Validation error")]
    Validation(#[from] ValidationError),

    #[error("Not found")]
    NotFound(#[from] NotFoundError),

    #[error("Catalogue error")]
    Catalogue(#[from] CatalogueError),
}

/// A constructor argument violated a domain invariant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("model must not be empty")]
    EmptyModel,

    #[error("{dimension} must be a positive number, got {value}")]
    InvalidDimension {
        dimension: &'static str,
        value: f64,
    },

    #[error("latitude must be between -90 and 90, got {0}")]
    LatitudeOutOfRange(f64),

    #[error("longitude must be between -180 and 180, got {0}")]
    LongitudeOutOfRange(f64),

    #[error("altitude must be a finite number, got {0}")]
    InvalidAltitude(f64),

    #[error("{field} must not be empty")]
    EmptyAddressField { field: &'static str },
}

/// A lookup for a mandatory item failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// The catalogue configuration references something that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueError {
    #[error("model {model} refers to unknown implementation {implementation}")]
    UnknownImplementation {
        model: String,
        implementation: String,
    },

    #[error("unknown functionality {0}")]
    UnknownFunctionality(String),
}
