//! Domain error types.
//!
//! These errors represent validation failures and data inconsistencies
//! in the domain layer. "Not found" is never an error here: lookups
//! return `Option`.

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Latitude or longitude outside the valid range
    #[error("invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// Routing settings that cannot produce meaningful travel times
    #[error("invalid routing settings: {0}")]
    InvalidSettings(&'static str),

    /// A stop is referenced by a bus but was never declared with coordinates
    #[error("stop {0:?} is referenced but was never declared")]
    UndeclaredStop(String),
}
