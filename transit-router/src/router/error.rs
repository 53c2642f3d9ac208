//! Routing error types.

use crate::domain::DomainError;

/// Error from building or querying a route context.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouteError {
    /// A bus runs through a stop that was never declared
    #[error("bus {bus:?} references undeclared stop {stop:?}")]
    InvalidTopology { bus: String, stop: String },

    /// A route query named a stop that is not part of the graph
    #[error("unknown stop {0:?}")]
    UnknownStop(String),

    /// A route query arrived before any routing settings
    #[error("routing settings have not been set")]
    MissingSettings,

    /// Invalid domain data
    #[error(transparent)]
    Domain(#[from] DomainError),
}
