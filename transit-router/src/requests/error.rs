//! Request processing error types.

use crate::domain::DomainError;
use crate::router::RouteError;

/// Errors that abort request processing.
///
/// Missing buses, stops and routes are not errors; they are answered with
/// a "not found" response.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Reading the request document failed
    #[error("failed to read requests: {0}")]
    Io(#[from] std::io::Error),

    /// The request document is not valid JSON for the request schema
    #[error("malformed request document: {0}")]
    Json(#[from] serde_json::Error),

    /// A request carried invalid values
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The network cannot be routed
    #[error(transparent)]
    Route(#[from] RouteError),
}
