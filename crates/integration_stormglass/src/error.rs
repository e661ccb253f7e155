//! StormGlass error types

use thiserror::Error;

use crate::transport::TransportError;

/// Errors returned by the StormGlass client
///
/// Every failed fetch falls into exactly one of the two variants. Entries that
/// fail validation are filtered out and never surface as errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StormGlassError {
    /// The request never produced a usable response (network, timeout,
    /// undecodable payload, ...)
    #[error("Unexpected error when trying to communicate to StormGlass: {0}")]
    ClientRequest(String),

    /// The service answered with an error status
    #[error("Unexpected error returned by the StormGlass service: {0}")]
    ClientResponse(String),
}

impl StormGlassError {
    /// Build a response error from the body and status the service returned
    #[must_use]
    pub fn from_response(status: u16, data: &serde_json::Value) -> Self {
        Self::ClientResponse(format!("Error: {data} Code: {status}"))
    }

    /// The wrapped message, without the category prefix
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::ClientRequest(msg) | Self::ClientResponse(msg) => msg,
        }
    }

    /// Returns true if the service itself reported the failure
    #[must_use]
    pub const fn is_response_error(&self) -> bool {
        matches!(self, Self::ClientResponse(_))
    }
}

impl From<TransportError> for StormGlassError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Response { status, data } => Self::from_response(status, &data),
            TransportError::Request(msg) => Self::ClientRequest(msg),
        }
    }
}
