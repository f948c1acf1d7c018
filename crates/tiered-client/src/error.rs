//! # Client Errors
//!
//! A single error taxonomy is shared by every tier. Transport and resource
//! client failures are absorbed by the [`FallbackResolver`](crate::FallbackResolver);
//! local store failures are final and reach the caller.

use crate::resource::Operation;

/// Errors produced by the transport, the resource clients and the local store.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    /// The backend answered with a non-2xx status. The body is not parsed.
    #[error("Remote error: {status} {status_text}")]
    RemoteError { status: u16, status_text: String },

    #[error("Request timed out")]
    Timeout,

    /// A 2xx body that is not valid JSON or does not match the record shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Connection-level failure (refused, reset, DNS).
    #[error("Network error: {0}")]
    Network(String),

    /// The backend has no endpoint for this operation on this family.
    #[error("{operation} is not supported for {family}")]
    NotSupported {
        family: &'static str,
        operation: Operation,
    },

    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("API credential is not configured")]
    Unconfigured,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Local store closed")]
    StoreClosed,

    #[error("Local store dropped response channel")]
    StoreDropped,
}

impl ClientError {
    /// True for the classes that send an operation to the local tier.
    pub fn is_remote_failure(&self) -> bool {
        matches!(
            self,
            ClientError::RemoteError { .. }
                | ClientError::Timeout
                | ClientError::MalformedResponse(_)
                | ClientError::Network(_)
                | ClientError::NotSupported { .. }
                | ClientError::Unconfigured
        )
    }

    pub(crate) fn malformed(err: impl std::fmt::Display) -> Self {
        ClientError::MalformedResponse(err.to_string())
    }
}
