//! Error taxonomy shared across the Mealdex crates
//!
//! Three families of failure exist in this system:
//!
//! - [`GatewayError`]: the remote meal database could not be reached, answered
//!   with a non-success status, or returned a body that did not decode. Always
//!   recoverable; an empty result list is *not* a gateway error.
//! - [`StorageError`]: the local key-value store (favorites) failed.
//! - [`SessionError`]: session-level conditions such as a detail lookup that
//!   returned no record.

use thiserror::Error;

/// Result type alias for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Failures reported by the remote data gateway.
///
/// Callers must treat any of these as "no data" for rendering but surface
/// them distinctly from a zero-match result.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The transport layer failed before a response was received
    #[error("transport error: {0}")]
    Transport(String),

    /// The remote endpoint answered with a non-success status
    #[error("unexpected status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, best effort
        message: String,
    },

    /// The response body was not the expected JSON envelope
    #[error("undecodable response: {0}")]
    Decode(String),

    /// The client configuration is invalid
    #[error("configuration error: {0}")]
    Config(String),
}

impl GatewayError {
    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a status error
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Check if this is a client error (4xx status)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Status { status, .. } if (400..500).contains(status))
    }

    /// Check if this is a server error (5xx status)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status >= 500)
    }
}

/// Failures of the local key-value storage layer
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the backing file failed
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored value could not be encoded or decoded
    #[error("storage encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Session-level failures surfaced to the view layer
#[derive(Error, Debug)]
pub enum SessionError {
    /// A gateway call failed
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// A detail lookup returned no record for the requested id
    #[error("no meal found with id {id}")]
    DetailNotFound {
        /// The id that was looked up
        id: String,
    },
}
