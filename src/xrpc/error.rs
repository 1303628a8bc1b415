//! Error types for XRPC calls.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::CredentialError;

/// Errors that can occur while talking to the network.
#[derive(Debug, Error)]
pub enum XrpcError {
    /// Credentials could not be resolved (missing or stale)
    #[error("Credentials: {0}")]
    Credentials(#[from] CredentialError),

    /// HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Request never produced a response
    #[error("Connection failed calling {nsid}: {source}")]
    Transport {
        nsid: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("{nsid} returned {status}: {error}: {message}")]
    Status {
        nsid: String,
        status: u16,
        error: String,
        message: String,
    },

    /// Response body did not match the expected shape
    #[error("Failed to decode {nsid} response: {source}")]
    Decode {
        nsid: String,
        #[source]
        source: serde_json::Error,
    },

    /// A write was accepted but the record did not validate
    #[error("Validation failed for {collection} record: status '{status}'")]
    Validation { collection: String, status: String },

    /// Write attempted without credentials
    #[error("{nsid} requires authentication")]
    Unauthenticated { nsid: String },

    /// Malformed URL or `at://` URI
    #[error("Invalid URI '{uri}'")]
    InvalidUri { uri: String },

    /// Thread cache could not be read or written
    #[error("Thread cache error at '{path}': {source}")]
    Cache {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl XrpcError {
    /// Short machine-readable kind, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            XrpcError::Credentials(_) => "credentials",
            XrpcError::Client(_) => "client",
            XrpcError::Transport { .. } => "transport",
            XrpcError::Status { .. } => "status",
            XrpcError::Decode { .. } => "decode",
            XrpcError::Validation { .. } => "validation",
            XrpcError::Unauthenticated { .. } => "unauthenticated",
            XrpcError::InvalidUri { .. } => "invalid_uri",
            XrpcError::Cache { .. } => "cache",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message() {
        let err = XrpcError::Status {
            nsid: "com.atproto.repo.putRecord".to_string(),
            status: 400,
            error: "InvalidRequest".to_string(),
            message: "Record/name is required".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "com.atproto.repo.putRecord returned 400: InvalidRequest: Record/name is required"
        );
        assert_eq!(err.kind(), "status");
    }

    #[test]
    fn validation_error_kind() {
        let err = XrpcError::Validation {
            collection: "app.bsky.graph.list".to_string(),
            status: "unknown".to_string(),
        };
        assert_eq!(err.kind(), "validation");
        assert!(err.to_string().contains("app.bsky.graph.list"));
    }
}
