//! Unified error types for the crate.

use thiserror::Error;

use crate::provider::ProviderRpcError;

/// Boxed source error carried by configuration failures.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Top-level error type.
///
/// Chain-name lookup and provider detection never produce one of these; only
/// typed provider calls, configuration, and file access can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// The provider rejected a request.
    #[error("provider: {0}")]
    Rpc(#[from] ProviderRpcError),

    /// A value could not be converted to or from JSON.
    #[error("json: {context}: {source}")]
    Json {
        /// What was being encoded or decoded.
        context: String,
        /// Underlying `serde_json` failure.
        #[source]
        source: serde_json::Error,
    },

    /// An EIP-712 document is structurally unusable.
    #[error("typed data: {0}")]
    TypedData(String),

    /// Configuration file could not be resolved, read, or parsed.
    #[error("config: {message}")]
    Config {
        /// Human-readable description.
        message: String,
        /// Underlying cause, if any.
        #[source]
        source: Option<BoxError>,
    },

    /// Filesystem access failed.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Configuration error without an underlying cause.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Configuration error wrapping an underlying cause.
    pub fn config_with(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// JSON encode/decode error annotated with what was being processed.
    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }
}
