//! Provider-originated RPC errors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error returned by a provider for a failed request or carried by the
/// `disconnect` event.
///
/// This is a pass-through type: the crate builds one only when a test double
/// or host needs to report a failure in EIP-1193 terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{message} (code {code})")]
pub struct ProviderRpcError {
    /// Numeric error code, EIP-1193 or JSON-RPC.
    pub code: i64,
    /// Human-readable description.
    pub message: String,
    /// Provider-specific extra data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ProviderRpcError {
    /// The user rejected the request.
    pub const USER_REJECTED: i64 = 4001;
    /// The requested method and/or account has not been authorized by the user.
    pub const UNAUTHORIZED: i64 = 4100;
    /// The provider does not support the requested method.
    pub const UNSUPPORTED_METHOD: i64 = 4200;
    /// The provider is disconnected from all chains.
    pub const DISCONNECTED: i64 = 4900;
    /// The provider is not connected to the requested chain.
    pub const CHAIN_DISCONNECTED: i64 = 4901;
    /// JSON-RPC invalid method parameters.
    pub const INVALID_PARAMS: i64 = -32602;
    /// JSON-RPC internal error.
    pub const INTERNAL_ERROR: i64 = -32603;

    /// Creates an error without extra data.
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Attaches provider-specific data.
    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// `4001` user rejection.
    #[must_use]
    pub fn user_rejected() -> Self {
        Self::new(Self::USER_REJECTED, "User rejected the request.")
    }

    /// `4100` unauthorized.
    #[must_use]
    pub fn unauthorized() -> Self {
        Self::new(
            Self::UNAUTHORIZED,
            "The requested method and/or account has not been authorized by the user.",
        )
    }

    /// `4200` for `method`.
    #[must_use]
    pub fn unsupported_method(method: &str) -> Self {
        Self::new(
            Self::UNSUPPORTED_METHOD,
            format!("The Provider does not support the requested method: {method}"),
        )
    }

    /// `4900` disconnected.
    #[must_use]
    pub fn disconnected() -> Self {
        Self::new(
            Self::DISCONNECTED,
            "The Provider is disconnected from all chains.",
        )
    }

    /// Whether the user declined the request.
    #[must_use]
    pub const fn is_user_rejection(&self) -> bool {
        self.code == Self::USER_REJECTED
    }
}
