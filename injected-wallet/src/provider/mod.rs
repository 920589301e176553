//! The EIP-1193 provider contract.
//!
//! [`Eip1193Provider`] is the capability surface a wallet injects into the
//! page. This crate only declares and consumes it; implementations live with
//! the host (a browser binding) or in [`memory`](crate::memory) for tests.
//!
//! - [`types`] — request arguments, transaction parameters, messages.
//! - [`events`] — event names, payloads, and listener handles.
//! - [`error`] — [`ProviderRpcError`].
//! - [`ext`] — [`ProviderExt`] typed method helpers and [`MethodCall`].

mod error;
mod events;
mod ext;
mod types;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

pub use self::error::*;
pub use self::events::*;
pub use self::ext::*;
pub use self::types::*;

/// Property a provider sets to `true` to identify itself as `MetaMask`.
pub const MARKER_PROPERTY: &str = "isMetaMask";

/// Shared reference to a provider owned by the host environment.
pub type ProviderHandle = Arc<dyn Eip1193Provider>;

/// An EIP-1193 provider.
#[async_trait]
pub trait Eip1193Provider: Send + Sync {
    /// Raw value of the [`MARKER_PROPERTY`] property, `None` when absent.
    ///
    /// Returned untyped because injected objects may set it to anything;
    /// detection only accepts the boolean `true`.
    fn marker(&self) -> Option<Value>;

    /// Whether the provider can currently serve requests to a chain.
    fn is_connected(&self) -> bool;

    /// Submits an RPC request.
    ///
    /// # Errors
    ///
    /// Returns the provider's [`ProviderRpcError`] when it rejects or fails
    /// the request.
    async fn request(&self, args: RequestArguments) -> Result<Value, ProviderRpcError>;

    /// Registers `listener` for `event`.
    fn on(&self, event: EventName, listener: Listener) -> ListenerId;

    /// Removes a listener previously registered for `event`.
    ///
    /// Returns whether a listener was removed.
    fn remove_listener(&self, event: &EventName, id: ListenerId) -> bool;
}
