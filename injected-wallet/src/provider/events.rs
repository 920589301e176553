//! Provider events and listener registration types.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::{HexString, ProviderConnectInfo, ProviderMessage, ProviderRpcError};

/// Name of a provider event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventName {
    /// `accountsChanged`
    AccountsChanged,
    /// `chainChanged`
    ChainChanged,
    /// `message`
    Message,
    /// `connect`
    Connect,
    /// `disconnect`
    Disconnect,
    /// Any other event name a provider may emit.
    Other(String),
}

impl EventName {
    /// The wire name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::AccountsChanged => "accountsChanged",
            Self::ChainChanged => "chainChanged",
            Self::Message => "message",
            Self::Connect => "connect",
            Self::Disconnect => "disconnect",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for EventName {
    fn from(name: &str) -> Self {
        match name {
            "accountsChanged" => Self::AccountsChanged,
            "chainChanged" => Self::ChainChanged,
            "message" => Self::Message,
            "connect" => Self::Connect,
            "disconnect" => Self::Disconnect,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An event together with its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderEvent {
    /// The exposed account list changed; empty when the wallet is locked.
    AccountsChanged(Vec<String>),
    /// The connected chain changed.
    ChainChanged(HexString),
    /// A message, e.g. a subscription notification.
    Message(ProviderMessage),
    /// The provider became able to serve requests.
    Connect(ProviderConnectInfo),
    /// The provider lost connection to all chains.
    Disconnect(ProviderRpcError),
    /// Event outside the standard set, with its raw arguments.
    Other {
        /// Event name.
        name: String,
        /// Listener arguments.
        args: Vec<Value>,
    },
}

impl ProviderEvent {
    /// The name listeners subscribe to for this event.
    #[must_use]
    pub fn name(&self) -> EventName {
        match self {
            Self::AccountsChanged(_) => EventName::AccountsChanged,
            Self::ChainChanged(_) => EventName::ChainChanged,
            Self::Message(_) => EventName::Message,
            Self::Connect(_) => EventName::Connect,
            Self::Disconnect(_) => EventName::Disconnect,
            Self::Other { name, .. } => EventName::from(name.as_str()),
        }
    }
}

/// Callback invoked with each matching event.
pub type Listener = Arc<dyn Fn(&ProviderEvent) + Send + Sync>;

/// Handle returned by [`on`](super::Eip1193Provider::on), used to remove the
/// listener again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Wraps a provider-assigned id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}
