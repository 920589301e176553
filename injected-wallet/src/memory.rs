//! In-process [`Eip1193Provider`] implementation.
//!
//! [`MemoryProvider`] answers the account and chain methods from its own
//! state, replays canned responses for anything else, records every request,
//! and dispatches events to registered listeners. It has no transport and
//! signs nothing; it stands in for an injected wallet in tests and in hosts
//! that want to exercise code written against the provider contract.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::provider::{
    Eip1193Provider, EventName, HexString, Listener, ListenerId, ProviderConnectInfo,
    ProviderEvent, ProviderRpcError, RequestArguments,
};

#[derive(Debug)]
struct State {
    connected: bool,
    chain_id: HexString,
    accounts: Vec<String>,
    authorized: bool,
    reject_authorization: bool,
    responses: HashMap<String, Result<Value, ProviderRpcError>>,
    requests: Vec<RequestArguments>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            connected: true,
            chain_id: "0x1".to_owned(),
            accounts: Vec::new(),
            authorized: false,
            reject_authorization: false,
            responses: HashMap::new(),
            requests: Vec::new(),
        }
    }
}

/// In-memory provider.
///
/// Defaults: marker `true`, connected to `0x1`, no accounts.
pub struct MemoryProvider {
    marker: Option<Value>,
    state: Mutex<State>,
    listeners: Mutex<Vec<(EventName, ListenerId, Listener)>>,
    next_listener: AtomicU64,
}

impl Default for MemoryProvider {
    fn default() -> Self {
        Self {
            marker: Some(Value::Bool(true)),
            state: Mutex::default(),
            listeners: Mutex::default(),
            next_listener: AtomicU64::new(1),
        }
    }
}

impl std::fmt::Debug for MemoryProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryProvider")
            .field("marker", &self.marker)
            .field("state", &*self.state())
            .field("listeners", &self.listeners().len())
            .finish_non_exhaustive()
    }
}

impl MemoryProvider {
    /// Creates a provider with default state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the raw `isMetaMask` value; `None` removes the property.
    #[must_use]
    pub fn with_marker(mut self, marker: Option<Value>) -> Self {
        self.marker = marker;
        self
    }

    /// Sets the initial chain id.
    #[must_use]
    pub fn with_chain_id(mut self, chain_id: impl Into<HexString>) -> Self {
        self.state_mut().chain_id = chain_id.into();
        self
    }

    /// Sets the wallet's accounts. They are exposed once authorized.
    #[must_use]
    pub fn with_accounts<I, S>(mut self, accounts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state_mut().accounts = accounts.into_iter().map(Into::into).collect();
        self
    }

    /// Starts with the accounts already authorized.
    #[must_use]
    pub fn authorized(mut self) -> Self {
        self.state_mut().authorized = true;
        self
    }

    /// Makes `eth_requestAccounts` fail with a `4001` user rejection.
    #[must_use]
    pub fn rejecting_authorization(mut self) -> Self {
        self.state_mut().reject_authorization = true;
        self
    }

    /// Starts disconnected.
    #[must_use]
    pub fn disconnected(mut self) -> Self {
        self.state_mut().connected = false;
        self
    }

    /// Registers a canned response for `method`.
    #[must_use]
    pub fn with_response(
        self,
        method: impl Into<String>,
        response: Result<Value, ProviderRpcError>,
    ) -> Self {
        self.respond_with(method, response);
        self
    }

    /// Registers or replaces a canned response for `method`.
    pub fn respond_with(
        &self,
        method: impl Into<String>,
        response: Result<Value, ProviderRpcError>,
    ) {
        self.state().responses.insert(method.into(), response);
    }

    /// Every request received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<RequestArguments> {
        self.state().requests.clone()
    }

    /// Switches chain and emits `chainChanged`.
    pub fn set_chain_id(&self, chain_id: impl Into<HexString>) {
        let chain_id = chain_id.into();
        self.state().chain_id.clone_from(&chain_id);
        self.emit(&ProviderEvent::ChainChanged(chain_id));
    }

    /// Replaces the accounts and emits `accountsChanged` with what is exposed.
    pub fn set_accounts<I, S>(&self, accounts: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let exposed = {
            let mut state = self.state();
            state.accounts = accounts.into_iter().map(Into::into).collect();
            exposed_accounts(&state)
        };
        self.emit(&ProviderEvent::AccountsChanged(exposed));
    }

    /// Marks the provider connected and emits `connect`.
    pub fn connect(&self) {
        let chain_id = {
            let mut state = self.state();
            state.connected = true;
            state.chain_id.clone()
        };
        self.emit(&ProviderEvent::Connect(ProviderConnectInfo { chain_id }));
    }

    /// Marks the provider disconnected and emits `disconnect` with `error`.
    pub fn disconnect(&self, error: ProviderRpcError) {
        self.state().connected = false;
        self.emit(&ProviderEvent::Disconnect(error));
    }

    /// Delivers `event` to every listener registered for its name, in
    /// registration order. Returns how many listeners ran.
    pub fn emit(&self, event: &ProviderEvent) -> usize {
        let name = event.name();
        let matching: Vec<Listener> = self
            .listeners()
            .iter()
            .filter(|(event_name, _, _)| *event_name == name)
            .map(|(_, _, listener)| Listener::clone(listener))
            .collect();
        tracing::debug!(event = %name, listeners = matching.len(), "emitting provider event");
        for listener in &matching {
            listener(event);
        }
        matching.len()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn state_mut(&mut self) -> &mut State {
        self.state.get_mut().unwrap_or_else(PoisonError::into_inner)
    }

    fn listeners(&self) -> MutexGuard<'_, Vec<(EventName, ListenerId, Listener)>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn exposed_accounts(state: &State) -> Vec<String> {
    if state.authorized {
        state.accounts.clone()
    } else {
        Vec::new()
    }
}

#[async_trait]
impl Eip1193Provider for MemoryProvider {
    fn marker(&self) -> Option<Value> {
        self.marker.clone()
    }

    fn is_connected(&self) -> bool {
        self.state().connected
    }

    async fn request(&self, args: RequestArguments) -> Result<Value, ProviderRpcError> {
        tracing::debug!(method = %args.method, "memory provider request");
        let mut state = self.state();
        state.requests.push(args.clone());

        if !state.connected {
            return Err(ProviderRpcError::disconnected());
        }
        if let Some(response) = state.responses.get(&args.method) {
            return response.clone();
        }
        match args.method.as_str() {
            "eth_chainId" => Ok(json!(state.chain_id)),
            "eth_accounts" => Ok(json!(exposed_accounts(&state))),
            "eth_requestAccounts" => {
                if state.reject_authorization {
                    return Err(ProviderRpcError::user_rejected());
                }
                state.authorized = true;
                Ok(json!(state.accounts))
            }
            other => Err(ProviderRpcError::unsupported_method(other)),
        }
    }

    fn on(&self, event: EventName, listener: Listener) -> ListenerId {
        let id = ListenerId::new(self.next_listener.fetch_add(1, Ordering::Relaxed));
        self.listeners().push((event, id, listener));
        id
    }

    fn remove_listener(&self, event: &EventName, id: ListenerId) -> bool {
        let mut listeners = self.listeners();
        let before = listeners.len();
        listeners.retain(|(name, listener_id, _)| !(name == event && *listener_id == id));
        listeners.len() != before
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    type Seen = Arc<Mutex<Vec<ProviderEvent>>>;

    fn recorder(provider: &MemoryProvider, event: EventName) -> (ListenerId, Seen) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let id = provider.on(
            event,
            Arc::new(move |event: &ProviderEvent| sink.lock().unwrap().push(event.clone())),
        );
        (id, seen)
    }

    #[tokio::test]
    async fn unknown_methods_are_unsupported() {
        let provider = MemoryProvider::new();
        let err = provider
            .request(RequestArguments::new("eth_getBalance"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ProviderRpcError::UNSUPPORTED_METHOD);
        assert_eq!(provider.requests().len(), 1);
    }

    #[tokio::test]
    async fn canned_responses_override_builtins() {
        let provider = MemoryProvider::new();
        provider.respond_with("eth_chainId", Ok(json!("0x89")));
        let value = provider
            .request(RequestArguments::new("eth_chainId"))
            .await
            .unwrap();
        assert_eq!(value, json!("0x89"));

        provider.respond_with("eth_chainId", Err(ProviderRpcError::unauthorized()));
        let err = provider
            .request(RequestArguments::new("eth_chainId"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ProviderRpcError::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn disconnected_provider_rejects_requests() {
        let provider = MemoryProvider::new().disconnected();
        assert!(!provider.is_connected());
        let err = provider
            .request(RequestArguments::new("eth_chainId"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ProviderRpcError::DISCONNECTED);

        provider.connect();
        assert!(provider.is_connected());
        assert!(provider.request(RequestArguments::new("eth_chainId")).await.is_ok());
    }

    #[test]
    fn events_reach_only_matching_listeners() {
        let provider = MemoryProvider::new().with_accounts(["0xa"]).authorized();
        let (_, chains) = recorder(&provider, EventName::ChainChanged);
        let (_, accounts) = recorder(&provider, EventName::AccountsChanged);

        provider.set_chain_id("0x5");
        provider.set_accounts(["0xb", "0xc"]);

        assert_eq!(
            *chains.lock().unwrap(),
            [ProviderEvent::ChainChanged("0x5".into())]
        );
        assert_eq!(
            *accounts.lock().unwrap(),
            [ProviderEvent::AccountsChanged(vec!["0xb".into(), "0xc".into()])]
        );
    }

    #[test]
    fn unauthorized_account_changes_expose_nothing() {
        let provider = MemoryProvider::new();
        let (_, accounts) = recorder(&provider, EventName::AccountsChanged);
        provider.set_accounts(["0xb"]);
        assert_eq!(
            *accounts.lock().unwrap(),
            [ProviderEvent::AccountsChanged(Vec::new())]
        );
    }

    #[test]
    fn removed_listeners_stop_receiving() {
        let provider = MemoryProvider::new();
        let (id, seen) = recorder(&provider, EventName::Disconnect);

        provider.disconnect(ProviderRpcError::disconnected());
        assert!(provider.remove_listener(&EventName::Disconnect, id));
        assert!(!provider.remove_listener(&EventName::Disconnect, id));
        provider.connect();
        let event = ProviderEvent::Disconnect(ProviderRpcError::disconnected());
        assert_eq!(provider.emit(&event), 0);

        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn removal_requires_matching_event_name() {
        let provider = MemoryProvider::new();
        let (id, _) = recorder(&provider, EventName::Connect);
        assert!(!provider.remove_listener(&EventName::Disconnect, id));
        assert!(provider.remove_listener(&EventName::Connect, id));
    }

    #[test]
    fn connect_event_carries_chain() {
        let provider = MemoryProvider::new().with_chain_id("0x4").disconnected();
        let (_, seen) = recorder(&provider, EventName::Connect);
        provider.connect();
        assert_eq!(
            *seen.lock().unwrap(),
            [ProviderEvent::Connect(ProviderConnectInfo {
                chain_id: "0x4".into()
            })]
        );
    }

    #[test]
    fn custom_events_dispatch_by_name() {
        let provider = MemoryProvider::new();
        let (_, seen) = recorder(&provider, EventName::from("wallet_custom"));
        let delivered = provider.emit(&ProviderEvent::Other {
            name: "wallet_custom".into(),
            args: vec![json!(1)],
        });
        assert_eq!(delivered, 1);
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn listeners_may_reenter_the_provider() {
        let provider = Arc::new(MemoryProvider::new());
        let inner = Arc::clone(&provider);
        let observed = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&observed);
        provider.on(
            EventName::ChainChanged,
            Arc::new(move |_: &ProviderEvent| {
                *sink.lock().unwrap() = Some(inner.is_connected());
            }),
        );
        provider.set_chain_id("0x3");
        assert_eq!(*observed.lock().unwrap(), Some(true));
    }
}
