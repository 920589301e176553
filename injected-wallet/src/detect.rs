//! Provider detection in the host's global scope.
//!
//! Wallet extensions inject their provider as `window.ethereum`. The host
//! owns that slot and may fill, replace, or empty it at any time, so nothing
//! here caches what it finds: every call re-reads the scope.

use std::sync::{PoisonError, RwLock, RwLockWriteGuard};

use serde_json::Value;

use crate::provider::ProviderHandle;

/// A global scope holding the injected `ethereum` slot.
pub trait GlobalScope {
    /// Current contents of the `ethereum` slot.
    fn ethereum(&self) -> Option<ProviderHandle>;
}

impl GlobalScope for Option<ProviderHandle> {
    fn ethereum(&self) -> Option<ProviderHandle> {
        self.clone()
    }
}

/// The single detection rule shared by [`is_provider_installed`] and
/// [`get_provider`]: the marker must be exactly the boolean `true`.
fn detect<S: GlobalScope + ?Sized>(scope: &S) -> Option<ProviderHandle> {
    scope
        .ethereum()
        .filter(|provider| provider.marker() == Some(Value::Bool(true)))
}

/// Whether `scope` holds a provider whose `isMetaMask` marker is strictly
/// `true`.
///
/// A missing provider, a missing marker, `false`, and truthy non-boolean
/// values such as `"true"` or `1` all count as not installed.
#[must_use]
pub fn is_provider_installed<S: GlobalScope + ?Sized>(scope: &S) -> bool {
    detect(scope).is_some()
}

/// The provider in `scope` when [`is_provider_installed`] holds, otherwise
/// `None`.
#[must_use]
pub fn get_provider<S: GlobalScope + ?Sized>(scope: &S) -> Option<ProviderHandle> {
    detect(scope)
}

/// In-process global scope with an injectable `ethereum` slot.
#[derive(Default)]
pub struct Window {
    ethereum: RwLock<Option<ProviderHandle>>,
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("ethereum", &self.ethereum().is_some())
            .finish()
    }
}

impl Window {
    /// Creates a scope with an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ethereum: RwLock::new(None),
        }
    }

    /// Places `provider` in the slot, returning what was there before.
    pub fn inject(&self, provider: ProviderHandle) -> Option<ProviderHandle> {
        tracing::debug!(marker = ?provider.marker(), "provider injected");
        self.slot().replace(provider)
    }

    /// Empties the slot, returning what was there.
    pub fn clear(&self) -> Option<ProviderHandle> {
        let previous = self.slot().take();
        if previous.is_some() {
            tracing::debug!("provider removed");
        }
        previous
    }

    fn slot(&self) -> RwLockWriteGuard<'_, Option<ProviderHandle>> {
        self.ethereum.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl GlobalScope for Window {
    fn ethereum(&self) -> Option<ProviderHandle> {
        self.ethereum
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

static WINDOW: Window = Window::new();

/// The process-wide scope.
#[must_use]
pub fn window() -> &'static Window {
    &WINDOW
}

/// [`is_provider_installed`] against [`window()`].
#[must_use]
pub fn is_metamask_installed() -> bool {
    is_provider_installed(window())
}

/// [`get_provider`] against [`window()`].
#[must_use]
pub fn metamask_provider() -> Option<ProviderHandle> {
    get_provider(window())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::memory::MemoryProvider;

    fn with_marker(marker: Option<Value>) -> ProviderHandle {
        Arc::new(MemoryProvider::new().with_marker(marker))
    }

    #[test]
    fn empty_scope() {
        let scope = Window::new();
        assert!(!is_provider_installed(&scope));
        assert!(get_provider(&scope).is_none());
    }

    #[test]
    fn strict_true_marker() {
        let provider = with_marker(Some(json!(true)));
        let scope = Some(Arc::clone(&provider));
        assert!(is_provider_installed(&scope));
        let found = get_provider(&scope).unwrap();
        assert!(Arc::ptr_eq(&found, &provider));
    }

    #[test]
    fn non_true_markers_are_rejected() {
        for marker in [
            None,
            Some(json!(false)),
            Some(json!("true")),
            Some(json!(1)),
            Some(json!({})),
            Some(json!([true])),
            Some(Value::Null),
        ] {
            let scope = Some(with_marker(marker.clone()));
            assert!(!is_provider_installed(&scope), "{marker:?}");
            assert!(get_provider(&scope).is_none(), "{marker:?}");
        }
    }

    #[test]
    fn window_reflects_current_slot() {
        let scope = Window::new();
        let provider = with_marker(Some(json!(true)));

        assert!(scope.inject(Arc::clone(&provider)).is_none());
        assert!(is_provider_installed(&scope));

        let replaced = scope.inject(with_marker(Some(json!("true"))));
        assert!(replaced.is_some_and(|old| Arc::ptr_eq(&old, &provider)));
        assert!(!is_provider_installed(&scope));
        assert!(get_provider(&scope).is_none());

        assert!(scope.clear().is_some());
        assert!(scope.clear().is_none());
        assert!(!is_provider_installed(&scope));
    }

    #[test]
    fn repeated_queries_agree() {
        let provider = with_marker(Some(json!(true)));
        let scope = Some(Arc::clone(&provider));
        for _ in 0..3 {
            assert!(get_provider(&scope).is_some_and(|p| Arc::ptr_eq(&p, &provider)));
        }
    }

    #[test]
    fn debug_shows_presence_only() {
        let scope = Window::new();
        assert_eq!(format!("{scope:?}"), "Window { ethereum: false }");
    }
}
