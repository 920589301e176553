//! Static chain-id to display-name table.
//!
//! The table is built once on first use and never written to afterwards, so
//! any number of threads may read it without coordination.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::ChainId;

static REGISTRY: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    ChainId::ALL
        .into_iter()
        .map(|chain| (chain.as_hex(), chain.name()))
        .collect()
});

impl ChainId {
    /// Human-readable network name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mainnet => "Ethereum Mainnet",
            Self::Ropsten => "Ropsten Test Network",
            Self::Rinkeby => "Rinkeby Test Network",
            Self::Goerli => "Goerli Test Network",
            Self::Kovan => "Kovan Test Network",
        }
    }
}

/// Returns the registered display name for `chain_id`, if any.
///
/// Matching is case-insensitive.
#[must_use]
pub fn lookup(chain_id: &str) -> Option<&'static str> {
    REGISTRY.get(chain_id.to_lowercase().as_str()).copied()
}

/// Returns the display name for a hex chain identifier.
///
/// The identifier is lowercased for matching. When it is not a known chain
/// the input is returned exactly as given, original casing included.
#[must_use]
pub fn chain_name(chain_id: &str) -> &str {
    lookup(chain_id).unwrap_or(chain_id)
}

/// Iterates the registry as `(chain, name)` pairs in numeric order.
pub fn known_chains() -> impl Iterator<Item = (ChainId, &'static str)> {
    ChainId::ALL.into_iter().map(|chain| (chain, chain.name()))
}
