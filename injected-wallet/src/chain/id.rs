//! Known EIP-155 chain identifiers in their hexadecimal wallet form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A chain identifier known to the registry.
///
/// Wallets report chain ids as `0x`-prefixed hex strings (`eth_chainId`,
/// `chainChanged`). Each variant carries that string and its numeric
/// EIP-155 value. Serialised as the lowercase hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ChainId {
    /// Ethereum mainnet, `0x1`.
    Mainnet,
    /// Ropsten proof-of-work testnet, `0x3`.
    Ropsten,
    /// Rinkeby proof-of-authority testnet, `0x4`.
    Rinkeby,
    /// Goerli testnet, `0x5`.
    Goerli,
    /// Kovan proof-of-authority testnet, `0x2a`.
    Kovan,
}

impl ChainId {
    /// Every known chain, ordered by numeric id.
    pub const ALL: [Self; 5] = [
        Self::Mainnet,
        Self::Ropsten,
        Self::Rinkeby,
        Self::Goerli,
        Self::Kovan,
    ];

    /// The lowercase `0x`-prefixed hex form.
    #[must_use]
    pub const fn as_hex(self) -> &'static str {
        match self {
            Self::Mainnet => "0x1",
            Self::Ropsten => "0x3",
            Self::Rinkeby => "0x4",
            Self::Goerli => "0x5",
            Self::Kovan => "0x2a",
        }
    }

    /// The numeric EIP-155 chain id.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        match self {
            Self::Mainnet => 1,
            Self::Ropsten => 3,
            Self::Rinkeby => 4,
            Self::Goerli => 5,
            Self::Kovan => 42,
        }
    }

    /// Looks a chain up by numeric id.
    #[must_use]
    pub fn from_u64(id: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|chain| chain.as_u64() == id)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_hex())
    }
}

impl From<ChainId> for &'static str {
    fn from(chain: ChainId) -> Self {
        chain.as_hex()
    }
}

impl From<ChainId> for u64 {
    fn from(chain: ChainId) -> Self {
        chain.as_u64()
    }
}

/// The string is not one of the known chain identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown chain id '{0}'")]
pub struct UnknownChainId(pub String);

impl FromStr for ChainId {
    type Err = UnknownChainId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|chain| chain.as_hex() == normalized)
            .ok_or_else(|| UnknownChainId(s.to_owned()))
    }
}

impl TryFrom<String> for ChainId {
    type Error = UnknownChainId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
