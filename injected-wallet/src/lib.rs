//! Typed surface for browser-injected Ethereum wallet providers.
//!
//! Wallet extensions such as `MetaMask` inject an [EIP-1193] provider object
//! into the page's global scope (`window.ethereum`). This crate describes that
//! object as a Rust contract and ships the few pieces of behaviour that sit
//! around it:
//!
//! - [`chain`] — known chain identifiers and the [`chain_name`] lookup.
//! - [`provider`] — the [`Eip1193Provider`] contract, request/response shapes,
//!   events, and the [`ProviderExt`] typed method helpers.
//! - [`eip712`] — [EIP-712] typed structured data shapes.
//! - [`detect`] — provider detection in a [`GlobalScope`].
//! - [`memory`] — [`MemoryProvider`], an in-process implementation of the
//!   contract for tests and host-side wiring.
//! - [`config`] — TOML configuration for the command-line front-end.
//!
//! ```
//! use injected_wallet::chain_name;
//!
//! assert_eq!(chain_name("0X1"), "Ethereum Mainnet");
//! assert_eq!(chain_name("0x89"), "0x89");
//! ```
//!
//! [EIP-1193]: https://eips.ethereum.org/EIPS/eip-1193
//! [EIP-712]: https://eips.ethereum.org/EIPS/eip-712

pub mod chain;
pub mod config;
pub mod detect;
pub mod eip712;
pub mod error;
pub mod memory;
pub mod provider;

pub use chain::{ChainId, ChainNames, chain_name};
pub use detect::{GlobalScope, Window, get_provider, is_provider_installed, window};
pub use error::Error;
pub use memory::MemoryProvider;
pub use provider::{Eip1193Provider, ProviderExt, ProviderHandle, ProviderRpcError};
