//! Chain identifiers and display names.
//!
//! - [`id`] — [`ChainId`], the set of known chain identifiers.
//! - [`registry`] — the static display-name table and [`chain_name`].
//! - [`names`] — [`ChainNames`], the registry layered with extra names.

mod id;
mod names;
mod registry;

pub use self::id::*;
pub use self::names::*;
pub use self::registry::*;
