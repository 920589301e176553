//! [EIP-712] typed structured data shapes.
//!
//! These types describe the argument of `eth_signTypedData_v4` as wallets
//! expect it. They are carried through to the provider untouched; nothing
//! here encodes, hashes, or signs them.
//!
//! [EIP-712]: https://eips.ethereum.org/EIPS/eip-712

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A complete typed-data document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedData {
    /// Struct definitions keyed by type name.
    pub types: Types,
    /// Signing domain.
    pub domain: Domain,
    /// Name of the struct in [`types`](Self::types) that `message` instantiates.
    pub primary_type: String,
    /// The message itself.
    pub message: Object,
}

impl TypedData {
    /// Field list of the primary type, if it is defined in `types`.
    #[must_use]
    pub fn primary_fields(&self) -> Option<&[Parameter]> {
        self.types.get(&self.primary_type).map(Vec::as_slice)
    }
}

/// The `EIP712Domain` separator values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    /// Dapp or protocol name.
    pub name: String,
    /// Numeric EIP-155 chain id.
    pub chain_id: u64,
    /// Current major version of the signing domain.
    pub version: String,
    /// Address of the contract that will verify the signature.
    pub verifying_contract: String,
}

impl Domain {
    /// The domain's chain id in wallet hex form (`1` becomes `"0x1"`).
    #[must_use]
    pub fn chain_hex(&self) -> String {
        format!("{:#x}", self.chain_id)
    }
}

/// Struct definitions keyed by type name.
pub type Types = BTreeMap<String, Vec<Parameter>>;

/// One field of a struct definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Field name.
    pub name: String,
    /// Solidity type name, e.g. `address`, `uint256`, or another struct.
    #[serde(rename = "type")]
    pub kind: String,
}

/// A message object: field name to value.
pub type Object = BTreeMap<String, ObjectValue>;

/// A message field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObjectValue {
    /// String value; addresses, bytes, and large integers travel as strings.
    String(String),
    /// JSON number.
    Number(serde_json::Number),
    /// Nested struct.
    Object(Object),
}

impl From<&str> for ObjectValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for ObjectValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<u64> for ObjectValue {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<Object> for ObjectValue {
    fn from(value: Object) -> Self {
        Self::Object(value)
    }
}
