//! Typed request helpers layered over [`Eip1193Provider::request`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::json;

use super::{Eip1193Provider, HexString, RequestArguments, TransactionParams};
use crate::eip712::TypedData;
use crate::error::Error;

/// A request with a known method and result shape.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodCall {
    /// `eth_chainId` → hex chain id.
    ChainId,
    /// `eth_accounts` → authorized accounts.
    Accounts,
    /// `eth_requestAccounts` → accounts after asking the user.
    RequestAccounts,
    /// `eth_sendTransaction` → transaction hash.
    SendTransaction(TransactionParams),
    /// `personal_sign` → signature.
    PersonalSign {
        /// Hex-encoded or plain-text message.
        message: String,
        /// Signing account.
        address: HexString,
    },
    /// `personal_ecRecover` → signer address.
    EcRecover {
        /// Message that was signed.
        message: String,
        /// Signature to recover from.
        signature: HexString,
    },
    /// `eth_signTypedData_v4` → signature.
    SignTypedDataV4 {
        /// Signing account.
        address: HexString,
        /// Document to sign.
        typed_data: Box<TypedData>,
    },
}

impl MethodCall {
    /// Every method with a typed helper.
    pub const METHODS: [&'static str; 7] = [
        "eth_chainId",
        "eth_accounts",
        "eth_requestAccounts",
        "eth_sendTransaction",
        "personal_sign",
        "personal_ecRecover",
        "eth_signTypedData_v4",
    ];

    /// JSON-RPC method name.
    #[must_use]
    pub const fn method(&self) -> &'static str {
        match self {
            Self::ChainId => Self::METHODS[0],
            Self::Accounts => Self::METHODS[1],
            Self::RequestAccounts => Self::METHODS[2],
            Self::SendTransaction(_) => Self::METHODS[3],
            Self::PersonalSign { .. } => Self::METHODS[4],
            Self::EcRecover { .. } => Self::METHODS[5],
            Self::SignTypedDataV4 { .. } => Self::METHODS[6],
        }
    }

    /// Whether `method` has a typed helper.
    #[must_use]
    pub fn is_typed(method: &str) -> bool {
        Self::METHODS.contains(&method)
    }

    /// Builds the `request` argument.
    ///
    /// Typed data is passed as a JSON string, the form `MetaMask` expects for
    /// `eth_signTypedData_v4`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if a parameter cannot be serialised.
    pub fn into_request(self) -> Result<RequestArguments, Error> {
        let method = self.method();
        let params = match self {
            Self::ChainId | Self::Accounts | Self::RequestAccounts => None,
            Self::SendTransaction(tx) => {
                let tx = serde_json::to_value(tx).map_err(|e| Error::json(method, e))?;
                Some(json!([tx]))
            }
            Self::PersonalSign { message, address } => Some(json!([message, address])),
            Self::EcRecover { message, signature } => Some(json!([message, signature])),
            Self::SignTypedDataV4 {
                address,
                typed_data,
            } => {
                let encoded =
                    serde_json::to_string(&typed_data).map_err(|e| Error::json(method, e))?;
                Some(json!([address, encoded]))
            }
        };
        Ok(RequestArguments {
            method: method.to_owned(),
            params,
        })
    }
}

/// Sends `call` and decodes the result as `T`.
async fn dispatch<P, T>(provider: &P, call: MethodCall) -> Result<T, Error>
where
    P: Eip1193Provider + ?Sized,
    T: DeserializeOwned,
{
    let method = call.method();
    let value = provider.request(call.into_request()?).await?;
    serde_json::from_value(value).map_err(|e| Error::json(format!("{method} result"), e))
}

/// Typed wrappers for the common provider methods.
///
/// Implemented for every [`Eip1193Provider`], including `dyn` handles.
#[async_trait]
pub trait ProviderExt: Eip1193Provider {
    /// `eth_chainId`.
    ///
    /// # Errors
    ///
    /// Provider rejection or an unexpected result shape.
    async fn chain_id(&self) -> Result<HexString, Error> {
        dispatch(self, MethodCall::ChainId).await
    }

    /// `eth_accounts`.
    ///
    /// # Errors
    ///
    /// Provider rejection or an unexpected result shape.
    async fn accounts(&self) -> Result<Vec<String>, Error> {
        dispatch(self, MethodCall::Accounts).await
    }

    /// `eth_requestAccounts`.
    ///
    /// # Errors
    ///
    /// Provider rejection (typically `4001`) or an unexpected result shape.
    async fn request_accounts(&self) -> Result<Vec<String>, Error> {
        dispatch(self, MethodCall::RequestAccounts).await
    }

    /// `eth_sendTransaction`, returning the transaction hash.
    ///
    /// # Errors
    ///
    /// Provider rejection or an unexpected result shape.
    async fn send_transaction(&self, tx: TransactionParams) -> Result<HexString, Error> {
        dispatch(self, MethodCall::SendTransaction(tx)).await
    }

    /// `personal_sign`.
    ///
    /// # Errors
    ///
    /// Provider rejection or an unexpected result shape.
    async fn personal_sign(&self, message: String, address: HexString) -> Result<HexString, Error> {
        dispatch(self, MethodCall::PersonalSign { message, address }).await
    }

    /// `personal_ecRecover`, returning the signer address.
    ///
    /// # Errors
    ///
    /// Provider rejection or an unexpected result shape.
    async fn ec_recover(&self, message: String, signature: HexString) -> Result<HexString, Error> {
        dispatch(self, MethodCall::EcRecover { message, signature }).await
    }

    /// `eth_signTypedData_v4`.
    ///
    /// # Errors
    ///
    /// Provider rejection, an unserialisable document, or an unexpected
    /// result shape.
    async fn sign_typed_data_v4(
        &self,
        address: HexString,
        typed_data: TypedData,
    ) -> Result<HexString, Error> {
        let call = MethodCall::SignTypedDataV4 {
            address,
            typed_data: Box::new(typed_data),
        };
        dispatch(self, call).await
    }
}

impl<P: Eip1193Provider + ?Sized> ProviderExt for P {}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::{Value, json};

    use super::*;
    use crate::memory::MemoryProvider;
    use crate::provider::{ProviderHandle, ProviderRpcError};

    const ALICE: &str = "0x4e1b8e2a2a8f6b2b9f2d6a3e1c3d5b7a9c0e2f40";

    fn typed_data() -> TypedData {
        serde_json::from_value(json!({
            "types": { "Ping": [{ "name": "nonce", "type": "uint256" }] },
            "domain": {
                "name": "Ping",
                "chainId": 5,
                "version": "1",
                "verifyingContract": "0x0000000000000000000000000000000000000001"
            },
            "primaryType": "Ping",
            "message": { "nonce": 1 }
        }))
        .unwrap()
    }

    #[test]
    fn parameterless_calls_have_no_params() {
        for call in [
            MethodCall::ChainId,
            MethodCall::Accounts,
            MethodCall::RequestAccounts,
        ] {
            let args = call.into_request().unwrap();
            assert!(MethodCall::is_typed(&args.method));
            assert_eq!(args.params, None);
        }
        assert!(!MethodCall::is_typed("eth_getBalance"));
    }

    #[test]
    fn send_transaction_wraps_params_in_array() {
        let args = MethodCall::SendTransaction(TransactionParams {
            from: ALICE.into(),
            value: Some("0x1".into()),
            ..TransactionParams::default()
        })
        .into_request()
        .unwrap();
        assert_eq!(args.method, "eth_sendTransaction");
        assert_eq!(args.params, Some(json!([{ "from": ALICE, "value": "0x1" }])));
    }

    #[test]
    fn typed_data_travels_as_json_string() {
        let args = MethodCall::SignTypedDataV4 {
            address: ALICE.into(),
            typed_data: Box::new(typed_data()),
        }
        .into_request()
        .unwrap();
        let params = args.params.unwrap();
        assert_eq!(params[0], ALICE);
        let encoded = params[1].as_str().unwrap();
        let decoded: TypedData = serde_json::from_str(encoded).unwrap();
        assert_eq!(decoded, typed_data());
    }

    #[tokio::test]
    async fn helpers_decode_results() {
        let provider = MemoryProvider::new()
            .with_chain_id("0x5")
            .with_accounts([ALICE]);

        assert_eq!(provider.chain_id().await.unwrap(), "0x5");
        assert!(provider.accounts().await.unwrap().is_empty());
        assert_eq!(provider.request_accounts().await.unwrap(), [ALICE]);
        assert_eq!(provider.accounts().await.unwrap(), [ALICE]);
    }

    #[tokio::test]
    async fn helpers_send_expected_requests() {
        let provider = MemoryProvider::new()
            .with_response("personal_sign", Ok(json!("0xsig")))
            .with_response("personal_ecRecover", Ok(json!(ALICE)))
            .with_response("eth_signTypedData_v4", Ok(json!("0xtyped")))
            .with_response("eth_sendTransaction", Ok(json!("0xhash")));

        let sig = provider
            .personal_sign("0x68656c6c6f".into(), ALICE.into())
            .await
            .unwrap();
        assert_eq!(sig, "0xsig");
        let signer = provider
            .ec_recover("0x68656c6c6f".into(), sig)
            .await
            .unwrap();
        assert_eq!(signer, ALICE);
        let typed = provider
            .sign_typed_data_v4(ALICE.into(), typed_data())
            .await
            .unwrap();
        assert_eq!(typed, "0xtyped");
        let hash = provider
            .send_transaction(TransactionParams {
                from: ALICE.into(),
                ..TransactionParams::default()
            })
            .await
            .unwrap();
        assert_eq!(hash, "0xhash");

        let methods: Vec<String> = provider
            .requests()
            .into_iter()
            .map(|args| args.method)
            .collect();
        assert_eq!(
            methods,
            [
                "personal_sign",
                "personal_ecRecover",
                "eth_signTypedData_v4",
                "eth_sendTransaction"
            ]
        );
        assert_eq!(
            provider.requests()[0].params,
            Some(json!(["0x68656c6c6f", ALICE]))
        );
    }

    #[tokio::test]
    async fn provider_errors_pass_through() {
        let provider = MemoryProvider::new().rejecting_authorization();
        let err = provider.request_accounts().await.unwrap_err();
        let Error::Rpc(rpc) = err else {
            panic!("expected provider error, got {err:?}");
        };
        assert_eq!(rpc.code, ProviderRpcError::USER_REJECTED);
    }

    #[tokio::test]
    async fn unexpected_result_shape_is_a_json_error() {
        let provider = MemoryProvider::new().with_response("eth_sendTransaction", Ok(json!(42)));
        let err = provider
            .send_transaction(TransactionParams::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Json { .. }), "{err:?}");
    }

    #[tokio::test]
    async fn helpers_work_through_dyn_handles() {
        let handle: ProviderHandle = Arc::new(MemoryProvider::new().with_chain_id("0x2a"));
        assert_eq!(handle.chain_id().await.unwrap(), "0x2a");
        let raw: Value = handle
            .request(RequestArguments::new("eth_chainId"))
            .await
            .unwrap();
        assert_eq!(raw, json!("0x2a"));
    }
}
