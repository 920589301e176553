//! EIP-1193 request and message shapes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A `0x`-prefixed hex string as returned by wallets.
pub type HexString = String;

/// The single argument of `request`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestArguments {
    /// JSON-RPC method name.
    pub method: String,
    /// Positional array or named object; omitted when the method takes none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl RequestArguments {
    /// A request without parameters.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            params: None,
        }
    }

    /// Sets the parameters.
    #[must_use]
    pub fn with_params(mut self, params: Value) -> Self {
        self.params = Some(params);
        self
    }
}

/// Parameters of `eth_sendTransaction`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionParams {
    /// Sender address.
    pub from: HexString,
    /// Recipient; absent for contract creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<HexString>,
    /// Value in wei.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<HexString>,
    /// Legacy gas price in wei.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<HexString>,
    /// Gas limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<HexString>,
    /// Sender nonce.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<HexString>,
    /// Call data or init code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// Payload of the `message` event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderMessage {
    /// Message kind, e.g. `eth_subscription`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Kind-specific data.
    pub data: Value,
}

impl ProviderMessage {
    /// `type` of subscription notifications.
    pub const ETH_SUBSCRIPTION: &'static str = "eth_subscription";

    /// Wraps a subscription notification.
    #[must_use]
    pub fn subscription(notification: &EthSubscription) -> Self {
        Self {
            kind: Self::ETH_SUBSCRIPTION.to_owned(),
            data: serde_json::json!({
                "subscription": notification.subscription,
                "result": notification.result,
            }),
        }
    }

    /// The subscription notification carried by this message, if it is one.
    #[must_use]
    pub fn as_subscription(&self) -> Option<EthSubscription> {
        if self.kind != Self::ETH_SUBSCRIPTION {
            return None;
        }
        EthSubscription::deserialize(&self.data).ok()
    }
}

/// `data` of an `eth_subscription` message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EthSubscription {
    /// Subscription id returned by `eth_subscribe`.
    pub subscription: String,
    /// Notification payload.
    pub result: Value,
}

/// Payload of the `connect` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConnectInfo {
    /// Hex chain id the provider connected to.
    pub chain_id: HexString,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn request_without_params_omits_field() {
        let args = RequestArguments::new("eth_chainId");
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({ "method": "eth_chainId" })
        );
        let parsed: RequestArguments =
            serde_json::from_value(json!({ "method": "eth_accounts" })).unwrap();
        assert_eq!(parsed.params, None);
    }

    #[test]
    fn request_params_may_be_object() {
        let args = RequestArguments::new("wallet_watchAsset")
            .with_params(json!({ "type": "ERC20", "options": {} }));
        assert_eq!(serde_json::to_value(&args).unwrap()["params"]["type"], "ERC20");
    }

    #[test]
    fn transaction_omits_absent_fields() {
        let tx = TransactionParams {
            from: "0xb60e8dd61c5d32be8058bb8eb970870f07233155".into(),
            to: Some("0xd46e8dd67c5d32be8058bb8eb970870f07244567".into()),
            gas_price: Some("0x9184e72a000".into()),
            ..TransactionParams::default()
        };
        assert_eq!(
            serde_json::to_value(&tx).unwrap(),
            json!({
                "from": "0xb60e8dd61c5d32be8058bb8eb970870f07233155",
                "to": "0xd46e8dd67c5d32be8058bb8eb970870f07244567",
                "gasPrice": "0x9184e72a000"
            })
        );
    }

    #[test]
    fn subscription_messages_are_recognised() {
        let message: ProviderMessage = serde_json::from_value(json!({
            "type": "eth_subscription",
            "data": { "subscription": "0xabc", "result": { "number": "0x10" } }
        }))
        .unwrap();
        let sub = message.as_subscription().unwrap();
        assert_eq!(sub.subscription, "0xabc");
        assert_eq!(sub.result["number"], "0x10");
        assert_eq!(ProviderMessage::subscription(&sub), message);
    }

    #[test]
    fn other_messages_are_not_subscriptions() {
        let message = ProviderMessage {
            kind: "notice".into(),
            data: json!({ "subscription": "0xabc", "result": null }),
        };
        assert!(message.as_subscription().is_none());

        let malformed = ProviderMessage {
            kind: ProviderMessage::ETH_SUBSCRIPTION.into(),
            data: json!("oops"),
        };
        assert!(malformed.as_subscription().is_none());
    }

    #[test]
    fn connect_info_is_camel_case() {
        let info = ProviderConnectInfo {
            chain_id: "0x1".into(),
        };
        assert_eq!(serde_json::to_value(&info).unwrap(), json!({ "chainId": "0x1" }));
    }
}
