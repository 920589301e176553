//! `injected-wallet request` command — render an EIP-1193 request argument.

use injected_wallet::error::Error;
use injected_wallet::provider::{MethodCall, RequestArguments};
use serde::de::Error as _;
use serde_json::Value;

/// Builds the request argument for `method` with optional JSON `params`.
///
/// EIP-1193 params are positional or named, so only arrays and objects pass.
fn build(method: &str, params: Option<&str>) -> Result<RequestArguments, Error> {
    let mut args = RequestArguments::new(method);
    if let Some(raw) = params {
        let value: Value = serde_json::from_str(raw).map_err(|e| Error::json("params", e))?;
        if !(value.is_array() || value.is_object()) {
            let e = serde_json::Error::custom(format!("expected an array or object, got {value}"));
            return Err(Error::json("params", e));
        }
        args = args.with_params(value);
    }
    Ok(args)
}

/// Execute the `request` command.
///
/// # Errors
///
/// Returns an error if `params` is not a JSON array or object.
#[allow(clippy::print_stdout)]
pub fn run(method: &str, params: Option<&str>) -> Result<(), Error> {
    if !MethodCall::is_typed(method) {
        tracing::warn!(method, "method has no typed helper, result shape is unchecked");
    }
    let args = build(method, params)?;
    let rendered = serde_json::to_string_pretty(&args).map_err(|e| Error::json("request", e))?;
    println!("{rendered}");
    Ok(())
}
