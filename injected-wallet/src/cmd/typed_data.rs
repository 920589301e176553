//! `injected-wallet typed-data` command — summarise an EIP-712 document.

use std::fs;
use std::path::Path;

use injected_wallet::chain::ChainNames;
use injected_wallet::eip712::TypedData;
use injected_wallet::error::Error;

/// Reads and parses a typed-data document.
fn load(file: &Path) -> Result<TypedData, Error> {
    let content = fs::read_to_string(file)?;
    serde_json::from_str(&content).map_err(|e| Error::json(file.display().to_string(), e))
}

/// Renders the summary lines for `typed_data`.
fn summarize(typed_data: &TypedData, names: &ChainNames) -> Result<Vec<String>, Error> {
    let fields = typed_data.primary_fields().ok_or_else(|| {
        Error::TypedData(format!(
            "primary type '{}' is not defined in types",
            typed_data.primary_type
        ))
    })?;

    let domain = &typed_data.domain;
    let chain_hex = domain.chain_hex();
    let mut lines = vec![
        format!("primary type: {}", typed_data.primary_type),
        format!("domain:       {} v{}", domain.name, domain.version),
        format!("chain:        {} ({chain_hex})", names.get(&chain_hex)),
        format!("contract:     {}", domain.verifying_contract),
        "fields:".to_owned(),
    ];
    lines.extend(fields.iter().map(|field| format!("  {} {}", field.kind, field.name)));
    Ok(lines)
}

/// Execute the `typed-data` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a typed-data
/// document, or names a primary type it does not define.
#[allow(clippy::print_stdout)]
pub fn run(file: &Path, names: &ChainNames) -> Result<(), Error> {
    let typed_data = load(file)?;
    for line in summarize(&typed_data, names)? {
        println!("{line}");
    }
    Ok(())
}
