//! `injected-wallet name` command — resolve a chain display name.

use injected_wallet::chain::ChainNames;
use injected_wallet::error::Error;

/// Display name for `chain_id`, or `chain_id` itself when nothing matches.
fn resolve<'a>(names: &'a ChainNames, chain_id: &'a str) -> &'a str {
    let name = names.get(chain_id);
    if name == chain_id {
        tracing::debug!(chain_id, "no display name registered");
    }
    name
}

/// Execute the `name` command.
///
/// Unknown ids print unchanged.
///
/// # Errors
///
/// Never fails; the signature matches the other commands.
#[allow(clippy::print_stdout, clippy::unnecessary_wraps)]
pub fn run(chain_id: &str, names: &ChainNames) -> Result<(), Error> {
    println!("{}", resolve(names, chain_id));
    Ok(())
}
