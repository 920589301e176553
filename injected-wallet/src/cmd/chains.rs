//! `injected-wallet chains` command — list the built-in chains.

use injected_wallet::chain::known_chains;
use injected_wallet::error::Error;

/// Execute the `chains` command.
///
/// # Errors
///
/// Never fails; the signature matches the other commands.
#[allow(clippy::print_stdout, clippy::unnecessary_wraps)]
pub fn run() -> Result<(), Error> {
    for (chain, name) in known_chains() {
        println!("{:<6} {:>4}  {name}", chain.as_hex(), chain.as_u64());
    }
    Ok(())
}
