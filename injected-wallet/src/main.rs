//! Injected wallet command-line front-end.
//!
//! Inspects the static chain registry and the EIP-1193 / EIP-712 shapes
//! described by the `injected_wallet` library.
//!
//! ```sh
//! injected-wallet init                 # Generate default config.toml
//! injected-wallet chains               # List built-in chains
//! injected-wallet name 0x2a            # Resolve a chain name
//! injected-wallet typed-data mail.json # Summarise an EIP-712 document
//! injected-wallet request eth_chainId  # Render a request argument
//! ```

mod cmd;
#[cfg(feature = "telemetry")]
mod telemetry;

use clap::Parser;
use cmd::{Cli, Commands};
use dotenvy::dotenv;
use injected_wallet::config::{Config, load_config};
use injected_wallet::error::Error;

#[allow(clippy::print_stderr)]
fn fail(e: &Error) -> ! {
    eprintln!("Error: {e}");
    std::process::exit(1);
}

fn main() {
    // Load .env variables before clap reads `CONFIG` / `LOG_LEVEL`
    dotenv().ok();

    let cli = Cli::parse();

    // Loaded ahead of logging so the file's `log_level` can apply
    let config = match cli.command.config_path().map(load_config).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => fail(&e),
    };

    #[cfg(feature = "telemetry")]
    {
        let mut telemetry = telemetry::Telemetry::new();
        if let Some(level) = config.log_level(cli.log_level.as_deref()) {
            telemetry = telemetry.with_log_level(level);
        }
        telemetry.register();
    }

    if let Err(e) = run(cli.command, &config) {
        fail(&e);
    }
}

fn run(command: Commands, config: &Config) -> Result<(), Error> {
    match command {
        Commands::Init { output, force } => cmd::init::run(&output, force),
        Commands::Chains => cmd::chains::run(),
        Commands::Name { chain_id, .. } => cmd::name::run(&chain_id, &config.chain_names()),
        Commands::TypedData { file, .. } => cmd::typed_data::run(&file, &config.chain_names()),
        Commands::Request { method, params } => cmd::request::run(&method, params.as_deref()),
    }
}
