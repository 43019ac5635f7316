//! Seal plaintext credential JSON into a vault.
//!
//! ```bash
//! DOMAIN_EXPIRY_PASSPHRASE=... seal-credentials < credentials.json > vault.json
//! ```

use std::io::{Read, Write};
use std::process::ExitCode;

use anyhow::{bail, Context};
use domain_expiry_cli::adapters::parse_credentials_document;
use domain_expiry_cli::logging;
use domain_expiry_cli::settings::ENV_PASSPHRASE;
use domain_expiry_core::crypto;

fn main() -> ExitCode {
    logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logging::log_failure(&e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let passphrase = std::env::var(ENV_PASSPHRASE).unwrap_or_default();
    if passphrase.is_empty() {
        bail!("{ENV_PASSPHRASE} must be set to seal credentials");
    }

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read credentials from stdin")?;

    let document: serde_json::Value =
        serde_json::from_str(&input).context("stdin is not valid JSON")?;
    let credentials = parse_credentials_document(document)?;
    let vault = crypto::seal_credentials(&credentials, &passphrase)?;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &vault).context("failed to write vault")?;
    writeln!(stdout).context("failed to write vault")?;

    tracing::info!(
        "Sealed credentials for {} (vault version {})",
        credentials.api_user,
        vault.version
    );
    Ok(())
}
