//! Report Namecheap domains expiring within the threshold.
//!
//! Prints the matching names on stdout, sorted and separated by `", "`,
//! and nothing when no domain qualifies. Logs go to stderr. Exits 1 on any
//! failure.

use std::process::ExitCode;

use anyhow::Context;
use chrono::Local;
use domain_expiry_cli::{logging, settings::Settings};
use domain_expiry_core::{ExpiryCheckService, ExpiryReport};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logging::init();

    match run().await {
        Ok(report) => {
            if !report.is_empty() {
                println!("{}", report.to_line());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            logging::log_failure(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<ExpiryReport> {
    let settings = Settings::from_env().context("invalid settings")?;
    tracing::debug!("{settings:?}");

    let store = settings.credential_store();
    let service = ExpiryCheckService::from_credential_store(
        store.as_ref(),
        &settings.registrar_options(),
        settings.threshold_days,
    )
    .await
    .with_context(|| format!("cannot prepare registrar client from {}", store.describe()))?;

    let today = Local::now().date_naive();
    let report = service
        .check(today)
        .await
        .context("domain expiry check failed")?;

    tracing::info!(
        "{} domains expire within {} days",
        report.len(),
        service.threshold_days()
    );
    Ok(report)
}
