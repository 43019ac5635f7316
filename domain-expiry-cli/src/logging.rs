//! Tracing setup shared by the binaries.

use domain_expiry_core::CoreError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber. stdout carries only the report.
///
/// Library crates log through `log`; those records are bridged here too.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let result = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false)
                .with_ansi(false),
        )
        .with(filter)
        .try_init();

    if let Err(e) = result {
        eprintln!("failed to initialize logging: {e}");
    }
}

/// Log a fatal error at `warn` if it is an expected failure, `error` otherwise.
pub fn log_failure(error: &anyhow::Error) {
    if is_expected(error) {
        tracing::warn!("{error:#}");
    } else {
        tracing::error!("{error:#}");
    }
}

fn is_expected(error: &anyhow::Error) -> bool {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<CoreError>())
        .is_some_and(CoreError::is_expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_expiry_core::error::ProviderError;

    #[test]
    fn config_errors_are_expected() {
        let err = anyhow::Error::new(CoreError::Config("missing file".to_string()))
            .context("loading credentials");
        assert!(is_expected(&err));
    }

    #[test]
    fn malformed_responses_are_not_expected() {
        let err = anyhow::Error::new(CoreError::Provider(ProviderError::MalformedResponse {
            provider: "namecheap".to_string(),
            detail: "missing CommandResponse".to_string(),
        }));
        assert!(!is_expected(&err));
    }

    #[test]
    fn foreign_errors_are_not_expected() {
        assert!(!is_expected(&anyhow::anyhow!("stdin closed")));
    }
}
