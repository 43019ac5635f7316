//! Environment-driven settings
//!
//! | Variable | Default |
//! |----------|---------|
//! | `DOMAIN_EXPIRY_CREDENTIALS` | `<config_dir>/domain-expiry/credentials.json` |
//! | `DOMAIN_EXPIRY_PASSPHRASE` | unset |
//! | `DOMAIN_EXPIRY_CREDENTIAL_SOURCE` | `file` |
//! | `DOMAIN_EXPIRY_SANDBOX` | `false` |
//! | `DOMAIN_EXPIRY_BASE_URL` | unset |
//! | `DOMAIN_EXPIRY_THRESHOLD_DAYS` | `90` |
//! | `DOMAIN_EXPIRY_TIMEOUT_SECS` | `10` |
//!
//! Empty values count as unset.

use std::path::PathBuf;

use domain_expiry_core::error::{CoreError, CoreResult};
use domain_expiry_core::{CredentialStore, DEFAULT_THRESHOLD_DAYS};
use domain_expiry_provider::{RegistrarEndpoint, RegistrarOptions};

use crate::adapters::{EnvCredentialStore, FileCredentialStore};

pub const ENV_CREDENTIALS: &str = "DOMAIN_EXPIRY_CREDENTIALS";
pub const ENV_PASSPHRASE: &str = "DOMAIN_EXPIRY_PASSPHRASE";
pub const ENV_CREDENTIAL_SOURCE: &str = "DOMAIN_EXPIRY_CREDENTIAL_SOURCE";
pub const ENV_SANDBOX: &str = "DOMAIN_EXPIRY_SANDBOX";
pub const ENV_BASE_URL: &str = "DOMAIN_EXPIRY_BASE_URL";
pub const ENV_THRESHOLD_DAYS: &str = "DOMAIN_EXPIRY_THRESHOLD_DAYS";
pub const ENV_TIMEOUT_SECS: &str = "DOMAIN_EXPIRY_TIMEOUT_SECS";

const APP_DIR: &str = "domain-expiry";
const CREDENTIALS_FILE: &str = "credentials.json";

/// Where credentials are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// JSON file, plaintext or sealed.
    File(PathBuf),
    /// `NAMECHEAP_*` environment variables.
    Env,
}

/// Resolved runtime settings.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub credential_source: CredentialSource,
    pub passphrase: Option<String>,
    pub endpoint: RegistrarEndpoint,
    pub threshold_days: i64,
    pub timeout_secs: u64,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("credential_source", &self.credential_source)
            .field("passphrase", &self.passphrase.as_ref().map(|_| "<set>"))
            .field("endpoint", &self.endpoint)
            .field("threshold_days", &self.threshold_days)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> CoreResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let credential_source = match get(ENV_CREDENTIAL_SOURCE)
            .map(|v| v.trim().to_ascii_lowercase())
            .as_deref()
        {
            None | Some("file") => CredentialSource::File(match get(ENV_CREDENTIALS) {
                Some(path) => PathBuf::from(path),
                None => default_credentials_path()?,
            }),
            Some("env") => CredentialSource::Env,
            Some(other) => {
                return Err(CoreError::Config(format!(
                    "{ENV_CREDENTIAL_SOURCE} must be 'file' or 'env', got '{other}'"
                )))
            }
        };

        let endpoint = match get(ENV_BASE_URL) {
            Some(url) => {
                let url = url.trim().to_string();
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(CoreError::Config(format!(
                        "{ENV_BASE_URL} must be an http(s) URL, got '{url}'"
                    )));
                }
                RegistrarEndpoint::Custom(url)
            }
            None => match get(ENV_SANDBOX) {
                Some(v) if parse_flag(ENV_SANDBOX, &v)? => RegistrarEndpoint::Sandbox,
                _ => RegistrarEndpoint::Production,
            },
        };

        let threshold_days = match get(ENV_THRESHOLD_DAYS) {
            Some(v) => v
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|days| *days >= 0)
                .ok_or_else(|| {
                    CoreError::Config(format!(
                        "{ENV_THRESHOLD_DAYS} must be a non-negative integer, got '{v}'"
                    ))
                })?,
            None => DEFAULT_THRESHOLD_DAYS,
        };

        let timeout_secs = match get(ENV_TIMEOUT_SECS) {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    CoreError::Config(format!(
                        "{ENV_TIMEOUT_SECS} must be a positive integer, got '{v}'"
                    ))
                })?,
            None => RegistrarOptions::default().request_timeout_secs,
        };

        Ok(Self {
            credential_source,
            passphrase: lookup(ENV_PASSPHRASE).filter(|v| !v.is_empty()),
            endpoint,
            threshold_days,
            timeout_secs,
        })
    }

    /// Options for the registrar client.
    pub fn registrar_options(&self) -> RegistrarOptions {
        RegistrarOptions {
            endpoint: self.endpoint.clone(),
            request_timeout_secs: self.timeout_secs,
            connect_timeout_secs: self.timeout_secs,
        }
    }

    /// Credential store for the configured source.
    pub fn credential_store(&self) -> Box<dyn CredentialStore> {
        match &self.credential_source {
            CredentialSource::File(path) => Box::new(FileCredentialStore::new(
                path.clone(),
                self.passphrase.clone(),
            )),
            CredentialSource::Env => Box::new(EnvCredentialStore::new()),
        }
    }
}

/// `<config_dir>/domain-expiry/credentials.json`
pub fn default_credentials_path() -> CoreResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CREDENTIALS_FILE))
        .ok_or_else(|| {
            CoreError::Config(format!(
                "cannot determine the config directory; set {ENV_CREDENTIALS}"
            ))
        })
}

fn parse_flag(key: &str, value: &str) -> CoreResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(CoreError::Config(format!(
            "{key} must be a boolean, got '{value}'"
        ))),
    }
}
