//! Environment-variable credential store

use std::collections::HashMap;

use async_trait::async_trait;
use domain_expiry_core::error::CoreResult;
use domain_expiry_core::CredentialStore;
use domain_expiry_provider::NamecheapCredentials;

pub const ENV_API_USER: &str = "NAMECHEAP_API_USER";
pub const ENV_API_KEY: &str = "NAMECHEAP_API_KEY";
pub const ENV_CLIENT_IP: &str = "NAMECHEAP_CLIENT_IP";

type Lookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Reads credentials injected as environment variables (CI secrets, systemd
/// `EnvironmentFile`, container secrets).
pub struct EnvCredentialStore {
    lookup: Lookup,
}

impl EnvCredentialStore {
    /// Store backed by the process environment.
    #[must_use]
    pub fn new() -> Self {
        Self::with_lookup(|key| std::env::var(key).ok())
    }

    /// Store backed by an arbitrary variable lookup.
    pub fn with_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            lookup: Box::new(lookup),
        }
    }
}

impl Default for EnvCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for EnvCredentialStore {
    async fn load(&self) -> CoreResult<NamecheapCredentials> {
        let map: HashMap<String, String> = [
            ("api_user", ENV_API_USER),
            ("api_key", ENV_API_KEY),
            ("client_ip", ENV_CLIENT_IP),
        ]
        .into_iter()
        .filter_map(|(field, var)| (self.lookup)(var).map(|value| (field.to_string(), value)))
        .collect();

        tracing::debug!("Found {} of 3 NAMECHEAP_* variables", map.len());
        Ok(NamecheapCredentials::from_map(&map)?)
    }

    fn describe(&self) -> String {
        "environment (NAMECHEAP_*)".to_string()
    }
}
