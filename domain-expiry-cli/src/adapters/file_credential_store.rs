//! File-based credential store
//!
//! Accepts two document shapes:
//!
//! ```json
//! {"api_user": "alice", "api_key": "...", "client_ip": "203.0.113.7"}
//! {"version": 1, "salt": "...", "nonce": "...", "data": "..."}
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use domain_expiry_core::crypto;
use domain_expiry_core::error::{CoreError, CoreResult};
use domain_expiry_core::{CredentialStore, SealedVault};
use domain_expiry_provider::NamecheapCredentials;

use crate::settings::ENV_PASSPHRASE;

/// Credential files are tiny; anything larger is not ours.
const MAX_CREDENTIAL_FILE_SIZE: u64 = 64 * 1024;

/// Reads credentials from a JSON file, opening sealed vaults with `passphrase`.
pub struct FileCredentialStore {
    path: PathBuf,
    passphrase: Option<String>,
}

impl FileCredentialStore {
    #[must_use]
    pub fn new(path: PathBuf, passphrase: Option<String>) -> Self {
        Self { path, passphrase }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> CoreResult<String> {
        let metadata = match tokio::fs::metadata(&self.path).await {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CoreError::Config(format!(
                    "credential file not found: {}",
                    self.path.display()
                )));
            }
            Err(e) => {
                return Err(CoreError::Config(format!(
                    "cannot access credential file {}: {e}",
                    self.path.display()
                )));
            }
        };

        if metadata.len() > MAX_CREDENTIAL_FILE_SIZE {
            return Err(CoreError::Config(format!(
                "credential file too large: {} bytes (max: {MAX_CREDENTIAL_FILE_SIZE} bytes)",
                metadata.len()
            )));
        }

        tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            CoreError::Config(format!(
                "failed to read credential file {}: {e}",
                self.path.display()
            ))
        })
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn load(&self) -> CoreResult<NamecheapCredentials> {
        let content = self.read_document().await?;
        let document: serde_json::Value = serde_json::from_str(&content).map_err(|e| {
            CoreError::Config(format!(
                "credential file {} is not valid JSON: {e}",
                self.path.display()
            ))
        })?;

        if SealedVault::looks_like_vault(&document) {
            tracing::debug!("Opening sealed vault {}", self.path.display());
            let passphrase = self.passphrase.as_deref().ok_or_else(|| {
                CoreError::Config(format!(
                    "{} is a sealed vault; set {ENV_PASSPHRASE}",
                    self.path.display()
                ))
            })?;
            let vault: SealedVault = serde_json::from_value(document)
                .map_err(|e| CoreError::Config(format!("invalid vault format: {e}")))?;
            return crypto::open_credentials(&vault, passphrase);
        }

        tracing::debug!("Reading plaintext credentials {}", self.path.display());
        parse_credentials_document(document)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Turn a flat JSON object of strings into validated credentials.
pub fn parse_credentials_document(document: serde_json::Value) -> CoreResult<NamecheapCredentials> {
    let map: HashMap<String, String> = serde_json::from_value(document).map_err(|e| {
        CoreError::Config(format!(
            "credentials must be a JSON object of strings: {e}"
        ))
    })?;
    Ok(NamecheapCredentials::from_map(&map)?)
}
