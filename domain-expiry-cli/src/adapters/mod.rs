//! Platform adapters
//!
//! [`CredentialStore`](domain_expiry_core::CredentialStore) implementations:
//! - **`FileCredentialStore`**: JSON file holding plaintext credentials or a
//!   sealed vault; the vault passphrase comes from the environment.
//! - **`EnvCredentialStore`**: `NAMECHEAP_API_USER`, `NAMECHEAP_API_KEY`,
//!   `NAMECHEAP_CLIENT_IP`.

mod env_credential_store;
mod file_credential_store;

pub use env_credential_store::{
    EnvCredentialStore, ENV_API_KEY, ENV_API_USER, ENV_CLIENT_IP,
};
pub use file_credential_store::{parse_credentials_document, FileCredentialStore};
