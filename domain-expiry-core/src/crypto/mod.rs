//! 凭证保险库加密模块
//!
//! AES-256-GCM over the credential JSON, keyed by PBKDF2-HMAC-SHA256 of a
//! passphrase. Salt and nonce are random per seal.

mod versions;

pub use versions::{current_kdf_iterations, kdf_iterations, CURRENT_VAULT_VERSION};

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use domain_expiry_provider::NamecheapCredentials;
use pbkdf2::pbkdf2_hmac_array;
use rand::RngCore;
use sha2::Sha256;

use crate::error::{CoreError, CoreResult};
use crate::types::SealedVault;

const SALT_LEN: usize = 16;
const NONCE_LEN: usize = 12;
const KEY_LEN: usize = 32;

fn derive_key(passphrase: &str, salt: &[u8], iterations: u32) -> [u8; KEY_LEN] {
    pbkdf2_hmac_array::<Sha256, KEY_LEN>(passphrase.as_bytes(), salt, iterations)
}

fn cipher_for(key: &[u8; KEY_LEN]) -> CoreResult<Aes256Gcm> {
    Aes256Gcm::new_from_slice(key).map_err(|e| CoreError::Crypto(format!("cipher init: {e}")))
}

fn decode_field(field: &str, value: &str) -> CoreResult<Vec<u8>> {
    BASE64
        .decode(value.trim())
        .map_err(|e| CoreError::Crypto(format!("vault field '{field}' is not Base64: {e}")))
}

/// Encrypt arbitrary bytes into a vault at [`CURRENT_VAULT_VERSION`].
pub fn seal(plaintext: &[u8], passphrase: &str) -> CoreResult<SealedVault> {
    if passphrase.is_empty() {
        return Err(CoreError::Crypto("passphrase must not be empty".to_string()));
    }

    let mut salt = [0u8; SALT_LEN];
    let mut nonce = [0u8; NONCE_LEN];
    let mut rng = rand::rng();
    rng.fill_bytes(&mut salt);
    rng.fill_bytes(&mut nonce);

    let key = derive_key(passphrase, &salt, current_kdf_iterations());
    let data = cipher_for(&key)?
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .map_err(|e| CoreError::Crypto(format!("encryption failed: {e}")))?;

    Ok(SealedVault {
        version: CURRENT_VAULT_VERSION,
        salt: BASE64.encode(salt),
        nonce: BASE64.encode(nonce),
        data: BASE64.encode(data),
    })
}

/// Decrypt a vault; unknown versions are rejected before key derivation.
pub fn open(vault: &SealedVault, passphrase: &str) -> CoreResult<Vec<u8>> {
    let iterations =
        kdf_iterations(vault.version).ok_or(CoreError::UnsupportedVaultVersion(vault.version))?;

    let salt = decode_field("salt", &vault.salt)?;
    let nonce = decode_field("nonce", &vault.nonce)?;
    let data = decode_field("data", &vault.data)?;
    if nonce.len() != NONCE_LEN {
        return Err(CoreError::Crypto(format!(
            "vault nonce must be {NONCE_LEN} bytes, got {}",
            nonce.len()
        )));
    }

    let key = derive_key(passphrase, &salt, iterations);
    cipher_for(&key)?
        .decrypt(Nonce::from_slice(&nonce), data.as_ref())
        .map_err(|_| CoreError::Crypto("wrong passphrase or corrupted vault".to_string()))
}

/// Validate and seal credentials.
pub fn seal_credentials(
    credentials: &NamecheapCredentials,
    passphrase: &str,
) -> CoreResult<SealedVault> {
    credentials.validate()?;
    let plaintext = serde_json::to_vec(credentials)
        .map_err(|e| CoreError::Crypto(format!("serialize credentials: {e}")))?;
    seal(&plaintext, passphrase)
}

/// Open a vault and validate the credentials inside.
pub fn open_credentials(
    vault: &SealedVault,
    passphrase: &str,
) -> CoreResult<NamecheapCredentials> {
    let plaintext = open(vault, passphrase)?;
    let credentials: NamecheapCredentials = serde_json::from_slice(&plaintext)
        .map_err(|e| CoreError::Crypto(format!("vault payload is not credential JSON: {e}")))?;
    credentials.validate()?;
    Ok(credentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> NamecheapCredentials {
        NamecheapCredentials {
            api_user: "alice".to_string(),
            api_key: "0123456789abcdef".to_string(),
            client_ip: "203.0.113.7".to_string(),
        }
    }

    #[test]
    fn credentials_survive_seal_and_open() {
        let vault = seal_credentials(&credentials(), "correct horse").unwrap();
        assert_eq!(vault.version, CURRENT_VAULT_VERSION);
        assert!(!vault.data.contains("0123456789abcdef"));

        let opened = open_credentials(&vault, "correct horse").unwrap();
        assert_eq!(opened, credentials());
    }

    #[test]
    fn wrong_passphrase_fails() {
        let vault = seal(b"secret", "right").unwrap();
        let err = open(&vault, "wrong").unwrap_err();
        assert!(matches!(err, CoreError::Crypto(_)));
    }

    #[test]
    fn seal_uses_fresh_salt_and_nonce() {
        let a = seal(b"same", "pw").unwrap();
        let b = seal(b"same", "pw").unwrap();
        assert_ne!(a.salt, b.salt);
        assert_ne!(a.nonce, b.nonce);
    }

    #[test]
    fn empty_passphrase_is_rejected() {
        assert!(matches!(seal(b"x", ""), Err(CoreError::Crypto(_))));
    }

    #[test]
    fn unknown_version_is_rejected() {
        let mut vault = seal(b"x", "pw").unwrap();
        vault.version = 9;
        assert!(matches!(
            open(&vault, "pw"),
            Err(CoreError::UnsupportedVaultVersion(9))
        ));
    }

    #[test]
    fn vault_from_a_newer_writer_is_rejected() {
        let mut vault = seal(b"x", "pw").unwrap();
        vault.version = CURRENT_VAULT_VERSION + 1;
        assert!(matches!(
            open(&vault, "pw"),
            Err(CoreError::UnsupportedVaultVersion(v)) if v == CURRENT_VAULT_VERSION + 1
        ));
    }

    #[test]
    fn invalid_base64_is_reported_by_field() {
        let mut vault = seal(b"x", "pw").unwrap();
        vault.salt = "%%%".to_string();
        let err = open(&vault, "pw").unwrap_err();
        assert!(err.to_string().contains("salt"), "unexpected error: {err}");
    }

    #[test]
    fn sealing_invalid_credentials_fails_before_encryption() {
        let mut bad = credentials();
        bad.api_key = " ".to_string();
        assert!(matches!(
            seal_credentials(&bad, "pw"),
            Err(CoreError::CredentialValidation(_))
        ));
    }

    #[test]
    fn non_credential_payload_is_rejected() {
        let vault = seal(br#"{"hello": "world"}"#, "pw").unwrap();
        assert!(matches!(
            open_credentials(&vault, "pw"),
            Err(CoreError::Crypto(_))
        ));
    }
}
