//! Sealed credential vault file format.

use serde::{Deserialize, Serialize};

/// On-disk form of encrypted credentials.
///
/// ```json
/// {"version": 1, "salt": "...", "nonce": "...", "data": "..."}
/// ```
///
/// `salt`, `nonce` and `data` are standard Base64. The version selects the
/// key derivation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SealedVault {
    /// Vault format version
    pub version: u32,
    /// PBKDF2 salt
    pub salt: String,
    /// AES-GCM nonce
    pub nonce: String,
    /// Ciphertext of the credential JSON
    pub data: String,
}

impl SealedVault {
    /// Whether a JSON document has the vault shape (as opposed to plaintext credentials).
    pub fn looks_like_vault(value: &serde_json::Value) -> bool {
        value.as_object().is_some_and(|obj| {
            ["version", "salt", "nonce", "data"]
                .iter()
                .all(|key| obj.contains_key(*key))
        })
    }
}
