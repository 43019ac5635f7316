//! Vault format versions
//!
//! The version number stored in a vault implies its key derivation
//! parameters; nothing else about the KDF is written to disk.
//!
//! - Version 1: PBKDF2-HMAC-SHA256, 600,000 iterations (OWASP 2023)

const V1_KDF_ITERATIONS: u32 = 600_000;

/// Version written by new vaults.
pub const CURRENT_VAULT_VERSION: u32 = 1;

/// PBKDF2 iterations for a vault version, `None` if unknown.
pub const fn kdf_iterations(version: u32) -> Option<u32> {
    match version {
        1 => Some(V1_KDF_ITERATIONS),
        _ => None,
    }
}

/// Iterations for [`CURRENT_VAULT_VERSION`], resolved at compile time.
///
/// # Panics
/// Fails the build if `CURRENT_VAULT_VERSION` has no iteration count.
#[allow(clippy::panic)]
pub const fn current_kdf_iterations() -> u32 {
    match kdf_iterations(CURRENT_VAULT_VERSION) {
        Some(iterations) => iterations,
        None => panic!("CURRENT_VAULT_VERSION has no KDF parameters"),
    }
}
