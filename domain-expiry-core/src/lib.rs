//! Domain Expiry Core Library
//!
//! Platform-independent part of the domain expiry checker:
//! - [`ExpiryCheckService`]: fetch the registrar's domain list and report
//!   domains expiring within a threshold
//! - [`filter_expiring`]: the pure date filter behind it
//! - [`CredentialStore`]: where credentials come from, implemented by the
//!   binary crate
//! - [`crypto`]: sealing and opening credential vaults

pub mod crypto;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{filter_expiring, ExpiryCheckService, DEFAULT_THRESHOLD_DAYS};
pub use traits::CredentialStore;
pub use types::{DomainRecord, ExpiryReport, SealedVault};
