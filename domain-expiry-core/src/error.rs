//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use domain_expiry_provider::{CredentialValidationError, ProviderError};

/// Core layer error type
///
/// Every variant aborts the check run.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Credential source missing, unreadable, or settings invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Credential validation errors (structured, supports field level errors)
    #[error("Invalid credentials: {0}")]
    CredentialValidation(CredentialValidationError),

    /// Vault could not be sealed or opened
    #[error("Vault error: {0}")]
    Crypto(String),

    /// Vault written by an unknown format version
    #[error("Unsupported vault version: {0}")]
    UnsupportedVaultVersion(u32),

    /// A domain's `Expires` attribute is not `MM/DD/YYYY`
    #[error("Invalid expiry date '{value}' for {domain}: {detail}")]
    DateParse {
        domain: String,
        value: String,
        detail: String,
    },

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl From<CredentialValidationError> for CoreError {
    fn from(e: CredentialValidationError) -> Self {
        Self::CredentialValidation(e)
    }
}

impl CoreError {
    /// 是否为预期行为（配置缺失、凭证错误等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Config(_)
            | Self::CredentialValidation(_)
            | Self::Crypto(_)
            | Self::UnsupportedVaultVersion(_) => true,
            Self::Provider(e) => e.is_expected(),
            Self::DateParse { .. } => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
