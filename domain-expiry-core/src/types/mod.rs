//! 类型定义模块

mod report;
mod vault;

pub use report::{DomainRecord, ExpiryReport};
pub use vault::SealedVault;

// Re-export provider 库的公共类型
pub use domain_expiry_provider::{
    CredentialValidationError, Domain, DomainGetListResult, NamecheapCredentials,
    RegistrarOptions,
};
