//! 凭证存储抽象 Trait

use async_trait::async_trait;
use domain_expiry_provider::NamecheapCredentials;

use crate::error::CoreResult;

/// 凭证存储 Trait
///
/// The checker only ever reads one set of registrar credentials; where they
/// live (plain file, sealed vault, environment) is the implementation's
/// business.
///
/// 平台实现 (`domain-expiry-cli`):
/// - `FileCredentialStore`: JSON file, plaintext or sealed vault
/// - `EnvCredentialStore`: `NAMECHEAP_*` environment variables
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// 加载并校验凭证
    ///
    /// # Returns
    /// * `Err(CoreError::Config)` - 来源缺失或不可读
    /// * `Err(CoreError::CredentialValidation)` - 字段缺失或为空
    /// * `Err(CoreError::Crypto)` - 保险库无法解密
    async fn load(&self) -> CoreResult<NamecheapCredentials>;

    /// Short human-readable description of the source, for logs.
    fn describe(&self) -> String;
}
