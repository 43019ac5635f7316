use async_trait::async_trait;

use crate::error::{ProviderError, RegistrarErrorKind, Result};
use crate::providers::namecheap::DomainGetListResult;

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码（Namecheap 为 `Number` 属性）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// Provider 错误映射 Trait（内部使用）
/// 各注册商实现此 trait 以将原始 API 错误映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将错误码归类
    fn classify(&self, code: Option<&str>) -> RegistrarErrorKind;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Registrar {
            provider: self.provider_name().to_string(),
            kind: self.classify(raw.code.as_deref()),
            raw_code: raw.code,
            message: raw.message,
        }
    }

    /// 快捷方法：响应结构错误
    fn malformed(&self, detail: impl ToString) -> ProviderError {
        ProviderError::MalformedResponse {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }
}

/// Registrar abstraction consumed by the expiry check workflow.
///
/// Implementations perform exactly one request per call and never retry.
#[async_trait]
pub trait RegistrarProvider: Send + Sync {
    /// 注册商标识符
    fn id(&self) -> &'static str;

    /// Fetch the account's domain list and unwrap the result payload.
    ///
    /// Registrar-reported errors surface as [`ProviderError::Registrar`],
    /// shape mismatches as [`ProviderError::MalformedResponse`].
    async fn list_domains(&self) -> Result<DomainGetListResult>;
}
