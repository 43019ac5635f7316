//! Provider 公共工具函数

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::Client;

use crate::error::{ProviderError, Result};
use crate::types::RegistrarOptions;

// ============ HTTP Client ============

/// 创建带超时配置的 HTTP Client
pub fn create_http_client(options: &RegistrarOptions, provider: &str) -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(options.connect_timeout_secs))
        .timeout(Duration::from_secs(options.request_timeout_secs))
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
        .map_err(|e| ProviderError::InvalidConfiguration {
            provider: provider.to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

// ============ 请求参数 ============

/// 合并固定参数与命令参数，命令参数优先
pub fn merge_params(
    base: BTreeMap<String, String>,
    overrides: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut merged = base;
    for (k, v) in overrides {
        merged.insert(k.clone(), v.clone());
    }
    merged
}
