//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use domain_expiry_provider::{
    Domain, DomainGetListResult, NamecheapCredentials, ProviderError, RegistrarProvider,
};

use crate::error::{CoreError, CoreResult};
use crate::traits::CredentialStore;

// ===== Fixtures =====

pub fn test_credentials() -> NamecheapCredentials {
    NamecheapCredentials {
        api_user: "alice".to_string(),
        api_key: "0123456789abcdef".to_string(),
        client_ip: "203.0.113.7".to_string(),
    }
}

/// Wire `Domain` with only name and expiry set meaningfully.
pub fn domain(name: &str, expires: &str) -> Domain {
    Domain {
        id: String::new(),
        name: name.to_string(),
        user: "alice".to_string(),
        created: "01/01/2020".to_string(),
        expires: expires.to_string(),
        is_expired: false,
        is_locked: false,
        auto_renew: false,
    }
}

pub fn list(domains: Vec<Domain>) -> DomainGetListResult {
    DomainGetListResult { domains }
}

// ===== MockRegistrarProvider =====

/// Returns a canned result on every call and counts calls.
pub struct MockRegistrarProvider {
    response: Result<DomainGetListResult, ProviderError>,
    calls: AtomicUsize,
}

impl MockRegistrarProvider {
    pub fn with_domains(result: DomainGetListResult) -> Self {
        Self {
            response: Ok(result),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_error(error: ProviderError) -> Self {
        Self {
            response: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RegistrarProvider for MockRegistrarProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn list_domains(&self) -> domain_expiry_provider::Result<DomainGetListResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}

// ===== MockCredentialStore =====

/// Yields fixed credentials, or a `Config` error with the given message.
pub struct MockCredentialStore {
    outcome: Result<NamecheapCredentials, String>,
}

impl MockCredentialStore {
    pub fn new(outcome: Result<NamecheapCredentials, String>) -> Self {
        Self { outcome }
    }
}

#[async_trait]
impl CredentialStore for MockCredentialStore {
    async fn load(&self) -> CoreResult<NamecheapCredentials> {
        self.outcome.clone().map_err(CoreError::Config)
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}
