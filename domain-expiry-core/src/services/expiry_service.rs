//! 域名到期检查服务

use std::sync::Arc;

use chrono::NaiveDate;
use domain_expiry_provider::{create_provider, RegistrarOptions, RegistrarProvider};

use crate::error::CoreResult;
use crate::services::expiry_filter::filter_expiring;
use crate::traits::CredentialStore;
use crate::types::ExpiryReport;

/// One-shot expiry check: fetch the domain list once, filter by date.
pub struct ExpiryCheckService {
    provider: Arc<dyn RegistrarProvider>,
    threshold_days: i64,
}

impl ExpiryCheckService {
    /// 创建服务实例
    #[must_use]
    pub fn new(provider: Arc<dyn RegistrarProvider>, threshold_days: i64) -> Self {
        Self {
            provider,
            threshold_days,
        }
    }

    /// Load credentials from `store` and build the registrar provider.
    pub async fn from_credential_store(
        store: &dyn CredentialStore,
        options: &RegistrarOptions,
        threshold_days: i64,
    ) -> CoreResult<Self> {
        log::debug!("Loading credentials from {}", store.describe());
        let credentials = store.load().await?;
        log::debug!("Using {credentials:?}");

        let provider = create_provider(credentials, options)?;
        log::info!(
            "[{}] Endpoint {}",
            provider.id(),
            options.endpoint.base_url()
        );
        Ok(Self::new(provider, threshold_days))
    }

    pub fn threshold_days(&self) -> i64 {
        self.threshold_days
    }

    /// Fetch, parse and filter. `today` is the reference date.
    pub async fn check(&self, today: NaiveDate) -> CoreResult<ExpiryReport> {
        let result = self.provider.list_domains().await?;
        log::info!(
            "[{}] Fetched {} domains",
            self.provider.id(),
            result.domains.len()
        );
        filter_expiring(&result, self.threshold_days, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::services::expiry_filter::DEFAULT_THRESHOLD_DAYS;
    use crate::test_utils::{
        domain, list, test_credentials, MockCredentialStore, MockRegistrarProvider,
    };
    use domain_expiry_provider::{ProviderError, RegistrarErrorKind};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[tokio::test]
    async fn two_domains_one_expiring() {
        let provider = Arc::new(MockRegistrarProvider::with_domains(list(vec![
            domain("soon.com", "02/01/2025"),
            domain("later.com", "01/01/2027"),
        ])));
        let service = ExpiryCheckService::new(provider.clone(), DEFAULT_THRESHOLD_DAYS);

        let report = service.check(today()).await.unwrap();
        assert_eq!(report.to_line(), "soon.com");
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn zero_domains_gives_empty_report() {
        let provider = Arc::new(MockRegistrarProvider::with_domains(list(vec![])));
        let service = ExpiryCheckService::new(provider, DEFAULT_THRESHOLD_DAYS);
        assert!(service.check(today()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn registrar_error_propagates() {
        let provider = Arc::new(MockRegistrarProvider::with_error(ProviderError::Registrar {
            provider: "mock".to_string(),
            kind: RegistrarErrorKind::Authentication,
            raw_code: Some("1011102".to_string()),
            message: "Invalid API Key".to_string(),
        }));
        let service = ExpiryCheckService::new(provider, DEFAULT_THRESHOLD_DAYS);

        let err = service.check(today()).await.unwrap_err();
        assert!(
            matches!(
                &err,
                CoreError::Provider(ProviderError::Registrar { raw_code: Some(code), message, .. })
                    if code == "1011102" && message == "Invalid API Key"
            ),
            "unexpected error: {err:?}"
        );
    }

    #[tokio::test]
    async fn custom_threshold_is_applied() {
        let provider = Arc::new(MockRegistrarProvider::with_domains(list(vec![
            domain("a.com", "01/20/2025"),
            domain("b.com", "03/01/2025"),
        ])));
        let service = ExpiryCheckService::new(provider, 30);
        assert_eq!(service.threshold_days(), 30);
        assert_eq!(service.check(today()).await.unwrap().to_line(), "a.com");
    }

    #[tokio::test]
    async fn from_store_builds_provider() {
        let store = MockCredentialStore::new(Ok(test_credentials()));
        let service = ExpiryCheckService::from_credential_store(
            &store,
            &RegistrarOptions::default(),
            DEFAULT_THRESHOLD_DAYS,
        )
        .await
        .unwrap();
        assert_eq!(service.threshold_days(), DEFAULT_THRESHOLD_DAYS);
    }

    #[tokio::test]
    async fn from_store_propagates_store_error() {
        let store = MockCredentialStore::new(Err("credential file not found".to_string()));
        let result = ExpiryCheckService::from_credential_store(
            &store,
            &RegistrarOptions::default(),
            DEFAULT_THRESHOLD_DAYS,
        )
        .await;
        assert!(matches!(result, Err(CoreError::Config(_))));
    }

    #[tokio::test]
    async fn from_store_rejects_invalid_client_ip() {
        let mut credentials = test_credentials();
        credentials.client_ip = "my-laptop".to_string();
        let store = MockCredentialStore::new(Ok(credentials));
        let result = ExpiryCheckService::from_credential_store(
            &store,
            &RegistrarOptions::default(),
            DEFAULT_THRESHOLD_DAYS,
        )
        .await;
        assert!(matches!(
            result,
            Err(CoreError::Provider(ProviderError::InvalidConfiguration { .. }))
        ));
    }
}
