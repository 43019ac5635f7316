//! Namecheap RegistrarProvider trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::RegistrarProvider;

use super::{DomainGetListResult, NamecheapProvider, PROVIDER_NAME};

#[async_trait]
impl RegistrarProvider for NamecheapProvider {
    fn id(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn list_domains(&self) -> Result<DomainGetListResult> {
        let response = self.fetch_domain_list().await?;
        self.parse_domain_list(response)
    }
}
