//! Namecheap Registrar Provider

mod error;
mod http;
mod parser;
mod provider;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::create_http_client;
use crate::types::{NamecheapCredentials, RegistrarOptions};

pub use types::{
    ApiErrorEntry, ApiErrors, ApiRequest, ApiResponse, ApiWarnings, CommandResponse, Domain,
    DomainGetListResult, Paging,
};

pub(crate) const PROVIDER_NAME: &str = "namecheap";
/// XML API 路径
pub(crate) const XML_RESPONSE_PATH: &str = "/xml.response";
pub(crate) const CMD_DOMAINS_GET_LIST: &str = "namecheap.domains.getList";
/// 按到期日排序，最早到期的排在前面
pub(crate) const SORT_BY_EXPIRE_DATE: &str = "EXPIREDATE";

/// Namecheap Registrar Provider
///
/// `Debug` output masks the API key.
#[derive(Debug)]
pub struct NamecheapProvider {
    pub(crate) client: Client,
    pub(crate) credentials: NamecheapCredentials,
    pub(crate) base_url: String,
}

impl NamecheapProvider {
    /// Provider against the production endpoint with default timeouts.
    pub fn new(credentials: NamecheapCredentials) -> Result<Self> {
        Self::with_options(credentials, &RegistrarOptions::default())
    }

    pub fn with_options(
        credentials: NamecheapCredentials,
        options: &RegistrarOptions,
    ) -> Result<Self> {
        Ok(Self {
            client: create_http_client(options, PROVIDER_NAME)?,
            credentials,
            base_url: options.endpoint.base_url().to_string(),
        })
    }

    /// Base URL this provider sends requests to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
