//! Namecheap XML API 类型定义
//!
//! Mirrors the `xml.response` envelope:
//!
//! ```xml
//! <ApiResponse Status="OK">
//!   <Errors />
//!   <CommandResponse Type="namecheap.domains.getList">
//!     <DomainGetListResult>
//!       <Domain ID="1" Name="example.com" Expires="03/15/2025" ... />
//!     </DomainGetListResult>
//!     <Paging>...</Paging>
//!   </CommandResponse>
//! </ApiResponse>
//! ```
//!
//! Attributes decode through `@Name` renames, element text through `$text`.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::providers::common::merge_params;
use crate::types::NamecheapCredentials;

/// One API call: command plus command-specific parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// Namecheap command, e.g. `namecheap.domains.getList`.
    pub command: String,
    /// Command options; win over the fixed auth fields on collision.
    pub extra_params: BTreeMap<String, String>,
}

impl ApiRequest {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            extra_params: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_params.insert(key.into(), value.into());
        self
    }

    /// Full query: auth fields and `Command`, merged with `extra_params`.
    pub fn to_query(&self, credentials: &NamecheapCredentials) -> BTreeMap<String, String> {
        let base: BTreeMap<String, String> = [
            ("ApiUser".to_string(), credentials.api_user.clone()),
            ("ApiKey".to_string(), credentials.api_key.clone()),
            ("UserName".to_string(), credentials.api_user.clone()),
            ("ClientIp".to_string(), credentials.client_ip.clone()),
            ("Command".to_string(), self.command.clone()),
        ]
        .into();
        merge_params(base, &self.extra_params)
    }
}

/// Decoded `ApiResponse` envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiResponse {
    /// `OK` or `ERROR`.
    #[serde(rename = "@Status", default)]
    pub status: String,
    #[serde(rename = "Errors", default)]
    pub errors: ApiErrors,
    #[serde(rename = "Warnings", default)]
    pub warnings: ApiWarnings,
    #[serde(rename = "RequestedCommand", default)]
    pub requested_command: Option<String>,
    #[serde(rename = "CommandResponse", default)]
    pub command_response: Option<CommandResponse>,
}

/// `<Errors>` container; empty on success.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrors {
    #[serde(rename = "Error", default)]
    pub items: Vec<ApiErrorEntry>,
}

impl ApiErrors {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&ApiErrorEntry> {
        self.items.first()
    }
}

/// `<Warnings>` container; non-fatal notices.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiWarnings {
    #[serde(rename = "Warning", default)]
    pub items: Vec<ApiErrorEntry>,
}

/// A single `<Error Number="...">message</Error>` (or `<Warning>`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorEntry {
    #[serde(rename = "@Number", default)]
    pub number: Option<String>,
    #[serde(rename = "$text", default)]
    pub message: String,
}

/// `<CommandResponse>` for `namecheap.domains.getList`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommandResponse {
    #[serde(rename = "@Type", default)]
    pub command_type: String,
    #[serde(rename = "DomainGetListResult", default)]
    pub domain_get_list_result: Option<DomainGetListResult>,
    #[serde(rename = "Paging", default)]
    pub paging: Option<Paging>,
}

/// `<DomainGetListResult>`.
///
/// The API emits zero, one or many `<Domain>` children. All three shapes
/// decode into the same sequence, so a lone domain is never special-cased
/// downstream.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainGetListResult {
    #[serde(rename = "Domain", default)]
    pub domains: Vec<Domain>,
}

impl DomainGetListResult {
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

/// One `<Domain .../>` element; every field is an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Domain {
    #[serde(rename = "@ID", default)]
    pub id: String,
    #[serde(rename = "@Name")]
    pub name: String,
    #[serde(rename = "@User", default)]
    pub user: String,
    /// `MM/DD/YYYY`
    #[serde(rename = "@Created", default)]
    pub created: String,
    /// `MM/DD/YYYY`; parsed by the expiry filter, not here.
    #[serde(rename = "@Expires")]
    pub expires: String,
    #[serde(rename = "@IsExpired", default)]
    pub is_expired: bool,
    #[serde(rename = "@IsLocked", default)]
    pub is_locked: bool,
    #[serde(rename = "@AutoRenew", default)]
    pub auto_renew: bool,
}

/// `<Paging>` block following the result.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Paging {
    #[serde(rename = "TotalItems", default)]
    pub total_items: u32,
    #[serde(rename = "CurrentPage", default)]
    pub current_page: u32,
    #[serde(rename = "PageSize", default)]
    pub page_size: u32,
}
