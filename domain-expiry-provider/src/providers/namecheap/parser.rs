//! Namecheap 响应解析

use crate::error::Result;
use crate::traits::{ProviderErrorMapper, RawApiError};

use super::{ApiResponse, DomainGetListResult, NamecheapProvider};

impl NamecheapProvider {
    /// Unwrap `CommandResponse/DomainGetListResult` from a decoded envelope.
    ///
    /// The first `<Error>` wins when the registrar reports any. A response
    /// without errors must carry both elements; anything else (an HTML page,
    /// a foreign XML document) is malformed.
    pub fn parse_domain_list(&self, response: ApiResponse) -> Result<DomainGetListResult> {
        if let Some(first) = response.errors.first() {
            if response.errors.items.len() > 1 {
                log::debug!(
                    "[{}] {} errors reported, using the first",
                    self.provider_name(),
                    response.errors.items.len()
                );
            }
            log::error!("[{}] API 错误: {}", self.provider_name(), first.message.trim());
            let message = first.message.trim().to_string();
            let raw = match first.number.as_deref().map(str::trim) {
                Some(code) if !code.is_empty() => RawApiError::with_code(code, message),
                _ => RawApiError::new(message),
            };
            return Err(self.map_error(raw));
        }

        for warning in &response.warnings.items {
            log::warn!(
                "[{}] API 警告 {}: {}",
                self.provider_name(),
                warning.number.as_deref().unwrap_or("-"),
                warning.message.trim()
            );
        }

        if response.status.eq_ignore_ascii_case("ERROR") {
            return Err(self.map_error(RawApiError::new(
                "Status=ERROR without an Errors element",
            )));
        }

        let command = response
            .command_response
            .ok_or_else(|| self.malformed("响应中缺少 CommandResponse 元素"))?;

        let result = command
            .domain_get_list_result
            .ok_or_else(|| self.malformed("响应中缺少 DomainGetListResult 元素"))?;

        if let Some(paging) = command.paging {
            let total = usize::try_from(paging.total_items).unwrap_or(usize::MAX);
            if total > result.len() {
                log::warn!(
                    "[{}] Account has {total} domains but only {} were returned (page {}, size {})",
                    self.provider_name(),
                    result.len(),
                    paging.current_page,
                    paging.page_size
                );
            }
        }

        log::debug!(
            "[{}] {} domains in result",
            self.provider_name(),
            result.len()
        );
        Ok(result)
    }
}
