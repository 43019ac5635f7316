//! Namecheap error mapping

use crate::error::RegistrarErrorKind;
use crate::traits::ProviderErrorMapper;

use super::{NamecheapProvider, PROVIDER_NAME};

/// Namecheap error code mapping
/// Reference: <https://www.namecheap.com/support/api/error-codes/>
impl ProviderErrorMapper for NamecheapProvider {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn classify(&self, code: Option<&str>) -> RegistrarErrorKind {
        match code {
            // 1010101: Parameter APIUser is missing
            // 1010102: Parameter APIKey is missing
            // 1011102: API Key is invalid or API access has not been enabled
            // 1016103 / 1019103: UserName is unavailable or not found
            // 1017101: ApiUser is invalid
            // 1017103: UserName is invalid
            // 1017411: API usage disabled for this account
            Some(
                "1010101" | "1010102" | "1011102" | "1016103" | "1017101" | "1017103"
                | "1019103" | "1017411",
            ) => RegistrarErrorKind::Authentication,

            // 1010105 / 1011105 / 1017105: ClientIp missing or invalid
            // 1011150 / 1017150: request IP not whitelisted
            Some("1010105" | "1011105" | "1011150" | "1017105" | "1017150") => {
                RegistrarErrorKind::AccessDenied
            }

            // 1010104: Parameter Command is missing
            Some("1010104") => RegistrarErrorKind::InvalidRequest,

            _ => RegistrarErrorKind::Unknown,
        }
    }
}
