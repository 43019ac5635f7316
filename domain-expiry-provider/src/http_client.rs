//! Generic HTTP client tools
//!
//! Reusable request/response handling shared by registrar implementations.
//! Each provider still builds its own `RequestBuilder` (URL, query, headers).
//!
//! # design principles
//! - **One attempt per call** - transport failures are reported, never retried
//! - **Unified HTTP processing flow** - sending requests, logging, status checks, reading bodies
//! - **Typed decoding** - XML bodies decode straight into wire structs

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response text
    ///
    /// Unified processing: sending requests, logging, error handling
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (URL, query, headers)
    /// * `provider_name` - Provider name (for logging)
    /// * `method_name` - request method name (such as "GET", used for logs)
    /// * `url_or_action` - URL or command name (for logging, must not contain secrets)
    ///
    /// # Returns
    /// * `Ok(response_text)` - body of a 2xx response
    /// * `Err(ProviderError::Timeout)` - the request timed out
    /// * `Err(ProviderError::NetworkError)` - connection failure or unreadable body
    /// * `Err(ProviderError::HttpStatus)` - non-2xx status
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url_or_action: &str,
    ) -> Result<String, ProviderError> {
        log::debug!("[{provider_name}] {method_name} {url_or_action}");

        // Send request
        // reqwest's Display includes the full URL, query string and all.
        let response = request_builder.send().await.map_err(|e| {
            let e = e.without_url();
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        log::debug!("[{provider_name}] Response Status: {}", status.as_u16());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{provider_name}] HTTP {} from registrar", status.as_u16());
            return Err(ProviderError::HttpStatus {
                provider: provider_name.to_string(),
                status: status.as_u16(),
                detail: truncate_for_log(&body),
            });
        }

        // Read response body
        let response_text = response.text().await.map_err(|e| {
            let e = e.without_url();
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: format!("Timed out reading response body: {e}"),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: format!("Failed to read response body: {e}"),
                }
            }
        })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok(response_text)
    }

    /// Parse XML response
    ///
    /// # Type Parameters
    /// * `T` - target wire type
    ///
    /// # Arguments
    /// * `response_text` - XML text
    /// * `provider_name` - Provider name (used for error messages)
    ///
    /// # Returns
    /// * `Ok(T)` - successfully decoded
    /// * `Err(ProviderError::MalformedResponse)` - not XML, or not the expected shape
    pub fn parse_xml<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        quick_xml::de::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] XML decode failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::MalformedResponse {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}
