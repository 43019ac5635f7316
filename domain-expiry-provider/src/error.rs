use serde::{Deserialize, Serialize};

/// Coarse category of a structured error returned by the registrar API.
///
/// Registrars report failures as numeric codes; the provider's error mapper
/// sorts the codes it knows into these buckets so callers can pick a log
/// level or an operator hint without knowing every code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RegistrarErrorKind {
    /// API user, API key or username rejected.
    Authentication,
    /// The calling IP is not whitelisted, or is disabled.
    AccessDenied,
    /// A required request parameter was missing or malformed.
    InvalidRequest,
    /// Code not (yet) mapped.
    Unknown,
}

impl std::fmt::Display for RegistrarErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Authentication => write!(f, "authentication"),
            Self::AccessDenied => write!(f, "access denied"),
            Self::InvalidRequest => write!(f, "invalid request"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Unified error type for all registrar operations.
///
/// Each variant includes a `provider` field identifying which registrar produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// # Transport Errors
///
/// [`NetworkError`](Self::NetworkError), [`Timeout`](Self::Timeout) and
/// [`HttpStatus`](Self::HttpStatus) form the transport group (see
/// [`is_transport`](Self::is_transport)). None of them are retried.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The registrar answered with a non-2xx HTTP status.
    HttpStatus {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status code.
        status: u16,
        /// Truncated response body.
        detail: String,
    },

    /// The registrar API returned a structured error element.
    Registrar {
        /// Provider that produced the error.
        provider: String,
        /// Category derived from the code.
        kind: RegistrarErrorKind,
        /// Raw registrar error code (Namecheap's `Number` attribute), if present.
        raw_code: Option<String>,
        /// Error text reported by the registrar.
        message: String,
    },

    /// The response body could not be decoded, or lacks an expected element.
    MalformedResponse {
        /// Provider that produced the error.
        provider: String,
        /// Details about the decode failure.
        detail: String,
    },

    /// The provider could not be constructed from the given options.
    InvalidConfiguration {
        /// Provider that produced the error.
        provider: String,
        /// Description of what's wrong.
        detail: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（凭证错误、IP 未加白名单等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Registrar {
                kind: RegistrarErrorKind::Authentication
                    | RegistrarErrorKind::AccessDenied
                    | RegistrarErrorKind::InvalidRequest,
                ..
            } | Self::InvalidConfiguration { .. }
        )
    }

    /// Whether the error happened below the registrar protocol (network, timeout, HTTP status).
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::Timeout { .. } | Self::HttpStatus { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::HttpStatus {
                provider, status, ..
            } => {
                write!(f, "[{provider}] Unexpected HTTP status {status}")
            }
            Self::Registrar {
                provider,
                raw_code,
                message,
                ..
            } => {
                if let Some(code) = raw_code {
                    write!(f, "[{provider}] Registrar error {code}: {message}")
                } else {
                    write!(f, "[{provider}] Registrar error: {message}")
                }
            }
            Self::MalformedResponse { provider, detail } => {
                write!(f, "[{provider}] Malformed response: {detail}")
            }
            Self::InvalidConfiguration { provider, detail } => {
                write!(f, "[{provider}] Invalid configuration: {detail}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
