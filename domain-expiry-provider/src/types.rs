use std::collections::HashMap;
use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use crate::utils::log_sanitizer::mask_secret;

// ============ Endpoint / Options ============

/// Production Namecheap API base URL.
pub const NAMECHEAP_PRODUCTION_URL: &str = "https://api.namecheap.com";
/// Sandbox Namecheap API base URL.
pub const NAMECHEAP_SANDBOX_URL: &str = "https://api.sandbox.namecheap.com";

/// Which registrar endpoint a provider talks to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "url")]
pub enum RegistrarEndpoint {
    /// Live API.
    #[default]
    Production,
    /// Namecheap sandbox (separate account required).
    Sandbox,
    /// Arbitrary base URL, e.g. a local mock server.
    Custom(String),
}

impl RegistrarEndpoint {
    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        match self {
            Self::Production => NAMECHEAP_PRODUCTION_URL,
            Self::Sandbox => NAMECHEAP_SANDBOX_URL,
            Self::Custom(url) => url.trim_end_matches('/'),
        }
    }
}

/// Connection options used when constructing a provider.
///
/// # Default
///
/// Production endpoint, 10 second connect and request timeouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrarOptions {
    /// Target endpoint.
    pub endpoint: RegistrarEndpoint,
    /// Whole-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// TCP/TLS connect timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for RegistrarOptions {
    fn default() -> Self {
        Self {
            endpoint: RegistrarEndpoint::Production,
            request_timeout_secs: 10,
            connect_timeout_secs: 10,
        }
    }
}

// ============ Credential Types ============

/// Validation error for registrar credentials.
///
/// Returned when credential fields are missing, empty, or have an invalid format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CredentialValidationError {
    /// A required credential field is missing entirely.
    MissingField {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A credential field is present but empty/whitespace-only.
    EmptyField {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A credential field has an invalid format.
    InvalidFormat {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
        /// Description of what's wrong with the format.
        reason: String,
    },
}

impl std::fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { label, .. } => write!(f, "Missing required field: {label}"),
            Self::EmptyField { label, .. } => write!(f, "Field must not be empty: {label}"),
            Self::InvalidFormat { label, reason, .. } => write!(f, "{label}: {reason}"),
        }
    }
}

impl std::error::Error for CredentialValidationError {}

/// Field spec: canonical key, accepted aliases, label.
struct CredentialField {
    key: &'static str,
    aliases: &'static [&'static str],
    label: &'static str,
}

const API_USER: CredentialField = CredentialField {
    key: "api_user",
    aliases: &["ApiUser", "apiUser", "username", "UserName"],
    label: "API User",
};

const API_KEY: CredentialField = CredentialField {
    key: "api_key",
    aliases: &["ApiKey", "apiKey"],
    label: "API Key",
};

const CLIENT_IP: CredentialField = CredentialField {
    key: "client_ip",
    aliases: &["ClientIp", "clientIp"],
    label: "Client IP",
};

/// Namecheap API credentials.
///
/// The account user doubles as `UserName` on every request (the API
/// allows acting on behalf of a sub-user, which this tool never does).
///
/// `Debug` output masks the API key.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamecheapCredentials {
    /// Account user (`ApiUser` / `UserName`).
    pub api_user: String,
    /// API key issued in the Namecheap dashboard.
    pub api_key: String,
    /// Whitelisted IPv4 address of the caller.
    pub client_ip: String,
}

impl std::fmt::Debug for NamecheapCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamecheapCredentials")
            .field("api_user", &self.api_user)
            .field("api_key", &mask_secret(&self.api_key))
            .field("client_ip", &self.client_ip)
            .finish()
    }
}

impl NamecheapCredentials {
    /// Build credentials from a flat key-value map and validate them.
    ///
    /// Keys may use the snake case form (`api_user`) or the API's own
    /// parameter names (`ApiUser`, `ApiKey`, `ClientIp`); `username` is
    /// accepted for the account user.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialValidationError`] if a required field is missing, empty or malformed.
    pub fn from_map(map: &HashMap<String, String>) -> Result<Self, CredentialValidationError> {
        let credentials = Self {
            api_user: Self::get_required_field(map, &API_USER)?,
            api_key: Self::get_required_field(map, &API_KEY)?,
            client_ip: Self::get_required_field(map, &CLIENT_IP)?,
        };
        credentials.validate()?;
        Ok(credentials)
    }

    /// Obtain a required field by key or alias and verify that it is not empty
    fn get_required_field(
        map: &HashMap<String, String>,
        field: &CredentialField,
    ) -> Result<String, CredentialValidationError> {
        let value = std::iter::once(field.key)
            .chain(field.aliases.iter().copied())
            .find_map(|k| map.get(k));

        match value {
            None => Err(CredentialValidationError::MissingField {
                field: field.key.to_string(),
                label: field.label.to_string(),
            }),
            Some(v) if v.trim().is_empty() => Err(CredentialValidationError::EmptyField {
                field: field.key.to_string(),
                label: field.label.to_string(),
            }),
            Some(v) => Ok(v.trim().to_string()),
        }
    }

    /// Check that every field is non-empty and that `client_ip` is an IP address.
    ///
    /// # Errors
    ///
    /// Returns the first [`CredentialValidationError`] found.
    pub fn validate(&self) -> Result<(), CredentialValidationError> {
        for (value, field) in [
            (&self.api_user, &API_USER),
            (&self.api_key, &API_KEY),
            (&self.client_ip, &CLIENT_IP),
        ] {
            if value.trim().is_empty() {
                return Err(CredentialValidationError::EmptyField {
                    field: field.key.to_string(),
                    label: field.label.to_string(),
                });
            }
        }

        if self.client_ip.trim().parse::<IpAddr>().is_err() {
            return Err(CredentialValidationError::InvalidFormat {
                field: CLIENT_IP.key.to_string(),
                label: CLIENT_IP.label.to_string(),
                reason: format!("'{}' is not an IP address", self.client_ip),
            });
        }

        Ok(())
    }
}
