//! # domain-expiry-provider
//!
//! Registrar API client used by the domain expiry checker.
//!
//! ## Supported Registrars
//!
//! | Registrar | API | Auth Method |
//! |-----------|-----|-------------|
//! | [Namecheap](https://www.namecheap.com/support/api/intro/) | XML over HTTPS GET | `ApiUser` + `ApiKey` + whitelisted `ClientIp` |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for static or cross-compiled builds.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use domain_expiry_provider::{
//!     create_provider, NamecheapCredentials, RegistrarEndpoint, RegistrarOptions,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = NamecheapCredentials {
//!         api_user: "alice".to_string(),
//!         api_key: "your-key".to_string(),
//!         client_ip: "203.0.113.7".to_string(),
//!     };
//!     let options = RegistrarOptions {
//!         endpoint: RegistrarEndpoint::Sandbox,
//!         ..RegistrarOptions::default()
//!     };
//!     let provider = create_provider(credentials, &options)?;
//!
//!     let result = provider.list_domains().await?;
//!     for domain in &result.domains {
//!         println!("{} expires {}", domain.name, domain.expires);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::Registrar`] — the API answered with an `<Error>` element
//! - [`ProviderError::MalformedResponse`] — the body is not the expected XML
//! - [`ProviderError::HttpStatus`], [`ProviderError::NetworkError`],
//!   [`ProviderError::Timeout`] — transport failures
//!
//! Requests are sent exactly once; nothing is retried.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, RegistrarErrorKind, Result};

// Re-export factory functions
pub use factory::create_provider;

// Re-export core trait only (internal traits are not exported)
pub use traits::RegistrarProvider;

// Re-export types
pub use types::{
    CredentialValidationError, NAMECHEAP_PRODUCTION_URL, NAMECHEAP_SANDBOX_URL,
    NamecheapCredentials, RegistrarEndpoint, RegistrarOptions,
};

// Wire model of `namecheap.domains.getList`
pub use providers::namecheap::{
    ApiErrorEntry, ApiErrors, ApiRequest, ApiResponse, ApiWarnings, CommandResponse, Domain,
    DomainGetListResult, Paging,
};

// Re-export utils module
pub use utils::{datetime, log_sanitizer};

// Re-export concrete providers
pub use providers::NamecheapProvider;
