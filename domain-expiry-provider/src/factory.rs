//! Provider factory functions.

use std::sync::Arc;

use crate::error::{ProviderError, Result};
use crate::providers::NamecheapProvider;
use crate::providers::namecheap::PROVIDER_NAME;
use crate::traits::RegistrarProvider;
use crate::types::{NamecheapCredentials, RegistrarOptions};

/// Creates a [`RegistrarProvider`] from validated credentials.
///
/// Credentials are checked before any client is built; a validation
/// failure becomes [`ProviderError::InvalidConfiguration`]. The provider is
/// wrapped in `Arc<dyn RegistrarProvider>` so services can hold it without
/// knowing the concrete type.
///
/// # Examples
///
/// ```rust,no_run
/// use domain_expiry_provider::{create_provider, NamecheapCredentials, RegistrarOptions};
///
/// let provider = create_provider(
///     NamecheapCredentials {
///         api_user: "alice".to_string(),
///         api_key: "your-key".to_string(),
///         client_ip: "203.0.113.7".to_string(),
///     },
///     &RegistrarOptions::default(),
/// ).unwrap();
/// assert_eq!(provider.id(), "namecheap");
/// ```
pub fn create_provider(
    credentials: NamecheapCredentials,
    options: &RegistrarOptions,
) -> Result<Arc<dyn RegistrarProvider>> {
    credentials
        .validate()
        .map_err(|e| ProviderError::InvalidConfiguration {
            provider: PROVIDER_NAME.to_string(),
            detail: e.to_string(),
        })?;

    Ok(Arc::new(NamecheapProvider::with_options(
        credentials,
        options,
    )?))
}
