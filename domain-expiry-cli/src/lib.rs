//! Command-line front end of the domain expiry checker.
//!
//! Two binaries share this library:
//! - `check-domains`: print the domains expiring within the threshold
//! - `seal-credentials`: turn plaintext credential JSON into a sealed vault
//!
//! Configuration is read from `DOMAIN_EXPIRY_*` environment variables
//! (see [`settings`]); neither binary takes arguments.

pub mod adapters;
pub mod logging;
pub mod settings;
