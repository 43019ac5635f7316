//! Utility modules.

/// Date helpers for the registrar's `MM/DD/YYYY` date strings.
pub mod datetime;

/// Log sanitization utilities to prevent sensitive data exposure.
pub mod log_sanitizer;
