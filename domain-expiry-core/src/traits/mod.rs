//! Storage layer abstraction trait definition

mod credential_store;

pub use credential_store::CredentialStore;
