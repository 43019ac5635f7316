//! Expiry report types.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use domain_expiry_provider::datetime::parse_registrar_date;
use domain_expiry_provider::Domain;
use serde::Serialize;

use crate::error::{CoreError, CoreResult};

/// A domain with its parsed expiration date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainRecord {
    pub name: String,
    pub expires_on: NaiveDate,
}

impl DomainRecord {
    /// Parse the wire element's `Expires` attribute.
    pub fn from_wire(domain: &Domain) -> CoreResult<Self> {
        let expires_on =
            parse_registrar_date(&domain.expires).map_err(|e| CoreError::DateParse {
                domain: domain.name.clone(),
                value: domain.expires.clone(),
                detail: e.to_string(),
            })?;
        Ok(Self {
            name: domain.name.clone(),
            expires_on,
        })
    }

    /// Whole days from `today` until expiry; negative once expired.
    pub fn days_until_expiry(&self, today: NaiveDate) -> i64 {
        (self.expires_on - today).num_days()
    }
}

/// Domains expiring within the threshold, keyed by name.
///
/// Iteration is ordered by name, so rendered output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExpiryReport {
    entries: BTreeMap<String, NaiveDate>,
}

impl ExpiryReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry; the previous date is returned on replace.
    pub fn insert(&mut self, name: impl Into<String>, expires_on: NaiveDate) -> Option<NaiveDate> {
        self.entries.insert(name.into(), expires_on)
    }

    pub fn get(&self, name: &str) -> Option<NaiveDate> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Domain names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Names joined with `", "`; empty string for an empty report.
    pub fn to_line(&self) -> String {
        self.names().collect::<Vec<_>>().join(", ")
    }
}

impl From<BTreeMap<String, NaiveDate>> for ExpiryReport {
    fn from(entries: BTreeMap<String, NaiveDate>) -> Self {
        Self { entries }
    }
}
