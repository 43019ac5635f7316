//! 到期过滤

use std::collections::BTreeMap;

use chrono::NaiveDate;
use domain_expiry_provider::DomainGetListResult;

use crate::error::CoreResult;
use crate::types::{DomainRecord, ExpiryReport};

/// Default "expires soon" window, in days.
pub const DEFAULT_THRESHOLD_DAYS: i64 = 90;

/// Build the report of domains expiring within `threshold_days` of `today`.
///
/// Every domain's date is parsed before filtering, so one bad `Expires`
/// value fails the whole run. A repeated name keeps its last date. The
/// window is inclusive and already-expired domains qualify.
pub fn filter_expiring(
    result: &DomainGetListResult,
    threshold_days: i64,
    today: NaiveDate,
) -> CoreResult<ExpiryReport> {
    let mut all: BTreeMap<String, DomainRecord> = BTreeMap::new();
    for domain in &result.domains {
        let record = DomainRecord::from_wire(domain)?;
        if let Some(previous) = all.insert(record.name.clone(), record) {
            log::debug!(
                "Duplicate domain {} in result, replacing {}",
                domain.name,
                previous.expires_on
            );
        }
    }

    let report: ExpiryReport = all
        .into_values()
        .filter(|record| record.days_until_expiry(today) <= threshold_days)
        .map(|record| (record.name, record.expires_on))
        .collect::<BTreeMap<_, _>>()
        .into();

    log::debug!(
        "{} of {} domains expire within {threshold_days} days of {today}",
        report.len(),
        result.domains.len()
    );
    Ok(report)
}
