//! 注册商日期格式工具
//!
//! Namecheap reports `Created` / `Expires` attributes as `MM/DD/YYYY`
//! calendar dates without a time zone.

use chrono::NaiveDate;

/// `chrono` format string for registrar dates.
pub const REGISTRAR_DATE_FORMAT: &str = "%m/%d/%Y";

/// Parse a registrar date such as `"03/15/2025"`.
///
/// Surrounding whitespace is ignored.
pub fn parse_registrar_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), REGISTRAR_DATE_FORMAT)
}

/// Format a date back into the registrar's `MM/DD/YYYY` form.
pub fn format_registrar_date(date: NaiveDate) -> String {
    date.format(REGISTRAR_DATE_FORMAT).to_string()
}
