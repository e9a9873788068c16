//! Display date parsing
//!
//! Record dates are display strings such as `"15 Mar 2024"`. They are parsed
//! only to order the admin "recent activity" list.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::error::{Error, Result};

/// chrono format of record display dates (`15 Mar 2024`).
pub const DISPLAY_DATE_FORMAT: &str = "%d %b %Y";

/// Parse a record display date into a calendar date.
pub fn parse_display_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DISPLAY_DATE_FORMAT)
        .map_err(|e| Error::invalid_date(value, e.to_string()))
}

/// Most-recent-first ordering of two optional dates.
///
/// Unparseable dates (`None`) sort after every valid date and compare equal
/// to each other, so a stable sort keeps their input order.
pub fn compare_desc(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
