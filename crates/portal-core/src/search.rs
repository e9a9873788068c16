//! Search matching
//!
//! A query matches a record when, case-folded, it is a substring of the
//! record's title or description. Dates, urls, images and long-form content
//! are never searched.

use crate::record::Record;

/// True iff `query` (case-folded) occurs in the title or description.
///
/// The empty query matches every record.
pub fn matches(record: &Record, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record.title.to_lowercase().contains(&needle)
        || record.description.to_lowercase().contains(&needle)
}

/// Records matching `query`, in definition order.
pub fn filter<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    records.iter().filter(|r| matches(r, query)).collect()
}
