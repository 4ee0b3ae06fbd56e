use std::collections::HashSet;

use crate::schemas::Record;

/// Structural identity of a post: message text plus publication timestamp.
/// Absent fields are part of the key, so two posts without a message but
/// with the same timestamp collapse into one.
type DedupKey<'a> = (Option<&'a str>, Option<&'a str>);

fn dedup_key(record: &Record) -> DedupKey<'_> {
    (
        record.status_message.as_deref(),
        record.status_published.as_deref(),
    )
}

/// Keeps the first occurrence of every (message, published) pair in rank order.
/// Identifiers are ignored because the service may index one post twice under
/// different ids.
pub fn dedup_records(records: &[Record]) -> Vec<Record> {
    let mut seen: HashSet<DedupKey<'_>> = HashSet::with_capacity(records.len());

    records
        .iter()
        .filter(|record| seen.insert(dedup_key(*record)))
        .cloned()
        .collect()
}
