use std::ops::RangeInclusive;

use crate::schemas::{FilterCriteria, SearchMode, SearchRequest};

/// Advisory bounds for the result-count limit. Shown as a hint, never enforced.
pub const LIMIT_HINT: RangeInclusive<i64> = 1..=100;

pub const DEFAULT_LIMIT: i64 = 10;

/// Builds a fresh request. An empty query is a valid "browse all" request and
/// the limit is forwarded as given, even outside [`LIMIT_HINT`].
pub fn compose_request(
    query: &str,
    mode: SearchMode,
    limit: Option<i64>,
    filters: &FilterCriteria,
) -> SearchRequest {
    SearchRequest {
        query: query.to_string(),
        search_type: mode,
        size: limit,
        filters: filters.clone(),
    }
}

pub fn limit_within_hint(limit: Option<i64>) -> bool {
    limit.is_none_or(|value| LIMIT_HINT.contains(&value))
}
