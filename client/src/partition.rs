//! Result Partitioning
//!
//! Splits a ranked result list into the top match and the remainder. The
//! service's ordering is trusted; nothing here re-sorts.

use fb_common::SearchResult;
use serde::Serialize;

/// Split an ordered sequence into its first element and the rest, order preserved.
pub fn partition<T>(items: Vec<T>) -> (Option<T>, Vec<T>) {
    let mut iter = items.into_iter();
    let head = iter.next();
    (head, iter.collect())
}

/// Explanation shown with the top match: the response-level text, falling
/// back to the top result's own explanation. Empty strings count as absent.
pub fn resolve_explanation(
    response_level: Option<&str>,
    top_match: Option<&SearchResult>,
) -> Option<String> {
    response_level
        .filter(|text| !text.is_empty())
        .or_else(|| {
            top_match
                .and_then(|result| result.explanation.as_deref())
                .filter(|text| !text.is_empty())
        })
        .map(str::to_string)
}

/// A ranked response split into the top match and the secondary list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PartitionedResults {
    pub top_match: Option<SearchResult>,
    pub rest: Vec<SearchResult>,
}

impl PartitionedResults {
    pub fn from_results(results: Vec<SearchResult>) -> Self {
        let (top_match, rest) = partition(results);
        Self { top_match, rest }
    }

    pub const fn is_empty(&self) -> bool {
        self.top_match.is_none()
    }

    /// Size of the secondary list, for the "other matches" header.
    pub fn rest_len(&self) -> usize {
        self.rest.len()
    }

    /// Display percentage of the top match.
    pub fn top_percent(&self) -> Option<u8> {
        self.top_match.as_ref().map(SearchResult::similarity_percent)
    }
}
