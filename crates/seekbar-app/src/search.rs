// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::highlight::contains_ignore_case;
use crate::{SearchResult, Tab};

/// A search is active only once the query has non-whitespace content.
pub fn query_is_active(query: &str) -> bool {
    !query.trim().is_empty()
}

pub fn matches_query(result: &SearchResult, query: &str) -> bool {
    contains_ignore_case(result.name(), query)
        || result
            .location()
            .is_some_and(|location| contains_ignore_case(location, query))
}

/// Records admitted by `tab` whose name or location contains `query`, in
/// catalog order. Whitespace-only queries match nothing.
pub fn filter_results<'a>(
    results: &'a [SearchResult],
    tab: Tab,
    query: &str,
) -> Vec<&'a SearchResult> {
    if !query_is_active(query) {
        return Vec::new();
    }
    results
        .iter()
        .filter(|result| matches_query(result, query) && tab.admits(result))
        .collect()
}

/// Badge count for a tab. Chats and lists have no backing records.
pub fn tab_count(results: &[SearchResult], tab: Tab, query: &str) -> usize {
    match tab {
        Tab::All | Tab::Files | Tab::People => filter_results(results, tab, query).len(),
        Tab::Chats | Tab::Lists => 0,
    }
}
