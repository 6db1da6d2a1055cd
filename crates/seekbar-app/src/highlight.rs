// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Literal, case-insensitive keyword matching.
//!
//! Queries are compared character by character after lowercase folding, so
//! punctuation such as `.`, `(` or `*` in a query is just text.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub emphasized: bool,
}

impl<'a> Segment<'a> {
    pub const fn plain(text: &'a str) -> Self {
        Self {
            text,
            emphasized: false,
        }
    }

    pub const fn emphasized(text: &'a str) -> Self {
        Self {
            text,
            emphasized: true,
        }
    }
}

/// Splits `text` into plain and emphasised segments, emphasising every
/// case-insensitive occurrence of `query`. Joining the segments yields `text`.
pub fn highlight<'a>(text: &'a str, query: &str) -> Vec<Segment<'a>> {
    if text.is_empty() || query.is_empty() {
        return vec![Segment::plain(text)];
    }

    let mut segments = Vec::new();
    let mut cursor = 0;
    for range in find_ignore_case(text, query) {
        if range.start > cursor {
            segments.push(Segment::plain(&text[cursor..range.start]));
        }
        segments.push(Segment::emphasized(&text[range.clone()]));
        cursor = range.end;
    }
    if cursor < text.len() || segments.is_empty() {
        segments.push(Segment::plain(&text[cursor..]));
    }
    segments
}

pub fn contains_ignore_case(text: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    !find_ignore_case(text, query).is_empty()
}

/// Byte ranges of non-overlapping matches, left to right.
pub fn find_ignore_case(text: &str, query: &str) -> Vec<Range<usize>> {
    let needle = query.chars().flat_map(char::to_lowercase).collect::<Vec<_>>();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut start = 0;
    while start < text.len() {
        if let Some(len) = folded_prefix_len(&text[start..], &needle) {
            ranges.push(start..start + len);
            start += len;
        } else {
            let step = text[start..].chars().next().map_or(1, char::len_utf8);
            start += step;
        }
    }
    ranges
}

fn folded_prefix_len(haystack: &str, needle: &[char]) -> Option<usize> {
    let mut remaining = needle;
    for (offset, ch) in haystack.char_indices() {
        for folded in ch.to_lowercase() {
            match remaining.split_first() {
                Some((expected, rest)) if *expected == folded => remaining = rest,
                _ => return None,
            }
        }
        if remaining.is_empty() {
            return Some(offset + ch.len_utf8());
        }
    }
    None
}
