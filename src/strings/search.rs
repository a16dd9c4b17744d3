use std::cmp::Ordering;

use super::{normalize_for_search, to_index, NOT_FOUND};

pub fn length(text: &[u8]) -> i64 {
    to_index(text.len())
}

pub fn is_empty(text: &[u8]) -> bool {
    text.is_empty()
}

/// Byte-wise ordering of the lowercase copies.
pub fn compare_ordering(left: &[u8], right: &[u8]) -> Ordering {
    normalize_for_search(left).cmp(&normalize_for_search(right))
}

/// -1, 0 or 1 depending on how `left` orders against `right`, ignoring case.
pub fn compare(left: &[u8], right: &[u8]) -> i64 {
    match compare_ordering(left, right) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

pub fn equals(left: &[u8], right: &[u8]) -> bool {
    compare(left, right) == 0
}

/// Outcomes fixed by lengths alone, checked in this order: both empty,
/// empty source, empty needle, needle longer than source.
fn trivial_search(source: &[u8], needle: &[u8]) -> Option<i64> {
    match (source.is_empty(), needle.is_empty()) {
        (true, true) => Some(0),
        (true, false) => Some(NOT_FOUND),
        (false, true) => Some(0),
        (false, false) if needle.len() > source.len() => Some(NOT_FOUND),
        (false, false) => None,
    }
}

/// First offset `>= start` where `needle` occurs in `haystack`.
pub(crate) fn find_from(haystack: &[u8], needle: &[u8], start: usize) -> Option<usize> {
    if needle.is_empty() {
        return (start <= haystack.len()).then_some(start);
    }
    haystack
        .get(start..)?
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| start + pos)
}

/// Last offset `<= last` where `needle` occurs in `haystack`.
fn rfind_at_or_before(haystack: &[u8], needle: &[u8], last: usize) -> Option<usize> {
    let latest_start = haystack.len().checked_sub(needle.len())?.min(last);
    (0..=latest_start)
        .rev()
        .find(|&pos| &haystack[pos..pos + needle.len()] == needle)
}

fn found_or_not(position: Option<usize>) -> i64 {
    position.map_or(NOT_FOUND, to_index)
}

/// Zero-based offset of the first case-insensitive occurrence of `needle`.
pub fn search(source: &[u8], needle: &[u8]) -> i64 {
    if let Some(result) = trivial_search(source, needle) {
        return result;
    }
    let source = normalize_for_search(source);
    let needle = normalize_for_search(needle);
    found_or_not(find_from(&source, &needle, 0))
}

/// Zero-based offset of the rightmost case-insensitive occurrence.
pub fn search_reverse(source: &[u8], needle: &[u8]) -> i64 {
    if let Some(result) = trivial_search(source, needle) {
        return result;
    }
    let source = normalize_for_search(source);
    let needle = normalize_for_search(needle);
    found_or_not(rfind_at_or_before(&source, &needle, source.len()))
}

/// Forward search starting at `start_index`. A negative start, or one past
/// the last byte, finds nothing.
pub fn search_index(source: &[u8], needle: &[u8], start_index: i64) -> i64 {
    if let Some(result) = trivial_search(source, needle) {
        return result;
    }
    let start = match usize::try_from(start_index) {
        Ok(start) if start < source.len() => start,
        _ => return NOT_FOUND,
    };
    let source = normalize_for_search(source);
    let needle = normalize_for_search(needle);
    found_or_not(find_from(&source, &needle, start))
}

/// Reverse search for an occurrence starting at or before `start_index`.
///
/// Unlike [`search_index`], a start beyond the end is clamped to the last
/// byte rather than rejected. Negative starts still find nothing.
pub fn search_index_reverse(source: &[u8], needle: &[u8], start_index: i64) -> i64 {
    if let Some(result) = trivial_search(source, needle) {
        return result;
    }
    let Ok(start) = usize::try_from(start_index) else {
        return NOT_FOUND;
    };
    let start = start.min(source.len() - 1);
    let source = normalize_for_search(source);
    let needle = normalize_for_search(needle);
    found_or_not(rfind_at_or_before(&source, &needle, start))
}

pub fn contains(source: &[u8], needle: &[u8]) -> bool {
    search(source, needle) != NOT_FOUND
}

pub fn starts_with(source: &[u8], prefix: &[u8]) -> bool {
    if prefix.is_empty() {
        return true;
    }
    if source.len() < prefix.len() {
        return false;
    }
    source[..prefix.len()].eq_ignore_ascii_case(prefix)
}

pub fn ends_with(source: &[u8], suffix: &[u8]) -> bool {
    if suffix.is_empty() {
        return true;
    }
    if source.len() < suffix.len() {
        return false;
    }
    source[source.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}
