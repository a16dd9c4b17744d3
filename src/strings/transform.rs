use std::ops::Range;

use super::search::find_from;
use super::{is_word_separator, normalize_for_search, to_byte, MAX_OUTPUT_SIZE, NOT_FOUND};

/// Returns its argument unchanged. Scripts use it to check the bridge.
pub fn echo(source: &[u8]) -> Vec<u8> {
    source.to_vec()
}

/// Clamps `start_index` into `[0, len]` first, then limits `count` to what
/// remains after that start. `None` means there is nothing to address.
fn clamp_range(len: usize, start_index: i64, count: i64) -> Option<Range<usize>> {
    if len == 0 || count <= 0 {
        return None;
    }
    let start = usize::try_from(start_index.max(0))
        .unwrap_or(usize::MAX)
        .min(len);
    let count = usize::try_from(count).unwrap_or(usize::MAX).min(len - start);
    Some(start..start + count)
}

fn splice(source: &[u8], range: Range<usize>, replacement: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(source.len() - range.len() + replacement.len());
    out.extend_from_slice(&source[..range.start]);
    out.extend_from_slice(replacement);
    out.extend_from_slice(&source[range.end..]);
    out
}

/// Up to `count` bytes from `start_index`, preserving the original case.
pub fn substring(source: &[u8], start_index: i64, count: i64) -> Vec<u8> {
    clamp_range(source.len(), start_index, count)
        .map(|range| source[range].to_vec())
        .unwrap_or_default()
}

pub fn char_at(source: &[u8], start_index: i64) -> Vec<u8> {
    substring(source, start_index, 1)
}

/// Character code of the first byte, or `NOT_FOUND` for empty text.
pub fn to_ordinal(source: &[u8]) -> i64 {
    source.first().map_or(NOT_FOUND, |&byte| i64::from(byte))
}

pub fn ordinal_at(source: &[u8], start_index: i64) -> i64 {
    to_ordinal(&char_at(source, start_index))
}

/// One-byte text for ordinals in `0..=255`, empty text otherwise.
pub fn to_char(ordinal: i64) -> Vec<u8> {
    to_byte(ordinal).map(|byte| vec![byte]).unwrap_or_default()
}

/// Replaces the first case-insensitive match of `needle`.
///
/// The match is located in the lowercase copy but the splice happens in the
/// original, so text around the match keeps its case and `replacement` is
/// inserted exactly as given.
pub fn replace(source: &[u8], needle: &[u8], replacement: &[u8]) -> Vec<u8> {
    if source.is_empty() || needle.is_empty() {
        return source.to_vec();
    }
    let haystack = normalize_for_search(source);
    let needle = normalize_for_search(needle);
    match find_from(&haystack, &needle, 0) {
        Some(pos) => splice(source, pos..pos + needle.len(), replacement),
        None => source.to_vec(),
    }
}

/// Replaces every case-insensitive match, scanning left to right.
///
/// Scanning resumes right after each inserted replacement, so inserted text
/// is never searched again and matches never overlap.
pub fn replace_all(source: &[u8], needle: &[u8], replacement: &[u8]) -> Vec<u8> {
    if source.is_empty() || needle.is_empty() {
        return source.to_vec();
    }
    let haystack = normalize_for_search(source);
    let needle = normalize_for_search(needle);

    let mut out = Vec::with_capacity(source.len());
    let mut cursor = 0;
    while let Some(pos) = find_from(&haystack, &needle, cursor) {
        out.extend_from_slice(&source[cursor..pos]);
        out.extend_from_slice(replacement);
        cursor = pos + needle.len();
    }
    out.extend_from_slice(&source[cursor..]);
    out
}

/// Deletes up to `count` bytes at `start_index` and inserts `replacement`
/// there, using the same clamping as [`substring`].
pub fn replace_index(source: &[u8], start_index: i64, count: i64, replacement: &[u8]) -> Vec<u8> {
    match clamp_range(source.len(), start_index, count) {
        Some(range) => splice(source, range, replacement),
        None => source.to_vec(),
    }
}

pub fn remove(source: &[u8], target: &[u8]) -> Vec<u8> {
    replace(source, target, b"")
}

pub fn remove_all(source: &[u8], target: &[u8]) -> Vec<u8> {
    replace_all(source, target, b"")
}

pub fn reverse(source: &[u8]) -> Vec<u8> {
    source.iter().rev().copied().collect()
}

/// `source` concatenated `count` times.
///
/// Returns empty text instead of allocating when the source length, the
/// count or the total exceeds [`MAX_OUTPUT_SIZE`].
pub fn repeat(source: &[u8], count: i64) -> Vec<u8> {
    if count <= 0 || source.is_empty() {
        return Vec::new();
    }
    let times = usize::try_from(count).unwrap_or(usize::MAX);
    if source.len() > MAX_OUTPUT_SIZE || times > MAX_OUTPUT_SIZE {
        return Vec::new();
    }
    match source.len().checked_mul(times) {
        Some(total) if total <= MAX_OUTPUT_SIZE => source.repeat(times),
        _ => Vec::new(),
    }
}

/// Uppercases the first letter of every word and lowercases the rest.
/// Any non-letter byte ends a word.
pub fn to_title_case(source: &[u8]) -> Vec<u8> {
    let mut capitalize_next = true;
    source
        .iter()
        .map(|&byte| {
            if is_word_separator(byte) {
                capitalize_next = true;
                byte
            } else if capitalize_next {
                capitalize_next = false;
                byte.to_ascii_uppercase()
            } else {
                byte.to_ascii_lowercase()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_returns_input() {
        assert_eq!(echo(b"Same Text"), b"Same Text");
        assert_eq!(echo(b""), b"");
    }

    #[test]
    fn test_substring_clamping() {
        assert_eq!(substring(b"hello", 1, 3), b"ell");
        assert_eq!(substring(b"hello", -5, 100), b"hello");
        assert_eq!(substring(b"hello", 10, 5), b"");
        assert_eq!(substring(b"hello", 3, 100), b"lo");
        assert_eq!(substring(b"hello", 0, 0), b"");
        assert_eq!(substring(b"hello", 0, -1), b"");
        assert_eq!(substring(b"", 0, 3), b"");
        assert_eq!(substring(b"HeLLo", 0, 3), b"HeL");
        assert_eq!(substring(b"hello", i64::MIN, i64::MAX), b"hello");
        assert_eq!(substring(b"hello", i64::MAX, i64::MAX), b"");
    }

    #[test]
    fn test_char_at_and_ordinals() {
        assert_eq!(char_at(b"abc", 1), b"b");
        assert_eq!(char_at(b"abc", -3), b"a");
        assert_eq!(char_at(b"abc", 3), b"");
        assert_eq!(to_ordinal(b"A"), 65);
        assert_eq!(to_ordinal(b"abc"), 97);
        assert_eq!(to_ordinal(&[0xFF]), 255);
        assert_eq!(to_ordinal(b""), NOT_FOUND);
        assert_eq!(ordinal_at(b"abc", 2), 99);
        assert_eq!(ordinal_at(b"abc", 3), NOT_FOUND);
        assert_eq!(ordinal_at(b"", 0), NOT_FOUND);
        // negative starts clamp to the first byte
        assert_eq!(ordinal_at(b"abc", -1), 97);
    }

    #[test]
    fn test_to_char_range() {
        assert_eq!(to_char(65), b"A");
        assert_eq!(to_char(0), vec![0u8]);
        assert_eq!(to_char(255), vec![255u8]);
        assert_eq!(to_char(256), b"");
        assert_eq!(to_char(-1), b"");
    }

    #[test]
    fn test_replace_first_match_only() {
        assert_eq!(replace(b"Hello World", b"WORLD", b"There"), b"Hello There");
        assert_eq!(replace(b"aAaA", b"a", b"b"), b"bAaA");
        assert_eq!(replace(b"abc", b"x", b"y"), b"abc");
        assert_eq!(replace(b"", b"a", b"b"), b"");
        assert_eq!(replace(b"abc", b"", b"y"), b"abc");
        assert_eq!(replace(b"abc", b"B", b""), b"ac");
    }

    #[test]
    fn test_replace_all_keeps_replacement_casing() {
        assert_eq!(replace_all(b"aAaA", b"a", b"b"), b"bbbb");
        assert_eq!(replace_all(b"Cat cAT dog", b"cat", b"Dog"), b"Dog Dog dog");
        assert_eq!(replace_all(b"abc", b"", b"x"), b"abc");
        assert_eq!(replace_all(b"", b"a", b"x"), b"");
    }

    #[test]
    fn test_replace_all_does_not_rescan_inserted_text() {
        assert_eq!(replace_all(b"aaa", b"a", b"aa"), b"aaaaaa");
        assert_eq!(replace_all(b"xax", b"x", b"xx"), b"xxaxx");
        assert_eq!(replace_all(b"aaaa", b"aa", b"b"), b"bb");
        assert_eq!(replace_all(b"aaa", b"aa", b"b"), b"ba");
    }

    #[test]
    fn test_replace_index_splices() {
        assert_eq!(replace_index(b"Hello World", 6, 5, b"There"), b"Hello There");
        assert_eq!(replace_index(b"abc", -2, 1, b"X"), b"Xbc");
        assert_eq!(replace_index(b"abc", 10, 1, b"X"), b"abcX");
        assert_eq!(replace_index(b"abc", 1, 100, b""), b"a");
        assert_eq!(replace_index(b"abc", 1, 0, b"X"), b"abc");
        assert_eq!(replace_index(b"", 0, 1, b"X"), b"");
    }

    #[test]
    fn test_remove_variants() {
        assert_eq!(remove(b"Mississippi", b"SS"), b"Miissippi");
        assert_eq!(remove_all(b"Mississippi", b"SS"), b"Miiippi");
        assert_eq!(remove_all(b"aabb", b"ab"), b"ab");
        assert_eq!(remove(b"abc", b""), b"abc");
        assert_eq!(remove_all(b"", b"a"), b"");
    }

    #[test]
    fn test_reverse() {
        assert_eq!(reverse(b"abc"), b"cba");
        assert_eq!(reverse(b""), b"");
        assert_eq!(reverse(&[1, 2, 255]), vec![255u8, 2, 1]);
    }

    #[test]
    fn test_repeat_bounds() {
        assert_eq!(repeat(b"ab", 3), b"ababab");
        assert_eq!(repeat(b"x", 0), b"");
        assert_eq!(repeat(b"x", -2), b"");
        assert_eq!(repeat(b"", 5), b"");
        assert_eq!(repeat(b"x", MAX_OUTPUT_SIZE as i64).len(), MAX_OUTPUT_SIZE);
        assert_eq!(repeat(b"x", MAX_OUTPUT_SIZE as i64 + 1), b"");
        assert_eq!(repeat(b"ab", (MAX_OUTPUT_SIZE / 2) as i64 + 1), b"");
        assert_eq!(repeat(b"ab", i64::MAX), b"");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(to_title_case(b"hello world"), b"Hello World");
        assert_eq!(to_title_case(b"hELLO wORLD"), b"Hello World");
        assert_eq!(to_title_case(b"it's a-test"), b"It'S A-Test");
        assert_eq!(to_title_case(b"abc123def"), b"Abc123Def");
        assert_eq!(to_title_case(b""), b"");
    }
}
