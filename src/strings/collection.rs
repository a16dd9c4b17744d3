use super::search::find_from;
use super::{compare_ordering, to_byte};

/// Concatenates the present elements of `parts` with `delimiter` between
/// neighbours. Absent elements are skipped entirely, delimiter included.
pub fn join<T: AsRef<[u8]>>(parts: &[Option<T>], delimiter: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    for (i, part) in parts.iter().flatten().enumerate() {
        if i > 0 {
            out.extend_from_slice(delimiter);
        }
        out.extend_from_slice(part.as_ref());
    }
    out
}

/// Splits on exact (case-sensitive) occurrences of `delimiter`.
///
/// An empty delimiter yields one single-byte token per byte. Otherwise the
/// tail after the last delimiter is always emitted, even when empty, so
/// `n` delimiters always give `n + 1` tokens.
pub fn split(source: &[u8], delimiter: &[u8]) -> Vec<Vec<u8>> {
    if delimiter.is_empty() {
        return source.iter().map(|&byte| vec![byte]).collect();
    }

    let mut tokens = Vec::new();
    let mut start = 0;
    while let Some(pos) = find_from(source, delimiter, start) {
        tokens.push(source[start..pos].to_vec());
        start = pos + delimiter.len();
    }
    tokens.push(source[start..].to_vec());
    tokens
}

/// Builds text from character codes, skipping anything outside `0..=255`.
pub fn ordinal_join(ordinals: &[i64]) -> Vec<u8> {
    ordinals
        .iter()
        .copied()
        .filter_map(to_byte)
        .collect()
}

pub fn ordinal_split(source: &[u8]) -> Vec<i64> {
    source.iter().map(|&byte| i64::from(byte)).collect()
}

/// Orders `parts` case-insensitively.
pub fn sort<T: AsRef<[u8]>>(mut parts: Vec<T>) -> Vec<T> {
    parts.sort_by(|a, b| compare_ordering(a.as_ref(), b.as_ref()));
    parts
}
