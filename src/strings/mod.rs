//! Byte-oriented string utilities exposed to scripts.
//!
//! Every function here is pure: text values are treated as sequences of
//! 8-bit character codes, and degenerate input always produces a documented
//! fallback (`NOT_FOUND`, empty text, or the input unchanged) instead of an
//! error. Searching and comparison run against a lowercase copy of the text;
//! anything handed back to the caller is cut from the original bytes.

mod classify;
mod collection;
mod search;
mod transform;
mod trim;

pub use classify::{
    is_all_of, is_alpha, is_alpha_numeric, is_ascii, is_control, is_digit, is_graph, is_hex,
    is_printable, is_punctuation, is_whitespace, is_word_separator, normalize_for_search,
};
pub use collection::{join, ordinal_join, ordinal_split, sort, split};
pub use search::{
    compare, compare_ordering, contains, ends_with, equals, is_empty, length, search,
    search_index, search_index_reverse, search_reverse, starts_with,
};
pub use transform::{
    char_at, echo, ordinal_at, remove, remove_all, repeat, replace, replace_all, replace_index,
    reverse, substring, to_char, to_ordinal, to_title_case,
};
pub use trim::{trim_both, trim_end, trim_start};

/// Returned by search and ordinal functions when there is no answer.
pub const NOT_FOUND: i64 = -1;

/// Bytes removed by the trim family.
pub const WHITESPACE_CHARS: &[u8] = b" \t\n\r";

pub const UPPER_BOUND_ASCII: u8 = 127;
pub const UPPER_BOUND_EXTENDED_ASCII: i64 = 255;

/// Upper bound on the size of a repeated string (16 MiB).
pub const MAX_OUTPUT_SIZE: usize = 1024 * 1024 * 16;

/// Converts a byte offset into the host integer type.
fn to_index(offset: usize) -> i64 {
    i64::try_from(offset).unwrap_or(i64::MAX)
}

/// Narrows a character code to a byte, `None` outside `0..=UPPER_BOUND_EXTENDED_ASCII`.
fn to_byte(ordinal: i64) -> Option<u8> {
    if (0..=UPPER_BOUND_EXTENDED_ASCII).contains(&ordinal) {
        u8::try_from(ordinal).ok()
    } else {
        None
    }
}
