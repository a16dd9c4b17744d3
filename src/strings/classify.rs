use super::UPPER_BOUND_ASCII;

/// Lowercase copy used by every case-insensitive search and comparison.
/// Only `A-Z` fold; bytes above 127 pass through untouched.
pub fn normalize_for_search(text: &[u8]) -> Vec<u8> {
    text.to_ascii_lowercase()
}

/// Anything that is not a letter starts a new word for title casing.
pub fn is_word_separator(byte: u8) -> bool {
    !byte.is_ascii_alphabetic()
}

/// True when every byte passes `check`. Empty text satisfies no class.
pub fn is_all_of<F>(text: &[u8], check: F) -> bool
where
    F: Fn(u8) -> bool,
{
    !text.is_empty() && text.iter().all(|&byte| check(byte))
}

pub fn is_alpha(text: &[u8]) -> bool {
    is_all_of(text, |b| b.is_ascii_alphabetic())
}

pub fn is_digit(text: &[u8]) -> bool {
    is_all_of(text, |b| b.is_ascii_digit())
}

pub fn is_hex(text: &[u8]) -> bool {
    is_all_of(text, |b| b.is_ascii_hexdigit())
}

pub fn is_alpha_numeric(text: &[u8]) -> bool {
    is_all_of(text, |b| b.is_ascii_alphanumeric())
}

/// Space, tab, newline, vertical tab, form feed and carriage return.
pub fn is_whitespace(text: &[u8]) -> bool {
    // u8::is_ascii_whitespace leaves out vertical tab
    is_all_of(text, |b| b.is_ascii_whitespace() || b == 0x0b)
}

pub fn is_punctuation(text: &[u8]) -> bool {
    is_all_of(text, |b| b.is_ascii_punctuation())
}

pub fn is_ascii(text: &[u8]) -> bool {
    is_all_of(text, |b| b <= UPPER_BOUND_ASCII)
}

pub fn is_control(text: &[u8]) -> bool {
    is_all_of(text, |b| b.is_ascii_control())
}

/// Graphical characters plus the space.
pub fn is_printable(text: &[u8]) -> bool {
    is_all_of(text, |b| b.is_ascii_graphic() || b == b' ')
}

pub fn is_graph(text: &[u8]) -> bool {
    is_all_of(text, |b| b.is_ascii_graphic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_only_folds_ascii_letters() {
        assert_eq!(normalize_for_search(b"HeLLo 123"), b"hello 123");
        assert_eq!(normalize_for_search(&[0xC9, b'A']), vec![0xC9, b'a']);
        assert_eq!(normalize_for_search(b""), b"");
    }

    #[test]
    fn test_word_separators() {
        assert!(is_word_separator(b' '));
        assert!(is_word_separator(b'-'));
        assert!(is_word_separator(b'7'));
        assert!(is_word_separator(0xE9));
        assert!(!is_word_separator(b'q'));
        assert!(!is_word_separator(b'Q'));
    }

    #[test]
    fn test_empty_text_fails_every_class() {
        let checks: [fn(&[u8]) -> bool; 10] = [
            is_alpha,
            is_digit,
            is_hex,
            is_alpha_numeric,
            is_whitespace,
            is_punctuation,
            is_ascii,
            is_control,
            is_printable,
            is_graph,
        ];
        for check in checks {
            assert!(!check(b""));
        }
    }

    #[test]
    fn test_letter_and_digit_classes() {
        assert!(is_alpha(b"Hello"));
        assert!(!is_alpha(b"Hello!"));
        assert!(is_digit(b"0123456789"));
        assert!(!is_digit(b"12a"));
        assert!(is_hex(b"DEADbeef09"));
        assert!(!is_hex(b"0xFF"));
        assert!(is_alpha_numeric(b"abc123"));
        assert!(!is_alpha_numeric(b"abc 123"));
    }

    #[test]
    fn test_whitespace_includes_vertical_tab() {
        assert!(is_whitespace(b" \t\n\r\x0b\x0c"));
        assert!(!is_whitespace(b" x "));
    }

    #[test]
    fn test_symbol_classes() {
        assert!(is_punctuation(b"!?.,;:"));
        assert!(!is_punctuation(b"! "));
        assert!(is_control(b"\x00\x1f\x7f"));
        assert!(!is_control(b"\x00a"));
        assert!(is_printable(b"Hello, World!"));
        assert!(!is_printable(b"tab\there"));
        assert!(is_graph(b"Hello,World!"));
        assert!(!is_graph(b"Hello World"));
    }

    #[test]
    fn test_extended_bytes() {
        assert!(is_ascii(b"plain\x7f"));
        assert!(!is_ascii(&[b'a', 0x80]));
        assert!(!is_alpha(&[0xE9]));
        assert!(!is_printable(&[0xA0]));
        assert!(!is_graph(&[0xFF]));
    }
}
