use super::WHITESPACE_CHARS;

fn is_trimmable(byte: &u8) -> bool {
    WHITESPACE_CHARS.contains(byte)
}

pub fn trim_start(source: &[u8]) -> Vec<u8> {
    match source.iter().position(|b| !is_trimmable(b)) {
        Some(start) => source[start..].to_vec(),
        None => Vec::new(),
    }
}

pub fn trim_end(source: &[u8]) -> Vec<u8> {
    match source.iter().rposition(|b| !is_trimmable(b)) {
        Some(end) => source[..=end].to_vec(),
        None => Vec::new(),
    }
}

pub fn trim_both(source: &[u8]) -> Vec<u8> {
    let start = source.iter().position(|b| !is_trimmable(b));
    let end = source.iter().rposition(|b| !is_trimmable(b));
    match (start, end) {
        (Some(start), Some(end)) => source[start..=end].to_vec(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_start() {
        assert_eq!(trim_start(b" \t\r\nabc "), b"abc ");
        assert_eq!(trim_start(b"abc"), b"abc");
        assert_eq!(trim_start(b" \n "), b"");
        assert_eq!(trim_start(b""), b"");
    }

    #[test]
    fn test_trim_end() {
        assert_eq!(trim_end(b" abc \t\r\n"), b" abc");
        assert_eq!(trim_end(b"\r\n"), b"");
        assert_eq!(trim_end(b""), b"");
    }

    #[test]
    fn test_trim_both() {
        assert_eq!(trim_both(b"  hello world \n"), b"hello world");
        assert_eq!(trim_both(b"\t\t"), b"");
        assert_eq!(trim_both(b"x"), b"x");
        assert_eq!(trim_both(b""), b"");
    }

    #[test]
    fn test_only_four_bytes_are_trimmed() {
        // vertical tab, form feed and NBSP survive
        assert_eq!(trim_both(b"\x0bx\x0c"), b"\x0bx\x0c");
        assert_eq!(trim_both(&[0xA0, b'x', 0xA0]), vec![0xA0, b'x', 0xA0]);
    }
}
