#![no_main]

use libfuzzer_sys::fuzz_target;
use strutil::strings;

// Input layout: source, needle and replacement separated by 0xFF.
fuzz_target!(|data: &[u8]| {
    let mut fields = data.splitn(3, |&b| b == 0xFF);
    let source = fields.next().unwrap_or_default();
    let needle = fields.next().unwrap_or_default();
    let replacement = fields.next().unwrap_or_default();

    let replaced = strings::replace_all(source, needle, replacement);
    if needle.is_empty() || !strings::contains(source, needle) {
        assert_eq!(replaced, source);
    }

    let removed = strings::remove_all(source, needle);
    assert!(removed.len() <= source.len());
});
