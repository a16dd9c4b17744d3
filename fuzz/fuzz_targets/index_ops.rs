#![no_main]

use libfuzzer_sys::fuzz_target;
use strutil::strings;

// Exercises every operation taking caller-supplied indices and counts.
fuzz_target!(|input: (Vec<u8>, Vec<u8>, i64, i64)| {
    let (source, needle, start, count) = input;

    let index = strings::search_index(&source, &needle, start);
    assert!(index == strings::NOT_FOUND || (0..=strings::length(&source)).contains(&index));
    let index = strings::search_index_reverse(&source, &needle, start);
    assert!(index == strings::NOT_FOUND || (0..=strings::length(&source)).contains(&index));

    let sub = strings::substring(&source, start, count);
    assert!(sub.len() <= source.len());
    let _ = strings::replace_index(&source, start, count, &needle);
    let _ = strings::char_at(&source, start);
    let _ = strings::ordinal_at(&source, start);
    let _ = strings::to_char(start);

    // keep allocation bounded while still hitting the size guard
    let repeated = strings::repeat(&needle, count % 64);
    assert!(repeated.len() <= strings::MAX_OUTPUT_SIZE);
});
