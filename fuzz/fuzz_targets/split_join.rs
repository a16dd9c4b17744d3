#![no_main]

use libfuzzer_sys::fuzz_target;
use strutil::strings;

fuzz_target!(|data: &[u8]| {
    let Some((&delim_len, rest)) = data.split_first() else {
        return;
    };
    let delim_len = usize::from(delim_len % 4).min(rest.len());
    let (delimiter, source) = rest.split_at(delim_len);

    let parts = strings::split(source, delimiter);
    if !delimiter.is_empty() {
        let joined = strings::join(
            &parts.iter().map(Some).collect::<Vec<_>>(),
            delimiter,
        );
        assert_eq!(joined, source);
    }
    let _ = strings::sort(parts);
});
