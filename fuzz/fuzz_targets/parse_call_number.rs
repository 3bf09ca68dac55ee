#![no_main]

use lc_callnum::{FormatStyle, LcCallNumber};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(number) = LcCallNumber::parse(text) else {
        return;
    };

    // The canonical rendering must parse back to an equal call number
    let canonical = number.to_string();
    let reparsed = LcCallNumber::parse(&canonical).expect("canonical rendering parses");
    assert_eq!(reparsed.to_string(), canonical);

    for style in [FormatStyle::compact(), FormatStyle::pocket(), FormatStyle::spine()] {
        let rendered = number.format(&style);
        assert_eq!(rendered.len(), number.formatted_len(&style));
        let mut buf = [0u8; 16];
        assert_eq!(number.format_into(&style, &mut buf), rendered.len());
    }
});
