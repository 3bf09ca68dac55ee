#![no_main]

use lc_callnum::LcCallNumber;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Some((left, right)) = text.split_once('\n') else {
        return;
    };
    let (Ok(left), Ok(right)) = (LcCallNumber::parse(left), LcCallNumber::parse(right)) else {
        return;
    };

    assert_eq!(left.cmp(&right), right.cmp(&left).reverse());
    assert!(!(left.includes(&right) && right.includes(&left)));
    assert_eq!(left.equals(&right), left == right);
});
