#![no_main]

use libfuzzer_sys::fuzz_target;
use quill_types::Fixed64;

// Parsing arbitrary text never panics, and anything it accepts formats back
// to a string that parses to the same amount.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(amount) = Fixed64::parse(text) {
        assert!(amount.raw() >= 0, "parsed amounts are never negative");
        let reparsed = Fixed64::parse(&amount.format()).expect("formatted amount must parse");
        assert_eq!(reparsed, amount);
    }
});
