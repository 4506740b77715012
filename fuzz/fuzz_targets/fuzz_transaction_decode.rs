#![no_main]

use libfuzzer_sys::fuzz_target;
use quill_transactions::validation::{validate_structure, verify_programs};
use quill_transactions::Transaction;

// Decoding arbitrary bytes never panics; whatever decodes can be validated,
// hashed and re-encoded without panicking.
fuzz_target!(|data: &[u8]| {
    let Ok(tx) = Transaction::from_bytes(data) else {
        return;
    };
    let _ = validate_structure(&tx);
    let _ = verify_programs(&tx);
    let _ = tx.hash();

    let encoded = tx.to_bytes().expect("decoded transaction must re-encode");
    let decoded = Transaction::from_bytes(&encoded).expect("re-encoded transaction must decode");
    assert_eq!(decoded, tx);
});
