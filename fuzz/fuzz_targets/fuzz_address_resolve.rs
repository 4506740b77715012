#![no_main]

use libfuzzer_sys::fuzz_target;
use quill_types::ProgramHash;

fuzz_target!(|data: &[u8]| {
    // Arbitrary text: resolving must not panic, and any accepted address
    // must be the canonical encoding of what it resolves to.
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(hash) = quill_crypto::resolve_address(text) {
            assert_eq!(quill_crypto::encode_address(&hash).as_str(), text);
        }
    }

    // Any 20 bytes: encoding then resolving is the identity.
    if data.len() >= 20 {
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&data[..20]);
        let hash = ProgramHash::new(bytes);
        let address = quill_crypto::encode_address(&hash);
        assert_eq!(quill_crypto::resolve_address(address.as_str()), Ok(hash));
    }
});
