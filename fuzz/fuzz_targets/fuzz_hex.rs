#![no_main]

use libfuzzer_sys::fuzz_target;
use netcodec::codec::hex;

fuzz_target!(|data: &[u8]| {
    // Fuzz hex decoding of arbitrary text - test for panics and slice errors
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(bytes) = hex::decode(s) {
            // Anything that decodes must re-encode to an equivalent string
            let reencoded = hex::encode(&bytes);
            assert_eq!(reencoded.to_lowercase(), s.to_lowercase());
        }
        let _ = hex::decode_ascii(s);
    }

    // Encoding is total over all byte input
    let _ = hex::encode(data);
});
