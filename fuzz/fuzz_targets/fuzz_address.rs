#![no_main]

use libfuzzer_sys::fuzz_target;
use netcodec::Ipv4Address;

fuzz_target!(|data: &[u8]| {
    // Fuzz dotted-quad parsing of arbitrary text
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(addr) = s.parse::<Ipv4Address>() {
            // Anything that parses must survive the canonical text cycle
            let canonical = addr.to_string();
            let reparsed: Ipv4Address = canonical.parse().expect("canonical form must parse");
            assert_eq!(reparsed, addr);
        }
    }

    // Fuzz the 4-byte record decoder with arbitrary widths
    let _ = Ipv4Address::from_bytes(data);
});
