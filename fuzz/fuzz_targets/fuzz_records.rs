#![no_main]

use libfuzzer_sys::fuzz_target;
use netcodec::codec::{integer, port};
use netcodec::{ByteOrder, Endpoint};

fuzz_target!(|data: &[u8]| {
    // Fixed-width decoders must reject every width but their own, never panic
    let _ = port::decode(data);
    let _ = Endpoint::from_bytes(data);
    let _ = integer::decode_u32(data, ByteOrder::Big);
    let _ = integer::decode_u32(data, ByteOrder::Little);
    let _ = integer::decode_u64(data, ByteOrder::Big);
    let _ = integer::decode_u64(data, ByteOrder::Little);
});
