//! Port number codec. The wire record is 2 bytes little-endian (byte 0 is
//! the low byte), independent of the address record's network byte order.

use crate::error::{CodecError, Result};

/// Width of the port wire record in bytes.
pub const WIRE_LEN: usize = 2;

/// Packs a port into its 2-byte little-endian record.
///
/// Takes the port as `u32` so that out-of-range values reach the range check
/// instead of being silently truncated at the call site.
///
/// # Errors
/// Returns `CodecError::OutOfRange` if `port` exceeds 65535.
pub fn encode(port: u32) -> Result<[u8; WIRE_LEN]> {
    let port = u16::try_from(port)
        .map_err(|_| CodecError::OutOfRange(format!("port {port} outside 0-65535")))?;
    Ok(port.to_le_bytes())
}

/// Unpacks a 2-byte little-endian port record.
///
/// # Errors
/// Returns `CodecError::LengthMismatch` unless `bytes` is exactly 2 bytes.
pub fn decode(bytes: &[u8]) -> Result<u16> {
    let record: [u8; WIRE_LEN] = bytes.try_into().map_err(|_| CodecError::LengthMismatch {
        expected: WIRE_LEN,
        actual: bytes.len(),
    })?;
    Ok(u16::from_le_bytes(record))
}
