//! # Integer Records
//!
//! Fixed-width integer packing with explicit endianness.
//!
//! Every operation names both the byte width and the byte order; there is no
//! implicit default for either. The earlier generation of this code carried
//! two same-named long codecs with different widths and hardcoded orders —
//! the explicit `encode_u32`/`encode_u64` pairs replace both.

use serde::{Deserialize, Serialize};

use crate::error::{CodecError, Result};

/// Byte order tag carried alongside every integer record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ByteOrder {
    /// Most-significant byte first (network byte order)
    Big,
    /// Least-significant byte first
    Little,
}

impl ByteOrder {
    /// Get human-readable name
    pub fn name(self) -> &'static str {
        match self {
            ByteOrder::Big => "big-endian",
            ByteOrder::Little => "little-endian",
        }
    }
}

/// Packs all 8 bytes of `value` in the requested order. Total, never fails.
pub fn encode_u64(value: u64, order: ByteOrder) -> [u8; 8] {
    match order {
        ByteOrder::Big => value.to_be_bytes(),
        ByteOrder::Little => value.to_le_bytes(),
    }
}

/// Unpacks an 8-byte record in the requested order.
///
/// # Errors
/// Returns `CodecError::LengthMismatch` unless `bytes` is exactly 8 bytes.
pub fn decode_u64(bytes: &[u8], order: ByteOrder) -> Result<u64> {
    let record: [u8; 8] = bytes.try_into().map_err(|_| CodecError::LengthMismatch {
        expected: 8,
        actual: bytes.len(),
    })?;
    Ok(match order {
        ByteOrder::Big => u64::from_be_bytes(record),
        ByteOrder::Little => u64::from_le_bytes(record),
    })
}

/// Packs all 4 bytes of `value` in the requested order. Total, never fails.
pub fn encode_u32(value: u32, order: ByteOrder) -> [u8; 4] {
    match order {
        ByteOrder::Big => value.to_be_bytes(),
        ByteOrder::Little => value.to_le_bytes(),
    }
}

/// Unpacks a 4-byte record in the requested order.
///
/// # Errors
/// Returns `CodecError::LengthMismatch` unless `bytes` is exactly 4 bytes.
pub fn decode_u32(bytes: &[u8], order: ByteOrder) -> Result<u32> {
    let record: [u8; 4] = bytes.try_into().map_err(|_| CodecError::LengthMismatch {
        expected: 4,
        actual: bytes.len(),
    })?;
    Ok(match order {
        ByteOrder::Big => u32::from_be_bytes(record),
        ByteOrder::Little => u32::from_le_bytes(record),
    })
}

/// Narrows an `i64` to `i32` only when the value survives unchanged.
///
/// Used wherever a wider integer must be stored in a narrower wire field.
///
/// # Errors
/// Returns `CodecError::OutOfRange` if `value` falls outside the 32-bit
/// signed range.
pub fn downcast_i32(value: i64) -> Result<i32> {
    i32::try_from(value).map_err(|_| {
        CodecError::OutOfRange(format!(
            "{value} cannot be narrowed to 32 bits without changing its value"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u64_one_both_orders() {
        assert_eq!(encode_u64(1, ByteOrder::Big), [0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(encode_u64(1, ByteOrder::Little), [1, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_u64_roundtrip() {
        let value = 0x1122_3344_5566_7788;
        for order in [ByteOrder::Big, ByteOrder::Little] {
            let record = encode_u64(value, order);
            assert_eq!(decode_u64(&record, order).unwrap(), value);
        }
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_u32_roundtrip() {
        let value = 0xDEAD_BEEF;
        for order in [ByteOrder::Big, ByteOrder::Little] {
            let record = encode_u32(value, order);
            assert_eq!(decode_u32(&record, order).unwrap(), value);
        }
    }

    #[test]
    fn test_decode_u64_wrong_length() {
        let result = decode_u64(&[0u8; 4], ByteOrder::Big);
        assert!(matches!(
            result,
            Err(CodecError::LengthMismatch {
                expected: 8,
                actual: 4
            })
        ));
    }

    #[test]
    fn test_decode_u32_wrong_length() {
        let result = decode_u32(&[0u8; 8], ByteOrder::Little);
        assert!(matches!(
            result,
            Err(CodecError::LengthMismatch {
                expected: 4,
                actual: 8
            })
        ));
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_downcast_i32_in_range() {
        assert_eq!(downcast_i32(0).unwrap(), 0);
        assert_eq!(downcast_i32(i64::from(i32::MAX)).unwrap(), i32::MAX);
        assert_eq!(downcast_i32(i64::from(i32::MIN)).unwrap(), i32::MIN);
    }

    #[test]
    fn test_downcast_i32_overflow() {
        assert!(matches!(
            downcast_i32(i64::from(i32::MAX) + 1),
            Err(CodecError::OutOfRange(_))
        ));
        assert!(matches!(
            downcast_i32(i64::from(i32::MIN) - 1),
            Err(CodecError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_order_names() {
        assert_eq!(ByteOrder::Big.name(), "big-endian");
        assert_eq!(ByteOrder::Little.name(), "little-endian");
    }
}
