//! # IPv4 Addresses
//!
//! One address, three interchangeable forms:
//! - dotted-quad text (`"192.168.1.0"`)
//! - a 32-bit numeric value (`0xC0A80100`)
//! - a 4-byte record in network byte order (`[0xC0, 0xA8, 0x01, 0x00]`)
//!
//! [`Ipv4Address`] holds the numeric form; [`FromStr`], [`Display`], and the
//! byte conversions move between the other two. Byte 0 of the record is the
//! most significant octet.

use std::fmt;
use std::net;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{constants, CodecError, Result};

/// Shortest possible dotted-quad text, `"0.0.0.0"`.
const MIN_TEXT_LEN: usize = 7;
/// Longest possible dotted-quad text, `"255.255.255.255"`.
const MAX_TEXT_LEN: usize = 15;

/// An IPv4 address held as its 32-bit numeric value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Ipv4Address(u32);

impl Ipv4Address {
    /// Wraps a 32-bit numeric address value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The 32-bit numeric value, octet 0 in the most significant byte.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// The 4-byte wire record, network byte order.
    pub const fn octets(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Rebuilds an address from its 4-byte wire record.
    pub const fn from_octets(octets: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(octets))
    }

    /// Decodes a 4-byte wire record from a slice.
    ///
    /// # Errors
    /// Returns `CodecError::LengthMismatch` unless `bytes` is exactly 4 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let record: [u8; 4] = bytes.try_into().map_err(|_| {
            trace!(len = bytes.len(), "rejected address record");
            CodecError::LengthMismatch {
                expected: 4,
                actual: bytes.len(),
            }
        })?;
        Ok(Self::from_octets(record))
    }
}

impl FromStr for Ipv4Address {
    type Err = CodecError;

    /// Parses canonical dotted-quad text.
    ///
    /// Octet tokens with leading zeros (`"192.168.001.1"`) are accepted;
    /// formatting always re-emits the canonical form without them.
    fn from_str(s: &str) -> Result<Self> {
        if s.len() < MIN_TEXT_LEN || s.len() > MAX_TEXT_LEN {
            return Err(CodecError::InvalidFormat(
                constants::ERR_ADDRESS_LENGTH.to_string(),
            ));
        }

        let tokens: Vec<&str> = s.split('.').collect();
        if tokens.len() != 4 {
            return Err(CodecError::InvalidFormat(format!(
                "expected 4 dot-separated octets, got {}",
                tokens.len()
            )));
        }

        let mut octets = [0u8; 4];
        for (slot, token) in octets.iter_mut().zip(&tokens) {
            // Plain decimal digits only; rejects empty tokens, signs, and
            // whitespace that a bare integer parse would let through.
            if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
                return Err(CodecError::InvalidFormat(format!(
                    "invalid octet {token:?}"
                )));
            }
            let value: u32 = token.parse().map_err(|_| {
                CodecError::InvalidFormat(format!("invalid octet {token:?}"))
            })?;
            if value > 255 {
                return Err(CodecError::InvalidFormat(format!(
                    "octet {value} outside 0-255"
                )));
            }
            *slot = value as u8;
        }

        Ok(Self::from_octets(octets))
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.octets();
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl From<u32> for Ipv4Address {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Ipv4Address> for u32 {
    fn from(addr: Ipv4Address) -> Self {
        addr.0
    }
}

impl From<[u8; 4]> for Ipv4Address {
    fn from(octets: [u8; 4]) -> Self {
        Self::from_octets(octets)
    }
}

impl TryFrom<&[u8]> for Ipv4Address {
    type Error = CodecError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl From<net::Ipv4Addr> for Ipv4Address {
    fn from(addr: net::Ipv4Addr) -> Self {
        Self::from_octets(addr.octets())
    }
}

impl From<Ipv4Address> for net::Ipv4Addr {
    fn from(addr: Ipv4Address) -> Self {
        net::Ipv4Addr::from(addr.octets())
    }
}
