//! # Endpoint Records
//!
//! The 6-byte wire record for an (address, port) pair.
//!
//! ## Wire Format
//! ```text
//! [Address(4, big-endian)] [Port(2, little-endian)]
//! ```
//!
//! The two halves keep their own byte orders; decoding splits the record and
//! hands each half to its codec.

use std::net::SocketAddrV4;

use bytes::{Buf, BufMut};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::codec::address::Ipv4Address;
use crate::codec::port;
use crate::error::{CodecError, Result};

/// Width of the endpoint wire record in bytes.
pub const WIRE_LEN: usize = 6;

/// An (address, port) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Endpoint {
    /// IPv4 address, bytes 0-3 of the wire record
    pub addr: Ipv4Address,
    /// Port number, bytes 4-5 of the wire record
    pub port: u16,
}

impl Endpoint {
    /// Pairs an address with a port.
    pub const fn new(addr: Ipv4Address, port: u16) -> Self {
        Self { addr, port }
    }

    /// Packs the pair into its 6-byte wire record. Total, never fails.
    pub fn to_bytes(self) -> [u8; WIRE_LEN] {
        let mut record = [0u8; WIRE_LEN];
        record[..4].copy_from_slice(&self.addr.octets());
        record[4..].copy_from_slice(&self.port.to_le_bytes());
        record
    }

    /// Unpacks a 6-byte wire record.
    ///
    /// # Errors
    /// Returns `CodecError::LengthMismatch` unless `bytes` is exactly 6 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != WIRE_LEN {
            trace!(len = bytes.len(), "rejected endpoint record");
            return Err(CodecError::LengthMismatch {
                expected: WIRE_LEN,
                actual: bytes.len(),
            });
        }
        let addr = Ipv4Address::from_bytes(&bytes[..4])?;
        let port = port::decode(&bytes[4..])?;
        Ok(Self { addr, port })
    }

    /// Appends the 6-byte record to `buf` without an intermediate array.
    pub fn put<B: BufMut>(self, buf: &mut B) {
        buf.put_slice(&self.addr.octets());
        buf.put_u16_le(self.port);
    }

    /// Reads one record from the front of `buf`, advancing it 6 bytes.
    ///
    /// # Errors
    /// Returns `CodecError::LengthMismatch` if fewer than 6 bytes remain;
    /// `buf` is left unread in that case.
    pub fn get<B: Buf>(buf: &mut B) -> Result<Self> {
        if buf.remaining() < WIRE_LEN {
            return Err(CodecError::LengthMismatch {
                expected: WIRE_LEN,
                actual: buf.remaining(),
            });
        }
        let addr = Ipv4Address::new(buf.get_u32());
        let port = buf.get_u16_le();
        Ok(Self { addr, port })
    }
}

impl From<SocketAddrV4> for Endpoint {
    fn from(addr: SocketAddrV4) -> Self {
        Self {
            addr: Ipv4Address::from(*addr.ip()),
            port: addr.port(),
        }
    }
}

impl From<Endpoint> for SocketAddrV4 {
    fn from(endpoint: Endpoint) -> Self {
        SocketAddrV4::new(endpoint.addr.into(), endpoint.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;

    #[test]
    fn test_record_layout() {
        let endpoint = Endpoint::new(Ipv4Address::new(0xC0A8_0101), 8080);
        // 192.168.1.1 big-endian, then 8080 = 0x1F90 low byte first
        assert_eq!(
            endpoint.to_bytes(),
            [0xC0, 0xA8, 0x01, 0x01, 0x90, 0x1F]
        );
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_record_roundtrip() {
        let endpoint = Endpoint::new(Ipv4Address::new(0x0A00_00FE), 65535);
        let decoded = Endpoint::from_bytes(&endpoint.to_bytes()).unwrap();
        assert_eq!(decoded, endpoint);
    }

    #[test]
    fn test_wrong_length_rejected() {
        for len in [0usize, 4, 5, 7] {
            let bytes = vec![0u8; len];
            assert!(matches!(
                Endpoint::from_bytes(&bytes),
                Err(CodecError::LengthMismatch { expected: 6, .. })
            ));
        }
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_buffer_put_get() {
        let first = Endpoint::new(Ipv4Address::new(0x7F00_0001), 9000);
        let second = Endpoint::new(Ipv4Address::new(0xFFFF_FFFF), 0);

        let mut buf = BytesMut::with_capacity(WIRE_LEN * 2);
        first.put(&mut buf);
        second.put(&mut buf);
        assert_eq!(buf.len(), WIRE_LEN * 2);

        let mut reader = buf.freeze();
        assert_eq!(Endpoint::get(&mut reader).unwrap(), first);
        assert_eq!(Endpoint::get(&mut reader).unwrap(), second);
        assert!(Endpoint::get(&mut reader).is_err());
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_socket_addr_conversions() {
        let endpoint = Endpoint::new("192.0.2.33".parse().unwrap(), 4242);
        let sock: SocketAddrV4 = endpoint.into();
        assert_eq!(sock.ip().octets(), endpoint.addr.octets());
        assert_eq!(sock.port(), 4242);
        assert_eq!(Endpoint::from(sock), endpoint);
    }
}
