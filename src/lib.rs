//! # netcodec
//!
//! Wire codec primitives for network identifiers.
//!
//! This crate converts between human-readable network identifiers and their
//! fixed-width wire representations: hex text and byte slices, dotted-quad
//! IPv4 text and 4-byte records, port numbers and 2-byte records, and 32/64-bit
//! integers with explicit endianness.
//!
//! ## Components
//! - **Hex**: byte slices to and from uppercase hex text
//! - **Integer**: fixed-width integer records, endianness always named
//! - **Address**: IPv4 addresses as text, `u32`, and network-order bytes
//! - **Port**: 2-byte little-endian port records
//! - **Endpoint**: 6-byte (address, port) records
//!
//! ## Wire Format
//! ```text
//! [Address(4, big-endian)] [Port(2, little-endian)]
//! ```
//!
//! ## Guarantees
//! - Every encode/decode pair round-trips exactly within its declared domain
//! - Decoders reject records of the wrong fixed width
//! - Encoders never truncate or wrap an out-of-domain value silently
//! - Every operation is a pure synchronous function; safe from any thread
//!
//! ## Example
//! ```rust
//! use netcodec::{Endpoint, Ipv4Address};
//!
//! # fn main() -> netcodec::Result<()> {
//! let addr: Ipv4Address = "192.168.1.1".parse()?;
//! let endpoint = Endpoint::new(addr, 8080);
//!
//! let record = endpoint.to_bytes();
//! assert_eq!(record, [0xC0, 0xA8, 0x01, 0x01, 0x90, 0x1F]);
//! assert_eq!(Endpoint::from_bytes(&record)?, endpoint);
//! # Ok(())
//! # }
//! ```

#![warn(clippy::unwrap_used, clippy::expect_used)]

pub mod codec;
pub mod error;

pub use codec::address::Ipv4Address;
pub use codec::endpoint::Endpoint;
pub use codec::integer::ByteOrder;
pub use error::{CodecError, Result};
