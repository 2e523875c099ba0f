//! # Codec Components
//!
//! Pure conversions between the in-memory and wire representations of
//! network identifiers and fixed-width integers.
//!
//! Each submodule owns one data type and exposes a matched encode/decode
//! pair; there is no shared state and no initialization order between them.
//!
//! ## Components
//! - **hex**: byte slices to and from hex text
//! - **integer**: 32/64-bit integers to and from fixed-width records
//! - **address**: IPv4 addresses as text, `u32`, and 4-byte records
//! - **port**: port numbers to and from 2-byte records
//! - **endpoint**: (address, port) pairs to and from 6-byte records
//!
//! ## Wire Format
//! ```text
//! [Address(4, big-endian)] [Port(2, little-endian)]
//! ```
//!
//! The endpoint record's mixed byte order is deliberate and load-bearing:
//! deployed peers exchange records in exactly this layout.

pub mod address;
pub mod endpoint;
pub mod hex;
pub mod integer;
pub mod port;

// Re-export the value types for callers that only need the data model
pub use address::Ipv4Address;
pub use endpoint::Endpoint;
pub use integer::ByteOrder;
