//! # Error Types
//!
//! Error handling for all codec operations.
//!
//! This module defines the error kinds that decoding and narrowing operations
//! can produce. Encoding over a value's full domain is total and has no error
//! path; everything else returns an explicit [`Result`].
//!
//! ## Error Categories
//! - **Format Errors**: malformed hex or dotted-quad text
//! - **Length Errors**: byte records that are not the exact required width
//! - **Range Errors**: numeric values outside the domain of the target width
//!
//! All errors implement `std::error::Error` for interoperability. None of the
//! codecs signal failure through a sentinel value — a decoded `0` is a valid
//! result and is never an error marker.
//!
//! ## Example Usage
//! ```rust
//! use netcodec::error::CodecError;
//!
//! match netcodec::codec::port::decode(&[0x1F, 0x90, 0x00]) {
//!     Ok(port) => println!("port {port}"),
//!     Err(CodecError::LengthMismatch { expected, actual }) => {
//!         println!("need {expected} bytes, got {actual}")
//!     }
//!     Err(e) => println!("decode failed: {e}"),
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error message constants shared between codec modules.
pub mod constants {
    /// Hex text validation errors
    pub const ERR_ODD_HEX_LENGTH: &str = "hex string has odd length";
    pub const ERR_NON_ASCII: &str = "decoded bytes are not ASCII text";

    /// Dotted-quad validation errors
    pub const ERR_ADDRESS_LENGTH: &str = "address text length outside 7-15 characters";
}

// CodecError is the error type for all fallible codec operations
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodecError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Value out of range: {0}")]
    OutOfRange(String),
}

/// Type alias for Results using CodecError
pub type Result<T> = std::result::Result<T, CodecError>;
