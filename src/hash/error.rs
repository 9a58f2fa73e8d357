//! SHA-256 error types

use thiserror::Error;

/// SHA-256 errors
///
/// Padding, scheduling and compression are total over their inputs; the
/// only failure is a message whose bit length does not fit the 64-bit
/// length field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Message bit length does not fit in 64 bits
    #[error("message too long: {len} bytes (bit length must fit in 64 bits)")]
    LengthOverflow {
        /// Message length in bytes (saturated at `u64::MAX`)
        len: u64,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
