//! Error types for the vidpack codec.
//!
//! All rejections are returned as values rather than panicking. Encoding is
//! strict; decoding only fails when the token cannot be read at all or names a
//! record type this codec does not know. Truncated trailing fields are not
//! errors (see [`crate::framing`]).

use thiserror::Error;

/// Top-level error type for all codec operations.
///
/// Each variant corresponds to a specific failure domain:
/// - Encode: the video cannot be represented in a token
/// - Decode: the token is not a readable record
/// - Config: the codec configuration is out of range
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Video rejected by the encoder
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    /// Token rejected by the decoder
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Reasons a video cannot be encoded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// Identifier is not exactly 11 characters long
    #[error("identifier must be {expected} characters, got {actual}")]
    IdentifierLength { expected: usize, actual: usize },

    /// Identifier contains characters outside the URL-safe alphabet, or its
    /// final character carries bits past the 64th
    #[error("identifier {0:?} is not a valid URL-safe identifier")]
    InvalidIdentifier(String),

    /// Section boundary needs more bits than the record can hold
    #[error("section boundary {value} needs {bits} bits, maximum is {max_bits}")]
    ValueTooLarge { value: u32, bits: u32, max_bits: u32 },

    /// More sections than the count field (or the configured cap) allows
    #[error("{count} sections exceed the maximum of {max}")]
    TooManySections { count: usize, max: usize },
}

/// Reasons a token cannot be decoded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The printable codec rejected the token
    #[error("invalid printable encoding: {0}")]
    Printable(String),

    /// Token decoded to too few bits to hold a type tag
    #[error("token carries no record")]
    Empty,

    /// Type tag names a record kind this codec does not know
    #[error("unknown record type {0}")]
    UnknownRecordType(u8),
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
