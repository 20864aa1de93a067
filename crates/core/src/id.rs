//! Video identifier transcoding.
//!
//! Public identifiers are 11 characters of the URL-safe base64 alphabet
//! (`-` and `_` in place of `+` and `/`, no padding). Eleven characters carry
//! 66 bits; the record stores the first 64 as eight raw bytes. The two spare
//! bits must be zero, otherwise the identifier could not be rebuilt from the
//! raw form and is rejected.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::error::{EncodeError, Result};

/// Length of a public identifier in characters
pub const ID_LEN: usize = 11;

/// Size of the raw identifier in bytes (64 bits)
pub const RAW_ID_BYTES: usize = 8;

/// Convert a public identifier to its 64 raw bits.
///
/// The length check against [`ID_LEN`] belongs to the encoder; here any
/// input that does not decode to exactly 64 bits is invalid.
///
/// # Errors
/// `EncodeError::InvalidIdentifier` if `id` is outside the public alphabet,
/// has non-zero bits past the 64th, or does not decode to 8 bytes.
pub fn to_raw(id: &str) -> Result<[u8; RAW_ID_BYTES]> {
    let invalid = || EncodeError::InvalidIdentifier(id.to_string());
    let bytes = URL_SAFE_NO_PAD.decode(id).map_err(|_| invalid())?;
    let raw: [u8; RAW_ID_BYTES] = bytes.try_into().map_err(|_| invalid())?;
    Ok(raw)
}

/// Convert 64 raw bits back to the 11-character public identifier.
pub fn from_raw(raw: &[u8; RAW_ID_BYTES]) -> String {
    URL_SAFE_NO_PAD.encode(raw)
}
