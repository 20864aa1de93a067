//! Printable token encoding.
//!
//! Record bytes become text through Z85 (ZeroMQ base-85), which maps every
//! 4-byte block to 5 characters. This module owns the two adjustments around
//! that codec:
//! - before encoding, trailing zero bytes past the first block are trimmed and
//!   the rest is zero-padded back to a whole number of blocks
//! - trailing filler characters (`'0'`, the encoding of a zero digit) are
//!   stripped from the token and restored before decoding
//!
//! The last block of an aligned record is only all zero when the whole record
//! is, so stripping stays inside that block and re-padding rebuilds it.

use tracing::debug;

use crate::error::{DecodeError, Result};

/// Filler character appended to complete a block
pub const FILLER: char = '0';

/// Bytes per Z85 block
pub const BLOCK_BYTES: usize = 4;

/// Characters per Z85 block
pub const BLOCK_CHARS: usize = 5;

/// Trim trailing zero bytes beyond the first block, then zero-pad to a whole
/// number of blocks.
pub fn align_blocks(mut bytes: Vec<u8>) -> Vec<u8> {
    let floor = BLOCK_BYTES.min(bytes.len());
    let kept = bytes
        .iter()
        .rposition(|&byte| byte != 0)
        .map_or(0, |last| last + 1)
        .max(floor);
    bytes.resize(kept.div_ceil(BLOCK_BYTES) * BLOCK_BYTES, 0);
    bytes
}

/// Encode block-aligned bytes as a token.
///
/// With `strip_filler`, trailing filler is removed, keeping at least one
/// character so that a record of all zero bits still has a token.
pub fn encode(bytes: &[u8], strip_filler: bool) -> String {
    debug_assert!(bytes.len() % BLOCK_BYTES == 0, "unaligned printable block");
    let mut token = z85::encode(bytes);
    if strip_filler {
        let kept = token.trim_end_matches(FILLER).len();
        token.truncate(kept.max(1).min(token.len()));
    }
    token
}

/// Restore filler and decode a token to bytes.
///
/// # Errors
/// `DecodeError::Printable` if the token contains characters outside the Z85
/// alphabet or a block that does not decode.
pub fn decode(token: &str) -> Result<Vec<u8>> {
    let padded_len = token.len().div_ceil(BLOCK_CHARS) * BLOCK_CHARS;
    let mut padded = String::with_capacity(padded_len);
    padded.push_str(token);
    padded.extend(std::iter::repeat(FILLER).take(padded_len - token.len()));

    z85::decode(padded.as_bytes()).map_err(|err| {
        debug!(token_len = token.len(), error = ?err, "printable decode failed");
        DecodeError::Printable(format!("{err:?}")).into()
    })
}
