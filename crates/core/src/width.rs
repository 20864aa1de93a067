//! Shared bit width for section boundaries.
//!
//! All boundaries in one record are stored with the same width: the bit length
//! of the largest boundary, floored at [`MIN_WIDTH`]. The record stores the
//! width as a 4-bit code `width - MIN_WIDTH`, so widths above [`MAX_WIDTH`]
//! cannot be expressed.

use crate::error::{EncodeError, Result};
use crate::video::Section;

/// Smallest boundary width, stored as width code 0
pub const MIN_WIDTH: u32 = 6;

/// Largest boundary width, stored as width code 15
pub const MAX_WIDTH: u32 = 21;

/// Largest representable boundary value (2^21 - 1)
pub const MAX_VALUE: u32 = (1 << MAX_WIDTH) - 1;

/// Number of bits needed to write `value`; zero needs one bit.
pub fn bit_length(value: u32) -> u32 {
    (u32::BITS - value.leading_zeros()).max(1)
}

/// Compute the boundary width for `sections`.
///
/// # Errors
/// `EncodeError::ValueTooLarge` for the first boundary wider than
/// [`MAX_WIDTH`] bits.
pub fn select_width(sections: &[Section]) -> Result<u32> {
    let mut width = MIN_WIDTH;
    for value in sections.iter().flat_map(|s| [s.start, s.end]) {
        let bits = bit_length(value);
        if bits > MAX_WIDTH {
            return Err(EncodeError::ValueTooLarge {
                value,
                bits,
                max_bits: MAX_WIDTH,
            }
            .into());
        }
        width = width.max(bits);
    }
    Ok(width)
}
