//! Bit-addressable storage for record fields.
//!
//! [`BitBuffer`] is a growable bit string addressed by bit offset. Fields are
//! stored MSB-first: bit offset `i` lives in byte `i / 8` at bit `7 - i % 8`,
//! and an n-bit field puts its most significant bit at the lowest offset.
//!
//! [`BitWriter`] and [`BitReader`] are sequential cursors over a buffer, which
//! is how the record codec in [`crate::framing`] walks its fields.
//!
//! # Short reads
//! Reads never fail. [`BitBuffer::get_bits`] reports a field that does not fit
//! as absent, while [`BitBuffer::get_bits_lenient`] fills the missing low bits
//! with zeros and only reports absent when the field starts past the end.
//!
//! # Example
//! ```
//! use vidpack_core::bitio::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bits(0b101, 3);
//! writer.write_bits(0b11, 2);
//! let buffer = writer.finish();
//! assert_eq!(buffer.to_bytes(), vec![0b10111000]);
//!
//! let mut reader = BitReader::new(&buffer);
//! assert_eq!(reader.read_bits(3), Some(0b101));
//! assert_eq!(reader.read_bits(2), Some(0b11));
//! assert_eq!(reader.read_bits(1), None);
//! ```

/// Growable bit string, MSB-first within each byte.
///
/// # Invariants
/// - `bytes.len() == len.div_ceil(8)`
/// - bits at offsets `>= len` in the last byte are zero
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer {
    bytes: Vec<u8>,
    /// Length in bits
    len: usize,
}

impl BitBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a buffer from bytes. The bit length is `8 * bytes.len()`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            len: bytes.len() * 8,
        }
    }

    /// Bytes of the buffer, the last one zero-padded to the byte boundary.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Length in bits.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Write the low `width` bits of `value` at `offset`, growing as needed.
    ///
    /// `width` must be at most 64; higher bits of `value` are ignored.
    pub fn set_bits(&mut self, offset: usize, width: usize, value: u64) {
        debug_assert!(width <= 64, "field width {width} exceeds 64 bits");
        if width == 0 {
            return;
        }
        self.grow_to(offset + width);
        for i in 0..width {
            let bit = (value >> (width - 1 - i)) & 1 == 1;
            self.put_bit(offset + i, bit);
        }
    }

    /// Write `raw` bit-for-bit at `offset`, 8 bits per byte, MSB first.
    pub fn set_raw(&mut self, offset: usize, raw: &[u8]) {
        for (i, &byte) in raw.iter().enumerate() {
            self.set_bits(offset + i * 8, 8, u64::from(byte));
        }
    }

    /// Read `width` bits at `offset`.
    ///
    /// Returns `None` if the buffer is shorter than `offset + width`.
    pub fn get_bits(&self, offset: usize, width: usize) -> Option<u64> {
        debug_assert!(width <= 64, "field width {width} exceeds 64 bits");
        if offset + width > self.len {
            return None;
        }
        Some(self.read_unchecked(offset, width))
    }

    /// Read `width` bits at `offset`, treating bits past the end as zero.
    ///
    /// Returns `None` only when the field starts at or past the end.
    pub fn get_bits_lenient(&self, offset: usize, width: usize) -> Option<u64> {
        debug_assert!(width <= 64, "field width {width} exceeds 64 bits");
        if width == 0 {
            return Some(0);
        }
        if offset >= self.len {
            return None;
        }
        Some(self.read_unchecked(offset, width))
    }

    fn read_unchecked(&self, offset: usize, width: usize) -> u64 {
        (offset..offset + width).fold(0u64, |acc, index| {
            (acc << 1) | u64::from(self.bit(index))
        })
    }

    fn bit(&self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.bytes[index / 8] & (0x80 >> (index % 8)) != 0
    }

    fn put_bit(&mut self, index: usize, bit: bool) {
        let mask = 0x80 >> (index % 8);
        if bit {
            self.bytes[index / 8] |= mask;
        } else {
            self.bytes[index / 8] &= !mask;
        }
    }

    fn grow_to(&mut self, bits: usize) {
        if bits > self.len {
            self.bytes.resize(bits.div_ceil(8), 0);
            self.len = bits;
        }
    }
}

/// Sequential MSB-first writer over a [`BitBuffer`].
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    buffer: BitBuffer,
    position: usize,
}

impl BitWriter {
    /// Create a writer over an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the low `count` bits of `value` (0-64).
    pub fn write_bits(&mut self, value: u64, count: usize) {
        self.buffer.set_bits(self.position, count, value);
        self.position += count;
    }

    /// Write raw bytes bit-for-bit.
    pub fn write_raw(&mut self, raw: &[u8]) {
        self.buffer.set_raw(self.position, raw);
        self.position += raw.len() * 8;
    }

    /// Current bit position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Finish writing and return the buffer.
    pub fn finish(self) -> BitBuffer {
        self.buffer
    }
}

/// Sequential MSB-first reader over a [`BitBuffer`].
///
/// Every read advances the position by the requested count, whether or not
/// the bits were present, so field offsets stay aligned with the layout.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    buffer: &'a BitBuffer,
    position: usize,
}

impl<'a> BitReader<'a> {
    /// Create a reader positioned at bit 0.
    pub fn new(buffer: &'a BitBuffer) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    /// Read `count` bits; `None` if they are not all present.
    pub fn read_bits(&mut self, count: usize) -> Option<u64> {
        let value = self.buffer.get_bits(self.position, count);
        self.position += count;
        value
    }

    /// Read `count` bits, zero-filling past the end; `None` if nothing is left.
    pub fn read_bits_lenient(&mut self, count: usize) -> Option<u64> {
        let value = self.buffer.get_bits_lenient(self.position, count);
        self.position += count;
        value
    }

    /// Current bit position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bits left before the end of the buffer.
    pub fn bits_remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }
}
