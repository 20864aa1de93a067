//! Video record serialization and parsing.
//!
//! A video record packs the identifier and its sections into a bit string,
//! which is then block-aligned and turned into a printable token (see
//! [`crate::printable`]).
//!
//! # Record Format
//!
//! ```text
//! +----------------------+
//! | type (4 bits)        |  0 = video record, other values reserved
//! +----------------------+
//! | id (64 bits)         |  raw identifier bits, MSB first
//! +----------------------+  -- omitted when there are no sections --
//! | width_code (4 bits)  |  section width - 6 (widths 6..=21)
//! +----------------------+
//! | count (6 bits)       |  number of sections (0..=63)
//! +----------------------+
//! | start, end           |  count x 2 x width bits, in section order
//! | (variable)           |
//! +----------------------+
//! ```
//!
//! # Leniency
//!
//! Encoding is strict and rejects anything the layout cannot hold. Decoding
//! fails only when the token is not valid printable text or names an unknown
//! record type. A record that ends before the width code decodes with no
//! sections, and section fields cut short read as zero, so shorter tokens
//! stay readable.

use tracing::{debug, trace};

use crate::bitio::{BitBuffer, BitReader, BitWriter};
use crate::config::CodecConfig;
use crate::error::{DecodeError, EncodeError, Result};
use crate::id::{self, ID_LEN, RAW_ID_BYTES};
use crate::printable;
use crate::video::{Section, Video};
use crate::width::{self, MIN_WIDTH};

/// Type tag of a video record
const VIDEO_RECORD: u64 = 0;

/// Field sizes in bits
const TYPE_BITS: usize = 4;
const ID_BITS: usize = RAW_ID_BYTES * 8;
const WIDTH_CODE_BITS: usize = 4;
const COUNT_BITS: usize = 6;

/// Encode a video into a token with the default configuration.
///
/// # Errors
/// - `EncodeError::IdentifierLength` if the identifier is not 11 characters
/// - `EncodeError::InvalidIdentifier` if it is not a URL-safe identifier
/// - `EncodeError::ValueTooLarge` if a boundary exceeds 2^21 - 1
/// - `EncodeError::TooManySections` if there are more than 63 sections
pub fn encode(video: &Video) -> Result<String> {
    encode_with(video, &CodecConfig::default())
}

/// Encode a video into a token.
///
/// # Errors
/// As [`encode`], with the section cap taken from `config`, plus
/// `Error::Config` if `config` is invalid.
pub fn encode_with(video: &Video, config: &CodecConfig) -> Result<String> {
    config.validate()?;
    serialize_record(video, config).inspect_err(|err| {
        debug!(
            id = %video.id,
            sections = video.sections.len(),
            error = %err,
            "video rejected"
        );
    })
}

fn serialize_record(video: &Video, config: &CodecConfig) -> Result<String> {
    if video.id.len() != ID_LEN {
        return Err(EncodeError::IdentifierLength {
            expected: ID_LEN,
            actual: video.id.len(),
        }
        .into());
    }
    let raw_id = id::to_raw(&video.id)?;

    let mut writer = BitWriter::new();
    writer.write_bits(VIDEO_RECORD, TYPE_BITS);
    writer.write_raw(&raw_id);

    if !video.sections.is_empty() {
        write_sections(&mut writer, &video.sections, config)?;
    }

    let bytes = printable::align_blocks(writer.finish().to_bytes());
    let token = printable::encode(&bytes, config.strip_filler);
    trace!(bytes = bytes.len(), token_len = token.len(), "video encoded");
    Ok(token)
}

fn write_sections(
    writer: &mut BitWriter,
    sections: &[Section],
    config: &CodecConfig,
) -> Result<()> {
    let max = usize::from(config.max_sections);
    if sections.len() > max {
        return Err(EncodeError::TooManySections {
            count: sections.len(),
            max,
        }
        .into());
    }

    let width = width::select_width(sections)?;
    trace!(width, count = sections.len(), "section width selected");

    writer.write_bits(u64::from(width - MIN_WIDTH), WIDTH_CODE_BITS);
    writer.write_bits(sections.len() as u64, COUNT_BITS);

    let width = width as usize;
    for section in sections {
        writer.write_bits(u64::from(section.start), width);
        writer.write_bits(u64::from(section.end), width);
    }
    Ok(())
}

/// Decode a token back into a video.
///
/// # Errors
/// - `DecodeError::Printable` if the token is not valid Z85 text
/// - `DecodeError::Empty` if it decodes to no record at all
/// - `DecodeError::UnknownRecordType` if the type tag is not 0
pub fn decode(token: &str) -> Result<Video> {
    let bytes = printable::decode(token)?;
    let buffer = BitBuffer::from_bytes(&bytes);
    parse_record(&buffer).inspect_err(|err| {
        debug!(token, error = %err, "token rejected");
    })
}

fn parse_record(buffer: &BitBuffer) -> Result<Video> {
    let mut reader = BitReader::new(buffer);

    let record_type = reader.read_bits(TYPE_BITS).ok_or(DecodeError::Empty)?;
    if record_type != VIDEO_RECORD {
        return Err(DecodeError::UnknownRecordType(record_type as u8).into());
    }

    let raw_id = reader.read_bits_lenient(ID_BITS).unwrap_or(0);
    let id = id::from_raw(&raw_id.to_be_bytes());

    // Record ends after the identifier: no sections
    let Some(width_code) = reader.read_bits(WIDTH_CODE_BITS) else {
        return Ok(Video::new(id, Vec::new()));
    };
    let width = width_code as usize + MIN_WIDTH as usize;
    let count = reader.read_bits_lenient(COUNT_BITS).unwrap_or(0);

    let mut boundary = || reader.read_bits_lenient(width).unwrap_or(0) as u32;
    let sections = (0..count)
        .map(|_| {
            let start = boundary();
            let end = boundary();
            Section::new(start, end)
        })
        .collect();

    Ok(Video::new(id, sections))
}
