//! vidpack-core: compact URL-safe tokens for video references
//!
//! A video reference is an 11-character identifier plus an ordered list of
//! time-range sections. This library packs it into the shortest printable
//! token it can and reads it back losslessly.
//!
//! # Architecture
//!
//! - `bitio`: Bit-addressable buffer with MSB-first fields
//! - `id`: Identifier transcoding between URL-safe text and 64 raw bits
//! - `width`: Shared bit width for section boundaries
//! - `printable`: Z85 block alignment and filler handling
//! - `framing`: Record layout, encoder and decoder
//! - `config`: Per-call encoder settings
//!
//! # Example
//! ```
//! use vidpack_core::{decode, encode, Section, Video};
//!
//! let video = Video::new("abcdefghijk", vec![Section::new(42, 8000)]);
//! let token = encode(&video).unwrap();
//! assert_eq!(token, "2aGR:PmN]PMJNF0kMy=:");
//! assert_eq!(decode(&token).unwrap(), video);
//! ```
//!
//! # Design Principles
//!
//! - **No panics**: rejections come back as structured errors
//! - **Strict encode, lenient decode**: shorter or truncated tokens still
//!   decode, with missing trailing fields read as zero
//! - **Stateless**: every call owns its buffer, so calls may run on any thread

pub mod bitio;
pub mod config;
pub mod error;
pub mod framing;
pub mod id;
pub mod printable;
pub mod video;
pub mod width;

// Re-export commonly used types
pub use config::CodecConfig;
pub use error::{DecodeError, EncodeError, Error, Result};
pub use framing::{decode, encode, encode_with};
pub use video::{Section, Video};
