//! Video reference value types.

use crate::config::CodecConfig;

/// A time range within a video.
///
/// The codec stores raw magnitudes; `start <= end` is not required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Section {
    pub start: u32,
    pub end: u32,
}

impl Section {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

/// A video identifier plus its sections, in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Video {
    /// 11-character URL-safe identifier
    pub id: String,

    /// Sections in the order they round-trip
    pub sections: Vec<Section>,
}

impl Video {
    pub fn new(id: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            id: id.into(),
            sections,
        }
    }

    /// Encode with the default configuration, or `None` if rejected.
    ///
    /// See [`crate::framing::encode`] for the reasons a video is rejected.
    pub fn to_token(&self) -> Option<String> {
        crate::framing::encode_with(self, &CodecConfig::default()).ok()
    }

    /// Decode a token, or `None` if it is malformed.
    pub fn from_token(token: &str) -> Option<Self> {
        crate::framing::decode(token).ok()
    }
}
