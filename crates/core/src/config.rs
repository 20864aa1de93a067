//! Per-call encoder settings.
//!
//! The wire layout itself is fixed (see [`crate::framing`]); these settings
//! only narrow what the encoder accepts or change how much filler the token
//! keeps. Every token produced under any valid configuration decodes with
//! [`crate::framing::decode`].

use crate::error::{Error, Result};

/// Largest section count the 6-bit count field can hold
pub const MAX_SECTIONS: u8 = 63;

/// Encoder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Reject videos with more sections than this (1..=63)
    pub max_sections: u8,

    /// Strip trailing filler characters from the token
    pub strip_filler: bool,
}

impl CodecConfig {
    /// Set the section cap.
    pub fn with_max_sections(mut self, max_sections: u8) -> Self {
        self.max_sections = max_sections;
        self
    }

    /// Keep or strip trailing filler.
    pub fn with_strip_filler(mut self, strip_filler: bool) -> Self {
        self.strip_filler = strip_filler;
        self
    }

    /// Check that the settings fit the wire layout.
    ///
    /// # Errors
    /// `Error::Config` if `max_sections` is 0 or above [`MAX_SECTIONS`].
    pub fn validate(&self) -> Result<()> {
        if self.max_sections == 0 || self.max_sections > MAX_SECTIONS {
            return Err(Error::Config(format!(
                "max_sections must be in 1..={MAX_SECTIONS}, got {}",
                self.max_sections
            )));
        }
        Ok(())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_sections: MAX_SECTIONS,
            strip_filler: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = CodecConfig::default();
        assert_eq!(config.max_sections, 63);
        assert!(config.strip_filler);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_section_cap_bounds() {
        for max in [0, 64, u8::MAX] {
            let config = CodecConfig::default().with_max_sections(max);
            assert!(matches!(config.validate(), Err(Error::Config(_))));
        }
        for max in [1, 16, 63] {
            let config = CodecConfig::default().with_max_sections(max);
            assert!(config.validate().is_ok());
        }
    }
}
