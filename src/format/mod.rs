/// DSK container formats and constants

/// Format constants
pub mod constants;

pub use constants::*;

/// DSK container type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiskImageFormat {
    /// Standard DSK format with fixed track sizes
    StandardDSK,
    /// Extended DSK format with variable track sizes
    ExtendedDSK,
}

impl DiskImageFormat {
    /// Get a human-readable name for this format
    pub fn name(&self) -> &'static str {
        match self {
            DiskImageFormat::StandardDSK => "Standard DSK",
            DiskImageFormat::ExtendedDSK => "Extended DSK",
        }
    }
}

/// Detect DSK format from magic bytes
pub fn detect_format(magic: &[u8]) -> Option<DiskImageFormat> {
    if magic.len() < 8 {
        return None;
    }

    // Only the first 8 bytes are reliable; some tools vary the rest
    if magic.starts_with(&EXTENDED_DSK_SIGNATURE[..8]) {
        Some(DiskImageFormat::ExtendedDSK)
    } else if magic.starts_with(&STANDARD_DSK_SIGNATURE[..8]) {
        Some(DiskImageFormat::StandardDSK)
    } else {
        None
    }
}
