/// Image reader contract consumed by the scanner

use crate::error::Result;
use crate::format::constants::fdc_size_to_bytes;
use std::fmt;

/// Number of tracks and sides in an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Tracks per side
    pub tracks: u8,
    /// Number of sides (1 or 2)
    pub sides: u8,
}

/// FDC size class (the N byte of a sector ID)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeClass(pub u8);

impl SizeClass {
    /// Sector length in bytes, `128 << code`
    #[inline]
    pub fn bytes(self) -> usize {
        fdc_size_to_bytes(self.0)
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bytes())
    }
}

/// Result of checking a sector's ID field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdFieldStatus {
    /// ID field read with a good CRC
    Ok,
    /// ID field CRC mismatch
    CrcBad,
}

/// Result of reading a sector's data field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectorDataStatus {
    /// Data read with a good CRC
    Ok,
    /// Data field CRC mismatch
    CrcBad,
    /// No data field could be located
    Absent,
}

/// A decoded ID field for one sector slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdField {
    /// Sector number (R)
    pub sector: u8,
    /// Size class (N)
    pub size: SizeClass,
    /// CRC check of the ID field itself
    pub status: IdFieldStatus,
}

/// Combined outcome for one sector slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectorProbeResult {
    /// Both fields read cleanly
    Ok,
    /// The ID field failed its CRC
    IdFieldCrcBad,
    /// The data field failed its CRC
    SectorDataCrcBad,
    /// The ID was good but no data field was found
    SectorDataAbsent,
}

impl SectorProbeResult {
    /// Combine ID and data statuses; an ID failure masks any data result
    pub fn from_statuses(id: IdFieldStatus, data: SectorDataStatus) -> Self {
        match (id, data) {
            (IdFieldStatus::CrcBad, _) => SectorProbeResult::IdFieldCrcBad,
            (IdFieldStatus::Ok, SectorDataStatus::CrcBad) => SectorProbeResult::SectorDataCrcBad,
            (IdFieldStatus::Ok, SectorDataStatus::Absent) => SectorProbeResult::SectorDataAbsent,
            (IdFieldStatus::Ok, SectorDataStatus::Ok) => SectorProbeResult::Ok,
        }
    }
}

/// Track-by-track access to a floppy image
///
/// Implementations own file handling and field decoding, including CRC
/// verification. The scanner only sees the statuses.
pub trait ImageReader {
    /// Tracks and sides to iterate
    fn geometry(&self) -> Geometry;

    /// Position at a track/side and rewind to its first sector slot
    fn seek(&mut self, track: u8, side: u8) -> Result<()>;

    /// Next ID field on the current track, or `None` at end of track
    fn read_next_id(&mut self) -> Option<IdField>;

    /// Read the data belonging to `id` into `buf`, which is `id.size.bytes()` long
    fn read_sector_data(&mut self, id: &IdField, buf: &mut [u8]) -> Result<SectorDataStatus>;
}
