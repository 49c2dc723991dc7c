/// Per-sector error classification

use crate::probe::SectorProbeResult;
use crate::scan::bitmap::RangeBitmap;
use std::ops::AddAssign;

/// Error counters, kept per track and per file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ErrorStats {
    /// Sectors whose ID field failed its CRC
    pub id_crc_errors: u32,
    /// Sectors whose data field failed its CRC
    pub sector_crc_errors: u32,
    /// Sectors with a good ID but no data field
    pub sector_missing_errors: u32,
}

impl ErrorStats {
    /// Sum of all categories
    pub fn total(&self) -> u32 {
        self.id_crc_errors + self.sector_crc_errors + self.sector_missing_errors
    }

    /// Check if every category is zero
    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }
}

impl AddAssign for ErrorStats {
    fn add_assign(&mut self, rhs: Self) {
        self.id_crc_errors += rhs.id_crc_errors;
        self.sector_crc_errors += rhs.sector_crc_errors;
        self.sector_missing_errors += rhs.sector_missing_errors;
    }
}

/// Records which sector numbers on a track hit which kind of error
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectorClassifier {
    id_errors: RangeBitmap,
    crc_errors: RangeBitmap,
    missing: RangeBitmap,
    stats: ErrorStats,
}

impl SectorClassifier {
    /// Create a classifier with nothing recorded
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for one sector slot
    pub fn record(&mut self, sector: u8, result: SectorProbeResult) {
        match result {
            SectorProbeResult::Ok => {}
            SectorProbeResult::IdFieldCrcBad => {
                self.id_errors.set(sector);
                self.stats.id_crc_errors += 1;
            }
            SectorProbeResult::SectorDataCrcBad => {
                self.crc_errors.set(sector);
                self.stats.sector_crc_errors += 1;
            }
            SectorProbeResult::SectorDataAbsent => {
                self.missing.set(sector);
                self.stats.sector_missing_errors += 1;
            }
        }
    }

    /// Sector numbers with a bad ID field
    pub fn id_errors(&self) -> &RangeBitmap {
        &self.id_errors
    }

    /// Sector numbers with a bad data CRC
    pub fn crc_errors(&self) -> &RangeBitmap {
        &self.crc_errors
    }

    /// Sector numbers with no data field
    pub fn missing(&self) -> &RangeBitmap {
        &self.missing
    }

    /// Counters for this track
    pub fn stats(&self) -> ErrorStats {
        self.stats
    }
}
