/// Sector data structures

use crate::fdc::{FdcStatus1, FdcStatus2};
use crate::format::constants::fdc_size_to_bytes;

/// Sector ID (CHRN) - addressing information for a sector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectorId {
    /// C - Cylinder/Track number
    pub track: u8,
    /// H - Head/Side number
    pub side: u8,
    /// R - Sector ID/Record number
    pub sector: u8,
    /// N - Size code (0=128, 1=256, 2=512, 3=1024, 4=2048, etc.)
    pub size_code: u8,
}

impl SectorId {
    /// Create a new sector ID
    pub fn new(track: u8, side: u8, sector: u8, size_code: u8) -> Self {
        Self {
            track,
            side,
            sector,
            size_code,
        }
    }

    /// Get the advertised sector size in bytes based on size code
    pub fn size_bytes(&self) -> usize {
        fdc_size_to_bytes(self.size_code)
    }
}

/// A disk sector as dumped, with the FDC result bytes recorded for it
#[derive(Debug, Clone)]
pub struct Sector {
    /// Sector addressing information (CHRN)
    pub id: SectorId,
    /// FDC Status Register 1
    pub fdc_status1: FdcStatus1,
    /// FDC Status Register 2
    pub fdc_status2: FdcStatus2,
    /// Sector data; may be shorter than advertised or empty
    data: Vec<u8>,
}

impl Sector {
    /// Create a clean sector filled with `0xE5`
    pub fn new(id: SectorId) -> Self {
        let size = id.size_bytes();
        Self {
            id,
            fdc_status1: FdcStatus1::default(),
            fdc_status2: FdcStatus2::default(),
            data: vec![0xE5; size],
        }
    }

    /// Create a new sector with FDC status
    pub fn with_status(
        id: SectorId,
        fdc_status1: FdcStatus1,
        fdc_status2: FdcStatus2,
        data: Vec<u8>,
    ) -> Self {
        Self {
            id,
            fdc_status1,
            fdc_status2,
            data,
        }
    }

    /// Get a reference to the sector data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the stored data size
    pub fn actual_size(&self) -> usize {
        self.data.len()
    }

    /// ID field CRC error: ST1 data error without a data field error in ST2
    pub fn has_id_crc_error(&self) -> bool {
        self.fdc_status1.data_error() && !self.fdc_status2.data_field_error()
    }

    /// Data field CRC error
    pub fn has_data_crc_error(&self) -> bool {
        self.fdc_status2.data_field_error()
    }

    /// No data field was found for this sector
    pub fn is_data_missing(&self) -> bool {
        self.fdc_status2.missing_data_mark() || self.data.is_empty()
    }
}
