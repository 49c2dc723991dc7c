/// Scanning a single track/side

use crate::error::{CheckError, Result};
use crate::format::constants::fdc_size_to_bytes;
use crate::format::MAX_SIZE_CODE;
use crate::probe::{ImageReader, SectorDataStatus, SectorProbeResult};
use crate::scan::classify::{ErrorStats, SectorClassifier};
use log::{debug, error, warn};

/// A track never holds more sector slots than there are sector numbers
pub const MAX_SECTOR_SLOTS: usize = 256;

/// How a track scan ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackOutcome {
    /// Every sector slot was read
    Complete,
    /// The reader could not position at the track
    SeekFailed,
    /// A sector buffer could not be allocated; later slots were not read
    Truncated {
        /// Size of the buffer that failed
        bytes: usize,
    },
}

/// Everything learned about one track/side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackScanResult {
    /// Physical track number
    pub track: u8,
    /// Side number
    pub side: u8,
    /// Sector slots read
    pub total_sectors: usize,
    /// Error bitmaps and subtotals
    pub classifier: SectorClassifier,
    /// How the scan ended
    pub outcome: TrackOutcome,
}

impl TrackScanResult {
    /// Error subtotal for this track
    pub fn stats(&self) -> ErrorStats {
        self.classifier.stats()
    }

    /// Number of errors found on this track
    pub fn error_count(&self) -> u32 {
        self.stats().total()
    }
}

/// Reads one track at a time through an [`ImageReader`]
pub struct TrackScanner<'r, R: ImageReader + ?Sized> {
    reader: &'r mut R,
    buffer_limit: usize,
}

impl<'r, R: ImageReader + ?Sized> TrackScanner<'r, R> {
    /// Scanner allowing buffers up to the largest FDC sector size
    pub fn new(reader: &'r mut R) -> Self {
        Self {
            reader,
            buffer_limit: fdc_size_to_bytes(MAX_SIZE_CODE),
        }
    }

    /// Refuse sector buffers larger than `bytes`
    pub fn with_buffer_limit(mut self, bytes: usize) -> Self {
        self.buffer_limit = bytes;
        self
    }

    /// Scan every sector slot on `track`/`side`
    pub fn scan(&mut self, track: u8, side: u8) -> TrackScanResult {
        let mut result = TrackScanResult {
            track,
            side,
            total_sectors: 0,
            classifier: SectorClassifier::new(),
            outcome: TrackOutcome::Complete,
        };

        if let Err(e) = self.reader.seek(track, side) {
            warn!("{}", e);
            result.outcome = TrackOutcome::SeekFailed;
            return result;
        }

        while result.total_sectors < MAX_SECTOR_SLOTS {
            let Some(id) = self.reader.read_next_id() else {
                break;
            };

            let mut buf = match self.allocate(id.size.bytes()) {
                Ok(buf) => buf,
                Err(e) => {
                    error!("Track {}, side {}: {}", track, side, e);
                    result.outcome = TrackOutcome::Truncated {
                        bytes: id.size.bytes(),
                    };
                    return result;
                }
            };

            result.total_sectors += 1;
            let data = self
                .reader
                .read_sector_data(&id, &mut buf)
                .unwrap_or_else(|e| {
                    debug!("Track {}, side {}, sector {}: {}", track, side, id.sector, e);
                    SectorDataStatus::Absent
                });

            result
                .classifier
                .record(id.sector, SectorProbeResult::from_statuses(id.status, data));
        }

        result
    }

    /// Buffer of exactly `bytes`, reported as an error rather than aborting
    fn allocate(&self, bytes: usize) -> Result<Vec<u8>> {
        if bytes > self.buffer_limit {
            return Err(CheckError::BufferAllocation { bytes });
        }

        let mut buf = Vec::new();
        buf.try_reserve_exact(bytes)
            .map_err(|_| CheckError::BufferAllocation { bytes })?;
        buf.resize(bytes, 0);
        Ok(buf)
    }
}

/// Scan one track/side with default limits
pub fn scan_track<R: ImageReader + ?Sized>(reader: &mut R, track: u8, side: u8) -> TrackScanResult {
    TrackScanner::new(reader).scan(track, side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::IdFieldStatus;
    use crate::scan::ranges::RangeFormatter;
    use crate::scan::testing::{ScriptedReader, Slot};

    #[test]
    fn test_ten_slot_track() {
        let slots = (0..10)
            .map(|n| match n {
                3 | 7 => Slot::data(n, SectorDataStatus::CrcBad),
                5 => Slot::id(n, IdFieldStatus::CrcBad),
                _ => Slot::ok(n),
            })
            .collect();
        let mut reader = ScriptedReader::single(slots);

        let result = scan_track(&mut reader, 0, 0);
        let stats = result.stats();

        assert_eq!(result.outcome, TrackOutcome::Complete);
        assert_eq!(result.total_sectors, 10);
        assert_eq!(stats.id_crc_errors, 1);
        assert_eq!(stats.sector_crc_errors, 2);
        assert_eq!(stats.sector_missing_errors, 0);
        assert_eq!(result.error_count(), 3);

        let formatter = RangeFormatter::new();
        assert_eq!(
            formatter.format(result.classifier.crc_errors(), u8::MAX).unwrap(),
            "3, 7"
        );
        assert_eq!(
            formatter.format(result.classifier.id_errors(), u8::MAX).unwrap(),
            "5"
        );
    }

    #[test]
    fn test_seek_failure_yields_empty_result() {
        let mut reader = ScriptedReader::single(vec![Slot::ok(1)]);

        let result = scan_track(&mut reader, 5, 0);

        assert_eq!(result.outcome, TrackOutcome::SeekFailed);
        assert_eq!(result.total_sectors, 0);
        assert_eq!(result.error_count(), 0);
    }

    #[test]
    fn test_read_error_counts_as_absent() {
        let mut reader = ScriptedReader::single(vec![Slot::ok(1), Slot::read_error(2)]);

        let result = scan_track(&mut reader, 0, 0);

        assert!(result.classifier.missing().test(2));
        assert_eq!(result.stats().sector_missing_errors, 1);
    }

    #[test]
    fn test_bad_id_with_absent_data_is_not_missing() {
        let mut reader = ScriptedReader::single(vec![Slot::both(
            4,
            IdFieldStatus::CrcBad,
            SectorDataStatus::Absent,
        )]);

        let result = scan_track(&mut reader, 0, 0);

        assert!(result.classifier.id_errors().test(4));
        assert!(result.classifier.missing().is_empty());
    }

    #[test]
    fn test_allocation_failure_keeps_partial_counts() {
        let slots = vec![
            Slot::data(1, SectorDataStatus::CrcBad),
            Slot::data(2, SectorDataStatus::Absent),
            Slot::ok(3).with_size(3),
            Slot::data(4, SectorDataStatus::CrcBad),
        ];
        let mut reader = ScriptedReader::single(slots);

        let result = TrackScanner::new(&mut reader)
            .with_buffer_limit(512)
            .scan(0, 0);

        assert_eq!(result.outcome, TrackOutcome::Truncated { bytes: 1024 });
        assert_eq!(result.total_sectors, 2);
        assert_eq!(result.stats().sector_crc_errors, 1);
        assert_eq!(result.stats().sector_missing_errors, 1);
        assert!(!result.classifier.crc_errors().test(4));
    }

    #[test]
    fn test_buffers_match_size_class() {
        let slots = vec![Slot::ok(1).with_size(0), Slot::ok(2).with_size(3)];
        let mut reader = ScriptedReader::single(slots);

        scan_track(&mut reader, 0, 0);

        assert_eq!(reader.buffer_sizes(), &[128, 1024]);
    }

    #[test]
    fn test_slot_count_is_bounded() {
        let slots = (0..300).map(|n| Slot::ok((n % 256) as u8)).collect();
        let mut reader = ScriptedReader::single(slots);

        let result = scan_track(&mut reader, 0, 0);

        assert_eq!(result.total_sectors, MAX_SECTOR_SLOTS);
    }
}
