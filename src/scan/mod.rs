/// Sector error classification and reporting

/// Fixed-domain sector number set
pub mod bitmap;
/// Per-sector classification and error counters
pub mod classify;
/// Whole-image scan and totals
pub mod file;
/// Range list rendering
pub mod ranges;
/// Report line layout
pub mod report;
/// Single track scan
pub mod track;
/// Sector count change detection
pub mod tracker;

#[cfg(test)]
pub(crate) mod testing;

pub use bitmap::RangeBitmap;
pub use classify::{ErrorStats, SectorClassifier};
pub use file::{scan_file, FileAggregator, ScanOptions, Verbosity};
pub use ranges::{RangeFormatter, MAX_RANGE_TEXT_LEN};
pub use report::TrackReport;
pub use track::{scan_track, TrackOutcome, TrackScanResult, TrackScanner, MAX_SECTOR_SLOTS};
pub use tracker::{SectorCountChange, SectorCountTracker};
