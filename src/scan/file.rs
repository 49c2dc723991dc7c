/// Whole-image scan: iteration order, report filtering and totals

use crate::error::Result;
use crate::probe::ImageReader;
use crate::scan::classify::ErrorStats;
use crate::scan::ranges::RangeFormatter;
use crate::scan::report::{write_header, write_totals, TrackReport};
use crate::scan::track::{TrackOutcome, TrackScanResult, TrackScanner};
use crate::scan::tracker::{SectorCountChange, SectorCountTracker};
use log::info;
use std::io::Write;

/// How much the report prints, counted from repeated `-v`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Verbosity(pub u8);

impl Verbosity {
    /// Print the column header
    pub fn shows_header(self) -> bool {
        self.0 >= 1
    }

    /// Print a line for every track, clean or not
    pub fn shows_all_tracks(self) -> bool {
        self.0 >= 2
    }
}

/// Settings for scanning one or more images
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Report verbosity
    pub verbosity: Verbosity,
}

/// Scans every track of an image and accumulates file totals
///
/// Tracks are visited track-outer, side-inner (T0S0, T0S1, T1S0, ...). The
/// sector count of each track is compared with the track visited just
/// before it in that order.
#[derive(Debug, Clone, Default)]
pub struct FileAggregator {
    options: ScanOptions,
    formatter: RangeFormatter,
    /// Sector buffer cap passed to each track scan; `None` keeps the scanner's
    buffer_limit: Option<usize>,
    tracker: SectorCountTracker,
    totals: ErrorStats,
}

impl FileAggregator {
    /// Create an aggregator with the given options
    pub fn new(options: ScanOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Use a different range formatter for the error lists
    pub fn with_formatter(mut self, formatter: RangeFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Refuse sector buffers larger than `bytes` on every track
    pub fn with_buffer_limit(mut self, bytes: usize) -> Self {
        self.buffer_limit = Some(bytes);
        self
    }

    /// Totals of the most recent scan
    pub fn totals(&self) -> ErrorStats {
        self.totals
    }

    /// Scan all tracks of `reader`, writing the report to `out`
    ///
    /// Track-level faults are reported and skipped; only failures writing
    /// to `out` are returned as errors.
    pub fn scan_file<R, W>(&mut self, reader: &mut R, out: &mut W) -> Result<ErrorStats>
    where
        R: ImageReader + ?Sized,
        W: Write + ?Sized,
    {
        self.tracker.reset();
        self.totals = ErrorStats::default();

        if self.options.verbosity.shows_header() {
            write_header(out)?;
        }

        let geometry = reader.geometry();
        info!("Scanning {} tracks, {} side(s)", geometry.tracks, geometry.sides);

        for track in 0..geometry.tracks {
            for side in 0..geometry.sides {
                let mut scanner = TrackScanner::new(reader);
                if let Some(limit) = self.buffer_limit {
                    scanner = scanner.with_buffer_limit(limit);
                }
                let result = scanner.scan(track, side);
                self.merge(&result, out)?;
            }
        }

        write_totals(out, &self.totals)?;
        Ok(self.totals)
    }

    /// Fold one track into the totals and print its line if it is reportable
    fn merge<W: Write + ?Sized>(&mut self, result: &TrackScanResult, out: &mut W) -> Result<()> {
        self.totals += result.stats();

        let change = match result.outcome {
            TrackOutcome::SeekFailed => {
                writeln!(
                    out,
                    "Seek error on track {}, side {}!",
                    result.track, result.side
                )?;
                return Ok(());
            }
            // A partial count says nothing about the track's real layout
            TrackOutcome::Truncated { .. } => SectorCountChange::Unchanged,
            TrackOutcome::Complete => self.tracker.observe(result.total_sectors),
        };

        if self.should_report(result, change) {
            writeln!(out, "{}", TrackReport::new(result, change).render(&self.formatter))?;
        }
        Ok(())
    }

    fn should_report(&self, result: &TrackScanResult, change: SectorCountChange) -> bool {
        result.error_count() > 0 || change.is_changed() || self.options.verbosity.shows_all_tracks()
    }
}

/// Scan an image with the given options, writing the report to `out`
pub fn scan_file<R, W>(reader: &mut R, options: ScanOptions, out: &mut W) -> Result<ErrorStats>
where
    R: ImageReader + ?Sized,
    W: Write + ?Sized,
{
    FileAggregator::new(options).scan_file(reader, out)
}
