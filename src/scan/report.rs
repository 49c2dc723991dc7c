/// Text layout of the per-track report and file summary

use crate::scan::bitmap::RangeBitmap;
use crate::scan::classify::ErrorStats;
use crate::scan::ranges::RangeFormatter;
use crate::scan::track::TrackScanResult;
use crate::scan::tracker::SectorCountChange;
use log::warn;
use std::io::{self, Write};

/// Column header printed above track lines at verbosity 1 and up
pub const HEADER: [&str; 2] = [
    "Trk/Side  Sector  Sec Cnt  Prev    Sector  Missing  ID Field  Error",
    "          Count   Change?  SecCnt  Errors  Sectors  Errors    List",
];

/// Replaces the rest of an error list that did not fit its bound
pub const OVERFLOW_MARKER: &str = "<error list too long>";

/// Write the column header and a rule under it
pub fn write_header<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    for line in HEADER {
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "{}", "-".repeat(HEADER[0].len()))
}

/// Write the per-file totals, omitting categories with no errors
pub fn write_totals<W: Write + ?Sized>(out: &mut W, totals: &ErrorStats) -> io::Result<()> {
    writeln!(out)?;

    if totals.is_clean() {
        return writeln!(out, "No bad sectors found.");
    }

    let categories = [
        ("Sector CRC errors", totals.sector_crc_errors),
        ("Missing sectors", totals.sector_missing_errors),
        ("ID field CRC errors", totals.id_crc_errors),
    ];
    for (label, count) in categories.iter().filter(|(_, count)| *count > 0) {
        writeln!(out, "{}: {}", label, count)?;
    }
    Ok(())
}

/// One report line for a scanned track
#[derive(Debug)]
pub struct TrackReport<'a> {
    result: &'a TrackScanResult,
    change: SectorCountChange,
}

impl<'a> TrackReport<'a> {
    /// Pair a scan result with its sector count comparison
    pub fn new(result: &'a TrackScanResult, change: SectorCountChange) -> Self {
        Self { result, change }
    }

    /// Render the line; the error list uses `formatter` for each category
    pub fn render(&self, formatter: &RangeFormatter) -> String {
        let stats = self.result.stats();
        let change = match self.change {
            SectorCountChange::Changed { previous } => format!("Y      {:>3}", previous),
            SectorCountChange::Baseline | SectorCountChange::Unchanged => " ".repeat(10),
        };

        let line = format!(
            "{:>3}/{}      {:>3}       {}     {:>3}      {:>3}      {:>3}     {}",
            self.result.track,
            self.result.side,
            self.result.total_sectors,
            change,
            stats.sector_crc_errors,
            stats.sector_missing_errors,
            stats.id_crc_errors,
            self.error_list(formatter),
        );
        line.trim_end().to_string()
    }

    /// `CRC: ..; Missing: ..; ID: ..` for the categories that have members
    pub fn error_list(&self, formatter: &RangeFormatter) -> String {
        let classifier = &self.result.classifier;
        let categories: [(&str, &RangeBitmap); 3] = [
            ("CRC", classifier.crc_errors()),
            ("Missing", classifier.missing()),
            ("ID", classifier.id_errors()),
        ];

        let mut parts = Vec::new();
        for (tag, bitmap) in categories {
            if bitmap.is_empty() {
                continue;
            }
            match formatter.format(bitmap, u8::MAX) {
                Ok(ranges) => parts.push(format!("{}: {}", tag, ranges)),
                Err(e) => {
                    warn!(
                        "Track {}, side {}: {} list: {}",
                        self.result.track,
                        self.result.side,
                        tag,
                        e
                    );
                    parts.push(OVERFLOW_MARKER.to_string());
                    break;
                }
            }
        }
        parts.join("; ")
    }
}
