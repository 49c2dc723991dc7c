/*!
# dskcheck

Reports bad sectors in DSK floppy disk images, track by track.

## Features

- Classifies every sector slot as ID field CRC error, data CRC error or
  missing data, from the FDC status bytes recorded in the image
- Flags tracks whose sector count differs from the track scanned before
- Compact range lists (`3-5, 9`) instead of raw sector lists
- Reads Standard and Extended DSK formats
- The scanner works against any [`ImageReader`], not only DSK files

## Quick Start

```rust,no_run
use dskcheck::{DiskImage, DskReader, ScanOptions};

let image = DiskImage::open("disk.dsk")?;
let mut reader = DskReader::new(image);

let totals = dskcheck::scan_file(&mut reader, ScanOptions::default(), &mut std::io::stdout())?;
println!("{} errors", totals.total());
# Ok::<(), dskcheck::CheckError>(())
```

## Modules

- `scan`: classification, range formatting, track and file scanning
- `probe`: the [`ImageReader`] contract the scanner consumes
- `image`: DSK image data structures and the DSK [`ImageReader`]
- `io`: DSK file parsing
- `format`: DSK format detection and constants
- `fdc`: FDC (Floppy Disk Controller) status registers
- `error`: Error types and Result alias
*/

#![warn(missing_docs)]

/// Error types and Result alias
pub mod error;
/// FDC (Floppy Disk Controller) status codes
pub mod fdc;
/// DSK format detection and constants
pub mod format;
/// Image data structures (DiskImage, Track, Sector)
pub mod image;
/// I/O operations for reading DSK files
pub mod io;
/// Image reader contract
pub mod probe;
/// Sector error classification and reporting
pub mod scan;

// Re-export common types
pub use error::{CheckError, Result};
pub use fdc::{FdcStatus1, FdcStatus2};
pub use format::DiskImageFormat;
pub use image::{Disk, DiskImage, DskReader, Sector, SectorId, Track};
pub use probe::{
    Geometry, IdField, IdFieldStatus, ImageReader, SectorDataStatus, SectorProbeResult, SizeClass,
};
pub use scan::{
    scan_file, scan_track, ErrorStats, FileAggregator, RangeBitmap, RangeFormatter, ScanOptions,
    SectorClassifier, SectorCountChange, SectorCountTracker, TrackOutcome, TrackScanResult,
    TrackScanner, Verbosity,
};
