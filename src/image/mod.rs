/// DSK image data structures

/// Disk structure
pub mod disk;
/// [`ImageReader`](crate::probe::ImageReader) over a loaded image
pub mod dsk_reader;
/// Sector definition and FDC status
pub mod sector;
/// Track definition
pub mod track;

pub use disk::Disk;
pub use dsk_reader::DskReader;
pub use sector::{Sector, SectorId};
pub use track::Track;

use crate::error::Result;
use crate::format::DiskImageFormat;
use crate::probe::Geometry;
use std::path::Path;

/// A DSK image loaded into memory
#[derive(Debug, Clone)]
pub struct DiskImage {
    /// DSK format type (Standard or Extended)
    pub(crate) format: DiskImageFormat,
    /// Track count declared in the disk info block
    pub(crate) num_tracks: u8,
    /// Disks (one per side)
    pub(crate) disks: Vec<Disk>,
}

impl DiskImage {
    /// Open a DSK file from disk
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        crate::io::reader::read_dsk(path)
    }

    /// Assemble an image from already-built sides
    pub fn from_disks(format: DiskImageFormat, disks: Vec<Disk>) -> Self {
        let num_tracks = disks
            .iter()
            .map(|d| d.track_count())
            .max()
            .unwrap_or(0)
            .min(u8::MAX as usize) as u8;

        Self {
            format,
            num_tracks,
            disks,
        }
    }

    /// Get the format type
    pub fn format(&self) -> DiskImageFormat {
        self.format
    }

    /// Track and side counts to scan
    pub fn geometry(&self) -> Geometry {
        Geometry {
            tracks: self.num_tracks,
            sides: self.disks.len().min(2) as u8,
        }
    }

    /// Get a disk by side number
    pub fn get_disk(&self, side: u8) -> Option<&Disk> {
        self.disks.get(side as usize)
    }

    /// Get a track by side and track number
    pub fn get_track(&self, side: u8, track: u8) -> Option<&Track> {
        self.get_disk(side).and_then(|d| d.get_track(track))
    }
}
