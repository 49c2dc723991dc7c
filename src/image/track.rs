/// Track data structures

use crate::image::sector::Sector;

/// A disk track: its sectors in physical order as dumped
///
/// Copy-protected disks can repeat sector IDs on one track, so sectors are
/// kept in a plain list rather than keyed by ID.
#[derive(Debug, Clone)]
pub struct Track {
    /// Physical track number
    pub track_number: u8,
    /// Physical side number (0 or 1)
    pub side_number: u8,
    /// Sectors in this track
    sectors: Vec<Sector>,
}

impl Track {
    /// Create a new, unformatted track
    pub fn new(track_number: u8, side_number: u8) -> Self {
        Self {
            track_number,
            side_number,
            sectors: Vec::new(),
        }
    }

    /// Add a sector to this track
    pub fn add_sector(&mut self, sector: Sector) {
        self.sectors.push(sector);
    }

    /// Get a reference to all sectors
    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    /// Get a sector by its position index
    pub fn get_sector_by_index(&self, index: usize) -> Option<&Sector> {
        self.sectors.get(index)
    }

    /// Get the number of sectors in this track
    pub fn sector_count(&self) -> usize {
        self.sectors.len()
    }

    /// Get list of all sector IDs in this track
    pub fn sector_ids(&self) -> Vec<u8> {
        self.sectors.iter().map(|s| s.id.sector).collect()
    }
}
