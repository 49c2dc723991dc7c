/// Disk (side) data structures

use crate::image::track::Track;

/// A disk side containing multiple tracks
#[derive(Debug, Clone)]
pub struct Disk {
    /// Side number (0 or 1)
    pub side_number: u8,
    /// Tracks on this disk side
    tracks: Vec<Track>,
}

impl Disk {
    /// Create a new disk side
    pub fn new(side_number: u8) -> Self {
        Self {
            side_number,
            tracks: Vec::new(),
        }
    }

    /// Add a track to this disk
    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Get a track by its track number
    pub fn get_track(&self, track_number: u8) -> Option<&Track> {
        self.tracks.get(track_number as usize)
    }

    /// Get the number of tracks on this disk
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }
}
