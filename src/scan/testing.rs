//! In-memory [`ImageReader`] for scanner tests

use crate::error::{CheckError, Result};
use crate::probe::{Geometry, IdField, IdFieldStatus, ImageReader, SectorDataStatus, SizeClass};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Slot {
    id: IdField,
    data: SectorDataStatus,
    read_error: bool,
}

impl Slot {
    pub(crate) fn both(sector: u8, id: IdFieldStatus, data: SectorDataStatus) -> Self {
        Self {
            id: IdField {
                sector,
                size: SizeClass(2),
                status: id,
            },
            data,
            read_error: false,
        }
    }

    pub(crate) fn ok(sector: u8) -> Self {
        Self::both(sector, IdFieldStatus::Ok, SectorDataStatus::Ok)
    }

    pub(crate) fn id(sector: u8, id: IdFieldStatus) -> Self {
        Self::both(sector, id, SectorDataStatus::Ok)
    }

    pub(crate) fn data(sector: u8, data: SectorDataStatus) -> Self {
        Self::both(sector, IdFieldStatus::Ok, data)
    }

    pub(crate) fn read_error(sector: u8) -> Self {
        Self {
            read_error: true,
            ..Self::ok(sector)
        }
    }

    pub(crate) fn with_size(mut self, code: u8) -> Self {
        self.id.size = SizeClass(code);
        self
    }
}

/// Tracks keyed by (track, side); a missing key fails to seek
#[derive(Debug, Default)]
pub(crate) struct ScriptedReader {
    geometry: Option<Geometry>,
    tracks: HashMap<(u8, u8), Vec<Slot>>,
    current: Option<(u8, u8)>,
    next: usize,
    buffer_sizes: Vec<usize>,
    seeks: Vec<(u8, u8)>,
}

impl ScriptedReader {
    pub(crate) fn new(tracks: u8, sides: u8) -> Self {
        Self {
            geometry: Some(Geometry { tracks, sides }),
            ..Self::default()
        }
    }

    pub(crate) fn single(slots: Vec<Slot>) -> Self {
        Self::new(1, 1).track(0, 0, slots)
    }

    pub(crate) fn track(mut self, track: u8, side: u8, slots: Vec<Slot>) -> Self {
        self.tracks.insert((track, side), slots);
        self
    }

    /// Track with `count` healthy sectors numbered from 1
    pub(crate) fn clean_track(self, track: u8, side: u8, count: u8) -> Self {
        self.track(track, side, (1..=count).map(Slot::ok).collect())
    }

    pub(crate) fn buffer_sizes(&self) -> &[usize] {
        &self.buffer_sizes
    }

    pub(crate) fn seeks(&self) -> &[(u8, u8)] {
        &self.seeks
    }
}

impl ImageReader for ScriptedReader {
    fn geometry(&self) -> Geometry {
        self.geometry.unwrap_or(Geometry { tracks: 0, sides: 1 })
    }

    fn seek(&mut self, track: u8, side: u8) -> Result<()> {
        self.seeks.push((track, side));
        if !self.tracks.contains_key(&(track, side)) {
            self.current = None;
            return Err(CheckError::SeekFault { track, side });
        }
        self.current = Some((track, side));
        self.next = 0;
        Ok(())
    }

    fn read_next_id(&mut self) -> Option<IdField> {
        let slot = self.tracks.get(&self.current?)?.get(self.next)?;
        self.next += 1;
        Some(slot.id)
    }

    fn read_sector_data(&mut self, id: &IdField, buf: &mut [u8]) -> Result<SectorDataStatus> {
        self.buffer_sizes.push(buf.len());
        let slot = self
            .current
            .and_then(|key| self.tracks.get(&key))
            .and_then(|slots| slots.get(self.next - 1))
            .copied()
            .ok_or_else(|| CheckError::invalid_format("no current slot"))?;

        if slot.read_error {
            return Err(CheckError::invalid_format(format!(
                "unreadable sector {}",
                id.sector
            )));
        }
        Ok(slot.data)
    }
}
