/// Sector-by-sector access to a loaded DSK image

use crate::error::{CheckError, Result};
use crate::image::{DiskImage, Track};
use crate::probe::{Geometry, IdField, IdFieldStatus, ImageReader, SectorDataStatus, SizeClass};
use log::trace;

/// [`ImageReader`] over a [`DiskImage`], deriving statuses from ST1/ST2
#[derive(Debug)]
pub struct DskReader {
    image: DiskImage,
    /// Current (side, track)
    position: Option<(u8, u8)>,
    /// Index of the next sector slot on the current track
    next_slot: usize,
}

impl DskReader {
    /// Wrap an image; no track is selected until [`ImageReader::seek`]
    pub fn new(image: DiskImage) -> Self {
        Self {
            image,
            position: None,
            next_slot: 0,
        }
    }

    fn current_track(&self) -> Option<&Track> {
        let (side, track) = self.position?;
        self.image.get_track(side, track)
    }
}

impl ImageReader for DskReader {
    fn geometry(&self) -> Geometry {
        self.image.geometry()
    }

    fn seek(&mut self, track: u8, side: u8) -> Result<()> {
        if self.image.get_track(side, track).is_none() {
            self.position = None;
            return Err(CheckError::SeekFault { track, side });
        }

        self.position = Some((side, track));
        self.next_slot = 0;
        Ok(())
    }

    fn read_next_id(&mut self) -> Option<IdField> {
        let sector = self.current_track()?.get_sector_by_index(self.next_slot)?;

        let id = IdField {
            sector: sector.id.sector,
            size: SizeClass(sector.id.size_code),
            status: if sector.has_id_crc_error() {
                IdFieldStatus::CrcBad
            } else {
                IdFieldStatus::Ok
            },
        };
        trace!(
            "slot {} id {} size {} st1 {} st2 {}",
            self.next_slot,
            id.sector,
            id.size,
            sector.fdc_status1,
            sector.fdc_status2
        );

        self.next_slot += 1;
        Some(id)
    }

    fn read_sector_data(&mut self, id: &IdField, buf: &mut [u8]) -> Result<SectorDataStatus> {
        let slot = self.next_slot.checked_sub(1);
        let sector = self
            .current_track()
            .zip(slot)
            .and_then(|(t, slot)| t.get_sector_by_index(slot))
            .filter(|s| s.id.sector == id.sector)
            .ok_or_else(|| {
                CheckError::invalid_format(format!("no ID field read for sector {}", id.sector))
            })?;

        if sector.is_data_missing() {
            return Ok(SectorDataStatus::Absent);
        }

        let len = buf.len().min(sector.actual_size());
        buf[..len].copy_from_slice(&sector.data()[..len]);

        if sector.has_data_crc_error() {
            Ok(SectorDataStatus::CrcBad)
        } else {
            Ok(SectorDataStatus::Ok)
        }
    }
}
