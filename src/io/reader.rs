/// DSK file reader

use crate::error::{CheckError, Result};
use crate::fdc::{FdcStatus1, FdcStatus2};
use crate::format::constants::*;
use crate::format::{detect_format, DiskImageFormat};
use crate::image::{Disk, DiskImage, Sector, SectorId, Track};
use log::{debug, warn};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read a DSK file from disk
pub fn read_dsk<P: AsRef<Path>>(path: P) -> Result<DiskImage> {
    let file = File::open(path)?;
    read_dsk_from(file)
}

/// Read a DSK image from any byte source
pub fn read_dsk_from<R: Read>(mut source: R) -> Result<DiskImage> {
    // Read disk info block (256 bytes)
    let mut disk_info = vec![0u8; DISK_INFO_BLOCK_SIZE];
    source.read_exact(&mut disk_info)?;

    let format = detect_format(&disk_info)
        .ok_or_else(|| CheckError::invalid_format("Unknown DSK format"))?;

    let num_tracks = disk_info[DISK_INFO_TRACK_COUNT_OFFSET];
    let num_sides = disk_info[DISK_INFO_SIDE_COUNT_OFFSET];
    if num_sides == 0 || num_sides > 2 {
        return Err(CheckError::parse(
            DISK_INFO_SIDE_COUNT_OFFSET,
            format!("Unsupported side count {}", num_sides),
        ));
    }
    debug!(
        "{}: {} tracks, {} side(s)",
        format.name(),
        num_tracks,
        num_sides
    );

    // Track blocks are stored interleaved: T0S0, T0S1, T1S0, ...
    let track_sizes = track_sizes(format, &disk_info, num_tracks, num_sides);
    let mut disks: Vec<Disk> = (0..num_sides).map(Disk::new).collect();
    let mut offset = DISK_INFO_BLOCK_SIZE;

    for track_num in 0..num_tracks {
        for side in 0..num_sides {
            let index = track_num as usize * num_sides as usize + side as usize;
            let track_size = track_sizes[index];

            let track = if track_size == 0 {
                // Unformatted track
                Track::new(track_num, side)
            } else {
                read_track(&mut source, format, track_num, side, track_size, offset)?
            };

            offset += track_size;
            disks[side as usize].add_track(track);
        }
    }

    Ok(DiskImage {
        format,
        num_tracks,
        disks,
    })
}

/// Size of every track block, in storage order
fn track_sizes(
    format: DiskImageFormat,
    disk_info: &[u8],
    num_tracks: u8,
    num_sides: u8,
) -> Vec<usize> {
    let count = num_tracks as usize * num_sides as usize;

    match format {
        DiskImageFormat::StandardDSK => {
            let size = u16::from_le_bytes([
                disk_info[DISK_INFO_TRACK_SIZE_OFFSET],
                disk_info[DISK_INFO_TRACK_SIZE_OFFSET + 1],
            ]) as usize;
            vec![size; count]
        }
        // Extended format has per-track sizes (in 256-byte units)
        DiskImageFormat::ExtendedDSK => (0..count)
            .map(|i| {
                disk_info
                    .get(DISK_INFO_EXT_TRACK_SIZE_OFFSET + i)
                    .map_or(0, |&units| units as usize * 256)
            })
            .collect(),
    }
}

/// Read a single track block
fn read_track<R: Read>(
    source: &mut R,
    format: DiskImageFormat,
    track_num: u8,
    side: u8,
    track_size: usize,
    offset: usize,
) -> Result<Track> {
    let mut track_data = vec![0u8; track_size];
    source.read_exact(&mut track_data)?;

    if track_data.len() < TRACK_INFO_BLOCK_SIZE {
        return Err(CheckError::parse(offset, "Track too small"));
    }

    if !track_data.starts_with(TRACK_INFO_MARKER) {
        return Err(CheckError::parse(offset, "Invalid track marker"));
    }

    let stored_track = track_data[0x10];
    let stored_side = track_data[0x11];
    if stored_track != track_num || stored_side != side {
        warn!(
            "Track block at offset {} claims track {} side {}, expected {}/{}",
            offset, stored_track, stored_side, track_num, side
        );
    }

    let num_sectors = track_data[TRACK_INFO_SECTOR_COUNT_OFFSET];
    let track_sector_size = fdc_size_to_bytes(track_data[TRACK_INFO_SIZE_CODE_OFFSET]);

    let mut track = Track::new(track_num, side);

    // Sector data follows the 256-byte track info block
    let mut sector_offset = TRACK_INFO_BLOCK_SIZE;

    for i in 0..num_sectors as usize {
        let sib_offset = TRACK_INFO_SECTOR_LIST_OFFSET + (i * SECTOR_INFO_SIZE);
        if sib_offset + SECTOR_INFO_SIZE > TRACK_INFO_BLOCK_SIZE {
            warn!(
                "Track {} side {}: sector list truncated at {} of {} entries",
                track_num, side, i, num_sectors
            );
            break;
        }

        let sib = &track_data[sib_offset..sib_offset + SECTOR_INFO_SIZE];
        let id = SectorId::new(sib[0], sib[1], sib[2], sib[3]);

        // Standard images store every sector at the track's size code, whatever
        // N the ID claims; extended images record the stored length, which may
        // be 0 for a missing field
        let stored_size = match format {
            DiskImageFormat::StandardDSK => track_sector_size,
            DiskImageFormat::ExtendedDSK => u16::from_le_bytes([sib[6], sib[7]]) as usize,
        };

        let end = (sector_offset + stored_size).min(track_data.len());
        let sector_data = track_data
            .get(sector_offset..end)
            .map(<[u8]>::to_vec)
            .unwrap_or_default();
        sector_offset += stored_size;

        track.add_sector(Sector::with_status(
            id,
            FdcStatus1::new(sib[4]),
            FdcStatus2::new(sib[5]),
            sector_data,
        ));
    }

    Ok(track)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::DskReader;
    use crate::scan::{scan_file, ScanOptions};
    use std::io::Cursor;

    fn standard_image(tracks: u8, sectors: u8) -> Vec<u8> {
        let track_size = TRACK_INFO_BLOCK_SIZE + sectors as usize * 512;
        let mut bytes = vec![0u8; DISK_INFO_BLOCK_SIZE];
        bytes[..STANDARD_DSK_SIGNATURE.len()].copy_from_slice(STANDARD_DSK_SIGNATURE);
        bytes[DISK_INFO_TRACK_COUNT_OFFSET] = tracks;
        bytes[DISK_INFO_SIDE_COUNT_OFFSET] = 1;
        bytes[DISK_INFO_TRACK_SIZE_OFFSET..DISK_INFO_TRACK_SIZE_OFFSET + 2]
            .copy_from_slice(&(track_size as u16).to_le_bytes());

        for t in 0..tracks {
            let mut block = vec![0xE5u8; track_size];
            block[..TRACK_INFO_BLOCK_SIZE].fill(0);
            block[..TRACK_INFO_MARKER.len()].copy_from_slice(TRACK_INFO_MARKER);
            block[0x10] = t;
            block[TRACK_INFO_SIZE_CODE_OFFSET] = 2;
            block[TRACK_INFO_SECTOR_COUNT_OFFSET] = sectors;
            block[0x17] = 0xE5;
            for s in 0..sectors as usize {
                let sib = TRACK_INFO_SECTOR_LIST_OFFSET + s * SECTOR_INFO_SIZE;
                block[sib] = t;
                block[sib + 2] = 0xC1 + s as u8;
                block[sib + 3] = 2;
            }
            bytes.extend_from_slice(&block);
        }
        bytes
    }

    #[test]
    fn test_read_standard_dsk() {
        let image = read_dsk_from(Cursor::new(standard_image(3, 9))).unwrap();

        assert_eq!(image.format(), DiskImageFormat::StandardDSK);
        assert_eq!(image.geometry().tracks, 3);
        assert_eq!(image.geometry().sides, 1);

        let track = image.get_track(0, 2).unwrap();
        assert_eq!(track.sector_count(), 9);
        assert_eq!(track.sector_ids()[0], 0xC1);
        assert_eq!(track.sectors()[8].actual_size(), 512);
    }

    #[test]
    fn test_standard_sizes_come_from_track_header() {
        // An ID claiming N=6 must not shift the data of the sectors after it
        let mut bytes = standard_image(1, 9);
        let first_sib = DISK_INFO_BLOCK_SIZE + TRACK_INFO_SECTOR_LIST_OFFSET;
        bytes[first_sib + 3] = 6;
        bytes[first_sib + SECTOR_INFO_SIZE + 3] = 1;

        let image = read_dsk_from(Cursor::new(bytes)).unwrap();
        let track = image.get_track(0, 0).unwrap();

        assert_eq!(track.sector_count(), 9);
        for sector in track.sectors() {
            assert_eq!(sector.actual_size(), 512);
            assert!(!sector.is_data_missing());
        }
        assert_eq!(track.sectors()[0].id.size_bytes(), 8192);
    }

    #[test]
    fn test_oversized_id_scans_clean() {
        let mut bytes = standard_image(1, 9);
        bytes[DISK_INFO_BLOCK_SIZE + TRACK_INFO_SECTOR_LIST_OFFSET + 3] = 6;
        let mut reader = DskReader::new(read_dsk_from(Cursor::new(bytes)).unwrap());

        let mut out = Vec::new();
        let stats = scan_file(&mut reader, ScanOptions::default(), &mut out).unwrap();

        assert_eq!(stats.sector_missing_errors, 0);
        assert!(stats.is_clean());
    }

    #[test]
    fn test_rejects_unknown_signature() {
        let bytes = vec![0u8; DISK_INFO_BLOCK_SIZE];
        let err = read_dsk_from(Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, CheckError::InvalidFormat(_)));
    }

    #[test]
    fn test_rejects_bad_track_marker() {
        let mut bytes = standard_image(1, 1);
        bytes[DISK_INFO_BLOCK_SIZE] = b'X';
        let err = read_dsk_from(Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, CheckError::ParseError { offset: 256, .. }));
    }

    #[test]
    fn test_truncated_file_is_io_error() {
        let mut bytes = standard_image(2, 9);
        bytes.truncate(bytes.len() - 100);
        let err = read_dsk_from(Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, CheckError::Io(_)));
    }
}
