//! Builds Extended DSK images in memory for the integration tests

#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

pub const EXTENDED_SIGNATURE: &[u8] = b"EXTENDED CPC DSK File\r\nDisk-Info\r\n";

/// One sector info entry: R, ST1, ST2 and stored data length
#[derive(Clone, Copy)]
pub struct SectorSpec {
    pub id: u8,
    pub st1: u8,
    pub st2: u8,
    pub stored: u16,
}

impl SectorSpec {
    pub fn ok(id: u8) -> Self {
        Self { id, st1: 0, st2: 0, stored: 512 }
    }

    pub fn data_crc(id: u8) -> Self {
        Self { id, st1: 0x20, st2: 0x20, stored: 512 }
    }

    pub fn id_crc(id: u8) -> Self {
        Self { id, st1: 0x20, st2: 0, stored: 512 }
    }

    pub fn missing(id: u8) -> Self {
        Self { id, st1: 0x01, st2: 0x01, stored: 0 }
    }
}

/// Healthy sectors numbered 1..=count
pub fn clean(count: u8) -> Vec<SectorSpec> {
    (1..=count).map(SectorSpec::ok).collect()
}

/// Extended DSK bytes; `tracks[t][s]` lists the sectors of track t, side s
pub fn extended_dsk(tracks: &[Vec<Vec<SectorSpec>>]) -> Vec<u8> {
    let sides = tracks.first().map_or(1, |t| t.len());
    let mut header = vec![0u8; 256];
    header[..EXTENDED_SIGNATURE.len()].copy_from_slice(EXTENDED_SIGNATURE);
    header[0x30] = tracks.len() as u8;
    header[0x31] = sides as u8;

    let mut body = Vec::new();
    for (t, track) in tracks.iter().enumerate() {
        for (s, sectors) in track.iter().enumerate() {
            let block = track_block(t as u8, s as u8, sectors);
            header[0x34 + t * sides + s] = (block.len() / 256) as u8;
            body.extend_from_slice(&block);
        }
    }

    header.extend_from_slice(&body);
    header
}

fn track_block(track: u8, side: u8, sectors: &[SectorSpec]) -> Vec<u8> {
    let mut block = vec![0u8; 256];
    block[..12].copy_from_slice(b"Track-Info\r\n");
    block[0x10] = track;
    block[0x11] = side;
    block[0x14] = 2;
    block[0x15] = sectors.len() as u8;
    block[0x16] = 0x4E;
    block[0x17] = 0xE5;

    for (i, sector) in sectors.iter().enumerate() {
        let sib = 0x18 + i * 8;
        block[sib] = track;
        block[sib + 1] = side;
        block[sib + 2] = sector.id;
        block[sib + 3] = 2;
        block[sib + 4] = sector.st1;
        block[sib + 5] = sector.st2;
        block[sib + 6..sib + 8].copy_from_slice(&sector.stored.to_le_bytes());
    }

    for sector in sectors {
        block.extend(std::iter::repeat(0xE5).take(sector.stored as usize));
    }
    let padded = block.len().div_ceil(256) * 256;
    block.resize(padded, 0);
    block
}

/// Write image bytes to a temporary `.dsk` file
pub fn write_temp(bytes: &[u8]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".dsk")
        .tempfile()
        .expect("create temp file");
    file.write_all(bytes).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}
