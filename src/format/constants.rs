/// DSK format magic bytes and layout constants

/// Standard DSK format signature
pub const STANDARD_DSK_SIGNATURE: &[u8] = b"MV - CPCEMU Disk-File\r\nDisk-Info\r\n";

/// Extended DSK format signature
pub const EXTENDED_DSK_SIGNATURE: &[u8] = b"EXTENDED CPC DSK File\r\nDisk-Info\r\n";

/// Track-Info block marker
pub const TRACK_INFO_MARKER: &[u8] = b"Track-Info";

/// Size of disk info block
pub const DISK_INFO_BLOCK_SIZE: usize = 256;

/// Size of track info block
pub const TRACK_INFO_BLOCK_SIZE: usize = 256;

/// Offset of the sector size code within a track info block
pub const TRACK_INFO_SIZE_CODE_OFFSET: usize = 0x14;

/// Offset of the sector count within a track info block
pub const TRACK_INFO_SECTOR_COUNT_OFFSET: usize = 0x15;

/// Offset of the sector info list within a track info block
pub const TRACK_INFO_SECTOR_LIST_OFFSET: usize = 0x18;

/// Size of sector info entry
pub const SECTOR_INFO_SIZE: usize = 8;

/// Largest FDC size code with a defined byte length (32 KiB)
pub const MAX_SIZE_CODE: u8 = 8;

/// Offset of track count in disk info block
pub const DISK_INFO_TRACK_COUNT_OFFSET: usize = 0x30;

/// Offset of side count in disk info block
pub const DISK_INFO_SIDE_COUNT_OFFSET: usize = 0x31;

/// Offset of track size in disk info block (standard format)
pub const DISK_INFO_TRACK_SIZE_OFFSET: usize = 0x32;

/// Offset of extended track size table in disk info block (extended format)
pub const DISK_INFO_EXT_TRACK_SIZE_OFFSET: usize = 0x34;

/// Convert FDC size code to byte size, `128 << code`
///
/// Codes above [`MAX_SIZE_CODE`] are clamped to it.
#[inline]
pub fn fdc_size_to_bytes(size_code: u8) -> usize {
    128usize << size_code.min(MAX_SIZE_CODE)
}
