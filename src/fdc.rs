/// Floppy Disk Controller (FDC) status register definitions
///
/// DSK images store the ST1/ST2 result bytes of the NEC uPD765 for every
/// sector, which is how a dump records CRC failures and missing marks.

use std::fmt;

/// FDC Status Register 1 (ST1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FdcStatus1(pub u8);

impl FdcStatus1 {
    /// End of Cylinder (EN) - Bit 7
    pub const EN: u8 = 0x80;

    /// Data Error (DE) - Bit 5
    /// Set when a CRC error occurs in either the ID field or data field
    pub const DE: u8 = 0x20;

    /// No Data (ND) - Bit 2
    pub const ND: u8 = 0x04;

    /// Missing Address Mark (MA) - Bit 0
    pub const MA: u8 = 0x01;

    /// Create a new FdcStatus1 from a raw byte
    #[inline]
    pub fn new(value: u8) -> Self {
        FdcStatus1(value)
    }

    /// Check if data error bit is set
    #[inline]
    pub fn data_error(&self) -> bool {
        (self.0 & Self::DE) != 0
    }
}

impl fmt::Display for FdcStatus1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags: Vec<&str> = [
            (Self::EN, "EN"),
            (Self::DE, "DE"),
            (Self::ND, "ND"),
            (Self::MA, "MA"),
        ]
        .iter()
        .filter(|(bit, _)| self.0 & bit != 0)
        .map(|&(_, name)| name)
        .collect();

        if flags.is_empty() {
            write!(f, "OK")
        } else {
            write!(f, "{}", flags.join("|"))
        }
    }
}

/// FDC Status Register 2 (ST2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FdcStatus2(pub u8);

impl FdcStatus2 {
    /// Control Mark (CM) - Bit 6
    /// Set if a sector with deleted data address mark is read
    pub const CM: u8 = 0x40;

    /// Data Error in Data Field (DD) - Bit 5
    pub const DD: u8 = 0x20;

    /// Missing Address Mark in Data Field (MD) - Bit 0
    pub const MD: u8 = 0x01;

    /// Create a new FdcStatus2 from a raw byte
    #[inline]
    pub fn new(value: u8) -> Self {
        FdcStatus2(value)
    }

    /// Check if data field error bit is set
    #[inline]
    pub fn data_field_error(&self) -> bool {
        (self.0 & Self::DD) != 0
    }

    /// Check if missing data mark bit is set
    #[inline]
    pub fn missing_data_mark(&self) -> bool {
        (self.0 & Self::MD) != 0
    }
}

impl fmt::Display for FdcStatus2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags: Vec<&str> = [(Self::CM, "CM"), (Self::DD, "DD"), (Self::MD, "MD")]
            .iter()
            .filter(|(bit, _)| self.0 & bit != 0)
            .map(|&(_, name)| name)
            .collect();

        if flags.is_empty() {
            write!(f, "OK")
        } else {
            write!(f, "{}", flags.join("|"))
        }
    }
}
