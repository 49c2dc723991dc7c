/// Fixed-domain sector number set

/// A set of sector numbers in `0..=255`, packed into 256 bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RangeBitmap([u64; 4]);

impl RangeBitmap {
    /// Create an empty bitmap
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn locate(n: u8) -> (usize, u64) {
        ((n >> 6) as usize, 1u64 << (n & 63))
    }

    /// Add `n` to the set; setting twice has no further effect
    #[inline]
    pub fn set(&mut self, n: u8) {
        let (word, mask) = Self::locate(n);
        self.0[word] |= mask;
    }

    /// Check whether `n` is in the set
    #[inline]
    pub fn test(&self, n: u8) -> bool {
        let (word, mask) = Self::locate(n);
        self.0[word] & mask != 0
    }

    /// Check if no value is set
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&w| w == 0)
    }

    /// Number of values in the set
    pub fn len(&self) -> usize {
        self.0.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Iterate members in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(move |&n| self.test(n))
    }
}

impl FromIterator<u8> for RangeBitmap {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut bitmap = RangeBitmap::new();
        for n in iter {
            bitmap.set(n);
        }
        bitmap
    }
}
