/// Detection of sector counts that change between tracks

/// How a track's sector count compares with the previously scanned track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectorCountChange {
    /// First track of the file; nothing to compare against
    Baseline,
    /// Same count as the previous track
    Unchanged,
    /// Count differs from the previous track
    Changed {
        /// Sector count of the previous track
        previous: usize,
    },
}

impl SectorCountChange {
    /// Check if this is a reportable change
    pub fn is_changed(&self) -> bool {
        matches!(self, SectorCountChange::Changed { .. })
    }
}

/// Remembers the sector count of the most recently scanned track
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectorCountTracker {
    previous: Option<usize>,
}

impl SectorCountTracker {
    /// Create a tracker with no baseline
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare `count` with the baseline, then make `count` the new baseline
    pub fn observe(&mut self, count: usize) -> SectorCountChange {
        let change = match self.previous {
            None => SectorCountChange::Baseline,
            Some(previous) if previous == count => SectorCountChange::Unchanged,
            Some(previous) => SectorCountChange::Changed { previous },
        };
        self.previous = Some(count);
        change
    }

    /// Forget the baseline
    pub fn reset(&mut self) {
        self.previous = None;
    }
}
