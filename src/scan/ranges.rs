/// Compact rendering of sector number sets: `{3,4,5,9}` becomes `"3-5, 9"`

use crate::error::{CheckError, Result};
use crate::scan::bitmap::RangeBitmap;
use std::fmt::Write;

/// Upper bound on a rendered list over the full `0..=255` domain.
///
/// A range token with its separator is at most `"253-254, "`, nine
/// characters, and consumes at least three values (two members and a gap).
/// A single token is at most `"254, "` and consumes at least two. Neither
/// exceeds three characters per domain value.
pub const MAX_RANGE_TEXT_LEN: usize = 3 * 256;

/// Renders a [`RangeBitmap`] as comma-separated values and closed ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeFormatter {
    limit: usize,
}

impl Default for RangeFormatter {
    fn default() -> Self {
        Self {
            limit: MAX_RANGE_TEXT_LEN,
        }
    }
}

impl RangeFormatter {
    /// Formatter with the full-domain bound
    pub fn new() -> Self {
        Self::default()
    }

    /// Formatter that refuses output longer than `limit` characters
    pub fn with_limit(limit: usize) -> Self {
        Self { limit }
    }

    /// Render the members of `bitmap` in `0..=max_value`
    ///
    /// Returns `RangeFormatOverflow` rather than a shortened list when the
    /// text does not fit.
    pub fn format(&self, bitmap: &RangeBitmap, max_value: u8) -> Result<String> {
        let mut out = String::with_capacity(self.limit.min(MAX_RANGE_TEXT_LEN));
        let mut run: Option<(u8, u8)> = None;

        for n in 0..=max_value {
            if !bitmap.test(n) {
                if let Some((start, end)) = run.take() {
                    self.push_token(&mut out, start, end)?;
                }
                continue;
            }

            run = match run {
                Some((start, end)) if end + 1 == n => Some((start, n)),
                _ => Some((n, n)),
            };
        }

        if let Some((start, end)) = run {
            self.push_token(&mut out, start, end)?;
        }

        Ok(out)
    }

    fn push_token(&self, out: &mut String, start: u8, end: u8) -> Result<()> {
        if !out.is_empty() {
            out.push_str(", ");
        }

        // Writing to a String cannot fail
        let _ = if start == end {
            write!(out, "{}", start)
        } else {
            write!(out, "{}-{}", start, end)
        };

        if out.len() > self.limit {
            return Err(CheckError::RangeFormatOverflow { limit: self.limit });
        }
        Ok(())
    }
}
