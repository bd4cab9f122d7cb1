//! Stay Ranges

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Half-open date interval `[check_in, check_out)` for a room booking.
///
/// Inverted and same-day ranges are representable; they are billed as one
/// night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StayRange {
    pub check_in: Date,
    pub check_out: Date,
}

impl StayRange {
    #[must_use]
    pub const fn new(check_in: Date, check_out: Date) -> Self {
        Self {
            check_in,
            check_out,
        }
    }

    /// Number of billable nights, never less than one.
    #[must_use]
    pub fn nights(&self) -> u32 {
        let days = self.check_in.duration_until(self.check_out).as_hours() / 24;

        u32::try_from(days).ok().filter(|n| *n > 0).unwrap_or(1)
    }

    /// `[a, b)` overlaps `[c, d)` iff `a < d` and `c < b`.
    #[cfg(test)]
    pub(crate) fn overlaps(&self, other: &Self) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }
}
