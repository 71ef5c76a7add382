use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{TextError, TextResult};

/// A contiguous range of time the user marked as available.
///
/// Both bounds are absolute instants and serialize as RFC 3339 strings, so
/// the same slot reads identically no matter which timezone it was picked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeSlot {
    /// Creates a slot, rejecting empty or inverted ranges.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> TextResult<Self> {
        if start >= end {
            return Err(TextError::Validation(format!(
                "Slot start {} must be before end {}",
                start.to_rfc3339(),
                end.to_rfc3339()
            )));
        }

        Ok(Self { start, end })
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// True when this slot has exactly the given bounds.
    pub fn matches(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start == start && self.end == end
    }
}
