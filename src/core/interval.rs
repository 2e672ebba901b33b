use std::fmt::{Debug, Formatter};

use chrono::{DateTime, FixedOffset, TimeDelta};

/// Time interval of a published price, in the offset the source reported it in.
#[derive(Copy, Clone, Eq, PartialEq)]
#[must_use]
pub struct Interval {
    /// Inclusive.
    pub start: DateTime<FixedOffset>,

    /// Exclusive.
    pub end: DateTime<FixedOffset>,
}

impl Debug for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}..{:?}", self.start, self.end)
    }
}

impl Interval {
    pub const fn new(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Self {
        Self { start, end }
    }

    pub const fn with_end(mut self, end: DateTime<FixedOffset>) -> Self {
        self.end = end;
        self
    }

    #[must_use]
    pub fn duration(self) -> TimeDelta {
        self.end - self.start
    }
}
