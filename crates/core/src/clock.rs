//! Time source abstraction.
//!
//! Services stamp `respondedAt`, `invitedAt` and `lastUpdated` through a
//! `Clock` so tests can pin "now".

use chrono::{DateTime, NaiveDate, Utc};

/// Source of the current time.
pub trait Clock: Send + Sync + core::fmt::Debug {
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar date (UTC), for date-only stamps.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    time: DateTime<Utc>,
}

impl FixedClock {
    pub const fn new(time: DateTime<Utc>) -> Self {
        Self { time }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.time
    }
}
