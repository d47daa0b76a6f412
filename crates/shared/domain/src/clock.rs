//! Source of the evaluation date used for age calculation.

use chrono::{NaiveDate, Utc};

/// Provides "today" for derived values such as age.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock date in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
