//! Time source for the calculators
//!
//! Every "today" the calculators see comes through a [`Clock`], so tests and
//! reproducible runs can pin the date instead of reading the system clock.

use chrono::{Local, NaiveDate};

/// Source of the current calendar date
pub trait Clock {
    /// The current date, without a time-of-day component
    fn today(&self) -> NaiveDate;
}

/// Reads the local system clock on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
