//! Where "today" comes from.
//!
//! Status checks on [`Festival`](crate::model::Festival) and
//! [`Agenda`](crate::agenda::Agenda) take the current date as a parameter;
//! callers obtain it from a [`Clock`] once and pass it down.

use chrono::{Local, NaiveDate};

/// A source for the current date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the local system date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
