//! Source of "now" for the handlers.
//!
//! The engine never reads the system clock itself; handlers ask a [`Clock`]
//! and pass the instant down, which keeps every calculation reproducible
//! under test.

use chrono::{NaiveDateTime, Utc};

pub trait Clock: Send + Sync {
    /// Current instant, in UTC.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
