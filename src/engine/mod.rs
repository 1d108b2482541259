/// Age Engine — whole years plus the elapsed fraction of the current year.
///
/// Pure functions of a birth date and an injected "now". The fraction is
/// measured over the actual anniversary-to-anniversary span, so its
/// denominator is 365 or 366 days depending on whether a leap day falls
/// inside that span.

pub mod fraction;

pub use fraction::{best_fraction, gcd, DEFAULT_MAX_DENOMINATOR, MAX_NUMERATOR};

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{AgeError, Result};
use crate::models::AgeResult;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Parse a date of birth from an ISO 8601 string.
///
/// Accepts a plain calendar date (`1990-05-20`) or a full RFC 3339 timestamp,
/// in which case the UTC date is used.
pub fn parse_birth_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AgeError::MissingInput);
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|timestamp| timestamp.naive_utc().date())
        .map_err(|_| AgeError::InvalidDate {
            input: trimmed.to_string(),
        })
}

/// The birth month/day applied to `year`.
///
/// Days past the end of the month roll into the next one, so a Feb 29
/// birthday falls on Mar 1 in common years. `None` if `year` is outside
/// the representable range.
pub fn anniversary(birth: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birth.month(), 1)?
        .checked_add_days(Days::new(u64::from(birth.day() - 1)))
}

/// The anniversary interval containing "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayWindow {
    /// Most recent anniversary at or before now.
    pub last: NaiveDate,
    /// The anniversary one year after `last`.
    pub next: NaiveDate,
    /// Whether this year's anniversary has already been reached.
    pub reached_this_year: bool,
}

impl BirthdayWindow {
    /// Locate the anniversary interval that contains `now`.
    ///
    /// Reaching the anniversary is inclusive: at midnight of the birthday the
    /// window already starts on that day.
    pub fn containing(birth: NaiveDate, now: NaiveDateTime) -> Result<Self> {
        let out_of_range = || AgeError::InvalidDate {
            input: birth.to_string(),
        };

        let this_year = anniversary(birth, now.year()).ok_or_else(out_of_range)?;
        let reached_this_year = now >= this_year.and_time(NaiveTime::MIN);

        let last = if reached_this_year {
            this_year
        } else {
            anniversary(birth, now.year() - 1).ok_or_else(out_of_range)?
        };
        let next = anniversary(birth, last.year() + 1).ok_or_else(out_of_range)?;

        Ok(BirthdayWindow {
            last,
            next,
            reached_this_year,
        })
    }

    /// Length of the window in days (365 or 366).
    pub fn length_days(&self) -> i64 {
        (self.next - self.last).num_days()
    }

    /// Fractional days elapsed from the start of the window to `now`.
    pub fn elapsed_days(&self, now: NaiveDateTime) -> f64 {
        let elapsed = now - self.last.and_time(NaiveTime::MIN);
        elapsed.num_milliseconds() as f64 / 1000.0 / SECONDS_PER_DAY
    }
}

/// Compute the age for `birth` as of `now`, using the default denominator bound.
pub fn calculate_age(birth: NaiveDate, now: NaiveDateTime) -> Result<AgeResult> {
    calculate_age_with_bound(birth, now, DEFAULT_MAX_DENOMINATOR)
}

/// Compute the age for `birth` as of `now` with a custom denominator bound.
pub fn calculate_age_with_bound(
    birth: NaiveDate,
    now: NaiveDateTime,
    max_denominator: u32,
) -> Result<AgeResult> {
    if birth > now.date() {
        return Err(AgeError::BirthDateInFuture { date: birth });
    }

    let window = BirthdayWindow::containing(birth, now)?;

    let mut years = now.year() - birth.year();
    if !window.reached_this_year {
        years -= 1;
    }
    let years = u32::try_from(years).map_err(|_| AgeError::BirthDateInFuture { date: birth })?;

    let elapsed_days = window.elapsed_days(now);
    let year_fraction = elapsed_days / window.length_days() as f64;
    let fraction = best_fraction(year_fraction, max_denominator);

    tracing::debug!(
        %birth,
        %now,
        years,
        year_fraction,
        window_days = window.length_days(),
        %fraction,
        "calculated age"
    );

    Ok(AgeResult {
        years,
        fraction,
        decimal: f64::from(years) + year_fraction,
        days_since_birthday: elapsed_days.floor() as u32,
    })
}
