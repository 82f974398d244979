//! age.rs
//!
//! Calendar-aware age calculation in the format:
//!     "X years, Y months, Z days"
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python’s
//! relativedelta), so we count whole months from the birth date and take the
//! remainder in days.
//!
//! Month arithmetic clamps: advancing a date by N months keeps the day of
//! month when the target month has it, and otherwise lands on the target
//! month's last day. Feb 29 + 1 year is Feb 28, Jan 31 + 1 month is Feb 28
//! (or 29). Anchors are always taken from the birth date itself with a single
//! clamp, never by chaining clamped intermediates, so a leap-day birth counts
//! months from the 29th rather than from a clamped 28th.
//!
//! This logic correctly handles:
//!   • leap-day births
//!   • end-of-month births (31st into 30-day months and February)
//!   • leap years
//!   • varying month lengths

use std::fmt;

use chrono::{Datelike, Days, Local, Months, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::error::AgeError;

/// Elapsed time between a birth date and a reference date, in whole calendar
/// units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeResult {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl AgeResult {
    /// Total whole months (`years * 12 + months`).
    pub fn total_months(&self) -> u32 {
        self.years * 12 + self.months
    }

    /// Re-applies this age to `birth`: advance by the whole months with a
    /// single clamp, then add the days. For a result produced by
    /// [`compute_age`] this yields the reference date.
    pub fn apply_to(&self, birth: NaiveDate) -> Option<NaiveDate> {
        advance_months(birth, self.total_months())?.checked_add_days(Days::new(self.days.into()))
    }
}

impl fmt::Display for AgeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} year{}, {} month{}, {} day{}",
            self.years,
            plural(self.years),
            self.months,
            plural(self.months),
            self.days,
            plural(self.days)
        )
    }
}

/// Computes the age at `today` of someone born on `birth`.
///
/// # Errors
///
/// Returns [`AgeError::InvalidDateRange`] if `birth` is after `today`.
pub fn compute_age(birth: NaiveDate, today: NaiveDate) -> Result<AgeResult, AgeError> {
    if birth > today {
        return Err(AgeError::InvalidDateRange { birth, today });
    }

    // Same year/month as `today`; the only possible overshoot is the day.
    let span = (today.year() - birth.year()) * 12 + today.month() as i32 - birth.month() as i32;
    let mut total = span as u32;

    let mut anchor = advance_or_overflow(birth, total)?;
    if anchor > today {
        total -= 1;
        anchor = advance_or_overflow(birth, total)?;
    }

    let days = (today - anchor).num_days() as u32;
    let age = AgeResult {
        years: total / 12,
        months: total % 12,
        days,
    };

    debug!(%birth, %today, %anchor, %age, "computed age");
    Ok(age)
}

/// Today's date on the local clock. Read once per calculation and pass the
/// value along.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Advances `date` by `months`, clamping to the last day of the target month.
pub fn advance_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

fn advance_or_overflow(date: NaiveDate, months: u32) -> Result<NaiveDate, AgeError> {
    advance_months(date, months).ok_or(AgeError::Overflow { date, months })
}

fn plural(n: u32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Returns number of days in a given year/month (handles leap years)
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // should never occur but keeps function total
    }
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
pub(crate) fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
