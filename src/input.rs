//! Normalizes raw form input into a validated birth date.

use chrono::{Datelike, NaiveDate};

use crate::age::days_in_month;
use crate::error::{InputError, MissingInput};

/// Birth date as the user supplied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// A date chosen from a picker; `None` when nothing was chosen.
    Picked(Option<NaiveDate>),
    /// Three free-text fields, as typed.
    Manual {
        day: String,
        month: String,
        year: String,
    },
}

/// Validates `input` against `[min_year-01-01, today]`.
///
/// # Errors
///
/// - [`InputError::MissingInput`] if nothing was picked or a manual field is empty.
/// - [`InputError::InvalidCalendarDate`] if the fields are out of range or do
///   not form a real date, or a picked date is before `min_year`.
/// - [`InputError::FutureDate`] if the date is after `today`.
pub fn validate_birth_date(
    input: &RawInput,
    today: NaiveDate,
    min_year: i32,
) -> Result<NaiveDate, InputError> {
    let date = match input {
        RawInput::Picked(None) => {
            return Err(InputError::MissingInput(MissingInput::PickedDate));
        }
        RawInput::Picked(Some(date)) => {
            if date.year() < min_year {
                return Err(InputError::invalid(format!(
                    "dates before {min_year} are not supported"
                )));
            }
            *date
        }
        RawInput::Manual { day, month, year } => {
            parse_manual(day, month, year, today.year(), min_year)?
        }
    };

    if date > today {
        return Err(InputError::FutureDate { date, today });
    }
    Ok(date)
}

fn parse_manual(
    day: &str,
    month: &str,
    year: &str,
    current_year: i32,
    min_year: i32,
) -> Result<NaiveDate, InputError> {
    let (day, month, year) = (day.trim(), month.trim(), year.trim());
    if day.is_empty() || month.is_empty() || year.is_empty() {
        return Err(InputError::MissingInput(MissingInput::ManualFields));
    }

    let day: u32 = parse_field("day", day)?;
    let month: u32 = parse_field("month", month)?;
    let year: i32 = parse_field("year", year)?;

    if !(1..=31).contains(&day) {
        return Err(InputError::invalid(format!("day {day} must be between 1 and 31")));
    }
    if !(1..=12).contains(&month) {
        return Err(InputError::invalid(format!(
            "month {month} must be between 1 and 12"
        )));
    }
    if year < min_year || year > current_year {
        return Err(InputError::invalid(format!(
            "year {year} must be between {min_year} and {current_year}"
        )));
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        InputError::invalid(format!(
            "{month}/{year} has only {} days",
            days_in_month(year, month)
        ))
    })
}

fn parse_field<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, InputError> {
    value
        .parse()
        .map_err(|_| InputError::invalid(format!("{name} '{value}' is not a number")))
}
