//! Error types for the age calculator, input validation and configuration.

use std::fmt;
use std::path::PathBuf;

use chrono::NaiveDate;

/// Failures of the date arithmetic itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgeError {
    /// The birth date lies after the reference date.
    #[error("birth date {birth} is after reference date {today}")]
    InvalidDateRange { birth: NaiveDate, today: NaiveDate },

    /// An intermediate anchor fell outside chrono's representable range.
    #[error("cannot advance {date} by {months} months")]
    Overflow { date: NaiveDate, months: u32 },
}

/// Which kind of input was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingInput {
    /// No date was picked.
    PickedDate,
    /// One or more of the manual day/month/year fields is empty.
    ManualFields,
}

impl fmt::Display for MissingInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingInput::PickedDate => f.write_str("Please select your date of birth"),
            MissingInput::ManualFields => f.write_str("Please enter day, month, and year"),
        }
    }
}

/// User-facing validation failures. The `Display` text is the message shown
/// to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("{0}")]
    MissingInput(MissingInput),

    #[error("Please enter a valid date: {reason}")]
    InvalidCalendarDate { reason: String },

    #[error("Date of birth cannot be in the future")]
    FutureDate { date: NaiveDate, today: NaiveDate },
}

impl InputError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        InputError::InvalidCalendarDate {
            reason: reason.into(),
        }
    }
}

/// Anything that stops the form from producing a result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Age(#[from] AgeError),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
