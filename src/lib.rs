//! # agecalc
//!
//! Exact age in years, months and days, with optional Western zodiac sign.
//!
//! ```
//! use agecalc::{compute_age, classify_zodiac};
//! use chrono::NaiveDate;
//!
//! let birth = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();
//! let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
//!
//! let age = compute_age(birth, today).unwrap();
//! assert_eq!(age.to_string(), "33 years, 11 months, 26 days");
//! assert_eq!(classify_zodiac(birth).name, "Gemini");
//! ```
//!
//! | Module | Description |
//! |--------|-------------|
//! | `age` | Calendar-aware date difference |
//! | `zodiac` | Sign table and classification |
//! | `input` | Raw form input validation |
//! | `form` | Form session state |
//! | `config` | TOML configuration |
//! | `render` | Text and JSON output |
//! | `cli` | Command-line arguments |
//! | `error` | Error types |

pub mod age;
pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod input;
pub mod render;
pub mod zodiac;

pub use age::{AgeResult, compute_age, today};
pub use config::{AppConfig, FormConfig, OutputFormat};
pub use error::{AgeError, ConfigError, FormError, InputError, MissingInput};
pub use form::{AgeForm, Calculation, InputMethod};
pub use input::{RawInput, validate_birth_date};
pub use zodiac::{Element, ZODIAC_SIGNS, ZodiacSign, classify_zodiac, zodiac_for_month_day};
