//! Session state for one age-calculator form.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use crate::age::{AgeResult, compute_age};
use crate::config::FormConfig;
use crate::error::FormError;
use crate::input::{RawInput, validate_birth_date};
use crate::zodiac::{ZodiacSign, classify_zodiac};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMethod {
    #[default]
    Calendar,
    Manual,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualFields {
    pub day: String,
    pub month: String,
    pub year: String,
}

/// A successful calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calculation {
    pub birth_date: NaiveDate,
    pub today: NaiveDate,
    /// How the birth date was entered.
    pub input_method: InputMethod,
    pub age: AgeResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zodiac: Option<&'static ZodiacSign>,
}

/// Holds the input, the last error message and the last result of a form.
#[derive(Debug, Clone)]
pub struct AgeForm {
    config: FormConfig,
    method: InputMethod,
    picked: Option<NaiveDate>,
    manual: ManualFields,
    error: Option<String>,
    result: Option<Calculation>,
}

impl AgeForm {
    pub fn new(config: FormConfig) -> Self {
        Self {
            config,
            method: InputMethod::default(),
            picked: None,
            manual: ManualFields::default(),
            error: None,
            result: None,
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn method(&self) -> InputMethod {
        self.method
    }

    pub fn select_method(&mut self, method: InputMethod) {
        self.method = method;
    }

    pub fn pick_date(&mut self, date: Option<NaiveDate>) {
        self.picked = date;
    }

    pub fn set_manual_fields(
        &mut self,
        day: impl Into<String>,
        month: impl Into<String>,
        year: impl Into<String>,
    ) {
        self.manual = ManualFields {
            day: day.into(),
            month: month.into(),
            year: year.into(),
        };
    }

    pub fn manual_fields(&self) -> &ManualFields {
        &self.manual
    }

    /// The message for the last failed calculation.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&Calculation> {
        self.result.as_ref()
    }

    fn raw_input(&self) -> RawInput {
        match self.method {
            InputMethod::Calendar => RawInput::Picked(self.picked),
            InputMethod::Manual => RawInput::Manual {
                day: self.manual.day.clone(),
                month: self.manual.month.clone(),
                year: self.manual.year.clone(),
            },
        }
    }

    /// Validates the current input and computes the age at `today`.
    ///
    /// Clears any previous error and result first; on failure the error's
    /// message is kept for [`AgeForm::error`].
    pub fn calculate(&mut self, today: NaiveDate) -> Result<&Calculation, FormError> {
        self.error = None;
        self.result = None;

        match self.evaluate(today) {
            Ok(calculation) => {
                info!(
                    birth_date = %calculation.birth_date,
                    age = %calculation.age,
                    zodiac = calculation.zodiac.map(|z| z.name),
                    "calculated age"
                );
                let stored: &Calculation = self.result.insert(calculation);
                Ok(stored)
            }
            Err(err) => {
                debug!(error = %err, method = ?self.method, "form rejected input");
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    fn evaluate(&self, today: NaiveDate) -> Result<Calculation, FormError> {
        let birth_date = validate_birth_date(&self.raw_input(), today, self.config.min_year)?;
        let age = compute_age(birth_date, today)?;
        let zodiac = self.config.show_zodiac.then(|| classify_zodiac(birth_date));
        Ok(Calculation {
            birth_date,
            today,
            input_method: self.method,
            age,
            zodiac,
        })
    }

    /// Clears the input, error and result. The input method and config stay.
    pub fn reset(&mut self) {
        self.picked = None;
        self.manual = ManualFields::default();
        self.error = None;
        self.result = None;
    }
}
