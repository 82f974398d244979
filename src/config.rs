use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigError;

/// Top-level configuration, loaded from an optional TOML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Form behaviour.
    #[serde(default)]
    pub form: FormConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormConfig {
    /// Earliest accepted birth year.
    #[serde(default = "default_min_year")]
    pub min_year: i32,
    /// Classify the zodiac sign alongside the age.
    #[serde(default)]
    pub show_zodiac: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            min_year: default_min_year(),
            show_zodiac: false,
        }
    }
}

fn default_min_year() -> i32 {
    1900
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl AppConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Loads `path` when given, otherwise falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let min_year = self.form.min_year;
        if !(1..=9999).contains(&min_year) {
            return Err(ConfigError::Invalid {
                field: "form.min_year",
                reason: format!("{min_year} is outside 1..=9999"),
            });
        }
        Ok(())
    }
}
