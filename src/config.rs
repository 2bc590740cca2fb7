//! Engine configuration.
//!
//! All settings have defaults matching the Hong Kong Observatory tables for
//! 1901–2100, so an empty TOML document is a valid config.
//!
//! ```toml
//! first_year = 1901
//! last_year = 2100
//! padded_through = 2010
//! header_lines = 3
//! table_dir = "/usr/share/nongli"
//! file_pattern = "T{year}c.txt"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::chinese::scan::TableFormat;
use crate::error::ConfigError;

/// Placeholder in [`EngineConfig::file_pattern`] replaced by the year.
pub const YEAR_PLACEHOLDER: &str = "{year}";

/// Settings for an [`Engine`](crate::Engine).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Earliest Gregorian year with a table. Its leading rows are resolved
    /// without a preceding table.
    #[serde(default = "default_first_year")]
    pub first_year: i32,

    /// Latest Gregorian year with a table.
    #[serde(default = "default_last_year")]
    pub last_year: i32,

    /// Last table year whose dates are written zero-padded.
    #[serde(default = "default_padded_through")]
    pub padded_through: i32,

    /// Number of header lines preceding the rows of each table.
    #[serde(default = "default_header_lines")]
    pub header_lines: usize,

    /// Directory holding the table files, used by
    /// [`Engine::from_config`](crate::Engine::from_config).
    #[serde(default)]
    pub table_dir: Option<PathBuf>,

    /// File name of a table, with `{year}` standing for the year.
    #[serde(default = "default_file_pattern")]
    pub file_pattern: String,
}

fn default_first_year() -> i32 {
    1901
}
fn default_last_year() -> i32 {
    2100
}
fn default_padded_through() -> i32 {
    2010
}
fn default_header_lines() -> usize {
    3
}
fn default_file_pattern() -> String {
    "T{year}c.txt".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            first_year: default_first_year(),
            last_year: default_last_year(),
            padded_through: default_padded_through(),
            header_lines: default_header_lines(),
            table_dir: None,
            file_pattern: default_file_pattern(),
        }
    }
}

impl EngineConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Sets the supported year range.
    pub fn with_years(mut self, first_year: i32, last_year: i32) -> Self {
        self.first_year = first_year;
        self.last_year = last_year;
        self
    }

    /// Sets the last table year written with zero-padded dates.
    pub fn with_padded_through(mut self, year: i32) -> Self {
        self.padded_through = year;
        self
    }

    /// Sets the table directory.
    pub fn with_table_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.table_dir = Some(dir.into());
        self
    }

    /// Sets the table file name pattern.
    pub fn with_file_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.file_pattern = pattern.into();
        self
    }

    /// Checks the settings for consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.first_year > self.last_year {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "first_year {} is after last_year {}",
                    self.first_year, self.last_year
                ),
            });
        }
        if !self.file_pattern.contains(YEAR_PLACEHOLDER) {
            return Err(ConfigError::Invalid {
                reason: format!("file_pattern '{}' lacks {YEAR_PLACEHOLDER}", self.file_pattern),
            });
        }
        Ok(())
    }

    /// Returns `true` if `year` is within the supported range.
    pub fn covers(&self, year: i32) -> bool {
        (self.first_year..=self.last_year).contains(&year)
    }

    /// Layout of the table text.
    pub fn table_format(&self) -> TableFormat {
        TableFormat {
            header_lines: self.header_lines,
            padded_through: self.padded_through,
        }
    }
}
