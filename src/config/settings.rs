//! User settings for famfin
//!
//! Display currency, the default report window and date format. Household
//! details live in the ledger's profile.

use std::fmt::Write as _;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::paths::FamfinPaths;
use crate::error::FinanceError;
use crate::models::PeriodWindow;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Symbol printed in front of amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Report horizon used when `--window` is not given
    #[serde(default)]
    pub default_window: PeriodWindow,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_window: PeriodWindow::default(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Format `date` with the configured format, falling back to ISO dates
    /// when the format cannot render a plain date
    pub fn format_date(&self, date: NaiveDate) -> String {
        render_date(date, &self.date_format).unwrap_or_else(|| date.to_string())
    }

    /// Set the date format after checking it renders a plain date
    pub fn set_date_format(&mut self, format: &str) -> Result<(), FinanceError> {
        let sample = NaiveDate::from_ymd_opt(2000, 1, 31).unwrap_or_default();
        if format.trim().is_empty() || render_date(sample, format).is_none() {
            return Err(FinanceError::Validation(format!(
                "Invalid date format '{}'",
                format
            )));
        }
        self.date_format = format.to_string();
        Ok(())
    }

    /// Load settings from disk, or defaults if the file doesn't exist yet
    pub fn load_or_create(paths: &FamfinPaths) -> Result<Self, FinanceError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            debug!(path = %settings_path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FinanceError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| FinanceError::Config(format!("Failed to parse settings file: {}", e)))
    }

    pub fn save(&self, paths: &FamfinPaths) -> Result<(), FinanceError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FinanceError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FinanceError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

/// Render `date` with a strftime `format`; None when the format is invalid
/// or needs fields a date does not have
fn render_date(date: NaiveDate, format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(format)).ok()?;
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.default_window, PeriodWindow::Six);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FamfinPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "R$".into();
        settings.default_window = PeriodWindow::Twelve;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "R$");
        assert_eq!(loaded.default_window, PeriodWindow::Twelve);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol":"R$"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "R$");
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.default_window, PeriodWindow::Six);
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let mut settings = Settings::default();
        assert_eq!(settings.format_date(date), "2024-03-05");

        settings.set_date_format("%d/%m/%Y").unwrap();
        assert_eq!(settings.format_date(date), "05/03/2024");

        assert!(settings.set_date_format("%Q").is_err());
        assert!(settings.set_date_format("%H:%M").is_err());
        assert_eq!(settings.date_format, "%d/%m/%Y");

        settings.date_format = "%z".into();
        assert_eq!(settings.format_date(date), "2024-03-05");
    }

    #[test]
    fn test_invalid_window_rejected() {
        let result = serde_json::from_str::<Settings>(r#"{"default_window":5}"#);
        assert!(result.is_err());
    }
}
