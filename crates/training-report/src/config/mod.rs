use crate::documents::{read_document, DocumentError};
use crate::workflows::training::{parse_date, DateParseError, FiscalYear, ReportRequest};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_SETTINGS_PATH: &str = "appsettings.json";

/// Process-level configuration sourced from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub settings_path: PathBuf,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let settings_path = env::var("TRAINING_SETTINGS")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SETTINGS_PATH));
        if settings_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptySettingsPath);
        }

        let log_level = env::var("TRAINING_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            settings_path,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// The settings document describing one report run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReportSettings {
    pub input_file_path: PathBuf,
    #[serde(rename = "OutputFilePath1")]
    pub counts_output_path: PathBuf,
    #[serde(rename = "OutputFilePath2")]
    pub fiscal_roster_output_path: PathBuf,
    #[serde(rename = "OutputFilePath3")]
    pub expirations_output_path: PathBuf,
    pub training_types: Vec<String>,
    pub fiscal_year: i32,
    pub status_date: String,
}

impl ReportSettings {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Ok(read_document(path)?)
    }

    pub fn status_date(&self) -> Result<chrono::NaiveDate, ConfigError> {
        Ok(parse_date(&self.status_date)?)
    }

    pub fn request(&self) -> Result<ReportRequest, ConfigError> {
        Ok(ReportRequest {
            trainings: self.training_types.clone(),
            fiscal_year: FiscalYear(self.fiscal_year),
            status_date: self.status_date()?,
        })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TRAINING_SETTINGS must not be empty")]
    EmptySettingsPath,
    #[error("unable to load settings: {0}")]
    Settings(#[from] DocumentError),
    #[error("StatusDate is invalid: {0}")]
    StatusDate(#[from] DateParseError),
}
