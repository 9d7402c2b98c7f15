use crate::config::ConfigError;
use crate::documents::DocumentError;
use crate::telemetry::TelemetryError;
use crate::workflows::training::ReportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("document error: {0}")]
    Document(#[from] DocumentError),
    #[error("report error: {0}")]
    Report(#[from] ReportError),
}
