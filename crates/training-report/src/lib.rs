pub mod config;
pub mod documents;
pub mod error;
pub mod telemetry;
pub mod workflows;
