//! Error types for cfgctl CLI

use proconfig_config_export::ExportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(#[from] proconfig_settings::RecordError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Export(ExportError::UnsupportedGame(_))
            | CliError::Export(ExportError::GameMismatch { .. }) => 2,
            CliError::RecordNotFound(_) => 3,
            CliError::InvalidRecord(_) | CliError::JsonError(_) => 4,
            CliError::IoError(_) => 1,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            CliError::RecordNotFound(_) => "record_not_found",
            CliError::InvalidRecord(_) => "invalid_record",
            CliError::Export(ExportError::UnsupportedGame(_)) => "unsupported_game",
            CliError::Export(ExportError::GameMismatch { .. }) => "game_mismatch",
            CliError::IoError(_) => "io_error",
            CliError::JsonError(_) => "json_error",
        }
    }
}
