//! CLI error type.

use thiserror::Error;
use toque_admin::AppError;
use toque_admin::api::ApiError;
use toque_admin::components::data_table::ExportError;
use toque_admin::config::ConfigError;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Library operation failed.
    #[error(transparent)]
    App(#[from] AppError),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file or output serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// `--filter` argument is not `field=value`.
    #[error("Invalid filter {0:?}: expected FIELD=VALUE")]
    InvalidFilter(String),

    /// `--filter` names a field the listing does not have.
    #[error("Unknown filter field {field:?} for {entity}")]
    UnknownField { field: String, entity: String },
}

impl CliError {
    /// Process exit code, following `sysexits.h`.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::App(e) => e.exit_code(),
            Self::Io(_) => 74,
            Self::Json(_) => 65,
            Self::InvalidFilter(_) | Self::UnknownField { .. } => 64,
        }
    }

    /// Message shown to the operator.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::App(e) => e.user_message(),
            _ => self.to_string(),
        }
    }
}

impl From<ApiError> for CliError {
    fn from(e: ApiError) -> Self {
        Self::App(e.into())
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::App(e.into())
    }
}

impl From<ExportError> for CliError {
    fn from(e: ExportError) -> Self {
        Self::App(e.into())
    }
}
