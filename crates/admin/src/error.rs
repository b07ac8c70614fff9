//! Unified error handling for admin.

use thiserror::Error;

use crate::api::ApiError;
use crate::components::data_table::ExportError;
use crate::config::ConfigError;

/// Application-level error type for the admin.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Backend request failed.
    #[error("Backend error: {0}")]
    Api(#[from] ApiError),

    /// CSV export failed.
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Bad input from the operator.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Process exit code for this error, following `sysexits.h`.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 78,
            Self::Api(ApiError::Unauthorized(_)) => 77,
            Self::Api(ApiError::Validation(_)) | Self::BadRequest(_) => 64,
            Self::Api(ApiError::NotFound(_)) => 66,
            Self::Api(_) => 69,
            Self::Export(_) => 74,
        }
    }

    /// Message safe to show the operator.
    ///
    /// Transport failures are summarized; their details only go to the log.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(ApiError::Http(_)) => "Backend unreachable".to_string(),
            Self::Api(ApiError::Unauthorized(_)) => {
                "Not authorized; run `toque login` again".to_string()
            }
            _ => self.to_string(),
        }
    }
}
