// CLI error types

use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] flavors_storage::StorageError),
}

impl CliError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            CliError::InvalidArgument { message } => {
                format!("Invalid argument: {}", message)
            }
            CliError::Io(e) => {
                format!("Input read failed: {}", e)
            }
            CliError::Storage(e) => {
                format!("Storage error: {}", e)
            }
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
