use std::path::PathBuf;

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from I/O operations
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    /// Configuration could not be serialized
    #[error("Config write error: {0}")]
    ConfigEncodeError(#[from] toml::ser::Error),

    /// Running in capture mode without a configuration file
    #[error("{} not found. Run 'autoshark -C' to create configuration.", .0.display())]
    MissingConfig(PathBuf),

    /// Error from invoking the capture tool
    #[error("Capture error: {0}")]
    CaptureError(String),
}

/// Result type for application
pub type AppResult<T> = Result<T, AppError>;
