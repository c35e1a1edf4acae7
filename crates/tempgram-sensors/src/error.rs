//! Error types for the tempgram sensors library.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while obtaining or decoding sensor data.
#[derive(Error, Debug)]
pub enum Error {
    /// Raw payload is not valid JSON.
    #[error("invalid sensor JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Top-level payload is not a JSON object.
    #[error("sensor payload is not a JSON object")]
    NotAnObject,

    /// A module value is not a JSON object.
    #[error("sensor module {module:?} is not a JSON object")]
    ModuleNotAnObject { module: String },

    /// I/O error while reading sensor data.
    #[error("sensor I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The sensor command exited unsuccessfully.
    #[error("sensor command {command:?} exited with {status}")]
    CommandFailed {
        command: String,
        status: std::process::ExitStatus,
    },
}
