// file: src/error.rs
// version: 1.0.0
// guid: 3f6d2a91-8c4e-4b17-a5d0-7e21c9b84f63

use thiserror::Error;

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, GdalCmdError>;

/// Error types for building and running GDAL commands
#[derive(Error, Debug)]
pub enum GdalCmdError {
    #[error("Command `{command}` failed with exit code {exit_code:?}\nSTDOUT: {stdout}\nSTDERR: {stderr}")]
    ProcessFailed {
        command: String,
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    #[error("Failed to start command `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl GdalCmdError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new invalid option error
    pub fn invalid_option(msg: impl Into<String>) -> Self {
        Self::InvalidOption(msg.into())
    }

    /// Exit code of the external process, if this error came from one
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::ProcessFailed { exit_code, .. } => *exit_code,
            _ => None,
        }
    }
}
