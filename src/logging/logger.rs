// file: src/logging/logger.rs
// version: 1.0.0
// guid: 0a6e5d91-7c3f-4b28-a4d7-e18b2f60c935

//! Logger initialization and configuration
//!
//! Logs go to stderr; stdout carries tool output and dry-run commands.

use crate::error::GdalCmdError;
use crate::Result;
use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
pub fn init_logger(verbose: bool, quiet: bool) -> Result<()> {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| GdalCmdError::config(format!("Failed to initialize logger: {}", e)))?;

    Ok(())
}

/// Initialize structured JSON logging
pub fn init_json_logger() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_writer(io::stderr))
        .try_init()
        .map_err(|e| GdalCmdError::config(format!("Failed to initialize JSON logger: {}", e)))?;

    Ok(())
}

/// Run `f` inside a named operation span
pub fn with_operation_span<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let span = tracing::info_span!("operation", name = operation);
    let _enter = span.enter();
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_twice_reports_error() {
        // A global subscriber can only be installed once per process, so the
        // second call must fail without panicking.
        let _ = init_logger(false, true);
        let second = init_logger(true, false);

        assert!(second.is_err());
    }

    #[test]
    fn test_with_operation_span_returns_value() {
        // Arrange
        let mut executed = false;

        // Act
        let result = with_operation_span("ogrinfo", || {
            executed = true;
            2 + 2
        });

        // Assert
        assert!(executed);
        assert_eq!(result, 4);
    }
}
