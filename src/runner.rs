// file: src/runner.rs
// version: 1.0.0
// guid: 61e9a4c8-b37d-4f02-95ab-d0c82e5f7194

//! Process execution for built commands

use crate::error::{GdalCmdError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, error, info};

/// Runs a complete shell command string
pub trait CommandRunner {
    /// Execute `command` and return its stdout, failing on a non-zero exit.
    ///
    /// Output is text: bytes that are not valid UTF-8 come back as U+FFFD,
    /// so binary output should be written to a file by the command itself.
    fn run(&self, command: &str) -> Result<String>;
}

/// Settings for [`ShellRunner`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Shell used as `<shell> -c <command>`
    pub shell: String,
    pub working_directory: Option<PathBuf>,
    /// Extra environment for the child, e.g. `GDAL_DATA` or `PG_USE_COPY`
    pub env: BTreeMap<String, String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            shell: "sh".to_string(),
            working_directory: None,
            env: BTreeMap::new(),
        }
    }
}

/// Synchronous runner that hands the command to a shell
#[derive(Debug, Clone, Default)]
pub struct ShellRunner {
    config: RunnerConfig,
}

impl ShellRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: RunnerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<String> {
        info!("Executing: {}", command);

        let mut cmd = Command::new(&self.config.shell);
        cmd.arg("-c").arg(command).envs(&self.config.env);
        if let Some(ref wd) = self.config.working_directory {
            cmd.current_dir(wd);
        }

        let output = cmd.output().map_err(|e| GdalCmdError::Spawn {
            command: command.to_string(),
            source: e,
        })?;

        // Invalid UTF-8 becomes U+FFFD in both streams
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            let exit_code = output.status.code();
            error!("Command failed with exit code {:?}", exit_code);
            if !stdout.trim().is_empty() {
                error!("STDOUT: {}", stdout);
            }
            if !stderr.trim().is_empty() {
                error!("STDERR: {}", stderr);
            }

            return Err(GdalCmdError::ProcessFailed {
                command: command.to_string(),
                exit_code,
                stdout,
                stderr,
            });
        }

        if !stderr.trim().is_empty() {
            debug!("STDERR: {}", stderr);
        }
        debug!("Command executed successfully: {} bytes of output", stdout.len());
        Ok(stdout)
    }
}

/// Whether `program` can be found on `PATH`
pub fn tool_available(program: &str) -> bool {
    which::which(program).is_ok()
}
