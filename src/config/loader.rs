// file: src/config/loader.rs
// version: 1.0.0
// guid: 8d3a60f5-c14e-4e97-b2f8-a9e57d0c2b16

//! Configuration file loading and environment variable substitution

use super::{JobSpec, Settings};
use crate::error::{GdalCmdError, Result};
use regex::Regex;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration loader with environment variable substitution
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
}

impl ConfigLoader {
    /// Create a new config loader
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// Load a job file (YAML, JSON or TOML by extension)
    pub fn load_job<P: AsRef<Path>>(&self, path: P) -> Result<JobSpec> {
        let path = path.as_ref();
        let job: JobSpec = self.load_file(path, "job")?;

        job.validate()?;

        debug!("Loaded {} job from {}", job.tool, path.display());
        Ok(job)
    }

    /// Load a settings file (YAML, JSON or TOML by extension)
    pub fn load_settings<P: AsRef<Path>>(&self, path: P) -> Result<Settings> {
        let mut settings: Settings = self.load_file(path.as_ref(), "settings")?;

        if let Some(wd) = settings.runner.working_directory.take() {
            settings.runner.working_directory = Some(expand_path(&wd.to_string_lossy()));
        }
        Ok(settings)
    }

    /// Settings from `path`, else from the default location if it exists,
    /// else built-in defaults
    pub fn resolve_settings(&self, path: Option<&str>) -> Result<Settings> {
        if let Some(path) = path {
            return self.load_settings(expand_path(path));
        }

        match default_settings_path() {
            Some(default) if default.is_file() => {
                debug!("Using settings from {}", default.display());
                self.load_settings(default)
            }
            _ => Ok(Settings::default()),
        }
    }

    fn load_file<T: DeserializeOwned>(&self, path: &Path, what: &str) -> Result<T> {
        let content = fs::read_to_string(path).map_err(|e| {
            GdalCmdError::config(format!(
                "Failed to read {} file {}: {}",
                what,
                path.display(),
                e
            ))
        })?;

        let expanded = self.expand_env_vars(&content)?;
        parse_by_extension(path, &expanded)
    }

    /// Expand `${VAR}` placeholders in configuration content
    fn expand_env_vars(&self, content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| GdalCmdError::config(format!("Invalid regex pattern: {}", e)))?;

        let mut result = content.to_string();
        let mut missing_vars = Vec::new();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];

            if let Some(value) = self.env_vars.get(var_name) {
                result = result.replace(placeholder, value);
            } else if !missing_vars.iter().any(|v| v == var_name) {
                missing_vars.push(var_name.to_string());
            }
        }

        if !missing_vars.is_empty() {
            return Err(GdalCmdError::config(format!(
                "Missing environment variables: {}",
                missing_vars.join(", ")
            )));
        }

        Ok(result)
    }

    /// Set environment variable for substitution
    pub fn set_env_var(&mut self, key: String, value: String) {
        self.env_vars.insert(key, value);
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_by_extension<T: DeserializeOwned>(path: &Path, content: &str) -> Result<T> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(content)?),
        Some("json") => Ok(serde_json::from_str(content)?),
        Some("toml") => Ok(toml::from_str(content)?),
        _ => Err(GdalCmdError::config(format!(
            "Unsupported config format for {} (expected .yaml, .yml, .json or .toml)",
            path.display()
        ))),
    }
}

/// `<config dir>/gdal-cmd/config.toml`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gdal-cmd").join("config.toml"))
}

/// Expand a leading `~` in a path
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}
