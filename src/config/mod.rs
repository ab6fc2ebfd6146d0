// file: src/config/mod.rs
// version: 1.0.0
// guid: 2c9f7e14-5a08-4b63-8d21-f4a6b3c07e89

//! Job files and runner settings
//!
//! A job file describes one invocation of either tool. Settings hold the
//! runner defaults used when a job does not bring its own.

pub mod loader;

pub use loader::ConfigLoader;

use crate::command::VectorCommand;
use crate::error::{GdalCmdError, Result};
use crate::options::OptionValue;
use crate::runner::RunnerConfig;
use crate::tools::Tool;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One tool invocation read from a job file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSpec {
    pub tool: Tool,
    #[serde(default)]
    pub destination: Option<String>,
    pub source: String,
    #[serde(default)]
    pub layers: Vec<String>,
    #[serde(default)]
    pub options: IndexMap<String, OptionValue>,
    #[serde(default)]
    pub runner: Option<RunnerConfig>,
}

impl JobSpec {
    /// Check the paths match what the tool expects
    pub fn validate(&self) -> Result<()> {
        if self.source.trim().is_empty() {
            return Err(GdalCmdError::config("Job source must not be empty"));
        }

        match (self.tool.takes_destination(), &self.destination) {
            (true, None) => Err(GdalCmdError::config(format!(
                "{} jobs need a destination",
                self.tool
            ))),
            (true, Some(dst)) if dst.trim().is_empty() => Err(GdalCmdError::config(format!(
                "{} destination must not be empty",
                self.tool
            ))),
            (false, Some(_)) => Err(GdalCmdError::config(format!(
                "{} does not take a destination",
                self.tool
            ))),
            _ => Ok(()),
        }
    }

    /// Build the command described by this job
    pub fn to_command(&self) -> Result<VectorCommand> {
        self.validate()?;

        let mut command = VectorCommand::new(
            self.tool,
            self.destination.clone(),
            self.source.clone(),
            self.layers.iter().cloned(),
        );
        for (name, value) in &self.options {
            command.set_option(name, value.clone());
        }
        Ok(command)
    }
}

/// Contents of the settings file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub runner: RunnerConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(tool: Tool, destination: Option<&str>) -> JobSpec {
        JobSpec {
            tool,
            destination: destination.map(str::to_string),
            source: "in.shp".to_string(),
            layers: vec![],
            options: IndexMap::new(),
            runner: None,
        }
    }

    #[test]
    fn test_validate_destination_rules() {
        assert!(job(Tool::Ogr2Ogr, Some("out.gpkg")).validate().is_ok());
        assert!(job(Tool::Ogr2Ogr, None).validate().is_err());
        assert!(job(Tool::Ogr2Ogr, Some(" ")).validate().is_err());
        assert!(job(Tool::OgrInfo, None).validate().is_ok());
        assert!(job(Tool::OgrInfo, Some("out.gpkg")).validate().is_err());
    }

    #[test]
    fn test_to_command_applies_options() {
        // Arrange
        let mut spec = job(Tool::Ogr2Ogr, Some("out.gpkg"));
        spec.layers = vec!["roads".to_string()];
        spec.options.insert("f".to_string(), OptionValue::from("GPKG"));
        spec.options.insert("lco".to_string(), OptionValue::pairs([("FID", "id")]));

        // Act
        let command = spec.to_command().unwrap();

        // Assert
        assert_eq!(
            command.command(),
            "ogr2ogr  -f 'GPKG' -lco 'FID=id' 'out.gpkg' 'in.shp' roads"
        );
    }
}
