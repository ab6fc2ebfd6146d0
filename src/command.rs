// file: src/command.rs
// version: 1.0.0
// guid: 0c7e3b58-d94a-4a21-86f7-3b2e9d14c6a0

//! Command wrapper shared by both tools
//!
//! A [`VectorCommand`] owns the paths, the layer list and the option bag, and
//! keeps the shell command string derived from them. The string is rebuilt
//! on every mutation, so [`VectorCommand::command`] is always current.

use crate::error::{GdalCmdError, Result};
use crate::flags::{escape_arg, render_options, FlagKind};
use crate::options::{OptionBag, OptionValue};
use crate::runner::{CommandRunner, ShellRunner};
use crate::tools::Tool;
use tracing::{debug, info_span, warn};

/// A single invocation of one of the wrapped tools
#[derive(Debug, Clone, PartialEq)]
pub struct VectorCommand {
    tool: Tool,
    destination: Option<String>,
    source: String,
    layers: Vec<String>,
    options: OptionBag,
    command: String,
}

impl VectorCommand {
    /// Create a command with the tool's default options.
    ///
    /// ogr2ogr always gets a destination slot (`''` when none is given);
    /// a destination passed for ogrinfo is dropped.
    pub fn new<I, S>(
        tool: Tool,
        destination: Option<String>,
        source: impl Into<String>,
        layers: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !tool.takes_destination() && destination.is_some() {
            warn!("{} does not take a destination, ignoring it", tool);
        }

        let mut command = Self {
            tool,
            destination: destination.filter(|_| tool.takes_destination()),
            source: source.into(),
            layers: layers.into_iter().map(Into::into).collect(),
            options: tool.defaults(),
            command: String::new(),
        };
        command.derive_command();
        command
    }

    /// Set option `name` and re-derive the command string.
    ///
    /// Unknown names are stored but never serialized.
    pub fn set_option(&mut self, name: &str, value: impl Into<OptionValue>) -> &mut Self {
        let value = value.into();
        match self.tool.spec(name) {
            None => debug!("{} has no option named '{}', it will be ignored", self.tool, name),
            Some(spec) if spec.kind == FlagKind::Value && matches!(value, OptionValue::Bbox(_)) => {
                warn!(
                    "{} -{} gets the bounding box as one quoted argument; pass the four numbers as text if the tool needs them split",
                    self.tool, name
                )
            }
            Some(_) => {}
        }
        self.options.set(name, value);
        self.derive_command();
        self
    }

    /// Turn on a switch option
    pub fn enable(&mut self, name: &str) -> &mut Self {
        self.set_option(name, true)
    }

    /// Add one `key=value` entry to a multi-valued option such as `lco`
    pub fn add_pair(&mut self, name: &str, key: &str, value: &str) -> &mut Self {
        match self.tool.spec(name) {
            Some(spec) if spec.kind == FlagKind::Repeated => {}
            Some(_) => warn!(
                "{} option '{}' is not multi-valued, its current value is replaced and will not be emitted",
                self.tool, name
            ),
            None => warn!("{} has no option named '{}', it will be ignored", self.tool, name),
        }
        self.options.insert_pair(name, key, value);
        self.derive_command();
        self
    }

    /// Replace the layer list
    pub fn set_layers<I, S>(&mut self, layers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.layers = layers.into_iter().map(Into::into).collect();
        self.derive_command();
        self
    }

    /// Apply a `NAME`, `NAME=VALUE` or `NAME:KEY=VALUE` assignment.
    ///
    /// A bare name turns on a switch. Values are parsed for the kind of the
    /// flag that consumes them; unknown names are stored as text.
    pub fn apply_assignment(&mut self, raw: &str) -> Result<&mut Self> {
        let (name, value) = match raw.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (raw, None),
        };

        if let Some((name, key)) = name.split_once(':') {
            let value = value.ok_or_else(|| {
                GdalCmdError::invalid_option(format!("'{}' needs a value", raw))
            })?;
            if let Some(spec) = self.tool.spec(name).filter(|s| s.kind != FlagKind::Repeated) {
                return Err(GdalCmdError::invalid_option(format!(
                    "{} option '{}' does not take KEY=VALUE entries",
                    self.tool, spec.name
                )));
            }
            return Ok(self.add_pair(name, key, value));
        }

        let value = match (self.tool.spec(name), value) {
            (Some(spec), Some(raw_value)) => OptionValue::parse_for(spec.kind, raw_value)?,
            (Some(spec), None) if spec.kind == FlagKind::Switch => OptionValue::Flag(true),
            (Some(_), None) => {
                return Err(GdalCmdError::invalid_option(format!(
                    "{} option '{}' needs a value",
                    self.tool, name
                )))
            }
            (None, Some(raw_value)) => {
                warn!("{} has no option named '{}', it will be ignored", self.tool, name);
                OptionValue::Text(raw_value.to_string())
            }
            (None, None) => {
                warn!("{} has no option named '{}', it will be ignored", self.tool, name);
                OptionValue::Flag(true)
            }
        };

        Ok(self.set_option(name, value))
    }

    fn derive_command(&mut self) {
        let options = render_options(self.tool.flags(), &self.options);
        let layers = self.layers.join(" ");

        self.command = if self.tool.takes_destination() {
            format!(
                "{} {} {} {} {}",
                self.tool.program(),
                options,
                escape_arg(self.destination.as_deref().unwrap_or("")),
                escape_arg(&self.source),
                layers
            )
        } else {
            format!(
                "{} {} {} {}",
                self.tool.program(),
                options,
                escape_arg(&self.source),
                layers
            )
        };
    }

    /// The shell command string for the current state
    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn layers(&self) -> &[String] {
        &self.layers
    }

    pub fn options(&self) -> &OptionBag {
        &self.options
    }

    pub fn option(&self, name: &str) -> Option<&OptionValue> {
        self.options.get(name)
    }

    /// Run through `sh -c` and return captured stdout
    pub fn run(&self) -> Result<String> {
        self.run_with(&ShellRunner::new())
    }

    /// Run through the given runner and return captured stdout
    pub fn run_with<R: CommandRunner + ?Sized>(&self, runner: &R) -> Result<String> {
        let span = info_span!("vector_command", tool = %self.tool);
        let _enter = span.enter();
        runner.run(&self.command)
    }
}
