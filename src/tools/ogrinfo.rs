// file: src/tools/ogrinfo.rs
// version: 1.0.0
// guid: a8f06c3d-2b95-47e1-9d80-6e4c1b7a3f52

//! Builder for `ogrinfo`, the vector inspection utility

use crate::command::VectorCommand;
use crate::error::Result;
use crate::flags::{FlagKind::*, FlagSpec};
use crate::options::{OptionBag, OptionValue};
use crate::runner::CommandRunner;
use crate::tools::Tool;

/// `ogrinfo` flags in emission order
pub const FLAGS: &[FlagSpec] = &[
    FlagSpec::new("helpGeneral", "--help-general", Switch),
    FlagSpec::new("ro", "-ro", Switch),
    FlagSpec::new("q", "-q", Switch),
    FlagSpec::new("where", "-where", Value),
    FlagSpec::new("spat", "-spat", Bbox),
    FlagSpec::new("geomfield", "-geomfield", Value),
    FlagSpec::new("fid", "-fid", Raw),
    FlagSpec::new("sql", "-sql", Value),
    FlagSpec::new("dialect", "-dialect", Value),
    FlagSpec::new("al", "-al", Switch),
    FlagSpec::new("rl", "-rl", Switch),
    FlagSpec::new("so", "-so", Switch),
    FlagSpec::with_default("fields", "-fields", Value, "YES"),
    FlagSpec::with_default("geom", "-geom", Value, "YES"),
    FlagSpec::new("formats", "--formats", Switch),
    FlagSpec::new("nomd", "-nomd", Switch),
    FlagSpec::new("listmdd", "-listmdd", Switch),
    FlagSpec::new("mdd", "-mdd", Value),
    FlagSpec::new("nocount", "-nocount", Switch),
    FlagSpec::new("noextent", "-noextent", Switch),
    FlagSpec::new("oo", "-oo", Repeated),
];

/// Lists information about a datasource and, optionally, some of its layers.
///
/// `fields` and `geom` default to `YES`, so they appear on every command
/// unless set to an empty value.
#[derive(Debug, Clone, PartialEq)]
pub struct OgrInfo {
    inner: VectorCommand,
}

impl OgrInfo {
    pub fn new<I, S>(source: impl Into<String>, layers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inner: VectorCommand::new(Tool::OgrInfo, None, source, layers),
        }
    }

    pub fn set_option(&mut self, name: &str, value: impl Into<OptionValue>) -> &mut Self {
        self.inner.set_option(name, value);
        self
    }

    pub fn enable(&mut self, name: &str) -> &mut Self {
        self.inner.enable(name);
        self
    }

    pub fn add_pair(&mut self, name: &str, key: &str, value: &str) -> &mut Self {
        self.inner.add_pair(name, key, value);
        self
    }

    pub fn command(&self) -> &str {
        self.inner.command()
    }

    pub fn options(&self) -> &OptionBag {
        self.inner.options()
    }

    pub fn run(&self) -> Result<String> {
        self.inner.run()
    }

    pub fn run_with<R: CommandRunner + ?Sized>(&self, runner: &R) -> Result<String> {
        self.inner.run_with(runner)
    }

    pub fn set_layers<I, S>(&mut self, layers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.set_layers(layers);
        self
    }
}
