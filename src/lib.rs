// file: src/lib.rs
// version: 1.0.0
// guid: d6a3f81b-2e47-4c9d-b0f5-9a18c7e24d53

//! # gdal-cmd
//!
//! Command builders for the GDAL vector utilities `ogr2ogr` and `ogrinfo`.
//!
//! Each builder holds a bag of named options and derives a single shell
//! command string from it in a fixed flag order, quoting every value for a
//! POSIX shell. Running a command hands that string to a shell and returns
//! the captured stdout, or a [`GdalCmdError::ProcessFailed`] carrying the
//! captured output when the tool exits non-zero.

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod flags;
pub mod logging;
pub mod options;
pub mod runner;
pub mod tools;

pub use command::VectorCommand;
pub use error::{GdalCmdError, Result};
pub use options::{OptionBag, OptionValue, Scalar};
pub use runner::{CommandRunner, RunnerConfig, ShellRunner};
pub use tools::{Ogr2Ogr, OgrInfo, Tool};

/// Version information for the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
