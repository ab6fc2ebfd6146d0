// file: src/cli/mod.rs
// version: 1.0.0
// guid: 17e5a9c2-3b84-4d60-9f1e-c8a2d6b05e37

//! Command line interface for gdal-cmd

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;
