// file: src/logging/mod.rs
// version: 1.0.0
// guid: f3b7c2e8-4d16-49a0-8e5b-27a1d9c6f043

//! Logging setup for gdal-cmd

pub mod logger;

pub use logger::{init_json_logger, init_logger, with_operation_span};
