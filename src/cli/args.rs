// file: src/cli/args.rs
// version: 1.0.0
// guid: b4d1e7a3-9f62-4c05-8a3b-5e0c27f91d86

//! Command line argument definitions

use crate::tools::Tool;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gdal-cmd")]
#[command(about = "Build and run ogr2ogr / ogrinfo command lines")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(
        short,
        long,
        global = true,
        env = "GDAL_CMD_CONFIG",
        help = "Settings file (defaults to <config dir>/gdal-cmd/config.toml)"
    )]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a vector datasource with ogr2ogr
    Ogr2ogr {
        destination: String,

        source: String,

        layers: Vec<String>,

        #[arg(
            short = 'o',
            long = "option",
            value_name = "NAME[=VALUE]",
            help = "Set an option: NAME, NAME=VALUE or NAME:KEY=VALUE"
        )]
        options: Vec<String>,

        #[arg(long, help = "Print the command instead of running it")]
        dry_run: bool,
    },

    /// Inspect a vector datasource with ogrinfo
    Ogrinfo {
        source: String,

        layers: Vec<String>,

        #[arg(
            short = 'o',
            long = "option",
            value_name = "NAME[=VALUE]",
            help = "Set an option: NAME, NAME=VALUE or NAME:KEY=VALUE"
        )]
        options: Vec<String>,

        #[arg(long, help = "Print the command instead of running it")]
        dry_run: bool,
    },

    /// Run a job file (YAML, JSON or TOML)
    Job {
        file: String,

        #[arg(long, help = "Print the command instead of running it")]
        dry_run: bool,
    },

    /// List the options a tool understands
    Options {
        #[arg(value_enum)]
        tool: ToolArg,

        #[arg(short, long)]
        json: bool,
    },

    /// Check that ogr2ogr and ogrinfo are on PATH
    Check,
}

/// Tool argument for CLI
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum ToolArg {
    Ogr2ogr,
    Ogrinfo,
}

impl From<ToolArg> for Tool {
    fn from(tool: ToolArg) -> Self {
        match tool {
            ToolArg::Ogr2ogr => Tool::Ogr2Ogr,
            ToolArg::Ogrinfo => Tool::OgrInfo,
        }
    }
}
