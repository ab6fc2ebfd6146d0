// file: src/main.rs
// version: 1.0.0
// guid: 4b8e2c6f-a1d7-4e93-85c0-f27d3a96e1b4

//! gdal-cmd - main entry point

use clap::Parser;
use colored::Colorize;
use gdal_cmd::{
    cli::{args::Cli, args::Commands, commands::*},
    config::ConfigLoader,
    logging::logger,
    GdalCmdError,
};

fn main() {
    let cli = Cli::parse();

    let logging = if cli.json_logs {
        logger::init_json_logger()
    } else {
        logger::init_logger(cli.verbose, cli.quiet)
    };
    if let Err(e) = logging {
        eprintln!("{} {}", "warning:".yellow().bold(), e);
    }

    if let Err(err) = run(cli) {
        eprintln!("{} {:#}", "error:".red().bold(), err);

        // Mirror the wrapped tool's exit code when it is the one that failed
        let code = err
            .downcast_ref::<GdalCmdError>()
            .and_then(GdalCmdError::exit_code)
            .filter(|code| *code != 0)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = ConfigLoader::new().resolve_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::Ogr2ogr {
            destination,
            source,
            layers,
            options,
            dry_run,
        } => ogr2ogr_command(destination, source, layers, &options, dry_run, &settings),
        Commands::Ogrinfo {
            source,
            layers,
            options,
            dry_run,
        } => ogrinfo_command(source, layers, &options, dry_run, &settings),
        Commands::Job { file, dry_run } => job_command(&file, dry_run, &settings),
        Commands::Options { tool, json } => options_command(tool.into(), json),
        Commands::Check => check_command(),
    }
}
