// file: src/cli/commands.rs
// version: 1.0.0
// guid: 96c0f2d4-e8a1-4f37-b5c9-3d7e1a0b48f2

//! Command implementations for the CLI

use crate::{
    command::VectorCommand,
    config::{ConfigLoader, Settings},
    logging::with_operation_span,
    runner::{tool_available, ShellRunner},
    tools::Tool,
};
use anyhow::{bail, Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info, warn};

/// Build and run an ogr2ogr command
pub fn ogr2ogr_command(
    destination: String,
    source: String,
    layers: Vec<String>,
    options: &[String],
    dry_run: bool,
    settings: &Settings,
) -> Result<()> {
    let command = build_command(Tool::Ogr2Ogr, Some(destination), source, layers, options)?;
    execute(&command, &ShellRunner::from_config(settings.runner.clone()), dry_run)
}

/// Build and run an ogrinfo command
pub fn ogrinfo_command(
    source: String,
    layers: Vec<String>,
    options: &[String],
    dry_run: bool,
    settings: &Settings,
) -> Result<()> {
    let command = build_command(Tool::OgrInfo, None, source, layers, options)?;
    execute(&command, &ShellRunner::from_config(settings.runner.clone()), dry_run)
}

/// Load a job file and run it
pub fn job_command(file: &str, dry_run: bool, settings: &Settings) -> Result<()> {
    let loader = ConfigLoader::new();
    let job = loader
        .load_job(crate::config::loader::expand_path(file))
        .with_context(|| format!("Failed to load job file {}", file))?;

    let command = job.to_command()?;
    for name in command.options().unknown_names(job.tool.flags()) {
        warn!("{} has no option named '{}', it will be ignored", job.tool, name);
    }

    let runner_config = job.runner.clone().unwrap_or_else(|| settings.runner.clone());
    execute(&command, &ShellRunner::from_config(runner_config), dry_run)
}

#[derive(Serialize)]
struct OptionListing {
    name: &'static str,
    flag: &'static str,
    kind: &'static str,
    default: Option<&'static str>,
}

/// Print the option table of a tool
pub fn options_command(tool: Tool, json: bool) -> Result<()> {
    let listing: Vec<OptionListing> = tool
        .flags()
        .iter()
        .map(|spec| OptionListing {
            name: spec.name,
            flag: spec.flag,
            kind: spec.kind.as_str(),
            default: spec.default,
        })
        .collect();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&listing)?)?;
        return Ok(());
    }

    writeln!(out, "{} options:", tool.program().bold())?;
    for entry in &listing {
        writeln!(
            out,
            "  {:<24} {:<24} {:<9} {}",
            entry.name,
            entry.flag,
            entry.kind,
            entry.default.unwrap_or("")
        )?;
    }
    Ok(())
}

/// Verify both tools can be found
pub fn check_command() -> Result<()> {
    let mut missing = Vec::new();

    for tool in Tool::ALL {
        match which::which(tool.program()) {
            Ok(path) => println!("{} {} ({})", "✓".green(), tool, path.display()),
            Err(_) => {
                println!("{} {} not found on PATH", "✗".red(), tool);
                missing.push(tool.program());
            }
        }
    }

    if !missing.is_empty() {
        bail!("Missing GDAL tools: {}", missing.join(", "));
    }

    info!("All GDAL tools available");
    Ok(())
}

fn build_command(
    tool: Tool,
    destination: Option<String>,
    source: String,
    layers: Vec<String>,
    options: &[String],
) -> Result<VectorCommand> {
    let mut command = VectorCommand::new(tool, destination, source, layers);
    for raw in options {
        command
            .apply_assignment(raw)
            .with_context(|| format!("Invalid option '{}'", raw))?;
    }
    Ok(command)
}

fn execute(command: &VectorCommand, runner: &ShellRunner, dry_run: bool) -> Result<()> {
    if dry_run {
        eprintln!("{}", "DRY RUN: would execute".yellow());
        println!("{}", command.command());
        return Ok(());
    }

    if !tool_available(command.tool().program()) {
        warn!("{} was not found on PATH, the shell will try anyway", command.tool());
    }
    debug!("Running through {}", runner.config().shell);

    let output = with_operation_span(command.tool().program(), || command.run_with(runner))?;
    print!("{}", output);
    std::io::stdout().flush()?;
    Ok(())
}
