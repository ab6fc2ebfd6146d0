// file: tests/integration_test.rs
// version: 1.0.0
// guid: 5f2c8a1e-d037-4b69-9e84-a61b3d7c0f25

//! Integration tests for gdal-cmd

use assert_cmd::Command;
use gdal_cmd::{
    config::ConfigLoader, CommandRunner, GdalCmdError, Ogr2Ogr, OgrInfo, OptionValue, Result,
    ShellRunner,
};
use predicates::prelude::*;
use std::cell::RefCell;
use tempfile::TempDir;

/// Records commands instead of running them
#[derive(Default)]
struct RecordingRunner {
    commands: RefCell<Vec<String>>,
    output: String,
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &str) -> Result<String> {
        self.commands.borrow_mut().push(command.to_string());
        Ok(self.output.clone())
    }
}

fn gdal_cmd() -> Command {
    let mut cmd = Command::cargo_bin("gdal-cmd").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("GDAL_CMD_CONFIG");
    cmd
}

#[test]
fn test_ogr2ogr_shapefile_to_postgis() {
    // Arrange
    let mut cmd = Ogr2Ogr::new(
        "PG:host=localhost dbname=gis user=postgres",
        "/data/Brussels streets.shp",
        None::<&str>,
    );

    // Act
    cmd.set_option("f", "PostgreSQL")
        .enable("overwrite")
        .set_option("nln", "streets")
        .set_option("nlt", "PROMOTE_TO_MULTI")
        .set_option("s_srs", "EPSG:31370")
        .set_option("t_srs", "EPSG:4326")
        .add_pair("lco", "GEOMETRY_NAME", "geom")
        .add_pair("lco", "FID", "gid");

    // Assert
    assert_eq!(
        cmd.command(),
        "ogr2ogr  -t_srs 'EPSG:4326' -s_srs 'EPSG:31370' -f 'PostgreSQL' -overwrite \
         -nln 'streets' -nlt 'PROMOTE_TO_MULTI' -lco 'GEOMETRY_NAME=geom' -lco 'FID=gid' \
         'PG:host=localhost dbname=gis user=postgres' '/data/Brussels streets.shp' "
    );
}

#[test]
fn test_ogrinfo_runs_through_custom_runner() -> Result<()> {
    // Arrange
    let runner = RecordingRunner {
        output: "INFO: Open of `data.gpkg'\n".to_string(),
        ..Default::default()
    };
    let mut info = OgrInfo::new("data.gpkg", ["parcels", "buildings"]);
    info.enable("ro").enable("so");

    // Act
    let output = info.run_with(&runner)?;

    // Assert
    assert_eq!(output, "INFO: Open of `data.gpkg'\n");
    assert_eq!(
        runner.commands.borrow().as_slice(),
        ["ogrinfo  -ro -so -fields 'YES' -geom 'YES' 'data.gpkg' parcels buildings"]
    );
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_missing_tool_surfaces_process_failure() {
    // Arrange
    let runner = ShellRunner::from_config(gdal_cmd::RunnerConfig {
        shell: "/bin/sh".to_string(),
        env: [("PATH".to_string(), "/nonexistent".to_string())]
            .into_iter()
            .collect(),
        ..Default::default()
    });
    let info = OgrInfo::new("nothing.shp", None::<&str>);

    // Act
    let err = info.run_with(&runner).unwrap_err();

    // Assert
    match err {
        GdalCmdError::ProcessFailed {
            command, exit_code, ..
        } => {
            assert_eq!(command, info.command());
            assert_ne!(exit_code, Some(0));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_job_file_to_command() -> Result<()> {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clip.yaml");
    std::fs::write(
        &path,
        r#"
tool: ogr2ogr
destination: clipped.gpkg
source: ${GDAL_CMD_TEST_SOURCE}
layers: [landuse]
options:
  f: GPKG
  clipsrc: "4.2 50.7 4.5 50.9"
  where: "class <> 'water'"
  explodecollections: true
"#,
    )?;
    let mut loader = ConfigLoader::new();
    loader.set_env_var("GDAL_CMD_TEST_SOURCE".to_string(), "osm.pbf".to_string());

    // Act
    let job = loader.load_job(&path)?;
    let command = job.to_command()?;

    // Assert
    assert_eq!(
        command.command(),
        "ogr2ogr  -where 'class <> '\\''water'\\''' -f 'GPKG' -clipsrc '4.2 50.7 4.5 50.9' \
         -explodecollections 'clipped.gpkg' 'osm.pbf' landuse"
    );
    assert_eq!(command.option("explodecollections"), Some(&OptionValue::Flag(true)));
    Ok(())
}

#[test]
fn test_cli_ogr2ogr_dry_run_prints_command() {
    gdal_cmd()
        .args([
            "ogr2ogr",
            "out.geojson",
            "in file.shp",
            "roads",
            "-o",
            "f=GeoJSON",
            "-o",
            "skipfailures",
            "-o",
            "lco:RFC7946=YES",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::eq(
            "ogr2ogr  -skipfailures -f 'GeoJSON' -lco 'RFC7946=YES' 'out.geojson' 'in file.shp' roads\n",
        ));
}

#[test]
fn test_cli_ogrinfo_dry_run_default_options() {
    gdal_cmd()
        .args(["ogrinfo", "data.shp", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::eq("ogrinfo  -fields 'YES' -geom 'YES' 'data.shp' \n"));
}

#[test]
fn test_cli_rejects_invalid_option_value() {
    gdal_cmd()
        .args(["ogrinfo", "data.shp", "-o", "spat=1,2", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid option 'spat=1,2'"));
}

#[test]
fn test_cli_job_dry_run() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inspect.json");
    std::fs::write(
        &path,
        r#"{"tool": "ogrinfo", "source": "data.gpkg", "options": {"al": true, "geom": "NO"}}"#,
    )
    .unwrap();

    // Act & Assert
    gdal_cmd()
        .args(["job", path.to_str().unwrap(), "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::eq("ogrinfo  -al -fields 'YES' -geom 'NO' 'data.gpkg' \n"));
}

#[test]
fn test_cli_options_json_lists_flags() {
    let output = gdal_cmd()
        .args(["options", "ogrinfo", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let listing: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = listing.as_array().unwrap();
    assert_eq!(entries.len(), gdal_cmd::Tool::OgrInfo.flags().len());
    assert_eq!(entries[0]["flag"], "--help-general");
    assert_eq!(entries[4]["kind"], "bbox");
    assert!(entries
        .iter()
        .any(|e| e["name"] == "fields" && e["default"] == "YES"));
}

#[cfg(unix)]
#[test]
fn test_cli_failure_exits_non_zero() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let settings = dir.path().join("config.toml");
    std::fs::write(&settings, "[runner]\nshell = \"/bin/sh\"\n\n[runner.env]\nPATH = \"/nonexistent\"\n").unwrap();

    // Act & Assert
    gdal_cmd()
        .args(["--config", settings.to_str().unwrap(), "ogrinfo", "missing.shp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed with exit code"));
}
