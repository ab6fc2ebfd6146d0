// file: src/tools/ogr2ogr.rs
// version: 1.0.0
// guid: 5d1b8e72-0fa3-4c96-a7e4-82c3f6b09d15

//! Builder for `ogr2ogr`, the vector format conversion utility

use crate::command::VectorCommand;
use crate::error::Result;
use crate::flags::{FlagKind::*, FlagSpec};
use crate::options::{OptionBag, OptionValue};
use crate::runner::CommandRunner;
use crate::tools::Tool;

/// `ogr2ogr` flags in emission order
pub const FLAGS: &[FlagSpec] = &[
    FlagSpec::new("helpGeneral", "--help-general", Switch),
    FlagSpec::new("skipfailures", "-skipfailures", Switch),
    FlagSpec::new("append", "-append", Switch),
    FlagSpec::new("update", "-update", Switch),
    FlagSpec::new("select", "-select", Value),
    FlagSpec::new("where", "-where", Value),
    FlagSpec::new("progress", "-progress", Switch),
    FlagSpec::new("sql", "-sql", Value),
    FlagSpec::new("dialect", "-dialect", Value),
    FlagSpec::new("preserve_fid", "-preserve_fid", Switch),
    FlagSpec::new("fid", "-fid", Value),
    FlagSpec::new("limit", "-limit", Value),
    // A bounding box here becomes one quoted argument, e.g. `-spat '0 0 10 10'`
    FlagSpec::new("spat", "-spat", Value),
    FlagSpec::new("spat_srs", "-spat_srs", Value),
    FlagSpec::new("geomfield", "-geomfield", Value),
    FlagSpec::new("a_srs", "-a_srs", Value),
    FlagSpec::new("t_srs", "-t_srs", Value),
    FlagSpec::new("s_srs", "-s_srs", Value),
    FlagSpec::new("f", "-f", Value),
    FlagSpec::new("overwrite", "-overwrite", Switch),
    FlagSpec::new("nln", "-nln", Value),
    FlagSpec::new("nlt", "-nlt", Value),
    FlagSpec::new("dim", "-dim", Value),
    FlagSpec::new("gt", "-gt", Value),
    FlagSpec::new("clipsrc", "-clipsrc", Value),
    FlagSpec::new("clipsrcsql", "-clipsrcsql", Value),
    FlagSpec::new("clipsrclayer", "-clipsrclayer", Value),
    FlagSpec::new("clipsrcwhere", "-clipsrcwhere", Value),
    FlagSpec::new("clipdst", "-clipdst", Value),
    FlagSpec::new("clipdstsql", "-clipdstsql", Value),
    FlagSpec::new("clipdstlayer", "-clipdstlayer", Value),
    FlagSpec::new("clipdstwhere", "-clipdstwhere", Value),
    FlagSpec::new("wrapdateline", "-wrapdateline", Switch),
    FlagSpec::new("datelineoffset", "-datelineoffset", Value),
    FlagSpec::new("simplify", "-simplify", Value),
    FlagSpec::new("segmentize", "-segmentize", Value),
    FlagSpec::new("addfields", "-addfields", Switch),
    FlagSpec::new("unsetFid", "-unsetFid", Switch),
    FlagSpec::new("relaxedFieldNameMatch", "-relaxedFieldNameMatch", Switch),
    FlagSpec::new("forceNullable", "-forceNullable", Switch),
    FlagSpec::new("unsetDefault", "-unsetDefault", Switch),
    FlagSpec::new("fieldTypeToString", "-fieldTypeToString", Value),
    FlagSpec::new("unsetFieldWidth", "-unsetFieldWidth", Switch),
    FlagSpec::new("mapFieldType", "-mapFieldType", Value),
    FlagSpec::new("fieldmap", "-fieldmap", Value),
    FlagSpec::new("splitlistfields", "-splitlistfields", Switch),
    FlagSpec::new("maxsubfields", "-maxsubfields", Value),
    FlagSpec::new("explodecollections", "-explodecollections", Switch),
    FlagSpec::new("zfield", "-zfield", Value),
    FlagSpec::new("gcp", "-gcp", Value),
    FlagSpec::new("order", "-order", Value),
    FlagSpec::new("tps", "-tps", Switch),
    FlagSpec::new("nomd", "-nomd", Switch),
    FlagSpec::new("mo", "-mo", Value),
    FlagSpec::new("noNativeData", "-noNativeData", Switch),
    FlagSpec::new("dsco", "-dsco", Repeated),
    FlagSpec::new("lco", "-lco", Repeated),
    FlagSpec::new("oo", "-oo", Repeated),
    FlagSpec::new("doo", "-doo", Repeated),
];

/// Converts a source datasource into `destination`.
///
/// ```
/// use gdal_cmd::Ogr2Ogr;
///
/// let mut cmd = Ogr2Ogr::new("out.geojson", "in.shp", ["roads"]);
/// cmd.set_option("f", "GeoJSON").enable("skipfailures");
/// assert_eq!(
///     cmd.command(),
///     "ogr2ogr  -skipfailures -f 'GeoJSON' 'out.geojson' 'in.shp' roads"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Ogr2Ogr {
    inner: VectorCommand,
}

impl Ogr2Ogr {
    pub fn new<I, S>(destination: impl Into<String>, source: impl Into<String>, layers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inner: VectorCommand::new(Tool::Ogr2Ogr, Some(destination.into()), source, layers),
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
