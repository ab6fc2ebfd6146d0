// file: src/tools/mod.rs
// version: 1.0.0
// guid: e2d84b17-95ca-4f60-b3a8-1c6f0e7d9a24

//! The two wrapped GDAL vector utilities

pub mod ogr2ogr;
pub mod ogrinfo;

pub use ogr2ogr::Ogr2Ogr;
pub use ogrinfo::OgrInfo;

use crate::error::GdalCmdError;
use crate::flags::FlagSpec;
use crate::options::OptionBag;
use serde::{Deserialize, Serialize};
use std::fmt;

/// External program a command is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    #[serde(rename = "ogr2ogr")]
    Ogr2Ogr,
    #[serde(rename = "ogrinfo")]
    OgrInfo,
}

impl Tool {
    pub const ALL: [Tool; 2] = [Tool::Ogr2Ogr, Tool::OgrInfo];

    /// Executable name
    pub fn program(&self) -> &'static str {
        match self {
            Tool::Ogr2Ogr => "ogr2ogr",
            Tool::OgrInfo => "ogrinfo",
        }
    }

    /// Ordered flag table
    pub fn flags(&self) -> &'static [FlagSpec] {
        match self {
            Tool::Ogr2Ogr => ogr2ogr::FLAGS,
            Tool::OgrInfo => ogrinfo::FLAGS,
        }
    }

    /// A fresh bag with every known option at its default
    pub fn defaults(&self) -> OptionBag {
        OptionBag::with_defaults(self.flags())
    }

    /// Look up the flag consuming option `name`
    pub fn spec(&self, name: &str) -> Option<&'static FlagSpec> {
        self.flags().iter().find(|spec| spec.name == name)
    }

    /// Whether the command takes a destination before the source
    pub fn takes_destination(&self) -> bool {
        matches!(self, Tool::Ogr2Ogr)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

impl std::str::FromStr for Tool {
    type Err = GdalCmdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ogr2ogr" => Ok(Tool::Ogr2Ogr),
            "ogrinfo" => Ok(Tool::OgrInfo),
            _ => Err(GdalCmdError::config(format!("Unknown tool: {}", s))),
        }
    }
}
