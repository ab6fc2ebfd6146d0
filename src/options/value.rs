// file: src/options/value.rs
// version: 1.0.0
// guid: 9b0e4c27-1d53-4f8a-b6e2-5c8a07d31e94

//! Option values accepted by the command builders

use crate::error::{GdalCmdError, Result};
use crate::flags::FlagKind;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar stored inside a [`OptionValue::Pairs`] map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(true) => f.write_str("1"),
            Scalar::Bool(false) => Ok(()),
            Scalar::Integer(i) => write!(f, "{}", i),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Scalar::Integer(i)
    }
}

impl From<i32> for Scalar {
    fn from(i: i32) -> Self {
        Scalar::Integer(i64::from(i))
    }
}

impl From<f64> for Scalar {
    fn from(x: f64) -> Self {
        Scalar::Float(x)
    }
}

/// Value of a single named option
///
/// Deserializes untagged, so job files can write plain `true`, `5`,
/// `"EPSG:4326"`, `[0, 0, 10, 10]` or `{ SPATIAL_INDEX: "YES" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum OptionValue {
    #[default]
    Null,
    Flag(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Bbox([f64; 4]),
    Pairs(IndexMap<String, Scalar>),
}

impl OptionValue {
    /// Build a `Pairs` value, keeping the given order
    pub fn pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Scalar>,
    {
        OptionValue::Pairs(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Whether a value-bearing flag should be emitted for this value.
    ///
    /// Null, false, zero, `""`, `"0"` and empty pair maps count as unset.
    pub fn is_set(&self) -> bool {
        match self {
            OptionValue::Null => false,
            OptionValue::Flag(b) => *b,
            OptionValue::Integer(i) => *i != 0,
            OptionValue::Float(x) => *x != 0.0,
            OptionValue::Text(s) => !(s.is_empty() || s == "0"),
            OptionValue::Bbox(_) => true,
            OptionValue::Pairs(p) => !p.is_empty(),
        }
    }

    /// Render the value as a single command-line argument (before escaping)
    pub fn to_arg(&self) -> Option<String> {
        match self {
            OptionValue::Null => None,
            OptionValue::Flag(true) => Some("1".to_string()),
            OptionValue::Flag(false) => Some(String::new()),
            OptionValue::Integer(i) => Some(i.to_string()),
            OptionValue::Float(x) => Some(x.to_string()),
            OptionValue::Text(s) => Some(s.clone()),
            OptionValue::Bbox(b) => Some(
                b.iter()
                    .map(|x| x.to_string())
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            OptionValue::Pairs(_) => None,
        }
    }

    /// Parse a raw command-line string into the shape a flag of `kind` expects
    pub fn parse_for(kind: FlagKind, raw: &str) -> Result<Self> {
        match kind {
            FlagKind::Switch => parse_bool(raw).map(OptionValue::Flag),
            FlagKind::Bbox => parse_bbox(raw).map(OptionValue::Bbox),
            FlagKind::Repeated => match raw.split_once('=') {
                Some((key, value)) if !key.is_empty() => {
                    Ok(OptionValue::pairs([(key, value)]))
                }
                _ => Err(GdalCmdError::invalid_option(format!(
                    "expected KEY=VALUE, got '{}'",
                    raw
                ))),
            },
            FlagKind::Value | FlagKind::Raw => Ok(OptionValue::Text(raw.to_string())),
        }
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(GdalCmdError::invalid_option(format!(
            "expected a boolean, got '{}'",
            other
        ))),
    }
}

fn parse_bbox(raw: &str) -> Result<[f64; 4]> {
    let numbers = raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<f64>().map_err(|_| {
                GdalCmdError::invalid_option(format!("'{}' is not a number", part))
            })
        })
        .collect::<Result<Vec<f64>>>()?;

    match numbers.as_slice() {
        [xmin, ymin, xmax, ymax] => Ok([*xmin, *ymin, *xmax, *ymax]),
        _ => Err(GdalCmdError::invalid_option(format!(
            "bounding box needs 4 numbers, got {} in '{}'",
            numbers.len(),
            raw
        ))),
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Flag(b)
    }
}

impl From<i64> for OptionValue {
    fn from(i: i64) -> Self {
        OptionValue::Integer(i)
    }
}

impl From<i32> for OptionValue {
    fn from(i: i32) -> Self {
        OptionValue::Integer(i64::from(i))
    }
}

impl From<u32> for OptionValue {
    fn from(i: u32) -> Self {
        OptionValue::Integer(i64::from(i))
    }
}

impl From<f64> for OptionValue {
    fn from(x: f64) -> Self {
        OptionValue::Float(x)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Text(s)
    }
}

impl From<[f64; 4]> for OptionValue {
    fn from(b: [f64; 4]) -> Self {
        OptionValue::Bbox(b)
    }
}

impl From<IndexMap<String, Scalar>> for OptionValue {
    fn from(p: IndexMap<String, Scalar>) -> Self {
        OptionValue::Pairs(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_set_treats_empty_like_values_as_unset() {
        assert!(!OptionValue::Null.is_set());
        assert!(!OptionValue::Flag(false).is_set());
        assert!(!OptionValue::Integer(0).is_set());
        assert!(!OptionValue::Float(0.0).is_set());
        assert!(!OptionValue::from("").is_set());
        assert!(!OptionValue::from("0").is_set());
        assert!(!OptionValue::pairs(Vec::<(String, String)>::new()).is_set());

        assert!(OptionValue::Flag(true).is_set());
        assert!(OptionValue::Integer(10).is_set());
        assert!(OptionValue::from("00").is_set());
        assert!(OptionValue::Bbox([0.0; 4]).is_set());
    }

    #[test]
    fn test_to_arg_renders_numbers_compactly() {
        assert_eq!(OptionValue::from(1.0).to_arg().as_deref(), Some("1"));
        assert_eq!(OptionValue::from(0.25).to_arg().as_deref(), Some("0.25"));
        assert_eq!(OptionValue::from(-3).to_arg().as_deref(), Some("-3"));
        assert_eq!(OptionValue::Flag(true).to_arg().as_deref(), Some("1"));
        assert_eq!(
            OptionValue::Bbox([1.0, 2.5, 3.0, 4.0]).to_arg().as_deref(),
            Some("1 2.5 3 4")
        );
        assert_eq!(OptionValue::pairs([("A", "B")]).to_arg(), None);
    }

    #[test]
    fn test_parse_for_switch() {
        assert_eq!(
            OptionValue::parse_for(FlagKind::Switch, "YES").unwrap(),
            OptionValue::Flag(true)
        );
        assert_eq!(
            OptionValue::parse_for(FlagKind::Switch, "off").unwrap(),
            OptionValue::Flag(false)
        );
        assert!(OptionValue::parse_for(FlagKind::Switch, "maybe").is_err());
    }

    #[test]
    fn test_parse_for_bbox_accepts_commas_and_spaces() {
        // Act
        let commas = OptionValue::parse_for(FlagKind::Bbox, "1,2,3,4").unwrap();
        let spaces = OptionValue::parse_for(FlagKind::Bbox, " 1 2  3 4 ").unwrap();

        // Assert
        assert_eq!(commas, OptionValue::Bbox([1.0, 2.0, 3.0, 4.0]));
        assert_eq!(commas, spaces);
    }

    #[test]
    fn test_parse_for_bbox_rejects_bad_input() {
        assert!(OptionValue::parse_for(FlagKind::Bbox, "1,2,3").is_err());
        assert!(OptionValue::parse_for(FlagKind::Bbox, "1,2,3,x").is_err());
    }

    #[test]
    fn test_parse_for_repeated_requires_key_value() {
        assert_eq!(
            OptionValue::parse_for(FlagKind::Repeated, "SPATIAL_INDEX=YES").unwrap(),
            OptionValue::pairs([("SPATIAL_INDEX", "YES")])
        );
        assert!(OptionValue::parse_for(FlagKind::Repeated, "SPATIAL_INDEX").is_err());
        assert!(OptionValue::parse_for(FlagKind::Repeated, "=YES").is_err());
    }

    #[test]
    fn test_untagged_deserialization_from_yaml() {
        // Arrange
        let yaml = r#"
skipfailures: true
limit: 5
simplify: 0.5
t_srs: "EPSG:4326"
spat: [0, 0, 10, 10]
lco:
  SPATIAL_INDEX: "YES"
  PRECISION: 3
fid: ~
"#;

        // Act
        let values: IndexMap<String, OptionValue> = serde_yaml::from_str(yaml).unwrap();

        // Assert
        assert_eq!(values["skipfailures"], OptionValue::Flag(true));
        assert_eq!(values["limit"], OptionValue::Integer(5));
        assert_eq!(values["simplify"], OptionValue::Float(0.5));
        assert_eq!(values["t_srs"], OptionValue::from("EPSG:4326"));
        assert_eq!(values["spat"], OptionValue::Bbox([0.0, 0.0, 10.0, 10.0]));
        assert_eq!(
            values["lco"],
            OptionValue::pairs([
                ("SPATIAL_INDEX", Scalar::from("YES")),
                ("PRECISION", Scalar::from(3))
            ])
        );
        assert_eq!(values["fid"], OptionValue::Null);
    }
}
