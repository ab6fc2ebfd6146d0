// file: src/flags.rs
// version: 1.0.0
// guid: 7a2f95c0-3e41-4d6b-8c17-e4b9a0d25f18

//! Flag tables and option serialization
//!
//! Every tool describes its command line as an ordered table of
//! [`FlagSpec`]s. Serializing an [`OptionBag`] walks that table in order,
//! so the emitted flag order never depends on the order options were set.

use crate::options::{OptionBag, OptionValue};
use serde::Serialize;

/// How a flag is rendered from its option value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagKind {
    /// Bare flag, present only when the value is exactly `true`
    Switch,
    /// Flag followed by one shell-escaped argument
    Value,
    /// Flag followed by one argument, not escaped
    Raw,
    /// Flag followed by four numbers with six decimals
    Bbox,
    /// Flag repeated once per `key=value` entry, each entry escaped
    Repeated,
}

impl FlagKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlagKind::Switch => "switch",
            FlagKind::Value => "value",
            FlagKind::Raw => "raw",
            FlagKind::Bbox => "bbox",
            FlagKind::Repeated => "repeated",
        }
    }
}

/// One entry of a tool's flag table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlagSpec {
    /// Option name in the bag
    pub name: &'static str,
    /// Text emitted on the command line
    pub flag: &'static str,
    pub kind: FlagKind,
    /// Text default; `None` means false, null or empty depending on kind
    pub default: Option<&'static str>,
}

impl FlagSpec {
    pub const fn new(name: &'static str, flag: &'static str, kind: FlagKind) -> Self {
        Self {
            name,
            flag,
            kind,
            default: None,
        }
    }

    pub const fn with_default(
        name: &'static str,
        flag: &'static str,
        kind: FlagKind,
        default: &'static str,
    ) -> Self {
        Self {
            name,
            flag,
            kind,
            default: Some(default),
        }
    }

    /// Append this flag's rendering of `value` to `out`
    pub fn render_into(&self, value: &OptionValue, out: &mut String) {
        match self.kind {
            FlagKind::Switch => {
                if matches!(value, OptionValue::Flag(true)) {
                    out.push(' ');
                    out.push_str(self.flag);
                }
            }
            FlagKind::Value => {
                if let Some(arg) = value.to_arg().filter(|_| value.is_set()) {
                    out.push_str(&format!(" {} {}", self.flag, escape_arg(&arg)));
                }
            }
            FlagKind::Raw => {
                if let Some(arg) = value.to_arg().filter(|_| value.is_set()) {
                    out.push_str(&format!(" {} {}", self.flag, arg));
                }
            }
            FlagKind::Bbox => {
                if let OptionValue::Bbox([xmin, ymin, xmax, ymax]) = value {
                    out.push_str(&format!(
                        " {} {:.6} {:.6} {:.6} {:.6}",
                        self.flag, xmin, ymin, xmax, ymax
                    ));
                }
            }
            FlagKind::Repeated => {
                if let OptionValue::Pairs(pairs) = value {
                    for (key, val) in pairs {
                        let entry = format!("{}={}", key, val);
                        out.push_str(&format!(" {} {}", self.flag, escape_arg(&entry)));
                    }
                }
            }
        }
    }
}

/// Quote `arg` for a POSIX shell.
///
/// The result is always wrapped in single quotes; embedded single quotes
/// become `'\''`.
pub fn escape_arg(arg: &str) -> String {
    let mut escaped = String::with_capacity(arg.len() + 2);
    escaped.push('\'');
    for c in arg.chars() {
        if c == '\'' {
            escaped.push_str("'\\''");
        } else {
            escaped.push(c);
        }
    }
    escaped.push('\'');
    escaped
}

/// Serialize `bag` following the order of `specs`.
///
/// Each emitted fragment starts with a single space. Names in the bag that
/// no spec consumes are ignored.
pub fn render_options(specs: &[FlagSpec], bag: &OptionBag) -> String {
    let mut out = String::new();
    for spec in specs {
        if let Some(value) = bag.get(spec.name) {
            spec.render_into(value, &mut out);
        }
    }
    out
}
