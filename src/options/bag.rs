// file: src/options/bag.rs
// version: 1.0.0
// guid: c51a7d3e-60f2-4b8e-a9c4-2d7f18e0b635

use super::value::{OptionValue, Scalar};
use crate::flags::{FlagKind, FlagSpec};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping from option name to value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionBag {
    values: IndexMap<String, OptionValue>,
}

impl OptionBag {
    /// Create a bag holding the default value of every flag in `specs`
    pub fn with_defaults(specs: &[FlagSpec]) -> Self {
        let values = specs
            .iter()
            .map(|spec| (spec.name.to_string(), spec.default_value()))
            .collect();
        Self { values }
    }

    /// Set an option, returning the previous value if there was one.
    ///
    /// Any name is accepted.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Option<OptionValue> {
        self.values.insert(name.into(), value.into())
    }

    /// Add one `key=value` entry to a multi-valued option.
    ///
    /// A non-map value under `name` is replaced by a fresh map.
    pub fn insert_pair(&mut self, name: &str, key: impl Into<String>, value: impl Into<Scalar>) {
        let entry = self
            .values
            .entry(name.to_string())
            .or_insert_with(|| OptionValue::Pairs(IndexMap::new()));

        if !matches!(entry, OptionValue::Pairs(_)) {
            *entry = OptionValue::Pairs(IndexMap::new());
        }
        if let OptionValue::Pairs(pairs) = entry {
            pairs.insert(key.into(), value.into());
        }
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Names stored in the bag that no flag in `specs` consumes
    pub fn unknown_names<'a>(&'a self, specs: &'a [FlagSpec]) -> impl Iterator<Item = &'a str> + 'a {
        self.values
            .keys()
            .map(String::as_str)
            .filter(move |name| !specs.iter().any(|spec| spec.name == *name))
    }
}

impl FlagSpec {
    /// Value an option holds before anyone sets it
    pub fn default_value(&self) -> OptionValue {
        match (self.default, self.kind) {
            (Some(text), _) => OptionValue::Text(text.to_string()),
            (None, FlagKind::Switch) => OptionValue::Flag(false),
            (None, FlagKind::Repeated) => OptionValue::Pairs(IndexMap::new()),
            (None, _) => OptionValue::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPECS: &[FlagSpec] = &[
        FlagSpec::new("append", "-append", FlagKind::Switch),
        FlagSpec::new("where", "-where", FlagKind::Value),
        FlagSpec::new("lco", "-lco", FlagKind::Repeated),
        FlagSpec::with_default("geom", "-geom", FlagKind::Value, "YES"),
    ];

    #[test]
    fn test_with_defaults_predefines_every_key() {
        // Act
        let bag = OptionBag::with_defaults(SPECS);

        // Assert
        assert_eq!(bag.len(), 4);
        assert_eq!(bag.get("append"), Some(&OptionValue::Flag(false)));
        assert_eq!(bag.get("where"), Some(&OptionValue::Null));
        assert_eq!(bag.get("lco"), Some(&OptionValue::Pairs(IndexMap::new())));
        assert_eq!(bag.get("geom"), Some(&OptionValue::from("YES")));
    }

    #[test]
    fn test_set_accepts_unknown_names() {
        // Arrange
        let mut bag = OptionBag::with_defaults(SPECS);

        // Act
        let previous = bag.set("no_such_option", "value");
        let replaced = bag.set("append", true);

        // Assert
        assert_eq!(previous, None);
        assert_eq!(replaced, Some(OptionValue::Flag(false)));
        assert!(bag.contains("no_such_option"));
        assert_eq!(bag.unknown_names(SPECS).collect::<Vec<_>>(), vec!["no_such_option"]);
    }

    #[test]
    fn test_insert_pair_keeps_order_and_replaces_non_maps() {
        // Arrange
        let mut bag = OptionBag::with_defaults(SPECS);
        bag.set("dsco", "oops");

        // Act
        bag.insert_pair("lco", "SPATIAL_INDEX", "YES");
        bag.insert_pair("lco", "ENCODING", "UTF-8");
        bag.insert_pair("dsco", "VERSION", 2);

        // Assert
        let lco: Vec<_> = match bag.get("lco") {
            Some(OptionValue::Pairs(p)) => p.keys().cloned().collect(),
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(lco, vec!["SPATIAL_INDEX", "ENCODING"]);
        assert_eq!(bag.get("dsco"), Some(&OptionValue::pairs([("VERSION", 2)])));
    }
}
