//! Symbol set construction from configuration mappings.
//!
//! A [`SymbolSet`] is the set of names considered "defined" for a processing
//! run. It is built once from one or more configuration sources and treated
//! as read-only by every downstream component, so independent files can be
//! processed in parallel without coordination.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Namespace prefix stripped from configuration keys before comparison.
///
/// Build configurations commonly define `process.env.FEATURE_X`; directive
/// expressions reference the bare `FEATURE_X`.
pub const NAMESPACE_PREFIX: &str = "process.env.";

/// Value side of a configuration mapping entry.
///
/// Only the value's kind matters for symbol definition; payloads of
/// non-boolean values are never inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Boolean value: defines the symbol only when `true`.
    Bool(bool),

    /// Integer value.
    Integer(i64),

    /// Floating point value.
    Float(f64),

    /// String value.
    String(String),

    /// List of values.
    List(Vec<Self>),

    /// Nested map of values.
    Map(HashMap<String, Self>),

    /// Null/absent value: never defines the symbol.
    Null,
}

impl ConfigValue {
    /// Returns whether an entry with this value defines its key as a symbol.
    ///
    /// `Bool(true)` defines; `Bool(false)` and `Null` do not; every other
    /// kind defines by mere presence. Unrecognized kinds deserialize to
    /// nothing at all and are therefore treated as absent (lenient default).
    #[must_use]
    pub const fn defines_symbol(&self) -> bool {
        match self {
            Self::Bool(defined) => *defined,
            Self::Null => false,
            _ => true,
        }
    }
}

/// Immutable set of defined symbol names.
///
/// Built once per run from configuration sources, then passed by reference
/// to every scanner/resolver invocation. Symbols are only ever added during
/// construction; nothing removes one.
///
/// # Examples
///
/// ```
/// use strip_ifdef::core::{ConfigValue, SymbolSet};
///
/// let symbols = SymbolSet::from_config([
///     ("process.env.DEBUG".to_string(), ConfigValue::Bool(true)),
///     ("RELEASE".to_string(), ConfigValue::Bool(false)),
/// ]);
/// assert!(symbols.contains("DEBUG"));
/// assert!(!symbols.contains("RELEASE"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolSet {
    /// Defined names, ordered for deterministic iteration and output.
    names: BTreeSet<String>,
}

impl SymbolSet {
    /// Creates an empty symbol set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    /// Builds a symbol set from a configuration mapping.
    ///
    /// Keys carrying the [`NAMESPACE_PREFIX`] have it stripped. An entry is
    /// added when its value [defines a symbol](ConfigValue::defines_symbol).
    pub fn from_config<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, ConfigValue)>,
    {
        let mut set = Self::new();
        set.extend_config(entries);
        set
    }

    /// Builds a symbol set from the process environment.
    ///
    /// Every environment variable carries a string value, so every variable
    /// name becomes a defined symbol (presence is what matters).
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_config(
            std::env::vars().map(|(key, value)| (key, ConfigValue::String(value))),
        )
    }

    /// Merges a configuration mapping into this set.
    ///
    /// Only valid during construction; downstream components receive the set
    /// by shared reference and cannot call this.
    pub fn extend_config<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (String, ConfigValue)>,
    {
        for (key, value) in entries {
            if value.defines_symbol() {
                let name = key.strip_prefix(NAMESPACE_PREFIX).unwrap_or(&key);
                self.names.insert(name.to_string());
            }
        }
    }

    /// Defines a symbol by name, stripping the namespace prefix if present.
    ///
    /// Equivalent to a `Bool(true)` configuration entry; used for explicit
    /// `-D NAME` definitions.
    pub fn define(&mut self, name: &str) {
        let name = name.strip_prefix(NAMESPACE_PREFIX).unwrap_or(name);
        self.names.insert(name.to_string());
    }

    /// Returns whether `name` is a defined symbol.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Returns the number of defined symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns whether no symbols are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over the defined names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a SymbolSet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

impl FromIterator<String> for SymbolSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.define(&name);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, value: ConfigValue) -> (String, ConfigValue) {
        (key.to_string(), value)
    }

    #[test]
    fn test_boolean_true_defines() {
        let set = SymbolSet::from_config([entry("FOO", ConfigValue::Bool(true))]);
        assert!(set.contains("FOO"));
    }

    #[test]
    fn test_boolean_false_omitted() {
        let set = SymbolSet::from_config([entry("FOO", ConfigValue::Bool(false))]);
        assert!(!set.contains("FOO"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_null_omitted() {
        let set = SymbolSet::from_config([entry("FOO", ConfigValue::Null)]);
        assert!(!set.contains("FOO"));
    }

    #[test]
    fn test_non_boolean_presence_defines() {
        let set = SymbolSet::from_config([
            entry("A", ConfigValue::String(String::new())),
            entry("B", ConfigValue::Integer(0)),
            entry("C", ConfigValue::Float(0.0)),
            entry("D", ConfigValue::List(vec![])),
            entry("E", ConfigValue::Map(HashMap::new())),
        ]);
        for name in ["A", "B", "C", "D", "E"] {
            assert!(set.contains(name), "{name} should be defined");
        }
    }

    #[test]
    fn test_namespace_prefix_stripped() {
        let set = SymbolSet::from_config([entry("process.env.DEBUG", ConfigValue::Bool(true))]);
        assert!(set.contains("DEBUG"));
        assert!(!set.contains("process.env.DEBUG"));
    }

    #[test]
    fn test_prefix_only_stripped_at_start() {
        let set =
            SymbolSet::from_config([entry("MY.process.env.DEBUG", ConfigValue::Bool(true))]);
        assert!(set.contains("MY.process.env.DEBUG"));
    }

    #[test]
    fn test_define_strips_prefix() {
        let mut set = SymbolSet::new();
        set.define("process.env.FEATURE_X");
        assert!(set.contains("FEATURE_X"));
    }

    #[test]
    fn test_duplicate_keys_collapse() {
        let set = SymbolSet::from_config([
            entry("FOO", ConfigValue::Bool(true)),
            entry("process.env.FOO", ConfigValue::String("1".to_string())),
        ]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_iter_sorted() {
        let set: SymbolSet = ["B", "A", "C"].iter().map(ToString::to_string).collect();
        let names: Vec<&str> = set.iter().collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn test_config_value_from_json() {
        let raw = r#"{"A": true, "B": false, "C": "x", "D": 3, "E": null, "F": [1], "G": {"k": 1}}"#;
        let mapping: HashMap<String, ConfigValue> =
            serde_json::from_str(raw).expect("valid mapping");
        let set = SymbolSet::from_config(mapping);
        assert!(set.contains("A"));
        assert!(!set.contains("B"));
        assert!(set.contains("C"));
        assert!(set.contains("D"));
        assert!(!set.contains("E"));
        assert!(set.contains("F"));
        assert!(set.contains("G"));
    }
}
