//! Mutable key/value state shared by method invocations.
//!
//! Values are a small tagged union rather than type-erased cells: behaviors
//! probe with the typed accessors and treat a type mismatch exactly like an
//! absent key. A behavior must never crash on unexpected cell contents.

use std::collections::HashMap;

/// A single environment cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Map(HashMap<String, String>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&HashMap<String, String>> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<HashMap<String, String>> for Value {
    fn from(m: HashMap<String, String>) -> Self {
        Value::Map(m)
    }
}

/// Key/value state owned by one [`Parser`](crate::Parser) instance.
///
/// Starts empty, lives as long as the parser, and is mutated only by method
/// invocations and the parser's `set`/`clear` operations.
#[derive(Debug, Default)]
pub struct Environment {
    values: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one entry, replacing any existing value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// String stored under `key`; `None` when absent or not a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// Like [`get_str`](Self::get_str), with a fallback.
    pub fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get_str(key).unwrap_or(default)
    }

    /// Map stored under `key`; `None` when absent or not a map.
    pub fn get_map(&self, key: &str) -> Option<&HashMap<String, String>> {
        self.values.get(key).and_then(Value::as_map)
    }

    /// Mutable access to the map under `key`, installing an empty map when
    /// the key is absent or holds a non-map value.
    pub fn map_mut(&mut self, key: &str) -> &mut HashMap<String, String> {
        let cell = self
            .values
            .entry(key.to_string())
            .or_insert_with(|| Value::Map(HashMap::new()));
        if !matches!(cell, Value::Map(_)) {
            *cell = Value::Map(HashMap::new());
        }
        match cell {
            Value::Map(map) => map,
            Value::Str(_) => unreachable!(),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_existing_values() {
        let mut env = Environment::new();
        env.set("k", "one");
        env.set("k", "two");
        assert_eq!(env.get_str("k"), Some("two"));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn type_mismatch_reads_as_absent() {
        let mut env = Environment::new();
        env.set("s", "text");
        env.set("m", HashMap::from([("a".to_string(), "1".to_string())]));

        assert_eq!(env.get_map("s"), None);
        assert_eq!(env.get_str("m"), None);
        assert_eq!(env.str_or("s", "fallback"), "text");
        assert_eq!(env.str_or("m", "fallback"), "fallback");
    }

    #[test]
    fn map_mut_installs_a_map_over_mismatched_cells() {
        let mut env = Environment::new();
        env.set("vars", "not a map");

        env.map_mut("vars").insert("k".to_string(), "v".to_string());
        assert_eq!(env.get_map("vars").and_then(|m| m.get("k")).map(String::as_str), Some("v"));
    }

    #[test]
    fn clear_empties_everything() {
        let mut env = Environment::new();
        env.set("a", "1");
        env.set("b", "2");
        env.clear();
        assert!(env.is_empty());
        assert_eq!(env.get("a"), None);
    }
}
