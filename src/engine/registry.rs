//! Method registry.
//!
//! Built once from an ordered collection of [`Method`]s and read-only
//! afterwards. Later registrations win on a name collision, which lets a
//! caller override a bundled library method by appending their own.

use crate::Method;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct MethodRegistry {
    methods: HashMap<String, Method>,
}

impl MethodRegistry {
    /// Build a registry from `methods`, in order. Last registration wins.
    pub fn new(methods: impl IntoIterator<Item = Method>) -> Self {
        let mut map = HashMap::new();
        for method in methods {
            map.insert(method.name().to_string(), method);
        }
        MethodRegistry { methods: map }
    }

    pub fn get(&self, name: &str) -> Option<&Method> {
        self.methods.get(name)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Registered names, sorted. Used by the debug trace.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Environment, Method};

    fn constant(name: &str, output: &str) -> Method {
        let output = output.to_string();
        Method::named(name).simple(move |_env| output.clone()).build()
    }

    #[test]
    fn last_registration_wins() {
        let registry = MethodRegistry::new(vec![constant("hi", "first"), constant("hi", "second")]);
        assert_eq!(registry.len(), 1);

        let mut env = Environment::new();
        let result = registry.get("hi").unwrap().parse_simple(&mut env).unwrap();
        assert_eq!(result, Some("second".to_string()));
    }

    #[test]
    fn lookup_misses_are_none() {
        let registry = MethodRegistry::new(vec![constant("a", "1")]);
        assert!(registry.get("b").is_none());
    }

    #[test]
    fn names_are_sorted() {
        let registry =
            MethodRegistry::new(vec![constant("c", ""), constant("a", ""), constant("b", "")]);
        assert_eq!(registry.names(), vec!["a", "b", "c"]);
    }
}
