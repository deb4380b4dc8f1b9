use std::collections::HashMap;

use crate::model::Value;

/// The output record of a parse: parsed values keyed by their variable name.
///
/// The namespace has no schema; a key appears only once its flag has been parsed.
///
/// ### Example
/// ```
/// # use argflag_core as argflag;
/// use argflag::{Namespace, Value};
///
/// let mut namespace = Namespace::new();
/// assert!(namespace.is_empty());
///
/// namespace.set("count", Value::Int(1));
/// let previous = namespace.set("count", Value::Int(2));
///
/// assert_eq!(previous, Some(Value::Int(1)));
/// assert_eq!(namespace.get_int("count"), Some(2));
/// assert_eq!(namespace.get_str("count"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Namespace {
    values: HashMap<String, Value>,
}

impl Namespace {
    /// Create an empty namespace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, returning the value it replaced (if any).
    pub fn set(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.values.insert(name.into(), value)
    }

    /// The value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Remove and return the value stored under `name`.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.values.remove(name)
    }

    /// Whether `name` has been set.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// The number of names set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no names have been set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate the `(name, value)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// The string stored under `name`, if it is a `Value::Str`.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// The integer stored under `name`, if it is a `Value::Int`.
    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_int)
    }

    /// The float stored under `name`, if it is a `Value::Float`.
    pub fn get_float(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_float)
    }

    /// The boolean stored under `name`, if it is a `Value::Bool`.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Namespace {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_empty() {
        let namespace = Namespace::new();
        assert!(namespace.is_empty());
        assert_eq!(namespace.len(), 0);
        assert_eq!(namespace.get("anything"), None);
        assert!(!namespace.contains("anything"));
        assert_eq!(namespace.iter().count(), 0);
    }

    #[test]
    fn namespace_set_overwrites() {
        let mut namespace = Namespace::new();
        assert_eq!(namespace.set("name", Value::Str("a".to_string())), None);
        assert_eq!(
            namespace.set("name", Value::Bool(true)),
            Some(Value::Str("a".to_string()))
        );
        assert_eq!(namespace.len(), 1);
        assert_eq!(namespace.get_bool("name"), Some(true));
    }

    #[test]
    fn namespace_typed_getters() {
        let namespace: Namespace = vec![
            ("s", Value::Str("abc".to_string())),
            ("i", Value::Int(3)),
            ("f", Value::Float(0.5)),
            ("b", Value::Bool(false)),
        ]
        .into_iter()
        .collect();

        assert_eq!(namespace.get_str("s"), Some("abc"));
        assert_eq!(namespace.get_int("i"), Some(3));
        assert_eq!(namespace.get_float("f"), Some(0.5));
        assert_eq!(namespace.get_bool("b"), Some(false));
        assert_eq!(namespace.get_int("s"), None);
        assert_eq!(namespace.get_str("missing"), None);
    }

    #[test]
    fn namespace_remove() {
        let mut namespace = Namespace::new();
        namespace.set("x", Value::Int(1));
        assert_eq!(namespace.remove("x"), Some(Value::Int(1)));
        assert_eq!(namespace.remove("x"), None);
        assert!(namespace.is_empty());
    }

    #[test]
    fn namespace_iter() {
        let mut namespace = Namespace::new();
        namespace.set("a", Value::Int(1));
        namespace.set("b", Value::Int(2));
        let mut pairs: Vec<(&str, &Value)> = namespace.iter().collect();
        pairs.sort_by_key(|(name, _)| *name);
        assert_eq!(pairs, vec![("a", &Value::Int(1)), ("b", &Value::Int(2))]);
    }
}
