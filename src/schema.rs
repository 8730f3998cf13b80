//! Schema field access
//!
//! Resolvers read a resource's configured state through the narrow
//! [`FieldReader`] capability instead of a concrete schema type. The real
//! resource-data type implements it in the calling code; [`MapFieldReader`]
//! is a deterministic map-backed implementation used in tests and by callers
//! that already hold plain key/value state.

use std::collections::HashMap;

/// Read access to a resource's configured schema fields.
pub trait FieldReader {
    /// Return the value of `key` when the field is set to a non-empty value.
    ///
    /// An unset field and a field set to `""` are both `None`; fallback
    /// chains treat them identically.
    fn get_ok(&self, key: &str) -> Option<String>;
}

/// Map-backed [`FieldReader`].
#[derive(Debug, Clone, Default)]
pub struct MapFieldReader {
    fields: HashMap<String, String>,
}

impl MapFieldReader {
    /// Create an empty reader (every lookup misses)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value
    pub fn set(&mut self, key: &str, value: &str) {
        self.fields.insert(key.to_string(), value.to_string());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapFieldReader {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl FieldReader for MapFieldReader {
    fn get_ok(&self, key: &str) -> Option<String> {
        self.fields
            .get(key)
            .filter(|v| !v.is_empty())
            .cloned()
    }
}
