//! Field filtering applied to an entity's JSON tree before it is written.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// Names of fields that are written even when their value is null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NullBypassFields(BTreeSet<String>);

impl NullBypassFields {
    /// The empty set: every null field is dropped.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains(field)
    }

    /// Adds a field name. Returns `false` if it was already present.
    pub fn insert(&mut self, field: impl Into<String>) -> bool {
        self.0.insert(field.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for NullBypassFields {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for NullBypassFields {
    fn from(fields: [S; N]) -> Self {
        fields.into_iter().collect()
    }
}

impl<S: Into<String>> From<Vec<S>> for NullBypassFields {
    fn from(fields: Vec<S>) -> Self {
        fields.into_iter().collect()
    }
}

/// Decides, field by field, what makes it into the written JSON.
///
/// Implementations see every object member reached from the entity root,
/// including members of nested associations and of objects inside arrays.
pub trait FieldFilter {
    /// Return `false` to drop `field` from its enclosing object.
    fn include(&self, field: &str, value: &Value) -> bool;
}

impl<F: Fn(&str, &Value) -> bool> FieldFilter for F {
    fn include(&self, field: &str, value: &Value) -> bool {
        self(field, value)
    }
}

/// Drops null-valued fields unless their name is in the bypass set.
#[derive(Debug, Clone, Copy)]
pub struct NullValueFilter<'a> {
    bypass: &'a NullBypassFields,
}

impl<'a> NullValueFilter<'a> {
    pub fn new(bypass: &'a NullBypassFields) -> Self {
        Self { bypass }
    }
}

impl FieldFilter for NullValueFilter<'_> {
    fn include(&self, field: &str, value: &Value) -> bool {
        !value.is_null() || self.bypass.contains(field)
    }
}

/// Walks `value` and removes every object member `filter` rejects.
///
/// Array elements are never removed, only filtered inside.
pub fn apply_filter<F: FieldFilter + ?Sized>(value: &mut Value, filter: &F) {
    match value {
        Value::Object(map) => {
            map.retain(|field, v| filter.include(field, v));
            for v in map.values_mut() {
                apply_filter(v, filter);
            }
        }
        Value::Array(items) => {
            for item in items {
                apply_filter(item, filter);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_filter_keeps_non_null_values() {
        let bypass = NullBypassFields::none();
        let filter = NullValueFilter::new(&bypass);
        assert!(filter.include("title", &json!("x")));
        assert!(filter.include("count", &json!(0)));
        assert!(filter.include("flag", &json!(false)));
        assert!(filter.include("tags", &json!([])));
    }

    #[test]
    fn null_filter_drops_null_unless_bypassed() {
        let bypass = NullBypassFields::from(["email"]);
        let filter = NullValueFilter::new(&bypass);
        assert!(filter.include("email", &Value::Null));
        assert!(!filter.include("phone", &Value::Null));
    }

    #[test]
    fn apply_filter_recurses_into_objects_and_arrays() {
        let mut value = json!({
            "a": null,
            "nested": {"b": null, "c": 1},
            "list": [{"d": null, "e": 2}, null]
        });
        let bypass = NullBypassFields::none();
        apply_filter(&mut value, &NullValueFilter::new(&bypass));
        assert_eq!(value, json!({"nested": {"c": 1}, "list": [{"e": 2}, null]}));
    }

    #[test]
    fn closures_are_filters() {
        let mut value = json!({"keep": 1, "_internal": 2});
        apply_filter(&mut value, &|field: &str, _: &Value| !field.starts_with('_'));
        assert_eq!(value, json!({"keep": 1}));
    }

    #[test]
    fn bypass_set_is_unique() {
        let mut fields = NullBypassFields::from(vec!["a", "b", "a"]);
        assert_eq!(fields.len(), 2);
        assert!(!fields.insert("b"));
        assert!(fields.insert("c"));
        assert_eq!(fields.iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }
}
