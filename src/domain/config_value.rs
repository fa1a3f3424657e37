//! Untyped configuration value with get-or-default field access.

use serde_json::Value;

/// Configuration exported by a `taku.config.*` file.
///
/// Only a handful of nested fields are ever read; everything else is ignored.
/// Lookups never fail: a missing parent, a non-object parent, or a missing leaf
/// all read as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigValue(Value);

impl ConfigValue {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Walk `path` through nested objects.
    pub fn lookup(&self, path: &[&str]) -> Option<&Value> {
        path.iter().try_fold(&self.0, |value, key| value.as_object()?.get(*key))
    }

    /// Read `path` as a string, or `""` when absent.
    ///
    /// Falsy values (`null`, `false`, `0`, `""`) read as empty. Everything
    /// else uses its textual form: arrays join their elements with `,` and
    /// objects read as `[object Object]`.
    pub fn string_at(&self, path: &[&str]) -> String {
        self.lookup(path).map(coerce).unwrap_or_default()
    }
}

/// `value || ""` followed by string conversion.
fn coerce(value: &Value) -> String {
    if is_falsy(value) { String::new() } else { to_text(value) }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// String conversion of a value; array elements are comma-joined with `null`
/// elements reading as empty.
fn to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => f.to_string(),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(to_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
