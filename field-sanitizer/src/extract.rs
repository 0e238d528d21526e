// Recursive extraction and whitespace sanitization of object fields
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::debug;

use error_common::{FieldKitError, Result};

use crate::whitespace::normalize_whitespace;

/// Depth at which traversal stops when no other limit is configured
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Traversal settings for [`extract_and_sanitize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizeOptions {
    /// Values first reached at this depth or deeper are copied unchanged.
    /// Top-level field values sit at depth 0.
    pub max_depth: usize,
}

impl SanitizeOptions {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Counters collected during one call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalStats {
    /// Strings passed through whitespace normalization
    pub strings_normalized: usize,
    /// Non-null values copied as-is because they sat at the depth cap
    pub truncated_values: usize,
}

/// How a key relates to a [`SanitizedFields`] result
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldPresence<'a> {
    /// The key was not in the requested list
    NotRequested,
    /// The key was requested but missing from the source object
    Absent,
    /// The key was requested and present; `null` values land here too
    Present(&'a Value),
}

impl<'a> FieldPresence<'a> {
    pub fn value(self) -> Option<&'a Value> {
        match self {
            Self::Present(value) => Some(value),
            Self::NotRequested | Self::Absent => None,
        }
    }
}

/// Sanitized subset of an object's fields.
///
/// Serializes as the bare JSON object of extracted fields, in request order.
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizedFields {
    requested: Vec<String>,
    values: Map<String, Value>,
    stats: TraversalStats,
}

impl SanitizedFields {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn field(&self, key: &str) -> FieldPresence<'_> {
        match self.values.get(key) {
            Some(value) => FieldPresence::Present(value),
            None if self.requested.iter().any(|k| k == key) => FieldPresence::Absent,
            None => FieldPresence::NotRequested,
        }
    }

    /// Number of extracted fields (requested and present)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Extracted keys, in request order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Requested keys with duplicates removed, in request order
    pub fn requested_keys(&self) -> &[String] {
        &self.requested
    }

    pub fn stats(&self) -> TraversalStats {
        self.stats
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.values
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.values)
    }
}

impl Serialize for SanitizedFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.values.serialize(serializer)
    }
}

impl From<SanitizedFields> for Value {
    fn from(fields: SanitizedFields) -> Self {
        fields.into_value()
    }
}

struct Walker {
    max_depth: usize,
    stats: TraversalStats,
}

impl Walker {
    fn new(options: SanitizeOptions) -> Self {
        Self {
            max_depth: options.max_depth,
            stats: TraversalStats::default(),
        }
    }

    fn process(&mut self, value: &Value, depth: usize) -> Value {
        match value {
            Value::Null => Value::Null,
            _ if depth >= self.max_depth => {
                self.stats.truncated_values += 1;
                value.clone()
            }
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|item| self.process(item, depth + 1))
                    .collect(),
            ),
            Value::Object(entries) => {
                let mut sanitized = Map::with_capacity(entries.len());
                for (key, entry) in entries {
                    sanitized.insert(key.clone(), self.process(entry, depth + 1));
                }
                Value::Object(sanitized)
            }
            Value::String(text) => {
                self.stats.strings_normalized += 1;
                Value::String(normalize_whitespace(text))
            }
            Value::Bool(_) | Value::Number(_) => value.clone(),
        }
    }
}

/// Extract `keys` from `obj` and whitespace-normalize every string inside
/// them, descending through arrays and objects until `options.max_depth`.
///
/// Keys missing from `obj` are left out of the result; keys holding `null`
/// are kept as `null`. `obj` is never modified.
///
/// # Example
///
/// ```rust
/// use field_sanitizer::{extract_and_sanitize, SanitizeOptions};
/// use serde_json::json;
///
/// let source = json!({ "role": "  Economic   buyer ", "position": 2 });
/// let fields = extract_and_sanitize(
///     source.as_object().unwrap(),
///     &["role", "position", "notes"],
///     SanitizeOptions::default(),
/// );
/// assert_eq!(fields.into_value(), json!({ "role": "Economic buyer", "position": 2 }));
/// ```
pub fn extract_and_sanitize<K: AsRef<str>>(
    obj: &Map<String, Value>,
    keys: &[K],
    options: SanitizeOptions,
) -> SanitizedFields {
    let mut walker = Walker::new(options);
    let mut requested: Vec<String> = Vec::with_capacity(keys.len());
    let mut values = Map::with_capacity(keys.len());

    for key in keys {
        let key = key.as_ref();
        if requested.iter().any(|k| k == key) {
            continue;
        }
        requested.push(key.to_owned());

        if let Some(value) = obj.get(key) {
            values.insert(key.to_owned(), walker.process(value, 0));
        }
    }

    debug!(
        requested = requested.len(),
        extracted = values.len(),
        strings_normalized = walker.stats.strings_normalized,
        truncated_values = walker.stats.truncated_values,
        max_depth = options.max_depth,
        "Sanitized object fields"
    );

    SanitizedFields {
        requested,
        values,
        stats: walker.stats,
    }
}

/// [`extract_and_sanitize`] with [`DEFAULT_MAX_DEPTH`]
pub fn extract_and_sanitize_with_default_depth<K: AsRef<str>>(
    obj: &Map<String, Value>,
    keys: &[K],
) -> SanitizedFields {
    extract_and_sanitize(obj, keys, SanitizeOptions::default())
}

/// Sanitize a single value as if it were a top-level field
pub fn sanitize_value(value: &Value, options: SanitizeOptions) -> Value {
    Walker::new(options).process(value, 0)
}

/// Same as [`extract_and_sanitize`] for a root that is not known to be an
/// object.
///
/// # Errors
///
/// Returns [`FieldKitError::InvalidInput`] when `root` is not a JSON object.
pub fn extract_and_sanitize_value<K: AsRef<str>>(
    root: &Value,
    keys: &[K],
    options: SanitizeOptions,
) -> Result<SanitizedFields> {
    match root {
        Value::Object(obj) => Ok(extract_and_sanitize(obj, keys, options)),
        other => Err(FieldKitError::InvalidInput(format!(
            "expected a JSON object, got {}",
            value_kind(other)
        ))),
    }
}

/// Serialize `value` to JSON and run [`extract_and_sanitize`] on it.
///
/// # Errors
///
/// Fails when serialization fails or `value` does not serialize to an object.
pub fn extract_and_sanitize_serializable<T: Serialize, K: AsRef<str>>(
    value: &T,
    keys: &[K],
    options: SanitizeOptions,
) -> Result<SanitizedFields> {
    let root = serde_json::to_value(value)?;
    extract_and_sanitize_value(&root, keys, options)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
