// Property-based checks for whitespace normalization and recursive traversal
use field_sanitizer::{
    extract_and_sanitize, is_normalized, normalize_whitespace, sanitize_value, SanitizeOptions,
};
use proptest::prelude::*;
use serde_json::{Map, Value};

fn text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[ a-c\t\n\u{00A0}\u{0085}\u{FEFF}]{0,24}").unwrap()
}

fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        text().prop_map(Value::String),
    ];
    leaf.prop_recursive(6, 64, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-d]{1,3}", inner), 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

/// Same shape check: arrays keep their length, objects keep keys in order
fn same_shape(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| same_shape(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.keys().eq(b.keys()) && a.values().zip(b.values()).all(|(x, y)| same_shape(x, y))
        }
        (Value::String(_), Value::String(_)) => true,
        (x, y) => x == y,
    }
}

fn all_strings_normalized(value: &Value) -> bool {
    match value {
        Value::String(s) => is_normalized(s),
        Value::Array(items) => items.iter().all(all_strings_normalized),
        Value::Object(entries) => entries.values().all(all_strings_normalized),
        _ => true,
    }
}

fn nesting(value: &Value) -> usize {
    match value {
        Value::Array(items) => 1 + items.iter().map(nesting).max().unwrap_or(0),
        Value::Object(entries) => 1 + entries.values().map(nesting).max().unwrap_or(0),
        _ => 0,
    }
}

proptest! {
    #[test]
    fn normalization_is_idempotent(s in text()) {
        let once = normalize_whitespace(&s);
        prop_assert_eq!(normalize_whitespace(&once), once.clone());
        prop_assert!(is_normalized(&once));
    }

    #[test]
    fn normalization_keeps_words(s in text()) {
        let words: Vec<&str> = s
            .split(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}')
            .filter(|w| !w.is_empty())
            .collect();
        prop_assert_eq!(normalize_whitespace(&s), words.join(" "));
    }

    #[test]
    fn traversal_preserves_shape(value in json_value()) {
        let sanitized = sanitize_value(&value, SanitizeOptions::default());
        prop_assert!(same_shape(&value, &sanitized));
    }

    #[test]
    fn shallow_values_fully_sanitized(value in json_value()) {
        // generated trees stay well under the default cap
        prop_assume!(nesting(&value) < 10);
        let sanitized = sanitize_value(&value, SanitizeOptions::default());
        prop_assert!(all_strings_normalized(&sanitized));
    }

    #[test]
    fn zero_depth_is_identity(value in json_value()) {
        prop_assert_eq!(sanitize_value(&value, SanitizeOptions::new(0)), value);
    }

    #[test]
    fn sanitizing_twice_changes_nothing(value in json_value(), depth in 0usize..8) {
        let options = SanitizeOptions::new(depth);
        let once = sanitize_value(&value, options);
        prop_assert_eq!(sanitize_value(&once, options), once);
    }

    #[test]
    fn result_keys_are_requested_and_present(
        entries in prop::collection::vec(("[a-e]", json_value()), 0..5),
        keys in prop::collection::vec("[a-g]", 0..6),
    ) {
        let source: Map<String, Value> = entries.into_iter().collect();
        let fields = extract_and_sanitize(&source, keys.as_slice(), SanitizeOptions::default());

        for key in fields.keys() {
            prop_assert!(keys.iter().any(|k| k == key));
            prop_assert!(source.contains_key(key));
        }
        for key in &keys {
            prop_assert_eq!(fields.get(key).is_some(), source.contains_key(key));
        }
    }
}
