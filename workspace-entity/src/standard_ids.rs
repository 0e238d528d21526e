// Deterministic standard ids for objects, fields and relations
use uuid::Uuid;

/// Name-based (v5) id for `<object>.<member>`.
///
/// The same pair always maps to the same id, so metadata built on different
/// machines can be matched up without a shared id table.
pub fn standard_id(object: &str, member: &str) -> Uuid {
    let name = format!("fieldkit.{object}.{member}");
    Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes())
}

/// Id of the object itself
pub fn object_standard_id(object: &str) -> Uuid {
    standard_id(object, "__object__")
}
