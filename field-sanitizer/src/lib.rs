//! Recursive field sanitization for FieldKit
//!
//! Picks a set of top-level keys out of a JSON object and returns copies of
//! their values with every string whitespace-normalized: leading and trailing
//! whitespace trimmed, internal runs collapsed to a single space. Arrays and
//! nested objects are rebuilt structurally down to a depth cap; anything first
//! reached at or below the cap is copied untouched.
//!
//! # Value Handling
//!
//! - **Missing key**: left out of the result
//! - **`null`**: kept as `null`
//! - **String**: whitespace-normalized
//! - **Array / Object**: rebuilt, children processed one level deeper
//! - **Bool / Number**: copied
//!
//! # Example
//!
//! ```rust
//! use field_sanitizer::{extract_and_sanitize, FieldPresence, SanitizeOptions};
//! use serde_json::json;
//!
//! let record = json!({
//!     "role": "  Technical   champion ",
//!     "notes": null,
//!     "tags": ["  security ", "budget  owner"],
//! });
//!
//! let fields = extract_and_sanitize(
//!     record.as_object().unwrap(),
//!     &["role", "notes", "tags", "person"],
//!     SanitizeOptions::default(),
//! );
//!
//! assert_eq!(fields.get("role"), Some(&json!("Technical champion")));
//! assert_eq!(fields.field("person"), FieldPresence::Absent);
//! assert_eq!(
//!     fields.into_value(),
//!     json!({ "role": "Technical champion", "notes": null, "tags": ["security", "budget owner"] })
//! );
//! ```

pub mod config;
pub mod extract;
pub mod whitespace;

pub use config::*;
pub use extract::*;
pub use whitespace::*;
