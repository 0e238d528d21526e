//! Common error handling utilities for FieldKit
//!
//! Every library crate in the workspace returns [`Result`] with the shared
//! [`FieldKitError`] enum so that the CLI can report failures uniformly.
//!
//! # Error Categories
//!
//! - **InvalidInput**: input of the wrong shape
//! - **Validation**: field values rejected by entity metadata rules
//! - **Serialization / Yaml**: malformed JSON or YAML documents
//! - **Config**: bad environment or file settings
//! - **Io**: file and stream failures
//!
//! # Example
//!
//! ```rust
//! use error_common::{FieldKitError, Result};
//!
//! fn require_role(role: &str) -> Result<()> {
//!     if role.is_empty() {
//!         return Err(FieldKitError::validation("role", "must not be empty"));
//!     }
//!     Ok(())
//! }
//!
//! let err = require_role("").unwrap_err();
//! assert_eq!(err.code(), "VALIDATION_1002");
//! ```

pub mod codes;
pub mod types;

pub use types::*;
