pub mod cli;
pub mod commands;
pub mod config;

pub use cli::*;
pub use commands::*;
pub use config::*;

/// Operations CLI for FieldKit
///
/// # Example Usage
///
/// ```bash
/// # Extract and clean two fields from a record
/// echo '{"role": "  Economic   buyer ", "notes": null}' | fieldkit sanitize --keys role,notes
///
/// # Nested values below the cap are left untouched
/// fieldkit sanitize --keys payload --max-depth 2 --input record.json --pretty
///
/// # Normalize an opportunity stakeholder payload
/// fieldkit stakeholder normalize --input stakeholder.json
///
/// # Inspect entity metadata
/// fieldkit entity describe --format yaml
/// ```
///
/// # Configuration
///
/// ```yaml
/// max_depth: 10
/// default_keys: [role, notes]
/// ```
///
/// `FIELDKIT_MAX_DEPTH` and `FIELDKIT_DEFAULT_KEYS` override the file; a `.env`
/// file in the working directory is loaded first.
pub const BINARY_NAME: &str = "fieldkit";
