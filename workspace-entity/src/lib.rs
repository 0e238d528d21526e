//! Workspace entity metadata for FieldKit
//!
//! Describes CRM workspace objects declaratively (fields, relations, select
//! options, cascade rules, UI labels) and normalizes record payloads against
//! that description. Syncing the metadata into a database or ORM happens
//! elsewhere; this crate only holds the data and the input rules.
//!
//! # Example
//!
//! ```rust
//! use workspace_entity::{opportunity_stakeholder, InfluenceLevel, OpportunityStakeholderInput};
//! use serde_json::json;
//!
//! let object = opportunity_stakeholder();
//! assert_eq!(object.label_identifier_field, "role");
//!
//! let payload = json!({
//!     "opportunityId": "0c6f58a4-7b7e-4a8e-9d55-3f1f4f6f2a10",
//!     "role": "  Economic   buyer ",
//!     "influenceLevel": "CHAMPION",
//! });
//! let input = OpportunityStakeholderInput::from_value(&payload).unwrap();
//! assert_eq!(input.role, "Economic buyer");
//! assert_eq!(input.influence_level, InfluenceLevel::Champion);
//! ```

pub mod metadata;
pub mod opportunity_stakeholder;
pub mod standard_ids;

pub use metadata::*;
pub use opportunity_stakeholder::*;
pub use standard_ids::*;
