// Opportunity stakeholder: people involved in a deal and how to work with them
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};
use uuid::Uuid;

use error_common::{FieldKitError, Result};
use field_sanitizer::{extract_and_sanitize, extract_and_sanitize_value, SanitizeOptions};

use crate::metadata::{
    FieldMetadata, FieldMetadataType, ObjectMetadata, RelationMetadata, RelationOnDeleteAction,
    SelectOption,
};
use crate::standard_ids::object_standard_id;

pub const OBJECT_NAME: &str = "opportunityStakeholder";

/// Metadata for the opportunity stakeholder object
pub fn opportunity_stakeholder() -> ObjectMetadata {
    use FieldMetadataType as Kind;

    let field =
        |name: &str, kind: Kind, label: &str| FieldMetadata::new(OBJECT_NAME, name, kind, label);

    ObjectMetadata {
        standard_id: object_standard_id(OBJECT_NAME),
        name_singular: OBJECT_NAME.to_string(),
        name_plural: "opportunityStakeholders".to_string(),
        label_singular: "Opportunity stakeholder".to_string(),
        label_plural: "Opportunity stakeholders".to_string(),
        description: "A mapping of the people involved in a deal and how to work with them"
            .to_string(),
        icon: "IconUsersGroup".to_string(),
        label_identifier_field: "role".to_string(),
        fields: vec![
            field("opportunityId", Kind::Uuid, "Opportunity id"),
            field("personId", Kind::Uuid, "Person id").nullable(),
            field("role", Kind::Text, "Role")
                .with_description("How this stakeholder participates in the evaluation")
                .with_icon("IconHierarchy2"),
            field("influenceLevel", Kind::Select, "Influence")
                .with_description("Level of influence this person has on the deal")
                .with_icon("IconAdjustmentsBolt")
                .with_options(vec![
                    SelectOption::new("BLOCKER", "Blocker", 0, "red"),
                    SelectOption::new("NEUTRAL", "Neutral", 1, "yellow"),
                    SelectOption::new("CHAMPION", "Champion", 2, "green"),
                ])
                .with_default(Value::from(InfluenceLevel::default().as_str())),
            field("engagement", Kind::Select, "Engagement")
                .with_description("How engaged this person is with the sales motion")
                .with_icon("IconMessageChatbot")
                .with_options(vec![
                    SelectOption::new("LOW", "Low", 0, "gray"),
                    SelectOption::new("MEDIUM", "Medium", 1, "blue"),
                    SelectOption::new("HIGH", "High", 2, "green"),
                ])
                .with_default(Value::from(Engagement::default().as_str())),
            field("notes", Kind::Text, "Notes")
                .with_description("Context to align the team around how to work with this person")
                .with_icon("IconNotebook")
                .nullable(),
            field("position", Kind::Position, "Position")
                .with_description("Stakeholder record position")
                .with_icon("IconHierarchy2")
                .with_default(Value::from(0))
                .system(),
            field("createdBy", Kind::Actor, "Created by")
                .with_description("Creator of this stakeholder entry")
                .with_icon("IconCreativeCommonsSa")
                .ui_read_only(),
        ],
        relations: vec![
            RelationMetadata::many_to_one(OBJECT_NAME, "opportunity", "Opportunity", "opportunity")
                .with_description("Deal connected to this stakeholder entry")
                .with_icon("IconTargetArrow")
                .with_inverse("stakeholders")
                .on_delete(RelationOnDeleteAction::Cascade),
            RelationMetadata::many_to_one(OBJECT_NAME, "person", "Person", "person")
                .with_description("Contact represented in the deal room")
                .with_icon("IconUser")
                .with_inverse("opportunityStakeholders")
                .on_delete(RelationOnDeleteAction::SetNull)
                .nullable(),
        ],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InfluenceLevel {
    Blocker,
    #[default]
    Neutral,
    Champion,
}

impl InfluenceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blocker => "BLOCKER",
            Self::Neutral => "NEUTRAL",
            Self::Champion => "CHAMPION",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Engagement {
    Low,
    #[default]
    Medium,
    High,
}

impl Engagement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

/// Channel a record was created through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActorSource {
    Email,
    Calendar,
    Workflow,
    Api,
    Import,
    Manual,
    System,
    Webhook,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorMetadata {
    pub source: ActorSource,
    #[serde(default)]
    pub workspace_member_id: Option<Uuid>,
    pub name: String,
}

/// Create/update payload for an opportunity stakeholder record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityStakeholderInput {
    pub opportunity_id: Uuid,
    #[serde(default)]
    pub person_id: Option<Uuid>,
    pub role: String,
    #[serde(default)]
    pub influence_level: InfluenceLevel,
    #[serde(default)]
    pub engagement: Engagement,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub position: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<ActorMetadata>,
}

impl OpportunityStakeholderInput {
    /// Build a normalized input from a raw JSON payload.
    ///
    /// Only known fields are kept. Text (including the creator's name) is
    /// whitespace-normalized, missing or `null` select values fall back to
    /// their defaults and blank notes become `null`.
    ///
    /// # Errors
    ///
    /// [`FieldKitError::Validation`] for a blank role or an unknown select
    /// value, [`FieldKitError::Serialization`] when a field has the wrong type.
    pub fn from_json(payload: &Map<String, Value>) -> Result<Self> {
        Self::normalize(payload, &opportunity_stakeholder())
    }

    /// Same as [`Self::from_json`] for a root that may not be an object
    pub fn from_value(payload: &Value) -> Result<Self> {
        let object = opportunity_stakeholder();
        let keys = object.field_names();
        let fields =
            extract_and_sanitize_value(payload, keys.as_slice(), SanitizeOptions::default())?;
        Self::from_sanitized(fields.into_map(), &object)
    }

    pub fn normalize(payload: &Map<String, Value>, object: &ObjectMetadata) -> Result<Self> {
        let keys = object.field_names();
        let fields = extract_and_sanitize(payload, keys.as_slice(), SanitizeOptions::default());
        Self::from_sanitized(fields.into_map(), object)
    }

    fn from_sanitized(mut fields: Map<String, Value>, object: &ObjectMetadata) -> Result<Self> {
        for select in object.fields_of_type(FieldMetadataType::Select) {
            match fields.get(&select.name) {
                Some(Value::String(value)) => {
                    if let Err(err) = object.validate_select(&select.name, value) {
                        warn!(field = %select.name, value = %value, "Rejected select value");
                        return Err(err);
                    }
                }
                Some(Value::Null) => {
                    fields.remove(&select.name);
                }
                Some(other) => {
                    return Err(FieldKitError::validation(
                        &select.name,
                        format!("expected a string, got {other}"),
                    ));
                }
                None => {}
            }
        }

        let mut input: Self = serde_json::from_value(Value::Object(fields))?;

        if input.role.is_empty() {
            warn!(field = "role", "Rejected blank role");
            return Err(FieldKitError::validation("role", "must not be blank"));
        }

        if input.notes.as_deref() == Some("") {
            input.notes = None;
        }

        debug!(
            opportunity_id = %input.opportunity_id,
            influence_level = input.influence_level.as_str(),
            engagement = input.engagement.as_str(),
            "Normalized opportunity stakeholder input"
        );

        Ok(input)
    }
}
