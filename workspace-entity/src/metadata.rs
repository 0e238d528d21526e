// Declarative object, field and relation metadata
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use error_common::{FieldKitError, Result};

use crate::standard_ids::standard_id;

/// Storage/UI type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldMetadataType {
    Uuid,
    Text,
    Select,
    /// Manual sort order within a view
    Position,
    /// Who created a record (workspace member, API key, import, ...)
    Actor,
    Relation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationType {
    ManyToOne,
    OneToMany,
}

/// What happens to this record when the relation target is deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationOnDeleteAction {
    Cascade,
    SetNull,
    Restrict,
    NoAction,
}

/// One choice of a select field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub position: u32,
    pub color: String,
}

impl SelectOption {
    pub fn new(value: &str, label: &str, position: u32, color: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            position,
            color: color.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMetadata {
    pub standard_id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldMetadataType,
    pub label: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    pub default_value: Option<Value>,
    pub is_nullable: bool,
    pub is_system: bool,
    #[serde(rename = "isUIReadOnly")]
    pub is_ui_read_only: bool,
}

impl FieldMetadata {
    pub fn new(object: &str, name: &str, field_type: FieldMetadataType, label: &str) -> Self {
        Self {
            standard_id: standard_id(object, name),
            name: name.to_string(),
            field_type,
            label: label.to_string(),
            description: None,
            icon: None,
            options: Vec::new(),
            default_value: None,
            is_nullable: false,
            is_system: false,
            is_ui_read_only: false,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    pub fn with_default(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn nullable(mut self) -> Self {
        self.is_nullable = true;
        self
    }

    pub fn system(mut self) -> Self {
        self.is_system = true;
        self
    }

    pub fn ui_read_only(mut self) -> Self {
        self.is_ui_read_only = true;
        self
    }

    pub fn option(&self, value: &str) -> Option<&SelectOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationMetadata {
    pub standard_id: Uuid,
    pub name: String,
    pub relation_type: RelationType,
    pub label: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    /// Singular name of the object on the other side
    pub target: String,
    pub inverse_side_field_key: String,
    pub on_delete: RelationOnDeleteAction,
    pub is_nullable: bool,
    /// Field holding the target's id, for many-to-one relations
    pub join_column: Option<String>,
}

impl RelationMetadata {
    pub fn many_to_one(object: &str, name: &str, label: &str, target: &str) -> Self {
        Self {
            standard_id: standard_id(object, name),
            name: name.to_string(),
            relation_type: RelationType::ManyToOne,
            label: label.to_string(),
            description: None,
            icon: None,
            target: target.to_string(),
            inverse_side_field_key: String::new(),
            on_delete: RelationOnDeleteAction::NoAction,
            is_nullable: false,
            join_column: Some(format!("{name}Id")),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    pub fn with_inverse(mut self, field_key: &str) -> Self {
        self.inverse_side_field_key = field_key.to_string();
        self
    }

    pub fn on_delete(mut self, action: RelationOnDeleteAction) -> Self {
        self.on_delete = action;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.is_nullable = true;
        self
    }
}

/// Full description of one workspace object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMetadata {
    pub standard_id: Uuid,
    pub name_singular: String,
    pub name_plural: String,
    pub label_singular: String,
    pub label_plural: String,
    pub description: String,
    pub icon: String,
    /// Field shown as the record's title
    pub label_identifier_field: String,
    pub fields: Vec<FieldMetadata>,
    pub relations: Vec<RelationMetadata>,
}

impl ObjectMetadata {
    pub fn field(&self, name: &str) -> Option<&FieldMetadata> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn relation(&self, name: &str) -> Option<&RelationMetadata> {
        self.relations.iter().find(|r| r.name == name)
    }

    pub fn label_identifier(&self) -> Option<&FieldMetadata> {
        self.field(&self.label_identifier_field)
    }

    /// Scalar field names in declaration order
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn text_field_names(&self) -> Vec<&str> {
        self.fields_of_type(FieldMetadataType::Text)
            .map(|f| f.name.as_str())
            .collect()
    }

    pub fn fields_of_type(
        &self,
        field_type: FieldMetadataType,
    ) -> impl Iterator<Item = &FieldMetadata> {
        self.fields.iter().filter(move |f| f.field_type == field_type)
    }

    /// Check `value` against the options of select field `field`
    pub fn validate_select(&self, field: &str, value: &str) -> Result<()> {
        let metadata = self.field(field).ok_or_else(|| {
            FieldKitError::validation(field, format!("unknown field on {}", self.name_singular))
        })?;

        if metadata.field_type != FieldMetadataType::Select {
            return Err(FieldKitError::validation(field, "not a select field"));
        }

        if metadata.option(value).is_none() {
            let allowed: Vec<&str> = metadata.options.iter().map(|o| o.value.as_str()).collect();
            return Err(FieldKitError::validation(
                field,
                format!("`{value}` is not one of {}", allowed.join(", ")),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standard_ids::object_standard_id;
    use serde_json::json;

    fn sample() -> ObjectMetadata {
        ObjectMetadata {
            standard_id: object_standard_id("sample"),
            name_singular: "sample".into(),
            name_plural: "samples".into(),
            label_singular: "Sample".into(),
            label_plural: "Samples".into(),
            description: "Test object".into(),
            icon: "IconBox".into(),
            label_identifier_field: "title".into(),
            fields: vec![
                FieldMetadata::new("sample", "title", FieldMetadataType::Text, "Title"),
                FieldMetadata::new("sample", "size", FieldMetadataType::Select, "Size")
                    .with_options(vec![
                        SelectOption::new("S", "Small", 0, "gray"),
                        SelectOption::new("L", "Large", 1, "blue"),
                    ])
                    .with_default(json!("S")),
            ],
            relations: Vec::new(),
        }
    }

    #[test]
    fn test_lookups() {
        let object = sample();
        assert_eq!(object.field_names(), vec!["title", "size"]);
        assert_eq!(object.text_field_names(), vec!["title"]);
        assert_eq!(object.label_identifier().map(|f| f.label.as_str()), Some("Title"));
        assert!(object.field("missing").is_none());
    }

    #[test]
    fn test_validate_select() {
        let object = sample();
        assert!(object.validate_select("size", "L").is_ok());

        let err = object.validate_select("size", "XL").unwrap_err();
        assert_eq!(err.to_string(), "Validation error on `size`: `XL` is not one of S, L");

        assert!(object.validate_select("title", "S").is_err());
        assert!(object.validate_select("color", "S").is_err());
    }

    #[test]
    fn test_many_to_one_join_column() {
        let relation = RelationMetadata::many_to_one("sample", "owner", "Owner", "person");
        assert_eq!(relation.join_column.as_deref(), Some("ownerId"));
        assert_eq!(relation.relation_type, RelationType::ManyToOne);
    }

    #[test]
    fn test_field_serializes_camel_case() {
        let field =
            FieldMetadata::new("sample", "title", FieldMetadataType::Text, "Title").ui_read_only();
        let encoded = serde_json::to_value(&field).unwrap();
        assert_eq!(encoded["type"], json!("TEXT"));
        assert_eq!(encoded["isUIReadOnly"], json!(true));
        assert!(encoded.get("options").is_none());
    }
}
