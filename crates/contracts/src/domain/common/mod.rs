//! Shapes shared by the master-data collections

use serde::{Deserialize, Serialize};

use crate::shared::serde_helpers::{id_as_string, null_as_default};
use crate::shared::validation::{FieldErrors, DESCRIPTION_RULES, NAME_RULES};

/// Form payload sent on create/update.
pub trait FormValues: Serialize + Clone + Default {
    /// Client-side validation; a non-empty error list blocks submission.
    fn validate(&self) -> Result<(), FieldErrors>;
}

/// A record shown in a list table.
pub trait ListRecord {
    fn record_id(&self) -> &str;
    /// Name shown in delete confirmations.
    fn display_name(&self) -> &str;
}

// ============================================================================
// Named records (cage model, cage type, unit area)
// ============================================================================

/// `{id, name, description}` record used by several collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedRecord {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl ListRecord for NamedRecord {
    fn record_id(&self) -> &str {
        &self.id
    }
    fn display_name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedForm {
    pub name: String,
    pub description: String,
}

impl NamedForm {
    pub fn from_record(record: &NamedRecord) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone(),
        }
    }
}

impl FormValues for NamedForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_name_and_description(&mut errors, "name", &self.name, &self.description);
        errors.into_result()
    }
}

/// Name needs 2+ characters, description 5+.
pub fn check_name_and_description(
    errors: &mut FieldErrors,
    name_field: &'static str,
    name: &str,
    description: &str,
) {
    errors.check(name_field, NAME_RULES.validate_string(name, "Name"));
    errors.check(
        "description",
        DESCRIPTION_RULES.validate_string(description, "Description"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_form_validation() {
        let form = NamedForm {
            name: "K".into(),
            description: "ok".into(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 2);

        let form = NamedForm {
            name: "Kandang A".into(),
            description: "Open air enclosure".into(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_named_record_tolerates_numeric_id_and_null_description() {
        let record: NamedRecord =
            serde_json::from_str(r#"{"id": 4, "name": "Aviary", "description": null}"#).unwrap();
        assert_eq!(record.id, "4");
        assert_eq!(record.description, "");
        assert_eq!(NamedForm::from_record(&record).name, "Aviary");
    }
}
