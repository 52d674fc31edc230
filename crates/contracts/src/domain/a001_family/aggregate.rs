use serde::{Deserialize, Serialize};

use crate::domain::common::{check_name_and_description, FormValues, ListRecord};
use crate::shared::serde_helpers::{id_as_string, null_as_default};
use crate::shared::validation::FieldErrors;

/// Taxonomic family (Felidae, Psittacidae, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Family {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default)]
    pub family_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl ListRecord for Family {
    fn record_id(&self) -> &str {
        &self.id
    }
    fn display_name(&self) -> &str {
        &self.family_name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FamilyForm {
    pub family_name: String,
    pub description: String,
}

impl FamilyForm {
    pub fn from_record(record: &Family) -> Self {
        Self {
            family_name: record.family_name.clone(),
            description: record.description.clone(),
        }
    }
}

impl FormValues for FamilyForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_name_and_description(&mut errors, "family_name", &self.family_name, &self.description);
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_form_round_trip_from_record() {
        let json = r#"{"id":"f-1","family_name":"Felidae","description":"Cats, big and small",
                       "created_at":"2024-01-02T03:04:05Z","updated_at":null}"#;
        let family: Family = serde_json::from_str(json).unwrap();
        let form = FamilyForm::from_record(&family);
        assert_eq!(form.family_name, "Felidae");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_family_form_rejects_short_name() {
        let form = FamilyForm {
            family_name: "F".into(),
            description: "Cats, big and small".into(),
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.get("family_name").is_some());
        assert!(errors.get("description").is_none());
    }
}
