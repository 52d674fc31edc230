use serde::{Deserialize, Serialize};

use crate::domain::common::{check_name_and_description, FormValues, ListRecord};
use crate::shared::serde_helpers::{id_as_string, null_as_default};
use crate::shared::validation::FieldErrors;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedCategory {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default)]
    pub category_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl ListRecord for FeedCategory {
    fn record_id(&self) -> &str {
        &self.id
    }
    fn display_name(&self) -> &str {
        &self.category_name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedCategoryForm {
    pub category_name: String,
    pub description: String,
}

impl FeedCategoryForm {
    pub fn from_record(record: &FeedCategory) -> Self {
        Self {
            category_name: record.category_name.clone(),
            description: record.description.clone(),
        }
    }
}

impl FormValues for FeedCategoryForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_name_and_description(
            &mut errors,
            "category_name",
            &self.category_name,
            &self.description,
        );
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_category_form_serializes_wire_names() {
        let form = FeedCategoryForm {
            category_name: "Hay".into(),
            description: "Dried grasses".into(),
        };
        assert!(form.validate().is_ok());
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["category_name"], "Hay");
        assert_eq!(json["description"], "Dried grasses");
    }
}
