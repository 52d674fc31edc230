use serde::{Deserialize, Serialize};

use crate::domain::common::{check_name_and_description, FormValues, ListRecord};
use crate::shared::serde_helpers::{id_as_string, null_as_default};
use crate::shared::validation::{FieldErrors, ValidationRules};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedCategoryRef {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default)]
    pub category_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitRef {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedType {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default)]
    pub feed_type_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub minimum_stock: f64,
    #[serde(default)]
    pub warning_stock: f64,
    #[serde(default)]
    pub waste_ratio: f64,
    #[serde(default)]
    pub feed_category_id: Option<i64>,
    #[serde(default)]
    pub unit_id: Option<i64>,
    /// Present on the detail endpoint only.
    #[serde(default)]
    pub feed_category: Option<FeedCategoryRef>,
    #[serde(default)]
    pub unit: Option<UnitRef>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl ListRecord for FeedType {
    fn record_id(&self) -> &str {
        &self.id
    }
    fn display_name(&self) -> &str {
        &self.feed_type_name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedTypeForm {
    pub feed_type_name: String,
    pub description: String,
    pub feed_category_id: Option<i64>,
    pub unit_id: Option<i64>,
    pub minimum_stock: f64,
    pub warning_stock: f64,
    pub waste_ratio: f64,
}

impl FeedTypeForm {
    pub fn from_record(record: &FeedType) -> Self {
        Self {
            feed_type_name: record.feed_type_name.clone(),
            description: record.description.clone(),
            feed_category_id: record.feed_category_id,
            unit_id: record.unit_id,
            minimum_stock: record.minimum_stock,
            warning_stock: record.warning_stock,
            waste_ratio: record.waste_ratio,
        }
    }
}

const NON_NEGATIVE: ValidationRules = ValidationRules::required().with_min(0.0);

impl FormValues for FeedTypeForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_name_and_description(
            &mut errors,
            "feed_type_name",
            &self.feed_type_name,
            &self.description,
        );
        let select = ValidationRules::required();
        errors.check(
            "feed_category_id",
            select.validate_selection(self.feed_category_id, "a feed category"),
        );
        errors.check("unit_id", select.validate_selection(self.unit_id, "a unit"));
        errors.check(
            "minimum_stock",
            NON_NEGATIVE.validate_number(self.minimum_stock, "Minimum stock"),
        );
        errors.check(
            "warning_stock",
            NON_NEGATIVE.validate_number(self.warning_stock, "Warning stock"),
        );
        errors.check(
            "waste_ratio",
            NON_NEGATIVE.validate_number(self.waste_ratio, "Waste ratio"),
        );
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> FeedTypeForm {
        FeedTypeForm {
            feed_type_name: "Chicken".into(),
            description: "Whole chicken carcass".into(),
            feed_category_id: Some(2),
            unit_id: Some(1),
            minimum_stock: 10.0,
            warning_stock: 15.0,
            waste_ratio: 0.0,
        }
    }

    #[test]
    fn test_feed_type_form_valid() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn test_feed_type_form_requires_selects_and_non_negative_stock() {
        let form = FeedTypeForm {
            feed_category_id: None,
            unit_id: Some(0),
            waste_ratio: -0.5,
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.get("feed_category_id").is_some());
        assert!(errors.get("unit_id").is_some());
        assert!(errors.get("waste_ratio").is_some());
        assert!(errors.get("minimum_stock").is_none());
    }

    #[test]
    fn test_feed_type_detail_with_nested_refs() {
        let json = r#"{"id":"9","feed_type_name":"Chicken","description":"x",
            "minimum_stock":10,"warning_stock":15,"waste_ratio":0.1,
            "feed_category_id":2,"unit_id":1,
            "feed_category":{"id":"2","category_name":"Meat"},
            "unit":{"id":1,"name":"kg"}}"#;
        let record: FeedType = serde_json::from_str(json).unwrap();
        assert_eq!(record.unit.as_ref().map(|u| u.id.as_str()), Some("1"));
        let form = FeedTypeForm::from_record(&record);
        assert_eq!(form.feed_category_id, Some(2));
        assert_eq!(form.waste_ratio, 0.1);
    }
}
