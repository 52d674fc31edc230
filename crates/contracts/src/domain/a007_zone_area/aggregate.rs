use serde::{Deserialize, Serialize};

use crate::domain::common::{check_name_and_description, FormValues, ListRecord};
use crate::shared::serde_helpers::{id_as_string, null_as_default, optional_id_as_string};
use crate::shared::validation::{FieldErrors, ValidationRules};

/// Zone inside a unit area.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneArea {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "optional_id_as_string")]
    pub unit_id: Option<String>,
    #[serde(default)]
    pub unit_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl ListRecord for ZoneArea {
    fn record_id(&self) -> &str {
        &self.id
    }
    fn display_name(&self) -> &str {
        &self.name
    }
}

/// `unit_id` travels as the select's string value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneAreaForm {
    pub name: String,
    pub description: String,
    pub unit_id: String,
}

impl ZoneAreaForm {
    pub fn from_record(record: &ZoneArea) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone(),
            unit_id: record.unit_id.clone().unwrap_or_default(),
        }
    }
}

impl FormValues for ZoneAreaForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_name_and_description(&mut errors, "name", &self.name, &self.description);
        let unit = self.unit_id.trim().parse::<i64>().ok();
        errors.check(
            "unit_id",
            ValidationRules::required().validate_selection(unit, "a unit area"),
        );
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_area_unit_id_as_number_or_string() {
        let a: ZoneArea =
            serde_json::from_str(r#"{"id":1,"name":"Savanna","description":"Open plains","unit_id":3}"#)
                .unwrap();
        let b: ZoneArea = serde_json::from_str(
            r#"{"id":"2","name":"Aviary","description":"Birds","unit_id":"3","unit_name":"Safari"}"#,
        )
        .unwrap();
        assert_eq!(a.unit_id.as_deref(), Some("3"));
        assert_eq!(b.unit_id, a.unit_id);
        assert_eq!(ZoneAreaForm::from_record(&b).unit_id, "3");
    }

    #[test]
    fn test_zone_area_form_requires_unit() {
        let form = ZoneAreaForm {
            name: "Savanna".into(),
            description: "Open plains".into(),
            unit_id: String::new(),
        };
        assert!(form.validate().unwrap_err().get("unit_id").is_some());

        let form = ZoneAreaForm {
            unit_id: "4".into(),
            ..form
        };
        assert!(form.validate().is_ok());
    }
}
