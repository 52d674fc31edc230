//! Animal create/edit form values.
//!
//! The API takes animals as `multipart/form-data`; [`AnimalFormValues::form_fields`]
//! yields the text parts, skipping unset and blank values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::aggregate::AnimalFullDetail;
use crate::domain::common::FormValues;
use crate::shared::validation::{FieldErrors, ValidationRules};

pub const DEFAULT_FEED_PERCENTAGE: f64 = 0.0;
pub const DEFAULT_KOMUNAL_QUANTITY: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalFormValues {
    pub animal_name: String,
    pub identifier_code: String,
    pub marker_code: String,

    pub family_id: Option<i64>,
    pub species_id: Option<i64>,

    pub english_name: String,
    pub latin_name: String,
    pub local_name: String,

    pub animal_classification_id: Option<i64>,
    pub animal_type_id: Option<i64>,
    pub animal_entity_id: Option<i64>,
    pub animal_status_id: Option<i64>,
    pub iucn_status: Option<i64>,

    pub animal_genders_id: Option<i64>,
    pub animal_age_group_id: Option<i64>,
    pub animal_area_id: Option<i64>,

    pub weight_length: Option<f64>,
    pub weight_unit_id: Option<i64>,
    pub body_length: Option<f64>,
    pub unit_id: Option<i64>,

    /// `YYYY-MM-DD`
    pub hatching_date: String,
    pub arrival_date: String,

    pub father_id: Option<String>,
    pub mother_id: Option<String>,

    pub feed_percentage: f64,
    pub komunal_quantity: u32,
    pub noted: String,
    pub show_detail: bool,
}

impl Default for AnimalFormValues {
    fn default() -> Self {
        Self {
            animal_name: String::new(),
            identifier_code: String::new(),
            marker_code: String::new(),
            family_id: None,
            species_id: None,
            english_name: String::new(),
            latin_name: String::new(),
            local_name: String::new(),
            animal_classification_id: None,
            animal_type_id: None,
            animal_entity_id: None,
            animal_status_id: None,
            iucn_status: None,
            animal_genders_id: None,
            animal_age_group_id: None,
            animal_area_id: None,
            weight_length: None,
            weight_unit_id: None,
            body_length: None,
            unit_id: None,
            hatching_date: String::new(),
            arrival_date: String::new(),
            father_id: None,
            mother_id: None,
            feed_percentage: DEFAULT_FEED_PERCENTAGE,
            komunal_quantity: DEFAULT_KOMUNAL_QUANTITY,
            noted: String::new(),
            show_detail: true,
        }
    }
}

/// Date part of an ISO timestamp (`2019-04-12T00:00:00Z` -> `2019-04-12`).
pub fn date_part(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

impl AnimalFormValues {
    /// Form defaults for edit mode. Unset selects stay unset; only text inputs
    /// turn `null` into an empty string.
    pub fn from_detail(detail: &AnimalFullDetail) -> Self {
        let h = &detail.header;
        let d = &detail.details;
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        let date = |v: &Option<String>| v.as_deref().map(date_part).unwrap_or_default().to_string();

        Self {
            animal_name: d.animal_name.clone(),
            identifier_code: text(&d.identifier_code),
            marker_code: text(&d.marker_code),
            family_id: h.family_id,
            species_id: h.species_id,
            english_name: text(&h.english_name),
            latin_name: text(&h.latin_name),
            local_name: text(&h.local_name),
            animal_classification_id: d.animal_classification_id,
            animal_type_id: d.animal_type_id,
            animal_entity_id: d.animal_entity_id,
            animal_status_id: d.animal_status_id,
            iucn_status: h.iucn_status,
            animal_genders_id: d.animal_genders_id,
            animal_age_group_id: d.animal_age_group_id,
            animal_area_id: d.animal_area_id,
            weight_length: d.weight_length,
            weight_unit_id: d.weight_unit_id,
            body_length: d.body_length,
            unit_id: d.unit_id,
            hatching_date: date(&d.hatching_date),
            arrival_date: date(&d.arrival_date),
            father_id: d.father_id.clone().filter(|id| !id.is_empty()),
            mother_id: d.mother_id.clone().filter(|id| !id.is_empty()),
            feed_percentage: d.feed_percentage.unwrap_or(DEFAULT_FEED_PERCENTAGE),
            komunal_quantity: d
                .komunal_quantity
                .filter(|q| *q >= 1)
                .unwrap_or(DEFAULT_KOMUNAL_QUANTITY),
            noted: text(&d.noted),
            show_detail: d.show_detail.unwrap_or(true),
        }
    }

    /// Multipart text parts in a stable order. `None` and blank strings are
    /// left out so the API never receives placeholders.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields: Vec<(&'static str, String)> = Vec::new();
        let mut text = |key: &'static str, value: &str| {
            let value = value.trim();
            if !value.is_empty() {
                fields.push((key, value.to_string()));
            }
        };

        text("animal_name", &self.animal_name);
        text("identifier_code", &self.identifier_code);
        text("marker_code", &self.marker_code);
        text("english_name", &self.english_name);
        text("latin_name", &self.latin_name);
        text("local_name", &self.local_name);
        text("hatching_date", &self.hatching_date);
        text("arrival_date", &self.arrival_date);
        text("father_id", self.father_id.as_deref().unwrap_or_default());
        text("mother_id", self.mother_id.as_deref().unwrap_or_default());
        text("noted", &self.noted);

        let ids = [
            ("family_id", self.family_id),
            ("species_id", self.species_id),
            ("animal_classification_id", self.animal_classification_id),
            ("animal_type_id", self.animal_type_id),
            ("animal_entity_id", self.animal_entity_id),
            ("animal_status_id", self.animal_status_id),
            ("iucn_status", self.iucn_status),
            ("animal_genders_id", self.animal_genders_id),
            ("animal_age_group_id", self.animal_age_group_id),
            ("animal_area_id", self.animal_area_id),
            ("weight_unit_id", self.weight_unit_id),
            ("unit_id", self.unit_id),
        ];
        for (key, value) in ids {
            if let Some(id) = value {
                fields.push((key, id.to_string()));
            }
        }

        for (key, value) in [("weight_length", self.weight_length), ("body_length", self.body_length)] {
            if let Some(v) = value {
                fields.push((key, v.to_string()));
            }
        }

        fields.push(("feed_percentage", self.feed_percentage.to_string()));
        fields.push(("komunal_quantity", self.komunal_quantity.to_string()));
        fields.push(("show_detail", self.show_detail.to_string()));
        fields
    }
}

fn check_date(errors: &mut FieldErrors, field: &'static str, value: &str, label: &str) {
    let value = value.trim();
    if !value.is_empty() && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        errors.push(field, format!("{} must be a date (YYYY-MM-DD)", label));
    }
}

impl FormValues for AnimalFormValues {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        let required = ValidationRules::required();

        errors.check(
            "animal_name",
            required.validate_string(&self.animal_name, "Animal name"),
        );
        errors.check(
            "family_id",
            required.validate_selection(self.family_id, "a family"),
        );
        errors.check(
            "species_id",
            required.validate_selection(self.species_id, "a species"),
        );
        errors.check(
            "feed_percentage",
            ValidationRules::required()
                .with_min(0.0)
                .with_max(100.0)
                .validate_number(self.feed_percentage, "Feed percentage"),
        );
        if self.komunal_quantity < 1 {
            errors.push("komunal_quantity", "Quantity must be at least 1");
        }
        let non_negative = ValidationRules::none().with_min(0.0);
        errors.check(
            "weight_length",
            non_negative.validate_optional_number(self.weight_length, "Weight"),
        );
        errors.check(
            "body_length",
            non_negative.validate_optional_number(self.body_length, "Body length"),
        );
        check_date(&mut errors, "hatching_date", &self.hatching_date, "Hatching date");
        check_date(&mut errors, "arrival_date", &self.arrival_date, "Arrival date");

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a008_animal::aggregate::tests::DETAIL_JSON;

    fn detail() -> AnimalFullDetail {
        serde_json::from_str(DETAIL_JSON).unwrap()
    }

    #[test]
    fn test_defaults() {
        let form = AnimalFormValues::default();
        assert_eq!(form.feed_percentage, 0.0);
        assert_eq!(form.komunal_quantity, 1);
        assert!(form.show_detail);
        assert_eq!(form.family_id, None);
    }

    #[test]
    fn test_hydration_matches_detail_exactly() {
        let detail = detail();
        let form = AnimalFormValues::from_detail(&detail);

        assert_eq!(form.animal_name, "Raja");
        assert_eq!(form.family_id, Some(3));
        assert_eq!(form.species_id, Some(11));
        assert_eq!(form.iucn_status, Some(2));
        // null selects are not coerced
        assert_eq!(form.animal_type_id, None);
        assert_eq!(form.animal_area_id, None);
        assert_eq!(form.mother_id, None);
        assert_eq!(
            form.father_id.as_deref(),
            Some("8d4f6a0e-0000-4000-8000-000000000001")
        );
        assert_eq!(form.weight_length, Some(120.5));
        assert_eq!(form.hatching_date, "2019-04-12");
        assert_eq!(form.arrival_date, "");
        assert_eq!(form.local_name, "");
        assert_eq!(form.feed_percentage, 4.0);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_form_fields_skip_unset_and_blank() {
        let form = AnimalFormValues {
            animal_name: "Raja".into(),
            family_id: Some(3),
            species_id: Some(11),
            identifier_code: "   ".into(),
            weight_length: Some(12.0),
            ..AnimalFormValues::default()
        };
        let fields = form.form_fields();
        let keys: Vec<&str> = fields.iter().map(|(k, _)| *k).collect();

        assert!(keys.contains(&"animal_name"));
        assert!(!keys.contains(&"identifier_code"));
        assert!(!keys.contains(&"father_id"));
        assert!(!keys.contains(&"animal_type_id"));
        assert!(fields.contains(&("weight_length", "12".to_string())));
        assert!(fields.contains(&("show_detail", "true".to_string())));
        assert!(fields.contains(&("komunal_quantity", "1".to_string())));
    }

    #[test]
    fn test_validation_rules() {
        let form = AnimalFormValues {
            feed_percentage: 120.0,
            komunal_quantity: 0,
            hatching_date: "12/04/2019".into(),
            ..AnimalFormValues::default()
        };
        let errors = form.validate().unwrap_err();
        for field in [
            "animal_name",
            "family_id",
            "species_id",
            "feed_percentage",
            "komunal_quantity",
            "hatching_date",
        ] {
            assert!(errors.get(field).is_some(), "missing error for {}", field);
        }
    }

    #[test]
    fn test_date_part() {
        assert_eq!(date_part("2020-01-31T10:00:00.000Z"), "2020-01-31");
        assert_eq!(date_part("2020-01-31"), "2020-01-31");
        assert_eq!(date_part(""), "");
    }
}
