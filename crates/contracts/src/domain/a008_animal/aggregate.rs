use serde::{Deserialize, Serialize};

use crate::domain::common::ListRecord;
use crate::shared::serde_helpers::{id_as_string, optional_id_as_string};

// ============================================================================
// List rows
// ============================================================================

/// One row of `/animal/headers`: a species group with its head count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimalHeader {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default)]
    pub no: u32,
    #[serde(default)]
    pub family_name: String,
    #[serde(default)]
    pub species_name: String,
    #[serde(default)]
    pub local_name: Option<String>,
    #[serde(default)]
    pub latin_name: Option<String>,
    #[serde(default)]
    pub english_name: Option<String>,
    #[serde(default)]
    pub iucn: Option<String>,
    #[serde(default)]
    pub total: u32,
}

impl ListRecord for AnimalHeader {
    fn record_id(&self) -> &str {
        &self.id
    }
    fn display_name(&self) -> &str {
        &self.species_name
    }
}

/// Individual animal inside an expanded header row (`/animal/details/{id}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimalDetailItem {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default)]
    pub animal_name: String,
    #[serde(default)]
    pub animal_genders_name: Option<String>,
    #[serde(default)]
    pub identifier_code: Option<String>,
    #[serde(default)]
    pub animal_classification: Option<String>,
    #[serde(default)]
    pub animal_area: Option<String>,
    #[serde(default)]
    pub animal_entity: Option<String>,
    #[serde(default)]
    pub komunal_quantity: Option<u32>,
}

impl ListRecord for AnimalDetailItem {
    fn record_id(&self) -> &str {
        &self.id
    }
    fn display_name(&self) -> &str {
        &self.animal_name
    }
}

// ============================================================================
// Full detail (`/animal/detail/{id}`)
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimalHeaderData {
    #[serde(default, deserialize_with = "optional_id_as_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub family_id: Option<i64>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub species_id: Option<i64>,
    #[serde(default)]
    pub species_name: Option<String>,
    #[serde(default)]
    pub english_name: Option<String>,
    #[serde(default)]
    pub latin_name: Option<String>,
    #[serde(default)]
    pub local_name: Option<String>,
    #[serde(default)]
    pub iucn_status: Option<i64>,
    #[serde(default)]
    pub iucn_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimalDetailData {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default)]
    pub animal_name: String,
    #[serde(default)]
    pub identifier_code: Option<String>,
    #[serde(default)]
    pub marker_code: Option<String>,

    #[serde(default)]
    pub animal_classification_id: Option<i64>,
    #[serde(default)]
    pub animal_type_id: Option<i64>,
    #[serde(default)]
    pub animal_entity_id: Option<i64>,
    #[serde(default)]
    pub animal_status_id: Option<i64>,
    #[serde(default)]
    pub animal_genders_id: Option<i64>,
    #[serde(default)]
    pub animal_age_group_id: Option<i64>,
    #[serde(default)]
    pub animal_area_id: Option<i64>,
    #[serde(default)]
    pub weight_unit_id: Option<i64>,
    #[serde(default)]
    pub unit_id: Option<i64>,

    #[serde(default)]
    pub animal_classification: Option<String>,
    #[serde(default)]
    pub animal_type_name: Option<String>,
    #[serde(default)]
    pub animal_entity: Option<String>,
    #[serde(default)]
    pub animal_status_name: Option<String>,
    #[serde(default)]
    pub animal_genders_name: Option<String>,
    #[serde(default)]
    pub animal_age_group_name: Option<String>,
    #[serde(default)]
    pub animal_area: Option<String>,
    #[serde(default)]
    pub weight_unit_name: Option<String>,
    #[serde(default)]
    pub unit_name: Option<String>,

    #[serde(default)]
    pub weight_length: Option<f64>,
    #[serde(default)]
    pub body_length: Option<f64>,
    /// ISO-8601 timestamps
    #[serde(default)]
    pub hatching_date: Option<String>,
    #[serde(default)]
    pub arrival_date: Option<String>,

    #[serde(default, deserialize_with = "optional_id_as_string")]
    pub father_id: Option<String>,
    #[serde(default)]
    pub father_name: Option<String>,
    #[serde(default, deserialize_with = "optional_id_as_string")]
    pub mother_id: Option<String>,
    #[serde(default)]
    pub mother_name: Option<String>,

    #[serde(default)]
    pub feed_percentage: Option<f64>,
    #[serde(default)]
    pub komunal_quantity: Option<u32>,
    #[serde(default)]
    pub animal_image_url: Option<String>,
    #[serde(default)]
    pub document_url: Option<String>,
    #[serde(default)]
    pub noted: Option<String>,
    #[serde(default)]
    pub show_detail: Option<bool>,

    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimalCageData {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default)]
    pub code_number: String,
    #[serde(default)]
    pub container: Option<String>,
}

/// Detail payload; the API capitalises the section names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimalFullDetail {
    #[serde(rename = "Header", default)]
    pub header: AnimalHeaderData,
    #[serde(rename = "Details")]
    pub details: AnimalDetailData,
    /// Absent until the animal is assigned to a cage.
    #[serde(rename = "Cage", default)]
    pub cage: Option<AnimalCageData>,
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const DETAIL_JSON: &str = r#"{
        "Header": {
            "id": "h-1", "family_id": 3, "family_name": "Felidae",
            "species_id": 11, "species_name": "Panthera tigris",
            "english_name": "Sumatran tiger", "latin_name": "Panthera tigris sumatrae",
            "local_name": null, "iucn_status": 2, "iucn_name": "Critically Endangered"
        },
        "Details": {
            "id": "abc123", "animal_name": "Raja", "identifier_code": "TGR-01",
            "marker_code": null,
            "animal_classification_id": 1, "animal_type_id": null, "animal_entity_id": 1,
            "animal_status_id": 1, "animal_genders_id": 1, "animal_age_group_id": 2,
            "animal_area_id": null, "weight_unit_id": 1, "unit_id": 2,
            "weight_length": 120.5, "body_length": 210,
            "hatching_date": "2019-04-12T00:00:00Z", "arrival_date": null,
            "father_id": "8d4f6a0e-0000-4000-8000-000000000001", "father_name": "Bima",
            "mother_id": null,
            "feed_percentage": 4, "komunal_quantity": 1,
            "noted": null, "show_detail": true
        },
        "Cage": {"id": 7, "code_number": "K-07", "container": null}
    }"#;

    #[test]
    fn test_full_detail_sections() {
        let detail: AnimalFullDetail = serde_json::from_str(DETAIL_JSON).unwrap();
        assert_eq!(detail.header.family_id, Some(3));
        assert_eq!(detail.details.id, "abc123");
        assert_eq!(detail.details.animal_type_id, None);
        assert_eq!(detail.details.body_length, Some(210.0));
        assert_eq!(detail.cage.map(|c| c.id), Some("7".to_string()));
    }

    #[test]
    fn test_full_detail_without_cage() {
        let json = r#"{"Header": {}, "Details": {"id": "x", "animal_name": "Lone"}}"#;
        let detail: AnimalFullDetail = serde_json::from_str(json).unwrap();
        assert!(detail.cage.is_none());
        assert_eq!(detail.header.family_id, None);
    }

    #[test]
    fn test_header_row() {
        let json = r#"{"id": 5, "no": 1, "family_name": "Felidae", "species_name": "Panthera leo",
                       "local_name": "Singa", "latin_name": null, "english_name": "Lion",
                       "iucn": "VU", "total": 6}"#;
        let row: AnimalHeader = serde_json::from_str(json).unwrap();
        assert_eq!(row.record_id(), "5");
        assert_eq!(row.display_name(), "Panthera leo");
        assert_eq!(row.total, 6);
    }
}
