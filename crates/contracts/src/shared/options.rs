//! Option records feeding form selects.
//!
//! Every option endpoint returns one of a handful of record shapes. Each shape
//! knows its own value and label, and [`OptionRecord`] unifies them for generic
//! select rendering.

use serde::{Deserialize, Serialize};

use super::serde_helpers::id_as_string;

/// Accessors a select needs from an option record.
pub trait SelectOption {
    /// Value stored in the form field (ids rendered as text).
    fn value(&self) -> String;
    /// Human readable label.
    fn label(&self) -> &str;
}

/// Generic `{id, name}` option (age group, area, classification, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseOption {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyOption {
    pub id: i64,
    pub family_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesOption {
    pub id: i64,
    pub species_name: String,
    #[serde(default)]
    pub family_id: Option<i64>,
}

/// Language of a species name entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameLanguage {
    English,
    Latin,
    Local,
}

impl NameLanguage {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" => Some(Self::English),
            "latin" => Some(Self::Latin),
            "id" => Some(Self::Local),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesNameOption {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: String,
}

impl SpeciesNameOption {
    pub fn language(&self) -> Option<NameLanguage> {
        NameLanguage::from_code(&self.code)
    }
}

/// Identifier marker (ring, chip, tattoo, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerOption {
    pub id: i64,
    #[serde(default)]
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Accepts the API's Indonesian labels and their English counterparts.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "jantan" | "male" => Some(Self::Male),
            "betina" | "female" => Some(Self::Female),
            _ => None,
        }
    }
}

/// Candidate father/mother animal. Ids are UUID strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentOption {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub animal_name: String,
    #[serde(default)]
    pub identifier_code: Option<String>,
    #[serde(default)]
    pub gender: String,
}

impl ParentOption {
    pub fn sex(&self) -> Option<Sex> {
        Sex::parse(&self.gender)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitOption {
    pub id: i64,
    pub unit_name: String,
}

/// Unit area as returned by `/area-unit/all`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitAreaOption {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedCategoryOption {
    pub id: i64,
    pub category_name: String,
}

impl SelectOption for BaseOption {
    fn value(&self) -> String {
        self.id.to_string()
    }
    fn label(&self) -> &str {
        &self.name
    }
}

impl SelectOption for FamilyOption {
    fn value(&self) -> String {
        self.id.to_string()
    }
    fn label(&self) -> &str {
        &self.family_name
    }
}

impl SelectOption for SpeciesOption {
    fn value(&self) -> String {
        self.id.to_string()
    }
    fn label(&self) -> &str {
        &self.species_name
    }
}

impl SelectOption for SpeciesNameOption {
    fn value(&self) -> String {
        self.id.to_string()
    }
    fn label(&self) -> &str {
        &self.name
    }
}

impl SelectOption for MarkerOption {
    fn value(&self) -> String {
        self.id.to_string()
    }
    fn label(&self) -> &str {
        &self.name
    }
}

impl SelectOption for ParentOption {
    fn value(&self) -> String {
        self.id.clone()
    }
    fn label(&self) -> &str {
        &self.animal_name
    }
}

impl SelectOption for UnitOption {
    fn value(&self) -> String {
        self.id.to_string()
    }
    fn label(&self) -> &str {
        &self.unit_name
    }
}

impl SelectOption for UnitAreaOption {
    fn value(&self) -> String {
        self.id.to_string()
    }
    fn label(&self) -> &str {
        &self.name
    }
}

impl SelectOption for FeedCategoryOption {
    fn value(&self) -> String {
        self.id.to_string()
    }
    fn label(&self) -> &str {
        &self.category_name
    }
}

/// Every option shape the forms can render.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionRecord {
    Base(BaseOption),
    Family(FamilyOption),
    Species(SpeciesOption),
    SpeciesName(SpeciesNameOption),
    Marker(MarkerOption),
    Parent(ParentOption),
    Unit(UnitOption),
    UnitArea(UnitAreaOption),
    FeedCategory(FeedCategoryOption),
}

impl OptionRecord {
    fn inner(&self) -> &dyn SelectOption {
        match self {
            OptionRecord::Base(o) => o,
            OptionRecord::Family(o) => o,
            OptionRecord::Species(o) => o,
            OptionRecord::SpeciesName(o) => o,
            OptionRecord::Marker(o) => o,
            OptionRecord::Parent(o) => o,
            OptionRecord::Unit(o) => o,
            OptionRecord::UnitArea(o) => o,
            OptionRecord::FeedCategory(o) => o,
        }
    }
}

impl SelectOption for OptionRecord {
    fn value(&self) -> String {
        self.inner().value()
    }
    fn label(&self) -> &str {
        self.inner().label()
    }
}

macro_rules! option_record_from {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for OptionRecord {
                fn from(value: $ty) -> Self {
                    OptionRecord::$variant(value)
                }
            }
        )*
    };
}

option_record_from! {
    Base => BaseOption,
    Family => FamilyOption,
    Species => SpeciesOption,
    SpeciesName => SpeciesNameOption,
    Marker => MarkerOption,
    Parent => ParentOption,
    Unit => UnitOption,
    UnitArea => UnitAreaOption,
    FeedCategory => FeedCategoryOption,
}

/// Converts a typed option list into select records.
pub fn to_records<T: Into<OptionRecord>>(items: Vec<T>) -> Vec<OptionRecord> {
    items.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_come_from_the_variant_field() {
        let records = vec![
            OptionRecord::from(FamilyOption {
                id: 1,
                family_name: "Felidae".into(),
            }),
            OptionRecord::from(SpeciesOption {
                id: 7,
                species_name: "Panthera tigris".into(),
                family_id: Some(1),
            }),
            OptionRecord::from(UnitOption {
                id: 2,
                unit_name: "kg".into(),
            }),
        ];
        let labels: Vec<&str> = records.iter().map(|r| r.label()).collect();
        assert_eq!(labels, vec!["Felidae", "Panthera tigris", "kg"]);
        assert_eq!(records[1].value(), "7");
    }

    #[test]
    fn test_parent_option_accepts_uuid_and_sex() {
        let json = r#"[
            {"id": "2f9a0c5e-1111-4c1a-9f00-000000000001", "animal_name": "Raja", "identifier_code": "T-01", "gender": "Jantan"},
            {"id": "2f9a0c5e-1111-4c1a-9f00-000000000002", "animal_name": "Ratu", "identifier_code": null, "gender": "BETINA"},
            {"id": 3, "animal_name": "Unknown", "gender": ""}
        ]"#;
        let parents: Vec<ParentOption> = serde_json::from_str(json).unwrap();
        assert_eq!(parents[0].sex(), Some(Sex::Male));
        assert_eq!(parents[1].sex(), Some(Sex::Female));
        assert_eq!(parents[2].sex(), None);
        assert_eq!(parents[2].value(), "3");
    }

    #[test]
    fn test_species_name_language() {
        let name = |code: &str| SpeciesNameOption {
            id: 1,
            name: "x".into(),
            code: code.into(),
        };
        assert_eq!(name("en").language(), Some(NameLanguage::English));
        assert_eq!(name("Latin").language(), Some(NameLanguage::Latin));
        assert_eq!(name("id").language(), Some(NameLanguage::Local));
        assert_eq!(name("fr").language(), None);
    }
}
