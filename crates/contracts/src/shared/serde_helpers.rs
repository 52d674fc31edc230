//! Deserialization helpers for the loosely typed backend payloads.

use serde::{Deserialize, Deserializer};

/// Treats an explicit `null` the same as a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Text(String),
    Int(i64),
    Float(f64),
}

/// Record ids arrive either as JSON strings (UUIDs) or as integers depending
/// on the endpoint; the client always handles them as strings.
pub fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Text(s) => s,
        IdRepr::Int(i) => i.to_string(),
        IdRepr::Float(f) => f.to_string(),
    })
}

/// Like [`id_as_string`] but keeps an absent or `null` id as `None`.
pub fn optional_id_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<IdRepr>::deserialize(deserializer)?.map(|id| match id {
        IdRepr::Text(s) => s,
        IdRepr::Int(i) => i.to_string(),
        IdRepr::Float(f) => f.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "id_as_string")]
        id: String,
        #[serde(default, deserialize_with = "null_as_default")]
        tags: Vec<String>,
    }

    #[test]
    fn test_id_accepts_numbers_and_strings() {
        let a: Probe = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        let b: Probe = serde_json::from_str(r#"{"id": "9f1c"}"#).unwrap();
        assert_eq!(a.id, "42");
        assert_eq!(b.id, "9f1c");
    }

    #[test]
    fn test_null_and_missing_collections_become_empty() {
        let a: Probe = serde_json::from_str(r#"{"id": 1, "tags": null}"#).unwrap();
        let b: Probe = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert!(a.tags.is_empty());
        assert!(b.tags.is_empty());
    }
}
