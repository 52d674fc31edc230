//! Response envelopes shared by every endpoint of the REST API.

use serde::{Deserialize, Serialize};

use super::serde_helpers::null_as_default;

/// Envelope for single-record responses: `{status, message, data}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub message: String,
    pub data: T,
}

/// Envelope for responses that carry no payload (delete, logout).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub message: String,
}

/// Pagination block of a list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub page: usize,
    #[serde(default)]
    pub page_size: usize,
    #[serde(default)]
    pub total: usize,
    /// Only some endpoints report it; the client derives it otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<usize>,
}

/// Envelope for paginated list responses: `{status, message, data[], meta}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PaginatedResponse<T> {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub data: Vec<T>,
    pub meta: PageMeta,
}

/// Shape of the body the API sends back with 4xx/5xx statuses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Extracts a non-blank server message from a raw error body.
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginated_response_without_total_pages() {
        let json = r#"{
            "status": 200,
            "message": "ok",
            "data": [{"id": "a"}, {"id": "b"}],
            "meta": {"page": 1, "page_size": 20, "total": 47}
        }"#;
        let resp: PaginatedResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(resp.data.len(), 2);
        assert_eq!(resp.meta.total, 47);
        assert_eq!(resp.meta.total_pages, None);
    }

    #[test]
    fn test_paginated_response_with_null_data() {
        let json = r#"{"status": 200, "message": "", "data": null,
                       "meta": {"page": 1, "page_size": 20, "total": 0, "total_pages": 0}}"#;
        let resp: PaginatedResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert!(resp.data.is_empty());
        assert_eq!(resp.meta.total_pages, Some(0));
    }

    #[test]
    fn test_error_body_message() {
        assert_eq!(
            ErrorBody::message_from(r#"{"status":422,"message":"Name already used"}"#),
            Some("Name already used".to_string())
        );
        assert_eq!(ErrorBody::message_from(r#"{"message":"   "}"#), None);
        assert_eq!(ErrorBody::message_from("<html>502</html>"), None);
    }
}
