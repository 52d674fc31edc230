use serde::{Deserialize, Serialize};

use crate::shared::serde_helpers::{null_as_default, optional_id_as_string};
use crate::shared::validation::{FieldErrors, ValidationRules};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if !looks_like_email(&self.email) {
            errors.push("email", "Invalid email format");
        }
        errors.check(
            "password",
            ValidationRules::required().validate_string(&self.password, "Password"),
        );
        errors.into_result()
    }
}

/// `local@domain.tld` with no whitespace.
fn looks_like_email(raw: &str) -> bool {
    let email = raw.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPayload {
    #[serde(default)]
    pub token: String,
}

/// Login only yields a credential token; roles come from the profile call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub data: Option<TokenPayload>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: u16,
}

impl LoginResponse {
    pub fn token(&self) -> Option<&str> {
        self.data
            .as_ref()
            .map(|d| d.token.trim())
            .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub role_code: String,
    #[serde(default)]
    pub role_name: String,
}

impl RoleAssignment {
    pub fn new(role_code: &str, role_name: &str) -> Self {
        Self {
            role_code: role_code.to_string(),
            role_name: role_name.to_string(),
        }
    }
}

/// Authenticated actor as returned by `GET /user/profile`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, deserialize_with = "optional_id_as_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub photo_profile: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role_user: Vec<RoleAssignment>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sub_role_user: Vec<RoleAssignment>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unit_ids: Vec<i64>,
}

impl UserProfile {
    /// First primary role code, used to pick the landing page.
    pub fn primary_role_code(&self) -> Option<&str> {
        self.role_user.first().map(|r| r.role_code.as_str())
    }
}

/// The profile endpoint answers either with the usual envelope or a bare user.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProfileEnvelope {
    Wrapped {
        #[serde(default)]
        status: u16,
        #[serde(default)]
        message: String,
        data: UserProfile,
    },
    Bare(UserProfile),
}

impl ProfileEnvelope {
    pub fn into_profile(self) -> UserProfile {
        match self {
            ProfileEnvelope::Wrapped { data, .. } => data,
            ProfileEnvelope::Bare(profile) => profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_validation() {
        let ok = LoginRequest {
            email: "keeper@zoo.id".into(),
            password: "secret".into(),
        };
        assert!(ok.validate().is_ok());

        let bad = LoginRequest {
            email: "keeper@zoo".into(),
            password: "  ".into(),
        };
        let errors = bad.validate().unwrap_err();
        assert!(errors.get("email").is_some());
        assert!(errors.get("password").is_some());
    }

    #[test]
    fn test_email_shapes() {
        assert!(looks_like_email("a@b.co"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a@.co"));
        assert!(!looks_like_email("a b@c.co"));
        assert!(!looks_like_email("a@b@c.co"));
    }

    #[test]
    fn test_login_response_token() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"data":{"token":"abc"},"message":"ok","status":200}"#)
                .unwrap();
        assert_eq!(resp.token(), Some("abc"));

        let empty: LoginResponse =
            serde_json::from_str(r#"{"data":null,"message":"ok","status":200}"#).unwrap();
        assert_eq!(empty.token(), None);
    }

    #[test]
    fn test_profile_wrapped_and_bare() {
        let wrapped = r#"{"status":200,"message":"ok","data":{
            "id": 12, "name":"Sari","email":"sari@zoo.id",
            "role_user":[{"id":1,"role_code":"Keeper","role_name":"Keeper","description":"","parent_id":null}],
            "sub_role_user": null
        }}"#;
        let profile = serde_json::from_str::<ProfileEnvelope>(wrapped)
            .unwrap()
            .into_profile();
        assert_eq!(profile.id.as_deref(), Some("12"));
        assert_eq!(profile.primary_role_code(), Some("Keeper"));
        assert!(profile.sub_role_user.is_empty());

        let bare = r#"{"name":"Budi","email":"budi@zoo.id","role_user":[]}"#;
        let profile = serde_json::from_str::<ProfileEnvelope>(bare)
            .unwrap()
            .into_profile();
        assert_eq!(profile.name, "Budi");
        assert_eq!(profile.id, None);
        assert_eq!(profile.primary_role_code(), None);
    }
}
