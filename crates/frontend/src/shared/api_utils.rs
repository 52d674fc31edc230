//! HTTP plumbing for the REST API.
//!
//! [`ApiClient`] wraps `gloo-net` requests with the base URL, the bearer token
//! and error classification. A 401 on any call other than the login call is a
//! session expiry: the stored token is dropped and the `session_expired`
//! signal fires so the auth layer can return to the login screen.

use contracts::shared::api::ErrorBody;
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config::AppConfig;
use crate::system::auth::storage;

pub const LOGIN_PATH: &str = "/login";
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 401 from the login call itself.
    #[error("{0}")]
    Unauthorized(String),
    /// 401 from any authenticated call.
    #[error("session expired")]
    SessionExpired,
    #[error("server error {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Server { status: u16, message: Option<String> },
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("failed to encode request: {0}")]
    Serialize(String),
}

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password.";

impl ApiError {
    /// Classifies a non-2xx response.
    pub fn from_status(status: u16, body: &str, request_path: &str) -> Self {
        let message = ErrorBody::message_from(body);
        if status == 401 {
            return if is_login_path(request_path) {
                ApiError::Unauthorized(
                    message.unwrap_or_else(|| INVALID_CREDENTIALS_MESSAGE.to_string()),
                )
            } else {
                ApiError::SessionExpired
            };
        }
        ApiError::Server { status, message }
    }

    /// Server-provided message when present, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Unauthorized(message) => message.clone(),
            ApiError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::SessionExpired => "Your session has expired. Please sign in again.".to_string(),
            _ => fallback.to_string(),
        }
    }
}

fn is_login_path(path: &str) -> bool {
    let path = path.split('?').next().unwrap_or(path).trim_end_matches('/');
    path == LOGIN_PATH || path.ends_with(LOGIN_PATH)
}

/// Shared API handle, provided through context.
#[derive(Clone, Copy)]
pub struct ApiClient {
    base_url: StoredValue<String>,
    /// Bumped on every session expiry.
    pub session_expired: RwSignal<u32>,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: StoredValue::new(config.api_base_url.clone()),
            session_expired: RwSignal::new(0),
        }
    }

    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.get_value();
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    fn authorize(builder: RequestBuilder) -> RequestBuilder {
        match storage::get_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn finish<T: DeserializeOwned>(
        &self,
        path: &str,
        sent: Result<Response, gloo_net::Error>,
    ) -> Result<T, ApiError> {
        let response = sent.map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let error = ApiError::from_status(status, &body, path);
            if error == ApiError::SessionExpired {
                log::warn!("session expired on {}", path);
                storage::clear_token();
                self.session_expired.update(|n| *n = n.wrapping_add(1));
            }
            return Err(error);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `GET path?query`
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &str) -> Result<T, ApiError> {
        let url = if query.is_empty() {
            self.url(path)
        } else {
            format!("{}?{}", self.url(path), query)
        };
        let sent = Self::authorize(Request::get(&url)).send().await;
        self.finish(path, sent).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = Self::authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Serialize(e.to_string()))?;
        self.finish(path, request.send().await).await
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = Self::authorize(Request::put(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Serialize(e.to_string()))?;
        self.finish(path, request.send().await).await
    }

    /// Sends text parts as `multipart/form-data`; the browser sets the boundary.
    pub async fn send_form<T: DeserializeOwned>(
        &self,
        method: gloo_net::http::Method,
        path: &str,
        fields: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|e| ApiError::Serialize(format!("{:?}", e)))?;
        for (key, value) in fields {
            form.append_with_str(key, value)
                .map_err(|e| ApiError::Serialize(format!("{:?}", e)))?;
        }
        let request = Self::authorize(RequestBuilder::new(&self.url(path)).method(method))
            .body(form)
            .map_err(|e| ApiError::Serialize(e.to_string()))?;
        self.finish(path, request.send().await).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let sent = Self::authorize(Request::delete(&self.url(path))).send().await;
        self.finish(path, sent).await
    }
}

/// Hook to access the API client
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_401_on_login_is_invalid_credentials() {
        assert_eq!(
            ApiError::from_status(401, "", "/login"),
            ApiError::Unauthorized(INVALID_CREDENTIALS_MESSAGE.to_string())
        );
        assert_eq!(
            ApiError::from_status(401, r#"{"message":"Akun dinonaktifkan"}"#, "/login"),
            ApiError::Unauthorized("Akun dinonaktifkan".to_string())
        );
    }

    #[test]
    fn test_401_elsewhere_is_session_expiry() {
        assert_eq!(
            ApiError::from_status(401, r#"{"message":"token expired"}"#, "/animal/headers"),
            ApiError::SessionExpired
        );
        assert_eq!(ApiError::from_status(401, "", "/user/profile"), ApiError::SessionExpired);
    }

    #[test]
    fn test_server_message_is_surfaced_verbatim() {
        let error = ApiError::from_status(422, r#"{"status":422,"message":"Name already exists"}"#, "/feed/categories");
        assert_eq!(error.user_message("fallback"), "Name already exists");

        let error = ApiError::from_status(502, "<html>Bad gateway</html>", "/feed/categories");
        assert_eq!(
            error,
            ApiError::Server {
                status: 502,
                message: None
            }
        );
        assert_eq!(error.user_message(GENERIC_ERROR_MESSAGE), GENERIC_ERROR_MESSAGE);
        assert_eq!(
            ApiError::Network("offline".into()).user_message("fallback"),
            "fallback"
        );
    }

    #[test]
    fn test_login_path_detection() {
        assert!(is_login_path("/login"));
        assert!(is_login_path("/login/"));
        assert!(is_login_path("/login?next=/animal"));
        assert!(!is_login_path("/logout"));
        assert!(!is_login_path("/login-history"));
    }
}
