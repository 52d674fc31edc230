//! Application configuration.
//!
//! The browser has no process environment, so values are baked in at build
//! time (`ZOO_API_URL=https://api.example.org trunk build`). Loading fails
//! fast: a missing or malformed API URL aborts startup.

use http::Uri;
use leptos::prelude::*;
use thiserror::Error;

use crate::system::access::AccessPolicy;

pub const DEFAULT_PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("ZOO_API_URL is not set")]
    MissingApiUrl,
    #[error("ZOO_API_URL is empty")]
    EmptyApiUrl,
    #[error("ZOO_API_URL '{url}' is not a valid http(s) URL: {reason}")]
    MalformedApiUrl { url: String, reason: String },
    #[error("ZOO_MENU_ACCESS_POLICY must be 'open' or 'closed', got '{0}'")]
    InvalidAccessPolicy(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL without trailing slash.
    pub api_base_url: String,
    pub access_policy: AccessPolicy,
    pub page_size: usize,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("ZOO_API_URL"),
            option_env!("ZOO_MENU_ACCESS_POLICY"),
        )
    }

    pub fn from_values(
        api_url: Option<&str>,
        access_policy: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let api_base_url = validate_api_url(api_url.ok_or(ConfigError::MissingApiUrl)?)?;

        let access_policy = match access_policy.map(str::trim).filter(|p| !p.is_empty()) {
            None => AccessPolicy::default(),
            Some(raw) => AccessPolicy::parse(raw)
                .ok_or_else(|| ConfigError::InvalidAccessPolicy(raw.to_string()))?,
        };

        Ok(Self {
            api_base_url,
            access_policy,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }
}

fn validate_api_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyApiUrl);
    }

    let malformed = |reason: &str| ConfigError::MalformedApiUrl {
        url: raw.to_string(),
        reason: reason.to_string(),
    };

    let uri: Uri = trimmed.parse().map_err(|e: http::uri::InvalidUri| malformed(&e.to_string()))?;
    match uri.scheme_str() {
        Some("http") | Some("https") => {}
        Some(_) => return Err(malformed("scheme must be http or https")),
        None => return Err(malformed("missing scheme")),
    }
    match uri.authority() {
        Some(authority) if !authority.host().is_empty() => {}
        _ => return Err(malformed("missing host")),
    }
    if uri.query().is_some() {
        return Err(malformed("query strings are not allowed"));
    }

    Ok(trimmed.to_string())
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not found in component tree")
}
