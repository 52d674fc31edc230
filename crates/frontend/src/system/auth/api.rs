use contracts::shared::api::ApiMessage;
use contracts::system::auth::{LoginRequest, LoginResponse, ProfileEnvelope, UserProfile};

use crate::shared::api_utils::{ApiClient, ApiError, LOGIN_PATH};

pub const PROFILE_PATH: &str = "/user/profile";
pub const LOGOUT_PATH: &str = "/logout";

/// Exchanges credentials for a token. No user or role data comes back here.
pub async fn login(api: &ApiClient, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    api.post_json(LOGIN_PATH, request).await
}

/// The only source of role data.
pub async fn fetch_profile(api: &ApiClient) -> Result<UserProfile, ApiError> {
    let envelope: ProfileEnvelope = api.get(PROFILE_PATH, "").await?;
    Ok(envelope.into_profile())
}

pub async fn logout(api: &ApiClient) -> Result<(), ApiError> {
    let _: ApiMessage = api.post_json(LOGOUT_PATH, &serde_json::json!({})).await?;
    Ok(())
}
