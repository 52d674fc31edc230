use contracts::shared::validation::FieldErrors;
use contracts::system::auth::{LoginRequest, UserProfile};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thiserror::Error;

use super::{api, storage};
use crate::shared::api_utils::{use_api, ApiClient, ApiError, GENERIC_ERROR_MESSAGE};
use crate::shared::notify::use_notifier;
use crate::system::access::permissions::{default_landing_page, DEFAULT_LANDING_PAGE};
use crate::system::access::Permissions;

pub const MISSING_TOKEN_MESSAGE: &str = "Login succeeded but the server returned no token";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
    /// Signed in, but the profile could not be loaded.
    pub degraded: bool,
    /// A stored token is being checked against the profile endpoint.
    pub restoring: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoginError {
    #[error("{0}")]
    Validation(FieldErrors),
    #[error("{}", MISSING_TOKEN_MESSAGE)]
    MissingToken,
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl LoginError {
    pub fn user_message(&self) -> String {
        match self {
            LoginError::Api(e) => e.user_message(GENERIC_ERROR_MESSAGE),
            other => other.to_string(),
        }
    }
}

/// Session for a fresh token. A failed profile fetch still signs the user
/// in, flagged as degraded and sent to the default landing page.
pub fn establish_session(
    token: String,
    profile: Result<UserProfile, ApiError>,
) -> (AuthState, &'static str) {
    match profile {
        Ok(user) => {
            let landing = default_landing_page(user.primary_role_code().unwrap_or_default());
            log::info!("signed in as {}", user.email);
            let state = AuthState {
                token: Some(token),
                user: Some(user),
                degraded: false,
                restoring: false,
            };
            (state, landing)
        }
        Err(e) => {
            log::warn!("profile fetch failed after login, continuing degraded: {}", e);
            let state = AuthState {
                token: Some(token),
                user: None,
                degraded: true,
                restoring: false,
            };
            (state, DEFAULT_LANDING_PAGE)
        }
    }
}

/// Full login: validate, obtain a token, persist it, load the profile.
pub async fn do_login(
    api: &ApiClient,
    request: LoginRequest,
) -> Result<(AuthState, &'static str), LoginError> {
    request.validate().map_err(LoginError::Validation)?;

    let response = api::login(api, &request).await.map_err(|e| {
        log::warn!("login failed: {}", e);
        e
    })?;
    let token = response
        .token()
        .map(str::to_string)
        .ok_or(LoginError::MissingToken)?;
    storage::save_token(&token);

    let profile = api::fetch_profile(api).await;
    Ok(establish_session(token, profile))
}

/// Best-effort server logout, then local teardown.
pub async fn do_logout(api: &ApiClient, set_auth_state: WriteSignal<AuthState>) {
    if let Err(e) = api::logout(api).await {
        log::warn!("logout call failed: {}", e);
    }
    storage::clear_token();
    set_auth_state.set(AuthState::default());
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let api = use_api();
    let notifier = use_notifier();
    let stored = storage::get_token();
    let (auth_state, set_auth_state) = signal(AuthState {
        token: stored.clone(),
        restoring: stored.is_some(),
        ..AuthState::default()
    });

    // Restore the session from localStorage
    if stored.is_some() {
        spawn_local(async move {
            match api::fetch_profile(&api).await {
                Ok(user) => set_auth_state.update(|s| {
                    s.user = Some(user);
                    s.restoring = false;
                }),
                Err(ApiError::SessionExpired) => set_auth_state.set(AuthState::default()),
                Err(e) => {
                    log::warn!("profile fetch failed on restore: {}", e);
                    set_auth_state.update(|s| {
                        s.degraded = true;
                        s.restoring = false;
                    });
                }
            }
        });
    }

    // Any authenticated 401 ends the session
    let expired = api.session_expired;
    Effect::new(move |_| {
        if expired.get() > 0 && auth_state.get_untracked().is_authenticated() {
            set_auth_state.set(AuthState::default());
            notifier.error("Your session has expired. Please sign in again.");
        }
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Permissions of the signed-in user, recomputed when the profile changes.
pub fn use_permissions() -> Memo<Permissions> {
    let (auth_state, _) = use_auth();
    Memo::new(move |_| Permissions::for_user(auth_state.with(|s| s.user.clone())))
}
