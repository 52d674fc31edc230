use std::sync::Arc;

use leptos::prelude::*;
use thaw::ConfigProvider;

use crate::config::AppConfig;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::ApiClient;
use crate::shared::notify::Notifier;
use crate::shared::query_cache::{MemoryQueryCache, SharedQueryCache};
use crate::system::access::PermissionMap;
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let permissions = Arc::new(PermissionMap::standard(config.access_policy));
    let cache: SharedQueryCache = Arc::new(MemoryQueryCache::new());

    provide_context(ApiClient::new(&config));
    provide_context(permissions);
    provide_context(cache);
    provide_context(Notifier::new());
    provide_context(AppGlobalContext::new());
    provide_context(config);

    view! {
        <ConfigProvider>
            <AuthProvider>
                <AppRoutes />
            </AuthProvider>
        </ConfigProvider>
    }
}
