use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::use_app_context;
use crate::layout::top_header::role_chips;
use crate::shared::components::page_header::PageHeader;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::{use_auth, use_permissions};

/// Landing page after sign-in.
#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app_context();
    let (auth_state, _) = use_auth();
    let permissions = use_permissions();

    let greeting = move || {
        auth_state.with(|s| match &s.user {
            Some(user) => format!("Welcome back, {}", user.name),
            None => "Welcome back".to_string(),
        })
    };

    view! {
        <PageFrame page_id="dashboard--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Dashboard" subtitle=Signal::derive(move || ctx.unit_name().to_string()) />

            <div class="page__content">
                <div class="dashboard-card">
                    <h2 class="dashboard-card__title">{greeting}</h2>
                    <Show
                        when=move || auth_state.with(|s| !s.degraded)
                        fallback=|| view! {
                            <p class="dashboard-card__text">
                                "Your profile could not be loaded. Some menus may be hidden."
                            </p>
                        }
                    >
                        <p class="dashboard-card__text">
                            {move || auth_state.with(|s| s.user.as_ref().map(|u| u.email.clone()).unwrap_or_default())}
                        </p>
                    </Show>
                    <div class="dashboard-card__roles">
                        {move || permissions.with(role_chips).into_iter().map(|label| view! {
                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>{label}</Badge>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
