//! Top bar: sidebar toggle, unit switcher, breadcrumbs, the signed-in user
//! with role chips, and logout.

use crate::layout::global_context::{AppGlobalContext, ZOO_UNITS};
use crate::layout::left::menu::{breadcrumbs, navigation};
use crate::shared::api_utils::use_api;
use crate::shared::icons::icon;
use crate::system::access::{Permissions, Role};
use crate::system::auth::context::{do_logout, use_auth, use_permissions};
use crate::system::auth::guard::LOGIN_ROUTE;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Chip labels for every effective role, in first-seen order.
pub fn role_chips(permissions: &Permissions) -> Vec<String> {
    permissions
        .roles()
        .iter()
        .map(|code| {
            Role::from_code(code)
                .map(|r| r.label().to_string())
                .unwrap_or_else(|| code.to_string())
        })
        .collect()
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let api = use_api();
    let (auth_state, set_auth_state) = use_auth();
    let permissions = use_permissions();

    let unit_value = RwSignal::new(ctx.unit_name().to_string());
    Effect::new(move |_| {
        let selected = unit_value.get();
        if let Some(index) = ZOO_UNITS.iter().position(|u| *u == selected) {
            ctx.unit.set(index);
        }
    });

    let trail = Memo::new(move |_| ctx.path.with(|p| breadcrumbs(&navigation(), p)));

    let logout = move |_| {
        spawn_local(async move {
            do_logout(&api, set_auth_state).await;
            ctx.navigate(LOGIN_ROUTE);
        });
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button class="top-header__icon-btn" on:click=move |_| ctx.toggle_left() title="Toggle navigation">
                    {icon("menu")}
                </button>
                <div class="top-header__unit">
                    {icon("building")}
                    <Select value=unit_value size=SelectSize::Small>
                        {ZOO_UNITS.iter().map(|unit| view! { <option value=*unit>{*unit}</option> }).collect_view()}
                    </Select>
                </div>
                <nav class="top-header__breadcrumbs">
                    {move || {
                        let items = trail.get();
                        let last = items.len().saturating_sub(1);
                        items.into_iter().enumerate().map(|(i, title)| view! {
                            <span class="breadcrumb" class:breadcrumb--current=i == last>{title}</span>
                            {(i != last).then(|| view! { <span class="breadcrumb__sep">"/"</span> })}
                        }).collect_view()
                    }}
                </nav>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    <span class="top-header__user-name">
                        {move || auth_state.with(|s| s.user.as_ref().map(|u| u.name.clone()))
                            .unwrap_or_else(|| "Guest".to_string())}
                    </span>
                    <Show when=move || auth_state.with(|s| s.degraded)>
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>"Profile unavailable"</Badge>
                    </Show>
                    {move || permissions.with(role_chips).into_iter().map(|label| view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>{label}</Badge>
                    }).collect_view()}
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::{RoleAssignment, UserProfile};

    #[test]
    fn test_role_chips_keep_first_seen_order() {
        let user = UserProfile {
            role_user: vec![RoleAssignment::new("KEEPER", "Keeper")],
            sub_role_user: vec![
                RoleAssignment::new("kesehatan", "Vet"),
                RoleAssignment::new("keeper", "Keeper"),
                RoleAssignment::new("guest-lecturer", "Guest"),
            ],
            ..UserProfile::default()
        };
        let chips = role_chips(&Permissions::for_user(Some(user)));
        assert_eq!(chips.len(), 3);
        assert_eq!(chips[0], Role::Keeper.label());
        assert_eq!(chips[1], Role::Kesehatan.label());
        assert_eq!(chips[2], "guest-lecturer");
    }
}
