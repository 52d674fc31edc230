use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_family::ui::list::FamilyList;
use crate::domain::a002_feed_category::ui::list::FeedCategoryList;
use crate::domain::a003_feed_type::ui::list::FeedTypeList;
use crate::domain::a004_cage_model::ui::list::CageModelList;
use crate::domain::a005_cage_type::ui::list::CageTypeList;
use crate::domain::a006_unit_area::ui::list::UnitAreaList;
use crate::domain::a007_zone_area::ui::list::ZoneAreaList;
use crate::domain::a008_animal::ui::list::AnimalList;
use crate::layout::global_context::use_app_context;
use crate::layout::left::menu::{navigation, title_for};
use crate::layout::Shell;
use crate::system::access::{use_permission_map, PermissionMap, Permissions};
use crate::system::auth::context::{use_auth, use_permissions};
use crate::system::auth::guard::{guard_redirect, LOGIN_ROUTE};
use crate::system::pages::dashboard::Dashboard;
use crate::system::pages::login::LoginPage;
use crate::system::pages::placeholder::{NoAccessPage, PlaceholderPage};

/// Screen rendered in the shell's center zone for `path`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Family,
    FeedCategory,
    FeedType,
    CageModel,
    CageType,
    UnitArea,
    ZoneArea,
    Animal,
    /// A navigation entry without a screen yet.
    Placeholder(&'static str),
    NotFound,
}

pub fn resolve(path: &str) -> Screen {
    match path {
        "/" | "/dashboard" => Screen::Dashboard,
        "/family" => Screen::Family,
        "/feed-category" => Screen::FeedCategory,
        "/feed-type" => Screen::FeedType,
        "/cage-model" => Screen::CageModel,
        "/cage-type" => Screen::CageType,
        "/unit-area" => Screen::UnitArea,
        "/zone-area" => Screen::ZoneArea,
        "/animal" => Screen::Animal,
        other => match title_for(&navigation(), other) {
            Some(title) => Screen::Placeholder(title),
            None => Screen::NotFound,
        },
    }
}

fn render(screen: Screen) -> AnyView {
    match screen {
        Screen::Dashboard => view! { <Dashboard /> }.into_any(),
        Screen::Family => view! { <FamilyList /> }.into_any(),
        Screen::FeedCategory => view! { <FeedCategoryList /> }.into_any(),
        Screen::FeedType => view! { <FeedTypeList /> }.into_any(),
        Screen::CageModel => view! { <CageModelList /> }.into_any(),
        Screen::CageType => view! { <CageTypeList /> }.into_any(),
        Screen::UnitArea => view! { <UnitAreaList /> }.into_any(),
        Screen::ZoneArea => view! { <ZoneAreaList /> }.into_any(),
        Screen::Animal => view! { <AnimalList /> }.into_any(),
        Screen::Placeholder(title) => view! { <PlaceholderPage title=title /> }.into_any(),
        Screen::NotFound => view! { <PlaceholderPage title="Page not found" /> }.into_any(),
    }
}

/// Whether the center zone may render `path`. The dashboard is the
/// fallback landing page for everyone. A degraded session has no profile
/// to check roles against, so it is not gated here; the API still is.
pub fn route_allowed(permissions: &Permissions, map: &PermissionMap, path: &str, degraded: bool) -> bool {
    degraded || path == "/" || permissions.can_access_menu(map, path)
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_app_context();
    let (auth_state, _) = use_auth();
    let permissions = use_permissions();
    let map = use_permission_map();

    let screen = Memo::new(move |_| ctx.path.with(|p| resolve(p)));
    let allowed = Memo::new(move |_| {
        let degraded = auth_state.with(|s| s.degraded);
        ctx.path.with(|path| permissions.with(|p| route_allowed(p, &map, path, degraded)))
    });

    view! {
        <Shell center=move || {
            if allowed.get() {
                render(screen.get())
            } else {
                view! { <NoAccessPage /> }.into_any()
            }
        } />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_app_context();
    let (auth_state, _) = use_auth();

    ctx.init_router_integration();

    // Guests go to the login page; a signed-in user never sees it
    Effect::new(move |_| {
        let state = auth_state.get();
        if state.restoring {
            return;
        }
        let target = ctx.path.with(|p| guard_redirect(p, state.is_authenticated()));
        if let Some(target) = target {
            log::debug!("route guard: redirecting to {}", target);
            ctx.navigate(target);
        }
    });

    view! {
        <Show when=move || !auth_state.with(|s| s.restoring) fallback=|| view! {
            <div class="page-loading"><Spinner /></div>
        }>
            <Show
                when=move || auth_state.with(|s| s.is_authenticated()) && ctx.path.with(|p| p != LOGIN_ROUTE)
                fallback=|| view! { <LoginPage /> }
            >
                <MainLayout />
            </Show>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::ApiError;
    use crate::system::access::permissions::tests::user_with;
    use crate::system::access::AccessPolicy;
    use crate::system::auth::context::establish_session;

    #[test]
    fn test_built_screens_resolve() {
        assert_eq!(resolve("/"), Screen::Dashboard);
        assert_eq!(resolve("/family"), Screen::Family);
        assert_eq!(resolve("/feed-type"), Screen::FeedType);
        assert_eq!(resolve("/zone-area"), Screen::ZoneArea);
        assert_eq!(resolve("/animal"), Screen::Animal);
    }

    #[test]
    fn test_menu_entries_without_screen_are_placeholders() {
        assert_eq!(resolve("/stock"), Screen::Placeholder("Stock"));
        assert_eq!(resolve("/mix-feed"), Screen::Placeholder("Mix Feed"));
        assert_eq!(resolve("/nowhere"), Screen::NotFound);
    }

    #[test]
    fn test_route_allowed_follows_roles() {
        let map = PermissionMap::standard(AccessPolicy::FailClosed);
        let keeper = Permissions::for_user(Some(user_with(&["keeper"], &[])));
        assert!(route_allowed(&keeper, &map, "/feed", false));
        assert!(!route_allowed(&keeper, &map, "/animal", false));
        assert!(!route_allowed(&keeper, &map, "/reports", false));
    }

    #[test]
    fn test_route_allowed_root_for_everyone() {
        let map = PermissionMap::standard(AccessPolicy::FailClosed);
        assert!(route_allowed(&Permissions::for_user(None), &map, "/", false));
        let nobody = Permissions::for_user(Some(user_with(&[], &[])));
        assert!(route_allowed(&nobody, &map, "/", false));
        assert!(!route_allowed(&nobody, &map, "/dashboard", false));
    }

    #[test]
    fn test_degraded_session_reaches_its_landing_page() {
        let map = PermissionMap::standard(AccessPolicy::FailOpen);
        let (state, landing) = establish_session("t".into(), Err(ApiError::Network("offline".into())));
        assert!(state.user.is_none());
        let permissions = Permissions::for_user(state.user.clone());
        assert!(!permissions.can_access_menu(&map, landing));
        assert!(route_allowed(&permissions, &map, landing, state.degraded));
        assert!(matches!(resolve(landing), Screen::Animal));
    }
}
