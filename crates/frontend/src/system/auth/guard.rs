use leptos::prelude::*;

use super::context::use_permissions;
use crate::system::access::Role;

pub const LOGIN_ROUTE: &str = "/login";
pub const HOME_ROUTE: &str = "/dashboard";

/// Where the route guard sends the session, if anywhere.
pub fn guard_redirect(path: &str, authenticated: bool) -> Option<&'static str> {
    let on_login = path.trim_end_matches('/') == LOGIN_ROUTE;
    match (authenticated, on_login) {
        (false, false) => Some(LOGIN_ROUTE),
        (true, true) => Some(HOME_ROUTE),
        _ => None,
    }
}

/// Renders children only for users holding one of `roles` (primary roles).
/// An empty role list always renders.
#[component]
pub fn RoleGuard(
    #[prop(into)] roles: Vec<Role>,
    #[prop(optional, into)] fallback: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    let permissions = use_permissions();
    let codes: Vec<&'static str> = roles.iter().map(|r| r.code()).collect();

    view! {
        <Show
            when=move || codes.is_empty() || permissions.with(|p| p.has_role(&codes))
            fallback=fallback
        >
            {children()}
        </Show>
    }
}

/// Same check as [`RoleGuard`] for inline action buttons.
#[component]
pub fn Can(#[prop(into)] roles: Vec<Role>, children: ChildrenFn) -> impl IntoView {
    view! { <RoleGuard roles=roles>{children()}</RoleGuard> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_is_sent_to_login() {
        assert_eq!(guard_redirect("/animal", false), Some("/login"));
        assert_eq!(guard_redirect("/", false), Some("/login"));
        assert_eq!(guard_redirect("/login", false), None);
    }

    #[test]
    fn test_signed_in_user_leaves_login() {
        assert_eq!(guard_redirect("/login", true), Some("/dashboard"));
        assert_eq!(guard_redirect("/login/", true), Some("/dashboard"));
        assert_eq!(guard_redirect("/feed-type", true), None);
    }
}
