use super::sidebar::Sidebar;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Collapsible left column: brand plus the role-filtered navigation.
#[component]
pub fn Left() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <aside data-zone="left" class="left app-sidebar" class:hidden=move || !ctx.left_open.get()>
            <div class="app-sidebar__brand">
                {icon("paw")}
                <span>"Zoo Back Office"</span>
            </div>
            <Sidebar />
        </aside>
    }
}
