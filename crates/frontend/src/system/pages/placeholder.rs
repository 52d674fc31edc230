use leptos::prelude::*;

use crate::shared::components::page_header::PageHeader;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

/// Menu entries whose screens are not part of this build.
#[component]
pub fn PlaceholderPage(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <PageFrame page_id="placeholder--system" category=PAGE_CAT_SYSTEM>
            <PageHeader title=title.clone() />
            <div class="page__content">
                <div class="placeholder">{format!("{} is not available yet.", title)}</div>
            </div>
        </PageFrame>
    }
}

/// Shown when the signed-in user may not open the current route.
#[component]
pub fn NoAccessPage() -> impl IntoView {
    view! {
        <PageFrame page_id="no_access--system" category=PAGE_CAT_SYSTEM>
            <div class="page__content">
                <div class="alert alert--error">"You do not have access to this page."</div>
            </div>
        </PageFrame>
    }
}
