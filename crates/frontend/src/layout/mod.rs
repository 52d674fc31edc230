pub mod global_context;
pub mod left;
pub mod top_header;

use crate::shared::notify::ToastHost;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <left::Left />

                <div class="app-main">
                    <div data-zone="center" class="center">
                        {center()}
                    </div>
                </div>
            </div>

            <ToastHost />
        </div>
    }
}
