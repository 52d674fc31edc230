use crate::shared::icons::icon;
use crate::shared::pagination::{page_items, PageItem, PaginationState};
use leptos::prelude::*;

/// Numbered pager. Every click goes through [`PaginationState`], so a
/// disabled control, an out-of-range page or a click during a fetch does
/// nothing even if the button is somehow enabled.
#[component]
pub fn PaginationControls(
    /// Current page (1-based).
    #[prop(into)]
    current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
    #[prop(into)] loading: Signal<bool>,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let state = Signal::derive(move || PaginationState {
        current: current_page.get(),
        total_pages: total_pages.get(),
        loading: loading.get(),
    });

    let go = move |target: Option<usize>| {
        if let Some(page) = target {
            on_page_change.run(page);
        }
    };

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">
                {move || format!("{} records", total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| go(state.get_untracked().prev())
                disabled=move || !state.get().can_prev()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            {move || page_items(current_page.get(), total_pages.get()).into_iter().map(|item| match item {
                PageItem::Page(page) => view! {
                    <button
                        class="pagination-btn"
                        class:pagination-btn--active=move || current_page.get() == page
                        on:click=move |_| go(state.get_untracked().target(page))
                    >
                        {page}
                    </button>
                }.into_any(),
                PageItem::Ellipsis => view! { <span class="pagination-ellipsis">"…"</span> }.into_any(),
            }).collect_view()}
            <button
                class="pagination-btn"
                on:click=move |_| go(state.get_untracked().next())
                disabled=move || !state.get().can_next()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
