//! PageFrame: standard root wrapper for every routed page.
//!
//! ```rust
//! # use leptos::prelude::*;
//! # use zoo_frontend::shared::page_frame::PageFrame;
//! # use zoo_frontend::shared::page_standard::PAGE_CAT_LIST;
//! # fn _demo() -> impl IntoView {
//! view! {
//!     <PageFrame page_id="a001_family--list" category=PAGE_CAT_LIST>
//!         <div class="page__header">...</div>
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! # }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// `{entity}--{category}`, e.g. `"a001_family--list"`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id {page_id}");
    let class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
