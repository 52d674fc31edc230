use leptos::prelude::*;

/// Title bar of a routed page; children land on the right as actions.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    /// Secondary line under the title, e.g. the active zoo unit.
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                {move || subtitle.get().map(|s| view! { <div class="page__subtitle">{s}</div> })}
            </div>
            <div class="page__header-right">{children.map(|c| c())}</div>
        </div>
    }
}
