//! Shared list-screen widgets: keyword search and the delete confirmation.
use leptos::prelude::*;
use thaw::*;

use super::icons::icon;
use super::pagination::{CollectionQuery, SearchDraft};

/// Keyword box that only commits on Enter or blur. Typing alone never
/// touches the list query.
#[component]
pub fn SearchInput(
    #[prop(into)] query: Signal<CollectionQuery>,
    #[prop(into)] on_commit: Callback<CollectionQuery>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let draft = RwSignal::new(SearchDraft::from_query(&query.get_untracked()));

    // Back/forward can change the committed keyword under us
    Effect::new(move |prev: Option<Option<String>>| {
        let keyword = query.with(|q| q.keyword.clone());
        if prev.is_some_and(|p| p != keyword) {
            draft.set(SearchDraft::from_query(&query.get_untracked()));
        }
        keyword
    });

    let commit = move || {
        let next = draft.with_untracked(|d| d.commit(&query.get_untracked()));
        if let Some(next) = next {
            on_commit.run(next);
        }
    };

    view! {
        <div class="search-input">
            {icon("search")}
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || draft.with(|d| d.text().to_string())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    draft.update(|d| d.input(&text));
                }
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        commit();
                    }
                }
                on:blur=move |_| commit()
            />
            <Show when=move || draft.with(|d| !d.text().is_empty())>
                <button
                    class="search-input__clear"
                    on:click=move |_| {
                        draft.update(|d| d.input(""));
                        commit();
                    }
                    title="Clear"
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Confirmation step in front of every delete.
#[component]
pub fn ConfirmDeleteDialog(
    #[prop(into)] target: Signal<Option<String>>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let open = RwSignal::new(false);
    Effect::new(move |_| open.set(target.with(Option::is_some)));
    // Closing with Escape or the backdrop counts as cancel
    Effect::new(move |_| {
        if !open.get() && target.with_untracked(Option::is_some) && !busy.get_untracked() {
            on_cancel.run(());
        }
    });

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Confirm delete"</DialogTitle>
                    <DialogContent>
                        {move || format!(
                            "Delete '{}'? This cannot be undone.",
                            target.get().unwrap_or_default()
                        )}
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| on_cancel.run(())
                            disabled=busy
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_confirm.run(())
                            disabled=busy
                        >
                            {move || if busy.get() { "Deleting..." } else { "Delete" }}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
