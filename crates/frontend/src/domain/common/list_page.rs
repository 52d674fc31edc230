//! Generic paginated list screen with the create/edit dialog and the delete
//! confirmation. Every master-data collection renders through here.

use std::collections::HashSet;

use contracts::domain::common::{FormValues, ListRecord};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use super::api::{delete, detail_key, fetch_detail, fetch_page_cached};
use super::resource::{CollectionResource, RowActions};
use crate::config::use_config;
use crate::layout::global_context::use_app_context;
use crate::shared::api_utils::use_api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::{ConfirmDeleteDialog, SearchInput};
use crate::shared::mutation::{FormMode, FormSurface, MutationCoordinator};
use crate::shared::notify::use_notifier;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::pagination::{CollectionQuery, CollectionResult, LatestRequest};
use crate::shared::query_cache::{cached, use_query_cache, DEFAULT_STALE_TIME};
use crate::system::auth::guard::Can;

const LOAD_ERROR: &str = "Failed to load data";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SurfaceKind {
    Closed,
    Loading,
    Create,
    Edit,
}

impl SurfaceKind {
    fn of(surface: &FormSurface) -> Self {
        match surface {
            FormSurface::Closed => Self::Closed,
            FormSurface::Loading { .. } => Self::Loading,
            FormSurface::Open(FormMode::Create) => Self::Create,
            FormSurface::Open(FormMode::Edit { .. }) => Self::Edit,
        }
    }
}

/// The list page of collection `R`.
pub fn collection_page<R: CollectionResource>() -> AnyView {
    let ctx = use_app_context();
    let config = use_config();
    let api = use_api();
    let cache = use_query_cache();
    let notifier = use_notifier();
    let page_size = config.page_size;

    // The address bar owns page and keyword
    let query = Memo::new(move |_| CollectionQuery::from_route(&ctx.query.get(), page_size));
    let result = RwSignal::new(CollectionResult::<R::Item>::default());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let latest = StoredValue::new(LatestRequest::default());
    let (version, set_version) = signal(0u32);
    let expanded = RwSignal::new(HashSet::<String>::new());

    let go = move |next: CollectionQuery| ctx.navigate_query(&next.route_query());

    {
        let cache = cache.clone();
        Effect::new(move |_| {
            let q = query.get();
            version.track();

            let mut request = latest.get_value();
            let seq = request.begin();
            latest.set_value(request);
            loading.set(true);

            let cache = cache.clone();
            spawn_local(async move {
                let outcome = fetch_page_cached::<R>(&api, cache.as_ref(), &q).await;
                // A newer page or keyword superseded this response
                if !latest.with_value(|l| l.is_current(seq)) {
                    return;
                }
                match outcome {
                    Ok(page) => {
                        result.set(page);
                        error.set(None);
                    }
                    Err(e) => {
                        log::error!("{}: list fetch failed: {}", R::KEY, e);
                        error.set(Some(e.user_message(LOAD_ERROR)));
                    }
                }
                loading.set(false);
            });
        });
    }

    let flow = RwSignal::new(MutationCoordinator::new(R::KEY, R::LABEL));
    let form = RwSignal::new(R::Form::default());
    let errors = RwSignal::new(FieldErrors::new());
    let surface = Memo::new(move |_| flow.with(|f| SurfaceKind::of(f.surface())));

    let open_create = move || {
        form.set(R::Form::default());
        errors.set(FieldErrors::new());
        flow.update(|f| f.open_create());
    };

    let open_edit = {
        let cache = cache.clone();
        Callback::new(move |id: String| {
            errors.set(FieldErrors::new());
            flow.update(|f| f.open_edit(id.clone()));

            let cache = cache.clone();
            spawn_local(async move {
                let outcome = cached(cache.as_ref(), detail_key::<R>(&id), DEFAULT_STALE_TIME, || {
                    fetch_detail::<R>(&api, &id)
                })
                .await;
                match outcome {
                    Ok(detail) => {
                        let waiting = flow.with_untracked(|f| {
                            *f.surface() == FormSurface::Loading { id: id.clone() }
                        });
                        if waiting {
                            form.set(R::form_from_detail(&detail));
                            flow.update(|f| {
                                f.detail_loaded(&id);
                            });
                        }
                    }
                    Err(e) => {
                        if let Some(note) = flow.try_update(|f| f.detail_failed(&id, &e)).flatten() {
                            notifier.show(note);
                        }
                    }
                }
            });
        })
    };

    let request_delete = Callback::new(move |(id, name): (String, String)| {
        flow.update(|f| f.request_delete(id, name));
    });

    let submit = {
        let cache = cache.clone();
        move || {
            let values = form.get_untracked();
            if let Err(invalid) = values.validate() {
                log::debug!("{}: form rejected: {}", R::KEY, invalid.summary());
                errors.set(invalid);
                return;
            }
            errors.set(FieldErrors::new());
            let Some(action) = flow.try_update(|f| f.submit_action()).flatten() else {
                return;
            };

            let cache = cache.clone();
            spawn_local(async move {
                let outcome = R::submit(&api, &action, &values).await;
                let note = flow.try_update(|f| match &outcome {
                    Ok(_) => f.submit_succeeded(cache.as_ref()),
                    Err(e) => f.submit_failed(e),
                });
                if let Some(note) = note {
                    notifier.show(note);
                }
                if outcome.is_ok() {
                    set_version.update(|v| *v += 1);
                }
            });
        }
    };

    let confirm_delete = {
        let cache = cache.clone();
        Callback::new(move |_: ()| {
            let Some(id) = flow.try_update(|f| f.confirm_delete()).flatten() else {
                return;
            };
            let cache = cache.clone();
            spawn_local(async move {
                let outcome = delete::<R>(&api, &id).await;
                let note = flow.try_update(|f| match &outcome {
                    Ok(_) => f.delete_succeeded(cache.as_ref()),
                    Err(e) => f.delete_failed(e),
                });
                if let Some(note) = note {
                    notifier.show(note);
                }
                if outcome.is_ok() {
                    set_version.update(|v| *v += 1);
                }
            });
        })
    };

    let actions = RowActions {
        edit: open_edit,
        delete: request_delete,
        version,
    };

    // Dialog visibility follows the coordinator; Escape or the backdrop
    // closes it unless a save is in flight
    let dialog_open = RwSignal::new(false);
    Effect::new(move |_| dialog_open.set(flow.with(|f| f.is_open())));
    Effect::new(move |_| {
        if !dialog_open.get() && flow.with_untracked(|f| f.is_open() && !f.is_submitting()) {
            flow.update(|f| f.close());
        }
    });

    let save_disabled = Signal::derive(move || {
        flow.with(|f| !matches!(f.surface(), FormSurface::Open(_)) || f.is_submitting())
    });
    let cancel_disabled = Signal::derive(move || flow.with(|f| f.is_submitting()));

    // Row number, columns, then the optional toggle and action cells
    let column_count =
        1 + R::columns().len() + usize::from(R::ROW_ACTIONS) + usize::from(R::EXPANDABLE);

    let rows = move || {
        let offset = query.with(|q| (q.page - 1) * q.page_size);
        result.with(|page| {
            page.items
                .iter()
                .cloned()
                .enumerate()
                .map(|(i, item)| render_row::<R>(item, offset + i + 1, actions, expanded, column_count))
                .collect_view()
        })
    };

    view! {
        <PageFrame page_id=R::PAGE_ID category=PAGE_CAT_LIST>
            <PageHeader title=R::TITLE subtitle=Signal::derive(move || ctx.unit_name().to_string())>
                <Can roles=R::create_roles()>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open_create()>
                        {icon("plus")}
                        {format!(" Add {}", R::LABEL)}
                    </Button>
                </Can>
            </PageHeader>

            <div class="page__toolbar">
                <SearchInput
                    query=query
                    on_commit=Callback::new(go)
                    placeholder=format!("Search {}...", R::TITLE.to_lowercase())
                />
                <PaginationControls
                    current_page=Signal::derive(move || query.with(|q| q.page))
                    total_pages=Signal::derive(move || result.with(|r| r.total_pages))
                    total_count=Signal::derive(move || result.with(|r| r.total_count))
                    loading=loading
                    on_page_change=Callback::new(move |page: usize| go(query.get_untracked().with_page(page)))
                />
            </div>

            {move || error.get().map(|e| view! {
                <div class="alert alert--error">{e}</div>
            })}

            <div class="page__content">
                <Table>
                    <TableHeader>
                        <TableRow>
                            {R::EXPANDABLE.then(|| view! { <TableHeaderCell>""</TableHeaderCell> })}
                            <TableHeaderCell>"No"</TableHeaderCell>
                            {R::columns()
                                .iter()
                                .map(|c| view! { <TableHeaderCell>{*c}</TableHeaderCell> })
                                .collect_view()}
                            {R::ROW_ACTIONS.then(|| view! { <TableHeaderCell>"Actions"</TableHeaderCell> })}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {rows}
                    </TableBody>
                </Table>

                <Show when=move || loading.get()>
                    <div class="page__loading">
                        <Spinner size=SpinnerSize::Small />
                        " Loading..."
                    </div>
                </Show>
                <Show when=move || !loading.get() && error.with(Option::is_none) && result.with(|r| r.items.is_empty())>
                    <div class="page__empty">"No data"</div>
                </Show>
            </div>

            <Dialog open=dialog_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>
                            {move || match surface.get() {
                                SurfaceKind::Create => format!("Add {}", R::LABEL),
                                _ => format!("Edit {}", R::LABEL),
                            }}
                        </DialogTitle>
                        <DialogContent>
                            {move || match surface.get() {
                                SurfaceKind::Closed => ().into_any(),
                                SurfaceKind::Loading => view! {
                                    <div class="form__loading">
                                        <Spinner size=SpinnerSize::Small />
                                        " Loading..."
                                    </div>
                                }
                                .into_any(),
                                SurfaceKind::Create | SurfaceKind::Edit => {
                                    view! { <div class="form">{R::form_view(form, errors)}</div> }.into_any()
                                }
                            }}
                        </DialogContent>
                        <DialogActions>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| flow.update(|f| f.close())
                                disabled=cancel_disabled
                            >
                                "Cancel"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click={
                                    let submit = submit.clone();
                                    move |_| submit()
                                }
                                disabled=save_disabled
                            >
                                {move || if flow.with(|f| f.is_submitting()) { "Saving..." } else { "Save" }}
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>

            <ConfirmDeleteDialog
                target=Signal::derive(move || flow.with(|f| f.pending_delete().map(|d| d.display_name.clone())))
                busy=Signal::derive(move || flow.with(|f| f.is_deleting()))
                on_confirm=confirm_delete
                on_cancel=Callback::new(move |_: ()| flow.update(|f| f.cancel_delete()))
            />
        </PageFrame>
    }
    .into_any()
}

fn render_row<R: CollectionResource>(
    item: R::Item,
    number: usize,
    actions: RowActions,
    expanded: RwSignal<HashSet<String>>,
    column_count: usize,
) -> AnyView {
    let id = item.record_id().to_string();
    let name = item.display_name().to_string();

    let toggle = R::EXPANDABLE.then(|| {
        let id = id.clone();
        let is_open = {
            let id = id.clone();
            move || expanded.with(|s| s.contains(&id))
        };
        view! {
            <TableCell>
                <button
                    class="row-toggle"
                    on:click=move |_| {
                        expanded.update(|s| {
                            if !s.remove(&id) {
                                s.insert(id.clone());
                            }
                        })
                    }
                >
                    {move || if is_open() { icon("chevron-down") } else { icon("chevron-right") }}
                </button>
            </TableCell>
        }
    });

    let cells = R::cells(&item)
        .into_iter()
        .map(|text| view! { <TableCell><TableCellLayout truncate=true>{text}</TableCellLayout></TableCell> })
        .collect_view();

    let row_actions = R::ROW_ACTIONS.then(|| {
        let edit_id = id.clone();
        let delete_id = id.clone();
        let name = name.clone();
        view! {
            <TableCell>
                <Can roles=R::row_roles()>
                    <div class="row-actions">
                        <button
                            class="row-actions__btn"
                            title="Edit"
                            on:click={
                                let edit_id = edit_id.clone();
                                move |_| actions.edit.run(edit_id.clone())
                            }
                        >
                            {icon("edit")}
                        </button>
                        <button
                            class="row-actions__btn row-actions__btn--danger"
                            title="Delete"
                            on:click={
                                let delete_id = delete_id.clone();
                                let name = name.clone();
                                move |_| actions.delete.run((delete_id.clone(), name.clone()))
                            }
                        >
                            {icon("trash")}
                        </button>
                    </div>
                </Can>
            </TableCell>
        }
    });

    let item = StoredValue::new(item);
    let expansion = R::EXPANDABLE.then(|| {
        let open_id = id.clone();
        view! {
            <Show when=move || expanded.with(|s| s.contains(&open_id))>
                <TableRow class="row-expanded">
                    <TableCell attr:colspan=column_count>
                        {move || item.with_value(|i| R::expanded_row(i, actions))}
                    </TableCell>
                </TableRow>
            </Show>
        }
    });

    view! {
        <TableRow>
            {toggle}
            <TableCell>{number}</TableCell>
            {cells}
            {row_actions}
        </TableRow>
        {expansion}
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_kind() {
        assert_eq!(SurfaceKind::of(&FormSurface::Closed), SurfaceKind::Closed);
        assert_eq!(
            SurfaceKind::of(&FormSurface::Loading { id: "1".into() }),
            SurfaceKind::Loading
        );
        assert_eq!(
            SurfaceKind::of(&FormSurface::Open(FormMode::Create)),
            SurfaceKind::Create
        );
        assert_eq!(
            SurfaceKind::of(&FormSurface::Open(FormMode::Edit { id: "1".into() })),
            SurfaceKind::Edit
        );
    }
}
