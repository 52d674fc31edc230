use contracts::domain::a008_animal::AnimalDetailItem;
use contracts::domain::common::ListRecord;
use contracts::shared::api::PaginatedResponse;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::common::RowActions;
use crate::shared::api_utils::{use_api, ApiClient, ApiError};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::pagination::{CollectionQuery, CollectionResult, LatestRequest};
use crate::shared::query_cache::{cached, use_query_cache, QueryKey, DEFAULT_STALE_TIME};
use crate::system::access::roles::MANAGEMENT_ROLES;
use crate::system::auth::guard::Can;

/// Rows per expanded group.
pub const DETAIL_PAGE_SIZE: usize = 10;

/// Cached under the animal collection so every animal mutation refreshes it.
pub fn details_key(group_id: &str, query: &CollectionQuery) -> QueryKey {
    QueryKey::new("animals")
        .with("family")
        .with(group_id)
        .with(query.page)
}

pub async fn fetch_details(
    api: &ApiClient,
    group_id: &str,
    query: &CollectionQuery,
) -> Result<CollectionResult<AnimalDetailItem>, ApiError> {
    let params = query
        .request_query()
        .map_err(|e| ApiError::Serialize(e.to_string()))?;
    let response: PaginatedResponse<AnimalDetailItem> =
        api.get(&format!("/animal/details/{}", group_id), &params).await?;
    Ok(CollectionResult::from_response(response, query.page_size))
}

fn or_dash(value: &Option<String>) -> String {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("-")
        .to_string()
}

/// Individual animals of one header row, paged locally.
#[component]
pub fn AnimalDetailRows(group_id: String, actions: RowActions) -> impl IntoView {
    let api = use_api();
    let cache = use_query_cache();

    let query = RwSignal::new(CollectionQuery::new(DETAIL_PAGE_SIZE));
    let result = RwSignal::new(CollectionResult::<AnimalDetailItem>::default());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let latest = StoredValue::new(LatestRequest::default());

    Effect::new(move |_| {
        let q = query.get();
        actions.version.track();

        let mut request = latest.get_value();
        let seq = request.begin();
        latest.set_value(request);
        loading.set(true);

        let group_id = group_id.clone();
        let cache = cache.clone();
        spawn_local(async move {
            let outcome = cached(cache.as_ref(), details_key(&group_id, &q), DEFAULT_STALE_TIME, || {
                fetch_details(&api, &group_id, &q)
            })
            .await;
            if !latest.with_value(|l| l.is_current(seq)) {
                return;
            }
            match outcome {
                Ok(page) => {
                    result.set(page);
                    error.set(None);
                }
                Err(e) => {
                    log::error!("animals: details of {} failed: {}", group_id, e);
                    error.set(Some(e.user_message("Failed to load animals")));
                }
            }
            loading.set(false);
        });
    });

    let rows = move || {
        let offset = query.with(|q| (q.page - 1) * q.page_size);
        let items = result.with(|page| page.items.clone());
        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                let id = item.record_id().to_string();
                let name = item.display_name().to_string();
                view! {
                    <TableRow>
                        <TableCell>{offset + i + 1}</TableCell>
                        <TableCell>{item.animal_name.clone()}</TableCell>
                        <TableCell>{or_dash(&item.identifier_code)}</TableCell>
                        <TableCell>{or_dash(&item.animal_genders_name)}</TableCell>
                        <TableCell>{or_dash(&item.animal_classification)}</TableCell>
                        <TableCell>{or_dash(&item.animal_entity)}</TableCell>
                        <TableCell>
                            <Can roles=MANAGEMENT_ROLES.to_vec()>
                                <div class="row-actions">
                                    <button
                                        class="row-actions__btn"
                                        title="Edit"
                                        on:click={
                                            let id = id.clone();
                                            move |_| actions.edit.run(id.clone())
                                        }
                                    >
                                        {icon("edit")}
                                    </button>
                                    <button
                                        class="row-actions__btn row-actions__btn--danger"
                                        title="Delete"
                                        on:click={
                                            let id = id.clone();
                                            let name = name.clone();
                                            move |_| actions.delete.run((id.clone(), name.clone()))
                                        }
                                    >
                                        {icon("trash")}
                                    </button>
                                </div>
                            </Can>
                        </TableCell>
                    </TableRow>
                }
            })
            .collect_view()
    };

    view! {
        <div class="animal-details">
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"No"</TableHeaderCell>
                        <TableHeaderCell>"Name"</TableHeaderCell>
                        <TableHeaderCell>"Identifier"</TableHeaderCell>
                        <TableHeaderCell>"Gender"</TableHeaderCell>
                        <TableHeaderCell>"Classification"</TableHeaderCell>
                        <TableHeaderCell>"Entity"</TableHeaderCell>
                        <TableHeaderCell>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>{rows}</TableBody>
            </Table>
            <Show when=move || result.with(|r| r.total_pages > 1)>
                <PaginationControls
                    current_page=Signal::derive(move || query.with(|q| q.page))
                    total_pages=Signal::derive(move || result.with(|r| r.total_pages))
                    total_count=Signal::derive(move || result.with(|r| r.total_count))
                    loading=loading
                    on_page_change=Callback::new(move |page: usize| query.update(|q| *q = q.with_page(page)))
                />
            </Show>
        </div>
    }
}
