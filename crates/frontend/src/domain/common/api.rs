//! Collection endpoints shared by every master-data screen.

use contracts::shared::api::{ApiMessage, ApiResponse, PaginatedResponse};

use super::resource::CollectionResource;
use crate::shared::api_utils::{ApiClient, ApiError};
use crate::shared::pagination::{CollectionQuery, CollectionResult};
use crate::shared::query_cache::{cached, QueryCache, QueryKey, DEFAULT_STALE_TIME};

pub async fn fetch_page<R: CollectionResource>(
    api: &ApiClient,
    query: &CollectionQuery,
) -> Result<CollectionResult<R::Item>, ApiError> {
    let params = query
        .request_query()
        .map_err(|e| ApiError::Serialize(e.to_string()))?;
    let response: PaginatedResponse<R::Item> = api.get(R::LIST_PATH, &params).await?;
    Ok(CollectionResult::from_response(response, query.page_size))
}

/// Cached under `[KEY, "list", page, page_size, keyword?]`.
pub async fn fetch_page_cached<R: CollectionResource>(
    api: &ApiClient,
    cache: &dyn QueryCache,
    query: &CollectionQuery,
) -> Result<CollectionResult<R::Item>, ApiError> {
    cached(cache, query.query_key(R::KEY), DEFAULT_STALE_TIME, || {
        fetch_page::<R>(api, query)
    })
    .await
}

pub async fn fetch_detail<R: CollectionResource>(
    api: &ApiClient,
    id: &str,
) -> Result<R::Detail, ApiError> {
    let response: ApiResponse<R::Detail> = api.get(&R::detail_path(id), "").await?;
    Ok(response.data)
}

pub fn detail_key<R: CollectionResource>(id: &str) -> QueryKey {
    QueryKey::new(R::KEY).with("detail").with(id)
}

pub async fn delete<R: CollectionResource>(api: &ApiClient, id: &str) -> Result<ApiMessage, ApiError> {
    api.delete(&R::item_path(id)).await
}
