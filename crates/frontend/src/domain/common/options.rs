//! Select option lists that never change while a form is open.

use contracts::shared::api::ApiResponse;
use contracts::shared::options::{to_records, OptionRecord};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api_utils::{use_api, ApiClient, ApiError};
use crate::shared::query_cache::{cached, use_query_cache, QueryKey, FOREVER};

/// `path` may carry its own query, e.g. `/feed/categories?all=true`.
pub async fn fetch_options<T>(api: &ApiClient, path: &str) -> Result<Vec<OptionRecord>, ApiError>
where
    T: DeserializeOwned + Into<OptionRecord>,
{
    let (path, query) = path.split_once('?').unwrap_or((path, ""));
    let response: ApiResponse<Vec<T>> = api.get(path, query).await?;
    Ok(to_records(response.data))
}

/// Cache key of an option list; lives under the owning collection so a
/// mutation there refreshes the list too.
pub fn options_key(collection: &str) -> QueryKey {
    QueryKey::new(collection).with("options")
}

/// Loads an option list once per session. Returns the records and whether
/// the fetch is still running.
pub fn static_options<T>(collection: &'static str, path: &'static str) -> (Signal<Vec<OptionRecord>>, Signal<bool>)
where
    T: DeserializeOwned + Into<OptionRecord> + 'static,
{
    let api = use_api();
    let cache = use_query_cache();
    let options = RwSignal::new(Vec::<OptionRecord>::new());
    let loading = RwSignal::new(true);

    spawn_local(async move {
        let outcome = cached(cache.as_ref(), options_key(collection), FOREVER, || {
            fetch_options::<T>(&api, path)
        })
        .await;
        match outcome {
            Ok(list) => {
                let _ = options.try_set(list);
            }
            Err(e) => log::error!("{}: option fetch failed: {}", collection, e),
        }
        let _ = loading.try_set(false);
    });

    (options.into(), loading.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::pagination::CollectionQuery;

    #[test]
    fn test_options_share_the_collection_prefix() {
        let key = options_key("unit-areas");
        let list = CollectionQuery::new(10).query_key("unit-areas");
        assert_eq!(key.segments()[0], list.segments()[0]);
        assert!(key.starts_with(&QueryKey::new("unit-areas")));
        assert!(!key.starts_with(&QueryKey::new("unit")));
    }
}
