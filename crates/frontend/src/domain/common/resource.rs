//! What a collection plugs into the generic list screen.

use contracts::domain::common::{FormValues, ListRecord};
use contracts::shared::api::ApiMessage;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use serde::de::DeserializeOwned;

use crate::shared::api_utils::{ApiClient, ApiError};
use crate::shared::mutation::SubmitAction;
use crate::system::access::roles::{Role, MANAGEMENT_ROLES};

/// Row-level actions handed to expanded rows.
#[derive(Clone, Copy)]
pub struct RowActions {
    pub edit: Callback<String>,
    /// `(id, display name)`; opens the confirmation step.
    pub delete: Callback<(String, String)>,
    /// Bumped after every successful mutation.
    pub version: ReadSignal<u32>,
}

#[allow(async_fn_in_trait)]
pub trait CollectionResource: 'static {
    /// Row of the paginated list.
    type Item: ListRecord + DeserializeOwned + Clone + Send + Sync + 'static;
    /// Payload of the detail endpoint used to hydrate the edit form.
    type Detail: DeserializeOwned + Clone + Send + Sync + 'static;
    type Form: FormValues + Send + Sync + 'static;

    /// Cache prefix owning every list and detail key of the collection.
    const KEY: &'static str;
    /// `{entity}--list`.
    const PAGE_ID: &'static str;
    const TITLE: &'static str;
    /// Singular noun for notifications ("Family created successfully").
    const LABEL: &'static str;
    /// Paginated `GET` endpoint.
    const LIST_PATH: &'static str;
    /// Whether list rows carry edit/delete buttons.
    const ROW_ACTIONS: bool = true;
    /// Whether rows open into [`CollectionResource::expanded_row`].
    const EXPANDABLE: bool = false;

    /// `POST` endpoint for create.
    fn create_path() -> &'static str {
        Self::LIST_PATH
    }

    /// Update and delete endpoint.
    fn item_path(id: &str) -> String {
        format!("{}/{}", Self::LIST_PATH, id)
    }

    fn detail_path(id: &str) -> String {
        Self::item_path(id)
    }

    fn columns() -> &'static [&'static str];
    fn cells(item: &Self::Item) -> Vec<String>;

    fn form_from_detail(detail: &Self::Detail) -> Self::Form;
    fn form_view(form: RwSignal<Self::Form>, errors: RwSignal<FieldErrors>) -> AnyView;

    /// JSON create/update by default.
    async fn submit(
        api: &ApiClient,
        action: &SubmitAction,
        form: &Self::Form,
    ) -> Result<ApiMessage, ApiError> {
        match action {
            SubmitAction::Create => api.post_json(Self::create_path(), form).await,
            SubmitAction::Update { id } => api.put_json(&Self::item_path(id), form).await,
        }
    }

    /// Content shown under an expanded row.
    fn expanded_row(_item: &Self::Item, _actions: RowActions) -> AnyView {
        ().into_any()
    }

    fn create_roles() -> Vec<Role> {
        vec![Role::SuperAdmin]
    }

    fn row_roles() -> Vec<Role> {
        MANAGEMENT_ROLES.to_vec()
    }
}
