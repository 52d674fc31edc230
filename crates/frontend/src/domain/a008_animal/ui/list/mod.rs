mod detail_rows;

pub use detail_rows::AnimalDetailRows;

use contracts::domain::a008_animal::{AnimalFormValues, AnimalFullDetail, AnimalHeader};
use contracts::shared::api::ApiMessage;
use contracts::shared::validation::FieldErrors;
use gloo_net::http::Method;
use leptos::prelude::*;

use crate::domain::a008_animal::ui::details::animal_form;
use crate::domain::common::{collection_page, CollectionResource, RowActions};
use crate::shared::api_utils::{ApiClient, ApiError};
use crate::shared::mutation::SubmitAction;

fn or_dash(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

pub struct AnimalResource;

impl CollectionResource for AnimalResource {
    type Item = AnimalHeader;
    type Detail = AnimalFullDetail;
    type Form = AnimalFormValues;

    const KEY: &'static str = "animals";
    const PAGE_ID: &'static str = "a008_animal--list";
    const TITLE: &'static str = "Animals";
    const LABEL: &'static str = "Animal";
    const LIST_PATH: &'static str = "/animal/headers";
    // Header rows are species groups; actions live on the expanded animals
    const ROW_ACTIONS: bool = false;
    const EXPANDABLE: bool = true;

    fn create_path() -> &'static str {
        "/animal"
    }

    fn item_path(id: &str) -> String {
        format!("/animal/{}", id)
    }

    fn detail_path(id: &str) -> String {
        format!("/animal/detail/{}", id)
    }

    fn columns() -> &'static [&'static str] {
        &[
            "Family",
            "Species",
            "Local name",
            "Latin name",
            "English name",
            "IUCN",
            "Total",
        ]
    }

    fn cells(item: &AnimalHeader) -> Vec<String> {
        vec![
            item.family_name.clone(),
            item.species_name.clone(),
            or_dash(&item.local_name),
            or_dash(&item.latin_name),
            or_dash(&item.english_name),
            or_dash(&item.iucn),
            item.total.to_string(),
        ]
    }

    fn form_from_detail(detail: &AnimalFullDetail) -> AnimalFormValues {
        AnimalFormValues::from_detail(detail)
    }

    fn form_view(form: RwSignal<AnimalFormValues>, errors: RwSignal<FieldErrors>) -> AnyView {
        animal_form(form, errors)
    }

    /// Animals are sent as `multipart/form-data`.
    async fn submit(
        api: &ApiClient,
        action: &SubmitAction,
        form: &AnimalFormValues,
    ) -> Result<ApiMessage, ApiError> {
        let fields = form.form_fields();
        match action {
            SubmitAction::Create => api.send_form(Method::POST, Self::create_path(), &fields).await,
            SubmitAction::Update { id } => api.send_form(Method::PUT, &Self::item_path(id), &fields).await,
        }
    }

    fn expanded_row(item: &AnimalHeader, actions: RowActions) -> AnyView {
        view! { <AnimalDetailRows group_id=item.id.clone() actions=actions /> }.into_any()
    }
}

#[component]
pub fn AnimalList() -> impl IntoView {
    collection_page::<AnimalResource>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animal_endpoints() {
        assert_eq!(AnimalResource::create_path(), "/animal");
        assert_eq!(AnimalResource::item_path("abc123"), "/animal/abc123");
        assert_eq!(AnimalResource::detail_path("abc123"), "/animal/detail/abc123");
    }

    #[test]
    fn test_header_cells_show_missing_names_as_dash() {
        let header = AnimalHeader {
            id: "1".into(),
            family_name: "Felidae".into(),
            species_name: "Panthera tigris".into(),
            latin_name: Some("Panthera tigris sumatrae".into()),
            total: 3,
            ..AnimalHeader::default()
        };
        let cells = AnimalResource::cells(&header);
        assert_eq!(cells.len(), AnimalResource::columns().len());
        assert_eq!(cells[2], "-");
        assert_eq!(cells[3], "Panthera tigris sumatrae");
        assert_eq!(cells[6], "3");
    }
}
