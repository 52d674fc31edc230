use contracts::domain::a005_cage_type::{CageType, CageTypeForm};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

use crate::domain::a005_cage_type::ui::details::cage_type_form;
use crate::domain::common::{collection_page, CollectionResource};
use crate::shared::date_utils::format_optional;

pub struct CageTypeResource;

impl CollectionResource for CageTypeResource {
    type Item = CageType;
    type Detail = CageType;
    type Form = CageTypeForm;

    const KEY: &'static str = "cage-types";
    const PAGE_ID: &'static str = "a005_cage_type--list";
    const TITLE: &'static str = "Cage Types";
    const LABEL: &'static str = "Cage type";
    const LIST_PATH: &'static str = "/cage/type";

    fn columns() -> &'static [&'static str] {
        &["Cage type", "Description", "Created"]
    }

    fn cells(item: &CageType) -> Vec<String> {
        vec![
            item.name.clone(),
            item.description.clone(),
            format_optional(item.created_at.as_deref()),
        ]
    }

    fn form_from_detail(detail: &CageType) -> CageTypeForm {
        CageTypeForm::from_record(detail)
    }

    fn form_view(form: RwSignal<CageTypeForm>, errors: RwSignal<FieldErrors>) -> AnyView {
        cage_type_form(form, errors)
    }
}

#[component]
pub fn CageTypeList() -> impl IntoView {
    collection_page::<CageTypeResource>()
}
