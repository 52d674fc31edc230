use contracts::domain::a004_cage_model::{CageModel, CageModelForm};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

use crate::domain::a004_cage_model::ui::details::cage_model_form;
use crate::domain::common::{collection_page, CollectionResource};

pub struct CageModelResource;

impl CollectionResource for CageModelResource {
    type Item = CageModel;
    type Detail = CageModel;
    type Form = CageModelForm;

    const KEY: &'static str = "cage-models";
    const PAGE_ID: &'static str = "a004_cage_model--list";
    const TITLE: &'static str = "Cage Models";
    const LABEL: &'static str = "Cage model";
    const LIST_PATH: &'static str = "/cage/model";

    fn columns() -> &'static [&'static str] {
        &["Cage model", "Description"]
    }

    fn cells(item: &CageModel) -> Vec<String> {
        vec![item.name.clone(), item.description.clone()]
    }

    fn form_from_detail(detail: &CageModel) -> CageModelForm {
        CageModelForm::from_record(detail)
    }

    fn form_view(form: RwSignal<CageModelForm>, errors: RwSignal<FieldErrors>) -> AnyView {
        cage_model_form(form, errors)
    }
}

#[component]
pub fn CageModelList() -> impl IntoView {
    collection_page::<CageModelResource>()
}
