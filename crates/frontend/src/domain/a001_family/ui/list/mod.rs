use contracts::domain::a001_family::{Family, FamilyForm};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

use crate::domain::a001_family::ui::details::family_form;
use crate::domain::common::{collection_page, CollectionResource};
use crate::shared::date_utils::format_optional;

pub struct FamilyResource;

impl CollectionResource for FamilyResource {
    type Item = Family;
    type Detail = Family;
    type Form = FamilyForm;

    const KEY: &'static str = "families";
    const PAGE_ID: &'static str = "a001_family--list";
    const TITLE: &'static str = "Families";
    const LABEL: &'static str = "Family";
    const LIST_PATH: &'static str = "/animal/family";

    fn columns() -> &'static [&'static str] {
        &["Family", "Description", "Updated"]
    }

    fn cells(item: &Family) -> Vec<String> {
        vec![
            item.family_name.clone(),
            item.description.clone(),
            format_optional(item.updated_at.as_deref()),
        ]
    }

    fn form_from_detail(detail: &Family) -> FamilyForm {
        FamilyForm::from_record(detail)
    }

    fn form_view(form: RwSignal<FamilyForm>, errors: RwSignal<FieldErrors>) -> AnyView {
        family_form(form, errors)
    }
}

#[component]
pub fn FamilyList() -> impl IntoView {
    collection_page::<FamilyResource>()
}
