use contracts::domain::a007_zone_area::{ZoneArea, ZoneAreaForm};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

use crate::domain::a007_zone_area::ui::details::zone_area_form;
use crate::domain::common::{collection_page, CollectionResource};

pub struct ZoneAreaResource;

impl CollectionResource for ZoneAreaResource {
    type Item = ZoneArea;
    type Detail = ZoneArea;
    type Form = ZoneAreaForm;

    const KEY: &'static str = "zone-areas";
    const PAGE_ID: &'static str = "a007_zone_area--list";
    const TITLE: &'static str = "Zone Areas";
    const LABEL: &'static str = "Zone area";
    const LIST_PATH: &'static str = "/area-zona";

    fn columns() -> &'static [&'static str] {
        &["Zone area", "Description", "Unit area"]
    }

    fn cells(item: &ZoneArea) -> Vec<String> {
        vec![
            item.name.clone(),
            item.description.clone(),
            item.unit_name.clone().unwrap_or_else(|| "-".to_string()),
        ]
    }

    fn form_from_detail(detail: &ZoneArea) -> ZoneAreaForm {
        ZoneAreaForm::from_record(detail)
    }

    fn form_view(form: RwSignal<ZoneAreaForm>, errors: RwSignal<FieldErrors>) -> AnyView {
        zone_area_form(form, errors)
    }
}

#[component]
pub fn ZoneAreaList() -> impl IntoView {
    collection_page::<ZoneAreaResource>()
}
