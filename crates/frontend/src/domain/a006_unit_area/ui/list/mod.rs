use contracts::domain::a006_unit_area::{UnitArea, UnitAreaForm};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

use crate::domain::a006_unit_area::ui::details::unit_area_form;
use crate::domain::common::{collection_page, CollectionResource};

const ITEM_PATH: &str = "/area-unit";

pub struct UnitAreaResource;

impl CollectionResource for UnitAreaResource {
    type Item = UnitArea;
    type Detail = UnitArea;
    type Form = UnitAreaForm;

    const KEY: &'static str = "unit-areas";
    const PAGE_ID: &'static str = "a006_unit_area--list";
    const TITLE: &'static str = "Unit Areas";
    const LABEL: &'static str = "Unit area";
    const LIST_PATH: &'static str = "/area-unit/all";

    fn create_path() -> &'static str {
        ITEM_PATH
    }

    fn item_path(id: &str) -> String {
        format!("{}/{}", ITEM_PATH, id)
    }

    fn columns() -> &'static [&'static str] {
        &["Unit area", "Description"]
    }

    fn cells(item: &UnitArea) -> Vec<String> {
        vec![item.name.clone(), item.description.clone()]
    }

    fn form_from_detail(detail: &UnitArea) -> UnitAreaForm {
        UnitAreaForm::from_record(detail)
    }

    fn form_view(form: RwSignal<UnitAreaForm>, errors: RwSignal<FieldErrors>) -> AnyView {
        unit_area_form(form, errors)
    }
}

#[component]
pub fn UnitAreaList() -> impl IntoView {
    collection_page::<UnitAreaResource>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_area_endpoints() {
        assert_eq!(UnitAreaResource::create_path(), "/area-unit");
        assert_eq!(UnitAreaResource::item_path("4"), "/area-unit/4");
        assert_eq!(UnitAreaResource::detail_path("4"), "/area-unit/4");
    }
}
