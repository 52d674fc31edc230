use contracts::domain::a003_feed_type::{FeedType, FeedTypeForm};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

use crate::domain::a003_feed_type::ui::details::feed_type_form;
use crate::domain::common::{collection_page, CollectionResource};

pub struct FeedTypeResource;

impl CollectionResource for FeedTypeResource {
    type Item = FeedType;
    type Detail = FeedType;
    type Form = FeedTypeForm;

    const KEY: &'static str = "feed-types";
    const PAGE_ID: &'static str = "a003_feed_type--list";
    const TITLE: &'static str = "Feed Types";
    const LABEL: &'static str = "Feed type";
    const LIST_PATH: &'static str = "/feed/type";

    fn columns() -> &'static [&'static str] {
        &[
            "Feed type",
            "Category",
            "Description",
            "Minimum stock",
            "Warning stock",
            "Waste ratio",
        ]
    }

    fn cells(item: &FeedType) -> Vec<String> {
        let unit = item.unit.as_ref().map(|u| u.name.as_str()).unwrap_or_default();
        let stock = |value: f64| format!("{} {}", value, unit).trim_end().to_string();
        vec![
            item.feed_type_name.clone(),
            item.feed_category
                .as_ref()
                .map(|c| c.category_name.clone())
                .unwrap_or_else(|| "-".to_string()),
            item.description.clone(),
            stock(item.minimum_stock),
            stock(item.warning_stock),
            item.waste_ratio.to_string(),
        ]
    }

    fn form_from_detail(detail: &FeedType) -> FeedTypeForm {
        FeedTypeForm::from_record(detail)
    }

    fn form_view(form: RwSignal<FeedTypeForm>, errors: RwSignal<FieldErrors>) -> AnyView {
        feed_type_form(form, errors)
    }
}

#[component]
pub fn FeedTypeList() -> impl IntoView {
    collection_page::<FeedTypeResource>()
}
