use contracts::domain::a002_feed_category::{FeedCategory, FeedCategoryForm};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

use crate::domain::a002_feed_category::ui::details::feed_category_form;
use crate::domain::common::{collection_page, CollectionResource};
use crate::shared::date_utils::format_optional;

pub struct FeedCategoryResource;

impl CollectionResource for FeedCategoryResource {
    type Item = FeedCategory;
    type Detail = FeedCategory;
    type Form = FeedCategoryForm;

    const KEY: &'static str = "feed-categories";
    const PAGE_ID: &'static str = "a002_feed_category--list";
    const TITLE: &'static str = "Feed Categories";
    const LABEL: &'static str = "Feed category";
    const LIST_PATH: &'static str = "/feed/categories";

    fn columns() -> &'static [&'static str] {
        &["Category", "Description", "Updated"]
    }

    fn cells(item: &FeedCategory) -> Vec<String> {
        vec![
            item.category_name.clone(),
            item.description.clone(),
            format_optional(item.updated_at.as_deref()),
        ]
    }

    fn form_from_detail(detail: &FeedCategory) -> FeedCategoryForm {
        FeedCategoryForm::from_record(detail)
    }

    fn form_view(form: RwSignal<FeedCategoryForm>, errors: RwSignal<FieldErrors>) -> AnyView {
        feed_category_form(form, errors)
    }
}

#[component]
pub fn FeedCategoryList() -> impl IntoView {
    collection_page::<FeedCategoryResource>()
}
