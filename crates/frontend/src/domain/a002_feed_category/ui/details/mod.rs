use contracts::domain::a002_feed_category::FeedCategoryForm;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

use crate::domain::common::form_fields::{bind_text, TextField, TextareaField};

pub fn feed_category_form(form: RwSignal<FeedCategoryForm>, errors: RwSignal<FieldErrors>) -> AnyView {
    let category_name = bind_text(form, |f| f.category_name.clone(), |f, v| f.category_name = v);
    let description = bind_text(form, |f| f.description.clone(), |f, v| f.description = v);

    view! {
        <TextField label="Category" name="category_name" value=category_name errors=errors placeholder="e.g. Fruit" />
        <TextareaField label="Description" name="description" value=description errors=errors />
    }
    .into_any()
}
