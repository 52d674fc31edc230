use contracts::domain::a001_family::FamilyForm;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

use crate::domain::common::form_fields::{bind_text, TextField, TextareaField};

pub fn family_form(form: RwSignal<FamilyForm>, errors: RwSignal<FieldErrors>) -> AnyView {
    let family_name = bind_text(form, |f| f.family_name.clone(), |f, v| f.family_name = v);
    let description = bind_text(form, |f| f.description.clone(), |f, v| f.description = v);

    view! {
        <TextField label="Family" name="family_name" value=family_name errors=errors placeholder="e.g. Felidae" />
        <TextareaField label="Description" name="description" value=description errors=errors />
    }
    .into_any()
}
