use contracts::domain::a004_cage_model::CageModelForm;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

use crate::domain::common::form_fields::named_form;

pub fn cage_model_form(form: RwSignal<CageModelForm>, errors: RwSignal<FieldErrors>) -> AnyView {
    named_form(form, errors, "Cage model")
}
