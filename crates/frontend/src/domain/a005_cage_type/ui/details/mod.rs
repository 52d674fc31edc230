use contracts::domain::a005_cage_type::CageTypeForm;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

use crate::domain::common::form_fields::named_form;

pub fn cage_type_form(form: RwSignal<CageTypeForm>, errors: RwSignal<FieldErrors>) -> AnyView {
    named_form(form, errors, "Cage type")
}
