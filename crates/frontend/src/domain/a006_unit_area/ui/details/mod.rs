use contracts::domain::a006_unit_area::UnitAreaForm;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

use crate::domain::common::form_fields::named_form;

pub fn unit_area_form(form: RwSignal<UnitAreaForm>, errors: RwSignal<FieldErrors>) -> AnyView {
    named_form(form, errors, "Unit area")
}
