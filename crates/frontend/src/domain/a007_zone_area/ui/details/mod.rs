use contracts::domain::a007_zone_area::ZoneAreaForm;
use contracts::shared::options::UnitAreaOption;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

use crate::domain::common::form_fields::{bind_text, SelectField, TextField, TextareaField};
use crate::domain::common::options::static_options;

pub fn zone_area_form(form: RwSignal<ZoneAreaForm>, errors: RwSignal<FieldErrors>) -> AnyView {
    let name = bind_text(form, |f| f.name.clone(), |f, v| f.name = v);
    let description = bind_text(form, |f| f.description.clone(), |f, v| f.description = v);
    // The API keeps the unit id as a string
    let unit = bind_text(form, |f| f.unit_id.clone(), |f, v| f.unit_id = v);
    let (units, units_loading) = static_options::<UnitAreaOption>("unit-areas", "/area-unit/all");

    view! {
        <TextField label="Zone area" name="name" value=name errors=errors />
        <TextareaField label="Description" name="description" value=description errors=errors />
        <SelectField
            label="Unit area"
            name="unit_id"
            value=unit
            errors=errors
            options=units
            loading=units_loading
            placeholder="Select unit area"
        />
    }
    .into_any()
}
