use contracts::domain::a003_feed_type::FeedTypeForm;
use contracts::shared::options::{FeedCategoryOption, UnitOption};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

use crate::domain::common::form_fields::{
    bind_number, bind_selection, bind_text, NumberField, SelectField, TextField, TextareaField,
};
use crate::domain::common::options::static_options;

pub fn feed_type_form(form: RwSignal<FeedTypeForm>, errors: RwSignal<FieldErrors>) -> AnyView {
    let name = bind_text(form, |f| f.feed_type_name.clone(), |f, v| f.feed_type_name = v);
    let description = bind_text(form, |f| f.description.clone(), |f, v| f.description = v);
    let category = bind_selection(form, |f| f.feed_category_id, |f, v| f.feed_category_id = v);
    let unit = bind_selection(form, |f| f.unit_id, |f, v| f.unit_id = v);
    let minimum = bind_number(form, |f| f.minimum_stock, |f, v| f.minimum_stock = v);
    let warning = bind_number(form, |f| f.warning_stock, |f, v| f.warning_stock = v);
    let waste = bind_number(form, |f| f.waste_ratio, |f, v| f.waste_ratio = v);

    let (categories, categories_loading) =
        static_options::<FeedCategoryOption>("feed-categories", "/feed/categories?all=true");
    let (units, units_loading) = static_options::<UnitOption>("units", "/unit");

    view! {
        <TextField label="Feed type" name="feed_type_name" value=name errors=errors />
        <TextareaField label="Description" name="description" value=description errors=errors />
        <div class="form__row">
            <SelectField
                label="Category"
                name="feed_category_id"
                value=category
                errors=errors
                options=categories
                loading=categories_loading
                placeholder="Select category"
            />
            <SelectField
                label="Unit"
                name="unit_id"
                value=unit
                errors=errors
                options=units
                loading=units_loading
                placeholder="Select unit"
            />
        </div>
        <div class="form__row">
            <NumberField label="Minimum stock" name="minimum_stock" value=minimum errors=errors />
            <NumberField label="Warning stock" name="warning_stock" value=warning errors=errors />
            <NumberField label="Waste ratio" name="waste_ratio" value=waste errors=errors />
        </div>
    }
    .into_any()
}
