//! Field widgets bound to one property of a form struct held in an `RwSignal`.

use contracts::domain::common::NamedForm;
use contracts::shared::options::{OptionRecord, SelectOption};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use thaw::*;

/// Input text bound to one property of `form`, in both directions. Typing
/// writes the parsed value into the form; values written by code (cascade
/// resets, name suggestions) are shown unless the input already reads as
/// the same value.
pub fn bind_field<F, V>(
    form: RwSignal<F>,
    get: fn(&F) -> V,
    set: fn(&mut F, V),
    to_text: fn(&V) -> String,
    parse: fn(&str) -> V,
) -> RwSignal<String>
where
    F: Send + Sync + 'static,
    V: 'static,
{
    let text = RwSignal::new(form.with_untracked(|f| to_text(&get(f))));
    Effect::new(move |_| {
        let value = parse(&text.get());
        form.update(|f| set(f, value));
    });
    Effect::new(move |_| {
        let canonical = form.with(|f| to_text(&get(f)));
        let shown = text.with_untracked(|t| to_text(&parse(t)));
        if canonical != shown {
            text.set(canonical);
        }
    });
    text
}

pub fn bind_text<F>(form: RwSignal<F>, get: fn(&F) -> String, set: fn(&mut F, String)) -> RwSignal<String>
where
    F: Send + Sync + 'static,
{
    bind_field(form, get, set, |v| v.clone(), |raw| raw.to_string())
}

/// Text that does not parse becomes NaN so validation reports it.
pub fn parse_number(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

pub fn bind_number<F>(form: RwSignal<F>, get: fn(&F) -> f64, set: fn(&mut F, f64)) -> RwSignal<String>
where
    F: Send + Sync + 'static,
{
    bind_field(form, get, set, |v| v.to_string(), parse_number)
}

/// Blank stays `None`; anything else must parse.
pub fn parse_optional_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| parse_number(raw))
}

pub fn bind_optional_number<F>(
    form: RwSignal<F>,
    get: fn(&F) -> Option<f64>,
    set: fn(&mut F, Option<f64>),
) -> RwSignal<String>
where
    F: Send + Sync + 'static,
{
    bind_field(
        form,
        get,
        set,
        |v| v.map(|n| n.to_string()).unwrap_or_default(),
        parse_optional_number,
    )
}

/// Empty select value is "nothing chosen".
pub fn parse_selection(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

pub fn selection_text(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub fn bind_selection<F>(
    form: RwSignal<F>,
    get: fn(&F) -> Option<i64>,
    set: fn(&mut F, Option<i64>),
) -> RwSignal<String>
where
    F: Send + Sync + 'static,
{
    bind_field(form, get, set, |v| selection_text(*v), parse_selection)
}

/// Select over string ids (animal UUIDs).
pub fn bind_string_selection<F>(
    form: RwSignal<F>,
    get: fn(&F) -> Option<String>,
    set: fn(&mut F, Option<String>),
) -> RwSignal<String>
where
    F: Send + Sync + 'static,
{
    bind_field(
        form,
        get,
        set,
        |v| v.clone().unwrap_or_default(),
        |raw| Some(raw.trim().to_string()).filter(|id| !id.is_empty()),
    )
}

/// Label, control and the field's validation message.
#[component]
pub fn FormField(
    label: &'static str,
    name: &'static str,
    errors: RwSignal<FieldErrors>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <Label>{label}</Label>
            {children()}
            {move || errors.with(|e| e.get(name).map(|m| view! { <div class="form__error">{m.to_string()}</div> }.into_any()))}
        </div>
    }
}

#[component]
pub fn TextField(
    label: &'static str,
    name: &'static str,
    value: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <FormField label=label name=name errors=errors>
            <Input value=value placeholder=placeholder />
        </FormField>
    }
}

#[component]
pub fn NumberField(
    label: &'static str,
    name: &'static str,
    value: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    view! {
        <FormField label=label name=name errors=errors>
            <Input value=value input_type=InputType::Number />
        </FormField>
    }
}

#[component]
pub fn TextareaField(
    label: &'static str,
    name: &'static str,
    value: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    view! {
        <FormField label=label name=name errors=errors>
            <Textarea value=value resize=TextareaResize::Vertical attr:rows=3 />
        </FormField>
    }
}

/// `YYYY-MM-DD` through the browser date picker.
#[component]
pub fn DateField(
    label: &'static str,
    name: &'static str,
    value: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    view! {
        <FormField label=label name=name errors=errors>
            <input
                type="date"
                class="form__input"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </FormField>
    }
}

/// Native select over option records; disabled while `disabled` holds.
#[component]
pub fn SelectField(
    label: &'static str,
    name: &'static str,
    value: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
    #[prop(into)] options: Signal<Vec<OptionRecord>>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional, into)] loading: Signal<bool>,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() { "Select..." } else { placeholder };

    view! {
        <FormField label=label name=name errors=errors>
            <div class="form__select">
                <select
                    prop:value=move || value.get()
                    disabled=move || disabled.get() || loading.get()
                    on:change=move |ev| value.set(event_target_value(&ev))
                >
                    <option value="">{placeholder}</option>
                    {move || {
                        let current = value.get_untracked();
                        options.get().into_iter().map(|o| {
                            let v = o.value();
                            let selected = v == current;
                            view! { <option value=v selected=selected>{o.label().to_string()}</option> }
                        }).collect_view()
                    }}
                </select>
                <Show when=move || loading.get()>
                    <Spinner size=SpinnerSize::Small />
                </Show>
            </div>
        </FormField>
    }
}

/// Name and description, the whole form of the simple collections.
pub fn named_form(form: RwSignal<NamedForm>, errors: RwSignal<FieldErrors>, name_label: &'static str) -> AnyView {
    let name = bind_text(form, |f| f.name.clone(), |f, v| f.name = v);
    let description = bind_text(form, |f| f.description.clone(), |f, v| f.description = v);

    view! {
        <TextField label=name_label name="name" value=name errors=errors />
        <TextareaField label="Description" name="description" value=description errors=errors />
    }
    .into_any()
}
