//! Animal create/edit form.
//!
//! Family and species drive three dependent lists through [`AnimalCascade`];
//! every other select is a static list loaded once per session.

use contracts::domain::a008_animal::AnimalFormValues;
use contracts::shared::api::ApiResponse;
use contracts::shared::options::{
    to_records, BaseOption, FamilyOption, OptionRecord, ParentOption, SpeciesNameOption,
    SpeciesOption, UnitOption,
};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a008_animal::cascade::{AnimalCascade, CascadeRequests};
use crate::domain::common::form_fields::{
    bind_field, bind_optional_number, bind_number, bind_selection, bind_string_selection,
    bind_text, DateField, NumberField, SelectField, TextField, TextareaField,
};
use crate::domain::common::options::static_options;
use crate::shared::api_utils::{use_api, ApiClient, ApiError};
use crate::shared::cascade::Ticket;
use crate::shared::query_cache::{cached, use_query_cache, QueryKey, SharedQueryCache, DEFAULT_STALE_TIME};

async fn fetch_list<T: DeserializeOwned>(api: &ApiClient, path: &str, query: &str) -> Result<Vec<T>, ApiError> {
    let response: ApiResponse<Vec<T>> = api.get(path, query).await?;
    Ok(response.data)
}

fn species_path(family_id: i64) -> String {
    format!("/animal/species/family/{}", family_id)
}

fn species_names_path(species_id: i64) -> String {
    format!("/animal/species-name/species/{}", species_id)
}

fn species_key(family_id: i64) -> QueryKey {
    QueryKey::new("species").with("family").with(family_id)
}

fn species_names_key(species_id: i64) -> QueryKey {
    QueryKey::new("species-names").with("species").with(species_id)
}

fn parents_key(family_id: i64, species_id: i64) -> QueryKey {
    QueryKey::new("animals").with("parents").with(family_id).with(species_id)
}

/// Reconciles the cascade with the form and starts the fetches it asks for.
fn run_cascade(
    api: ApiClient,
    cache: SharedQueryCache,
    form: RwSignal<AnimalFormValues>,
    cascade: RwSignal<AnimalCascade>,
) {
    let mut values = form.get_untracked();
    let Some(requests) = cascade.try_update(|c| c.sync(&mut values)) else {
        return;
    };
    if form.with_untracked(|f| *f != values) {
        form.set(values);
    }
    if requests.is_empty() {
        return;
    }
    let CascadeRequests {
        species,
        species_names,
        parents,
    } = requests;

    if let Some(ticket) = species {
        let cache = cache.clone();
        spawn_local(async move {
            let family_id = ticket.parent;
            let path = species_path(family_id);
            let outcome = cached(cache.as_ref(), species_key(family_id), DEFAULT_STALE_TIME, || {
                fetch_list::<SpeciesOption>(&api, &path, "")
            })
            .await;
            apply(form, cascade, &ticket, outcome, |c, t, list, f| c.apply_species(t, list, f), |c, t| {
                c.species.fail(t)
            });
            // A cleared species changes the downstream chains
            run_cascade(api, cache, form, cascade);
        });
    }

    if let Some(ticket) = species_names {
        let cache = cache.clone();
        spawn_local(async move {
            let species_id = ticket.parent;
            let path = species_names_path(species_id);
            let outcome = cached(cache.as_ref(), species_names_key(species_id), DEFAULT_STALE_TIME, || {
                fetch_list::<SpeciesNameOption>(&api, &path, "")
            })
            .await;
            apply(form, cascade, &ticket, outcome, |c, t, list, f| c.apply_species_names(t, list, f), |c, t| {
                c.species_names.fail(t)
            });
        });
    }

    if let Some(ticket) = parents {
        spawn_local(async move {
            let (family_id, species_id) = ticket.parent;
            let query = format!("family_id={}&species_id={}", family_id, species_id);
            let outcome = cached(cache.as_ref(), parents_key(family_id, species_id), DEFAULT_STALE_TIME, || {
                fetch_list::<ParentOption>(&api, "/animal/detail-list", &query)
            })
            .await;
            apply(form, cascade, &ticket, outcome, |c, t, list, f| c.apply_parents(t, list, f), |c, t| {
                c.parents.fail(t)
            });
        });
    }
}

/// Applies one fetched list if its ticket is still current.
fn apply<P, O>(
    form: RwSignal<AnimalFormValues>,
    cascade: RwSignal<AnimalCascade>,
    ticket: &Ticket<P>,
    outcome: Result<Vec<O>, ApiError>,
    resolve: fn(&mut AnimalCascade, &Ticket<P>, Vec<O>, &mut AnimalFormValues) -> bool,
    fail: fn(&mut AnimalCascade, &Ticket<P>) -> bool,
) where
    P: std::fmt::Debug,
{
    match outcome {
        Ok(list) => {
            let mut values = form.get_untracked();
            let applied = cascade
                .try_update(|c| resolve(c, ticket, list, &mut values))
                .unwrap_or(false);
            if !applied {
                log::debug!("cascade: dropped stale options for {:?}", ticket.parent);
                return;
            }
            if form.with_untracked(|f| *f != values) {
                form.set(values);
            }
        }
        Err(e) => {
            log::error!("cascade: options for {:?} failed: {}", ticket.parent, e);
            cascade.update(|c| {
                fail(c, ticket);
            });
        }
    }
}

pub fn animal_form(form: RwSignal<AnimalFormValues>, errors: RwSignal<FieldErrors>) -> AnyView {
    let api = use_api();
    let cache = use_query_cache();
    let cascade = RwSignal::new(AnimalCascade::default());

    let parents = Memo::new(move |_| form.with(|f| (f.family_id, f.species_id)));
    Effect::new(move |_| {
        parents.track();
        run_cascade(api, cache.clone(), form, cascade);
    });

    let animal_name = bind_text(form, |f| f.animal_name.clone(), |f, v| f.animal_name = v);
    let identifier_code = bind_text(form, |f| f.identifier_code.clone(), |f, v| f.identifier_code = v);
    let marker_code = bind_text(form, |f| f.marker_code.clone(), |f, v| f.marker_code = v);
    let family = bind_selection(form, |f| f.family_id, |f, v| f.family_id = v);
    let species = bind_selection(form, |f| f.species_id, |f, v| f.species_id = v);
    let english_name = bind_text(form, |f| f.english_name.clone(), |f, v| f.english_name = v);
    let latin_name = bind_text(form, |f| f.latin_name.clone(), |f, v| f.latin_name = v);
    let local_name = bind_text(form, |f| f.local_name.clone(), |f, v| f.local_name = v);
    let classification = bind_selection(
        form,
        |f| f.animal_classification_id,
        |f, v| f.animal_classification_id = v,
    );
    let animal_type = bind_selection(form, |f| f.animal_type_id, |f, v| f.animal_type_id = v);
    let entity = bind_selection(form, |f| f.animal_entity_id, |f, v| f.animal_entity_id = v);
    let status = bind_selection(form, |f| f.animal_status_id, |f, v| f.animal_status_id = v);
    let iucn = bind_selection(form, |f| f.iucn_status, |f, v| f.iucn_status = v);
    let gender = bind_selection(form, |f| f.animal_genders_id, |f, v| f.animal_genders_id = v);
    let age_group = bind_selection(form, |f| f.animal_age_group_id, |f, v| f.animal_age_group_id = v);
    let area = bind_selection(form, |f| f.animal_area_id, |f, v| f.animal_area_id = v);
    let weight = bind_optional_number(form, |f| f.weight_length, |f, v| f.weight_length = v);
    let weight_unit = bind_selection(form, |f| f.weight_unit_id, |f, v| f.weight_unit_id = v);
    let body_length = bind_optional_number(form, |f| f.body_length, |f, v| f.body_length = v);
    let length_unit = bind_selection(form, |f| f.unit_id, |f, v| f.unit_id = v);
    let hatching_date = bind_text(form, |f| f.hatching_date.clone(), |f, v| f.hatching_date = v);
    let arrival_date = bind_text(form, |f| f.arrival_date.clone(), |f, v| f.arrival_date = v);
    let father = bind_string_selection(form, |f| f.father_id.clone(), |f, v| f.father_id = v);
    let mother = bind_string_selection(form, |f| f.mother_id.clone(), |f, v| f.mother_id = v);
    let feed_percentage = bind_number(form, |f| f.feed_percentage, |f, v| f.feed_percentage = v);
    let komunal_quantity = bind_field(
        form,
        |f| f.komunal_quantity,
        |f, v| f.komunal_quantity = v,
        |v| v.to_string(),
        |raw| raw.trim().parse().unwrap_or(0),
    );
    let noted = bind_text(form, |f| f.noted.clone(), |f, v| f.noted = v);
    let show_detail = RwSignal::new(form.with_untracked(|f| f.show_detail));
    Effect::new(move |_| {
        let value = show_detail.get();
        form.update(|f| f.show_detail = value);
    });

    let (families, families_loading) = static_options::<FamilyOption>("families", "/animal/family?all=true");
    let (genders, genders_loading) = static_options::<BaseOption>("animal-genders", "/animal/gender");
    let (age_groups, age_groups_loading) = static_options::<BaseOption>("animal-age-groups", "/animal/age-group");
    let (areas, areas_loading) = static_options::<BaseOption>("animal-areas", "/animal/area");
    let (classifications, classifications_loading) =
        static_options::<BaseOption>("animal-classifications", "/animal/classification");
    let (entities, entities_loading) = static_options::<BaseOption>("animal-entities", "/animal/entity");
    let (iucn_statuses, iucn_loading) = static_options::<BaseOption>("iucn-statuses", "/animal/iucn-status");
    let (statuses, statuses_loading) = static_options::<BaseOption>("animal-statuses", "/animal/status");
    let (types, types_loading) = static_options::<BaseOption>("animal-types", "/animal/type");
    let (units, units_loading) = static_options::<UnitOption>("units", "/unit");

    let species_options =
        Signal::derive(move || cascade.with(|c| to_records(c.species.options().to_vec())));
    let fathers = Signal::derive(move || {
        cascade.with(|c| c.fathers().cloned().map(OptionRecord::from).collect::<Vec<_>>())
    });
    let mothers = Signal::derive(move || {
        cascade.with(|c| c.mothers().cloned().map(OptionRecord::from).collect::<Vec<_>>())
    });
    let species_disabled = Signal::derive(move || cascade.with(|c| c.species.is_disabled()));
    let species_loading = Signal::derive(move || cascade.with(|c| c.species.is_loading()));
    let parents_disabled = Signal::derive(move || cascade.with(|c| c.parents.is_disabled()));
    let parents_loading = Signal::derive(move || cascade.with(|c| c.parents.is_loading()));
    let names_loading = Signal::derive(move || cascade.with(|c| c.species_names.is_loading()));

    view! {
        <div class="form__section">
            <h3 class="form__section-title">"Identity"</h3>
            <TextField label="Animal name" name="animal_name" value=animal_name errors=errors />
            <div class="form__row">
                <TextField label="Identifier code" name="identifier_code" value=identifier_code errors=errors />
                <TextField label="Marker code" name="marker_code" value=marker_code errors=errors />
            </div>
        </div>

        <div class="form__section">
            <h3 class="form__section-title">"Taxonomy"</h3>
            <div class="form__row">
                <SelectField
                    label="Family"
                    name="family_id"
                    value=family
                    errors=errors
                    options=families
                    loading=families_loading
                    placeholder="Select family"
                />
                <SelectField
                    label="Species"
                    name="species_id"
                    value=species
                    errors=errors
                    options=species_options
                    disabled=species_disabled
                    loading=species_loading
                    placeholder="Select species"
                />
            </div>
            <div class="form__row">
                <TextField label="English name" name="english_name" value=english_name errors=errors />
                <TextField label="Latin name" name="latin_name" value=latin_name errors=errors />
                <TextField label="Local name" name="local_name" value=local_name errors=errors />
            </div>
            <Show when=move || names_loading.get()>
                <div class="form__hint">
                    <Spinner size=SpinnerSize::Small />
                    " Looking up species names..."
                </div>
            </Show>
        </div>

        <div class="form__section">
            <h3 class="form__section-title">"Classification"</h3>
            <div class="form__row">
                <SelectField label="Classification" name="animal_classification_id" value=classification errors=errors options=classifications loading=classifications_loading />
                <SelectField label="Type" name="animal_type_id" value=animal_type errors=errors options=types loading=types_loading />
                <SelectField label="Entity" name="animal_entity_id" value=entity errors=errors options=entities loading=entities_loading />
            </div>
            <div class="form__row">
                <SelectField label="Status" name="animal_status_id" value=status errors=errors options=statuses loading=statuses_loading />
                <SelectField label="IUCN status" name="iucn_status" value=iucn errors=errors options=iucn_statuses loading=iucn_loading />
            </div>
            <div class="form__row">
                <SelectField label="Gender" name="animal_genders_id" value=gender errors=errors options=genders loading=genders_loading />
                <SelectField label="Age group" name="animal_age_group_id" value=age_group errors=errors options=age_groups loading=age_groups_loading />
                <SelectField label="Area" name="animal_area_id" value=area errors=errors options=areas loading=areas_loading />
            </div>
        </div>

        <div class="form__section">
            <h3 class="form__section-title">"Measurements"</h3>
            <div class="form__row">
                <NumberField label="Weight" name="weight_length" value=weight errors=errors />
                <SelectField label="Weight unit" name="weight_unit_id" value=weight_unit errors=errors options=units loading=units_loading />
            </div>
            <div class="form__row">
                <NumberField label="Body length" name="body_length" value=body_length errors=errors />
                <SelectField label="Length unit" name="unit_id" value=length_unit errors=errors options=units loading=units_loading />
            </div>
            <div class="form__row">
                <DateField label="Hatching date" name="hatching_date" value=hatching_date errors=errors />
                <DateField label="Arrival date" name="arrival_date" value=arrival_date errors=errors />
            </div>
        </div>

        <div class="form__section">
            <h3 class="form__section-title">"Lineage"</h3>
            <div class="form__row">
                <SelectField
                    label="Father"
                    name="father_id"
                    value=father
                    errors=errors
                    options=fathers
                    disabled=parents_disabled
                    loading=parents_loading
                    placeholder="Select father"
                />
                <SelectField
                    label="Mother"
                    name="mother_id"
                    value=mother
                    errors=errors
                    options=mothers
                    disabled=parents_disabled
                    loading=parents_loading
                    placeholder="Select mother"
                />
            </div>
        </div>

        <div class="form__section">
            <h3 class="form__section-title">"Care"</h3>
            <div class="form__row">
                <NumberField label="Feed percentage" name="feed_percentage" value=feed_percentage errors=errors />
                <NumberField label="Communal quantity" name="komunal_quantity" value=komunal_quantity errors=errors />
            </div>
            <TextareaField label="Notes" name="noted" value=noted errors=errors />
            <Checkbox checked=show_detail label="Show detail" />
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cascade_keys_do_not_overlap_animal_lists() {
        let parents = parents_key(3, 11);
        assert!(parents.starts_with(&QueryKey::new("animals")));
        assert_eq!(parents.to_string(), "animals/parents/3/11");
        assert!(!species_key(3).starts_with(&QueryKey::new("species-names")));
        assert_eq!(species_names_key(11).to_string(), "species-names/species/11");
    }

    #[test]
    fn test_cascade_endpoints() {
        assert_eq!(species_path(3), "/animal/species/family/3");
        assert_eq!(species_names_path(11), "/animal/species-name/species/11");
    }
}
