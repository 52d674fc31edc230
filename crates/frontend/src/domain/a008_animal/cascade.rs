//! Option chains of the animal form.
//!
//! ```text
//! family_id ──> species ──> species names (auto-fills english/latin/local)
//!      └──────────┴──────> parent candidates (father / mother by gender)
//! ```

use contracts::domain::a008_animal::AnimalFormValues;
use contracts::shared::options::{NameLanguage, ParentOption, Sex, SpeciesNameOption, SpeciesOption};

use crate::shared::cascade::{CascadeField, ParentChange, Ticket};

/// Fetches the form needs after a field change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadeRequests {
    pub species: Option<Ticket<i64>>,
    pub species_names: Option<Ticket<i64>>,
    pub parents: Option<Ticket<(i64, i64)>>,
}

impl CascadeRequests {
    pub fn is_empty(&self) -> bool {
        self.species.is_none() && self.species_names.is_none() && self.parents.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct AnimalCascade {
    pub species: CascadeField<i64, SpeciesOption>,
    pub species_names: CascadeField<i64, SpeciesNameOption>,
    pub parents: CascadeField<(i64, i64), ParentOption>,
}

impl Default for AnimalCascade {
    fn default() -> Self {
        Self {
            species: CascadeField::new("species"),
            species_names: CascadeField::new("species_names"),
            parents: CascadeField::new("parents"),
        }
    }
}

fn clear_parents(form: &mut AnimalFormValues) {
    form.father_id = None;
    form.mother_id = None;
}

impl AnimalCascade {
    /// Reconciles the chains with the current form values. Selections that
    /// depend on a changed parent are cleared in `form`.
    pub fn sync(&mut self, form: &mut AnimalFormValues) -> CascadeRequests {
        let mut requests = CascadeRequests::default();

        match self.species.set_parent(form.family_id) {
            ParentChange::Unchanged => {}
            ParentChange::Disabled => form.species_id = None,
            ParentChange::Fetch {
                ticket,
                clear_selection,
            } => {
                if clear_selection {
                    form.species_id = None;
                }
                requests.species = Some(ticket);
            }
        }

        // Names are suggestions; they are never cleared, only overwritten.
        if let ParentChange::Fetch { ticket, .. } = self.species_names.set_parent(form.species_id) {
            requests.species_names = Some(ticket);
        }

        let pair = form.family_id.zip(form.species_id);
        match self.parents.set_parent(pair) {
            ParentChange::Unchanged => {}
            ParentChange::Disabled => clear_parents(form),
            ParentChange::Fetch {
                ticket,
                clear_selection,
            } => {
                if clear_selection {
                    clear_parents(form);
                }
                requests.parents = Some(ticket);
            }
        }

        requests
    }

    /// Applies a species list. A selected species missing from the list is
    /// cleared, which in turn needs another [`AnimalCascade::sync`].
    pub fn apply_species(
        &mut self,
        ticket: &Ticket<i64>,
        options: Vec<SpeciesOption>,
        form: &mut AnimalFormValues,
    ) -> bool {
        if !self.species.resolve(ticket, options) {
            return false;
        }
        if let Some(id) = form.species_id {
            if !self.species.options().iter().any(|s| s.id == id) {
                form.species_id = None;
            }
        }
        true
    }

    /// Applies species names and writes the matched languages into the form.
    pub fn apply_species_names(
        &mut self,
        ticket: &Ticket<i64>,
        options: Vec<SpeciesNameOption>,
        form: &mut AnimalFormValues,
    ) -> bool {
        if !self.species_names.resolve(ticket, options) {
            return false;
        }
        for name in self.species_names.options() {
            match name.language() {
                Some(NameLanguage::English) => form.english_name = name.name.clone(),
                Some(NameLanguage::Latin) => form.latin_name = name.name.clone(),
                Some(NameLanguage::Local) => form.local_name = name.name.clone(),
                None => {}
            }
        }
        true
    }

    pub fn apply_parents(
        &mut self,
        ticket: &Ticket<(i64, i64)>,
        options: Vec<ParentOption>,
        form: &mut AnimalFormValues,
    ) -> bool {
        if !self.parents.resolve(ticket, options) {
            return false;
        }
        if form
            .father_id
            .as_ref()
            .is_some_and(|id| !self.fathers().any(|p| &p.id == id))
        {
            form.father_id = None;
        }
        if form
            .mother_id
            .as_ref()
            .is_some_and(|id| !self.mothers().any(|p| &p.id == id))
        {
            form.mother_id = None;
        }
        true
    }

    fn candidates(&self, sex: Sex) -> impl Iterator<Item = &ParentOption> {
        self.parents
            .options()
            .iter()
            .filter(move |p| p.sex() == Some(sex))
    }

    pub fn fathers(&self) -> impl Iterator<Item = &ParentOption> {
        self.candidates(Sex::Male)
    }

    pub fn mothers(&self) -> impl Iterator<Item = &ParentOption> {
        self.candidates(Sex::Female)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn species(id: i64, family: i64) -> SpeciesOption {
        SpeciesOption {
            id,
            species_name: format!("species {}", id),
            family_id: Some(family),
        }
    }

    fn name(code: &str, text: &str) -> SpeciesNameOption {
        SpeciesNameOption {
            id: 1,
            name: text.into(),
            code: code.into(),
        }
    }

    fn parent(id: &str, gender: &str) -> ParentOption {
        ParentOption {
            id: id.into(),
            animal_name: id.to_uppercase(),
            identifier_code: None,
            gender: gender.into(),
        }
    }

    /// Form with family F1 / species S1 fully resolved.
    fn settled() -> (AnimalCascade, AnimalFormValues) {
        let mut cascade = AnimalCascade::default();
        let mut form = AnimalFormValues {
            family_id: Some(1),
            ..AnimalFormValues::default()
        };
        let requests = cascade.sync(&mut form);
        let species_ticket = requests.species.unwrap();
        cascade.apply_species(&species_ticket, vec![species(10, 1), species(11, 1)], &mut form);

        form.species_id = Some(10);
        let requests = cascade.sync(&mut form);
        assert!(requests.species.is_none());
        cascade.apply_species_names(&requests.species_names.unwrap(), vec![], &mut form);
        cascade.apply_parents(&requests.parents.unwrap(), vec![], &mut form);
        (cascade, form)
    }

    #[test]
    fn test_species_disabled_until_family_set() {
        let mut cascade = AnimalCascade::default();
        let mut form = AnimalFormValues::default();
        assert!(cascade.sync(&mut form).is_empty());
        assert!(cascade.species.is_disabled());
        assert!(cascade.parents.is_disabled());
    }

    #[test]
    fn test_family_change_clears_species_and_list() {
        let (mut cascade, mut form) = settled();
        assert_eq!(form.species_id, Some(10));

        form.family_id = Some(2);
        let requests = cascade.sync(&mut form);
        assert_eq!(form.species_id, None);
        assert!(cascade.species.options().is_empty());
        assert!(cascade.species_names.is_disabled());
        assert!(cascade.parents.is_disabled());
        let f2 = requests.species.unwrap();
        assert_eq!(f2.parent, 2);

        // back to F1 re-fetches instead of reusing the old list
        form.family_id = Some(1);
        let requests = cascade.sync(&mut form);
        assert_eq!(requests.species.map(|t| t.parent), Some(1));
        assert!(cascade.species.is_loading());
    }

    #[test]
    fn test_late_species_list_for_old_family_is_dropped() {
        let mut cascade = AnimalCascade::default();
        let mut form = AnimalFormValues {
            family_id: Some(1),
            ..AnimalFormValues::default()
        };
        let a = cascade.sync(&mut form).species.unwrap();
        form.family_id = Some(2);
        let b = cascade.sync(&mut form).species.unwrap();

        assert!(cascade.apply_species(&b, vec![species(20, 2)], &mut form));
        assert!(!cascade.apply_species(&a, vec![species(10, 1)], &mut form));
        let ids: Vec<i64> = cascade.species.options().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![20]);
    }

    #[test]
    fn test_edit_hydration_keeps_valid_selection() {
        let mut cascade = AnimalCascade::default();
        let mut form = AnimalFormValues {
            family_id: Some(3),
            species_id: Some(11),
            father_id: Some("m-1".into()),
            mother_id: Some("f-9".into()),
            ..AnimalFormValues::default()
        };
        let requests = cascade.sync(&mut form);
        assert_eq!(form.species_id, Some(11));
        assert_eq!(form.father_id.as_deref(), Some("m-1"));

        cascade.apply_species(&requests.species.unwrap(), vec![species(11, 3)], &mut form);
        assert_eq!(form.species_id, Some(11));

        cascade.apply_parents(
            &requests.parents.unwrap(),
            vec![parent("m-1", "Jantan"), parent("f-2", "betina")],
            &mut form,
        );
        assert_eq!(form.father_id.as_deref(), Some("m-1"));
        // not among the fetched candidates
        assert_eq!(form.mother_id, None);
    }

    #[test]
    fn test_species_missing_from_new_list_is_cleared() {
        let mut cascade = AnimalCascade::default();
        let mut form = AnimalFormValues {
            family_id: Some(3),
            species_id: Some(99),
            ..AnimalFormValues::default()
        };
        let requests = cascade.sync(&mut form);
        cascade.apply_species(&requests.species.unwrap(), vec![species(11, 3)], &mut form);
        assert_eq!(form.species_id, None);
        cascade.sync(&mut form);
        assert!(cascade.species_names.is_disabled());
    }

    #[test]
    fn test_species_names_fill_only_matched_languages() {
        let (mut cascade, mut form) = settled();
        form.local_name = "Harimau".into();
        form.latin_name = "typed by hand".into();

        form.species_id = Some(11);
        let ticket = cascade.sync(&mut form).species_names.unwrap();
        cascade.apply_species_names(
            &ticket,
            vec![name("en", "Sumatran tiger"), name("LATIN", "Panthera tigris sumatrae"), name("fr", "Tigre")],
            &mut form,
        );
        assert_eq!(form.english_name, "Sumatran tiger");
        assert_eq!(form.latin_name, "Panthera tigris sumatrae");
        assert_eq!(form.local_name, "Harimau");
    }

    #[test]
    fn test_parents_are_partitioned_by_gender() {
        let (mut cascade, mut form) = settled();
        form.species_id = Some(11);
        let ticket = cascade.sync(&mut form).parents.unwrap();
        cascade.apply_parents(
            &ticket,
            vec![
                parent("a", "Jantan"),
                parent("b", "BETINA"),
                parent("c", "male"),
                parent("d", "unknown"),
            ],
            &mut form,
        );
        let fathers: Vec<&str> = cascade.fathers().map(|p| p.id.as_str()).collect();
        let mothers: Vec<&str> = cascade.mothers().map(|p| p.id.as_str()).collect();
        assert_eq!(fathers, vec!["a", "c"]);
        assert_eq!(mothers, vec!["b"]);
    }

    #[test]
    fn test_species_change_clears_chosen_parents() {
        let (mut cascade, mut form) = settled();
        form.father_id = Some("a".into());
        form.species_id = Some(11);
        cascade.sync(&mut form);
        assert_eq!(form.father_id, None);
    }
}
