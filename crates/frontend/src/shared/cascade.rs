//! Dependent option lists.
//!
//! A [`CascadeField`] follows one parent value. Changing the parent hands out
//! a [`Ticket`]; a fetched option list is applied only while its ticket is
//! the latest one for the field, so a slow response for an old parent value
//! can never overwrite the list of the current one.

use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeStatus {
    /// Parent unset.
    Disabled,
    /// Parent set, nothing in flight, last fetch failed or was never issued.
    Idle,
    Loading,
    Populated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket<P> {
    pub parent: P,
    seq: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParentChange<P> {
    Unchanged,
    /// Parent became unset; the dependent selection must be cleared.
    Disabled,
    /// Options must be fetched for `ticket.parent`. `clear_selection` is set
    /// when the parent moved from one value to another.
    Fetch { ticket: Ticket<P>, clear_selection: bool },
}

#[derive(Debug, Clone)]
pub struct CascadeField<P, O> {
    name: &'static str,
    parent: Option<P>,
    status: CascadeStatus,
    options: Vec<O>,
    seq: u64,
}

impl<P, O> CascadeField<P, O>
where
    P: Clone + PartialEq + Debug,
{
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            parent: None,
            status: CascadeStatus::Disabled,
            options: Vec::new(),
            seq: 0,
        }
    }

    pub fn status(&self) -> CascadeStatus {
        self.status
    }

    pub fn is_disabled(&self) -> bool {
        self.status == CascadeStatus::Disabled
    }

    pub fn is_loading(&self) -> bool {
        self.status == CascadeStatus::Loading
    }

    pub fn parent(&self) -> Option<&P> {
        self.parent.as_ref()
    }

    pub fn options(&self) -> &[O] {
        &self.options
    }

    /// Feeds the current parent value. Options for a previous value are
    /// discarded on every change, never reused.
    pub fn set_parent(&mut self, parent: Option<P>) -> ParentChange<P> {
        if self.parent == parent {
            return ParentChange::Unchanged;
        }
        let had_parent = self.parent.is_some();
        self.parent = parent.clone();
        self.options.clear();
        self.seq += 1;

        match parent {
            None => {
                self.status = CascadeStatus::Disabled;
                ParentChange::Disabled
            }
            Some(parent) => {
                self.status = CascadeStatus::Loading;
                ParentChange::Fetch {
                    ticket: Ticket {
                        parent,
                        seq: self.seq,
                    },
                    clear_selection: had_parent,
                }
            }
        }
    }

    fn is_current(&self, ticket: &Ticket<P>) -> bool {
        ticket.seq == self.seq && self.parent.as_ref() == Some(&ticket.parent)
    }

    /// Applies fetched options. Returns `false` and drops them when the
    /// ticket has been superseded.
    pub fn resolve(&mut self, ticket: &Ticket<P>, options: Vec<O>) -> bool {
        if !self.is_current(ticket) {
            log::debug!(
                "{}: dropping stale options for {:?} (seq {} < {})",
                self.name,
                ticket.parent,
                ticket.seq,
                self.seq
            );
            return false;
        }
        self.options = options;
        self.status = CascadeStatus::Populated;
        true
    }

    pub fn fail(&mut self, ticket: &Ticket<P>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.options.clear();
        self.status = CascadeStatus::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetch_ticket(change: ParentChange<i64>) -> (Ticket<i64>, bool) {
        match change {
            ParentChange::Fetch {
                ticket,
                clear_selection,
            } => (ticket, clear_selection),
            other => panic!("expected a fetch, got {:?}", other),
        }
    }

    #[test]
    fn test_starts_disabled() {
        let field: CascadeField<i64, &str> = CascadeField::new("species");
        assert!(field.is_disabled());
        assert!(field.options().is_empty());
    }

    #[test]
    fn test_first_parent_fetches_without_clearing() {
        let mut field: CascadeField<i64, &str> = CascadeField::new("species");
        let (ticket, clear) = fetch_ticket(field.set_parent(Some(1)));
        assert!(!clear);
        assert!(field.is_loading());
        assert!(field.resolve(&ticket, vec!["harimau"]));
        assert_eq!(field.status(), CascadeStatus::Populated);
        assert_eq!(field.set_parent(Some(1)), ParentChange::Unchanged);
    }

    #[test]
    fn test_parent_change_discards_and_refetches() {
        let mut field: CascadeField<i64, &str> = CascadeField::new("species");
        let (t1, _) = fetch_ticket(field.set_parent(Some(1)));
        field.resolve(&t1, vec!["harimau"]);

        let (t2, clear) = fetch_ticket(field.set_parent(Some(2)));
        assert!(clear);
        assert!(field.options().is_empty());
        field.resolve(&t2, vec!["elang"]);

        // back to the first parent: a fresh fetch, not the old list
        let (t3, clear) = fetch_ticket(field.set_parent(Some(1)));
        assert!(clear);
        assert!(field.options().is_empty());
        assert_ne!(t1, t3);
        assert!(!field.resolve(&t1, vec!["stale"]));
        assert!(field.resolve(&t3, vec!["harimau"]));
    }

    #[test]
    fn test_late_response_for_old_parent_is_dropped() {
        let mut field: CascadeField<i64, &str> = CascadeField::new("species");
        let (a, _) = fetch_ticket(field.set_parent(Some(1)));
        let (b, _) = fetch_ticket(field.set_parent(Some(2)));

        assert!(field.resolve(&b, vec!["elang"]));
        assert!(!field.resolve(&a, vec!["harimau"]));
        assert_eq!(field.options(), &["elang"]);
        assert_eq!(field.status(), CascadeStatus::Populated);
    }

    #[test]
    fn test_unsetting_parent_disables() {
        let mut field: CascadeField<i64, &str> = CascadeField::new("species");
        let (ticket, _) = fetch_ticket(field.set_parent(Some(1)));
        assert_eq!(field.set_parent(None), ParentChange::Disabled);
        assert!(field.is_disabled());
        assert!(!field.resolve(&ticket, vec!["harimau"]));
        assert!(field.options().is_empty());
    }

    #[test]
    fn test_failed_fetch_goes_idle() {
        let mut field: CascadeField<i64, &str> = CascadeField::new("species");
        let (ticket, _) = fetch_ticket(field.set_parent(Some(1)));
        assert!(field.fail(&ticket));
        assert_eq!(field.status(), CascadeStatus::Idle);
    }
}
