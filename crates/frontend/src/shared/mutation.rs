//! Create/update/delete flow shared by every collection screen.
//!
//! The coordinator is plain state: screens keep it in an `RwSignal`, call
//! the transition for each user action and run whatever request the
//! transition hands back. Success invalidates the owning collection in the
//! injected [`QueryCache`].

use super::api_utils::{ApiError, GENERIC_ERROR_MESSAGE};
use super::notify::Notification;
use super::query_cache::{QueryCache, QueryKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormSurface {
    Closed,
    /// Edit requested; waiting for the detail record.
    Loading { id: String },
    Open(FormMode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAction {
    Create,
    Update { id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub id: String,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationCoordinator {
    /// Cache prefix of the owning collection.
    collection: &'static str,
    /// Entity label used in messages, e.g. "Feed category".
    label: &'static str,
    surface: FormSurface,
    pending_delete: Option<DeleteRequest>,
    submitting: bool,
    deleting: bool,
}

impl MutationCoordinator {
    pub fn new(collection: &'static str, label: &'static str) -> Self {
        Self {
            collection,
            label,
            surface: FormSurface::Closed,
            pending_delete: None,
            submitting: false,
            deleting: false,
        }
    }

    pub fn surface(&self) -> &FormSurface {
        &self.surface
    }

    pub fn is_open(&self) -> bool {
        self.surface != FormSurface::Closed
    }

    pub fn is_edit_mode(&self) -> bool {
        matches!(
            self.surface,
            FormSurface::Loading { .. } | FormSurface::Open(FormMode::Edit { .. })
        )
    }

    /// Id whose detail must be fetched; `None` disables the detail query.
    pub fn selected_id(&self) -> Option<&str> {
        match &self.surface {
            FormSurface::Loading { id } | FormSurface::Open(FormMode::Edit { id }) => Some(id),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn pending_delete(&self) -> Option<&DeleteRequest> {
        self.pending_delete.as_ref()
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn open_create(&mut self) {
        self.surface = FormSurface::Open(FormMode::Create);
        self.submitting = false;
    }

    pub fn open_edit(&mut self, id: impl Into<String>) {
        self.surface = FormSurface::Loading { id: id.into() };
        self.submitting = false;
    }

    /// Detail arrived. Ignored unless it is for the record still being opened.
    pub fn detail_loaded(&mut self, id: &str) -> bool {
        match &self.surface {
            FormSurface::Loading { id: waiting } if waiting == id => {
                self.surface = FormSurface::Open(FormMode::Edit { id: id.to_string() });
                true
            }
            _ => false,
        }
    }

    pub fn detail_failed(&mut self, id: &str, error: &ApiError) -> Option<Notification> {
        match &self.surface {
            FormSurface::Loading { id: waiting } if waiting == id => {
                log::error!("{}: failed to load {}: {}", self.collection, id, error);
                self.surface = FormSurface::Closed;
                Some(Notification::error(
                    error.user_message(&format!("Failed to load {}", self.label.to_lowercase())),
                ))
            }
            _ => None,
        }
    }

    pub fn close(&mut self) {
        self.surface = FormSurface::Closed;
        self.submitting = false;
    }

    /// Request to run for a validated submit; `None` while one is in flight
    /// or no form is ready.
    pub fn submit_action(&mut self) -> Option<SubmitAction> {
        if self.submitting {
            return None;
        }
        let action = match &self.surface {
            FormSurface::Open(FormMode::Create) => SubmitAction::Create,
            FormSurface::Open(FormMode::Edit { id }) => SubmitAction::Update { id: id.clone() },
            _ => return None,
        };
        self.submitting = true;
        Some(action)
    }

    pub fn submit_succeeded(&mut self, cache: &dyn QueryCache) -> Notification {
        let verb = if self.is_edit_mode() { "updated" } else { "created" };
        self.surface = FormSurface::Closed;
        self.submitting = false;
        cache.invalidate(&QueryKey::new(self.collection));
        log::info!("{}: record {}", self.collection, verb);
        Notification::success(format!("{} {} successfully", self.label, verb))
    }

    /// Keeps the form open with its values.
    pub fn submit_failed(&mut self, error: &ApiError) -> Notification {
        self.submitting = false;
        log::error!("{}: save failed: {}", self.collection, error);
        Notification::error(error.user_message(GENERIC_ERROR_MESSAGE))
    }

    pub fn request_delete(&mut self, id: impl Into<String>, display_name: impl Into<String>) {
        self.pending_delete = Some(DeleteRequest {
            id: id.into(),
            display_name: display_name.into(),
        });
        self.deleting = false;
    }

    pub fn cancel_delete(&mut self) {
        if !self.deleting {
            self.pending_delete = None;
        }
    }

    /// The id to delete. Only reachable through a pending confirmation.
    pub fn confirm_delete(&mut self) -> Option<String> {
        if self.deleting {
            return None;
        }
        let id = self.pending_delete.as_ref()?.id.clone();
        self.deleting = true;
        Some(id)
    }

    pub fn delete_succeeded(&mut self, cache: &dyn QueryCache) -> Notification {
        let name = self
            .pending_delete
            .take()
            .map(|d| d.display_name)
            .unwrap_or_default();
        self.deleting = false;
        cache.invalidate(&QueryKey::new(self.collection));
        log::info!("{}: deleted '{}'", self.collection, name);
        Notification::success(format!("{} '{}' deleted", self.label, name))
    }

    /// Keeps the confirmation open so the user can retry or cancel.
    pub fn delete_failed(&mut self, error: &ApiError) -> Notification {
        self.deleting = false;
        log::error!("{}: delete failed: {}", self.collection, error);
        Notification::error(error.user_message(GENERIC_ERROR_MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notify::NotificationKind;
    use crate::shared::query_cache::{read, write, MemoryQueryCache, DEFAULT_STALE_TIME};

    fn seeded_cache() -> MemoryQueryCache {
        let cache = MemoryQueryCache::new();
        write(&cache, QueryKey::new("feed-categories").with("list").with(1), 1u8, DEFAULT_STALE_TIME);
        write(&cache, QueryKey::new("feed-types").with("list").with(1), 2u8, DEFAULT_STALE_TIME);
        cache
    }

    #[test]
    fn test_create_flow_invalidates_owning_collection() {
        let cache = seeded_cache();
        let mut flow = MutationCoordinator::new("feed-categories", "Feed category");

        flow.open_create();
        assert_eq!(flow.selected_id(), None);
        assert_eq!(flow.submit_action(), Some(SubmitAction::Create));
        // double submit is swallowed
        assert_eq!(flow.submit_action(), None);

        let note = flow.submit_succeeded(&cache);
        assert_eq!(note.kind, NotificationKind::Success);
        assert_eq!(note.message, "Feed category created successfully");
        assert!(!flow.is_open());
        assert_eq!(read::<u8>(&cache, &QueryKey::new("feed-categories").with("list").with(1)), None);
        assert_eq!(read::<u8>(&cache, &QueryKey::new("feed-types").with("list").with(1)), Some(2));
    }

    #[test]
    fn test_edit_flow_waits_for_detail() {
        let mut flow = MutationCoordinator::new("animals", "Animal");
        flow.open_edit("abc123");
        assert_eq!(flow.selected_id(), Some("abc123"));
        assert_eq!(flow.surface(), &FormSurface::Loading { id: "abc123".into() });
        assert_eq!(flow.submit_action(), None);

        assert!(!flow.detail_loaded("other"));
        assert!(flow.detail_loaded("abc123"));
        assert_eq!(
            flow.submit_action(),
            Some(SubmitAction::Update { id: "abc123".into() })
        );
    }

    #[test]
    fn test_stale_detail_after_reopen_is_ignored() {
        let mut flow = MutationCoordinator::new("animals", "Animal");
        flow.open_edit("a");
        flow.open_edit("b");
        assert!(!flow.detail_loaded("a"));
        assert!(flow.detail_loaded("b"));
    }

    #[test]
    fn test_failed_submit_keeps_form_open() {
        let mut flow = MutationCoordinator::new("families", "Family");
        flow.open_edit("7");
        flow.detail_loaded("7");
        flow.submit_action();

        let error = ApiError::Server {
            status: 422,
            message: Some("Family name already used".into()),
        };
        let note = flow.submit_failed(&error);
        assert_eq!(note, Notification::error("Family name already used"));
        assert!(flow.is_open());
        assert!(!flow.is_submitting());
        assert_eq!(flow.selected_id(), Some("7"));

        let note = flow.submit_failed(&ApiError::Network("offline".into()));
        assert_eq!(note.message, GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_detail_failure_closes_surface() {
        let mut flow = MutationCoordinator::new("families", "Family");
        flow.open_edit("7");
        let note = flow.detail_failed("7", &ApiError::Network("offline".into()));
        assert_eq!(note.map(|n| n.kind), Some(NotificationKind::Error));
        assert!(!flow.is_open());
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let cache = seeded_cache();
        let mut flow = MutationCoordinator::new("feed-categories", "Feed category");
        assert_eq!(flow.confirm_delete(), None);

        flow.request_delete("5", "Buah");
        assert_eq!(flow.confirm_delete(), Some("5".into()));
        assert_eq!(flow.confirm_delete(), None);

        let note = flow.delete_succeeded(&cache);
        assert_eq!(note.message, "Feed category 'Buah' deleted");
        assert_eq!(flow.pending_delete(), None);
        assert!(cache.invalidate(&QueryKey::new("feed-categories")) == 0);
    }

    #[test]
    fn test_failed_delete_keeps_confirmation() {
        let mut flow = MutationCoordinator::new("cage-types", "Cage type");
        flow.request_delete("9", "Aviary");
        flow.confirm_delete();
        let error = ApiError::Server {
            status: 409,
            message: Some("Cage type is in use".into()),
        };
        assert_eq!(flow.delete_failed(&error).message, "Cage type is in use");
        assert_eq!(flow.pending_delete().map(|d| d.id.as_str()), Some("9"));

        flow.cancel_delete();
        assert_eq!(flow.pending_delete(), None);
    }
}
