use serde::Serialize;

use crate::error::{Error, Result};
use crate::models::{ApplicantField, ApplicantRecord, FieldValue};
use crate::store::AppStore;
use crate::workflow::validation::{validate_draft, FieldErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EditPhase {
    Closed,
    Editing,
    ConfirmingDiscard,
    Submitting,
}

/// One in-progress edit of a single applicant.
#[derive(Debug, Clone)]
pub struct EditSession {
    draft: ApplicantRecord,
    errors: FieldErrors,
    dirty: bool,
    confirming_discard: bool,
    submitting: bool,
    submit_error: Option<String>,
}

impl EditSession {
    fn new(record: ApplicantRecord) -> Self {
        Self {
            draft: record,
            errors: FieldErrors::new(),
            dirty: false,
            confirming_discard: false,
            submitting: false,
            submit_error: None,
        }
    }

    pub fn id(&self) -> i64 {
        self.draft.id
    }

    pub fn draft(&self) -> &ApplicantRecord {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_confirming_discard(&self) -> bool {
        self.confirming_discard
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn can_submit(&self) -> bool {
        self.dirty && !self.confirming_discard && !self.submitting
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CloseOutcome {
    Closed,
    ConfirmationRequired,
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Nothing to submit: no session, nothing changed, or a dialog is open.
    Ignored,
    Invalid(FieldErrors),
    Saved(ApplicantRecord),
    Failed(String),
}

/// Holds a session in the submitting state until dropped.
struct SubmittingGuard<'a>(&'a mut EditSession);

impl<'a> SubmittingGuard<'a> {
    fn enter(session: &'a mut EditSession) -> Self {
        session.submitting = true;
        Self(session)
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.0.submitting = false;
    }
}

#[derive(Debug, Default)]
pub struct EditWorkflow {
    session: Option<EditSession>,
}

impl EditWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    pub fn phase(&self) -> EditPhase {
        match &self.session {
            None => EditPhase::Closed,
            Some(s) if s.submitting => EditPhase::Submitting,
            Some(s) if s.confirming_discard => EditPhase::ConfirmingDiscard,
            Some(_) => EditPhase::Editing,
        }
    }

    /// Starts editing the cached applicant `id`.
    ///
    /// A clean session on another record is replaced; a dirty one blocks the switch.
    pub fn open(&mut self, store: &mut AppStore, id: i64) -> Result<&EditSession> {
        if let Some(current) = &self.session {
            if current.dirty || current.confirming_discard {
                return Err(Error::EditInProgress(current.id()));
            }
        }

        let record = store.find(id).cloned().ok_or(Error::RecordNotFound(id))?;
        store.begin_edit(Some(record.clone()));
        tracing::debug!(id, "Edit session opened");
        Ok(&*self.session.insert(EditSession::new(record)))
    }

    pub fn change_field(&mut self, field: ApplicantField, value: FieldValue) -> Result<()> {
        let session = match self.session.as_mut() {
            Some(s) if !s.confirming_discard && !s.submitting => s,
            _ => return Err(Error::NotEditing),
        };

        session.draft.set_field(field, value)?;
        session.dirty = true;
        Ok(())
    }

    pub fn request_close(&mut self, store: &mut AppStore) -> CloseOutcome {
        let Some(session) = self.session.as_mut() else {
            return CloseOutcome::Ignored;
        };
        if session.submitting {
            return CloseOutcome::Ignored;
        }
        if session.dirty {
            session.confirming_discard = true;
            return CloseOutcome::ConfirmationRequired;
        }

        self.close(store);
        CloseOutcome::Closed
    }

    pub fn confirm_discard(&mut self, store: &mut AppStore) -> bool {
        if !matches!(&self.session, Some(s) if s.confirming_discard) {
            return false;
        }
        tracing::debug!("Unsaved changes discarded");
        self.close(store);
        true
    }

    pub fn cancel_discard(&mut self) -> bool {
        match self.session.as_mut() {
            Some(s) if s.confirming_discard => {
                s.confirming_discard = false;
                true
            }
            _ => false,
        }
    }

    /// Validates the draft and, if it passes, saves it through the store.
    ///
    /// If the returned future is dropped before completion the session goes
    /// back to `Editing` with its draft and dirty flag intact.
    pub async fn submit(&mut self, store: &mut AppStore) -> SubmitOutcome {
        let session = match self.session.as_mut() {
            Some(s) if s.can_submit() => s,
            _ => return SubmitOutcome::Ignored,
        };

        session.submit_error = None;
        session.errors = validate_draft(&session.draft);
        if !session.errors.is_empty() {
            tracing::debug!(id = session.id(), errors = ?session.errors, "Draft failed validation");
            return SubmitOutcome::Invalid(session.errors.clone());
        }

        let draft = session.draft.clone();
        let result = {
            let _submitting = SubmittingGuard::enter(session);
            store.commit_edit(draft).await
        };

        match result {
            Ok(saved) => {
                self.session = None;
                SubmitOutcome::Saved(saved)
            }
            Err(e) => {
                let message = e.to_string();
                if let Some(s) = self.session.as_mut() {
                    s.submit_error = Some(message.clone());
                }
                SubmitOutcome::Failed(message)
            }
        }
    }

    fn close(&mut self, store: &mut AppStore) {
        if let Some(session) = self.session.take() {
            tracing::debug!(id = session.id(), "Edit session closed");
        }
        store.begin_edit(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ApplicantService;
    use crate::storage::{MemoryMedium, RecordStore};
    use std::sync::Arc;
    use std::time::Duration;

    async fn loaded_store() -> AppStore {
        let records = RecordStore::new(Arc::new(MemoryMedium::new()), "applicantsData");
        let mut store = AppStore::new(ApplicantService::new(
            Arc::new(records),
            Duration::ZERO,
            Duration::ZERO,
        ));
        store.load().await;
        store
    }

    fn text(value: &str) -> FieldValue {
        FieldValue::Text(value.to_string())
    }

    #[tokio::test]
    async fn open_copies_record_into_clean_draft() {
        let mut store = loaded_store().await;
        let mut workflow = EditWorkflow::new();
        assert_eq!(workflow.phase(), EditPhase::Closed);

        let session = workflow.open(&mut store, 231).unwrap();
        assert_eq!(session.draft(), store.find(231).unwrap());
        assert!(!session.is_dirty());
        assert!(session.errors().is_empty());
        assert_eq!(workflow.phase(), EditPhase::Editing);
        assert_eq!(store.editing().map(|a| a.id), Some(231));
    }

    #[tokio::test]
    async fn draft_changes_do_not_touch_cached_record() {
        let mut store = loaded_store().await;
        let mut workflow = EditWorkflow::new();
        workflow.open(&mut store, 232).unwrap();

        workflow.change_field(ApplicantField::Name, text("Janet")).unwrap();
        assert_eq!(workflow.session().unwrap().draft().name, "Janet");
        assert_eq!(store.find(232).unwrap().name, "Jane Smith");
    }

    #[tokio::test]
    async fn list_change_replaces_sequence() {
        let mut store = loaded_store().await;
        let mut workflow = EditWorkflow::new();
        workflow.open(&mut store, 231).unwrap();

        workflow
            .change_field(ApplicantField::Skills, FieldValue::List(vec!["Rust".into()]))
            .unwrap();
        assert_eq!(workflow.session().unwrap().draft().skills, vec!["Rust".to_string()]);
    }

    #[tokio::test]
    async fn rejected_value_leaves_session_clean() {
        let mut store = loaded_store().await;
        let mut workflow = EditWorkflow::new();
        workflow.open(&mut store, 231).unwrap();

        let err = workflow
            .change_field(ApplicantField::Status, text("Hired"))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidField(_)));
        assert!(!workflow.session().unwrap().is_dirty());
    }

    #[tokio::test]
    async fn close_without_edit_skips_confirmation() {
        let mut store = loaded_store().await;
        let mut workflow = EditWorkflow::new();
        workflow.open(&mut store, 235).unwrap();

        assert_eq!(workflow.request_close(&mut store), CloseOutcome::Closed);
        assert_eq!(workflow.phase(), EditPhase::Closed);
        assert!(store.editing().is_none());
        assert_eq!(workflow.request_close(&mut store), CloseOutcome::Ignored);
    }

    #[tokio::test]
    async fn confirm_discard_drops_draft() {
        let mut store = loaded_store().await;
        let mut workflow = EditWorkflow::new();
        workflow.open(&mut store, 234).unwrap();
        workflow.change_field(ApplicantField::Phone, text("")).unwrap();

        assert_eq!(
            workflow.request_close(&mut store),
            CloseOutcome::ConfirmationRequired
        );
        assert!(workflow.confirm_discard(&mut store));
        assert_eq!(workflow.phase(), EditPhase::Closed);
        assert!(store.editing().is_none());
        assert_eq!(store.find(234).unwrap().phone, "+1 345 678 9012");
    }

    #[tokio::test]
    async fn dialog_blocks_edits_and_submit() {
        let mut store = loaded_store().await;
        let mut workflow = EditWorkflow::new();
        workflow.open(&mut store, 234).unwrap();
        workflow.change_field(ApplicantField::Name, text("Em")).unwrap();
        workflow.request_close(&mut store);

        assert!(matches!(
            workflow.change_field(ApplicantField::Name, text("X")),
            Err(Error::NotEditing)
        ));
        assert_eq!(workflow.submit(&mut store).await, SubmitOutcome::Ignored);
        assert_eq!(workflow.phase(), EditPhase::ConfirmingDiscard);
    }

    #[tokio::test]
    async fn submit_is_gated_on_dirty() {
        let mut store = loaded_store().await;
        let mut workflow = EditWorkflow::new();
        assert_eq!(workflow.submit(&mut store).await, SubmitOutcome::Ignored);

        workflow.open(&mut store, 231).unwrap();
        let before = store.service().store().load();
        assert_eq!(workflow.submit(&mut store).await, SubmitOutcome::Ignored);
        assert_eq!(workflow.phase(), EditPhase::Editing);
        assert_eq!(store.service().store().load(), before);
    }

    #[tokio::test]
    async fn dirty_session_blocks_switching_records() {
        let mut store = loaded_store().await;
        let mut workflow = EditWorkflow::new();
        workflow.open(&mut store, 231).unwrap();
        workflow.open(&mut store, 232).unwrap();
        assert_eq!(workflow.session().unwrap().id(), 232);

        workflow.change_field(ApplicantField::Resume, text("cv.pdf")).unwrap();
        assert!(matches!(
            workflow.open(&mut store, 233),
            Err(Error::EditInProgress(232))
        ));
        assert!(matches!(
            EditWorkflow::new().open(&mut store, 7),
            Err(Error::RecordNotFound(7))
        ));
    }

    #[tokio::test]
    async fn failed_save_keeps_draft_and_reports() {
        let mut store = loaded_store().await;
        let mut workflow = EditWorkflow::new();
        workflow.open(&mut store, 233).unwrap();
        workflow.change_field(ApplicantField::Summary, text("Updated")).unwrap();

        // the cached record no longer exists in the persisted collection
        let mut persisted = store.service().store().load();
        persisted.retain(|a| a.id != 233);
        store.service().store().save(&persisted).unwrap();

        let outcome = workflow.submit(&mut store).await;
        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        let session = workflow.session().unwrap();
        assert_eq!(workflow.phase(), EditPhase::Editing);
        assert!(session.is_dirty());
        assert_eq!(session.draft().summary, "Updated");
        assert_eq!(session.submit_error(), Some("Applicant not found: 233"));
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_submit_returns_session_to_editing() {
        let records = RecordStore::new(Arc::new(MemoryMedium::new()), "applicantsData");
        let mut store = AppStore::new(ApplicantService::new(
            Arc::new(records),
            Duration::ZERO,
            Duration::from_millis(300),
        ));
        store.load().await;
        let mut workflow = EditWorkflow::new();
        workflow.open(&mut store, 233).unwrap();
        workflow.change_field(ApplicantField::Phone, text("+1 555 000 1111")).unwrap();

        let attempt =
            tokio::time::timeout(Duration::from_millis(10), workflow.submit(&mut store)).await;
        assert!(attempt.is_err());
        assert_eq!(workflow.phase(), EditPhase::Editing);
        assert!(workflow.session().unwrap().is_dirty());
        assert_eq!(workflow.request_close(&mut store), CloseOutcome::ConfirmationRequired);
        assert!(workflow.cancel_discard());

        let outcome = workflow.submit(&mut store).await;
        assert!(matches!(outcome, SubmitOutcome::Saved(ref a) if a.phone == "+1 555 000 1111"));
        assert_eq!(workflow.phase(), EditPhase::Closed);
        assert_eq!(store.find(233).unwrap().phone, "+1 555 000 1111");
    }
}
