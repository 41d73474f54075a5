//! What the UI layer talks to: the loaded collection, the pager, and the edit workflow.

pub mod cursor;

use std::sync::Arc;

use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::models::{ApplicantRecord, ApplicantStatus};
use crate::services::ApplicantService;
use crate::storage::RecordStore;
use crate::store::AppStore;
use crate::utils::form::parse_field_input;
use crate::workflow::{CloseOutcome, EditPhase, EditWorkflow, FieldErrors, SubmitOutcome};

pub use cursor::CandidateCursor;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub applicants: Vec<ApplicantRecord>,
    pub current_id: Option<i64>,
    pub counter: String,
    pub editing_id: Option<i64>,
    pub draft: Option<ApplicantRecord>,
    pub errors: FieldErrors,
    pub phase: EditPhase,
    pub dirty: bool,
    pub can_submit: bool,
    pub submit_error: Option<String>,
}

pub struct Dashboard {
    store: AppStore,
    workflow: EditWorkflow,
    cursor: CandidateCursor,
}

impl Dashboard {
    pub fn new(service: ApplicantService) -> Self {
        Self {
            store: AppStore::new(service),
            workflow: EditWorkflow::new(),
            cursor: CandidateCursor::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let records = Arc::new(RecordStore::from_config(config));
        Self::new(ApplicantService::from_config(records, config))
    }

    pub fn store(&self) -> &AppStore {
        &self.store
    }

    /// Fetches applicants into the cache. Returns how many were loaded.
    pub async fn load(&mut self) -> usize {
        let count = self.store.load().await.len();
        self.cursor.resize(count);
        tracing::info!(count, "Dashboard loaded");
        count
    }

    pub fn applicants(&self) -> &[ApplicantRecord] {
        self.store.applicants()
    }

    pub fn cursor(&self) -> &CandidateCursor {
        &self.cursor
    }

    pub fn current(&self) -> Option<&ApplicantRecord> {
        self.cursor
            .index()
            .and_then(|i| self.store.applicants().get(i))
    }

    pub fn next(&mut self) -> bool {
        self.cursor.next()
    }

    pub fn previous(&mut self) -> bool {
        self.cursor.previous()
    }

    /// Moves the pager onto applicant `id`.
    pub fn show(&mut self, id: i64) -> bool {
        match self.applicants().iter().position(|a| a.id == id) {
            Some(index) => self.cursor.seek(index),
            None => false,
        }
    }

    pub fn editing_id(&self) -> Option<i64> {
        self.workflow.session().map(|s| s.id())
    }

    pub fn draft(&self) -> Option<&ApplicantRecord> {
        self.workflow.session().map(|s| s.draft())
    }

    pub fn errors(&self) -> FieldErrors {
        self.workflow
            .session()
            .map(|s| s.errors().clone())
            .unwrap_or_default()
    }

    pub fn phase(&self) -> EditPhase {
        self.workflow.phase()
    }

    pub fn is_dirty(&self) -> bool {
        self.workflow.session().is_some_and(|s| s.is_dirty())
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.workflow.session().and_then(|s| s.submit_error())
    }

    pub fn select_for_edit(&mut self, id: i64) -> Result<()> {
        self.workflow.open(&mut self.store, id)?;
        Ok(())
    }

    /// Applies a raw form input; list fields take comma-separated text.
    pub fn change_field(&mut self, name: &str, value: &str) -> Result<()> {
        let (field, value) = parse_field_input(name, value)?;
        self.workflow.change_field(field, value)
    }

    pub fn request_close(&mut self) -> CloseOutcome {
        self.workflow.request_close(&mut self.store)
    }

    pub fn confirm_discard(&mut self) -> bool {
        self.workflow.confirm_discard(&mut self.store)
    }

    pub fn cancel_discard(&mut self) -> bool {
        self.workflow.cancel_discard()
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        self.workflow.submit(&mut self.store).await
    }

    /// Applicant count per status, in pipeline order.
    pub fn status_counts(&self) -> Vec<(ApplicantStatus, usize)> {
        ApplicantStatus::ALL
            .into_iter()
            .map(|status| {
                let count = self
                    .applicants()
                    .iter()
                    .filter(|a| a.status == status)
                    .count();
                (status, count)
            })
            .collect()
    }

    pub fn view(&self) -> DashboardView {
        let session = self.workflow.session();
        DashboardView {
            applicants: self.applicants().to_vec(),
            current_id: self.current().map(|a| a.id),
            counter: self.cursor.label(),
            editing_id: self.editing_id(),
            draft: self.draft().cloned(),
            errors: self.errors(),
            phase: self.phase(),
            dirty: self.is_dirty(),
            can_submit: session.is_some_and(|s| s.can_submit()),
            submit_error: self.submit_error().map(str::to_string),
        }
    }
}
