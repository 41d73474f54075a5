use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::ApplicantRecord;
use crate::storage::RecordStore;
use crate::utils::time::{next_stamp, now};

/// Mock remote API over the record store. Every write in the system goes through `apply_update`.
#[derive(Clone)]
pub struct ApplicantService {
    store: Arc<RecordStore>,
    fetch_delay: Duration,
    update_delay: Duration,
}

impl ApplicantService {
    pub fn new(store: Arc<RecordStore>, fetch_delay: Duration, update_delay: Duration) -> Self {
        Self {
            store,
            fetch_delay,
            update_delay,
        }
    }

    pub fn from_config(store: Arc<RecordStore>, config: &Config) -> Self {
        Self::new(store, config.fetch_delay, config.update_delay)
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub async fn fetch_all(&self) -> Vec<ApplicantRecord> {
        let applicants = self.store.load();
        tokio::time::sleep(self.fetch_delay).await;
        tracing::debug!(count = applicants.len(), "Fetched applicants");
        applicants
    }

    pub async fn apply_update(&self, record: ApplicantRecord) -> Result<ApplicantRecord> {
        let mut applicants = self.store.load();
        let Some(slot) = applicants.iter_mut().find(|a| a.id == record.id) else {
            tracing::warn!(id = record.id, "Update rejected, applicant not found");
            return Err(Error::RecordNotFound(record.id));
        };

        let stamped = next_stamp(now(), [slot.last_modified, record.last_modified]);
        let updated = ApplicantRecord {
            last_modified: stamped,
            ..record
        };
        *slot = updated.clone();

        self.store.save(&applicants)?;
        tracing::info!(id = updated.id, last_modified = %updated.last_modified, "Applicant updated");

        tokio::time::sleep(self.update_delay).await;
        Ok(updated)
    }
}
