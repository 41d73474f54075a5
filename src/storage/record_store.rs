use std::sync::{Arc, Mutex};

use crate::config::{Config, StorageBackend};
use crate::error::Result;
use crate::models::ApplicantRecord;
use crate::storage::medium::{FileMedium, KeyValueMedium, MemoryMedium};
use crate::storage::seed::default_applicants;

/// Whole-collection persistence of applicants in a single medium slot.
pub struct RecordStore {
    medium: Arc<dyn KeyValueMedium>,
    key: String,
    // collection accepted while the medium refused writes
    unsaved: Mutex<Option<Vec<ApplicantRecord>>>,
}

impl RecordStore {
    pub fn new(medium: Arc<dyn KeyValueMedium>, key: impl Into<String>) -> Self {
        Self {
            medium,
            key: key.into(),
            unsaved: Mutex::new(None),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let medium: Arc<dyn KeyValueMedium> = match config.storage_backend {
            StorageBackend::File => Arc::new(FileMedium::new(&config.data_dir)),
            StorageBackend::Memory => Arc::new(MemoryMedium::new()),
        };
        Self::new(medium, config.storage_key.clone())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the persisted collection, seeding the medium when the slot is empty.
    ///
    /// An unreachable medium or an unreadable value never fails the call: the
    /// last collection accepted in degraded mode is served, or the seed set.
    pub fn load(&self) -> Vec<ApplicantRecord> {
        match self.medium.get(&self.key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<ApplicantRecord>>(&raw) {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!(error = %e, key = %self.key, "Stored applicants are unreadable, using defaults");
                    self.fallback()
                }
            },
            Ok(None) => {
                let seed = default_applicants();
                match self.write_slot(&seed) {
                    Ok(()) => tracing::info!(key = %self.key, count = seed.len(), "Seeded applicant store"),
                    Err(e) => tracing::warn!(error = %e, key = %self.key, "Could not persist seed applicants"),
                }
                seed
            }
            Err(e) => {
                tracing::warn!(error = %e, key = %self.key, "Applicant storage unreachable, using in-memory data");
                self.fallback()
            }
        }
    }

    /// Replaces the whole persisted collection.
    ///
    /// A medium failure is absorbed: the collection is kept in memory and served
    /// by later loads until a write goes through again.
    pub fn save(&self, all: &[ApplicantRecord]) -> Result<()> {
        let raw = serde_json::to_string(all)?;
        match self.medium.set(&self.key, &raw) {
            Ok(()) => {
                *self.unsaved_slot() = None;
                tracing::debug!(key = %self.key, count = all.len(), "Persisted applicants");
            }
            Err(e) => {
                tracing::warn!(error = %e, key = %self.key, "Applicant write not persisted, keeping it in memory");
                *self.unsaved_slot() = Some(all.to_vec());
            }
        }
        Ok(())
    }

    /// True while writes are being held in memory only.
    pub fn is_degraded(&self) -> bool {
        self.unsaved_slot().is_some()
    }

    fn write_slot(&self, all: &[ApplicantRecord]) -> Result<()> {
        let raw = serde_json::to_string(all)?;
        self.medium.set(&self.key, &raw)
    }

    fn fallback(&self) -> Vec<ApplicantRecord> {
        self.unsaved_slot()
            .clone()
            .unwrap_or_else(default_applicants)
    }

    fn unsaved_slot(&self) -> std::sync::MutexGuard<'_, Option<Vec<ApplicantRecord>>> {
        self.unsaved.lock().unwrap_or_else(|e| e.into_inner())
    }
}
