use crate::error::Result;
use crate::models::ApplicantRecord;
use crate::services::ApplicantService;

/// Session-lifetime cache of the applicant list and the record under edit.
pub struct AppStore {
    service: ApplicantService,
    applicants: Vec<ApplicantRecord>,
    editing: Option<ApplicantRecord>,
}

impl AppStore {
    pub fn new(service: ApplicantService) -> Self {
        Self {
            service,
            applicants: Vec::new(),
            editing: None,
        }
    }

    pub fn service(&self) -> &ApplicantService {
        &self.service
    }

    pub fn applicants(&self) -> &[ApplicantRecord] {
        &self.applicants
    }

    pub fn find(&self, id: i64) -> Option<&ApplicantRecord> {
        self.applicants.iter().find(|a| a.id == id)
    }

    pub fn editing(&self) -> Option<&ApplicantRecord> {
        self.editing.as_ref()
    }

    /// Fetches the collection through the service and caches it.
    pub async fn load(&mut self) -> &[ApplicantRecord] {
        let applicants = self.service.fetch_all().await;
        self.set_all(applicants);
        &self.applicants
    }

    pub fn set_all(&mut self, applicants: Vec<ApplicantRecord>) {
        self.applicants = applicants;
    }

    pub fn begin_edit(&mut self, record: Option<ApplicantRecord>) {
        self.editing = record;
    }

    /// Writes the draft. On success the cached copy is replaced and editing ends;
    /// on failure nothing local changes.
    pub async fn commit_edit(&mut self, draft: ApplicantRecord) -> Result<ApplicantRecord> {
        let updated = match self.service.apply_update(draft).await {
            Ok(updated) => updated,
            Err(e) => {
                tracing::error!(error = %e, "Saving applicant failed");
                return Err(e);
            }
        };

        match self.applicants.iter_mut().find(|a| a.id == updated.id) {
            Some(cached) => *cached = updated.clone(),
            None => self.applicants.push(updated.clone()),
        }
        self.editing = None;
        Ok(updated)
    }
}
