pub mod applicant;

pub use applicant::{ApplicantField, ApplicantRecord, ApplicantStatus, FieldValue, SalaryType};
