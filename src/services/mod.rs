pub mod applicant_service;

pub use applicant_service::ApplicantService;
