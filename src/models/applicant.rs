use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub current_organization: String,
    pub skills: Vec<String>,
    pub available_from: String,
    pub current_salary: String,
    pub notice_period: String,
    pub full_address: String,
    pub resume: String,
    pub total_experience: String,
    pub summary: String,
    pub current_employment_status: String,
    pub date_of_birth: String,
    pub relevant_experience: String,
    pub salary_expectation: String,
    pub status: ApplicantStatus,
    pub salary_type: SalaryType,
    pub language_skills: Vec<String>,
    pub last_modified: DateTime<Utc>,
}

impl ApplicantRecord {
    /// Last two comma-separated parts of the address, e.g. "New York, NY 10001".
    pub fn location_summary(&self) -> String {
        let parts: Vec<&str> = self.full_address.split(',').map(str::trim).collect();
        let start = parts.len().saturating_sub(2);
        parts[start..].join(", ")
    }

    pub fn skills_display(&self) -> String {
        self.skills.join(", ")
    }

    pub fn language_skills_display(&self) -> String {
        self.language_skills.join(", ")
    }

    /// Writes one editable field. `id` and `lastModified` are not reachable here.
    pub fn set_field(&mut self, field: ApplicantField, value: FieldValue) -> Result<()> {
        use ApplicantField::*;

        match (field, value) {
            (Skills, FieldValue::List(items)) => self.skills = items,
            (LanguageSkills, FieldValue::List(items)) => self.language_skills = items,
            (Status, FieldValue::Text(text)) => self.status = text.parse()?,
            (SalaryType, FieldValue::Text(text)) => self.salary_type = text.parse()?,
            (field, FieldValue::Text(text)) if !field.is_list() => {
                *self.text_slot(field)? = text;
            }
            (field, _) => {
                return Err(Error::InvalidField(format!(
                    "{} does not accept that kind of value",
                    field
                )))
            }
        }
        Ok(())
    }

    fn text_slot(&mut self, field: ApplicantField) -> Result<&mut String> {
        use ApplicantField::*;

        let slot = match field {
            Name => &mut self.name,
            Email => &mut self.email,
            Phone => &mut self.phone,
            CurrentOrganization => &mut self.current_organization,
            AvailableFrom => &mut self.available_from,
            CurrentSalary => &mut self.current_salary,
            NoticePeriod => &mut self.notice_period,
            FullAddress => &mut self.full_address,
            Resume => &mut self.resume,
            TotalExperience => &mut self.total_experience,
            Summary => &mut self.summary,
            CurrentEmploymentStatus => &mut self.current_employment_status,
            DateOfBirth => &mut self.date_of_birth,
            RelevantExperience => &mut self.relevant_experience,
            SalaryExpectation => &mut self.salary_expectation,
            Skills | LanguageSkills | Status | SalaryType => {
                return Err(Error::InvalidField(format!("{} is not a text field", field)))
            }
        };
        Ok(slot)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicantStatus {
    New,
    #[serde(rename = "In Review")]
    InReview,
    Shortlisted,
    #[serde(rename = "Interview Scheduled")]
    InterviewScheduled,
    Rejected,
}

impl ApplicantStatus {
    pub const ALL: [ApplicantStatus; 5] = [
        ApplicantStatus::New,
        ApplicantStatus::InReview,
        ApplicantStatus::Shortlisted,
        ApplicantStatus::InterviewScheduled,
        ApplicantStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicantStatus::New => "New",
            ApplicantStatus::InReview => "In Review",
            ApplicantStatus::Shortlisted => "Shortlisted",
            ApplicantStatus::InterviewScheduled => "Interview Scheduled",
            ApplicantStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ApplicantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ApplicantStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        ApplicantStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::InvalidField(format!("unknown status '{}'", wanted)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalaryType {
    Annual,
    Monthly,
    Hourly,
}

impl SalaryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SalaryType::Annual => "Annual",
            SalaryType::Monthly => "Monthly",
            SalaryType::Hourly => "Hourly",
        }
    }
}

impl fmt::Display for SalaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for SalaryType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "annual" => Ok(SalaryType::Annual),
            "monthly" => Ok(SalaryType::Monthly),
            "hourly" => Ok(SalaryType::Hourly),
            other => Err(Error::InvalidField(format!("unknown salary type '{}'", other))),
        }
    }
}

/// Editable fields, named by their persisted camelCase keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplicantField {
    Name,
    Email,
    Phone,
    CurrentOrganization,
    Skills,
    AvailableFrom,
    CurrentSalary,
    NoticePeriod,
    FullAddress,
    Resume,
    TotalExperience,
    Summary,
    CurrentEmploymentStatus,
    DateOfBirth,
    RelevantExperience,
    SalaryExpectation,
    Status,
    SalaryType,
    LanguageSkills,
}

impl ApplicantField {
    pub const ALL: [ApplicantField; 19] = [
        ApplicantField::Name,
        ApplicantField::Email,
        ApplicantField::Phone,
        ApplicantField::CurrentOrganization,
        ApplicantField::Skills,
        ApplicantField::AvailableFrom,
        ApplicantField::CurrentSalary,
        ApplicantField::NoticePeriod,
        ApplicantField::FullAddress,
        ApplicantField::Resume,
        ApplicantField::TotalExperience,
        ApplicantField::Summary,
        ApplicantField::CurrentEmploymentStatus,
        ApplicantField::DateOfBirth,
        ApplicantField::RelevantExperience,
        ApplicantField::SalaryExpectation,
        ApplicantField::Status,
        ApplicantField::SalaryType,
        ApplicantField::LanguageSkills,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicantField::Name => "name",
            ApplicantField::Email => "email",
            ApplicantField::Phone => "phone",
            ApplicantField::CurrentOrganization => "currentOrganization",
            ApplicantField::Skills => "skills",
            ApplicantField::AvailableFrom => "availableFrom",
            ApplicantField::CurrentSalary => "currentSalary",
            ApplicantField::NoticePeriod => "noticePeriod",
            ApplicantField::FullAddress => "fullAddress",
            ApplicantField::Resume => "resume",
            ApplicantField::TotalExperience => "totalExperience",
            ApplicantField::Summary => "summary",
            ApplicantField::CurrentEmploymentStatus => "currentEmploymentStatus",
            ApplicantField::DateOfBirth => "dateOfBirth",
            ApplicantField::RelevantExperience => "relevantExperience",
            ApplicantField::SalaryExpectation => "salaryExpectation",
            ApplicantField::Status => "status",
            ApplicantField::SalaryType => "salaryType",
            ApplicantField::LanguageSkills => "languageSkills",
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, ApplicantField::Skills | ApplicantField::LanguageSkills)
    }
}

impl fmt::Display for ApplicantField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ApplicantField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        match wanted {
            "id" | "lastModified" => Err(Error::InvalidField(format!("{} is read-only", wanted))),
            _ => ApplicantField::ALL
                .into_iter()
                .find(|field| field.as_str() == wanted)
                .ok_or_else(|| Error::InvalidField(format!("unknown field '{}'", wanted))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}
