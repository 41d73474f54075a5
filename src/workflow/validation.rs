use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::ApplicantRecord;

/// Field name to the message shown next to it.
pub type FieldErrors = BTreeMap<String, String>;

fn email_shape() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"))
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn looks_like_email(value: &str) -> bool {
    email_shape().is_match(value)
}

fn rule(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

fn name_required(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Err(rule("required", "Name is required"));
    }
    Ok(())
}

fn email_required_and_shaped(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Err(rule("required", "Email is required"));
    }
    if !looks_like_email(value) {
        return Err(rule("email", "Email is invalid"));
    }
    Ok(())
}

fn phone_required(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Err(rule("required", "Phone is required"));
    }
    Ok(())
}

fn total_experience_required(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Err(rule("required", "Total experience is required"));
    }
    Ok(())
}

/// The constrained subset of a draft, checked before it is saved.
#[derive(Debug, Clone, Validate)]
pub struct DraftForm {
    #[validate(custom(function = "name_required"))]
    pub name: String,
    #[validate(custom(function = "email_required_and_shaped"))]
    pub email: String,
    #[validate(custom(function = "phone_required"))]
    pub phone: String,
    #[validate(custom(function = "total_experience_required"))]
    pub total_experience: String,
}

impl From<&ApplicantRecord> for DraftForm {
    fn from(draft: &ApplicantRecord) -> Self {
        Self {
            name: draft.name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            total_experience: draft.total_experience.clone(),
        }
    }
}

/// Maps a struct field name to its wire name (`total_experience` -> `totalExperience`).
fn wire_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Flattens validator output to one message per field, keyed by wire name.
pub fn to_field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, list)| {
            list.first().map(|err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                (wire_name(&field), message)
            })
        })
        .collect()
}

/// Runs every rule over the draft and returns all failures at once.
pub fn validate_draft(draft: &ApplicantRecord) -> FieldErrors {
    match DraftForm::from(draft).validate() {
        Ok(()) => FieldErrors::new(),
        Err(errors) => to_field_errors(&errors),
    }
}
