use crate::error::Result;
use crate::models::{ApplicantField, FieldValue};

/// Splits a comma-separated input into trimmed, non-empty segments, keeping order.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Turns a raw form input into the value the named field stores.
pub fn parse_field_input(name: &str, raw: &str) -> Result<(ApplicantField, FieldValue)> {
    let field: ApplicantField = name.parse()?;
    let value = if field.is_list() {
        FieldValue::List(split_list(raw))
    } else {
        FieldValue::Text(raw.to_string())
    };
    Ok((field, value))
}
