//! Inbound field validation
//!
//! Pure checks over a candidate JSON record. Both request entities build on
//! these two functions, so a request is either fully valid or rejected
//! before anything talks to a provider.

use serde_json::Value;

use crate::{
    errors::DomainError,
    value_objects::{EmailAddress, RecipientList},
};

/// Read a text field, treating non-strings and empty strings as absent
///
/// Whitespace counts as content.
pub fn text_field<'a>(record: &'a Value, field: &str) -> Option<&'a str> {
    record
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Require that every named field is present, textual and non-empty
///
/// # Errors
///
/// Returns [`DomainError::MissingField`] naming every failing field, in the
/// order they were requested.
pub fn require_text_fields(record: &Value, fields: &[&str]) -> Result<(), DomainError> {
    let missing: Vec<String> = fields
        .iter()
        .filter(|field| text_field(record, field).is_none())
        .map(|field| (*field).to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DomainError::MissingField(missing))
    }
}

/// Validate a recipient sequence
///
/// `field` names the sequence in error messages.
///
/// # Errors
///
/// - [`DomainError::ArrayRequired`] when the value is absent or not an array
/// - [`DomainError::EmptyList`] when the array has no entries
/// - [`DomainError::InvalidFormat`] with every offending entry, in order
pub fn recipients(value: Option<&Value>, field: &str) -> Result<RecipientList, DomainError> {
    let Some(entries) = value.and_then(Value::as_array) else {
        return Err(DomainError::ArrayRequired(field.to_string()));
    };

    if entries.is_empty() {
        return Err(DomainError::EmptyList(field.to_string()));
    }

    let mut valid = Vec::with_capacity(entries.len());
    let mut invalid = Vec::new();

    for entry in entries {
        match entry.as_str() {
            Some(s) if EmailAddress::is_valid(s) => valid.push(EmailAddress::new(s)?),
            Some(s) => invalid.push(s.to_string()),
            None => invalid.push(entry.to_string()),
        }
    }

    if !invalid.is_empty() {
        return Err(DomainError::InvalidFormat(invalid));
    }

    RecipientList::new(valid)
}
