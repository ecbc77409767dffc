use crate::model::ErrorResponse;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Field-keyed validation messages for the booking form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the mapping from a structured error body. Returns `None` when
    /// the body carries no field errors at all. A repeated field keeps the
    /// last message.
    pub fn from_response(response: &ErrorResponse) -> Option<Self> {
        let entries = response.errors.as_ref()?;
        if entries.is_empty() {
            return None;
        }
        Some(Self(
            entries
                .iter()
                .map(|entry| (entry.field.clone(), entry.message.clone()))
                .collect(),
        ))
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Failures of calls against the scheduling API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Transport failure, non-2xx status without a structured body, or an
    /// undecodable response
    #[error("network error: {0}")]
    Network(String),
    /// The server rejected a booking with per-field messages
    #[error("validation failed: {0}")]
    Validation(FieldErrors),
}

/// Faults surfaced by the interaction controller
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchedulerError {
    /// The calendar data is inconsistent (e.g. booked slot without an id)
    #[error("data integrity fault: {0}")]
    DataIntegrity(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldErrorEntry;

    #[test]
    fn test_field_errors_from_structured_body() {
        let response: ErrorResponse = serde_json::from_str(concat!(
            r#"{"errors":[{"field":"email","message":"invalid"},"#,
            r#"{"field":"phone","message":"required"}]}"#,
        ))
        .unwrap();

        let errors = FieldErrors::from_response(&response).unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("email"), Some("invalid"));
        assert_eq!(errors.get("phone"), Some("required"));
        assert_eq!(errors.get("name"), None);
    }

    #[test]
    fn test_field_errors_absent_or_empty() {
        assert!(FieldErrors::from_response(&ErrorResponse::default()).is_none());
        assert!(FieldErrors::from_response(&ErrorResponse { errors: Some(vec![]) }).is_none());
    }

    #[test]
    fn test_repeated_field_keeps_last_message() {
        let response = ErrorResponse {
            errors: Some(vec![
                FieldErrorEntry { field: "name".into(), message: "too short".into() },
                FieldErrorEntry { field: "name".into(), message: "required".into() },
            ]),
        };

        let errors = FieldErrors::from_response(&response).unwrap();
        assert_eq!(errors.get("name"), Some("required"));
    }

    #[test]
    fn test_error_display() {
        let mut fields = FieldErrors::new();
        fields.insert("email", "invalid");
        assert_eq!(
            ApiError::Validation(fields).to_string(),
            "validation failed: email: invalid"
        );
        assert_eq!(
            SchedulerError::from(ApiError::Network("timeout".into())).to_string(),
            "network error: timeout"
        );
    }
}
