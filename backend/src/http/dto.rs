//! Data Transfer Objects for the HTTP API.
//!
//! Student records themselves are serialized directly from [`crate::api::Student`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::NewStudent;

/// Body of `POST /students`.
///
/// Parsing is field-by-field: every field that is present as a JSON string is
/// taken, anything else becomes an empty string. Keys match case-insensitively
/// and `division` is accepted for `devision`. A body that is not a JSON object
/// at all yields a record with every field empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateStudentRequest {
    pub name: String,
    pub subject: String,
    pub division: String,
    pub standard: String,
}

impl CreateStudentRequest {
    /// Parse a raw request body.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(value) => Self::from_value(&value),
            Err(e) => {
                tracing::debug!(error = %e, "create body is not valid JSON, using empty fields");
                Self::default()
            }
        }
    }

    /// Extract fields from an already-parsed JSON value.
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        Self {
            name: string_field(object, &["name"]),
            subject: string_field(object, &["subject"]),
            division: string_field(object, &["devision", "division"]),
            standard: string_field(object, &["standard"]),
        }
    }
}

fn string_field(object: &Map<String, Value>, keys: &[&str]) -> String {
    object
        .iter()
        .filter(|(k, _)| keys.iter().any(|key| k.eq_ignore_ascii_case(key)))
        .find_map(|(_, v)| v.as_str())
        .unwrap_or_default()
        .to_string()
}

impl From<CreateStudentRequest> for NewStudent {
    fn from(request: CreateStudentRequest) -> Self {
        NewStudent {
            name: request.name,
            subject: request.subject,
            division: request.division,
            standard: request.standard,
        }
    }
}

/// Query string of `GET /students/subject`.
///
/// Only the first `subject` pair counts. Repeated pairs and other keys are
/// ignored, and undecodable bytes are replaced rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectQuery {
    pub subject: Option<String>,
}

impl SubjectQuery {
    /// Parse the raw query string, if the request had one.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let subject = raw.and_then(|query| {
            form_urlencoded::parse(query.as_bytes())
                .find(|(key, _)| key == "subject")
                .map(|(_, value)| value.into_owned())
        });
        Self { subject }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_body_is_parsed() {
        let req = CreateStudentRequest::from_body(
            br#"{"name":"Alice","subject":"Math","devision":"A","standard":"10"}"#,
        );
        assert_eq!(req.name, "Alice");
        assert_eq!(req.subject, "Math");
        assert_eq!(req.division, "A");
        assert_eq!(req.standard, "10");
    }

    #[test]
    fn test_missing_and_mistyped_fields_become_empty() {
        let req = CreateStudentRequest::from_body(br#"{"name":"Bob","standard":10,"id":5}"#);
        assert_eq!(req.name, "Bob");
        assert_eq!(req.subject, "");
        assert_eq!(req.division, "");
        assert_eq!(req.standard, "");
    }

    #[test]
    fn test_malformed_body_yields_empty_request() {
        assert_eq!(
            CreateStudentRequest::from_body(b"{not json"),
            CreateStudentRequest::default()
        );
        assert_eq!(
            CreateStudentRequest::from_body(b""),
            CreateStudentRequest::default()
        );
        assert_eq!(
            CreateStudentRequest::from_body(b"[1,2,3]"),
            CreateStudentRequest::default()
        );
    }

    #[test]
    fn test_keys_match_case_insensitively_and_accept_division_alias() {
        let req =
            CreateStudentRequest::from_body(br#"{"Name":"Eve","SUBJECT":"Art","division":"C"}"#);
        assert_eq!(req.name, "Eve");
        assert_eq!(req.subject, "Art");
        assert_eq!(req.division, "C");
    }

    #[test]
    fn test_subject_query_takes_first_value() {
        let query = SubjectQuery::from_raw(Some("subject=Math&subject=Science"));
        assert_eq!(query.subject.as_deref(), Some("Math"));
    }

    #[test]
    fn test_subject_query_decodes_and_ignores_other_keys() {
        let query = SubjectQuery::from_raw(Some("page=2&subject=Computer+Science%21"));
        assert_eq!(query.subject.as_deref(), Some("Computer Science!"));

        assert_eq!(SubjectQuery::from_raw(Some("page=2")).subject, None);
        assert_eq!(SubjectQuery::from_raw(None).subject, None);
        assert_eq!(SubjectQuery::from_raw(Some("subject=")).subject.as_deref(), Some(""));
    }
}
