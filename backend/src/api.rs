//! Domain types shared by the repository and HTTP layers.
//!
//! The `division` field is persisted and serialized under the historical
//! spelling `devision`; existing clients and tables depend on it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Storage-assigned identifier of a student record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub i32);

impl StudentId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StudentId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i32>().map(Self)
    }
}

impl From<i32> for StudentId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// A persisted student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub subject: String,
    #[serde(rename = "devision", alias = "division")]
    pub division: String,
    pub standard: String,
}

impl Student {
    /// Attach a storage-assigned id to an insert payload.
    pub fn from_new(id: StudentId, new: NewStudent) -> Self {
        Self {
            id,
            name: new.name,
            subject: new.subject,
            division: new.division,
            standard: new.standard,
        }
    }
}

/// Insert payload for a student record. Every field defaults to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewStudent {
    pub name: String,
    pub subject: String,
    #[serde(rename = "devision", alias = "division")]
    pub division: String,
    pub standard: String,
}

impl NewStudent {
    pub fn new(
        name: impl Into<String>,
        subject: impl Into<String>,
        division: impl Into<String>,
        standard: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            subject: subject.into(),
            division: division.into(),
            standard: standard.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_serializes_devision_key() {
        let new = NewStudent::new("Alice", "Math", "A", "10");
        let student = Student::from_new(StudentId::new(7), new);
        let value = serde_json::to_value(&student).unwrap();

        assert_eq!(value["id"], 7);
        assert_eq!(value["devision"], "A");
        assert!(value.get("division").is_none());
    }

    #[test]
    fn test_new_student_missing_fields_default_to_empty() {
        let new: NewStudent = serde_json::from_str(r#"{"name":"Bob"}"#).unwrap();
        assert_eq!(new.name, "Bob");
        assert_eq!(new.subject, "");
        assert_eq!(new.division, "");
        assert_eq!(new.standard, "");
    }

    #[test]
    fn test_student_id_parsing() {
        assert_eq!("42".parse::<StudentId>().unwrap(), StudentId(42));
        assert!("abc".parse::<StudentId>().is_err());
        assert!("".parse::<StudentId>().is_err());
    }
}
