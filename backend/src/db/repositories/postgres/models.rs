use diesel::prelude::*;

use super::schema::students_data;
use crate::api::{NewStudent, Student, StudentId};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = students_data)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StudentRow {
    pub id: i32,
    pub name: Option<String>,
    pub subject: Option<String>,
    pub devision: Option<String>,
    pub standard: Option<String>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = students_data)]
pub struct NewStudentRow {
    pub name: Option<String>,
    pub subject: Option<String>,
    pub devision: Option<String>,
    pub standard: Option<String>,
}

// Columns are nullable TEXT; NULL reads back as an empty string.
impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Student {
            id: StudentId::new(row.id),
            name: row.name.unwrap_or_default(),
            subject: row.subject.unwrap_or_default(),
            division: row.devision.unwrap_or_default(),
            standard: row.standard.unwrap_or_default(),
        }
    }
}

impl From<&NewStudent> for NewStudentRow {
    fn from(student: &NewStudent) -> Self {
        NewStudentRow {
            name: Some(student.name.clone()),
            subject: Some(student.subject.clone()),
            devision: Some(student.division.clone()),
            standard: Some(student.standard.clone()),
        }
    }
}
