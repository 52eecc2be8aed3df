//! High-level database service layer.
//!
//! Repository-agnostic operations used by the HTTP handlers. Rules that must
//! hold regardless of backend (such as an empty subject matching nothing)
//! live here rather than in each repository.
//!
//! # Usage
//!
//! ```no_run
//! use student_records::db::{services, repositories::LocalRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!
//!     let students = services::list_students(&repo).await?;
//!     println!("Found {} students", students.len());
//!
//!     Ok(())
//! }
//! ```

use log::{debug, info};

use super::repository::{RepositoryResult, StudentRepository};
use crate::api::{NewStudent, Student, StudentId};

/// Check if the storage backend is healthy.
pub async fn health_check<R: StudentRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// List every stored record.
pub async fn list_students<R: StudentRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<Student>> {
    let students = repo.list_students().await?;
    debug!("Service layer: listed {} students", students.len());
    Ok(students)
}

/// Fetch one record by id.
///
/// # Returns
/// * `Ok(Student)` - The matching record
/// * `Err(RepositoryError::NotFound)` - If no record has this id
pub async fn get_student<R: StudentRepository + ?Sized>(
    repo: &R,
    id: StudentId,
) -> RepositoryResult<Student> {
    repo.get_student(id).await
}

/// Store a new record and return it with its storage-assigned id.
///
/// Field contents are stored as given; no validation is applied.
pub async fn create_student<R: StudentRepository + ?Sized>(
    repo: &R,
    student: &NewStudent,
) -> RepositoryResult<Student> {
    let stored = repo.create_student(student).await?;
    info!(
        "Service layer: stored student id={} (subject '{}')",
        stored.id, stored.subject
    );
    Ok(stored)
}

/// List records whose subject equals `subject` exactly.
///
/// An empty subject matches nothing and never reaches storage.
pub async fn list_students_by_subject<R: StudentRepository + ?Sized>(
    repo: &R,
    subject: &str,
) -> RepositoryResult<Vec<Student>> {
    if subject.is_empty() {
        debug!("Service layer: empty subject filter, returning no students");
        return Ok(Vec::new());
    }

    let students = repo.list_students_by_subject(subject).await?;
    debug!(
        "Service layer: {} students match subject '{}'",
        students.len(),
        subject
    );
    Ok(students)
}
