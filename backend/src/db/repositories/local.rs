//! In-memory local repository implementation.
//!
//! This module provides a local implementation of [`StudentRepository`]
//! suitable for unit testing and local development. Records live in a `Vec`
//! so listing returns insertion order, mirroring a heap scan on a table that
//! only ever receives inserts.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::api::{NewStudent, Student, StudentId};
use crate::db::repository::{ErrorContext, RepositoryError, RepositoryResult, StudentRepository};

/// In-memory local repository.
///
/// Cloning shares the underlying storage, so a clone handed to the HTTP layer
/// observes writes made through any other handle.
///
/// # Example
/// ```
/// use student_records::api::NewStudent;
/// use student_records::db::repositories::LocalRepository;
/// use student_records::db::StudentRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = LocalRepository::new();
/// let stored = repo
///     .create_student(&NewStudent::new("Alice", "Math", "A", "10"))
///     .await
///     .unwrap();
/// assert_eq!(stored.id.value(), 1);
/// # });
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    students: Vec<Student>,
    next_student_id: i32,
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            students: Vec::new(),
            next_student_id: 1,
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Remove every record. The id counter keeps running so ids are never reused.
    pub fn clear(&self) {
        self.data.write().students.clear();
    }

    /// Get the number of records stored.
    pub fn student_count(&self) -> usize {
        self.data.read().students.len()
    }

    fn check_health(&self, operation: &str) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(RepositoryError::connection_with_context(
                "Database is not healthy",
                ErrorContext::new(operation),
            ));
        }
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StudentRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn list_students(&self) -> RepositoryResult<Vec<Student>> {
        self.check_health("list_students")?;
        Ok(self.data.read().students.clone())
    }

    async fn get_student(&self, id: StudentId) -> RepositoryResult<Student> {
        self.check_health("get_student")?;
        self.data
            .read()
            .students
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("Student {} not found", id),
                    ErrorContext::new("get_student")
                        .with_entity("student")
                        .with_entity_id(id),
                )
            })
    }

    async fn create_student(&self, student: &NewStudent) -> RepositoryResult<Student> {
        self.check_health("create_student")?;
        let mut data = self.data.write();
        let id = StudentId::new(data.next_student_id);
        data.next_student_id = data.next_student_id.checked_add(1).ok_or_else(|| {
            RepositoryError::internal_with_context(
                "Student id sequence exhausted",
                ErrorContext::new("create_student").with_entity("student"),
            )
        })?;

        let stored = Student::from_new(id, student.clone());
        data.students.push(stored.clone());
        Ok(stored)
    }

    async fn list_students_by_subject(&self, subject: &str) -> RepositoryResult<Vec<Student>> {
        self.check_health("list_students_by_subject")?;
        Ok(self
            .data
            .read()
            .students
            .iter()
            .filter(|s| s.subject == subject)
            .cloned()
            .collect())
    }
}
