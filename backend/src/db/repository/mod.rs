//! Repository trait for abstracting student storage.
//!
//! This trait defines the interface for all database operations, allowing
//! different implementations (PostgreSQL, in-memory) to be swapped via
//! dependency injection.

use async_trait::async_trait;

use crate::api::{NewStudent, Student, StudentId};

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

/// Repository trait for student record operations.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` so a single handle can be shared by
/// every request handler.
///
/// # Error Handling
/// All methods return `RepositoryResult<T>`. Only [`get_student`] uses
/// `RepositoryError::NotFound`; every other error is a storage failure.
///
/// [`get_student`]: StudentRepository::get_student
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Check if the storage backend is reachable.
    ///
    /// # Returns
    /// - `Ok(true)` if connection is healthy
    /// - `Ok(false)` if connection is unhealthy but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// List every stored record in the storage's natural scan order.
    async fn list_students(&self) -> RepositoryResult<Vec<Student>>;

    /// Fetch a single record by id.
    ///
    /// # Returns
    /// * `Ok(Student)` - The matching record
    /// * `Err(RepositoryError::NotFound)` - If no record has this id
    /// * `Err(RepositoryError)` - If the operation fails
    async fn get_student(&self, id: StudentId) -> RepositoryResult<Student>;

    /// Insert a record. Storage assigns the id.
    ///
    /// # Returns
    /// * `Ok(Student)` - The stored record including its new id
    /// * `Err(RepositoryError)` - If the insert fails
    async fn create_student(&self, student: &NewStudent) -> RepositoryResult<Student>;

    /// List every record whose subject equals `subject` exactly (case-sensitive).
    async fn list_students_by_subject(&self, subject: &str) -> RepositoryResult<Vec<Student>>;
}
