//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer in [`crate::db::services`].

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, RawQuery, State},
    Json,
};

use super::dto::{CreateStudentRequest, HealthResponse, SubjectQuery};
use super::error::AppError;
use super::state::AppState;
use crate::api::{NewStudent, Student, StudentId};
use crate::db::services as db_services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Students
// =============================================================================

/// GET /students
///
/// List all student records.
pub async fn list_students(State(state): State<AppState>) -> HandlerResult<Vec<Student>> {
    let students = db_services::list_students(state.repository.as_ref()).await?;
    Ok(Json(students))
}

/// GET /student/{id}
///
/// An id that cannot be decoded or is not an integer can match no record, so
/// it is a 404 like any other unknown id.
pub async fn get_student(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> HandlerResult<Student> {
    let Path(raw_id) = path.map_err(|rejection| {
        tracing::debug!(error = %rejection, "undecodable student id");
        AppError::NotFound
    })?;
    let id: StudentId = raw_id.parse().map_err(|_| {
        tracing::debug!(id = %raw_id, "non-numeric student id");
        AppError::NotFound
    })?;

    let student = db_services::get_student(state.repository.as_ref(), id).await?;
    Ok(Json(student))
}

/// POST /students
///
/// The body is read raw so that malformed or partial JSON still creates a
/// record; see [`CreateStudentRequest::from_body`].
pub async fn create_student(State(state): State<AppState>, body: Bytes) -> HandlerResult<Student> {
    let new_student = NewStudent::from(CreateStudentRequest::from_body(&body));
    let student = db_services::create_student(state.repository.as_ref(), &new_student).await?;
    Ok(Json(student))
}

/// GET /students/subject?subject=...
///
/// The query string is parsed by hand so that repeated or malformed pairs
/// never turn into a rejection.
pub async fn list_students_by_subject(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> HandlerResult<Vec<Student>> {
    let subject = SubjectQuery::from_raw(raw_query.as_deref())
        .subject
        .unwrap_or_default();
    let students =
        db_services::list_students_by_subject(state.repository.as_ref(), &subject).await?;
    Ok(Json(students))
}
