//! # Student Records Backend
//!
//! A small REST service exposing a single table of student records.
//!
//! Each request maps onto exactly one storage statement: list every record,
//! fetch one by id, insert one, or filter by subject. Storage is abstracted
//! behind [`db::StudentRepository`] so the same HTTP layer runs against
//! PostgreSQL in production and an in-memory store in tests.
//!
//! ## Architecture
//!
//! - [`api`]: Domain types shared by every layer (`Student`, `NewStudent`, `StudentId`)
//! - [`db`]: Repository trait, implementations, factory and service functions
//! - [`http`]: Axum router, handlers and error mapping
//!

// Allow large error types - RepositoryError carries an ErrorContext for debugging
#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;

#[cfg(feature = "http-server")]
pub mod http;
