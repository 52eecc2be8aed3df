//! Tests for backend selection from the environment and from `repository.toml`.

mod support;

use std::io::Write;

use student_records::api::NewStudent;
use student_records::db::{RepositoryBuilder, RepositoryError, RepositoryType};

const NO_BACKEND_VARS: [(&str, Option<&str>); 3] = [
    ("REPOSITORY_TYPE", None),
    ("DATABASE_URL", None),
    ("PG_DATABASE_URL", None),
];

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

#[test]
fn test_repository_type_from_env_default() {
    support::with_scoped_env(&NO_BACKEND_VARS, || {
        assert_eq!(RepositoryType::from_env().unwrap(), RepositoryType::Local);
    });
}

#[test]
fn test_repository_type_from_env_with_database_url() {
    support::with_scoped_env(
        &[
            ("REPOSITORY_TYPE", None),
            ("DATABASE_URL", Some("postgres://localhost/test")),
        ],
        || {
            assert_eq!(RepositoryType::from_env().unwrap(), RepositoryType::Postgres);
        },
    );
}

#[test]
fn test_repository_type_explicit_override_wins() {
    support::with_scoped_env(
        &[
            ("REPOSITORY_TYPE", Some("local")),
            ("DATABASE_URL", Some("postgres://localhost/test")),
        ],
        || {
            assert_eq!(RepositoryType::from_env().unwrap(), RepositoryType::Local);
        },
    );
}

#[test]
fn test_misspelled_repository_type_is_rejected() {
    support::with_scoped_env(
        &[
            ("REPOSITORY_TYPE", Some("postgress")),
            ("DATABASE_URL", Some("postgres://localhost/test")),
        ],
        || {
            assert!(matches!(
                RepositoryType::from_env(),
                Err(RepositoryError::ConfigurationError { .. })
            ));
            assert!(RepositoryBuilder::new().from_env().is_err());
        },
    );
}

#[tokio::test]
async fn test_builder_from_env_opens_local_store() {
    let builder =
        support::with_scoped_env(&NO_BACKEND_VARS, || RepositoryBuilder::new().from_env());
    let repo = builder.unwrap().build().await.unwrap();

    let created = repo
        .create_student(&NewStudent::new("Alice", "Math", "A", "10"))
        .await
        .unwrap();
    assert_eq!(repo.get_student(created.id).await.unwrap(), created);
}

#[tokio::test]
async fn test_builder_from_local_config_file() {
    let file = config_file("[repository]\ntype = \"local\"\n");

    let repo = RepositoryBuilder::new()
        .from_config_file(file.path())
        .unwrap()
        .build()
        .await
        .unwrap();
    assert!(repo.health_check().await.unwrap());
}

#[test]
fn test_builder_from_missing_config_file() {
    let result = RepositoryBuilder::new().from_config_file("/nonexistent/repository.toml");
    assert!(matches!(
        result,
        Err(RepositoryError::ConfigurationError { .. })
    ));
}

#[test]
fn test_builder_from_config_file_with_bad_type() {
    let file = config_file("[repository]\ntype = \"sqlite\"\n");

    let result = RepositoryBuilder::new().from_config_file(file.path());
    assert!(matches!(
        result,
        Err(RepositoryError::ConfigurationError { .. })
    ));
}

#[cfg(not(feature = "postgres-repo"))]
#[test]
fn test_postgres_from_env_without_feature() {
    support::with_scoped_env(
        &[
            ("REPOSITORY_TYPE", Some("postgres")),
            ("DATABASE_URL", Some("postgres://localhost/test")),
        ],
        || {
            assert!(matches!(
                RepositoryBuilder::new().from_env(),
                Err(RepositoryError::ConfigurationError { .. })
            ));
        },
    );
}
