//! Backend selection and construction.
//!
//! [`RepositoryBuilder`] is the only way the service opens storage: it is
//! filled from the environment or from a `repository.toml`, then
//! [`RepositoryBuilder::build`] opens the selected backend.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;

use super::repo_config::RepositoryConfig;
use super::repositories::LocalRepository;
#[cfg(feature = "postgres-repo")]
use super::repositories::PostgresRepository;
use super::repository::{RepositoryError, RepositoryResult, StudentRepository};
use super::PostgresConfig;

const REPOSITORY_TYPE_VAR: &str = "REPOSITORY_TYPE";
const DATABASE_URL_VARS: [&str; 2] = ["DATABASE_URL", "PG_DATABASE_URL"];

/// Storage backend behind the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum RepositoryType {
    /// Postgres through diesel
    Postgres,
    /// In-memory store, lost on restart
    #[default]
    Local,
}

impl FromStr for RepositoryType {
    type Err = RepositoryError;

    /// Accepts `postgres`, `pg` and `local`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "pg" => Ok(Self::Postgres),
            "local" => Ok(Self::Local),
            _ => Err(RepositoryError::configuration(format!(
                "Unknown repository type: {}",
                s
            ))),
        }
    }
}

impl TryFrom<String> for RepositoryType {
    type Error = RepositoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl RepositoryType {
    /// Backend named by the environment.
    ///
    /// An explicit `REPOSITORY_TYPE` wins and must name a known backend, so a
    /// typo cannot quietly route writes into memory. Without it, a database
    /// URL selects Postgres.
    pub fn from_env() -> RepositoryResult<Self> {
        match std::env::var(REPOSITORY_TYPE_VAR) {
            Ok(value) => value.parse(),
            Err(_) if database_url_present() => Ok(Self::Postgres),
            Err(_) => Ok(Self::Local),
        }
    }
}

fn database_url_present() -> bool {
    DATABASE_URL_VARS
        .iter()
        .any(|key| std::env::var_os(key).is_some())
}

/// Collects the backend choice and its settings, then opens it.
///
/// # Example
/// ```
/// use student_records::db::{RepositoryBuilder, RepositoryType};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = RepositoryBuilder::new()
///     .repository_type(RepositoryType::Local)
///     .build()
///     .await
///     .unwrap();
/// assert!(repo.health_check().await.unwrap());
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct RepositoryBuilder {
    repo_type: RepositoryType,
    postgres_config: Option<PostgresConfig>,
}

impl RepositoryBuilder {
    /// A builder for the in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repository_type(mut self, repo_type: RepositoryType) -> Self {
        self.repo_type = repo_type;
        self
    }

    pub fn postgres_config(mut self, config: PostgresConfig) -> Self {
        self.postgres_config = Some(config);
        self
    }

    /// Select the backend from `REPOSITORY_TYPE` and the database URL
    /// variables. Pool settings come from `PG_*` unless already set.
    pub fn from_env(mut self) -> RepositoryResult<Self> {
        self.repo_type = RepositoryType::from_env()?;
        if self.repo_type == RepositoryType::Postgres && self.postgres_config.is_none() {
            self.postgres_config = Some(postgres_config_from_env()?);
        }
        Ok(self)
    }

    /// Take the backend and its settings from a `repository.toml`.
    pub fn from_config_file<P: AsRef<Path>>(self, config_path: P) -> RepositoryResult<Self> {
        let config = RepositoryConfig::from_file(config_path)?;
        Ok(Self {
            repo_type: config.repository.repo_type,
            postgres_config: config.postgres_config()?,
        })
    }

    /// Open the selected backend.
    pub async fn build(self) -> RepositoryResult<Arc<dyn StudentRepository>> {
        match self.repo_type {
            RepositoryType::Local => Ok(Arc::new(LocalRepository::new())),
            RepositoryType::Postgres => open_postgres(self.postgres_config).await,
        }
    }
}

#[cfg(feature = "postgres-repo")]
fn postgres_config_from_env() -> RepositoryResult<PostgresConfig> {
    PostgresConfig::from_env().map_err(RepositoryError::configuration)
}

/// Connecting and table creation block, so they run off the runtime threads.
#[cfg(feature = "postgres-repo")]
async fn open_postgres(
    config: Option<PostgresConfig>,
) -> RepositoryResult<Arc<dyn StudentRepository>> {
    let config = config.ok_or_else(|| {
        RepositoryError::configuration("Postgres repository requires a database URL")
    })?;
    let repo = tokio::task::spawn_blocking(move || PostgresRepository::new(config))
        .await
        .map_err(|e| RepositoryError::internal(format!("Task join error: {}", e)))??;
    Ok(Arc::new(repo))
}

#[cfg(not(feature = "postgres-repo"))]
fn postgres_disabled() -> RepositoryError {
    RepositoryError::configuration("Postgres repository feature not enabled")
}

#[cfg(not(feature = "postgres-repo"))]
fn postgres_config_from_env() -> RepositoryResult<PostgresConfig> {
    Err(postgres_disabled())
}

#[cfg(not(feature = "postgres-repo"))]
async fn open_postgres(
    _config: Option<PostgresConfig>,
) -> RepositoryResult<Arc<dyn StudentRepository>> {
    Err(postgres_disabled())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_type_parse_ignores_case_and_padding() {
        assert_eq!(" Pg ".parse::<RepositoryType>().unwrap(), RepositoryType::Postgres);
        assert_eq!("LOCAL".parse::<RepositoryType>().unwrap(), RepositoryType::Local);
    }

    #[test]
    fn test_repository_type_parse_error_names_input() {
        let err = "postgress".parse::<RepositoryType>().unwrap_err();
        assert!(matches!(err, RepositoryError::ConfigurationError { .. }));
        assert!(err.to_string().contains("postgress"));
    }

    #[tokio::test]
    async fn test_default_builder_opens_local_store() {
        let repo = RepositoryBuilder::new().build().await.unwrap();
        assert!(repo.health_check().await.unwrap());
        assert!(repo.list_students().await.unwrap().is_empty());
    }

    #[cfg(not(feature = "postgres-repo"))]
    #[tokio::test]
    async fn test_postgres_without_feature_is_configuration_error() {
        let result = RepositoryBuilder::new()
            .repository_type(RepositoryType::Postgres)
            .build()
            .await;
        assert!(matches!(
            result,
            Err(RepositoryError::ConfigurationError { .. })
        ));
    }

    #[cfg(feature = "postgres-repo")]
    #[tokio::test]
    async fn test_postgres_without_url_is_configuration_error() {
        let result = RepositoryBuilder::new()
            .repository_type(RepositoryType::Postgres)
            .build()
            .await;
        assert!(matches!(
            result,
            Err(RepositoryError::ConfigurationError { .. })
        ));
    }
}
