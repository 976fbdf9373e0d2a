//! Storage factory for creating repository instances

use std::sync::Arc;
use tracing::info;

use super::backends::{MemoryBackend, SqliteBackend};
use super::config::{BackendType, StorageConfig};
use super::error::StorageResult;
use super::traits::GradebookRepository;

/// Factory for creating repositories
pub struct StorageFactory;

impl StorageFactory {
    /// Open the configured backend. The schema is not touched; call
    /// [`GradebookRepository::ensure_schema`] before serving.
    pub async fn from_config(config: &StorageConfig) -> StorageResult<Arc<dyn GradebookRepository>> {
        let repository: Arc<dyn GradebookRepository> = match config.backend {
            BackendType::Sqlite => Arc::new(SqliteBackend::new(config).await?),
            BackendType::Memory => Arc::new(MemoryBackend::new()),
        };

        info!("Using {} storage backend", repository.backend_name());
        Ok(repository)
    }

    /// Open the configured backend and make sure its schema exists
    pub async fn open_with_schema(
        config: &StorageConfig,
    ) -> StorageResult<Arc<dyn GradebookRepository>> {
        let repository = Self::from_config(config).await?;
        repository.ensure_schema().await?;
        Ok(repository)
    }
}
