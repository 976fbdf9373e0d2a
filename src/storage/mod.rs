//! Persistence for students and grades
//!
//! Callers talk to the [`GradebookRepository`] trait; [`StorageFactory`]
//! picks the backend named in [`StorageConfig`].

pub mod backends;
pub mod config;
pub mod error;
pub mod factory;
pub mod traits;

pub use backends::{MemoryBackend, SqliteBackend};
pub use config::{BackendType, StorageConfig};
pub use error::{StorageError, StorageResult};
pub use factory::StorageFactory;
pub use traits::GradebookRepository;
