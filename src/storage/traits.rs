//! Repository interface over the gradebook's records

use async_trait::async_trait;

use super::error::StorageResult;
use crate::models::{Grade, NewGrade, Student, StudentId};

/// Typed access to students and grades.
///
/// Implementations assign ids on insert and never update or delete records.
#[async_trait]
pub trait GradebookRepository: Send + Sync {
    /// Short backend name for log lines
    fn backend_name(&self) -> &'static str;

    /// Create the tables if they do not exist yet. Safe to call repeatedly.
    async fn ensure_schema(&self) -> StorageResult<()>;

    /// Check the backend can serve queries
    async fn health_check(&self) -> StorageResult<()>;

    async fn insert_student(&self, name: &str) -> StorageResult<Student>;

    /// All students in id order
    async fn list_students(&self) -> StorageResult<Vec<Student>>;

    async fn find_student(&self, id: StudentId) -> StorageResult<Option<Student>>;

    /// Insert a grade for an existing student.
    ///
    /// Fails with [`StorageError::NotFound`](super::StorageError::NotFound)
    /// and persists nothing when the student does not exist.
    async fn insert_grade(&self, grade: NewGrade) -> StorageResult<Grade>;

    /// All grades in id order
    async fn list_grades(&self) -> StorageResult<Vec<Grade>>;

    /// Grades of one student in id order, `NotFound` if the student is absent
    async fn list_grades_for_student(&self, id: StudentId) -> StorageResult<Vec<Grade>>;
}
