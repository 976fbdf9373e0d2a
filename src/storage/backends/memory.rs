//! In-memory storage backend

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::{Grade, GradeId, NewGrade, Student, StudentId};
use crate::storage::{
    error::{StorageError, StorageResult},
    traits::GradebookRepository,
};

#[derive(Debug, Default)]
struct Tables {
    students: BTreeMap<StudentId, Student>,
    grades: BTreeMap<GradeId, Grade>,
    last_student_id: StudentId,
    last_grade_id: GradeId,
}

/// Store that keeps every record in process memory
#[derive(Debug, Default)]
pub struct MemoryBackend {
    tables: RwLock<Tables>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GradebookRepository for MemoryBackend {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn ensure_schema(&self) -> StorageResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> StorageResult<()> {
        Ok(())
    }

    async fn insert_student(&self, name: &str) -> StorageResult<Student> {
        let mut tables = self.tables.write().await;
        tables.last_student_id += 1;

        let student = Student {
            id: tables.last_student_id,
            name: name.to_string(),
            created_at: Utc::now(),
        };
        tables.students.insert(student.id, student.clone());

        debug!("Stored student {} in memory", student.id);
        Ok(student)
    }

    async fn list_students(&self) -> StorageResult<Vec<Student>> {
        Ok(self.tables.read().await.students.values().cloned().collect())
    }

    async fn find_student(&self, id: StudentId) -> StorageResult<Option<Student>> {
        Ok(self.tables.read().await.students.get(&id).cloned())
    }

    async fn insert_grade(&self, grade: NewGrade) -> StorageResult<Grade> {
        let mut tables = self.tables.write().await;
        if !tables.students.contains_key(&grade.student_id) {
            return Err(StorageError::not_found(format!(
                "student {}",
                grade.student_id
            )));
        }
        tables.last_grade_id += 1;

        let grade = Grade {
            id: tables.last_grade_id,
            student_id: grade.student_id,
            subject: grade.subject,
            grade: grade.grade,
            created_at: Utc::now(),
        };
        tables.grades.insert(grade.id, grade.clone());

        debug!("Stored grade {} in memory", grade.id);
        Ok(grade)
    }

    async fn list_grades(&self) -> StorageResult<Vec<Grade>> {
        Ok(self.tables.read().await.grades.values().cloned().collect())
    }

    async fn list_grades_for_student(&self, id: StudentId) -> StorageResult<Vec<Grade>> {
        let tables = self.tables.read().await;
        if !tables.students.contains_key(&id) {
            return Err(StorageError::not_found(format!("student {}", id)));
        }

        Ok(tables
            .grades
            .values()
            .filter(|g| g.student_id == id)
            .cloned()
            .collect())
    }
}
