//! Gradebook operations shared by the HTTP API and the CLI

use std::sync::Arc;
use tracing::{debug, info};

use crate::error::{GradebookError, Result};
use crate::grading::LetterGrade;
use crate::models::{Grade, GradeEntry, NewGrade, Student, StudentId};
use crate::reports::{
    average_grades, grade_distribution, top_students, GradeDistribution, RankedStudent, Report,
    StudentAverage,
};
use crate::storage::{GradebookRepository, StorageError};

const STUDENT_NOT_FOUND: &str = "student not found";

/// Validates input, talks to the repository and computes reports
#[derive(Clone)]
pub struct GradebookService {
    repository: Arc<dyn GradebookRepository>,
}

impl GradebookService {
    pub fn new(repository: Arc<dyn GradebookRepository>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &Arc<dyn GradebookRepository> {
        &self.repository
    }

    /// Register a student. Blank names are rejected.
    pub async fn create_student(&self, name: &str) -> Result<Student> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GradebookError::validation("student name must not be empty"));
        }

        let student = self.repository.insert_student(name).await?;
        info!("Created student {} ({})", student.id, student.name);
        Ok(student)
    }

    pub async fn list_students(&self) -> Result<Vec<Student>> {
        Ok(self.repository.list_students().await?)
    }

    /// Record a grade. `grade` must be one of A, B, C, D or F.
    pub async fn record_grade(
        &self,
        student_id: StudentId,
        subject: &str,
        grade: &str,
    ) -> Result<Grade> {
        let grade: LetterGrade = grade.parse()?;

        let stored = self
            .repository
            .insert_grade(NewGrade {
                student_id,
                subject: subject.to_string(),
                grade,
            })
            .await
            .map_err(student_not_found)?;

        info!(
            "Recorded grade {} for student {} in {}",
            stored.grade, stored.student_id, stored.subject
        );
        Ok(stored)
    }

    pub async fn list_grades(&self) -> Result<Vec<Grade>> {
        Ok(self.repository.list_grades().await?)
    }

    pub async fn student_grades(&self, student_id: StudentId) -> Result<Vec<Grade>> {
        self.repository
            .list_grades_for_student(student_id)
            .await
            .map_err(student_not_found)
    }

    pub async fn average_grades_report(&self) -> Result<Report<Vec<StudentAverage>>> {
        let entries = self.grade_entries().await?;
        Ok(average_grades(&entries).into())
    }

    pub async fn top_students_report(&self) -> Result<Report<Vec<RankedStudent>>> {
        let entries = self.grade_entries().await?;
        Ok(top_students(&entries).into())
    }

    pub async fn grade_distribution_report(&self) -> Result<Report<GradeDistribution>> {
        let letters: Vec<LetterGrade> = self
            .grade_entries()
            .await?
            .into_iter()
            .map(|entry| entry.grade)
            .collect();
        Ok(grade_distribution(&letters).into())
    }

    async fn grade_entries(&self) -> Result<Vec<GradeEntry>> {
        let grades = self.repository.list_grades().await?;
        debug!("Loaded {} grades for reporting", grades.len());
        Ok(grades.iter().map(GradeEntry::from).collect())
    }
}

fn student_not_found(err: StorageError) -> GradebookError {
    if err.is_not_found() {
        GradebookError::not_found(STUDENT_NOT_FOUND)
    } else {
        err.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;

    fn service() -> GradebookService {
        GradebookService::new(Arc::new(MemoryBackend::new()))
    }

    #[tokio::test]
    async fn test_blank_name_rejected() {
        let err = service().create_student("   ").await.unwrap_err();
        assert!(matches!(err, GradebookError::Validation(_)));
    }

    #[tokio::test]
    async fn test_name_is_trimmed() {
        let student = service().create_student("  Ada  ").await.unwrap();
        assert_eq!(student.name, "Ada");
    }

    #[tokio::test]
    async fn test_invalid_letter_rejected_before_storage() {
        let service = service();
        let student = service.create_student("Ada").await.unwrap();

        let err = service
            .record_grade(student.id, "Math", "E")
            .await
            .unwrap_err();
        assert!(matches!(err, GradebookError::Validation(_)));
        assert!(service.list_grades().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_student_is_not_found() {
        let service = service();
        let err = service.record_grade(9999, "Math", "A").await.unwrap_err();
        assert!(matches!(err, GradebookError::NotFound(ref m) if m == "student not found"));
        assert!(service.list_grades().await.unwrap().is_empty());

        let err = service.student_grades(9999).await.unwrap_err();
        assert!(matches!(err, GradebookError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_reports_without_grades_are_empty() {
        let service = service();
        service.create_student("Ada").await.unwrap();

        assert!(service.average_grades_report().await.unwrap().is_empty());
        assert!(service.top_students_report().await.unwrap().is_empty());
        assert!(service.grade_distribution_report().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reports_over_recorded_grades() {
        let service = service();
        let ada = service.create_student("Ada").await.unwrap();
        let grace = service.create_student("Grace").await.unwrap();
        service.record_grade(ada.id, "Math", "A").await.unwrap();
        service.record_grade(ada.id, "Physics", "B").await.unwrap();
        service.record_grade(grace.id, "Math", "F").await.unwrap();

        match service.average_grades_report().await.unwrap() {
            Report::Ready(averages) => {
                assert_eq!(averages.len(), 2);
                assert_eq!(averages[0].numeric_grade, 90.0);
                assert_eq!(averages[1].numeric_grade, 50.0);
            }
            other => panic!("expected averages, got {:?}", other),
        }

        match service.top_students_report().await.unwrap() {
            Report::Ready(ranked) => {
                assert_eq!(ranked[0].student_id, ada.id);
                assert_eq!(ranked[0].letter_grade, LetterGrade::A);
                assert_eq!(ranked[1].letter_grade, LetterGrade::F);
            }
            other => panic!("expected ranking, got {:?}", other),
        }

        match service.grade_distribution_report().await.unwrap() {
            Report::Ready(distribution) => {
                assert_eq!(distribution.count(LetterGrade::A), 1);
                assert_eq!(distribution.count(LetterGrade::B), 1);
                assert_eq!(distribution.count(LetterGrade::F), 1);
                assert_eq!(distribution.total(), 3);
            }
            other => panic!("expected distribution, got {:?}", other),
        }
    }
}
