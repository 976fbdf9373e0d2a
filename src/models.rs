//! Records persisted by the gradebook

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::grading::LetterGrade;

pub type StudentId = i64;
pub type GradeId = i64;

/// A student known to the gradebook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A letter grade recorded for one student in one subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub id: GradeId,
    pub student_id: StudentId,
    pub subject: String,
    pub grade: LetterGrade,
    pub created_at: DateTime<Utc>,
}

/// Grade data supplied by a caller before the store assigns an id
#[derive(Debug, Clone, PartialEq)]
pub struct NewGrade {
    pub student_id: StudentId,
    pub subject: String,
    pub grade: LetterGrade,
}

/// The part of a grade the reports care about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeEntry {
    pub student_id: StudentId,
    pub grade: LetterGrade,
}

impl GradeEntry {
    pub fn new(student_id: StudentId, grade: LetterGrade) -> Self {
        Self { student_id, grade }
    }
}

impl From<&Grade> for GradeEntry {
    fn from(grade: &Grade) -> Self {
        Self {
            student_id: grade.student_id,
            grade: grade.grade,
        }
    }
}
