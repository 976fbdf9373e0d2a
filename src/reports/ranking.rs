//! Top students by average grade

use serde::{Deserialize, Serialize};

use super::average::{average_grades, StudentAverage};
use crate::grading::LetterGrade;
use crate::models::{GradeEntry, StudentId};

/// Number of students kept by [`top_students`]
pub const TOP_STUDENT_LIMIT: usize = 3;

/// A student's place in the ranking
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedStudent {
    pub student_id: StudentId,
    pub numeric_grade: f64,
    pub letter_grade: LetterGrade,
}

/// Rank students by average grade and keep the best [`TOP_STUDENT_LIMIT`].
///
/// Returns `None` when `entries` is empty.
pub fn top_students(entries: &[GradeEntry]) -> Option<Vec<RankedStudent>> {
    average_grades(entries).map(|averages| rank_averages(averages, TOP_STUDENT_LIMIT))
}

/// Sort averages best first and keep at most `limit` of them.
///
/// Equal averages are ordered by ascending student id.
pub fn rank_averages(mut averages: Vec<StudentAverage>, limit: usize) -> Vec<RankedStudent> {
    averages.sort_by(|a, b| {
        b.numeric_grade
            .total_cmp(&a.numeric_grade)
            .then_with(|| a.student_id.cmp(&b.student_id))
    });

    averages
        .into_iter()
        .take(limit)
        .map(|avg| RankedStudent {
            student_id: avg.student_id,
            numeric_grade: avg.numeric_grade,
            letter_grade: LetterGrade::from_average(avg.numeric_grade),
        })
        .collect()
}
