//! Mean numeric grade per student

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::models::{GradeEntry, StudentId};

/// Average numeric grade of one student
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StudentAverage {
    pub student_id: StudentId,
    pub numeric_grade: f64,
}

/// Compute each student's mean numeric grade.
///
/// Returns `None` when `entries` is empty. Results are ordered by student id.
pub fn average_grades(entries: &[GradeEntry]) -> Option<Vec<StudentAverage>> {
    if entries.is_empty() {
        return None;
    }

    let mut totals: BTreeMap<StudentId, (u64, u64)> = BTreeMap::new();
    for entry in entries {
        let (sum, count) = totals.entry(entry.student_id).or_default();
        *sum += u64::from(entry.grade.numeric_value());
        *count += 1;
    }

    debug!(
        "Averaged {} grades across {} students",
        entries.len(),
        totals.len()
    );

    Some(
        totals
            .into_iter()
            .map(|(student_id, (sum, count))| StudentAverage {
                student_id,
                numeric_grade: sum as f64 / count as f64,
            })
            .collect(),
    )
}
