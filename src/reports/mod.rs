//! Read-only reports computed on demand from the recorded grades
//!
//! Every report distinguishes "no grades recorded" from an empty result:
//! the computations return `None` when given no input and the HTTP layer
//! turns that into [`Report::Empty`].

pub mod average;
pub mod distribution;
pub mod ranking;

pub use average::{average_grades, StudentAverage};
pub use distribution::{bin_score, grade_distribution, GradeDistribution};
pub use ranking::{rank_averages, top_students, RankedStudent, TOP_STUDENT_LIMIT};

use serde::{Deserialize, Serialize};

/// Message returned in place of a report when no grades exist
pub const NO_GRADES_MESSAGE: &str = "No grades available";

/// A computed report, or the no-data message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Report<T> {
    Empty { message: String },
    Ready(T),
}

impl<T> Report<T> {
    pub fn empty() -> Self {
        Report::Empty {
            message: NO_GRADES_MESSAGE.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Report::Empty { .. })
    }
}

impl<T> From<Option<T>> for Report<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(data) => Report::Ready(data),
            None => Report::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_report_serializes_as_message() {
        let report: Report<Vec<StudentAverage>> = None.into();
        assert!(report.is_empty());
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({ "message": "No grades available" })
        );
    }

    #[test]
    fn test_ready_report_serializes_bare() {
        let report: Report<Vec<u32>> = Some(vec![1, 2]).into();
        assert!(!report.is_empty());
        assert_eq!(serde_json::to_value(&report).unwrap(), json!([1, 2]));
    }
}
