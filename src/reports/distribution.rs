//! Histogram of recorded grades over five fixed score bins

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::grading::LetterGrade;

/// Count of grades per score bin. Bins without grades are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradeDistribution(BTreeMap<LetterGrade, usize>);

impl GradeDistribution {
    pub fn count(&self, bin: LetterGrade) -> usize {
        self.0.get(&bin).copied().unwrap_or(0)
    }

    pub fn contains(&self, bin: LetterGrade) -> bool {
        self.0.contains_key(&bin)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LetterGrade, usize)> + '_ {
        self.0.iter().map(|(bin, count)| (*bin, *count))
    }
}

/// Place a numeric score in its bin.
///
/// Bins are `[0,60]`, `(60,70]`, `(70,80]`, `(80,90]` and `(90,100]`;
/// scores outside `[0,100]` have no bin.
pub fn bin_score(score: f64) -> Option<LetterGrade> {
    if !(0.0..=100.0).contains(&score) {
        return None;
    }

    Some(match score {
        s if s <= 60.0 => LetterGrade::F,
        s if s <= 70.0 => LetterGrade::D,
        s if s <= 80.0 => LetterGrade::C,
        s if s <= 90.0 => LetterGrade::B,
        _ => LetterGrade::A,
    })
}

/// Count grades per bin. Returns `None` when `grades` is empty.
pub fn grade_distribution(grades: &[LetterGrade]) -> Option<GradeDistribution> {
    if grades.is_empty() {
        return None;
    }

    let mut counts = BTreeMap::new();
    for bin in grades
        .iter()
        .filter_map(|grade| bin_score(f64::from(grade.numeric_value())))
    {
        *counts.entry(bin).or_insert(0) += 1;
    }

    Some(GradeDistribution(counts))
}
