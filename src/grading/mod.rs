//! Letter grades and their fixed numeric equivalents
//!
//! Two tables live here and are deliberately kept apart:
//!
//! | Letter | Numeric value |      | Average     | Letter |
//! |--------|---------------|      |-------------|--------|
//! | A      | 95            |      | >= 90       | A      |
//! | B      | 85            |      | >= 80       | B      |
//! | C      | 75            |      | >= 70       | C      |
//! | D      | 65            |      | >= 60       | D      |
//! | F      | 50            |      | < 60        | F      |
//!
//! The left table is used to turn recorded grades into numbers; the right one
//! classifies a computed average back into a letter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GradebookError;

/// A recorded letter grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    /// All grades, best first
    pub const ALL: [LetterGrade; 5] = [
        LetterGrade::A,
        LetterGrade::B,
        LetterGrade::C,
        LetterGrade::D,
        LetterGrade::F,
    ];

    /// Numeric score used for averaging and binning
    pub const fn numeric_value(self) -> u32 {
        match self {
            LetterGrade::A => 95,
            LetterGrade::B => 85,
            LetterGrade::C => 75,
            LetterGrade::D => 65,
            LetterGrade::F => 50,
        }
    }

    /// Classify an average numeric score into a letter
    pub fn from_average(average: f64) -> Self {
        match average {
            a if a >= 90.0 => LetterGrade::A,
            a if a >= 80.0 => LetterGrade::B,
            a if a >= 70.0 => LetterGrade::C,
            a if a >= 60.0 => LetterGrade::D,
            _ => LetterGrade::F,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LetterGrade {
    type Err = GradebookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" => Ok(LetterGrade::A),
            "B" => Ok(LetterGrade::B),
            "C" => Ok(LetterGrade::C),
            "D" => Ok(LetterGrade::D),
            "F" => Ok(LetterGrade::F),
            other => Err(GradebookError::validation(format!(
                "invalid grade '{}': expected one of A, B, C, D, F",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_table() {
        assert_eq!(LetterGrade::A.numeric_value(), 95);
        assert_eq!(LetterGrade::B.numeric_value(), 85);
        assert_eq!(LetterGrade::C.numeric_value(), 75);
        assert_eq!(LetterGrade::D.numeric_value(), 65);
        assert_eq!(LetterGrade::F.numeric_value(), 50);
    }

    #[test]
    fn test_average_thresholds() {
        assert_eq!(LetterGrade::from_average(100.0), LetterGrade::A);
        assert_eq!(LetterGrade::from_average(90.0), LetterGrade::A);
        assert_eq!(LetterGrade::from_average(89.99), LetterGrade::B);
        assert_eq!(LetterGrade::from_average(80.0), LetterGrade::B);
        assert_eq!(LetterGrade::from_average(79.5), LetterGrade::C);
        assert_eq!(LetterGrade::from_average(70.0), LetterGrade::C);
        assert_eq!(LetterGrade::from_average(60.0), LetterGrade::D);
        assert_eq!(LetterGrade::from_average(59.9), LetterGrade::F);
        assert_eq!(LetterGrade::from_average(0.0), LetterGrade::F);
    }

    #[test]
    fn test_recorded_letter_round_trips_through_thresholds() {
        for letter in LetterGrade::ALL {
            let value = letter.numeric_value() as f64;
            assert_eq!(LetterGrade::from_average(value), letter);
        }
    }

    #[test]
    fn test_parse_accepts_only_known_letters() {
        assert_eq!("A".parse::<LetterGrade>().unwrap(), LetterGrade::A);
        assert_eq!(" F ".parse::<LetterGrade>().unwrap(), LetterGrade::F);

        for bad in ["", "E", "a", "A+", "AB", "95"] {
            let err = bad.parse::<LetterGrade>().unwrap_err();
            assert!(matches!(err, GradebookError::Validation(_)), "{bad}");
        }
    }

    #[test]
    fn test_serde_uses_bare_letters() {
        assert_eq!(serde_json::to_string(&LetterGrade::C).unwrap(), "\"C\"");
        let parsed: LetterGrade = serde_json::from_str("\"D\"").unwrap();
        assert_eq!(parsed, LetterGrade::D);
    }
}
