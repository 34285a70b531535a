// rowgrade-core/src/domain/validation/grade.rs

use serde::{Deserialize, Serialize};
use std::fmt;

// Variants are declared worst-first so the derived ordering reads naturally:
// Grade::D < Grade::APlus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "D")]
    D,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A+")]
    APlus,
}

/// Lower bound of each band, evaluated high to low.
const THRESHOLDS: [(f64, Grade); 6] = [
    (90.0, Grade::APlus),
    (80.0, Grade::A),
    (70.0, Grade::BPlus),
    (60.0, Grade::B),
    (50.0, Grade::CPlus),
    (40.0, Grade::C),
];

impl Grade {
    pub const ALL: [Grade; 7] = [
        Grade::APlus,
        Grade::A,
        Grade::BPlus,
        Grade::B,
        Grade::CPlus,
        Grade::C,
        Grade::D,
    ];

    pub fn from_score(score: f64) -> Self {
        THRESHOLDS
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::D)
    }

    /// Smallest score that earns this grade.
    pub fn min_score(&self) -> f64 {
        THRESHOLDS
            .iter()
            .find(|(_, grade)| grade == self)
            .map(|(min, _)| *min)
            .unwrap_or(0.0)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grade::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown grade: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_threshold_table() {
        assert_eq!(Grade::from_score(100.0), Grade::APlus);
        assert_eq!(Grade::from_score(90.0), Grade::APlus);
        assert_eq!(Grade::from_score(89.9), Grade::A);
        assert_eq!(Grade::from_score(80.0), Grade::A);
        assert_eq!(Grade::from_score(70.0), Grade::BPlus);
        assert_eq!(Grade::from_score(60.0), Grade::B);
        assert_eq!(Grade::from_score(50.0), Grade::CPlus);
        assert_eq!(Grade::from_score(40.0), Grade::C);
        assert_eq!(Grade::from_score(39.99), Grade::D);
        assert_eq!(Grade::from_score(0.0), Grade::D);
    }

    #[test]
    fn test_grade_ordering() {
        assert!(Grade::D < Grade::C);
        assert!(Grade::CPlus < Grade::B);
        assert!(Grade::A < Grade::APlus);
    }

    #[test]
    fn test_every_score_lands_in_its_band() {
        for step in 0..=1000 {
            let score = step as f64 / 10.0;
            let grade = Grade::from_score(score);
            assert!(score >= grade.min_score(), "{} below band of {}", score, grade);
        }
    }

    #[test]
    fn test_display_and_parsing_consistency() {
        for grade in Grade::ALL {
            assert_eq!(Grade::from_str(&grade.to_string()), Ok(grade));
        }
        assert_eq!(Grade::from_str("b+"), Ok(Grade::BPlus));
        assert!(Grade::from_str("E").is_err());
    }
}
