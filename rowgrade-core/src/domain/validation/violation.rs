// rowgrade-core/src/domain/validation/violation.rs

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    WordLimit,
    ItemLimit,
    StepLimit,
    SkillLimit,
    HashtagLimit,
    StepWordLimit,
    InvalidOption,
    EmptyRequired,
    InternalReference,
}

impl ViolationKind {
    /// Unit counted by a limit check, singular and plural.
    pub(crate) fn unit(&self) -> (&'static str, &'static str) {
        match self {
            Self::WordLimit | Self::StepWordLimit => ("word", "words"),
            Self::ItemLimit => ("item", "items"),
            Self::StepLimit => ("step", "steps"),
            Self::SkillLimit => ("skill", "skills"),
            Self::HashtagLimit => ("hashtag", "hashtags"),
            Self::InvalidOption | Self::EmptyRequired | Self::InternalReference => {
                ("value", "values")
            }
        }
    }
}

/// One broken constraint on one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub column: String,
    pub kind: ViolationKind,
    pub message: String,
}

impl Violation {
    pub fn new(column: &str, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            column: column.to_string(),
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.column, self.message)
    }
}
