// rowgrade-core/src/domain/project/configuration.rs

use crate::domain::catalog::OutputColumns;
use crate::domain::validation::DEFAULT_INTERNAL_PHRASES;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct ProjectConfig {
    #[validate(length(min = 1, message = "Project name cannot be empty"))]
    pub name: String,

    #[serde(default = "default_version")]
    pub version: String,

    /// Metadata file (CSV, YAML or JSON), relative to the project directory.
    #[serde(default = "default_rulebook")]
    pub rulebook: String,

    #[serde(rename = "data-paths", default = "default_data_paths")]
    pub data_paths: Vec<String>,

    #[serde(rename = "target-path", default = "default_target_path")]
    pub target_path: String,

    #[serde(rename = "clean-targets", default = "default_clean_targets")]
    pub clean_targets: Vec<String>,

    #[validate(nested)]
    #[serde(default)]
    pub validation: ValidationSettings,
}

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct ValidationSettings {
    #[validate(custom(function = "validate_phrases"))]
    #[serde(rename = "internal-phrases", default = "default_internal_phrases")]
    pub internal_phrases: Vec<String>,

    #[validate(length(min = 1, message = "Corrections column name cannot be empty"))]
    #[serde(rename = "corrections-column", default = "default_corrections_column")]
    pub corrections_column: String,

    #[validate(length(min = 1, message = "Score column name cannot be empty"))]
    #[serde(rename = "score-column", default = "default_score_column")]
    pub score_column: String,

    #[validate(length(min = 1, message = "Grade column name cannot be empty"))]
    #[serde(rename = "grade-column", default = "default_grade_column")]
    pub grade_column: String,

    /// Rows scoring below this fail the run. 0 disables the gate.
    #[validate(range(min = 0.0, max = 100.0))]
    #[serde(rename = "min-score", default)]
    pub min_score: f64,

    /// Catalog files processed at the same time.
    #[validate(range(min = 1, max = 64))]
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl ValidationSettings {
    pub fn output_columns(&self) -> OutputColumns {
        OutputColumns {
            corrections: self.corrections_column.clone(),
            score: self.score_column.clone(),
            grade: self.grade_column.clone(),
        }
    }
}

impl Default for ValidationSettings {
    fn default() -> Self {
        let columns = OutputColumns::default();
        Self {
            internal_phrases: default_internal_phrases(),
            corrections_column: columns.corrections,
            score_column: columns.score,
            grade_column: columns.grade,
            min_score: 0.0,
            concurrency: default_concurrency(),
        }
    }
}

fn validate_phrases(phrases: &[String]) -> Result<(), ValidationError> {
    if phrases.iter().any(|p| p.trim().is_empty()) {
        return Err(ValidationError::new("blank_internal_phrase"));
    }
    Ok(())
}

fn default_version() -> String {
    "0.1.0".to_string()
}
fn default_rulebook() -> String {
    "metadata/rulebook.csv".to_string()
}
fn default_data_paths() -> Vec<String> {
    vec!["data".to_string()]
}
fn default_target_path() -> String {
    "target".to_string()
}
fn default_clean_targets() -> Vec<String> {
    vec!["target".to_string()]
}
fn default_internal_phrases() -> Vec<String> {
    DEFAULT_INTERNAL_PHRASES
        .iter()
        .map(ToString::to_string)
        .collect()
}
fn default_corrections_column() -> String {
    OutputColumns::default().corrections
}
fn default_score_column() -> String {
    OutputColumns::default().score
}
fn default_grade_column() -> String {
    OutputColumns::default().grade
}
fn default_concurrency() -> usize {
    4
}
