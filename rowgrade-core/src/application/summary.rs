// rowgrade-core/src/application/summary.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::validation::{Grade, RowReport};

/// Aggregate view of one graded table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSummary {
    pub name: String,
    pub rows: usize,
    pub mean_score: f64,
    pub min_score: Option<f64>,
    pub grades: BTreeMap<Grade, usize>,
    pub violations_by_column: BTreeMap<String, usize>,
    /// 1-based data row numbers scoring under the configured minimum.
    pub below_threshold: Vec<usize>,
}

impl TableSummary {
    pub fn from_reports(name: &str, reports: &[RowReport], threshold: f64) -> Self {
        let mut grades = BTreeMap::new();
        let mut violations_by_column = BTreeMap::new();
        let mut below_threshold = Vec::new();
        let mut total = 0.0;
        let mut min_score: Option<f64> = None;

        for (idx, report) in reports.iter().enumerate() {
            total += report.score;
            min_score = Some(min_score.map_or(report.score, |m| m.min(report.score)));
            *grades.entry(report.grade).or_insert(0) += 1;
            for violation in &report.violations {
                *violations_by_column
                    .entry(violation.column.clone())
                    .or_insert(0) += 1;
            }
            if report.score < threshold {
                below_threshold.push(idx + 1);
            }
        }

        let mean_score = if reports.is_empty() {
            0.0
        } else {
            total / reports.len() as f64
        };

        Self {
            name: name.to_string(),
            rows: reports.len(),
            mean_score,
            min_score,
            grades,
            violations_by_column,
            below_threshold,
        }
    }

    pub fn total_violations(&self) -> usize {
        self.violations_by_column.values().sum()
    }

    /// Compact "A+:3 B:1" rendering, best grade first.
    pub fn grade_line(&self) -> String {
        self.grades
            .iter()
            .rev()
            .map(|(grade, count)| format!("{}:{}", grade, count))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
