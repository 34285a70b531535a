// rowgrade-core/src/domain/validation/validator.rs

use crate::domain::rulebook::{ColumnRule, Rulebook};
use crate::domain::validation::delimited::{
    ITEM_DELIMITER, TAG_DELIMITER, parse_delimited_list, word_count,
};
use crate::domain::validation::grade::Grade;
use crate::domain::validation::scanner::InternalReferenceScanner;
use crate::domain::validation::violation::{Violation, ViolationKind};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Points for one satisfied check.
pub const CHECK_POINTS: u32 = 2;
/// Points for an optional column left empty.
pub const PARTIAL_POINTS: u32 = 1;
/// Fixed per-column maximum, also the per-column share of the denominator.
pub const MAX_COLUMN_POINTS: u32 = 10;

/// How a missing float cell comes out of the spreadsheet export.
const MISSING_MARKER: &str = "nan";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnScore {
    pub column: String,
    pub points: u32,
}

/// Outcome of validating one row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowReport {
    pub violations: Vec<Violation>,
    pub columns: Vec<ColumnScore>,
    pub score: f64,
    pub grade: Grade,
}

impl RowReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Text for the "Corrections" cell: one `Column: message` per line.
    pub fn corrections(&self) -> String {
        self.violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn earned_points(&self) -> u32 {
        self.columns.iter().map(|c| c.points).sum()
    }
}

/// Applies a rulebook to rows. Holds only the compiled internal phrases, so one
/// instance can grade any number of rows, from any number of threads.
#[derive(Default)]
pub struct RowValidator {
    scanner: InternalReferenceScanner,
}

impl RowValidator {
    pub fn new(scanner: InternalReferenceScanner) -> Self {
        Self { scanner }
    }

    /// Validates one row.
    ///
    /// Cells line up with `headers` by position; a short row reads as if padded
    /// with empty strings. Headers without a rulebook entry are skipped and do
    /// not count towards the denominator.
    pub fn validate_row<C, H>(&self, row: &[C], headers: &[H], rulebook: &Rulebook) -> RowReport
    where
        C: AsRef<str>,
        H: AsRef<str>,
    {
        let mut violations = Vec::new();
        let mut columns = Vec::new();

        for (idx, header) in headers.iter().enumerate() {
            let column = header.as_ref().trim();
            let Some(rule) = rulebook.get(column) else {
                continue;
            };
            let cell: &str = row.get(idx).map_or("", |c| c.as_ref());
            let points = self.score_cell(column, cell, rule, &mut violations);
            columns.push(ColumnScore {
                column: column.to_string(),
                points,
            });
        }

        let earned: u32 = columns.iter().map(|c| c.points).sum();
        let attainable = MAX_COLUMN_POINTS * columns.len() as u32;
        let score = if attainable == 0 {
            0.0
        } else {
            (f64::from(earned) / f64::from(attainable) * 100.0).clamp(0.0, 100.0)
        };

        RowReport {
            violations,
            columns,
            score,
            grade: Grade::from_score(score),
        }
    }

    fn score_cell(
        &self,
        column: &str,
        cell: &str,
        rule: &ColumnRule,
        violations: &mut Vec<Violation>,
    ) -> u32 {
        let value = if cell.trim() == MISSING_MARKER {
            ""
        } else {
            cell.trim()
        };

        let mut points = 0;

        // 1. Count limits
        points += limit_check(
            column,
            word_count(value),
            rule.max_words(),
            ViolationKind::WordLimit,
            violations,
        );
        points += limit_check(
            column,
            parse_delimited_list(value, ITEM_DELIMITER).len(),
            rule.max_items(),
            ViolationKind::ItemLimit,
            violations,
        );
        points += limit_check(
            column,
            parse_delimited_list(value, ITEM_DELIMITER).len(),
            rule.max_steps(),
            ViolationKind::StepLimit,
            violations,
        );
        points += limit_check(
            column,
            parse_delimited_list(value, TAG_DELIMITER).len(),
            rule.max_skills(),
            ViolationKind::SkillLimit,
            violations,
        );
        points += limit_check(
            column,
            parse_delimited_list(value, TAG_DELIMITER).len(),
            rule.max_hashtags(),
            ViolationKind::HashtagLimit,
            violations,
        );
        points += step_words_check(column, value, rule.max_words_per_step(), violations);

        // 2. Enumerated options
        let options = rule.options();
        if !options.is_empty() && !value.is_empty() {
            if options.contains(&value) {
                points += CHECK_POINTS;
            } else {
                violations.push(Violation::new(
                    column,
                    ViolationKind::InvalidOption,
                    format!(
                        "Invalid value: '{}' (valid options: {})",
                        value,
                        options.join(", ")
                    ),
                ));
            }
        }

        // 3. Emptiness
        if !value.is_empty() {
            points += CHECK_POINTS;
        } else if rule.is_required() {
            violations.push(Violation::new(
                column,
                ViolationKind::EmptyRequired,
                "Empty value in required field",
            ));
        } else {
            points += PARTIAL_POINTS;
        }

        // 4. Internal references leaking into customer copy
        if rule.is_customer_facing() {
            let hits = self.scanner.scan(value);
            if hits.is_empty() {
                points += CHECK_POINTS;
            }
            for phrase in hits {
                violations.push(Violation::new(
                    column,
                    ViolationKind::InternalReference,
                    format!("Contains internal reference: '{}'", phrase),
                ));
            }
        }

        points.min(MAX_COLUMN_POINTS)
    }
}

fn limit_check(
    column: &str,
    count: usize,
    limit: Option<usize>,
    kind: ViolationKind,
    violations: &mut Vec<Violation>,
) -> u32 {
    let Some(max) = limit else {
        return 0;
    };
    if count <= max {
        return CHECK_POINTS;
    }
    let (unit, units) = kind.unit();
    violations.push(Violation::new(
        column,
        kind,
        format!("Exceeds {} limit: {} {} (max: {})", unit, count, units, max),
    ));
    0
}

/// Only cells that actually contain steps (a `;`) are inspected; every
/// offending step gets its own violation.
fn step_words_check(
    column: &str,
    value: &str,
    limit: Option<usize>,
    violations: &mut Vec<Violation>,
) -> u32 {
    let Some(max) = limit else {
        return 0;
    };
    if !value.contains(ITEM_DELIMITER) {
        return CHECK_POINTS;
    }

    // Steps are numbered by their position in the cell, blank segments included.
    let before = violations.len();
    for (idx, step) in value.split(ITEM_DELIMITER).enumerate() {
        let words = word_count(step);
        if words > max {
            violations.push(Violation::new(
                column,
                ViolationKind::StepWordLimit,
                format!(
                    "Step {} exceeds word limit: {} words (max: {})",
                    idx + 1,
                    words,
                    max
                ),
            ));
        }
    }

    if violations.len() == before {
        CHECK_POINTS
    } else {
        0
    }
}

/// Validates a row with the built-in internal phrases.
pub fn validate_row<C, H>(row: &[C], headers: &[H], rulebook: &Rulebook) -> RowReport
where
    C: AsRef<str>,
    H: AsRef<str>,
{
    static DEFAULT: OnceLock<RowValidator> = OnceLock::new();
    DEFAULT
        .get_or_init(RowValidator::default)
        .validate_row(row, headers, rulebook)
}
