// rowgrade-core/src/domain/catalog/annotate.rs

use crate::domain::catalog::table::Table;
use crate::domain::validation::RowReport;
use serde::{Deserialize, Serialize};

/// Names of the columns written back next to the catalog data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputColumns {
    pub corrections: String,
    pub score: String,
    pub grade: String,
}

impl Default for OutputColumns {
    fn default() -> Self {
        Self {
            corrections: "Corrections".to_string(),
            score: "Validation Score".to_string(),
            grade: "Grade".to_string(),
        }
    }
}

/// Copy of `table` with the corrections, score and grade columns filled in.
///
/// A column that already exists (a previous run) is overwritten in place.
/// Rows without a matching report keep empty result cells.
pub fn annotate(table: &Table, reports: &[RowReport], columns: &OutputColumns) -> Table {
    let mut headers = table.headers.clone();
    let corrections_idx = column_index(&mut headers, &columns.corrections);
    let score_idx = column_index(&mut headers, &columns.score);
    let grade_idx = column_index(&mut headers, &columns.grade);

    let rows = table
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut cells = row.clone();
            cells.resize(headers.len(), String::new());
            if let Some(report) = reports.get(i) {
                cells[corrections_idx] = report.corrections();
                cells[score_idx] = format!("{:.1}", report.score);
                cells[grade_idx] = report.grade.to_string();
            }
            cells
        })
        .collect();

    Table {
        name: table.name.clone(),
        headers,
        rows,
    }
}

fn column_index(headers: &mut Vec<String>, name: &str) -> usize {
    match headers.iter().position(|h| h.trim() == name) {
        Some(idx) => idx,
        None => {
            headers.push(name.to_string());
            headers.len() - 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rulebook::{ColumnRule, Rulebook};
    use crate::domain::validation::RowValidator;

    fn sample() -> (Table, Rulebook) {
        let rulebook: Rulebook = [(
            "Materials",
            ColumnRule {
                max_items: Some("2".into()),
                ..Default::default()
            },
        )]
        .into_iter()
        .collect();
        let table = Table::new(
            "activities",
            vec!["Title".into(), "Materials".into()],
            vec![
                vec!["Leaf Rubbing".into(), "paper; crayons".into()],
                vec!["Rice Bin".into(), "rice; bowl; scoop".into()],
                vec!["Short".into()],
            ],
        );
        (table, rulebook)
    }

    #[test]
    fn test_appends_result_columns() {
        let (table, rulebook) = sample();
        let reports = table.validate(&RowValidator::default(), &rulebook);
        let out = annotate(&table, &reports, &OutputColumns::default());

        assert_eq!(
            out.headers,
            vec!["Title", "Materials", "Corrections", "Validation Score", "Grade"]
        );
        assert_eq!(out.rows[0][2], "");
        assert_eq!(out.rows[0][3], "40.0");
        assert_eq!(out.rows[0][4], "C");
        assert_eq!(out.rows[1][2], "Materials: Exceeds item limit: 3 items (max: 2)");
        assert_eq!(out.rows[1][3], "20.0");
        assert_eq!(out.rows[2].len(), 5);
    }

    #[test]
    fn test_rerun_overwrites_existing_columns() {
        let (table, rulebook) = sample();
        let validator = RowValidator::default();
        let columns = OutputColumns::default();
        let first = annotate(&table, &table.validate(&validator, &rulebook), &columns);
        let second = annotate(&first, &first.validate(&validator, &rulebook), &columns);
        assert_eq!(first, second);
    }
}
