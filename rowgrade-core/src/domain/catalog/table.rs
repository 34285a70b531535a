// rowgrade-core/src/domain/catalog/table.rs

use crate::domain::rulebook::Rulebook;
use crate::domain::validation::{RowReport, RowValidator};
use serde::{Deserialize, Serialize};

/// One catalog sheet: a header row plus activity rows.
/// Rows may be shorter than `headers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(name: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            headers,
            rows,
        }
    }

    /// Headers the rulebook knows about, in sheet order.
    pub fn tracked_columns<'a>(&'a self, rulebook: &'a Rulebook) -> Vec<&'a str> {
        self.headers
            .iter()
            .map(String::as_str)
            .filter(|h| rulebook.contains(h))
            .collect()
    }

    pub fn validate(&self, validator: &RowValidator, rulebook: &Rulebook) -> Vec<RowReport> {
        self.rows
            .iter()
            .map(|row| validator.validate_row(row, &self.headers, rulebook))
            .collect()
    }
}
