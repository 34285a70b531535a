// rowgrade-core/src/infrastructure/adapters/json.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::catalog::{OutputColumns, Table, annotate};
use crate::domain::validation::RowReport;
use crate::error::RowgradeError;
use crate::infrastructure::adapters::table_name;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::write_json;
use crate::ports::{ResultSink, RowSource};

/// JSON mirror of a sheet: `{"headers": [...], "rows": [[...], ...]}`.
/// Cells may be strings, numbers, booleans or null.
#[derive(Debug, Deserialize)]
struct JsonTable {
    #[serde(default)]
    name: Option<String>,
    headers: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<Value>>,
}

#[derive(Debug, Serialize)]
struct GradedJsonTable<'a> {
    name: &'a str,
    headers: &'a [String],
    rows: &'a [Vec<String>],
    reports: &'a [RowReport],
}

fn cell_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

pub fn parse_table(default_name: String, content: &str) -> Result<Table, InfrastructureError> {
    let raw: JsonTable = serde_json::from_str(content)?;
    let rows = raw
        .rows
        .into_iter()
        .map(|row| row.into_iter().map(cell_text).collect())
        .collect();
    Ok(Table::new(
        raw.name.unwrap_or(default_name),
        raw.headers,
        rows,
    ))
}

pub struct JsonRowSource {
    path: PathBuf,
}

impl JsonRowSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RowSource for JsonRowSource {
    async fn fetch_table(&self) -> Result<Table, RowgradeError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let table = parse_table(table_name(&self.path), &content)?;
        debug!(path = ?self.path, rows = table.rows.len(), "JSON catalog loaded");
        Ok(table)
    }
}

/// Writes the annotated table plus the full per-row reports.
pub struct JsonResultSink {
    path: PathBuf,
    columns: OutputColumns,
}

impl JsonResultSink {
    pub fn new(path: &Path, columns: OutputColumns) -> Self {
        Self {
            path: path.to_path_buf(),
            columns,
        }
    }
}

#[async_trait]
impl ResultSink for JsonResultSink {
    async fn write_results(
        &self,
        table: &Table,
        reports: &[RowReport],
    ) -> Result<(), RowgradeError> {
        let annotated = annotate(table, reports, &self.columns);
        let graded = GradedJsonTable {
            name: &annotated.name,
            headers: &annotated.headers,
            rows: &annotated.rows,
            reports,
        };
        write_json(&self.path, &graded)?;
        debug!(path = ?self.path, "Graded JSON written");
        Ok(())
    }
}
