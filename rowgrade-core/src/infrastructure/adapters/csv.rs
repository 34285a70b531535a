// rowgrade-core/src/infrastructure/adapters/csv.rs

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::catalog::{OutputColumns, Table, annotate};
use crate::domain::validation::RowReport;
use crate::error::RowgradeError;
use crate::infrastructure::adapters::table_name;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::atomic_write;
use crate::ports::{ResultSink, RowSource};

/// Reads a sheet exported as CSV (first record = headers).
pub struct CsvRowSource {
    path: PathBuf,
}

impl CsvRowSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RowSource for CsvRowSource {
    async fn fetch_table(&self) -> Result<Table, RowgradeError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let table = parse_table(table_name(&self.path), &content)?;
        debug!(path = ?self.path, rows = table.rows.len(), "CSV catalog loaded");
        Ok(table)
    }
}

pub fn parse_table(name: String, content: &str) -> Result<Table, InfrastructureError> {
    // Sheets exports may start with a BOM; ragged rows are expected.
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.trim_start_matches('\u{feff}').as_bytes());

    let headers = reader.headers()?.iter().map(ToString::to_string).collect();
    let rows = reader
        .records()
        .map(|record| record.map(|r| r.iter().map(ToString::to_string).collect()))
        .collect::<Result<Vec<Vec<String>>, _>>()?;

    Ok(Table::new(name, headers, rows))
}

pub fn render_table(table: &Table) -> Result<Vec<u8>, InfrastructureError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| InfrastructureError::Io(e.into_error()))
}

/// Writes the annotated copy of a table as CSV.
pub struct CsvResultSink {
    path: PathBuf,
    columns: OutputColumns,
}

impl CsvResultSink {
    pub fn new(path: &Path, columns: OutputColumns) -> Self {
        Self {
            path: path.to_path_buf(),
            columns,
        }
    }
}

#[async_trait]
impl ResultSink for CsvResultSink {
    async fn write_results(
        &self,
        table: &Table,
        reports: &[RowReport],
    ) -> Result<(), RowgradeError> {
        let annotated = annotate(table, reports, &self.columns);
        let bytes = render_table(&annotated)?;
        atomic_write(&self.path, bytes)?;
        debug!(path = ?self.path, "Graded CSV written");
        Ok(())
    }
}
