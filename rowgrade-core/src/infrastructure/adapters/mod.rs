// rowgrade-core/src/infrastructure/adapters/mod.rs

pub mod csv;
pub mod json;

use std::path::Path;

use crate::domain::catalog::OutputColumns;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::{ResultSink, RowSource};

pub use self::csv::{CsvResultSink, CsvRowSource};
pub use self::json::{JsonResultSink, JsonRowSource};

/// Catalog mirror formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Csv,
    Json,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

pub fn open_source(path: &Path) -> Result<Box<dyn RowSource>, InfrastructureError> {
    match CatalogFormat::from_path(path) {
        Some(CatalogFormat::Csv) => Ok(Box::new(CsvRowSource::new(path))),
        Some(CatalogFormat::Json) => Ok(Box::new(JsonRowSource::new(path))),
        None => Err(unsupported(path)),
    }
}

pub fn open_sink(
    path: &Path,
    columns: OutputColumns,
) -> Result<Box<dyn ResultSink>, InfrastructureError> {
    match CatalogFormat::from_path(path) {
        Some(CatalogFormat::Csv) => Ok(Box::new(CsvResultSink::new(path, columns))),
        Some(CatalogFormat::Json) => Ok(Box::new(JsonResultSink::new(path, columns))),
        None => Err(unsupported(path)),
    }
}

/// Table name derived from the file stem ("activities.csv" -> "activities").
pub(crate) fn table_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn unsupported(path: &Path) -> InfrastructureError {
    InfrastructureError::UnsupportedFormat(format!("catalog '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            CatalogFormat::from_path(&PathBuf::from("data/Spring.CSV")),
            Some(CatalogFormat::Csv)
        );
        assert_eq!(
            CatalogFormat::from_path(&PathBuf::from("data/spring.json")),
            Some(CatalogFormat::Json)
        );
        assert_eq!(CatalogFormat::from_path(&PathBuf::from("data/spring.xlsx")), None);
        assert!(open_source(&PathBuf::from("notes.txt")).is_err());
    }
}
