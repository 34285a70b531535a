// rowgrade-core/src/ports/catalog.rs

// The application only needs "give me a table" and "keep these results".
// Whether the rows come from a CSV mirror, a JSON export or a live sheet is
// an adapter concern.

use crate::domain::catalog::Table;
use crate::domain::validation::RowReport;
use crate::error::RowgradeError;
use async_trait::async_trait;

#[async_trait]
pub trait RowSource: Send + Sync {
    async fn fetch_table(&self) -> Result<Table, RowgradeError>;
}

#[async_trait]
pub trait ResultSink: Send + Sync {
    /// Persists one report per row of `table`, in row order.
    async fn write_results(&self, table: &Table, reports: &[RowReport])
    -> Result<(), RowgradeError>;
}
