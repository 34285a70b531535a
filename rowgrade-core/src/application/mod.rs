// rowgrade-core/src/application/mod.rs

pub mod clean;
pub mod pipeline;
pub mod summary;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI do `use rowgrade_core::application::{run_validation, clean_project};`
// without knowing the file layout.

pub use clean::clean_project;
pub use pipeline::{FileResult, RunResult, grade_table, run_validation};
pub use summary::TableSummary;
