// rowgrade-core/src/domain/catalog/mod.rs

pub mod annotate;
pub mod table;

pub use annotate::{OutputColumns, annotate};
pub use table::Table;
