// rowgrade-core/src/ports/mod.rs

pub mod catalog;

pub use catalog::{ResultSink, RowSource};
