// rowgrade-core/src/domain/rulebook/mod.rs

pub mod book;
pub mod rule;

pub use book::Rulebook;
pub use rule::{ColumnRule, parse_limit};
