// rowgrade-core/src/domain/validation/mod.rs

pub mod delimited;
pub mod grade;
pub mod scanner;
pub mod validator;
pub mod violation;

// Re-exports
pub use delimited::{ITEM_DELIMITER, TAG_DELIMITER, parse_delimited_list, word_count};
pub use grade::Grade;
pub use scanner::{DEFAULT_INTERNAL_PHRASES, InternalReferenceScanner};
pub use validator::{ColumnScore, RowReport, RowValidator, validate_row};
pub use violation::{Violation, ViolationKind};
