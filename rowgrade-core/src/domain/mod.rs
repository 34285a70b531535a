pub mod catalog;
pub mod error;
pub mod project;
pub mod rulebook;
pub mod validation;

// Handy re-exports to keep imports short elsewhere
pub use error::DomainError;
