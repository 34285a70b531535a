// rowgrade-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Invalid internal phrase '{phrase}': {reason}")]
    #[diagnostic(
        code(rowgrade::domain::phrase),
        help("Internal phrases are matched literally; check 'validation.internal-phrases'.")
    )]
    InvalidPhrase { phrase: String, reason: String },
}
