// rowgrade-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use miette::Diagnostic;
use thiserror::Error;

/// Everything a validation run or a clean can fail with.
#[derive(Error, Debug, Diagnostic)]
pub enum RowgradeError {
    /// Bad internal phrase list.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Domain(#[from] DomainError),

    /// Files, config, rulebooks and catalog mirrors.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error("Refusing to remove '{0}': clean targets must stay inside the project directory")]
    #[diagnostic(
        code(rowgrade::clean::unsafe_path),
        help("Use plain relative paths in 'clean-targets', without '..' or a leading '/'.")
    )]
    UnsafePath(String),
}

impl From<std::io::Error> for RowgradeError {
    fn from(err: std::io::Error) -> Self {
        Self::Infrastructure(InfrastructureError::Io(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(err: &RowgradeError) -> Option<String> {
        err.code().map(|c| c.to_string())
    }

    #[test]
    fn test_diagnostic_codes_pass_through() {
        let domain = RowgradeError::from(DomainError::InvalidPhrase {
            phrase: "(".into(),
            reason: "unbalanced".into(),
        });
        assert_eq!(code(&domain).as_deref(), Some("rowgrade::domain::phrase"));

        let unsafe_path = RowgradeError::UnsafePath("../outside".into());
        assert_eq!(code(&unsafe_path).as_deref(), Some("rowgrade::clean::unsafe_path"));
        assert!(unsafe_path.to_string().contains("../outside"));
    }
}
