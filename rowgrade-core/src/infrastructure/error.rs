// rowgrade-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(rowgrade::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    #[error("Directory Walk Error: {0}")]
    #[diagnostic(code(rowgrade::infra::walk))]
    Walk(#[from] walkdir::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(rowgrade::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON Error: {0}")]
    #[diagnostic(code(rowgrade::infra::json))]
    JsonError(#[from] serde_json::Error),

    // --- CATALOG MIRRORS ---
    #[error("CSV Error: {0}")]
    #[diagnostic(
        code(rowgrade::infra::csv),
        help("Check quoting and encoding of the exported sheet (UTF-8 expected).")
    )]
    CsvError(#[from] csv::Error),

    #[error("Unsupported file format: {0}")]
    #[diagnostic(
        code(rowgrade::infra::format),
        help("Supported formats: .csv, .json (catalogs); .csv, .yaml, .yml, .json (rulebooks).")
    )]
    UnsupportedFormat(String),

    #[error("Configuration Error: {0}")]
    ConfigError(String),

    #[error("Project configuration not found at '{0}'")]
    #[diagnostic(code(rowgrade::infra::config_missing))]
    ConfigNotFound(String),
}
