// rowgrade-core/src/lib.rs

// 1. Mandatory documentation for production code
#![allow(missing_docs)]

// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// Where rows come from and where graded rows go.
pub mod ports;

// 2. Domain (business core)
// Rulebook, row validator, scoring. Depends on nothing else (no infra, no app).
pub mod domain;

// 3. Infrastructure (Adapters)
// Config files, rulebook loaders, CSV/JSON catalog mirrors, discovery.
pub mod infrastructure;

// 4. Application (Use Cases)
// Orchestration (pipeline, summaries, clean).
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use domain::rulebook::{ColumnRule, Rulebook};
pub use domain::validation::{Grade, RowReport, RowValidator, Violation, validate_row};
pub use error::RowgradeError;
