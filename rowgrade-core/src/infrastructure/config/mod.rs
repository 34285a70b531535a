pub mod project;
pub mod rulebook;

pub use crate::domain::project::ProjectConfig;
pub use project::load_project_config;
pub use rulebook::{load_rulebook, resolve_rulebook_path};
