// rowgrade-core/src/application/clean.rs

use crate::error::RowgradeError;
use crate::infrastructure::config::project::load_project_config;
use std::fs;
use std::path::{Component, Path};
use tracing::info;

/// Removes graded copies and run results (`clean-targets`).
/// Returns the targets that were actually removed.
pub fn clean_project(project_dir: &Path) -> Result<Vec<String>, RowgradeError> {
    info!("Initializing cleanup sequence...");

    let config = load_project_config(project_dir)?;

    let targets = if config.clean_targets.is_empty() {
        vec![config.target_path.clone()]
    } else {
        config.clean_targets
    };

    let mut removed = Vec::new();
    for target_rel_path in targets {
        // Path traversal guard: only plain relative paths inside the project
        let rel = Path::new(&target_rel_path);
        if rel
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(RowgradeError::UnsafePath(target_rel_path));
        }

        let full_path = project_dir.join(rel);
        if full_path.is_dir() {
            fs::remove_dir_all(&full_path)?;
        } else if full_path.exists() {
            fs::remove_file(&full_path)?;
        } else {
            continue;
        }
        info!(target = %target_rel_path, "Artifact removed");
        removed.push(target_rel_path);
    }

    Ok(removed)
}
