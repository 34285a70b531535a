// rowgrade-core/src/infrastructure/config/project.rs

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::domain::project::ProjectConfig;
use crate::infrastructure::error::InfrastructureError;

const CONFIG_CANDIDATES: [&str; 2] = ["rowgrade.yaml", "rowgrade_project_conf.yaml"];

// --- LOADER ---

#[instrument(skip(project_dir))]
pub fn load_project_config(project_dir: &Path) -> Result<ProjectConfig, InfrastructureError> {
    // 1. Locate the main file
    let config_path = find_main_config(project_dir)?;
    info!(path = ?config_path, "Loading project configuration");

    // 2. Parse
    let content = fs::read_to_string(&config_path)?;
    let mut config: ProjectConfig = serde_yaml::from_str(&content)?;

    // 3. Environment overrides (layering)
    // e.g. ROWGRADE_MIN_SCORE=70 rowgrade validate
    apply_env_overrides(&mut config);

    // 4. Semantic checks, after overrides so env values are checked too
    config.validate().map_err(|e| {
        InfrastructureError::ConfigError(format!("{}: {}", config_path.display(), e))
    })?;

    Ok(config)
}

fn find_main_config(root: &Path) -> Result<PathBuf, InfrastructureError> {
    for filename in CONFIG_CANDIDATES {
        let p = root.join(filename);
        if p.exists() {
            return Ok(p);
        }
    }
    Err(InfrastructureError::ConfigNotFound(format!(
        "No configuration file found in {:?}. Checked: {:?}",
        root, CONFIG_CANDIDATES
    )))
}

fn apply_env_overrides(config: &mut ProjectConfig) {
    if let Ok(val) = std::env::var("ROWGRADE_TARGET_PATH") {
        info!(old = ?config.target_path, new = ?val, "Overriding target path via ENV");
        config.target_path = val;
    }
    if let Ok(val) = std::env::var("ROWGRADE_RULEBOOK") {
        info!(old = ?config.rulebook, new = ?val, "Overriding rulebook via ENV");
        config.rulebook = val;
    }
    if let Ok(val) = std::env::var("ROWGRADE_MIN_SCORE") {
        match val.trim().parse::<f64>() {
            Ok(min_score) => {
                info!(old = config.validation.min_score, new = min_score, "Overriding min score via ENV");
                config.validation.min_score = min_score;
            }
            Err(_) => warn!(value = %val, "Ignoring unparseable ROWGRADE_MIN_SCORE"),
        }
    }
}
