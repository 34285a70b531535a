// rowgrade-core/src/infrastructure/discovery.rs

use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::domain::project::ProjectConfig;
use crate::infrastructure::adapters::CatalogFormat;
use crate::infrastructure::error::InfrastructureError;

/// A catalog mirror found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFile {
    pub path: PathBuf,
    pub format: CatalogFormat,
}

impl CatalogFile {
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// `<target>/<stem>.graded.<ext>`
    pub fn graded_path(&self, target_dir: &Path) -> PathBuf {
        target_dir.join(format!("{}.graded.{}", self.stem(), self.format.extension()))
    }
}

pub struct CatalogDiscovery;

impl CatalogDiscovery {
    /// Walks the configured data paths for CSV/JSON catalogs.
    ///
    /// `select` keeps only files whose stem contains the substring
    /// (case-insensitive), the way a sheet is picked by part of its title.
    /// Anything under the target directory is ignored so graded copies are
    /// never re-graded.
    pub fn discover(
        project_dir: &Path,
        config: &ProjectConfig,
        select: Option<&str>,
    ) -> Result<Vec<CatalogFile>, InfrastructureError> {
        let target_dir = project_dir.join(&config.target_path);
        let select = select.map(|s| s.trim().to_lowercase());
        let mut files = Vec::new();

        for data_path in &config.data_paths {
            let root = project_dir.join(data_path);
            if !root.exists() {
                warn!(path = ?root, "Data path does not exist, skipping");
                continue;
            }

            for entry in WalkDir::new(&root).follow_links(true) {
                let entry = entry?;
                let path = entry.path();
                if !entry.file_type().is_file() || path.starts_with(&target_dir) {
                    continue;
                }
                let Some(format) = CatalogFormat::from_path(path) else {
                    continue;
                };
                let file = CatalogFile {
                    path: path.to_path_buf(),
                    format,
                };
                if let Some(needle) = &select
                    && !file.stem().to_lowercase().contains(needle.as_str())
                {
                    continue;
                }
                debug!(path = ?file.path, "Catalog discovered");
                files.push(file);
            }
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));
        files.dedup();
        Ok(files)
    }
}
