// rowgrade-core/src/application/pipeline.rs

use futures::StreamExt;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{error, info, instrument};

use crate::application::summary::TableSummary;
use crate::domain::catalog::Table;
use crate::domain::project::ProjectConfig;
use crate::domain::rulebook::Rulebook;
use crate::domain::validation::{InternalReferenceScanner, RowReport, RowValidator};
use crate::error::RowgradeError;
use crate::infrastructure::adapters::{open_sink, open_source};
use crate::infrastructure::discovery::{CatalogDiscovery, CatalogFile};
use crate::infrastructure::fs::write_json;
use crate::ports::{ResultSink, RowSource};

pub const RUN_RESULTS_FILE: &str = "run_results.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileResult {
    pub source: PathBuf,
    pub output: PathBuf,
    pub summary: TableSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    pub success: bool,
    pub generated_at: String,
    pub min_score: f64,
    pub files: Vec<FileResult>,
    pub errors: Vec<String>,
}

impl RunResult {
    pub fn rows_below_threshold(&self) -> usize {
        self.files
            .iter()
            .map(|f| f.summary.below_threshold.len())
            .sum()
    }
}

/// Reads one table, grades every row and hands the results to the sink.
pub async fn grade_table(
    source: &dyn RowSource,
    sink: &dyn ResultSink,
    validator: &RowValidator,
    rulebook: &Rulebook,
) -> Result<(Table, Vec<RowReport>), RowgradeError> {
    let table = source.fetch_table().await?;
    let reports = table.validate(validator, rulebook);
    sink.write_results(&table, &reports).await?;
    Ok((table, reports))
}

/// Grades every discovered catalog of a project and writes the graded copies
/// plus `run_results.json` into the target directory.
///
/// A file that cannot be read or written is recorded in `errors`; the other
/// files are still processed.
#[instrument(skip(config, rulebook))]
pub async fn run_validation(
    project_dir: &Path,
    config: &ProjectConfig,
    rulebook: &Rulebook,
    select: Option<&str>,
) -> Result<RunResult, RowgradeError> {
    let start_time = Instant::now();
    let settings = &config.validation;

    let validator = RowValidator::new(InternalReferenceScanner::new(&settings.internal_phrases)?);
    let target_dir = project_dir.join(&config.target_path);
    tokio::fs::create_dir_all(&target_dir).await?;

    // 1. DISCOVERY
    let files = CatalogDiscovery::discover(project_dir, config, select)?;
    info!(files = files.len(), "Catalog files selected");

    // 2. GRADING (bounded concurrency across files)
    let validator = &validator;
    let target_dir_ref = &target_dir;
    let outcomes: Vec<(CatalogFile, Result<FileResult, RowgradeError>)> =
        futures::stream::iter(files)
            .map(|file| async move {
                let res = grade_file(&file, target_dir_ref, validator, rulebook, config).await;
                (file, res)
            })
            .buffer_unordered(settings.concurrency.max(1))
            .collect()
            .await;

    // 3. COLLECT
    let mut results = Vec::new();
    let mut errors = Vec::new();
    for (file, outcome) in outcomes {
        match outcome {
            Ok(result) => {
                info!(
                    file = %file.path.display(),
                    rows = result.summary.rows,
                    mean = result.summary.mean_score,
                    "Catalog graded"
                );
                results.push(result);
            }
            Err(e) => {
                error!(file = %file.path.display(), error = %e, "Catalog failed");
                errors.push(format!("{}: {}", file.path.display(), e));
            }
        }
    }
    results.sort_by(|a, b| a.source.cmp(&b.source));
    errors.sort();

    let result = RunResult {
        success: errors.is_empty(),
        generated_at: chrono::Utc::now().to_rfc3339(),
        min_score: settings.min_score,
        files: results,
        errors,
    };

    write_json(target_dir.join(RUN_RESULTS_FILE), &result)?;

    info!(
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        files = result.files.len(),
        "Validation run finished"
    );
    Ok(result)
}

async fn grade_file(
    file: &CatalogFile,
    target_dir: &Path,
    validator: &RowValidator,
    rulebook: &Rulebook,
    config: &ProjectConfig,
) -> Result<FileResult, RowgradeError> {
    let output = file.graded_path(target_dir);
    let source = open_source(&file.path)?;
    let sink = open_sink(&output, config.validation.output_columns())?;

    let (table, reports) =
        grade_table(source.as_ref(), sink.as_ref(), validator, rulebook).await?;

    Ok(FileResult {
        source: file.path.clone(),
        output,
        summary: TableSummary::from_reports(&table.name, &reports, config.validation.min_score),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::rulebook::ColumnRule;
    use anyhow::Result;
    use async_trait::async_trait;
    use std::fs;
    use std::sync::{Arc, Mutex};
    use tempfile::tempdir;

    // --- MOCK PORTS ---
    struct StaticSource(Table);

    #[async_trait]
    impl RowSource for StaticSource {
        async fn fetch_table(&self) -> Result<Table, RowgradeError> {
            Ok(self.0.clone())
        }
    }

    #[derive(Clone, Default)]
    struct RecordingSink {
        written: Arc<Mutex<Vec<(String, usize)>>>,
    }

    #[async_trait]
    impl ResultSink for RecordingSink {
        async fn write_results(
            &self,
            table: &Table,
            reports: &[RowReport],
        ) -> Result<(), RowgradeError> {
            self.written
                .lock()
                .unwrap()
                .push((table.name.clone(), reports.len()));
            Ok(())
        }
    }

    fn rulebook() -> Rulebook {
        [
            (
                "Title",
                ColumnRule {
                    max_words: Some("4".into()),
                    rules: Some("Required".into()),
                    ..Default::default()
                },
            ),
            (
                "Description",
                ColumnRule {
                    customer_facing: Some("Yes".into()),
                    ..Default::default()
                },
            ),
        ]
        .into_iter()
        .collect()
    }

    #[tokio::test]
    async fn test_grade_table_with_mock_ports() -> Result<()> {
        let table = Table::new(
            "mock",
            vec!["Title".into(), "Description".into()],
            vec![
                vec!["Leaf Rubbing".into(), "Rub crayons over leaves".into()],
                vec!["".into(), "Everything in our activity kit".into()],
            ],
        );
        let sink = RecordingSink::default();

        let (_, reports) = grade_table(
            &StaticSource(table),
            &sink,
            &RowValidator::default(),
            &rulebook(),
        )
        .await?;

        assert_eq!(reports.len(), 2);
        assert!(reports[0].is_clean());
        assert_eq!(reports[1].violations.len(), 2);
        assert_eq!(*sink.written.lock().unwrap(), vec![("mock".to_string(), 2)]);
        Ok(())
    }

    #[tokio::test]
    async fn test_run_validation_writes_outputs() -> Result<()> {
        let dir = tempdir()?;
        fs::create_dir_all(dir.path().join("data"))?;
        fs::write(
            dir.path().join("data/spring.csv"),
            "Title,Description\nLeaf Rubbing,Rub crayons over leaves\n,Supplied By Us\n",
        )?;
        fs::write(dir.path().join("data/broken.json"), "{ not json")?;

        let mut config: ProjectConfig = serde_yaml::from_str("name: test")?;
        config.validation.min_score = 30.0;

        let result = run_validation(dir.path(), &config, &rulebook(), None).await?;

        assert!(!result.success);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("broken.json"));
        assert_eq!(result.files.len(), 1);

        let spring = &result.files[0];
        assert_eq!(spring.summary.rows, 2);
        assert_eq!(spring.summary.below_threshold, vec![2]);
        assert_eq!(result.rows_below_threshold(), 1);
        assert!(spring.output.ends_with("target/spring.graded.csv"));
        assert!(spring.output.exists());
        assert!(dir.path().join("target").join(RUN_RESULTS_FILE).exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_select_limits_files() -> Result<()> {
        let dir = tempdir()?;
        fs::create_dir_all(dir.path().join("data"))?;
        fs::write(dir.path().join("data/spring.csv"), "Title\nKites\n")?;
        fs::write(dir.path().join("data/autumn.csv"), "Title\nLeaves\n")?;

        let config: ProjectConfig = serde_yaml::from_str("name: test")?;
        let result = run_validation(dir.path(), &config, &rulebook(), Some("autumn")).await?;

        assert!(result.success);
        assert_eq!(result.files.len(), 1);
        assert_eq!(result.files[0].summary.name, "autumn");
        Ok(())
    }
}
