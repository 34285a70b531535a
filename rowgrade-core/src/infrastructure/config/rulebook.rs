// rowgrade-core/src/infrastructure/config/rulebook.rs

use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::domain::project::ProjectConfig;
use crate::domain::rulebook::{ColumnRule, Rulebook};
use crate::infrastructure::error::InfrastructureError;

/// Accepted headers for the column-name field of a CSV rulebook.
const NAME_HEADERS: [&str; 4] = ["column", "field", "column name", "field name"];

pub fn resolve_rulebook_path(project_dir: &Path, config: &ProjectConfig) -> PathBuf {
    project_dir.join(&config.rulebook)
}

/// Loads a rulebook, picking the parser from the file extension.
#[instrument]
pub fn load_rulebook(path: &Path) -> Result<Rulebook, InfrastructureError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let content = fs::read_to_string(path)?;
    let rulebook = match extension.as_str() {
        "csv" => parse_csv_rulebook(&content)?,
        "yaml" | "yml" => {
            let entries: BTreeMap<String, serde_yaml::Value> = serde_yaml::from_str(&content)?;
            collect_entries(entries, serde_yaml::from_value)
        }
        "json" => {
            let entries: BTreeMap<String, serde_json::Value> = serde_json::from_str(&content)?;
            collect_entries(entries, serde_json::from_value)
        }
        other => {
            return Err(InfrastructureError::UnsupportedFormat(format!(
                "rulebook '{}' (extension '{}')",
                path.display(),
                other
            )));
        }
    };

    info!(columns = rulebook.len(), "Rulebook loaded");
    Ok(rulebook)
}

/// Builds a rulebook entry by entry; an entry that is not a field mapping is
/// skipped instead of failing the whole file.
fn collect_entries<V, E>(
    entries: BTreeMap<String, V>,
    parse: impl Fn(V) -> Result<ColumnRule, E>,
) -> Rulebook
where
    E: Display,
{
    let mut rulebook = Rulebook::new();
    for (column, value) in entries {
        match parse(value) {
            Ok(rule) => {
                rulebook.insert(&column, rule);
            }
            Err(e) => warn!(column = %column, error = %e, "Skipping unreadable rulebook entry"),
        }
    }
    rulebook
}

fn parse_csv_rulebook(content: &str) -> Result<Rulebook, InfrastructureError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.trim_start_matches('\u{feff}').as_bytes());

    let headers: HashMap<String, usize> = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(idx, h)| (h.trim().to_lowercase(), idx))
        .collect();

    let name_idx = NAME_HEADERS
        .iter()
        .find_map(|h| headers.get(*h).copied())
        .ok_or_else(|| {
            InfrastructureError::ConfigError(format!(
                "Rulebook CSV needs a column-name header (one of {:?})",
                NAME_HEADERS
            ))
        })?;

    let mut rulebook = Rulebook::new();
    for (line, record) in reader.records().enumerate() {
        let record = record?;
        let name = record.get(name_idx).map(str::trim).unwrap_or_default();
        if name.is_empty() {
            debug!(line = line + 2, "Skipping rulebook row without a column name");
            continue;
        }

        let rule = ColumnRule::from_fields(|field| {
            headers
                .get(&field.to_lowercase())
                .and_then(|idx| record.get(*idx))
                .map(ToString::to_string)
        });

        if rulebook.insert(name, rule).is_some() {
            warn!(column = name, "Duplicate rulebook entry, keeping the last one");
        }
    }

    Ok(rulebook)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Context, Result};
    use tempfile::tempdir;

    const CSV: &str = "\u{feff}Column,Max Words,Max Items,Options,Rules,Customer Facing,Notes
Title,6,,,Required,Yes,shown on cards
Materials,,6.0,,,Yes,
Supervision Level,,,\"High, Medium, Low\",must pick one,No,
,,,,,,orphan row
Age Range,N/A
";

    #[test]
    fn test_csv_rulebook() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("rulebook.csv");
        fs::write(&path, CSV)?;

        let book = load_rulebook(&path)?;
        assert_eq!(book.len(), 4);

        let title = book.get("Title").context("Title")?;
        assert_eq!(title.max_words(), Some(6));
        assert!(title.is_required());
        assert!(title.is_customer_facing());

        let materials = book.get("Materials").context("Materials")?;
        assert_eq!(materials.max_items(), Some(6));
        assert!(!materials.is_required());

        let supervision = book.get("Supervision Level").context("Supervision")?;
        assert_eq!(supervision.options(), vec!["High", "Medium", "Low"]);
        assert!(supervision.is_required());

        let age = book.get("Age Range").context("Age Range")?;
        assert_eq!(age.max_words(), None);
        Ok(())
    }

    #[test]
    fn test_csv_without_name_column() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("rulebook.csv");
        fs::write(&path, "Max Words,Rules\n6,Required\n")?;

        let err = load_rulebook(&path).err();
        assert!(matches!(err, Some(InfrastructureError::ConfigError(_))));
        Ok(())
    }

    #[test]
    fn test_yaml_rulebook() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("rulebook.yml");
        fs::write(
            &path,
            "Steps:\n  Max Steps: 8\n  Max Words per Step: 15\n  Rules: required\n",
        )?;

        let book = load_rulebook(&path)?;
        let steps = book.get("Steps").context("Steps")?;
        assert_eq!(steps.max_steps(), Some(8));
        assert_eq!(steps.max_words_per_step(), Some(15));
        Ok(())
    }

    #[test]
    fn test_bad_entries_do_not_sink_the_rulebook() -> Result<()> {
        let dir = tempdir()?;
        let yaml = dir.path().join("rulebook.yaml");
        fs::write(
            &yaml,
            "Topic:\n  Max Words: 6\nSupervision Level:\n  Options: [High, Medium, Low]\nNotes: just text\n",
        )?;

        let book = load_rulebook(&yaml)?;
        assert_eq!(book.len(), 2);
        assert_eq!(book.get("Topic").context("Topic")?.max_words(), Some(6));
        assert_eq!(
            book.get("Supervision Level").context("Supervision")?.options(),
            vec!["High", "Medium", "Low"]
        );
        assert!(!book.contains("Notes"));

        let json = dir.path().join("rulebook.json");
        fs::write(
            &json,
            r#"{"Topic": {"Max Words": 6}, "Steps": {"Max Steps": {"value": 3}}, "Age": 4}"#,
        )?;

        let book = load_rulebook(&json)?;
        assert_eq!(book.len(), 2);
        assert_eq!(book.get("Topic").context("Topic")?.max_words(), Some(6));
        assert_eq!(book.get("Steps").context("Steps")?.max_steps(), None);
        assert!(!book.contains("Age"));
        Ok(())
    }

    #[test]
    fn test_unknown_extension() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("rulebook.xlsx");
        fs::write(&path, "")?;

        let err = load_rulebook(&path).err();
        assert!(matches!(err, Some(InfrastructureError::UnsupportedFormat(_))));
        Ok(())
    }
}
