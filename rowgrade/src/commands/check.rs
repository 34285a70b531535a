// rowgrade/src/commands/check.rs
//
// USE CASE: One-off grading of a single catalog file.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use rowgrade_core::domain::catalog::OutputColumns;
use rowgrade_core::infrastructure::adapters::{open_sink, open_source};
use rowgrade_core::infrastructure::config::load_rulebook;
use rowgrade_core::ports::{ResultSink, RowSource};
use rowgrade_core::RowValidator;
use tracing::{debug, warn};

use crate::render;

pub async fn execute(
    rulebook: PathBuf,
    input: PathBuf,
    output: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let rulebook = load_rulebook(&rulebook)
        .with_context(|| format!("Failed to load rulebook {:?}", rulebook))?;

    let source = open_source(&input)?;
    let table = source
        .fetch_table()
        .await
        .with_context(|| format!("Failed to read catalog {:?}", input))?;
    debug!(rows = table.rows.len(), "Catalog loaded");

    let tracked = table.tracked_columns(&rulebook);
    if tracked.is_empty() {
        warn!(catalog = %table.name, "No header matches a rulebook column, every row will score 0");
    } else if !json {
        println!("🔎 Checking {} column(s): {}", tracked.len(), tracked.join(", "));
    }

    let reports = table.validate(&RowValidator::default(), &rulebook);

    if let Some(output) = &output {
        open_sink(output, OutputColumns::default())?
            .write_results(&table, &reports)
            .await
            .with_context(|| format!("Failed to write graded copy {:?}", output))?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        println!("{}", render::report_table(&reports));
        if let Some(output) = &output {
            println!("📄 Graded copy written to {}", output.display());
        }
    }

    let dirty = reports.iter().filter(|r| !r.is_clean()).count();
    if dirty > 0 {
        if !json {
            eprintln!("\n⚠️  {} of {} row(s) need corrections.", dirty, reports.len());
        }
        std::io::stdout().flush()?;
        std::process::exit(1);
    }
    Ok(())
}
