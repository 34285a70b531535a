// rowgrade/src/commands/validate.rs
//
// USE CASE: Grade every catalog of a project.

use std::path::PathBuf;

use anyhow::Context;
use rowgrade_core::application::run_validation;
use rowgrade_core::infrastructure::config::{
    load_project_config, load_rulebook, resolve_rulebook_path,
};

use crate::render;

pub async fn execute(project_dir: PathBuf, select: Option<String>) -> anyhow::Result<()> {
    let start = std::time::Instant::now();

    // A. Load the Config (Infra)
    println!("⚙️  Loading configuration...");
    let config = load_project_config(&project_dir).with_context(|| {
        format!(
            "Failed to load project configuration from {:?}",
            project_dir
        )
    })?;
    println!("   Project: {} (v{})", config.name, config.version);

    // B. Load the Rulebook
    let rulebook_path = resolve_rulebook_path(&project_dir, &config);
    let rulebook = load_rulebook(&rulebook_path)
        .with_context(|| format!("Failed to load rulebook {:?}", rulebook_path))?;
    println!("   Rulebook: {} columns", rulebook.len());

    // C. Run the Pipeline (Application Layer)
    let result = match run_validation(&project_dir, &config, &rulebook, select.as_deref()).await {
        Ok(result) => result,
        Err(e) => {
            eprintln!("\n💥 CRITICAL VALIDATION ERROR: {}", e);
            std::process::exit(1);
        }
    };

    if result.files.is_empty() && result.errors.is_empty() {
        println!("\n⚠️  No catalog files found in {:?}", config.data_paths);
        return Ok(());
    }

    println!("{}", render::summary_table(&result.files));
    for file in &result.files {
        println!("   📄 {}", file.output.display());
    }

    let below = result.rows_below_threshold();
    if !result.success {
        eprintln!("\n❌ FAILURE. {} catalog(s) could not be graded:", result.errors.len());
        for e in &result.errors {
            eprintln!("   ❌ {}", e);
        }
        std::process::exit(1);
    }
    if below > 0 {
        eprintln!(
            "\n❌ FAILURE. {} row(s) scored below the minimum of {:.1}.",
            below, result.min_score
        );
        std::process::exit(1);
    }

    println!("\n✨ SUCCESS! Validation finished in {:.2?}", start.elapsed());
    Ok(())
}
