// rowgrade/src/commands/clean.rs
//
// USE CASE: Remove graded outputs.

use std::path::PathBuf;

use rowgrade_core::application::clean_project;

pub fn execute(project_dir: PathBuf) -> anyhow::Result<()> {
    match clean_project(&project_dir) {
        Ok(removed) if removed.is_empty() => println!("🧹 Nothing to clean."),
        Ok(removed) => {
            for target in removed {
                println!("   🗑️  Artifact removed: {}", target);
            }
        }
        Err(e) => {
            eprintln!("❌ Clean failed: {}", e);
            std::process::exit(1);
        }
    }
    Ok(())
}
