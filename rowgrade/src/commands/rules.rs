// rowgrade/src/commands/rules.rs
//
// USE CASE: Show how a rulebook will actually be applied.

use std::path::PathBuf;

use anyhow::Context;
use rowgrade_core::infrastructure::config::load_rulebook;

use crate::render;

pub fn execute(rulebook: PathBuf) -> anyhow::Result<()> {
    let book = load_rulebook(&rulebook)
        .with_context(|| format!("Failed to load rulebook {:?}", rulebook))?;

    println!("📚 Rulebook {} ({} columns)", rulebook.display(), book.len());
    println!("{}", render::rules_table(&book));
    Ok(())
}
