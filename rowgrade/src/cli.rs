// rowgrade/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rowgrade")]
#[command(about = "Metadata-driven validation and grading of activity catalog rows", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🚀 Grades every catalog of the project (data paths -> target)
    Validate {
        /// Project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Only catalogs whose file name contains this text (ex: "spring")
        #[arg(long, short)]
        select: Option<String>,
    },

    /// 🔎 Grades a single catalog file, no project needed
    Check {
        /// Rulebook file (.csv, .yaml, .yml, .json)
        #[arg(long, short, env = "ROWGRADE_RULEBOOK")]
        rulebook: PathBuf,

        /// Catalog file (.csv, .json)
        #[arg(long, short)]
        input: PathBuf,

        /// Where to write the graded copy
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Print the row reports as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// 📚 Shows the effective rules of a rulebook
    Rules {
        /// Rulebook file (.csv, .yaml, .yml, .json)
        #[arg(long, short, env = "ROWGRADE_RULEBOOK")]
        rulebook: PathBuf,
    },

    /// 🧹 Cleans graded outputs (target/ folder)
    Clean {
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clap::Parser;

    #[test]
    fn test_cli_parse_validate_defaults() -> Result<()> {
        let args = Cli::parse_from(["rowgrade", "validate"]);
        match args.command {
            Commands::Validate {
                project_dir,
                select,
            } => {
                assert_eq!(project_dir.to_string_lossy(), ".");
                assert_eq!(select, None);
                Ok(())
            }
            _ => bail!("Expected Validate command"),
        }
    }

    #[test]
    fn test_cli_parse_validate_select() -> Result<()> {
        let args = Cli::parse_from([
            "rowgrade",
            "validate",
            "--select",
            "spring",
            "--project-dir",
            "/tmp",
        ]);
        match args.command {
            Commands::Validate {
                project_dir,
                select,
            } => {
                assert_eq!(project_dir.to_string_lossy(), "/tmp");
                assert_eq!(select, Some("spring".to_string()));
                Ok(())
            }
            _ => bail!("Expected Validate command"),
        }
    }

    #[test]
    fn test_cli_parse_check() -> Result<()> {
        let args = Cli::parse_from([
            "rowgrade",
            "check",
            "--rulebook",
            "rules.csv",
            "--input",
            "spring.csv",
            "--json",
        ]);
        match args.command {
            Commands::Check {
                rulebook,
                input,
                output,
                json,
            } => {
                assert_eq!(rulebook, PathBuf::from("rules.csv"));
                assert_eq!(input, PathBuf::from("spring.csv"));
                assert_eq!(output, None);
                assert!(json);
                Ok(())
            }
            _ => bail!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_parse_rules() -> Result<()> {
        let args = Cli::parse_from(["rowgrade", "rules", "-r", "metadata/rulebook.yaml"]);
        match args.command {
            Commands::Rules { rulebook } => {
                assert_eq!(rulebook, PathBuf::from("metadata/rulebook.yaml"));
                Ok(())
            }
            _ => bail!("Expected Rules command"),
        }
    }
}
