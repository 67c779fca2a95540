//! CLI argument definitions using clap.
//!
//! ## Report modes
//!
//! - `--show-all-project-keys`: every key referenced in the project
//! - `--show-all-file-keys`: every key defined in the wordings source
//! - `--show-orphan-project-keys`: project keys missing from the wordings
//! - `--show-orphan-file-keys` (default): wordings keys unused in the project

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Get all wording keys from a file that are unused in a project",
    long_about = None
)]
pub struct Arguments {
    /// [Required] Path to the config JSON file (e.g. .clean_wording_config.json)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub mode: ModeArgs,

    /// Show verbose logs
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    /// Return the config path, or print help and return None when it is missing.
    pub fn config_or_help(&self) -> Option<PathBuf> {
        if self.config.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            self.config.clone()
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
#[group(multiple = false)]
pub struct ModeArgs {
    /// Show all detected project wording keys
    #[arg(long)]
    pub show_all_project_keys: bool,

    /// Show all detected file wording keys
    #[arg(long)]
    pub show_all_file_keys: bool,

    /// Show project wording keys not present in the file wording keys
    #[arg(long)]
    pub show_orphan_project_keys: bool,

    /// [Default] Show file wording keys not present in the project wording keys
    #[arg(long)]
    pub show_orphan_file_keys: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    AllProjectKeys,
    AllFileKeys,
    OrphanProjectKeys,
    OrphanFileKeys,
}

impl ModeArgs {
    pub fn mode(&self) -> ReportMode {
        if self.show_all_project_keys {
            ReportMode::AllProjectKeys
        } else if self.show_all_file_keys {
            ReportMode::AllFileKeys
        } else if self.show_orphan_project_keys {
            ReportMode::OrphanProjectKeys
        } else {
            ReportMode::OrphanFileKeys
        }
    }
}
