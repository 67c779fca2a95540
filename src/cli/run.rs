//! Command dispatch for the selected report mode.
//!
//! Project keys are computed synchronously; the wordings keys are computed on
//! a current-thread tokio runtime since the source may be a URL.

use std::{future::Future, path::Path};

use anyhow::{Context, Result};

use super::args::ReportMode;
use crate::{
    config::{Config, load_config},
    core::{Direction, KeySet, project_keys, resource_keys},
};

/// Keys produced by one run, ready for reporting.
#[derive(Debug)]
pub struct RunOutcome {
    pub mode: ReportMode,
    pub keys: KeySet,
}

pub fn run(config_path: &Path, mode: ReportMode) -> Result<RunOutcome> {
    let config = load_config(config_path)?;

    let keys = match mode {
        ReportMode::AllProjectKeys => collect_project_keys(&config)?,
        ReportMode::AllFileKeys => collect_file_keys(&config)?,
        ReportMode::OrphanProjectKeys => orphan_keys(&config, Direction::Normal)?,
        ReportMode::OrphanFileKeys => orphan_keys(&config, Direction::Inverted)?,
    };

    Ok(RunOutcome { mode, keys })
}

fn collect_project_keys(config: &Config) -> Result<KeySet> {
    let parser = config.project_parser()?;
    let keys = project_keys(config.project_source_path.as_deref(), parser.as_ref())
        .context("Failed to collect project wording keys")?;
    Ok(keys)
}

fn collect_file_keys(config: &Config) -> Result<KeySet> {
    let parser = config.wordings_source_parser.compile()?;
    let keys = block_on(resource_keys(
        config.wordings_source.as_deref(),
        Some(&parser),
        config.fetch_timeout(),
    ))?
    .context("Failed to collect file wording keys")?;
    Ok(keys)
}

fn orphan_keys(config: &Config, direction: Direction) -> Result<KeySet> {
    let differ = config.differ()?;
    let project = collect_project_keys(config)?;
    let file = collect_file_keys(config)?;
    Ok(differ.diff(&project, &file, direction))
}

fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    Ok(runtime.block_on(future))
}
