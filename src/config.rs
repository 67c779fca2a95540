use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::{
    ExtractionRule, FileSelector, KeyDiffer, ProjectParser, RewriteRule, WordingsParser,
    rules::compile_rule_set, source::is_url,
};

pub const DEFAULT_WILDCARD: &str = r"\*";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_source_path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_source_parser: Option<ProjectSourceParser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wordings_source: Option<String>,
    #[serde(default)]
    pub wordings_source_parser: WordingsSourceParser,
    #[serde(default = "default_wildcard")]
    pub wildcard: Option<String>,
    #[serde(default)]
    pub include: bool,
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

/// How keys are extracted from project files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSourceParser {
    /// Allowed file extensions; every single-extension file when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<ExtractionRule>,
    /// Older flat form: each match is post-processed by every replace.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matches: Vec<LegacyMatch>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replaces: Vec<RewriteRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LegacyMatch {
    pub regex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
}

/// How keys read from the wordings source are rewritten.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordingsSourceParser {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replaces: Vec<RewriteRule>,
}

fn default_wildcard() -> Option<String> {
    Some(DEFAULT_WILDCARD.to_string())
}

fn default_fetch_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_source_path: None,
            project_source_parser: None,
            wordings_source: None,
            wordings_source_parser: WordingsSourceParser::default(),
            wildcard: default_wildcard(),
            include: false,
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

impl ProjectSourceParser {
    /// The full rule set: explicit rules first, then one rule per legacy match.
    ///
    /// A legacy match becomes a match rule whose continuation chains every
    /// legacy replace in order.
    pub fn rule_set(&self) -> Vec<ExtractionRule> {
        let replaces = self.replaces.iter().rev().fold(None, |next, replace| {
            Some(Box::new(ExtractionRule::Replace {
                pattern: replace.pattern.clone(),
                replacement: replace.replacement.clone(),
                next,
            }))
        });

        self.rules
            .iter()
            .cloned()
            .chain(self.matches.iter().map(|m| ExtractionRule::Match {
                pattern: m.regex.clone(),
                capture_index: m.position,
                next: replaces.clone(),
            }))
            .collect()
    }

    /// Compile the rule set. A parser without any rule is rejected.
    pub fn compile(&self) -> crate::Result<ProjectParser> {
        let rules = self.rule_set();
        if rules.is_empty() {
            return Err(crate::Error::Configuration(
                "project source parser has no rules".to_string(),
            ));
        }
        let selector = match &self.extensions {
            Some(extensions) => FileSelector::with_extensions(extensions),
            None => FileSelector::any(),
        };
        Ok(ProjectParser {
            rules: compile_rule_set(&rules)?,
            selector,
        })
    }
}

impl WordingsSourceParser {
    pub fn compile(&self) -> crate::Result<WordingsParser> {
        Ok(WordingsParser {
            rewrites: self
                .replaces
                .iter()
                .map(RewriteRule::compile)
                .collect::<crate::Result<_>>()?,
        })
    }
}

impl Config {
    /// Compile every pattern so configuration defects surface before any I/O.
    pub fn validate(&self) -> crate::Result<()> {
        if let Some(parser) = &self.project_source_parser {
            parser.compile()?;
        }
        self.wordings_source_parser.compile()?;
        self.differ()?;
        Ok(())
    }

    pub fn project_parser(&self) -> crate::Result<Option<ProjectParser>> {
        self.project_source_parser
            .as_ref()
            .map(ProjectSourceParser::compile)
            .transpose()
    }

    pub fn differ(&self) -> crate::Result<KeyDiffer> {
        KeyDiffer::new(self.wildcard.as_deref(), self.include)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Resolve relative source paths against `base_dir`. URLs are left alone.
    pub fn resolve_paths(&mut self, base_dir: &Path) {
        if let Some(path) = &self.project_source_path
            && path.is_relative()
        {
            self.project_source_path = Some(base_dir.join(path));
        }
        if let Some(source) = &self.wordings_source
            && !is_url(source)
            && Path::new(source).is_relative()
        {
            self.wordings_source = Some(base_dir.join(source).to_string_lossy().into_owned());
        }
    }
}

/// Load, resolve and validate a configuration file.
///
/// Relative paths inside the file are taken relative to the file itself.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let mut config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    config.resolve_paths(base_dir);
    config
        .validate()
        .with_context(|| format!("Invalid config file: {:?}", path))?;

    Ok(config)
}
