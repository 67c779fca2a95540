//! Key-set building.
//!
//! Every producer returns a [`KeySet`]: deduplicated and sorted, so results are
//! comparable and reproducible whatever the scan order.

use std::{collections::BTreeSet, ops::Deref, path::Path, time::Duration};

use tracing::debug;

use super::{
    rules::{CompiledRewrite, CompiledRule},
    scanner::{FileSelector, scan},
    source::ResourceLocator,
};
use crate::error::{Error, Result};

/// A deduplicated, lexicographically sorted list of keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySet(Vec<String>);

impl KeySet {
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl Deref for KeySet {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<String> for KeySet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let unique: BTreeSet<String> = iter.into_iter().collect();
        KeySet(unique.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for KeySet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(String::from).collect()
    }
}

/// Deduplicate and sort.
pub fn canonicalize<I, S>(keys: I) -> KeySet
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    keys.into_iter().map(Into::<String>::into).collect()
}

/// Compiled project side of the configuration.
#[derive(Debug, Clone, Default)]
pub struct ProjectParser {
    pub rules: Vec<CompiledRule>,
    pub selector: FileSelector,
}

/// Compiled wordings side of the configuration.
#[derive(Debug, Clone, Default)]
pub struct WordingsParser {
    pub rewrites: Vec<CompiledRewrite>,
}

/// Run every rewrite over every key, in declaration order, then drop keys
/// that became empty.
pub fn rewrite_keys<I>(keys: I, rewrites: &[CompiledRewrite]) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    keys.into_iter()
        .map(|key| {
            rewrites
                .iter()
                .fold(key, |key, rewrite| rewrite.apply(&key))
        })
        .filter(|key| !key.is_empty())
        .collect()
}

/// All keys referenced in the project tree.
pub fn project_keys(root: Option<&Path>, parser: Option<&ProjectParser>) -> Result<KeySet> {
    let root = root.ok_or_else(|| Error::Configuration("no project source path".to_string()))?;
    let parser =
        parser.ok_or_else(|| Error::Configuration("no project source parser".to_string()))?;
    if parser.rules.is_empty() {
        return Err(Error::Configuration(
            "project source parser has no rules".to_string(),
        ));
    }

    let outcome = scan(root, &parser.rules, &parser.selector)?;
    debug!(
        files_scanned = outcome.files_scanned,
        files_skipped = outcome.files_skipped,
        keys = outcome.keys.len(),
        "project scan finished"
    );

    Ok(canonicalize(outcome.keys))
}

/// All keys defined in the wordings source.
pub async fn resource_keys(
    source: Option<&str>,
    parser: Option<&WordingsParser>,
    timeout: Duration,
) -> Result<KeySet> {
    let source =
        source.ok_or_else(|| Error::Configuration("no wordings source".to_string()))?;
    let locator = ResourceLocator::parse(source)?;

    let entries = locator.load(timeout).await?;
    let rewrites = parser
        .map(|parser| parser.rewrites.as_slice())
        .unwrap_or_default();

    Ok(canonicalize(rewrite_keys(entries.into_keys(), rewrites)))
}
