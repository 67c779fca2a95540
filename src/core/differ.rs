//! Wildcard-aware key set comparison.
//!
//! Keys from the first list are "local" keys (usually extracted from the
//! project), keys from the second are "server" keys (usually read from the
//! wordings). Whatever the direction, a local key may carry wildcard tokens
//! that stand for any run of characters in the server key.

use regex::Regex;
use tracing::trace;

use super::{keyset::KeySet, rules::compile_pattern};
use crate::error::Result;

/// Which list the result is drawn from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Members of the first list without an equivalent in the second.
    Normal,
    /// Members of the second list without an equivalent in the first.
    #[default]
    Inverted,
}

/// Equivalence rule shared by [`KeyDiffer::diff`] and [`KeyDiffer::intersect`].
#[derive(Debug, Clone, Default)]
pub struct KeyDiffer {
    wildcard: Option<Regex>,
    include: bool,
}

struct LocalKey<'a> {
    key: &'a str,
    pattern: Option<Regex>,
}

impl KeyDiffer {
    /// `wildcard` is a regular expression locating the wildcard token inside
    /// local keys (`\*` for a literal asterisk). With `include`, a server key
    /// containing the local key also counts as equivalent.
    pub fn new(wildcard: Option<&str>, include: bool) -> Result<Self> {
        Ok(Self {
            wildcard: wildcard.map(compile_pattern).transpose()?,
            include,
        })
    }

    /// Anchored pattern for a local key, or `None` when it has no wildcard.
    ///
    /// Everything except the wildcard tokens is escaped, so dots, brackets and
    /// other metacharacters in keys compare literally.
    pub fn local_pattern(&self, local: &str) -> Option<Regex> {
        let wildcard = self.wildcard.as_ref()?;

        let mut pattern = String::from("(?s)^");
        let mut last = 0;
        let mut found = false;
        for token in wildcard.find_iter(local).filter(|m| !m.is_empty()) {
            pattern.push_str(&regex::escape(&local[last..token.start()]));
            pattern.push_str(".*");
            last = token.end();
            found = true;
        }
        if !found {
            return None;
        }
        pattern.push_str(&regex::escape(&local[last..]));
        pattern.push('$');

        Regex::new(&pattern).ok()
    }

    fn local_keys<'a>(&self, keys: &'a [String]) -> Vec<LocalKey<'a>> {
        keys.iter()
            .map(|key| LocalKey {
                key,
                pattern: self.local_pattern(key),
            })
            .collect()
    }

    fn is_equivalent(&self, local: &LocalKey<'_>, server: &str) -> bool {
        if local.key == server {
            return true;
        }
        if let Some(pattern) = &local.pattern
            && pattern.is_match(server)
        {
            trace!(local = local.key, server, "wildcard match");
            return true;
        }
        self.include && server.contains(local.key)
    }

    /// Keys with no equivalent on the other side.
    pub fn diff(&self, keys_a: &[String], keys_b: &[String], direction: Direction) -> KeySet {
        self.select(keys_a, keys_b, direction, false)
    }

    /// Keys that do have an equivalent on the other side.
    pub fn intersect(&self, keys_a: &[String], keys_b: &[String], direction: Direction) -> KeySet {
        self.select(keys_a, keys_b, direction, true)
    }

    fn select(
        &self,
        keys_a: &[String],
        keys_b: &[String],
        direction: Direction,
        keep_equivalent: bool,
    ) -> KeySet {
        let locals = self.local_keys(keys_a);

        match direction {
            Direction::Normal => locals
                .iter()
                .filter(|local| {
                    let found = keys_b.iter().any(|server| self.is_equivalent(local, server));
                    found == keep_equivalent
                })
                .map(|local| local.key)
                .collect(),
            Direction::Inverted => keys_b
                .iter()
                .filter(|server| {
                    let found = locals.iter().any(|local| self.is_equivalent(local, server));
                    found == keep_equivalent
                })
                .map(String::as_str)
                .collect(),
        }
    }
}

/// Orphan keys between two lists, with an optional wildcard token.
pub fn diff(
    keys_a: &[String],
    keys_b: &[String],
    direction: Direction,
    wildcard: Option<&str>,
) -> Result<KeySet> {
    Ok(KeyDiffer::new(wildcard, false)?.diff(keys_a, keys_b, direction))
}
