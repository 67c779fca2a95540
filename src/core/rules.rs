//! Declarative extraction and rewrite rules.
//!
//! Rules are deserialized from the configuration file and compiled once into
//! regex-carrying forms before any file is read, so a broken pattern stops the
//! run before I/O starts.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Maximum nesting depth of an extraction rule tree.
///
/// The engine recurses once per nesting level, so capping the tree caps the
/// stack.
pub const MAX_RULE_DEPTH: usize = 64;

/// Capture group used when a match rule does not name one.
pub const DEFAULT_CAPTURE_INDEX: usize = 1;

/// A possibly recursive instruction for deriving keys from text.
///
/// ```json
/// { "type": "match", "pattern": "i18n\\.t\\(\"([^\"]+)\"", "next": {
///     "type": "ignore", "pattern": "^debug\\." } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ExtractionRule {
    /// Scan for every non-overlapping occurrence and extract one capture group.
    #[serde(rename_all = "camelCase")]
    Match {
        #[serde(alias = "regex")]
        pattern: String,
        #[serde(default, alias = "position", skip_serializing_if = "Option::is_none")]
        capture_index: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        next: Option<Box<ExtractionRule>>,
    },
    /// Replace the first occurrence in the whole text.
    #[serde(rename_all = "camelCase")]
    Replace {
        #[serde(alias = "regex")]
        pattern: String,
        #[serde(default, alias = "by", skip_serializing_if = "Option::is_none")]
        replacement: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        next: Option<Box<ExtractionRule>>,
    },
    /// Drop the text when the pattern matches anywhere, pass it through otherwise.
    #[serde(rename_all = "camelCase")]
    Ignore {
        #[serde(alias = "regex")]
        pattern: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        next: Option<Box<ExtractionRule>>,
    },
}

/// An [`ExtractionRule`] with its pattern compiled.
#[derive(Debug, Clone)]
pub enum CompiledRule {
    Match {
        regex: Regex,
        capture_index: usize,
        next: Option<Box<CompiledRule>>,
    },
    Replace {
        regex: Regex,
        replacement: String,
        next: Option<Box<CompiledRule>>,
    },
    Ignore {
        regex: Regex,
        next: Option<Box<CompiledRule>>,
    },
}

impl ExtractionRule {
    /// Shorthand for a match rule on capture group 1 with no continuation.
    pub fn matching(pattern: impl Into<String>) -> Self {
        ExtractionRule::Match {
            pattern: pattern.into(),
            capture_index: None,
            next: None,
        }
    }

    /// Compile the rule tree, rejecting invalid patterns and trees nested
    /// deeper than [`MAX_RULE_DEPTH`].
    pub fn compile(&self) -> Result<CompiledRule> {
        self.compile_at(1)
    }

    fn compile_at(&self, depth: usize) -> Result<CompiledRule> {
        if depth > MAX_RULE_DEPTH {
            return Err(Error::Configuration(format!(
                "extraction rule nested deeper than {} levels",
                MAX_RULE_DEPTH
            )));
        }

        let compile_next = |next: &Option<Box<ExtractionRule>>| -> Result<Option<Box<CompiledRule>>> {
            next.as_ref()
                .map(|rule| rule.compile_at(depth + 1).map(Box::new))
                .transpose()
        };

        Ok(match self {
            ExtractionRule::Match {
                pattern,
                capture_index,
                next,
            } => CompiledRule::Match {
                regex: compile_pattern(pattern)?,
                capture_index: capture_index.unwrap_or(DEFAULT_CAPTURE_INDEX),
                next: compile_next(next)?,
            },
            ExtractionRule::Replace {
                pattern,
                replacement,
                next,
            } => {
                let regex = compile_pattern(pattern)?;
                let replacement = replacement_template(&regex, replacement.as_deref());
                CompiledRule::Replace {
                    regex,
                    replacement,
                    next: compile_next(next)?,
                }
            }
            ExtractionRule::Ignore { pattern, next } => CompiledRule::Ignore {
                regex: compile_pattern(pattern)?,
                next: compile_next(next)?,
            },
        })
    }
}

/// Compile every rule of a rule set, in order.
pub fn compile_rule_set(rules: &[ExtractionRule]) -> Result<Vec<CompiledRule>> {
    rules.iter().map(ExtractionRule::compile).collect()
}

/// A substitution applied to every extracted key.
///
/// Without a replacement the matched substring is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteRule {
    #[serde(alias = "regex")]
    pub pattern: String,
    #[serde(default, alias = "by", skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
}

impl RewriteRule {
    pub fn new(pattern: impl Into<String>, replacement: Option<&str>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.map(String::from),
        }
    }

    pub fn compile(&self) -> Result<CompiledRewrite> {
        let regex = compile_pattern(&self.pattern)?;
        let replacement = replacement_template(&regex, self.replacement.as_deref());
        Ok(CompiledRewrite { regex, replacement })
    }
}

#[derive(Debug, Clone)]
pub struct CompiledRewrite {
    regex: Regex,
    replacement: String,
}

impl CompiledRewrite {
    /// Replace the first occurrence of the pattern in `key`.
    pub fn apply(&self, key: &str) -> String {
        self.regex
            .replace(key, self.replacement.as_str())
            .into_owned()
    }
}

/// Translate a replacement written with `String.prototype.replace` references
/// into the `regex` crate's expansion syntax.
///
/// `$1`..`$99` and `$<name>` name a group only when the pattern has it, `$&` is
/// the whole match and `$$` is a literal dollar. Any other `$` is literal.
pub(crate) fn replacement_template(regex: &Regex, replacement: Option<&str>) -> String {
    let Some(replacement) = replacement else {
        return String::new();
    };
    let groups = regex.captures_len() - 1;
    let is_group = |index: usize| (1..=groups).contains(&index);

    let mut template = String::with_capacity(replacement.len());
    let mut rest = replacement;
    while let Some(at) = rest.find('$') {
        template.push_str(&rest[..at]);
        let after = &rest[at + 1..];
        let digits = after.bytes().take(2).take_while(u8::is_ascii_digit).count();

        let two = (digits == 2).then(|| after[..2].parse::<usize>().ok()).flatten();
        let one = (digits >= 1).then(|| after[..1].parse::<usize>().ok()).flatten();
        let (expansion, consumed) = if let Some(index) = two.filter(|&i| is_group(i)) {
            (format!("${{{index}}}"), 2)
        } else if let Some(index) = one.filter(|&i| is_group(i)) {
            (format!("${{{index}}}"), 1)
        } else if after.starts_with('$') {
            ("$$".to_string(), 1)
        } else if after.starts_with('&') {
            ("${0}".to_string(), 1)
        } else if let Some(name) = after
            .strip_prefix('<')
            .and_then(|tail| tail.split_once('>'))
            .map(|(name, _)| name)
            .filter(|name| regex.capture_names().flatten().any(|group| group == *name))
        {
            (format!("${{{name}}}"), name.len() + 2)
        } else {
            ("$$".to_string(), 0)
        };

        template.push_str(&expansion);
        rest = &after[consumed..];
    }
    template.push_str(rest);
    template
}

pub(crate) fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::PatternSyntax {
        pattern: pattern.to_string(),
        source,
    })
}
