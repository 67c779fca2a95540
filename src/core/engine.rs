//! Recursive pattern engine.
//!
//! Derives keys from a text blob by walking a compiled rule tree. Each level
//! feeds its intermediate results to the continuation rule, if any, and the
//! results of every level are concatenated in order. Nothing is deduplicated
//! here.

use tracing::trace;

use super::rules::CompiledRule;

/// Apply one rule tree to `text`.
///
/// `depth` only shows up in trace output.
pub fn apply(rule: &CompiledRule, text: &str, depth: usize) -> Vec<String> {
    match rule {
        CompiledRule::Match {
            regex,
            capture_index,
            next,
        } => {
            let mut keys = Vec::new();
            for captures in regex.captures_iter(text) {
                // Missing or empty groups are routine in source text, not errors.
                let Some(value) = captures
                    .get(*capture_index)
                    .map(|m| m.as_str())
                    .filter(|value| !value.is_empty())
                else {
                    trace!(depth, pattern = regex.as_str(), "match without capture group {}", capture_index);
                    continue;
                };

                trace!(depth, value, "match");
                match next {
                    Some(next) => keys.extend(apply(next, value, depth + 1)),
                    None => keys.push(value.to_string()),
                }
            }
            keys
        }
        CompiledRule::Replace {
            regex,
            replacement,
            next,
        } => {
            let replaced = regex.replace(text, replacement.as_str());
            trace!(depth, from = text, to = %replaced, "replace");
            match next {
                Some(next) => apply(next, &replaced, depth + 1),
                None if replaced.is_empty() => Vec::new(),
                None => vec![replaced.into_owned()],
            }
        }
        CompiledRule::Ignore { regex, next } => {
            if regex.is_match(text) {
                trace!(depth, value = text, "ignored");
                return Vec::new();
            }
            match next {
                Some(next) => apply(next, text, depth + 1),
                None if text.is_empty() => Vec::new(),
                None => vec![text.to_string()],
            }
        }
    }
}

/// Apply every rule of a rule set to the same text and concatenate the results.
pub fn apply_all(rules: &[CompiledRule], text: &str) -> Vec<String> {
    rules.iter().flat_map(|rule| apply(rule, text, 0)).collect()
}
