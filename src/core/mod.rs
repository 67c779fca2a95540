//! Core extraction and comparison engine.
//!
//! The pipeline has two producers and one consumer:
//!
//! 1. **Project keys**: `scanner` walks the source tree and runs the `engine`
//!    over each accepted file with the compiled `rules`.
//! 2. **Wordings keys**: `source` loads a file or URL, `parsers` flattens it,
//!    and `keyset` applies the rewrite rules.
//! 3. **Comparison**: `differ` computes orphan keys between the two sets.
//!
//! Both producers return a canonical [`KeySet`].

pub mod differ;
pub mod engine;
pub mod keyset;
pub mod parsers;
pub mod rules;
pub mod scanner;
pub mod source;

pub use differ::{Direction, KeyDiffer, diff};
pub use keyset::{
    KeySet, ProjectParser, WordingsParser, canonicalize, project_keys, resource_keys,
};
pub use parsers::json::flatten;
pub use rules::{CompiledRewrite, CompiledRule, ExtractionRule, RewriteRule};
pub use scanner::FileSelector;
pub use source::ResourceLocator;
