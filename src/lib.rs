//! Clean Wording - find orphan wording keys
//!
//! Clean Wording is a CLI tool and library that extracts the wording keys
//! referenced in a project's source tree, extracts the keys defined in a
//! wordings resource (a `.json` or `.arb` file, or a JSON document served over
//! HTTP), and reports the keys present on one side but not the other.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, dispatch, report)
//! - `config`: Configuration file loading and validation
//! - `core`: Extraction engine, tree scanner, key-set builder and differ
//! - `error`: Error taxonomy shared by the library
//! - `logging`: Diagnostic tracing setup

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
