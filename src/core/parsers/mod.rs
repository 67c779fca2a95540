//! Wordings document parsers.
//!
//! - `json`: nested JSON flattening and ARB key reading

pub mod json;
