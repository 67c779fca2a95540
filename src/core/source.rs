//! Wordings source locators and loading.
//!
//! A wordings source is either an `http(s)` URL serving a JSON document, or a
//! path to a `.json` or `.arb` file. Fetching a URL is the only await point of
//! the whole pipeline.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::parsers::json::{ResourceFormat, parse_resource, resource_entries};
use crate::error::{Error, Result};

/// Default HTTP timeout for remote wordings.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceLocator {
    Url(String),
    Json(PathBuf),
    Arb(PathBuf),
}

pub fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

impl ResourceLocator {
    /// Classify a wordings source string.
    pub fn parse(source: &str) -> Result<Self> {
        if is_url(source) {
            Ok(ResourceLocator::Url(source.to_string()))
        } else if source.ends_with(".arb") {
            Ok(ResourceLocator::Arb(PathBuf::from(source)))
        } else if source.ends_with(".json") {
            Ok(ResourceLocator::Json(PathBuf::from(source)))
        } else {
            Err(Error::UnsupportedFormat {
                source_name: source.to_string(),
            })
        }
    }

    /// Read the source and return its key mapping.
    pub async fn load(&self, timeout: Duration) -> Result<BTreeMap<String, Value>> {
        match self {
            ResourceLocator::Url(url) => {
                let json = fetch_json(url, timeout).await?;
                Ok(resource_entries(json, ResourceFormat::NestedJson, url))
            }
            ResourceLocator::Json(path) => read_resource(path, ResourceFormat::NestedJson),
            ResourceLocator::Arb(path) => read_resource(path, ResourceFormat::Arb),
        }
    }
}

fn read_resource(path: &Path, format: ResourceFormat) -> Result<BTreeMap<String, Value>> {
    debug!(path = %path.display(), ?format, "reading wordings");
    let content = fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
    parse_resource(&content, format, &path.to_string_lossy())
}

async fn fetch_json(url: &str, timeout: Duration) -> Result<Value> {
    let http_error = |reason: String| Error::Http {
        url: url.to_string(),
        reason,
    };

    let client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| http_error(format!("failed to create HTTP client: {}", e)))?;

    debug!(url, "fetching wordings");
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| http_error(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(http_error(format!("server returned {}", status)));
    }

    let body = response
        .text()
        .await
        .map_err(|e| http_error(format!("failed to read body: {}", e)))?;

    serde_json::from_str(&body).map_err(|source| Error::Json {
        source_name: url.to_string(),
        source,
    })
}
