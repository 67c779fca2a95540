//! Project tree scanning.
//!
//! Entries are classified by the shape of their name, not by their file type:
//! a name without a dot is a directory, a name with exactly one dot is a
//! candidate file, and a name with two or more dots is skipped.

use std::{fs, io, path::Path};

use tracing::debug;
use walkdir::WalkDir;

use super::{engine::apply_all, rules::CompiledRule};
use crate::error::{Error, Result};

/// Optional allow-list of file extensions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSelector {
    extensions: Option<Vec<String>>,
}

impl FileSelector {
    /// Accept every candidate file.
    pub fn any() -> Self {
        Self::default()
    }

    /// Accept only the given extensions. A leading dot is optional.
    pub fn with_extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: Some(
                extensions
                    .into_iter()
                    .map(|ext| ext.as_ref().trim_start_matches('.').to_string())
                    .collect(),
            ),
        }
    }

    pub fn accepts(&self, extension: &str) -> bool {
        match &self.extensions {
            Some(allowed) => allowed.iter().any(|ext| ext == extension),
            None => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameShape<'a> {
    Directory,
    File { extension: &'a str },
    MultiDot,
}

pub fn name_shape(name: &str) -> NameShape<'_> {
    match name.split_once('.') {
        None => NameShape::Directory,
        Some((_, extension)) if !extension.contains('.') => NameShape::File { extension },
        Some(_) => NameShape::MultiDot,
    }
}

#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Every key emitted, across rules and files, in scan order.
    pub keys: Vec<String>,
    pub files_scanned: usize,
    pub files_skipped: usize,
}

/// Walk `root` and apply every rule to every accepted file.
///
/// `root` must be a directory. Read failures abort the scan; entries with an
/// unexpected name shape are skipped.
pub fn scan(root: &Path, rules: &[CompiledRule], selector: &FileSelector) -> Result<ScanOutcome> {
    let metadata = fs::metadata(root).map_err(|err| Error::io(root, err))?;
    if !metadata.is_dir() {
        return Err(Error::io(
            root,
            io::Error::new(io::ErrorKind::NotADirectory, "project source path is not a directory"),
        ));
    }

    let mut outcome = ScanOutcome::default();
    let mut entries = WalkDir::new(root).sort_by_file_name().into_iter();

    while let Some(entry) = entries.next() {
        let entry = entry.map_err(|err| {
            let path = err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            Error::io(path, io::Error::from(err))
        })?;
        if entry.depth() == 0 {
            continue;
        }

        let path = entry.path();
        let name = entry.file_name().to_string_lossy();
        let is_dir = entry.file_type().is_dir();

        match name_shape(&name) {
            NameShape::Directory => {
                if !is_dir {
                    debug!(path = %path.display(), "skipping: no extension and not a directory");
                    outcome.files_skipped += 1;
                }
            }
            NameShape::MultiDot => {
                debug!(path = %path.display(), "skipping: name has more than one extension");
                if is_dir {
                    entries.skip_current_dir();
                }
                outcome.files_skipped += 1;
            }
            NameShape::File { extension } => {
                if is_dir {
                    debug!(path = %path.display(), "skipping: directory name has an extension");
                    entries.skip_current_dir();
                    outcome.files_skipped += 1;
                    continue;
                }
                if !selector.accepts(extension) {
                    debug!(path = %path.display(), extension, "skipping: extension not selected");
                    outcome.files_skipped += 1;
                    continue;
                }

                debug!(path = %path.display(), "file");
                let bytes = fs::read(path).map_err(|err| Error::io(path, err))?;
                let content = String::from_utf8_lossy(&bytes);
                outcome.keys.extend(apply_all(rules, &content));
                outcome.files_scanned += 1;
            }
        }
    }

    Ok(outcome)
}
