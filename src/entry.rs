use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Entry {
    #[serde(alias = "name")]
    pub name: String,
    #[serde(alias = "path")]
    pub path: PathBuf,
    #[serde(alias = "included", default = "included_by_default")]
    pub included: bool,
}

fn included_by_default() -> bool {
    true
}

impl Entry {
    pub fn new(name: String, path: PathBuf, included: bool) -> Self {
        Entry {
            name,
            path,
            included,
        }
    }

    /// Entry named after the file stem, included.
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Entry::new(name, path.to_path_buf(), true)
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Identity key used for deduplication.
    pub fn key(&self) -> String {
        path_key(&self.path)
    }
}

/// Whether `path` can be written to the game list, which stores paths as
/// JSON strings.
pub fn is_storable(path: &Path) -> bool {
    if path.to_str().is_some() {
        return true;
    }
    debug!("skipping {}: name is not valid UTF-8", path.display());
    false
}

pub fn path_key(path: &Path) -> String {
    path.to_string_lossy().to_lowercase()
}
