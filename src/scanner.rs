use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use log::{debug, warn};

use crate::entry::{self, Entry};
use crate::fsutils;

const SHORTCUT_EXTENSIONS: [&str; 2] = ["lnk", "exe"];
const INTERNET_SHORTCUT_EXTENSION: &str = "url";
const URL_KEY: &str = "url=";

pub const STEAM_SCHEME: &str = "steam://";

/// Decides which files count as games and collects them from directories.
#[derive(Debug, Clone)]
pub struct Scanner {
    url_schemes: Vec<String>,
}

impl Default for Scanner {
    fn default() -> Self {
        Scanner::with_url_schemes(vec![STEAM_SCHEME.to_string()])
    }
}

impl Scanner {
    /// `schemes` are the URL prefixes an internet shortcut must point at,
    /// e.g. `steam://`.
    pub fn with_url_schemes(schemes: Vec<String>) -> Self {
        Scanner {
            url_schemes: schemes.into_iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    pub fn url_schemes(&self) -> &[String] {
        &self.url_schemes
    }

    /// Shortcuts and executables always pass. Internet shortcuts pass only
    /// when their URL uses one of the accepted schemes.
    pub fn should_include(&self, path: &Path) -> bool {
        let ext = match extension_of(path) {
            Some(ext) => ext,
            None => return false,
        };
        if SHORTCUT_EXTENSIONS.contains(&ext.as_str()) {
            return true;
        }
        if ext == INTERNET_SHORTCUT_EXTENSION {
            return match read_shortcut_url(path) {
                Ok(Some(url)) => self.accepts_url(&url),
                Ok(None) => false,
                Err(err) => {
                    debug!("skipping unreadable {}: {err}", path.display());
                    false
                }
            };
        }
        false
    }

    fn accepts_url(&self, url: &str) -> bool {
        let url = url.to_lowercase();
        self.url_schemes
            .iter()
            .any(|scheme| url.starts_with(scheme.as_str()))
    }

    /// Top-level files of every existing directory that pass
    /// [`Scanner::should_include`], as included entries.
    pub fn scan(&self, dirs: &[PathBuf]) -> Vec<Entry> {
        let mut results = Vec::new();
        for dir in dirs {
            if !dir.is_dir() {
                if dir.exists() {
                    warn!("not a directory, skipping scan of {}", dir.display());
                }
                continue;
            }
            results.extend(
                fsutils::get_top_level_files(dir)
                    .into_iter()
                    .filter(|path| entry::is_storable(path) && self.should_include(path))
                    .map(|path| Entry::from_path(&path)),
            );
        }
        results
    }
}

/// Lowercase text after the last dot of the file name. A bare `.exe` counts
/// as an `exe` file.
fn extension_of(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy().to_lowercase();
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() {
        None
    } else {
        Some(ext.to_string())
    }
}

/// Value of the first `URL=` line of an internet shortcut. Bytes that are not
/// UTF-8 become U+FFFD rather than failing the whole file.
fn read_shortcut_url(path: &Path) -> io::Result<Option<String>> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(&*text);
    for line in text.lines() {
        let is_url_line = line
            .get(..URL_KEY.len())
            .is_some_and(|key| key.eq_ignore_ascii_case(URL_KEY));
        if is_url_line {
            return Ok(Some(line[URL_KEY.len()..].trim().to_string()));
        }
    }
    Ok(None)
}
