use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::{info, warn};

use crate::app_dirs;
use crate::entry::Entry;
use crate::fsutils::tmpfile;
use crate::Result;

/// The persisted game list: a JSON array rewritten wholesale on every save.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: PathBuf) -> Self {
        Store { path }
    }

    pub fn open_default() -> Result<Self> {
        Ok(Store::new(app_dirs::get_store_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the list, treating a missing, unreadable or corrupt file as
    /// "no saved data". Failures are logged, never returned.
    pub fn load(&self) -> Vec<Entry> {
        match self.try_load() {
            Ok(entries) => entries,
            Err(err) => {
                warn!("ignoring saved games at {}: {err}", self.path.display());
                Vec::new()
            }
        }
    }

    /// Like [`Store::load`] but surfaces read and parse errors. A missing file
    /// is still an empty list.
    pub fn try_load(&self) -> Result<Vec<Entry>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        let entries: Option<Vec<Entry>> = serde_json::from_str(&json)?;
        Ok(entries.unwrap_or_default())
    }

    pub fn save(&self, entries: &[Entry]) -> Result<()> {
        let json = serde_json::to_string_pretty(entries)?;
        tmpfile::write_atomic(&self.path, json.as_bytes())?;
        info!("saved {} game(s) to {}", entries.len(), self.path.display());
        Ok(())
    }
}
