use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use crate::entry::{is_storable, path_key, Entry};
use crate::scanner::Scanner;

/// How user-supplied paths are vetted before they join the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddMode {
    /// Chosen explicitly, e.g. from a file dialog: taken as is.
    Picked,
    /// Dropped onto the window: must exist and look like a game.
    Dropped,
}

/// The ordered in-memory game list. Paths are unique ignoring case.
#[derive(Debug, Default, Clone)]
pub struct GameList {
    entries: Vec<Entry>,
    keys: HashSet<String>,
}

impl GameList {
    /// Builds a list from `entries`, dropping later duplicates.
    pub fn new(entries: Vec<Entry>) -> Self {
        let mut list = GameList::default();
        list.merge(entries);
        list
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_path(&self, path: &Path) -> bool {
        self.keys.contains(&path_key(path))
    }

    /// Appends `entry` unless its path is already listed.
    pub fn add(&mut self, entry: Entry) -> bool {
        if !self.keys.insert(entry.key()) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn merge(&mut self, entries: impl IntoIterator<Item = Entry>) -> usize {
        let mut added = 0;
        for entry in entries {
            if self.add(entry) {
                added += 1;
            }
        }
        added
    }

    pub fn add_paths(&mut self, paths: &[PathBuf], mode: AddMode, scanner: &Scanner) -> usize {
        let mut added = 0;
        for path in paths {
            if !is_storable(path) {
                continue;
            }
            if mode == AddMode::Dropped && !(path.is_file() && scanner.should_include(path)) {
                continue;
            }
            if self.add(Entry::from_path(path)) {
                added += 1;
            }
        }
        added
    }

    pub fn remove(&mut self, index: usize) -> Option<Entry> {
        if index >= self.entries.len() {
            return None;
        }
        let removed = self.entries.remove(index);
        self.keys.remove(&removed.key());
        Some(removed)
    }

    /// Drops every entry whose path is no longer a file on disk.
    pub fn remove_missing(&mut self) -> Vec<Entry> {
        let (kept, missing): (Vec<Entry>, Vec<Entry>) =
            self.entries.drain(..).partition(|e| e.path.is_file());
        self.entries = kept;
        for entry in &missing {
            self.keys.remove(&entry.key());
        }
        missing
    }

    pub fn set_all_included(&mut self, included: bool) {
        for entry in &mut self.entries {
            entry.included = included;
        }
    }

    /// Flips the inclusion flag, returning the new value.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let entry = self.entries.get_mut(index)?;
        entry.included = !entry.included;
        Some(entry.included)
    }

    /// Entries with their positions, narrowed by a case-insensitive search on
    /// name and path and optionally to included ones.
    pub fn filter<'a>(
        &'a self,
        query: &str,
        only_included: bool,
    ) -> impl Iterator<Item = (usize, &'a Entry)> + 'a {
        let query = query.trim().to_lowercase();
        self.entries
            .iter()
            .enumerate()
            .filter(move |(_, e)| !only_included || e.included)
            .filter(move |(_, e)| {
                query.is_empty()
                    || e.name.to_lowercase().contains(&query)
                    || e.key().contains(&query)
            })
    }
}
