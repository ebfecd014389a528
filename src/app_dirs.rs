//! Per-user locations: where the game list lives and which desktops to scan.
//!
//! Environment overrides win over the platform defaults from `directories`.

use std::env;
use std::path::PathBuf;

use directories::{BaseDirs, UserDirs};

use crate::error::GameRollError;
use crate::Result;

const APPLICATION: &str = "RandomGamePicker";

const DATA_DIR_ENV: &str = "GAMEROLL_DATA_DIR";
const STORE_FILE_NAME: &str = "games.json";

fn dir_from_env(name: &str) -> Option<PathBuf> {
    let value = env::var_os(name)?;
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}

/// Roaming application data on Windows, `~/.config` on Linux and
/// `~/Library/Application Support` on macOS, each with an application folder.
pub fn get_data_dir() -> Result<PathBuf> {
    if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
        return Ok(dir);
    }

    BaseDirs::new()
        .map(|dirs| dirs.config_dir().join(APPLICATION))
        .ok_or(GameRollError::NoDataDir)
}

/// Default location of the persisted game list.
pub fn get_store_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join(STORE_FILE_NAME))
}

/// The user's desktop, followed by the machine-wide desktop where the
/// platform has one.
pub fn desktop_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(desktop) = UserDirs::new().and_then(|u| u.desktop_dir().map(PathBuf::from)) {
        dirs.push(desktop);
    }
    if let Some(common) = common_desktop_dir() {
        dirs.push(common);
    }
    dirs
}

#[cfg(windows)]
fn common_desktop_dir() -> Option<PathBuf> {
    dir_from_env("PUBLIC").map(|public| public.join("Desktop"))
}

#[cfg(not(windows))]
fn common_desktop_dir() -> Option<PathBuf> {
    None
}
