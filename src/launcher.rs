use std::io;

use log::info;

use crate::entry::Entry;
use crate::error::GameRollError;
use crate::Result;

pub trait Launcher {
    fn launch(&self, entry: &Entry) -> Result<()>;
}

/// Hands the path to the desktop's default handler without waiting for it.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsLauncher;

impl Launcher for OsLauncher {
    fn launch(&self, entry: &Entry) -> Result<()> {
        let failed = |source: io::Error| GameRollError::Launch {
            name: entry.name.clone(),
            source,
        };
        if !entry.path.exists() {
            return Err(failed(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", entry.path.display()),
            )));
        }
        open::that_detached(&entry.path).map_err(failed)?;
        info!("launched {} ({})", entry.name, entry.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_target_is_a_launch_error() {
        let dir = tempdir().unwrap();
        let entry = Entry::from_path(&dir.path().join("gone.exe"));

        let err = OsLauncher.launch(&entry).unwrap_err();
        assert!(matches!(err, GameRollError::Launch { ref name, .. } if name == "gone"));
        assert!(err.to_string().starts_with("failed to launch 'gone': "));
    }
}
