use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use rand::{distributions::Alphanumeric, Rng};

/// A scratch file that is removed on drop unless it was persisted.
pub struct TmpFile {
    path: PathBuf,
    persisted: bool,
}

impl TmpFile {
    pub fn new_in(dir: &Path, filename: &str) -> io::Result<TmpFile> {
        let path = dir.join(filename);
        let _ = fs::File::create(&path)?;
        Ok(TmpFile {
            path,
            persisted: false,
        })
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Renames the file over `dst`.
    pub fn persist(mut self, dst: &Path) -> io::Result<()> {
        fs::rename(&self.path, dst)?;
        self.persisted = true;
        Ok(())
    }
}

impl Drop for TmpFile {
    fn drop(&mut self) {
        if !self.persisted {
            let _ = fs::remove_file(&self.path);
        }
    }
}

pub fn get_tmp_file_name() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(char::from)
        .collect()
}

/// Replaces `dst` with `contents` through a sibling temp file and a rename,
/// so readers see either the old file or the new one.
pub fn write_atomic(dst: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = dst.parent().unwrap_or_else(|| Path::new(""));
    fs::create_dir_all(dir)?;
    let stem = dst
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp_file = TmpFile::new_in(dir, &format!(".{stem}.{}.tmp", get_tmp_file_name()))?;
    let mut file = fs::File::create(tmp_file.path())?;
    file.write_all(contents)?;
    file.sync_all()?;
    drop(file);
    tmp_file.persist(dst)
}
