pub mod tmpfile;

use std::path::{Path, PathBuf};

use log::warn;

/// Regular files directly inside `dir`, sorted by file name.
///
/// Hidden files are listed and ignore files are not honoured: a desktop is not
/// a source tree.
pub fn get_top_level_files(dir: &Path) -> Vec<PathBuf> {
    ignore::WalkBuilder::new(dir)
        .standard_filters(false)
        .max_depth(Some(1))
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
        .filter_map(|result| match result {
            Ok(dir_entry) if dir_entry.depth() == 1 => Some(PathBuf::from(dir_entry.path())),
            Ok(_) => None,
            Err(err) => {
                warn!("skipping unreadable entry in {}: {err}", dir.display());
                None
            }
        })
        .filter(|path| path.is_file())
        .collect()
}
