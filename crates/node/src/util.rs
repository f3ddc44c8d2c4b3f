//! Path helpers for config files.
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use crate::error::Error;
use crate::error::Result;

/// Resolve a leading `~` against the home directory of the current user.
pub fn expand_home(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    match path.strip_prefix("~") {
        Ok(rest) => home::home_dir()
            .map(|home| home.join(rest))
            .ok_or(Error::HomeDirError),
        Err(_) => Ok(path.to_path_buf()),
    }
}

/// Create the directory a config file is about to be written into.
/// A bare file name is written into the working directory.
pub fn create_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        None => Err(Error::ParentDirError),
        Some(dir) if dir.as_os_str().is_empty() => Ok(()),
        Some(dir) => fs::create_dir_all(dir).map_err(|e| Error::CreateFileError(e.to_string())),
    }
}
