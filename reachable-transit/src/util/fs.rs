use std::path::Path;

use crate::ReachError;

/// helper function to "mkdir -p path" - make all directories along a path
pub fn create_dirs<P>(path: P) -> Result<(), ReachError>
where
    P: AsRef<Path>,
{
    let dirspath = path.as_ref();
    if !dirspath.is_dir() {
        log::debug!("creating output directory {dirspath:?}");
        std::fs::create_dir_all(dirspath).map_err(|e| ReachError::io(dirspath, e))
    } else {
        Ok(())
    }
}

/// creates the parent directory of a file path, if it has one.
pub fn create_parent_dirs<P>(filepath: P) -> Result<(), ReachError>
where
    P: AsRef<Path>,
{
    match filepath.as_ref().parent() {
        Some(parent) if !parent.as_os_str().is_empty() => create_dirs(parent),
        _ => Ok(()),
    }
}

/// writes the full contents of a file, truncating anything already there.
pub fn write_file<P>(filepath: P, contents: &[u8]) -> Result<(), ReachError>
where
    P: AsRef<Path>,
{
    let path = filepath.as_ref();
    std::fs::write(path, contents).map_err(|e| ReachError::io(path, e))
}
