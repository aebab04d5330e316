//! Registry construction from CLI configuration.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing::debug;

use herdbook_file::{FileObjects, FileStore};
use herdbook_registry::Registry;

/// The registry over the on-disk stores the CLI operates on.
pub type FileRegistry = Registry<FileStore, FileObjects>;

fn data_dir(flag: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir.to_path_buf());
    }

    let dirs =
        ProjectDirs::from("", "", "herdbook").context("Could not determine data directory")?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Open the registry rooted at the given (or default) data directory.
pub fn open_registry(flag: Option<&Path>) -> Result<FileRegistry> {
    let dir = data_dir(flag)?;
    fs::create_dir_all(&dir).context("Failed to create data directory")?;

    debug!(dir = %dir.display(), "Opened registry data directory");

    Ok(Registry::new(FileStore::new(&dir), FileObjects::new(&dir)))
}
