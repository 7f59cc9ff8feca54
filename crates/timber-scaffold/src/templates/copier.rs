//! Starter tree copying

use crate::error::ScaffoldError;
use crate::templates::starter::{StarterSource, BUNDLED_STARTER};
use include_dir::{Dir, DirEntry};
use std::io;
use std::path::Path;
use tokio::fs;
use walkdir::WalkDir;

/// Copy the whole starter tree into `destination`, returning the number of files copied
///
/// The destination is created if missing and existing files are overwritten.
/// Copying stops at the first failure; whatever was copied before it stays.
pub async fn copy_starter_tree(
    source: &StarterSource,
    destination: &Path,
) -> Result<usize, ScaffoldError> {
    let copied = match source {
        StarterSource::Bundled => write_embedded_tree(&BUNDLED_STARTER, destination).await,
        StarterSource::Local(root) => copy_tree(root, destination).await,
    };

    copied.map_err(|cause| ScaffoldError::StarterCopy {
        origin: source.to_string(),
        destination: destination.to_path_buf(),
        cause,
    })
}

async fn write_embedded_tree(tree: &Dir<'_>, destination: &Path) -> io::Result<usize> {
    fs::create_dir_all(destination).await?;

    let mut copied = 0;
    let mut pending = vec![tree];

    while let Some(dir) = pending.pop() {
        for entry in dir.entries() {
            // Embedded paths are relative to the tree root
            let target_path = destination.join(entry.path());
            match entry {
                DirEntry::Dir(subdir) => {
                    fs::create_dir_all(&target_path).await?;
                    pending.push(subdir);
                }
                DirEntry::File(file) => {
                    fs::write(&target_path, file.contents()).await?;
                    copied += 1;
                }
            }
        }
    }

    Ok(copied)
}

async fn copy_tree(source: &Path, destination: &Path) -> io::Result<usize> {
    // Ensure target directory exists
    fs::create_dir_all(destination).await?;

    let mut copied = 0;

    for entry in WalkDir::new(source).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let target_path = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target_path).await?;
        } else {
            fs::copy(entry.path(), &target_path).await?;
            copied += 1;
        }
    }

    Ok(copied)
}
