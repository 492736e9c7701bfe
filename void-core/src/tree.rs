//! Directory tree primitives: deep copy and symlink-safe removal.

use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{io_err, RegistryError};

/// Recursively copy `src` into `dst`, which must not exist yet.
///
/// Directories are recreated, regular files copied with their permissions,
/// and symlinks recreated as symlinks (never followed).
pub fn copy_tree(src: &Path, dst: &Path) -> Result<(), RegistryError> {
    let walker = WalkDir::new(src).follow_links(false).sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src).to_path_buf();
            io_err(path, e.into())
        })?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| io_err(entry.path(), std::io::Error::other(e)))?;
        let target = dst.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            std::fs::create_dir_all(&target).map_err(|e| io_err(&target, e))?;
        } else if file_type.is_symlink() {
            copy_symlink(entry.path(), &target)?;
        } else {
            std::fs::copy(entry.path(), &target).map_err(|e| io_err(&target, e))?;
        }
    }
    debug!("copied tree {} -> {}", src.display(), dst.display());
    Ok(())
}

/// Remove `path` without following symlinks out of it.
///
/// A symlink at `path` itself is unlinked (its target is left alone). For a
/// real directory, `remove_dir_all` removes nested symlinks as links.
pub fn remove_tree(path: &Path) -> Result<(), RegistryError> {
    let meta = std::fs::symlink_metadata(path).map_err(|e| io_err(path, e))?;
    if meta.file_type().is_symlink() || meta.is_file() {
        remove_link_or_file(path)?;
    } else {
        std::fs::remove_dir_all(path).map_err(|e| io_err(path, e))?;
    }
    debug!("removed {}", path.display());
    Ok(())
}

/// `true` if anything (including a dangling symlink) exists at `path`.
pub fn entry_exists(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_ok()
}

#[cfg(unix)]
fn copy_symlink(src: &Path, dst: &Path) -> Result<(), RegistryError> {
    let target = std::fs::read_link(src).map_err(|e| io_err(src, e))?;
    std::os::unix::fs::symlink(&target, dst).map_err(|e| io_err(dst, e))
}

#[cfg(windows)]
fn copy_symlink(src: &Path, dst: &Path) -> Result<(), RegistryError> {
    let target = std::fs::read_link(src).map_err(|e| io_err(src, e))?;
    let result = if std::fs::metadata(src).map(|m| m.is_dir()).unwrap_or(false) {
        std::os::windows::fs::symlink_dir(&target, dst)
    } else {
        std::os::windows::fs::symlink_file(&target, dst)
    };
    result.map_err(|e| io_err(dst, e))
}

#[cfg(windows)]
fn remove_link_or_file(path: &Path) -> Result<(), RegistryError> {
    // Directory symlinks on Windows are removed with remove_dir.
    std::fs::remove_file(path)
        .or_else(|_| std::fs::remove_dir(path))
        .map_err(|e| io_err(path, e))
}

#[cfg(not(windows))]
fn remove_link_or_file(path: &Path) -> Result<(), RegistryError> {
    std::fs::remove_file(path).map_err(|e| io_err(path, e))
}
