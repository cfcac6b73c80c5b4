//! Filesystem helpers for moving repository content around.
//!
//! Conversion stages everything in a scratch directory and then renames it
//! into place, so these helpers only ever copy and delete; they never edit
//! files in place. Symlinks are replicated as links rather than followed,
//! matching what a working tree checkout contains.

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Recursively copies `src` into `dst`, creating `dst` as needed.
pub(crate) fn copy_dir_all(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst).map_err(|e| Error::io(dst, e))?;
    for entry in fs::read_dir(src).map_err(|e| Error::io(src, e))? {
        let entry = entry.map_err(|e| Error::io(src, e))?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        let file_type = entry.file_type().map_err(|e| Error::io(&from, e))?;
        copy_entry(&from, &to, file_type)?;
    }
    Ok(())
}

/// Copies the contents of `src` into `dst`, skipping top-level entries whose
/// names appear in `skip`. `dst` must already exist.
pub(crate) fn copy_dir_contents_except(src: &Path, dst: &Path, skip: &[&OsStr]) -> Result<()> {
    for entry in fs::read_dir(src).map_err(|e| Error::io(src, e))? {
        let entry = entry.map_err(|e| Error::io(src, e))?;
        let name = entry.file_name();
        if skip.iter().any(|s| *s == name.as_os_str()) {
            continue;
        }
        let from = entry.path();
        let to = dst.join(&name);
        let file_type = entry.file_type().map_err(|e| Error::io(&from, e))?;
        copy_entry(&from, &to, file_type)?;
    }
    Ok(())
}

/// Deletes every top-level entry of `dir` except those named in `keep`.
pub(crate) fn remove_dir_contents_except(dir: &Path, keep: &[&OsStr]) -> Result<()> {
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let name = entry.file_name();
        if keep.iter().any(|k| *k == name.as_os_str()) {
            continue;
        }
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| Error::io(&path, e))?;
        if file_type.is_dir() {
            fs::remove_dir_all(&path).map_err(|e| Error::io(&path, e))?;
        } else {
            fs::remove_file(&path).map_err(|e| Error::io(&path, e))?;
        }
    }
    Ok(())
}

fn copy_entry(from: &Path, to: &Path, file_type: fs::FileType) -> Result<()> {
    clear_destination(to, file_type)?;
    if file_type.is_dir() {
        copy_dir_all(from, to)
    } else if file_type.is_symlink() {
        replicate_symlink(from, to)
    } else {
        fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| Error::io(from, e))
    }
}

/// Removes an entry already occupying `to` unless the incoming entry can
/// overwrite it in place. `fs::copy` truncates an existing regular file but
/// writes through a symlink, and neither links nor directories can be
/// created over an existing name.
fn clear_destination(to: &Path, incoming: fs::FileType) -> Result<()> {
    let Ok(existing) = fs::symlink_metadata(to) else {
        return Ok(());
    };
    let existing = existing.file_type();
    if existing.is_dir() {
        if incoming.is_dir() {
            // Merged by the recursive copy.
            return Ok(());
        }
        fs::remove_dir_all(to).map_err(|e| Error::io(to, e))
    } else if existing.is_file() && incoming.is_file() {
        Ok(())
    } else {
        fs::remove_file(to).map_err(|e| Error::io(to, e))
    }
}

#[cfg(unix)]
fn replicate_symlink(from: &Path, to: &Path) -> Result<()> {
    let target = fs::read_link(from).map_err(|e| Error::io(from, e))?;
    std::os::unix::fs::symlink(target, to).map_err(|e| Error::io(to, e))
}

#[cfg(not(unix))]
fn replicate_symlink(from: &Path, to: &Path) -> Result<()> {
    // Fall back to copying the link target's content.
    fs::copy(from, to)
        .map(|_| ())
        .map_err(|e| Error::io(from, e))
}
