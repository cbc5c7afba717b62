use crate::error::{Result, WeeklyError};
use ignore::{Walk, WalkBuilder};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const GIT_MARKER: &str = ".git";

/// Lazy walk yielding the working directory of every repository found.
pub struct RepoWalk {
    root: PathBuf,
    inner: Walk,
}

impl RepoWalk {
    /// Canonical root the walk started from.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Iterator for RepoWalk {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        for entry in self.inner.by_ref() {
            match entry {
                Ok(entry) => {
                    if entry.depth() == 0 || entry.file_name() != OsStr::new(GIT_MARKER) {
                        continue;
                    }
                    if let Some(workdir) = entry.path().parent() {
                        debug!(repo = %workdir.display(), "found repository");
                        return Some(workdir.to_path_buf());
                    }
                }
                Err(err) => warn!(%err, "skipping unreadable entry"),
            }
        }
        None
    }
}

/// Walk `root` looking for `.git` markers.
///
/// `depth` bounds how far below `root` a working directory may be; depth 0
/// only checks `root` itself. Nothing inside a `.git` directory is visited.
pub fn discover<P: AsRef<Path>>(root: P, depth: usize) -> Result<RepoWalk> {
    let root = check_root(root.as_ref())?;

    let inner = WalkBuilder::new(&root)
        .max_depth(Some(depth + 1))
        .hidden(false)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .parents(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|entry| {
            entry.depth() == 0
                || entry
                    .path()
                    .parent()
                    .and_then(Path::file_name)
                    .map_or(true, |name| name != OsStr::new(GIT_MARKER))
        })
        .build();

    Ok(RepoWalk { root, inner })
}

/// Absolute, readable directory or a `PathError`.
pub fn check_root(root: &Path) -> Result<PathBuf> {
    let root = fs::canonicalize(root).map_err(|e| WeeklyError::path(root, e))?;
    let meta = fs::metadata(&root).map_err(|e| WeeklyError::path(&root, e))?;
    if !meta.is_dir() {
        return Err(WeeklyError::NotADirectory(root));
    }
    fs::read_dir(&root).map_err(|e| WeeklyError::path(&root, e))?;
    Ok(root)
}
