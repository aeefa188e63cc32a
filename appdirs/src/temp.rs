//! Temp directory lifecycle.
//!
//! Removal is guarded: the target must lie strictly inside the platform
//! temp root. Both the temp root itself and anything outside it are
//! rejected before a single file is touched.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::kind::DirKind;
use crate::path::{clean, PathRelationship};
use crate::registry::AppDirs;

impl AppDirs {
    /// Create the application's temp directory with mode `0755`.
    ///
    /// Nothing happens if the directory already exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if no temp directory is assigned,
    /// [`Error::DuplicateName`] if the path exists but is not a directory,
    /// or [`Error::CreateDir`] if creation fails.
    pub fn create_temp(&self) -> Result<()> {
        let path = self.temp_path("create temp directory")?;

        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(Error::DuplicateName {
                path: path.to_path_buf(),
            }),
            Err(_) => create_dir(path),
        }
    }

    /// Recreate a subdirectory of the application's temp directory, deleting
    /// its contents. An empty `subdir` recreates the whole application temp
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`AppDirs::remove_temp`], or
    /// [`Error::CreateDir`] if the directory cannot be created.
    pub fn recreate_temp(&self, subdir: impl AsRef<Path>) -> Result<()> {
        let target = self.checked_temp_target("recreate temp directory", subdir.as_ref())?;
        remove_all(&target)?;
        create_dir(&target)
    }

    /// Remove a subdirectory of the application's temp directory and
    /// everything in it. An empty `subdir` removes the whole application
    /// temp directory. A missing target is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if no temp directory is assigned,
    /// [`Error::TempRootRemoval`] if the target is the platform temp root,
    /// [`Error::UnsafeTempPath`] if the target lies outside it, or an I/O
    /// error if removal fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use appdirs::{AppDirs, Dir, DirKind, DirOptions};
    ///
    /// let mut dirs = AppDirs::new();
    /// dirs.assign(Dir::new(DirKind::Temp, "app", DirOptions::new().path("/etc")).unwrap());
    ///
    /// let err = dirs.remove_temp("").unwrap_err();
    /// assert!(err.is_unsafe());
    /// ```
    pub fn remove_temp(&self, subdir: impl AsRef<Path>) -> Result<()> {
        let target = self.checked_temp_target("remove temp directory", subdir.as_ref())?;
        remove_all(&target)
    }

    fn temp_path(&self, operation: &'static str) -> Result<&Path> {
        self.temp().ok_or(Error::InvalidState {
            operation,
            kind: DirKind::Temp,
        })
    }

    /// Resolve `subdir` inside the temp directory and check it is safe to
    /// delete.
    ///
    /// The check runs on the lexical paths first and again after resolving
    /// symlinks, so a linked directory on the way to the target cannot
    /// point the removal outside the temp root. A link at the target itself
    /// is removed as a link.
    fn checked_temp_target(&self, operation: &'static str, subdir: &Path) -> Result<PathBuf> {
        let temp = self.temp_path(operation)?;
        let root = clean(&self.platform_dirs().temp_dir());
        let target = contained(clean(&temp.join(subdir)), &root)?;

        let real_root = resolve_existing(&root);
        let real_target = match (target.parent(), target.file_name()) {
            (Some(parent), Some(name)) => resolve_existing(parent).join(name),
            _ => resolve_existing(&target),
        };
        if real_target != target {
            log::debug!(
                "temp target {} resolves to {}",
                target.display(),
                real_target.display()
            );
        }

        contained(real_target, &real_root)
    }
}

/// Accept `target` only if it lies strictly inside `root`.
fn contained(target: PathBuf, root: &Path) -> Result<PathBuf> {
    match PathRelationship::between(&target, root) {
        PathRelationship::Descendant => Ok(target),
        PathRelationship::Same => Err(Error::TempRootRemoval { path: target }),
        PathRelationship::Ancestor | PathRelationship::Unrelated => {
            Err(Error::UnsafeTempPath { path: target })
        }
    }
}

/// Canonicalize the deepest existing ancestor of `path` and append the
/// components that do not exist yet.
fn resolve_existing(path: &Path) -> PathBuf {
    for ancestor in path.ancestors() {
        if let Ok(real) = fs::canonicalize(ancestor) {
            return match path.strip_prefix(ancestor) {
                Ok(rest) if !rest.as_os_str().is_empty() => clean(&real.join(rest)),
                _ => real,
            };
        }
    }
    path.to_path_buf()
}

fn remove_all(path: &Path) -> Result<()> {
    let result = match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => {
            log::debug!("removed temp directory {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

fn create_dir(path: &Path) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }

    builder.create(path).map_err(|source| Error::CreateDir {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("created temp directory {}", path.display());
    Ok(())
}
