//! Lexical path normalization.
//!
//! Nothing in this module touches the filesystem:
//! - [`clean`] removes `.` components, resolves `..` against preceding
//!   components and collapses redundant separators
//! - [`expand_tilde`] replaces a leading `~` with the home directory
//! - [`abs_path`] combines both to anchor a path at a base directory

use std::path::{Component, Path, PathBuf};

use crate::kind::Platform;

/// Return the shortest lexically equivalent path.
///
/// `..` components that would climb above a root are dropped, while leading
/// `..` components of a relative path are kept. An empty result becomes `.`.
///
/// # Examples
///
/// ```
/// use appdirs::path::clean;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(clean(Path::new("/a/./b/../c/")), PathBuf::from("/a/c"));
/// assert_eq!(clean(Path::new("/../a")), PathBuf::from("/a"));
/// assert_eq!(clean(Path::new("../a//b")), PathBuf::from("../a/b"));
/// assert_eq!(clean(Path::new("a/..")), PathBuf::from("."));
/// ```
#[must_use]
pub fn clean(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    let mut rooted = false;

    for component in path.components() {
        match component {
            Component::Prefix(_) => parts.push(component),
            Component::RootDir => {
                parts.push(component);
                rooted = true;
            }
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                // ".." at the root is the root
                _ if rooted => {}
                _ => parts.push(component),
            },
            Component::Normal(_) => parts.push(component),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Expand a leading `~` to the given home directory.
///
/// Only `~` and `~/...` are expanded; `~user` syntax is left untouched, as is
/// everything on platforms that do not treat `~` as home. Without a home
/// directory the path is returned unchanged.
///
/// # Examples
///
/// ```
/// use appdirs::path::expand_tilde;
/// use appdirs::Platform;
/// use std::path::{Path, PathBuf};
///
/// let home = Path::new("/home/user");
/// assert_eq!(
///     expand_tilde(Path::new("~/project"), Some(home), Platform::Unix),
///     PathBuf::from("/home/user/project")
/// );
/// assert_eq!(
///     expand_tilde(Path::new("~/project"), Some(home), Platform::Windows),
///     PathBuf::from("~/project")
/// );
/// assert_eq!(
///     expand_tilde(Path::new("~bob/x"), Some(home), Platform::Unix),
///     PathBuf::from("~bob/x")
/// );
/// ```
#[must_use]
pub fn expand_tilde(path: &Path, home: Option<&Path>, platform: Platform) -> PathBuf {
    let (Some(home), Some(path_str)) = (home, path.to_str()) else {
        return path.to_path_buf();
    };
    if !platform.expands_tilde() {
        return path.to_path_buf();
    }

    if path_str == "~" {
        home.to_path_buf()
    } else if let Some(rest) = path_str.strip_prefix("~/") {
        home.join(rest)
    } else {
        path.to_path_buf()
    }
}

/// Return the absolute form of `path` anchored at `base`.
///
/// A leading `~` is expanded to the user's home directory on Unix-like
/// platforms. Absolute paths are only cleaned; relative paths are joined
/// with `base` first.
///
/// # Examples
///
/// ```
/// use appdirs::abs_path;
/// use std::path::PathBuf;
///
/// assert_eq!(abs_path("/work", "src/../docs"), PathBuf::from("/work/docs"));
/// assert_eq!(abs_path("/work", "/etc/./hosts"), PathBuf::from("/etc/hosts"));
/// ```
pub fn abs_path(base: impl AsRef<Path>, path: impl AsRef<Path>) -> PathBuf {
    let home = home::home_dir();
    let expanded = expand_tilde(path.as_ref(), home.as_deref(), Platform::current());

    if expanded.is_absolute() {
        clean(&expanded)
    } else {
        clean(&base.as_ref().join(expanded))
    }
}
