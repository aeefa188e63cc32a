//! Lexical relationships between paths.
//!
//! [`PathRelationship`] classifies how two paths sit in the hierarchy and
//! [`relative_to`] expresses one path relative to another. Both compare
//! cleaned paths component by component, so `/tmpfoo` is not inside `/tmp`.

use std::path::{Component, Path, PathBuf};

use super::normalize::clean;

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use appdirs::path::PathRelationship;
/// use std::path::Path;
///
/// let parent = Path::new("/home/user");
/// let child = Path::new("/home/user/project");
///
/// assert_eq!(
///     PathRelationship::between(parent, child),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths are the same after cleaning.
    Same,

    /// Neither path contains the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use appdirs::path::PathRelationship;
    /// use std::path::Path;
    ///
    /// let rel = PathRelationship::between(Path::new("/a/b"), Path::new("/a"));
    /// assert_eq!(rel, PathRelationship::Descendant);
    ///
    /// let rel = PathRelationship::between(Path::new("/a/"), Path::new("/a/./"));
    /// assert_eq!(rel, PathRelationship::Same);
    ///
    /// let rel = PathRelationship::between(Path::new("/tmp"), Path::new("/tmpfoo"));
    /// assert_eq!(rel, PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(path1: &Path, path2: &Path) -> Self {
        let p1 = clean(path1);
        let p2 = clean(path2);

        if p1 == p2 {
            Self::Same
        } else if p2.starts_with(&p1) {
            Self::Ancestor
        } else if p1.starts_with(&p2) {
            Self::Descendant
        } else {
            Self::Unrelated
        }
    }

    /// Check if a path is strictly inside a directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use appdirs::path::PathRelationship;
    /// use std::path::Path;
    ///
    /// let dir = Path::new("/tmp");
    /// assert!(PathRelationship::is_strictly_within(Path::new("/tmp/app"), dir));
    /// assert!(!PathRelationship::is_strictly_within(dir, dir));
    /// ```
    #[must_use]
    pub fn is_strictly_within(path: &Path, directory: &Path) -> bool {
        Self::between(path, directory) == Self::Descendant
    }
}

/// Express `target` relative to `base`.
///
/// Both paths are cleaned first. Returns `None` when no lexical relative
/// path exists: one path is absolute and the other is not, the paths live
/// on different volumes, or `base` has `..` components left after the
/// common prefix.
///
/// # Examples
///
/// ```
/// use appdirs::path::relative_to;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(
///     relative_to(Path::new("/a/b"), Path::new("/a/c/d")),
///     Some(PathBuf::from("../c/d"))
/// );
/// assert_eq!(relative_to(Path::new("/a"), Path::new("/a")), Some(PathBuf::from(".")));
/// assert_eq!(relative_to(Path::new("/a"), Path::new("b")), None);
/// ```
#[must_use]
pub fn relative_to(base: &Path, target: &Path) -> Option<PathBuf> {
    let base = clean(base);
    let target = clean(target);

    if base.has_root() != target.has_root() {
        return None;
    }

    let base_parts: Vec<_> = base
        .components()
        .filter(|c| *c != Component::CurDir)
        .collect();
    let target_parts: Vec<_> = target
        .components()
        .filter(|c| *c != Component::CurDir)
        .collect();

    let common = base_parts
        .iter()
        .zip(&target_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut result = PathBuf::new();
    for component in &base_parts[common..] {
        match component {
            Component::Normal(_) => result.push(".."),
            // a root, volume prefix or ".." we cannot climb out of
            _ => return None,
        }
    }
    for component in &target_parts[common..] {
        if let Component::Prefix(_) | Component::RootDir = component {
            return None;
        }
        result.push(component);
    }

    if result.as_os_str().is_empty() {
        result.push(".");
    }
    Some(result)
}
