//! Keyword expansion and parameterization of paths.
//!
//! Expansion is segment bounded: a keyword is only replaced when it forms a
//! whole path segment, so `$CACHE/x` expands while `$CACHEx` does not.
//! Parameterization is the reverse, best-effort mapping and works on raw
//! substrings, replacing longer directory paths before shorter ones so that
//! a workspace nested inside the home directory keeps its own keyword.

use std::borrow::Cow;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use crate::path::{abs_path, clean, relative_to};
use crate::registry::AppDirs;

impl AppDirs {
    /// Return the absolute path for `input`, expanding keywords.
    ///
    /// Each path segment of `input` that exactly matches an alias is
    /// replaced by the directory's path. The result is made absolute against
    /// `base_path` (see [`abs_path`]) and cleaned.
    ///
    /// # Examples
    ///
    /// ```
    /// use appdirs::{AppDirs, Dir, DirKind, DirOptions};
    /// use std::path::Path;
    ///
    /// let mut dirs = AppDirs::new();
    /// dirs.assign(Dir::new(DirKind::Temp, "app", DirOptions::new().path("/tmp/app")).unwrap());
    ///
    /// assert_eq!(dirs.make_absolute("/work", "${TMP}/run"), Path::new("/tmp/app/run"));
    /// assert_eq!(dirs.make_absolute("/work", "src/$TMPx"), Path::new("/work/src/$TMPx"));
    /// ```
    pub fn make_absolute(&self, base_path: impl AsRef<Path>, input: impl AsRef<Path>) -> PathBuf {
        let input = input.as_ref();
        let text = input.to_string_lossy();

        let mut result = String::with_capacity(text.len());
        for segment in text.split(MAIN_SEPARATOR) {
            let replacement = self
                .keywords()
                .get(segment)
                .map_or(Cow::Borrowed(segment), |path| path.to_string_lossy());
            join_segment(&mut result, &replacement);
        }

        // joining drops the empty leading segment of an absolute input
        if input.is_absolute() && !Path::new(&result).is_absolute() {
            result.insert(0, MAIN_SEPARATOR);
        }

        abs_path(base_path, result)
    }

    /// Return the path for `input` relative to `base_path`, expanding
    /// keywords.
    ///
    /// Falls back to the cleaned `input` if no relative path exists, for
    /// instance when the expanded path is on another volume.
    ///
    /// # Examples
    ///
    /// ```
    /// use appdirs::{AppDirs, Dir, DirKind, DirOptions};
    /// use std::path::Path;
    ///
    /// let mut dirs = AppDirs::new();
    /// dirs.assign(Dir::new(DirKind::Cache, "app", DirOptions::new().path("/var/cache/app")).unwrap());
    ///
    /// assert_eq!(dirs.make_relative("/var/lib", "$CACHE/x"), Path::new("../cache/app/x"));
    /// ```
    pub fn make_relative(&self, base_path: impl AsRef<Path>, input: impl AsRef<Path>) -> PathBuf {
        let base_path = base_path.as_ref();
        let absolute = self.make_absolute(base_path, input.as_ref());

        relative_to(base_path, &absolute).unwrap_or_else(|| clean(input.as_ref()))
    }

    /// Replace directory paths inside `input` with their keyword.
    ///
    /// Each registered path is replaced by the first alias of its directory,
    /// longest path first. Matching is on raw substrings, not on segments.
    /// A trailing separator is removed. A result that is still absolute is
    /// also cleaned lexically, so `/opt//tools/` comes back as `/opt/tools`.
    /// A result that is still relative is expressed relative to `base_path`
    /// when possible.
    ///
    /// # Examples
    ///
    /// ```
    /// use appdirs::{AppDirs, Dir, DirKind, DirOptions};
    /// use std::path::Path;
    ///
    /// let mut dirs = AppDirs::new();
    /// dirs.assign(Dir::new(DirKind::Home, "app", DirOptions::new().path("/home/user")).unwrap());
    /// dirs.assign(Dir::new(DirKind::Workspace, "app", DirOptions::new().path("/home/user/src/app")).unwrap());
    ///
    /// assert_eq!(dirs.parameterize("/", "/home/user/src/app/docs"), Path::new("$workspaceRoot/docs"));
    /// assert_eq!(dirs.parameterize("/", "/home/user/notes/"), Path::new("$HOME/notes"));
    /// ```
    pub fn parameterize(&self, base_path: impl AsRef<Path>, input: impl AsRef<Path>) -> PathBuf {
        let mut ordered: Vec<(String, &str)> = self
            .reverse_keywords()
            .iter()
            .map(|(path, alias)| (path.to_string_lossy().into_owned(), alias.as_str()))
            .collect();
        ordered.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let mut text = input.as_ref().to_string_lossy().into_owned();
        for (path, alias) in &ordered {
            if text.contains(path.as_str()) {
                text = text.replace(path.as_str(), alias);
            }
        }

        if text.ends_with(MAIN_SEPARATOR) {
            text.pop();
        }

        let result = PathBuf::from(text);
        if result.is_absolute() {
            return clean(&result);
        }
        relative_to(base_path.as_ref(), &result).unwrap_or_else(|| clean(&result))
    }
}

/// Append a segment with path join semantics: empty segments are skipped.
fn join_segment(result: &mut String, segment: &str) {
    if segment.is_empty() {
        return;
    }
    if !result.is_empty() && !result.ends_with(MAIN_SEPARATOR) {
        result.push(MAIN_SEPARATOR);
    }
    result.push_str(segment);
}
