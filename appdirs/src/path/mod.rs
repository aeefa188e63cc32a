//! Lexical path handling.
//!
//! Everything in this module works on path text alone; the filesystem is
//! never consulted, so paths that do not exist yet are handled the same as
//! paths that do.
//!
//! # Examples
//!
//! ```
//! use appdirs::path::{clean, relative_to, PathRelationship};
//! use std::path::{Path, PathBuf};
//!
//! let cleaned = clean(Path::new("/home/user/./project/../docs"));
//! assert_eq!(cleaned, PathBuf::from("/home/user/docs"));
//!
//! let rel = relative_to(Path::new("/home/user"), &cleaned);
//! assert_eq!(rel, Some(PathBuf::from("docs")));
//!
//! let rel = PathRelationship::between(Path::new("/home/user"), &cleaned);
//! assert_eq!(rel, PathRelationship::Ancestor);
//! ```

pub mod normalize;
pub mod relationship;

#[cfg(all(test, unix, feature = "property-tests"))]
mod proptests;

pub use normalize::{abs_path, clean, expand_tilde};
pub use relationship::{relative_to, PathRelationship};
