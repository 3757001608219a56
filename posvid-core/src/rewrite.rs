//! # Sibling path rewriting
//!
//! Replaces the final segment of a video path with a fixed file name, so that
//! `clips/001/front.mp4` becomes `clips/001/position.mp4`. Both `/` and `\`
//! are treated as separators and the rewrite is purely textual, so results do
//! not depend on the host platform.
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::consts::DEFAULT_SIBLING_NAME;

/// A trailing file name ending in `.mp4`, any case.
static VIDEO_FILE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[^/\\]+\.mp4$").expect("static pattern is valid"));

const SEPARATORS: [char; 2] = ['/', '\\'];

///
/// Rewrites paths to point at a sibling file in the same directory.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiblingRewriter {
    sibling: String,
}

impl Default for SiblingRewriter {
    fn default() -> Self {
        SiblingRewriter::new(DEFAULT_SIBLING_NAME)
    }
}

impl SiblingRewriter {
    pub fn new<S: Into<String>>(sibling: S) -> Self {
        SiblingRewriter {
            sibling: sibling.into(),
        }
    }

    ///
    /// Rewrite one path.
    ///
    /// If the text ends in a `*.mp4` file name, only that file name is swapped.
    /// Otherwise the whole text is taken as a directory entry and the sibling is
    /// placed next to it, in its parent directory.
    ///
    /// # Arguments
    /// - path: the path text
    pub fn rewrite(&self, path: &str) -> String {
        if VIDEO_FILE_NAME.is_match(path) {
            return VIDEO_FILE_NAME
                .replace(path, regex::NoExpand(&self.sibling))
                .into_owned();
        }

        match parent_of(path) {
            Some(parent) if parent.is_empty() => self.sibling.clone(),
            Some(parent) if parent.ends_with(SEPARATORS) => format!("{}{}", parent, self.sibling),
            Some(parent) => format!("{}/{}", parent, self.sibling),
            None => {
                trace!(path, "unsplittable path, appending sibling name");
                format!("{}/{}", path, self.sibling)
            }
        }
    }
}

///
/// Parent directory portion of a path, split on the last `/` or `\`.
///
/// Trailing separators are ignored, and runs of separators before the final
/// segment are collapsed except when they are the root itself. `.` and `..`
/// segments are kept as written. Text containing a NUL byte cannot name a
/// file and yields `None`.
fn parent_of(path: &str) -> Option<&str> {
    if path.contains('\0') {
        return None;
    }

    let trimmed = path.trim_end_matches(SEPARATORS);
    if trimmed.is_empty() {
        // "" has no parent; "/" is its own parent
        return Some(&path[..path.len().min(1)]);
    }

    match trimmed.rfind(SEPARATORS) {
        None => Some(""),
        Some(i) => {
            let parent = trimmed[..i].trim_end_matches(SEPARATORS);
            if parent.is_empty() {
                Some(&trimmed[..1])
            } else {
                Some(parent)
            }
        }
    }
}

///
/// Rewrite a path to its `position.mp4` sibling.
///
/// ```
/// use posvid_core::rewrite::to_position_path;
///
/// assert_eq!(to_position_path("a/b/c.mp4"), "a/b/position.mp4");
/// assert_eq!(to_position_path("videos/sample001"), "videos/position.mp4");
/// ```
pub fn to_position_path(path: &str) -> String {
    SiblingRewriter::default().rewrite(path)
}
