//! Constants shared by the column inferrer, the path rewriter and the derivation step.

/// Column names that are taken to hold video paths without looking at their
/// contents. Checked in order; the first one present in the table wins.
pub const COMMON_VIDEO_COLUMNS: [&str; 7] = [
    "video",
    "video_path",
    "mp4",
    "path",
    "driving_video",
    "source_video",
    "ref_video",
];

/// Minimum video-likeness score a column needs to be picked by content.
pub const MIN_VIDEO_LIKENESS: f64 = 0.5;

/// Suffix (compared case-insensitively) that marks a value as a video path.
pub const VIDEO_SUFFIX: &str = ".mp4";

/// File name that replaces the final path segment.
pub const DEFAULT_SIBLING_NAME: &str = "position.mp4";

/// Name of the derived column.
pub const DEFAULT_TARGET_COLUMN: &str = "position_video";
