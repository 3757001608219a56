//! # posvid-core
//!
//! Derives a `position_video` column for tabular video metadata: find the
//! column that holds video paths, then point every path at the `position.mp4`
//! file that sits next to it.
//!
pub mod consts;
pub mod derive;
pub mod errors;
pub mod inference;
pub mod models;
pub mod rewrite;

// re-exports
pub use derive::{Derivation, PositionDeriver, PositionDeriverBuilder};
pub use errors::PositionError;
pub use inference::{ColumnCandidate, infer_video_column, score_columns};
pub use rewrite::{SiblingRewriter, to_position_path};
