//! Adds the derived sibling-path column to a [Table].
//!
//! ```
//! use posvid_core::derive::PositionDeriver;
//! use posvid_core::models::{Column, Table, Value};
//!
//! # fn main() -> Result<(), posvid_core::errors::PositionError> {
//! let mut table = Table::from_columns(vec![Column::new(
//!     "video",
//!     vec![Value::from("/data/a/clip1.mp4")],
//! )])?;
//!
//! let derivation = PositionDeriver::builder().finish()?.derive(&mut table)?;
//!
//! assert_eq!(derivation.source_column, "video");
//! assert_eq!(
//!     table.column("position_video").unwrap().values,
//!     vec![Value::from("/data/a/position.mp4")]
//! );
//! # Ok(())
//! # }
//! ```
use tracing::{info, warn};

use crate::consts::{DEFAULT_SIBLING_NAME, DEFAULT_TARGET_COLUMN};
use crate::errors::PositionError;
use crate::inference::infer_video_column;
use crate::models::{Column, Table, Value};
use crate::rewrite::SiblingRewriter;

///
/// Builder for a [PositionDeriver].
///
#[derive(Default)]
pub struct PositionDeriverBuilder {
    source_column: Option<String>,
    target_column: Option<String>,
    sibling_name: Option<String>,
}

impl PositionDeriverBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this column as the video path source instead of inferring one.
    pub fn with_source_column(mut self, name: String) -> Self {
        self.source_column = Some(name);
        self
    }

    /// Name of the column to write the rewritten paths to.
    pub fn with_target_column(mut self, name: String) -> Self {
        self.target_column = Some(name);
        self
    }

    /// File name placed next to each video.
    pub fn with_sibling_name(mut self, name: String) -> Self {
        self.sibling_name = Some(name);
        self
    }

    pub fn finish(self) -> Result<PositionDeriver, PositionError> {
        let target_column = self
            .target_column
            .unwrap_or_else(|| DEFAULT_TARGET_COLUMN.to_string());
        if target_column.is_empty() {
            return Err(PositionError::InvalidConfig(
                "target column name is empty".to_string(),
            ));
        }

        let sibling_name = self
            .sibling_name
            .unwrap_or_else(|| DEFAULT_SIBLING_NAME.to_string());
        if sibling_name.is_empty() || sibling_name.contains(['/', '\\']) {
            return Err(PositionError::InvalidConfig(format!(
                "sibling name must be a bare file name, got '{}'",
                sibling_name
            )));
        }

        Ok(PositionDeriver {
            source_column: self.source_column,
            target_column,
            rewriter: SiblingRewriter::new(sibling_name),
        })
    }
}

///
/// Outcome of a successful [PositionDeriver::derive].
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    pub source_column: String,
    pub target_column: String,
    pub rows: usize,
    pub replaced_existing: bool,
}

///
/// Derives a sibling-path column from the video path column of a table.
///
#[derive(Debug, Clone)]
pub struct PositionDeriver {
    source_column: Option<String>,
    target_column: String,
    rewriter: SiblingRewriter,
}

impl Default for PositionDeriver {
    fn default() -> Self {
        PositionDeriver {
            source_column: None,
            target_column: DEFAULT_TARGET_COLUMN.to_string(),
            rewriter: SiblingRewriter::default(),
        }
    }
}

impl PositionDeriver {
    pub fn builder() -> PositionDeriverBuilder {
        PositionDeriverBuilder::new()
    }

    ///
    /// Compute the derived values for `table` without modifying it.
    ///
    /// # Returns
    /// - the source column name and the new column
    pub fn compute(&self, table: &Table) -> Result<(String, Column), PositionError> {
        let source = infer_video_column(table, self.source_column.as_deref())?;
        let column = table
            .column(&source)
            .ok_or_else(|| PositionError::MissingColumn(source.clone()))?;

        let values = column
            .values
            .iter()
            // null cells are rewritten as empty text
            .map(|v| Value::Text(self.rewriter.rewrite(v.as_text().unwrap_or_default())))
            .collect();

        Ok((source, Column::new(self.target_column.clone(), values)))
    }

    ///
    /// Add (or overwrite) the derived column on `table`.
    ///
    /// The table is left untouched when an error is returned.
    pub fn derive(&self, table: &mut Table) -> Result<Derivation, PositionError> {
        let (source_column, column) = self.compute(table)?;

        if table.has_column(&self.target_column) {
            warn!(column = %self.target_column, "overwriting existing column");
        }
        let replaced_existing = table.set_column(column)?;

        info!(
            source = %source_column,
            target = %self.target_column,
            rows = table.n_rows(),
            "derived sibling path column"
        );

        Ok(Derivation {
            source_column,
            target_column: self.target_column.clone(),
            rows: table.n_rows(),
            replaced_existing,
        })
    }
}
