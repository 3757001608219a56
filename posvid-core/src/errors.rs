use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PositionError {
    #[error(
        "Could not infer the video path column ({0}). Pass it explicitly, e.g. --video-col video"
    )]
    ColumnInference(String),

    #[error("Column not found in table: {0}")]
    MissingColumn(String),

    #[error("Duplicate column name in header: {0}")]
    DuplicateColumn(String),

    #[error("Row {row} has {found} fields but the header names {expected} columns")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Column {column} has {found} values but the table has {expected} rows")]
    ColumnLength {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
