//! # Input/Output utilities for metadata tables.
//!
//! Reads delimited text files (optionally gzip compressed) into a
//! [Table](posvid_core::models::Table) and writes them back. Writes go through
//! a temporary file in the destination directory that is renamed into place,
//! so an existing file is never left half written.
//!
pub mod consts;
pub mod error;
pub mod options;
pub mod table;

// re-expose core functions
pub use consts::*;
pub use error::*;
pub use options::*;
pub use table::*;
