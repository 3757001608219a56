use std::path::Path;

use crate::consts::{
    DEFAULT_DELIMITER, DEFAULT_NULL_VALUES, GZIP_EXT, TAB_DELIMITER, TAB_SEPARATED_EXTS,
};

///
/// Options for [read_table](crate::table::read_table).
///
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Field delimiter; guessed from the file extension when unset.
    pub delimiter: Option<u8>,
    /// Cell values, besides the empty string, that are read as null.
    /// Defaults to [DEFAULT_NULL_VALUES].
    pub null_values: Vec<String>,
}

impl Default for ReadOptions {
    fn default() -> Self {
        ReadOptions {
            delimiter: None,
            null_values: DEFAULT_NULL_VALUES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Replace the null sentinels.
    pub fn with_null_values(mut self, null_values: Vec<String>) -> Self {
        self.null_values = null_values;
        self
    }

    /// Add null sentinels on top of the current ones.
    pub fn with_extra_null_values<I: IntoIterator<Item = String>>(mut self, extra: I) -> Self {
        self.null_values.extend(extra);
        self
    }

    pub fn delimiter_for(&self, path: &Path) -> u8 {
        self.delimiter.unwrap_or_else(|| guess_delimiter(path))
    }
}

///
/// Options for [write_table](crate::table::write_table).
///
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    /// Field delimiter; guessed from the file extension when unset.
    pub delimiter: Option<u8>,
}

impl WriteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    pub fn delimiter_for(&self, path: &Path) -> u8 {
        self.delimiter.unwrap_or_else(|| guess_delimiter(path))
    }
}

///
/// Returns `true` when the path has a `.gz` extension.
///
pub fn is_gzipped(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(GZIP_EXT))
}

///
/// Pick a delimiter from the file extension, looking through a trailing `.gz`.
///
/// `.tsv` and `.tab` files are tab separated, everything else is comma separated.
pub fn guess_delimiter(path: &Path) -> u8 {
    let inner = if is_gzipped(path) {
        path.file_stem().map(Path::new)
    } else {
        Some(path)
    };

    let is_tab = inner
        .and_then(|p| p.extension())
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            TAB_SEPARATED_EXTS
                .iter()
                .any(|t| ext.eq_ignore_ascii_case(t))
        });

    if is_tab { TAB_DELIMITER } else { DEFAULT_DELIMITER }
}
