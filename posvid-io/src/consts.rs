/// File extension that switches reading and writing to gzip.
pub const GZIP_EXT: &str = "gz";

/// Extensions that default to a tab delimiter.
pub const TAB_SEPARATED_EXTS: [&str; 2] = ["tsv", "tab"];

pub const DEFAULT_DELIMITER: u8 = b',';
pub const TAB_DELIMITER: u8 = b'\t';

/// Cell values read as null unless overridden, the same set pandas'
/// `read_csv` recognizes by default.
pub const DEFAULT_NULL_VALUES: [&str; 18] = [
    "-1.#IND", "1.#QNAN", "1.#IND", "-1.#QNAN", "#N/A N/A", "#N/A", "N/A", "n/a", "NA", "<NA>",
    "#NA", "NULL", "null", "NaN", "-NaN", "nan", "-nan", "None",
];
