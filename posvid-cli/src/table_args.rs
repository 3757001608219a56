use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Arg, ArgMatches};

use posvid_io::ReadOptions;

pub const CSV_ARG: &str = "csv";
pub const SEP_ARG: &str = "sep";
pub const NA_VALUES_ARG: &str = "na-values";

///
/// Arguments shared by every subcommand that reads a table.
///
pub fn table_input_args() -> [Arg; 3] {
    [
        Arg::new(CSV_ARG)
            .long("csv")
            .short('i')
            .required(true)
            .help("Path to the metadata table (.csv, .tsv, optionally .gz)"),
        Arg::new(SEP_ARG)
            .long("sep")
            .help("Field delimiter, a single character or 'tab'. Guessed from the extension by default"),
        Arg::new(NA_VALUES_ARG)
            .long("na-values")
            .value_delimiter(',')
            .help("Extra cell values to read as empty on top of the usual NA markers, comma separated"),
    ]
}

pub fn input_path(matches: &ArgMatches) -> PathBuf {
    matches
        .get_one::<String>(CSV_ARG)
        .map(PathBuf::from)
        .expect("A path to a metadata table is required.")
}

///
/// Parse a `--sep` value into a single delimiter byte.
///
pub fn parse_delimiter(sep: &str) -> Result<u8> {
    match sep {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => {
            let mut chars = sep.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii() => Ok(c as u8),
                _ => bail!("Delimiter must be a single ASCII character or 'tab', got '{}'", sep),
            }
        }
    }
}

pub fn delimiter(matches: &ArgMatches) -> Result<Option<u8>> {
    matches
        .get_one::<String>(SEP_ARG)
        .map(|sep| parse_delimiter(sep))
        .transpose()
}

pub fn read_options(matches: &ArgMatches) -> Result<ReadOptions> {
    let mut options = ReadOptions::new();
    if let Some(delimiter) = delimiter(matches)? {
        options = options.with_delimiter(delimiter);
    }
    if let Some(values) = matches.get_many::<String>(NA_VALUES_ARG) {
        options = options.with_extra_null_values(values.cloned());
    }
    Ok(options)
}
