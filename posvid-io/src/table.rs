use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use posvid_core::models::{Table, Value};

use crate::error::{Result, TableIoError};
use crate::options::{ReadOptions, WriteOptions, is_gzipped};

///
/// Get a reader for either a gzip'd or a plain file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let file = File::open(path)?;
    let file: Box<dyn Read> = match is_gzipped(path) {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Read a delimited file with a header row into a [Table].
///
/// # Arguments
/// - path: the file to read; a `.gz` extension means gzip compressed
/// - options: delimiter and null sentinels
pub fn read_table<P: AsRef<Path>>(path: P, options: &ReadOptions) -> Result<Table> {
    let path = path.as_ref();
    let delimiter = options.delimiter_for(path);
    let shown = (delimiter as char).escape_default().to_string();
    debug!(path = %path.display(), delimiter = %shown, "reading table");

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(get_dynamic_reader(path)?);

    let header: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();
    if header.is_empty() {
        return Err(TableIoError::MissingHeader(path.to_path_buf()));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(
            record
                .iter()
                .map(|field| Value::parse(field, &options.null_values))
                .collect(),
        );
    }

    let table = Table::from_rows(header, rows)?;
    info!(
        path = %path.display(),
        rows = table.n_rows(),
        columns = table.n_columns(),
        "read table"
    );

    Ok(table)
}

fn write_records<W: Write>(writer: W, table: &Table, delimiter: u8) -> Result<W> {
    let mut writer = WriterBuilder::new().delimiter(delimiter).from_writer(writer);

    writer.write_record(table.column_names())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(|v| v.raw()))?;
    }

    writer
        .into_inner()
        .map_err(|e| TableIoError::Io(e.into_error()))
}

///
/// Write a [Table] to disk as a delimited file, replacing any existing file.
///
/// Missing parent directories are created. The data is written to a temporary
/// file next to the destination and renamed over it once complete.
///
/// # Arguments
/// - path: the destination; a `.gz` extension means gzip compressed
/// - table: the table to write
/// - options: delimiter
pub fn write_table<P: AsRef<Path>>(path: P, table: &Table, options: &WriteOptions) -> Result<()> {
    let path = path.as_ref();
    let delimiter = options.delimiter_for(path);

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    // keep the mode of a file we are about to replace
    if let Ok(meta) = fs::metadata(path) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }

    if is_gzipped(path) {
        let encoder = GzEncoder::new(BufWriter::new(tmp.as_file_mut()), Compression::default());
        write_records(encoder, table, delimiter)?.finish()?.flush()?;
    } else {
        write_records(BufWriter::new(tmp.as_file_mut()), table, delimiter)?.flush()?;
    }
    tmp.as_file().sync_all()?;

    tmp.persist(path).map_err(|e| TableIoError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    info!(path = %path.display(), rows = table.n_rows(), "wrote table");
    Ok(())
}
