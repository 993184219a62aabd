use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;

use arrow::compute::concat_batches;
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::error::ArrowError;
use arrow_array::{Array, RecordBatch, StringArray};
use csv::{ByteRecord, StringRecord};
use thiserror::Error;
use tracing::debug;

use crate::readers::ReaderConfig;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] io::Error),
    /// 1-based line of the file holding bytes that are not utf8
    #[error("line {line} is not valid UTF-8")]
    Encoding { line: u64 },
}

fn invalid_data<E>(e: E) -> io::Error
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    io::Error::new(io::ErrorKind::InvalidData, e)
}

fn csv_error(e: csv::Error) -> ReadError {
    if e.is_io_error() {
        ReadError::Io(e.into())
    } else {
        ReadError::Io(invalid_data(e))
    }
}

fn decode(record: ByteRecord) -> Result<StringRecord, ReadError> {
    let line = record.position().map(|p| p.line()).unwrap_or_default();
    StringRecord::from_byte_record(record).map_err(|_| ReadError::Encoding { line })
}

/// Rows whose first cell starts with `prefix`. An empty prefix marks nothing.
pub fn is_comment(record: &ByteRecord, prefix: &str) -> bool {
    !prefix.is_empty()
        && record
            .get(0)
            .is_some_and(|cell| cell.starts_with(prefix.as_bytes()))
}

/// Schema of the header row, every column typed as nullable utf8
fn csv_generate_schema(header: &StringRecord) -> Schema {
    let fields: Vec<Field> = header
        .iter()
        .map(|name| Field::new(name, DataType::Utf8, true))
        .collect();
    Schema::new(fields)
}

/// Lay `rows` out column by column. Missing and empty cells become nulls,
/// cells past the header width are ignored.
fn build_batch(schema: &SchemaRef, rows: &[StringRecord]) -> Result<RecordBatch, ArrowError> {
    let columns = (0..schema.fields().len())
        .map(|i| {
            let array: StringArray = rows
                .iter()
                .map(|row| row.get(i).filter(|cell| !cell.is_empty()))
                .collect();
            Arc::new(array) as Arc<dyn Array>
        })
        .collect();
    RecordBatch::try_new(Arc::clone(schema), columns)
}

/// Read CSV data into a single batch.
///
/// The first row is the header. Comment rows are dropped before anything
/// else looks at them, whatever their width or encoding. Data rows may be
/// shorter or longer than the header.
pub fn read_csv_from<R: Read>(reader: R, config: &ReaderConfig) -> Result<RecordBatch, ReadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut records = reader.byte_records();

    let header = match records.next() {
        Some(record) => decode(record.map_err(csv_error)?)?,
        None => return Err(invalid_data("CSV file is empty").into()),
    };
    let schema = Arc::new(csv_generate_schema(&header));
    let prefix = config.comment_prefix();

    let mut batches = Vec::new();
    let mut pending = Vec::with_capacity(config.batch_size);
    let mut comment_rows = 0usize;
    for record in records {
        let record = record.map_err(csv_error)?;
        if is_comment(&record, prefix) {
            comment_rows += 1;
            continue;
        }
        pending.push(decode(record)?);
        if pending.len() >= config.batch_size {
            batches.push(build_batch(&schema, &pending).map_err(invalid_data)?);
            pending.clear();
        }
    }
    batches.push(build_batch(&schema, &pending).map_err(invalid_data)?);

    let batch = concat_batches(&schema, &batches).map_err(invalid_data)?;
    debug!(
        columns = schema.fields().len(),
        rows = batch.num_rows(),
        comment_rows,
        "csv loaded"
    );
    Ok(batch)
}

/// Read a whole CSV file, see [`read_csv_from`].
pub fn read_csv(path: &Path, config: &ReaderConfig) -> Result<RecordBatch, ReadError> {
    let file = File::open(path)?;
    debug!(path = %path.display(), "reading csv");
    read_csv_from(file, config)
}
