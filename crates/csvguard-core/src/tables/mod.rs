//! In-memory representation of one CSV file.
//!
//! A [`Table`] wraps a single Arrow [`RecordBatch`] whose columns are all
//! nullable utf8. Empty and missing cells are stored as nulls and read back
//! as `""`.

use std::path::Path;
use std::sync::Arc;

use arrow::array::{Array, AsArray, RecordBatch, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::error::ArrowError;
use tracing::debug;

use crate::errors::CheckError;
use crate::readers::{read_csv, ReadError, ReaderConfig};

#[derive(Debug, Clone)]
pub struct Table {
    batch: RecordBatch,
}

impl Table {
    /// Wrap a batch, every column must be utf8.
    pub fn new(batch: RecordBatch) -> Result<Self, ArrowError> {
        if let Some(field) = batch
            .schema()
            .fields()
            .iter()
            .find(|f| f.data_type() != &DataType::Utf8)
        {
            return Err(ArrowError::SchemaError(format!(
                "column '{}' is {} but tables only hold utf8 columns",
                field.name(),
                field.data_type()
            )));
        }
        Ok(Self { batch })
    }

    /// Build a table from literal rows. Short rows get missing trailing cells.
    pub fn from_rows<S: AsRef<str>>(header: &[&str], rows: &[Vec<S>]) -> Result<Self, ArrowError> {
        let fields: Vec<Field> = header
            .iter()
            .map(|name| Field::new(*name, DataType::Utf8, true))
            .collect();
        let columns = (0..header.len())
            .map(|i| {
                let array: StringArray = rows
                    .iter()
                    .map(|row| row.get(i).map(|cell| cell.as_ref()))
                    .collect();
                Arc::new(array) as Arc<dyn Array>
            })
            .collect();
        let batch = RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)?;
        Ok(Self { batch })
    }

    pub fn header(&self) -> Vec<&str> {
        self.batch
            .schema_ref()
            .fields()
            .iter()
            .map(|f| f.name().as_str())
            .collect()
    }

    pub fn column_name(&self, index: usize) -> Option<&str> {
        self.batch
            .schema_ref()
            .fields()
            .get(index)
            .map(|f| f.name().as_str())
    }

    /// Position of the first header cell equal to `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.batch
            .schema_ref()
            .fields()
            .iter()
            .position(|f| f.name() == name)
    }

    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    pub fn num_columns(&self) -> usize {
        self.batch.num_columns()
    }

    pub fn column(&self, index: usize) -> Option<&StringArray> {
        if index >= self.batch.num_columns() {
            return None;
        }
        self.batch.column(index).as_string_opt::<i32>()
    }

    /// Cells of a column in row order, nulls read as `""`.
    pub fn cells(&self, index: usize) -> Option<impl Iterator<Item = &str> + '_> {
        self.column(index)
            .map(|array| array.iter().map(|cell| cell.unwrap_or("")))
    }

    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }
}

/// Load the CSV file at `path` into a [`Table`].
///
/// Fails with [`CheckError::FileNotFound`] if nothing exists at `path`, and
/// with [`CheckError::Io`] when the file cannot be opened or parsed.
/// Bytes that are not utf8 in a data row give [`CheckError::Encoding`].
pub fn ingest(path: &str, config: &ReaderConfig) -> Result<Table, CheckError> {
    let file_path = Path::new(path);
    if !file_path.exists() {
        return Err(CheckError::FileNotFound {
            file: path.to_string(),
        });
    }

    let batch = read_csv(file_path, config).map_err(|e| match e {
        ReadError::Io(source) => CheckError::Io {
            file: path.to_string(),
            source,
        },
        ReadError::Encoding { line } => CheckError::Encoding {
            file: path.to_string(),
            line,
        },
    })?;
    let table = Table::new(batch).map_err(|e| CheckError::Io {
        file: path.to_string(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
    })?;
    debug!(file = path, rows = table.num_rows(), "table ingested");
    Ok(table)
}
