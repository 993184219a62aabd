mod config;
pub mod csv_reader;

pub use config::{ReaderConfig, ReaderConfigBuilder};
pub use csv_reader::{is_comment, read_csv, read_csv_from, ReadError};
