use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file contains no [[file]] entry")]
    Empty,
    #[error("File entry #{index} has an empty path")]
    EmptyPath { index: usize },
    #[error("Column entry #{index} of '{path}' has an empty name")]
    EmptyColumn { path: String, index: usize },
    #[error("Reader batch_size must be greater than 0")]
    ZeroBatchSize,
}
