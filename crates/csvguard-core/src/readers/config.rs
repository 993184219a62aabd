/// Options of the CSV reader.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    pub batch_size: usize,
    comment_prefix: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            batch_size: 8 * 1024,
            comment_prefix: "#".to_string(),
        }
    }
}

impl ReaderConfig {
    /// Rows whose first cell starts with this prefix are skipped.
    pub fn comment_prefix(&self) -> &str {
        &self.comment_prefix
    }
}

pub struct ReaderConfigBuilder {
    batch_size: usize,
    comment_prefix: String,
}

impl Default for ReaderConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReaderConfigBuilder {
    /// Create a new [`ReaderConfigBuilder`]
    pub fn new() -> Self {
        let reader = ReaderConfig::default();
        Self {
            batch_size: reader.batch_size,
            comment_prefix: reader.comment_prefix,
        }
    }

    /// Build a [`ReaderConfig`]
    pub fn build(self) -> ReaderConfig {
        ReaderConfig {
            // arrow rejects a zero batch size
            batch_size: self.batch_size.max(1),
            comment_prefix: self.comment_prefix,
        }
    }

    pub fn with_batch_size(self, batch_size: usize) -> Self {
        Self { batch_size, ..self }
    }

    pub fn with_comment_prefix(self, prefix: impl Into<String>) -> Self {
        Self {
            comment_prefix: prefix.into(),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_default() {
        let reader = ReaderConfig::default();
        assert_eq!(reader.batch_size, 8192);
        assert_eq!(reader.comment_prefix(), "#");
    }

    #[test]
    fn test_reader_builder() {
        let reader = ReaderConfigBuilder::new()
            .with_batch_size(128)
            .with_comment_prefix("//")
            .build();
        assert_eq!(reader.batch_size, 128);
        assert_eq!(reader.comment_prefix(), "//");
    }

    #[test]
    fn test_reader_builder_zero_batch() {
        let reader = ReaderConfigBuilder::new().with_batch_size(0).build();
        assert_eq!(reader.batch_size, 1);
    }
}
