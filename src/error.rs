//! Error types for table handling and preprocessing operations.

use thiserror::Error;

/// Error type shared by tables, transformers, the pipeline and the predictor.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Malformed text that cannot be parsed (name, ticket or cabin).
    #[error("Format error in column '{column}' at row {row}: {message}")]
    Format {
        column: String,
        row: usize,
        message: String,
    },
    /// A column required by a transformer is absent from the table.
    #[error("Missing column: {0}")]
    MissingColumn(String),
    /// No usable reference rows for a learned statistic.
    #[error("Degenerate fit: {0}")]
    DegenerateFit(String),
    /// Empty data provided where non-empty was required.
    #[error("Empty data: {0}")]
    EmptyData(String),
    /// A column does not have the same number of rows as the table.
    #[error("Length mismatch for column '{column}': expected {expected} rows, got {got}")]
    LengthMismatch {
        column: String,
        expected: usize,
        got: usize,
    },
    /// A column holds a different kind of value than the operation needs.
    #[error("Invalid column type for '{column}': expected {expected}, got {got}")]
    InvalidColumnType {
        column: String,
        expected: &'static str,
        got: &'static str,
    },
    /// Transform output columns differ from the ones recorded at fit time.
    #[error("Schema mismatch: expected columns {expected:?}, got {got:?}")]
    SchemaMismatch {
        expected: Vec<String>,
        got: Vec<String>,
    },
    /// Feature dimension mismatch.
    #[error("Feature mismatch: expected {expected_features} features, got {got_features}")]
    FeatureMismatch {
        expected_features: usize,
        got_features: usize,
    },
    /// Invalid hyperparameter or configuration value.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// Serialization or deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(String),
    /// CSV reading error.
    #[error("CSV error: {0}")]
    Csv(String),
    /// Configuration could not be parsed.
    #[error("Config error: {0}")]
    Config(String),
}

impl PipelineError {
    pub(crate) fn format(column: &str, row: usize, message: impl Into<String>) -> Self {
        PipelineError::Format {
            column: column.to_string(),
            row,
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for PipelineError {
    fn from(err: std::io::Error) -> Self {
        PipelineError::Io(err.to_string())
    }
}

impl From<bincode::Error> for PipelineError {
    fn from(err: bincode::Error) -> Self {
        PipelineError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for PipelineError {
    fn from(err: csv::Error) -> Self {
        PipelineError::Csv(err.to_string())
    }
}

impl From<toml::de::Error> for PipelineError {
    fn from(err: toml::de::Error) -> Self {
        PipelineError::Config(err.to_string())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_format() {
        let err = PipelineError::format("Name", 3, "no comma");
        let msg = err.to_string();
        assert!(msg.contains("Format error"));
        assert!(msg.contains("Name"));
        assert!(msg.contains("row 3"));
    }

    #[test]
    fn test_error_display_missing_column() {
        let err = PipelineError::MissingColumn("Cabin".to_string());
        assert_eq!(err.to_string(), "Missing column: Cabin");
    }

    #[test]
    fn test_error_display_schema_mismatch() {
        let err = PipelineError::SchemaMismatch {
            expected: vec!["a".to_string()],
            got: vec!["b".to_string()],
        };
        assert!(err.to_string().contains("Schema mismatch"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: PipelineError = io_err.into();
        assert!(matches!(err, PipelineError::Io(_)));
    }

    #[test]
    fn test_error_from_bincode_error() {
        let bad_bytes: &[u8] = &[0xff, 0xff, 0xff, 0xff];
        let bincode_result: std::result::Result<String, bincode::Error> =
            bincode::deserialize(bad_bytes);
        if let Err(e) = bincode_result {
            let err: PipelineError = e.into();
            assert!(matches!(err, PipelineError::Serialization(_)));
        }
    }

    #[test]
    fn test_error_from_toml_error() {
        let toml_result: std::result::Result<toml::Value, toml::de::Error> =
            toml::from_str("not = [valid");
        let err: PipelineError = toml_result.unwrap_err().into();
        assert!(matches!(err, PipelineError::Config(_)));
    }

    #[test]
    fn test_error_is_std_error() {
        let err = PipelineError::InvalidParameter("test".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
