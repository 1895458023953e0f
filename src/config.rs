//! Pipeline configuration.
//!
//! Every field has a default, so an empty TOML document yields the standard
//! Titanic pipeline:
//!
//! ```toml
//! cabin_number_bins = 3
//! embarked_fill = "S"
//! ticket_letter_group_1 = ["1", "2", "3", "S", "P", "C", "A"]
//! ticket_letter_group_2 = ["W", "4", "7", "6", "L", "5", "8"]
//! ```

use crate::error::{PipelineError, Result};
use crate::preprocessing::columns::*;
use crate::preprocessing::encoding::DEFAULT_N_BINS;
use crate::preprocessing::feature_engineering::{DEFAULT_LETTER_GROUP_1, DEFAULT_LETTER_GROUP_2};
use crate::preprocessing::imputation::DEFAULT_EMBARKED;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Columns dummy-encoded by default.
pub const DEFAULT_DUMMY_COLUMNS: [&str; 7] = [
    PCLASS,
    SEX,
    EMBARKED,
    TICKET_CATEGORY,
    CABIN_LETTER,
    NAME_TITLE,
    FAMILY_SIZE,
];

/// Columns dropped by default once encoding is done.
pub const DEFAULT_DROP_COLUMNS: [&str; 15] = [
    PASSENGER_ID,
    NAME,
    SEX,
    TICKET,
    CABIN,
    EMBARKED,
    PCLASS,
    SIB_SP,
    PARCH,
    NAME_TITLE,
    FAMILY_SIZE,
    TICKET_LETTER,
    TICKET_CATEGORY,
    CABIN_LETTER,
    CABIN_NUMBER,
];

/// Tunable knobs of the feature pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Categorical columns expanded into indicator columns.
    pub dummy_columns: Vec<String>,
    /// Columns removed at the end of the pipeline.
    pub drop_columns: Vec<String>,
    /// Ticket letters kept as their own category.
    pub ticket_letter_group_1: Vec<char>,
    /// Ticket letters collapsed into `"Low_ticket"`.
    pub ticket_letter_group_2: Vec<char>,
    /// Number of cabin-number quantile bins.
    pub cabin_number_bins: usize,
    /// Port code used for a missing `Embarked`.
    pub embarked_fill: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            dummy_columns: DEFAULT_DUMMY_COLUMNS.iter().map(|c| c.to_string()).collect(),
            drop_columns: DEFAULT_DROP_COLUMNS.iter().map(|c| c.to_string()).collect(),
            ticket_letter_group_1: DEFAULT_LETTER_GROUP_1.to_vec(),
            ticket_letter_group_2: DEFAULT_LETTER_GROUP_2.to_vec(),
            cabin_number_bins: DEFAULT_N_BINS,
            embarked_fill: DEFAULT_EMBARKED.to_string(),
        }
    }
}

impl PipelineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: PipelineConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loading pipeline config");
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<()> {
        if self.cabin_number_bins == 0 {
            return Err(PipelineError::Config(
                "cabin_number_bins must be at least 1".to_string(),
            ));
        }
        if self.embarked_fill.trim().is_empty() {
            return Err(PipelineError::Config(
                "embarked_fill must not be empty".to_string(),
            ));
        }
        if let Some(c) = self
            .ticket_letter_group_1
            .iter()
            .find(|c| self.ticket_letter_group_2.contains(c))
        {
            return Err(PipelineError::Config(format!(
                "ticket letter {:?} appears in both letter groups",
                c
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = PipelineConfig::from_toml_str("").unwrap();
        assert_eq!(config, PipelineConfig::default());
        assert_eq!(config.cabin_number_bins, 3);
        assert_eq!(config.embarked_fill, "S");
        assert_eq!(config.dummy_columns.len(), 7);
        assert_eq!(config.drop_columns.len(), 15);
    }

    #[test]
    fn test_partial_override() {
        let config = PipelineConfig::from_toml_str(
            r#"
            cabin_number_bins = 4
            ticket_letter_group_2 = ["W", "4"]
            "#,
        )
        .unwrap();
        assert_eq!(config.cabin_number_bins, 4);
        assert_eq!(config.ticket_letter_group_2, vec!['W', '4']);
        assert_eq!(config.embarked_fill, "S");
    }

    #[test]
    fn test_zero_bins_rejected() {
        let result = PipelineConfig::from_toml_str("cabin_number_bins = 0");
        assert!(matches!(result, Err(PipelineError::Config(_))));
    }

    #[test]
    fn test_empty_fill_rejected() {
        let result = PipelineConfig::from_toml_str("embarked_fill = \"\"");
        assert!(matches!(result, Err(PipelineError::Config(_))));
    }

    #[test]
    fn test_overlapping_letter_groups_rejected() {
        let result = PipelineConfig::from_toml_str(
            r#"
            ticket_letter_group_1 = ["A"]
            ticket_letter_group_2 = ["A"]
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let result = PipelineConfig::from_toml_str("cabin_number_bins = \"three\"");
        assert!(matches!(result, Err(PipelineError::Config(_))));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pipeline.toml");
        std::fs::write(&path, "embarked_fill = \"C\"\n").unwrap();

        let config = PipelineConfig::from_toml_file(&path).unwrap();
        assert_eq!(config.embarked_fill, "C");
    }
}
