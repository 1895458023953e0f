//! Embarkation port imputation with a fixed constant.

use crate::error::{PipelineError, Result};
use crate::preprocessing::columns::EMBARKED;
use crate::preprocessing::traits::{FittedTransformer, StatelessTransformer, Transformer};
use crate::table::{Column, Table};
use serde::{Deserialize, Serialize};

/// Most common port in the training data (Southampton).
pub const DEFAULT_EMBARKED: &str = "S";

/// Fills missing `Embarked` values with a constant port code.
///
/// The constant is configuration, not learned from data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmbarkedImputer {
    fill: String,
}

impl Default for EmbarkedImputer {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbarkedImputer {
    pub fn new() -> Self {
        Self {
            fill: DEFAULT_EMBARKED.to_string(),
        }
    }

    /// Use a different fill value.
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }

    pub fn fill(&self) -> &str {
        &self.fill
    }
}

impl Transformer for EmbarkedImputer {
    type Params = EmbarkedImputer;
    type Fitted = EmbarkedImputer;

    fn fit(&self, _data: &Table) -> Result<EmbarkedImputer> {
        Ok(self.clone())
    }
}

impl FittedTransformer for EmbarkedImputer {
    type Params = EmbarkedImputer;

    fn transform(&self, data: &Table) -> Result<Table> {
        let ports = data
            .text_column(EMBARKED)?
            .iter()
            .map(|port| Some(port.clone().unwrap_or_else(|| self.fill.clone())))
            .collect();
        data.clone().with_column(EMBARKED, Column::Text(ports))
    }

    fn extract_params(&self) -> EmbarkedImputer {
        self.clone()
    }

    fn from_params(params: EmbarkedImputer) -> Result<Self> {
        if params.fill.is_empty() {
            return Err(PipelineError::InvalidParameter(
                "Embarked fill value must not be empty".to_string(),
            ));
        }
        Ok(params)
    }

    fn output_columns(&self) -> Vec<String> {
        Vec::new()
    }
}

impl StatelessTransformer for EmbarkedImputer {}
