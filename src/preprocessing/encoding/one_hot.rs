//! Dummy (one-hot) encoding for categorical columns.
//!
//! Each target column is read as text (integers render as their decimal form,
//! missing cells as `"nan"`). Fitting records the sorted distinct values per
//! column; transforming appends one `0`/`1` indicator column per recorded value,
//! named `<column>_<value>`. The source columns are left in place. A value not
//! seen during fitting sets no indicator.

use crate::error::{PipelineError, Result};
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use crate::table::{Column, Table};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Dummy encoder over a fixed list of categorical columns.
///
/// # Example
/// ```ignore
/// use titanic_features::preprocessing::{DummyEncoder, Transformer, FittedTransformer};
///
/// // Sex = ["male", "female", "male"]
/// let fitted = DummyEncoder::new(&["Sex"]).fit(&reference)?;
///
/// // Appends Sex_female = [0, 1, 0] and Sex_male = [1, 0, 1]
/// let encoded = fitted.transform(&reference)?;
/// ```
#[derive(Clone, Debug)]
pub struct DummyEncoder {
    columns: Vec<String>,
}

impl DummyEncoder {
    /// Create an encoder for the given columns.
    pub fn new<S: AsRef<str>>(columns: &[S]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.as_ref().to_string()).collect(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

/// Serializable parameters for a fitted DummyEncoder.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DummyEncoderParams {
    /// `(column, sorted categories)` in encoding order.
    pub categories: Vec<(String, Vec<String>)>,
}

impl Transformer for DummyEncoder {
    type Params = DummyEncoderParams;
    type Fitted = FittedDummyEncoder;

    fn fit(&self, data: &Table) -> Result<Self::Fitted> {
        if data.is_empty() {
            return Err(PipelineError::EmptyData(
                "Cannot fit DummyEncoder on an empty table".to_string(),
            ));
        }

        let mut categories = Vec::with_capacity(self.columns.len());
        for name in &self.columns {
            let column = data.column(name)?;
            let distinct: BTreeSet<String> = column.iter_text().map(|v| v.into_owned()).collect();
            tracing::debug!(column = %name, n_categories = distinct.len(), "fitted dummy encoder column");
            categories.push((name.clone(), distinct.into_iter().collect()));
        }

        Ok(FittedDummyEncoder { categories })
    }
}

/// Fitted DummyEncoder ready for inference.
#[derive(Clone, Debug)]
pub struct FittedDummyEncoder {
    categories: Vec<(String, Vec<String>)>,
}

impl FittedDummyEncoder {
    /// Sorted categories learned for `column`.
    pub fn categories(&self, column: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, values)| values.as_slice())
    }

    /// Total number of indicator columns.
    pub fn n_features_out(&self) -> usize {
        self.categories.iter().map(|(_, values)| values.len()).sum()
    }
}

impl FittedTransformer for FittedDummyEncoder {
    type Params = DummyEncoderParams;

    fn transform(&self, data: &Table) -> Result<Table> {
        let mut result = data.clone();

        for (name, values) in &self.categories {
            let column = data.column(name)?;
            let mut indicators = vec![vec![Some(0i64); column.len()]; values.len()];
            let mut n_unknown = 0usize;

            for (row, value) in column.iter_text().enumerate() {
                match values.binary_search_by(|c| c.as_str().cmp(&*value)) {
                    Ok(idx) => indicators[idx][row] = Some(1),
                    Err(_) => n_unknown += 1,
                }
            }

            if n_unknown > 0 {
                tracing::warn!(
                    column = %name,
                    rows = n_unknown,
                    "categories not seen during fitting; indicators left at zero"
                );
            }

            for (value, column) in values.iter().zip(indicators) {
                result = result.with_column(format!("{}_{}", name, value), Column::Int(column))?;
            }
        }

        Ok(result)
    }

    fn extract_params(&self) -> Self::Params {
        DummyEncoderParams {
            categories: self.categories.clone(),
        }
    }

    fn from_params(params: Self::Params) -> Result<Self> {
        for (name, values) in &params.categories {
            if values.windows(2).any(|w| w[0] >= w[1]) {
                return Err(PipelineError::InvalidParameter(format!(
                    "categories for {} must be sorted and distinct",
                    name
                )));
            }
        }
        Ok(Self {
            categories: params.categories,
        })
    }

    fn output_columns(&self) -> Vec<String> {
        self.categories
            .iter()
            .flat_map(|(name, values)| values.iter().map(move |v| format!("{}_{}", name, v)))
            .collect()
    }
}
