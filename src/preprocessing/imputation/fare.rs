//! Fare imputation with the reference mean.

use crate::error::{PipelineError, Result};
use crate::preprocessing::columns::FARE;
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use crate::table::{Column, Table};
use serde::{Deserialize, Serialize};

/// Serializable parameters for a fitted FareImputer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FareImputerParams {
    /// Mean of non-missing reference fares.
    pub mean: f64,
}

/// FareImputer transformer (unfitted).
#[derive(Clone, Debug, Default)]
pub struct FareImputer;

impl FareImputer {
    pub fn new() -> Self {
        Self
    }
}

impl Transformer for FareImputer {
    type Params = FareImputerParams;
    type Fitted = FittedFareImputer;

    fn fit(&self, data: &Table) -> Result<Self::Fitted> {
        let fares: Vec<f64> = data.numeric_column(FARE)?.into_iter().flatten().collect();
        if fares.is_empty() {
            return Err(PipelineError::DegenerateFit(
                "FareImputer needs at least one non-missing Fare in the reference table"
                    .to_string(),
            ));
        }
        let mean = fares.iter().sum::<f64>() / fares.len() as f64;
        tracing::debug!(mean, "fitted fare imputer");
        Ok(FittedFareImputer { mean })
    }
}

/// Fitted FareImputer ready for inference.
#[derive(Clone, Debug)]
pub struct FittedFareImputer {
    mean: f64,
}

impl FittedFareImputer {
    /// The fill value learned at fit time.
    pub fn mean(&self) -> f64 {
        self.mean
    }
}

impl FittedTransformer for FittedFareImputer {
    type Params = FareImputerParams;

    fn transform(&self, data: &Table) -> Result<Table> {
        let fares = data
            .numeric_column(FARE)?
            .into_iter()
            .map(|fare| Some(fare.unwrap_or(self.mean)))
            .collect();
        data.clone().with_column(FARE, Column::Float(fares))
    }

    fn extract_params(&self) -> Self::Params {
        FareImputerParams { mean: self.mean }
    }

    fn from_params(params: Self::Params) -> Result<Self> {
        if !params.mean.is_finite() {
            return Err(PipelineError::InvalidParameter(format!(
                "FareImputer mean must be finite, got {}",
                params.mean
            )));
        }
        Ok(Self { mean: params.mean })
    }

    fn output_columns(&self) -> Vec<String> {
        Vec::new()
    }
}
