//! Single-passenger scoring and the process-wide predictor.
//!
//! A [`Predictor`] couples a fitted feature pipeline with a classifier. Build
//! and fit it at startup, then publish it once with [`install`]; request
//! handlers read it through [`predictor`]. The published value is immutable,
//! so concurrent readers never observe a half-fitted pipeline.

use crate::dataset::Passenger;
use crate::error::{PipelineError, Result};
use crate::model::ProbabilisticClassifier;
use crate::preprocessing::{FittedTitanicPipeline, FittedTransformer};
use crate::table::Table;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};

/// `PassengerId` assigned to an ad-hoc request row.
pub const REQUEST_PASSENGER_ID: i64 = 1;

/// One passenger to score.
///
/// Only class, name and sex are required; every other field may be omitted
/// and is treated as a missing cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub pclass: i64,
    pub name: String,
    pub sex: String,
    #[serde(default)]
    pub age: Option<f64>,
    #[serde(default)]
    pub sib_sp: Option<i64>,
    #[serde(default)]
    pub parch: Option<i64>,
    #[serde(default)]
    pub ticket: Option<String>,
    #[serde(default)]
    pub fare: Option<f64>,
    #[serde(default)]
    pub cabin: Option<String>,
    #[serde(default)]
    pub embarked: Option<String>,
}

impl PredictionRequest {
    pub fn new(pclass: i64, name: impl Into<String>, sex: impl Into<String>) -> Self {
        Self {
            pclass,
            name: name.into(),
            sex: sex.into(),
            age: None,
            sib_sp: None,
            parch: None,
            ticket: None,
            fare: None,
            cabin: None,
            embarked: None,
        }
    }

    /// The request as a raw passenger record.
    pub fn to_passenger(&self) -> Passenger {
        Passenger {
            passenger_id: REQUEST_PASSENGER_ID,
            pclass: self.pclass,
            name: self.name.clone(),
            sex: self.sex.clone(),
            age: self.age,
            sib_sp: self.sib_sp,
            parch: self.parch,
            ticket: self.ticket.clone(),
            fare: self.fare,
            cabin: self.cabin.clone(),
            embarked: self.embarked.clone(),
        }
    }

    /// One-row raw table with every raw column present.
    pub fn to_table(&self) -> Table {
        Table::from_passengers(std::slice::from_ref(&self.to_passenger()))
    }
}

/// Fitted pipeline plus classifier.
#[derive(Clone, Debug)]
pub struct Predictor<C> {
    pipeline: FittedTitanicPipeline,
    classifier: C,
}

impl<C: ProbabilisticClassifier> Predictor<C> {
    /// Pair a pipeline with a classifier trained on its output columns.
    pub fn new(pipeline: FittedTitanicPipeline, classifier: C) -> Result<Self> {
        let n_features = pipeline.output_columns().len();
        if classifier.n_features() != n_features {
            return Err(PipelineError::FeatureMismatch {
                expected_features: n_features,
                got_features: classifier.n_features(),
            });
        }
        Ok(Self {
            pipeline,
            classifier,
        })
    }

    pub fn pipeline(&self) -> &FittedTitanicPipeline {
        &self.pipeline
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Score every row of a raw table.
    pub fn predict_table(&self, raw: &Table) -> Result<Vec<(f64, f64)>> {
        let features = self.pipeline.transform(raw)?.to_array2()?;
        self.classifier.predict_proba(&features)
    }

    /// Score a single passenger, returning `(P(class 0), P(class 1))`.
    pub fn predict(&self, request: &PredictionRequest) -> Result<(f64, f64)> {
        let proba = self.predict_table(&request.to_table())?;
        proba
            .into_iter()
            .next()
            .ok_or_else(|| PipelineError::EmptyData("classifier returned no rows".to_string()))
    }
}

type SharedPredictor = Arc<dyn PredictorHandle>;

/// Object-safe view of a [`Predictor`] for the process-wide slot.
pub trait PredictorHandle: Send + Sync {
    fn predict(&self, request: &PredictionRequest) -> Result<(f64, f64)>;
    fn output_columns(&self) -> Vec<String>;
}

impl<C: ProbabilisticClassifier> PredictorHandle for Predictor<C> {
    fn predict(&self, request: &PredictionRequest) -> Result<(f64, f64)> {
        Predictor::predict(self, request)
    }

    fn output_columns(&self) -> Vec<String> {
        self.pipeline.output_columns()
    }
}

static PREDICTOR: OnceLock<SharedPredictor> = OnceLock::new();

/// Publish the process-wide predictor.
///
/// Succeeds once; a second call fails and leaves the first predictor in place.
pub fn install<C: ProbabilisticClassifier + 'static>(predictor: Predictor<C>) -> Result<()> {
    PREDICTOR
        .set(Arc::new(predictor))
        .map_err(|_| PipelineError::InvalidParameter("predictor already installed".to_string()))?;
    tracing::info!("installed process-wide predictor");
    Ok(())
}

/// The published predictor, if [`install`] has run.
pub fn predictor() -> Option<Arc<dyn PredictorHandle>> {
    PREDICTOR.get().cloned()
}
