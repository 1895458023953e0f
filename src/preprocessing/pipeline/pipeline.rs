//! Titanic feature pipeline.
//!
//! The pipeline chains the preprocessing units in a fixed order, where the
//! output table of one unit becomes the input to the next. Fitting runs
//! fit-then-transform for each unit over the reference table; the fitted
//! pipeline then replays the frozen units on any query table.
//!
//! # Example
//! ```ignore
//! use titanic_features::preprocessing::{TitanicPipeline, Transformer, FittedTransformer};
//!
//! let fitted = TitanicPipeline::new().fit(&train)?;
//! let features = fitted.transform(&test)?;
//! assert_eq!(features.column_names(), fitted.output_columns());
//! ```

use crate::config::PipelineConfig;
use crate::dataset::RAW_COLUMNS;
use crate::error::{PipelineError, Result};
use crate::preprocessing::column_dropper::ColumnDropper;
use crate::preprocessing::encoding::{
    DummyEncoder, DummyEncoderParams, FittedDummyEncoder, FittedQuantileBinner, QuantileBinner,
    QuantileBinnerParams,
};
use crate::preprocessing::feature_engineering::{
    CabinLetter, CabinNumber, FamilySize, NameFeatures, TicketFeatures,
};
use crate::preprocessing::imputation::{
    AgeImputer, AgeImputerParams, EmbarkedImputer, FareImputer, FareImputerParams,
    FittedAgeImputer, FittedFareImputer,
};
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use crate::serialization::SerializableParams;
use crate::table::Table;
use serde::{Deserialize, Serialize};

/// Step names in execution order. Every fitted pipeline runs exactly these.
pub const STEP_ORDER: [&str; 11] = [
    "Name",
    "Age",
    "CabinLetter",
    "Embarked",
    "FamilySize",
    "Fare",
    "Ticket",
    "CabinNumber",
    "CabinNumberBinning",
    "DummyEncoding",
    "ColumnDrop",
];

/// A fitted unit that can be part of a pipeline.
pub trait PipelineStep: Clone {
    /// Transform the table.
    fn transform_step(&self, data: &Table) -> Result<Table>;
    /// Get the step name for debugging.
    fn step_name(&self) -> &'static str;
}

/// A fitted step of the pipeline.
#[derive(Clone, Debug)]
pub enum PipelineStepEnum {
    Name(NameFeatures),
    Age(FittedAgeImputer),
    CabinLetter(CabinLetter),
    Embarked(EmbarkedImputer),
    FamilySize(FamilySize),
    Fare(FittedFareImputer),
    Ticket(TicketFeatures),
    CabinNumber(CabinNumber),
    CabinNumberBinning(FittedQuantileBinner),
    DummyEncoding(FittedDummyEncoder),
    ColumnDrop(ColumnDropper),
}

impl PipelineStep for PipelineStepEnum {
    fn transform_step(&self, data: &Table) -> Result<Table> {
        match self {
            PipelineStepEnum::Name(t) => t.transform(data),
            PipelineStepEnum::Age(t) => t.transform(data),
            PipelineStepEnum::CabinLetter(t) => t.transform(data),
            PipelineStepEnum::Embarked(t) => t.transform(data),
            PipelineStepEnum::FamilySize(t) => t.transform(data),
            PipelineStepEnum::Fare(t) => t.transform(data),
            PipelineStepEnum::Ticket(t) => t.transform(data),
            PipelineStepEnum::CabinNumber(t) => t.transform(data),
            PipelineStepEnum::CabinNumberBinning(t) => t.transform(data),
            PipelineStepEnum::DummyEncoding(t) => t.transform(data),
            PipelineStepEnum::ColumnDrop(t) => t.transform(data),
        }
    }

    fn step_name(&self) -> &'static str {
        match self {
            PipelineStepEnum::Name(_) => "Name",
            PipelineStepEnum::Age(_) => "Age",
            PipelineStepEnum::CabinLetter(_) => "CabinLetter",
            PipelineStepEnum::Embarked(_) => "Embarked",
            PipelineStepEnum::FamilySize(_) => "FamilySize",
            PipelineStepEnum::Fare(_) => "Fare",
            PipelineStepEnum::Ticket(_) => "Ticket",
            PipelineStepEnum::CabinNumber(_) => "CabinNumber",
            PipelineStepEnum::CabinNumberBinning(_) => "CabinNumberBinning",
            PipelineStepEnum::DummyEncoding(_) => "DummyEncoding",
            PipelineStepEnum::ColumnDrop(_) => "ColumnDrop",
        }
    }
}

/// Serializable parameters of one fitted step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum StepParams {
    Name(NameFeatures),
    Age(AgeImputerParams),
    CabinLetter(CabinLetter),
    Embarked(EmbarkedImputer),
    FamilySize(FamilySize),
    Fare(FareImputerParams),
    Ticket(TicketFeatures),
    CabinNumber(CabinNumber),
    CabinNumberBinning(QuantileBinnerParams),
    DummyEncoding(DummyEncoderParams),
    ColumnDrop(ColumnDropper),
}

impl PipelineStepEnum {
    fn extract_params(&self) -> StepParams {
        match self {
            PipelineStepEnum::Name(t) => StepParams::Name(t.extract_params()),
            PipelineStepEnum::Age(t) => StepParams::Age(t.extract_params()),
            PipelineStepEnum::CabinLetter(t) => StepParams::CabinLetter(t.extract_params()),
            PipelineStepEnum::Embarked(t) => StepParams::Embarked(t.extract_params()),
            PipelineStepEnum::FamilySize(t) => StepParams::FamilySize(t.extract_params()),
            PipelineStepEnum::Fare(t) => StepParams::Fare(t.extract_params()),
            PipelineStepEnum::Ticket(t) => StepParams::Ticket(t.extract_params()),
            PipelineStepEnum::CabinNumber(t) => StepParams::CabinNumber(t.extract_params()),
            PipelineStepEnum::CabinNumberBinning(t) => {
                StepParams::CabinNumberBinning(t.extract_params())
            }
            PipelineStepEnum::DummyEncoding(t) => StepParams::DummyEncoding(t.extract_params()),
            PipelineStepEnum::ColumnDrop(t) => StepParams::ColumnDrop(t.extract_params()),
        }
    }

    fn from_params(params: StepParams) -> Result<Self> {
        Ok(match params {
            StepParams::Name(p) => PipelineStepEnum::Name(NameFeatures::from_params(p)?),
            StepParams::Age(p) => PipelineStepEnum::Age(FittedAgeImputer::from_params(p)?),
            StepParams::CabinLetter(p) => {
                PipelineStepEnum::CabinLetter(CabinLetter::from_params(p)?)
            }
            StepParams::Embarked(p) => PipelineStepEnum::Embarked(EmbarkedImputer::from_params(p)?),
            StepParams::FamilySize(p) => PipelineStepEnum::FamilySize(FamilySize::from_params(p)?),
            StepParams::Fare(p) => PipelineStepEnum::Fare(FittedFareImputer::from_params(p)?),
            StepParams::Ticket(p) => PipelineStepEnum::Ticket(TicketFeatures::from_params(p)?),
            StepParams::CabinNumber(p) => {
                PipelineStepEnum::CabinNumber(CabinNumber::from_params(p)?)
            }
            StepParams::CabinNumberBinning(p) => {
                PipelineStepEnum::CabinNumberBinning(FittedQuantileBinner::from_params(p)?)
            }
            StepParams::DummyEncoding(p) => {
                PipelineStepEnum::DummyEncoding(FittedDummyEncoder::from_params(p)?)
            }
            StepParams::ColumnDrop(p) => PipelineStepEnum::ColumnDrop(ColumnDropper::from_params(p)?),
        })
    }
}

/// Builder for a fitted step (used during pipeline fitting).
trait FittedStepBuilder: Clone {
    type Fitted: PipelineStep;
    fn fit(&self, data: &Table) -> Result<Self::Fitted>;
}

/// A step in the unfitted pipeline.
#[derive(Clone, Debug)]
pub enum UnfittedStepEnum {
    Name(NameFeatures),
    Age(AgeImputer),
    CabinLetter(CabinLetter),
    Embarked(EmbarkedImputer),
    FamilySize(FamilySize),
    Fare(FareImputer),
    Ticket(TicketFeatures),
    CabinNumber(CabinNumber),
    CabinNumberBinning(QuantileBinner),
    DummyEncoding(DummyEncoder),
    ColumnDrop(ColumnDropper),
}

impl FittedStepBuilder for UnfittedStepEnum {
    type Fitted = PipelineStepEnum;

    fn fit(&self, data: &Table) -> Result<Self::Fitted> {
        match self {
            UnfittedStepEnum::Name(t) => t.fit(data).map(PipelineStepEnum::Name),
            UnfittedStepEnum::Age(t) => t.fit(data).map(PipelineStepEnum::Age),
            UnfittedStepEnum::CabinLetter(t) => t.fit(data).map(PipelineStepEnum::CabinLetter),
            UnfittedStepEnum::Embarked(t) => t.fit(data).map(PipelineStepEnum::Embarked),
            UnfittedStepEnum::FamilySize(t) => t.fit(data).map(PipelineStepEnum::FamilySize),
            UnfittedStepEnum::Fare(t) => t.fit(data).map(PipelineStepEnum::Fare),
            UnfittedStepEnum::Ticket(t) => t.fit(data).map(PipelineStepEnum::Ticket),
            UnfittedStepEnum::CabinNumber(t) => t.fit(data).map(PipelineStepEnum::CabinNumber),
            UnfittedStepEnum::CabinNumberBinning(t) => {
                t.fit(data).map(PipelineStepEnum::CabinNumberBinning)
            }
            UnfittedStepEnum::DummyEncoding(t) => t.fit(data).map(PipelineStepEnum::DummyEncoding),
            UnfittedStepEnum::ColumnDrop(t) => t.fit(data).map(PipelineStepEnum::ColumnDrop),
        }
    }
}

/// Serializable representation of a fitted pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TitanicPipelineParams {
    /// Parameters of every step, in execution order.
    pub steps: Vec<StepParams>,
    /// Output column names recorded at fit time.
    pub output_columns: Vec<String>,
}

/// Titanic feature pipeline (unfitted).
#[derive(Clone, Debug)]
pub struct TitanicPipeline {
    steps: Vec<UnfittedStepEnum>,
}

impl Default for TitanicPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl TitanicPipeline {
    /// Create the pipeline with the default configuration.
    pub fn new() -> Self {
        Self::from_config(&PipelineConfig::default())
    }

    /// Create the pipeline from a configuration.
    ///
    /// The unit order is fixed; the configuration only tunes the units.
    pub fn from_config(config: &PipelineConfig) -> Self {
        let ticket = TicketFeatures::new().with_letter_groups(
            config.ticket_letter_group_1.clone(),
            config.ticket_letter_group_2.clone(),
        );

        Self {
            steps: vec![
                UnfittedStepEnum::Name(NameFeatures::new()),
                UnfittedStepEnum::Age(AgeImputer::new()),
                UnfittedStepEnum::CabinLetter(CabinLetter::new()),
                UnfittedStepEnum::Embarked(EmbarkedImputer::new().with_fill(&config.embarked_fill)),
                UnfittedStepEnum::FamilySize(FamilySize::new()),
                UnfittedStepEnum::Fare(FareImputer::new()),
                UnfittedStepEnum::Ticket(ticket),
                UnfittedStepEnum::CabinNumber(CabinNumber::new()),
                UnfittedStepEnum::CabinNumberBinning(
                    QuantileBinner::cabin_number().with_n_bins(config.cabin_number_bins),
                ),
                UnfittedStepEnum::DummyEncoding(DummyEncoder::new(config.dummy_columns.as_slice())),
                UnfittedStepEnum::ColumnDrop(ColumnDropper::new(config.drop_columns.as_slice())),
            ],
        }
    }

    /// Get the number of steps in the pipeline.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Transformer for TitanicPipeline {
    type Params = TitanicPipelineParams;
    type Fitted = FittedTitanicPipeline;

    fn fit(&self, data: &Table) -> Result<Self::Fitted> {
        if data.is_empty() {
            return Err(PipelineError::EmptyData(
                "Cannot fit pipeline on an empty reference table".to_string(),
            ));
        }

        let mut fitted_steps = Vec::with_capacity(self.steps.len());
        let mut current = data.select(&RAW_COLUMNS)?;

        for step in &self.steps {
            let fitted = step.fit(&current)?;
            current = fitted.transform_step(&current)?;
            tracing::debug!(
                step = fitted.step_name(),
                rows = current.n_rows(),
                columns = current.n_cols(),
                "fitted pipeline step"
            );
            fitted_steps.push(fitted);
        }

        let output_columns = current.column_names().to_vec();
        tracing::info!(
            rows = data.n_rows(),
            steps = fitted_steps.len(),
            features = output_columns.len(),
            "fitted feature pipeline"
        );

        Ok(FittedTitanicPipeline {
            steps: fitted_steps,
            output_columns,
        })
    }
}

/// Fitted pipeline ready for inference.
///
/// Immutable once built; share it across threads behind an `Arc`.
#[derive(Clone, Debug)]
pub struct FittedTitanicPipeline {
    steps: Vec<PipelineStepEnum>,
    output_columns: Vec<String>,
}

impl FittedTitanicPipeline {
    /// Get the number of steps in the pipeline.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Get the names of all steps in the pipeline.
    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|s| s.step_name()).collect()
    }

    /// Serialize the fitted pipeline into a bincode blob.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.extract_params().to_bytes()?)
    }

    /// Restore a fitted pipeline from a bincode blob.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_params(TitanicPipelineParams::from_bytes(bytes)?)
    }
}

impl FittedTransformer for FittedTitanicPipeline {
    type Params = TitanicPipelineParams;

    fn transform(&self, data: &Table) -> Result<Table> {
        let mut result = data.select(&RAW_COLUMNS)?;
        for step in &self.steps {
            result = step.transform_step(&result)?;
        }

        if result.column_names() != self.output_columns.as_slice() {
            return Err(PipelineError::SchemaMismatch {
                expected: self.output_columns.clone(),
                got: result.column_names().to_vec(),
            });
        }

        tracing::debug!(rows = result.n_rows(), "transformed table");
        Ok(result)
    }

    fn extract_params(&self) -> Self::Params {
        TitanicPipelineParams {
            steps: self.steps.iter().map(|s| s.extract_params()).collect(),
            output_columns: self.output_columns.clone(),
        }
    }

    fn from_params(params: Self::Params) -> Result<Self> {
        if params.steps.is_empty() {
            return Err(PipelineError::InvalidParameter(
                "A fitted pipeline needs at least one step".to_string(),
            ));
        }

        let steps = params
            .steps
            .into_iter()
            .map(PipelineStepEnum::from_params)
            .collect::<Result<Vec<_>>>()?;

        let names: Vec<&str> = steps.iter().map(|s| s.step_name()).collect();
        if names != STEP_ORDER {
            return Err(PipelineError::InvalidParameter(format!(
                "pipeline steps out of order: expected {:?}, got {:?}",
                STEP_ORDER, names
            )));
        }

        Ok(Self {
            steps,
            output_columns: params.output_columns,
        })
    }

    fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        let bytes = self
            .extract_params()
            .to_bytes()
            .map_err(std::io::Error::other)?;
        std::fs::write(path.as_ref(), &bytes)?;
        tracing::info!(
            path = %path.as_ref().display(),
            bytes = bytes.len(),
            "saved fitted pipeline"
        );
        Ok(())
    }

    fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self>
    where
        Self: Sized,
    {
        let bytes = std::fs::read(path.as_ref())?;
        let fitted = Self::from_bytes(&bytes)?;
        tracing::info!(
            path = %path.as_ref().display(),
            features = fitted.output_columns.len(),
            "loaded fitted pipeline"
        );
        Ok(fitted)
    }

    /// Column names of every transformed table, in order.
    fn output_columns(&self) -> Vec<String> {
        self.output_columns.clone()
    }
}
