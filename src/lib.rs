//! # titanic_features
//!
//! Fit-once feature engineering for Titanic passenger records, with a strict
//! separation between fitting and inference.
//!
//! ## Core Design Principles
//!
//! - **Fit/Transform Separation**: every learned statistic (mean ages, mean fare,
//!   bin edges, category lists) is computed once from a reference table and
//!   frozen; transforming a query never recomputes anything.
//! - **Stable Schema**: the fitted pipeline records its output columns and every
//!   transform produces exactly those columns in that order.
//! - **Serializable**: fitted pipelines and classifiers are plain data stored
//!   with `bincode`; a restored pipeline transforms bit-identically.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use titanic_features::dataset::load_table_csv;
//! use titanic_features::preprocessing::{FittedTransformer, TitanicPipeline, Transformer};
//!
//! # fn main() -> titanic_features::Result<()> {
//! let train = load_table_csv("data/train.csv")?;
//! let fitted = TitanicPipeline::new().fit(&train)?;
//!
//! let test = load_table_csv("data/test.csv")?;
//! let features = fitted.transform(&test)?.to_array2()?;
//! # let _ = features;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - `table` — named, typed columns with missing cells
//! - `dataset` — CSV loading of raw passenger records
//! - `preprocessing` — the eleven units and the pipeline that chains them
//! - `model` — probabilistic classifiers over the feature matrix
//! - `serving` — single-passenger requests and the process-wide predictor
//! - `config` — TOML pipeline configuration
//! - `serialization` — bincode persistence of learned parameters

pub mod config;
pub mod dataset;
pub mod error;
pub mod model;
pub mod preprocessing;
pub mod serialization;
pub mod serving;
pub mod table;

pub use config::PipelineConfig;
pub use error::{PipelineError, Result};
pub use model::{LogisticClassifier, ProbabilisticClassifier};
pub use preprocessing::{FittedTitanicPipeline, FittedTransformer, TitanicPipeline, Transformer};
pub use serving::{PredictionRequest, Predictor};
pub use table::{Column, Table};
