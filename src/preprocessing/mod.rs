//! Passenger preprocessing units and the pipeline that chains them.
//!
//! Every unit follows the same two-state pattern:
//!
//! - [`Transformer`]: unfitted unit with its configuration
//! - [`FittedTransformer`]: unit with frozen parameters, ready for inference
//!
//! Units that learn nothing ([`StatelessTransformer`]) are their own fitted
//! form. Transforms never modify their input table; they return a new one.
//!
//! # Available Transformers
//!
//! ## Feature engineering
//! - [`NameFeatures`]: name length and title
//! - [`FamilySize`]: family bucket from siblings/spouses and parents/children
//! - [`TicketFeatures`]: ticket letter, category and length
//! - [`CabinLetter`], [`CabinNumber`]: deck letter and numeric cabin
//!
//! ## Imputation
//! - [`AgeImputer`]: group mean by title and class, global mean fallback
//! - [`FareImputer`]: reference mean
//! - [`EmbarkedImputer`]: constant port
//!
//! ## Encoding
//! - [`QuantileBinner`]: quantile bins of the cabin number as indicators
//! - [`DummyEncoder`]: one indicator per category
//!
//! ## Pipeline
//! - [`TitanicPipeline`]: the fixed chain ending with [`ColumnDropper`]
//!
//! # Example
//!
//! ```ignore
//! use titanic_features::preprocessing::{TitanicPipeline, Transformer, FittedTransformer};
//!
//! let fitted = TitanicPipeline::new().fit(&train)?;
//! fitted.save_to_file("pipeline.bin")?;
//!
//! // Later, load and transform new data
//! let loaded = FittedTitanicPipeline::load_from_file("pipeline.bin")?;
//! let features = loaded.transform(&test)?;
//! ```

pub mod column_dropper;
pub mod columns;
pub mod encoding;
pub mod feature_engineering;
pub mod imputation;
pub mod pipeline;
pub mod traits;

// Re-export main types
pub use column_dropper::ColumnDropper;
pub use encoding::{
    DummyEncoder, DummyEncoderParams, FittedDummyEncoder, FittedQuantileBinner, QuantileBinner,
    QuantileBinnerParams,
};
pub use feature_engineering::{CabinLetter, CabinNumber, FamilySize, NameFeatures, TicketFeatures};
pub use imputation::{
    AgeImputer, AgeImputerParams, EmbarkedImputer, FareImputer, FareImputerParams,
    FittedAgeImputer, FittedFareImputer,
};
pub use pipeline::{FittedTitanicPipeline, TitanicPipeline, TitanicPipelineParams};
pub use traits::{FittedTransformer, StatelessTransformer, Transformer};
