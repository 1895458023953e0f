//! Categorical and binned encodings.
//!
//! # Available Encoders
//!
//! ## DummyEncoder
//! Appends one `0`/`1` indicator column per category seen during fitting.
//!
//! ```ignore
//! // Sex = ["male", "female"]
//! // Sex_female = [0, 1], Sex_male = [1, 0]
//! ```
//!
//! ## QuantileBinner
//! Splits a numeric column into quantile bins and one-hot encodes the bin.

mod binning;
mod one_hot;

pub use binning::{
    assign_bin, quantile_edges, FittedQuantileBinner, QuantileBinner, QuantileBinnerParams,
    DEFAULT_N_BINS,
};
pub use one_hot::{DummyEncoder, DummyEncoderParams, FittedDummyEncoder};

