//! Imputation transformers for handling missing values.
//!
//! # Available Transformers
//!
//! | Transformer | Description |
//! |-------------|-------------|
//! | [`AgeImputer`] | Mean age per title and class, overall mean as fallback, plus a null flag |
//! | [`FareImputer`] | Mean fare of the reference table |
//! | [`EmbarkedImputer`] | Fixed port code |

pub mod age;
pub mod embarked;
pub mod fare;

pub use age::{lookup_age, AgeGroup, AgeImputer, AgeImputerParams, FittedAgeImputer};
pub use embarked::{EmbarkedImputer, DEFAULT_EMBARKED};
pub use fare::{FareImputer, FareImputerParams, FittedFareImputer};
