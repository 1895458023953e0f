//! Core traits for preprocessing transformers.
//!
//! This module defines the central traits:
//! - [`Transformer`]: Used during fitting; has configuration and can learn from a reference table.
//! - [`FittedTransformer`]: After fitting; ready for inference and serialization.
//! - [`StatelessTransformer`]: Units that learn nothing and can transform directly.

use crate::error::{PipelineError, Result};
use crate::serialization::SerializableParams;
use crate::table::Table;

/// Trait for unfitted transformers.
///
/// A transformer learns parameters from a reference table and can then
/// transform new tables using those learned parameters. This trait represents
/// the configurable, unfitted state.
///
/// # Example
/// ```ignore
/// use titanic_features::preprocessing::{AgeImputer, Transformer, FittedTransformer};
///
/// let fitted = AgeImputer::new().fit(&reference)?;
/// let imputed = fitted.transform(&query)?;
/// ```
pub trait Transformer: Clone {
    /// Serializable representation of learned parameters.
    type Params: SerializableParams;
    /// The fitted transformer type ready for inference.
    type Fitted: FittedTransformer<Params = Self::Params>;

    /// Fit the transformer to the reference table.
    ///
    /// # Errors
    /// Returns [`PipelineError`] if:
    /// - A required column is missing
    /// - The reference table has no usable rows for a learned statistic
    fn fit(&self, data: &Table) -> Result<Self::Fitted>;

    /// Fit the transformer and transform the reference table in one step.
    fn fit_transform(&self, data: &Table) -> Result<Table> {
        let fitted = self.fit(data)?;
        fitted.transform(data)
    }
}

/// Trait for fitted transformers ready for inference.
///
/// A fitted transformer holds frozen parameters. `transform` never changes
/// them and never modifies its input: it returns a new table.
///
/// # Guarantees
/// - `extract_params()` + `from_params()` is a round-trip.
/// - A transformer restored from saved parameters transforms identically.
pub trait FittedTransformer: Clone {
    /// Serializable representation of learned parameters.
    type Params: SerializableParams;

    /// Transform a table using learned parameters.
    ///
    /// # Errors
    /// Returns [`PipelineError`] if a required column is missing or a value
    /// cannot be parsed.
    fn transform(&self, data: &Table) -> Result<Table>;

    /// Extract learned parameters as a serializable representation.
    fn extract_params(&self) -> Self::Params;

    /// Reconstruct a fitted transformer from parameters.
    fn from_params(params: Self::Params) -> Result<Self>
    where
        Self: Sized;

    /// Save the fitted transformer to a file.
    fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        let params = self.extract_params();
        let bytes = params.to_bytes().map_err(std::io::Error::other)?;
        std::fs::write(path, bytes)
    }

    /// Load a fitted transformer from a file.
    fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self>
    where
        Self: Sized,
    {
        let bytes = std::fs::read(path)?;
        let params = Self::Params::from_bytes(&bytes)
            .map_err(|e| PipelineError::Serialization(e.to_string()))?;
        Self::from_params(params)
    }

    /// Names of the columns this transformer adds to its input.
    fn output_columns(&self) -> Vec<String>;
}

/// Marker trait for transformers that don't require fitting.
///
/// Stateless units (name parsing, ticket grouping, ...) are their own fitted
/// form: fitting only clones the configuration.
pub trait StatelessTransformer: Transformer<Fitted = Self> + FittedTransformer {
    /// Transform data without fitting.
    fn transform_direct(&self, data: &Table) -> Result<Table> {
        FittedTransformer::transform(self, data)
    }
}
