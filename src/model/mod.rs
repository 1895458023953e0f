//! Classifiers that score transformed feature matrices.
//!
//! The feature pipeline hands its all-numeric output to a classifier as an
//! `ndarray::Array2<f64>` (one row per passenger, columns in the pipeline's
//! recorded output order).

pub mod logistic;

pub use logistic::{LogisticClassifier, LogisticParams};

use crate::error::Result;
use ndarray::Array2;

/// A trained binary classifier returning class probabilities.
pub trait ProbabilisticClassifier: Send + Sync {
    /// Number of feature columns expected per row.
    fn n_features(&self) -> usize;

    /// Score every row, returning `(P(class 0), P(class 1))` per row.
    ///
    /// # Errors
    /// Fails with [`crate::PipelineError::FeatureMismatch`] when the matrix
    /// width differs from [`n_features`](Self::n_features).
    fn predict_proba(&self, features: &Array2<f64>) -> Result<Vec<(f64, f64)>>;
}
