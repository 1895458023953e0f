//! Logistic regression scorer with fixed coefficients.

use crate::error::{PipelineError, Result};
use crate::model::ProbabilisticClassifier;
use crate::serialization::SerializableParams;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Serializable coefficients of a [`LogisticClassifier`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogisticParams {
    pub weights: Vec<f64>,
    pub bias: f64,
}

/// Binary logistic model: `P(class 1) = sigmoid(w . x + b)`.
#[derive(Clone, Debug, PartialEq)]
pub struct LogisticClassifier {
    weights: Vec<f64>,
    bias: f64,
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl LogisticClassifier {
    pub fn new(weights: Vec<f64>, bias: f64) -> Self {
        Self { weights, bias }
    }

    /// Build a classifier aligned with `columns`, taking each column's weight
    /// from `named` (absent names weigh zero).
    pub fn from_named_weights<S: AsRef<str>>(
        columns: &[S],
        named: &[(&str, f64)],
        bias: f64,
    ) -> Self {
        let lookup: HashMap<&str, f64> = named.iter().copied().collect();
        let weights = columns
            .iter()
            .map(|c| lookup.get(c.as_ref()).copied().unwrap_or(0.0))
            .collect();
        Self { weights, bias }
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn extract_params(&self) -> LogisticParams {
        LogisticParams {
            weights: self.weights.clone(),
            bias: self.bias,
        }
    }

    pub fn from_params(params: LogisticParams) -> Result<Self> {
        if params.weights.iter().any(|w| !w.is_finite()) || !params.bias.is_finite() {
            return Err(PipelineError::InvalidParameter(
                "logistic coefficients must be finite".to_string(),
            ));
        }
        Ok(Self::new(params.weights, params.bias))
    }

    /// Save the coefficients to a bincode file.
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        let bytes = self
            .extract_params()
            .to_bytes()
            .map_err(std::io::Error::other)?;
        std::fs::write(path, bytes)
    }

    /// Load coefficients saved with [`save_to_file`](Self::save_to_file).
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_params(LogisticParams::from_bytes(&bytes)?)
    }
}

impl ProbabilisticClassifier for LogisticClassifier {
    fn n_features(&self) -> usize {
        self.weights.len()
    }

    fn predict_proba(&self, features: &Array2<f64>) -> Result<Vec<(f64, f64)>> {
        if features.ncols() != self.weights.len() {
            return Err(PipelineError::FeatureMismatch {
                expected_features: self.weights.len(),
                got_features: features.ncols(),
            });
        }

        features
            .rows()
            .into_iter()
            .enumerate()
            .map(|(row, x)| {
                let z = x
                    .iter()
                    .zip(self.weights.iter())
                    .map(|(xi, wi)| xi * wi)
                    .sum::<f64>()
                    + self.bias;
                if !z.is_finite() {
                    return Err(PipelineError::InvalidParameter(format!(
                        "non-finite score at row {}",
                        row
                    )));
                }
                let p1 = sigmoid(z);
                Ok((1.0 - p1, p1))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_zero_model_is_even() {
        let model = LogisticClassifier::new(vec![0.0, 0.0], 0.0);
        let proba = model.predict_proba(&array![[3.0, -1.0]]).unwrap();
        assert!((proba[0].0 - 0.5).abs() < 1e-12);
        assert!((proba[0].1 - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let model = LogisticClassifier::new(vec![0.8, -0.03], 0.1);
        let proba = model
            .predict_proba(&array![[1.0, 22.0], [0.0, 60.0], [1.0, 4.0]])
            .unwrap();
        assert_eq!(proba.len(), 3);
        for (p0, p1) in proba {
            assert!((p0 + p1 - 1.0).abs() < 1e-12);
            assert!((0.0..=1.0).contains(&p1));
        }
    }

    #[test]
    fn test_known_score() {
        let model = LogisticClassifier::new(vec![1.0], 0.0);
        let proba = model.predict_proba(&array![[2.0_f64.ln()]]).unwrap();
        // sigmoid(ln 2) = 2/3
        assert!((proba[0].1 - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_feature_mismatch() {
        let model = LogisticClassifier::new(vec![1.0, 2.0], 0.0);
        let result = model.predict_proba(&array![[1.0, 2.0, 3.0]]);
        assert!(matches!(
            result,
            Err(PipelineError::FeatureMismatch {
                expected_features: 2,
                got_features: 3
            })
        ));
    }

    #[test]
    fn test_nan_feature_rejected() {
        let model = LogisticClassifier::new(vec![1.0], 0.0);
        assert!(model.predict_proba(&array![[f64::NAN]]).is_err());
    }

    #[test]
    fn test_named_weights_alignment() {
        let columns = vec!["Age".to_string(), "Sex_female".to_string(), "Fare".to_string()];
        let model = LogisticClassifier::from_named_weights(&columns, &[("Sex_female", 2.5)], -1.0);
        assert_eq!(model.weights(), &[0.0, 2.5, 0.0]);
        assert_eq!(model.bias(), -1.0);
    }

    #[test]
    fn test_save_load_file() {
        let model = LogisticClassifier::new(vec![0.25, -1.5], 0.75);
        let file = tempfile::NamedTempFile::new().unwrap();
        model.save_to_file(file.path()).unwrap();

        let loaded = LogisticClassifier::load_from_file(file.path()).unwrap();
        assert_eq!(loaded, model);
    }
}
