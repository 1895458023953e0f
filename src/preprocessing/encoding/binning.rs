//! Quantile binning with one-hot bin indicators.
//!
//! Bin edges are the reference column's quantiles at `k / n_bins`
//! (linear interpolation between order statistics). Bin `i` holds values in
//! `(edges[i], edges[i + 1]]`, with the first bin also holding `edges[0]`.
//! Values beyond the reference range are clamped into the outer bins, so every
//! known value lands in exactly one bin. Missing values set no indicator.

use crate::error::{PipelineError, Result};
use crate::preprocessing::columns::CABIN_NUMBER;
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use crate::table::{Column, Table};
use serde::{Deserialize, Serialize};

/// Default number of cabin-number bins.
pub const DEFAULT_N_BINS: usize = 3;

/// Serializable parameters for a fitted QuantileBinner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuantileBinnerParams {
    /// Source column.
    pub column: String,
    /// Number of bins (and indicator columns).
    pub n_bins: usize,
    /// `n_bins + 1` ascending edges, or `None` when the reference column had
    /// no known values.
    pub edges: Option<Vec<f64>>,
}

/// QuantileBinner transformer (unfitted).
#[derive(Clone, Debug)]
pub struct QuantileBinner {
    column: String,
    n_bins: usize,
}

impl QuantileBinner {
    /// Create a binner over `column` with `n_bins` bins.
    pub fn new(column: impl Into<String>, n_bins: usize) -> Self {
        Self {
            column: column.into(),
            n_bins,
        }
    }

    /// Three bins over `Cabin_Number`.
    pub fn cabin_number() -> Self {
        Self::new(CABIN_NUMBER, DEFAULT_N_BINS)
    }

    /// Set the number of bins.
    pub fn with_n_bins(mut self, n_bins: usize) -> Self {
        self.n_bins = n_bins;
        self
    }
}

/// Quantile of sorted values with linear interpolation.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

/// Compute `n_bins + 1` quantile edges over the known values.
pub fn quantile_edges(values: &[f64], n_bins: usize) -> Option<Vec<f64>> {
    if values.is_empty() || n_bins == 0 {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    Some(
        (0..=n_bins)
            .map(|k| quantile(&sorted, k as f64 / n_bins as f64))
            .collect(),
    )
}

/// Index of the bin holding `value`.
pub fn assign_bin(edges: &[f64], value: f64) -> usize {
    let n_bins = edges.len() - 1;
    edges[1..]
        .iter()
        .position(|&upper| value <= upper)
        .unwrap_or(n_bins - 1)
}

impl Transformer for QuantileBinner {
    type Params = QuantileBinnerParams;
    type Fitted = FittedQuantileBinner;

    fn fit(&self, data: &Table) -> Result<Self::Fitted> {
        if self.n_bins == 0 {
            return Err(PipelineError::InvalidParameter(
                "QuantileBinner needs at least one bin".to_string(),
            ));
        }

        let known: Vec<f64> = data
            .numeric_column(&self.column)?
            .into_iter()
            .flatten()
            .collect();

        let edges = quantile_edges(&known, self.n_bins);
        match &edges {
            Some(edges) => tracing::debug!(column = %self.column, ?edges, "fitted quantile bins"),
            None => tracing::warn!(
                column = %self.column,
                "no known values in reference table; bin indicators will all be zero"
            ),
        }

        Ok(FittedQuantileBinner {
            column: self.column.clone(),
            n_bins: self.n_bins,
            edges,
        })
    }
}

/// Fitted QuantileBinner ready for inference.
#[derive(Clone, Debug)]
pub struct FittedQuantileBinner {
    column: String,
    n_bins: usize,
    edges: Option<Vec<f64>>,
}

impl FittedQuantileBinner {
    /// Frozen bin edges, if the fit saw any values.
    pub fn edges(&self) -> Option<&[f64]> {
        self.edges.as_deref()
    }

    pub fn n_bins(&self) -> usize {
        self.n_bins
    }

    fn indicator_name(&self, bin: usize) -> String {
        format!("{}_{}", self.column, bin)
    }
}

impl FittedTransformer for FittedQuantileBinner {
    type Params = QuantileBinnerParams;

    fn transform(&self, data: &Table) -> Result<Table> {
        let values = data.numeric_column(&self.column)?;
        let mut indicators = vec![vec![Some(0i64); values.len()]; self.n_bins];

        if let Some(edges) = &self.edges {
            for (row, value) in values.iter().enumerate() {
                if let Some(value) = value {
                    indicators[assign_bin(edges, *value)][row] = Some(1);
                }
            }
        }

        let mut result = data.clone();
        for (bin, column) in indicators.into_iter().enumerate() {
            result = result.with_column(self.indicator_name(bin), Column::Int(column))?;
        }
        Ok(result)
    }

    fn extract_params(&self) -> Self::Params {
        QuantileBinnerParams {
            column: self.column.clone(),
            n_bins: self.n_bins,
            edges: self.edges.clone(),
        }
    }

    fn from_params(params: Self::Params) -> Result<Self> {
        if params.n_bins == 0 {
            return Err(PipelineError::InvalidParameter(
                "QuantileBinner needs at least one bin".to_string(),
            ));
        }
        if let Some(edges) = &params.edges {
            if edges.len() != params.n_bins + 1 {
                return Err(PipelineError::InvalidParameter(format!(
                    "expected {} bin edges, got {}",
                    params.n_bins + 1,
                    edges.len()
                )));
            }
            if edges.iter().any(|e| !e.is_finite()) || edges.windows(2).any(|w| w[0] > w[1]) {
                return Err(PipelineError::InvalidParameter(
                    "bin edges must be finite and ascending".to_string(),
                ));
            }
        }
        Ok(Self {
            column: params.column,
            n_bins: params.n_bins,
            edges: params.edges,
        })
    }

    fn output_columns(&self) -> Vec<String> {
        (0..self.n_bins).map(|bin| self.indicator_name(bin)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(values: Vec<Option<i64>>) -> Table {
        Table::new()
            .with_column(CABIN_NUMBER, Column::Int(values))
            .unwrap()
    }

    #[test]
    fn test_quantile_edges_linear_interpolation() {
        let edges = quantile_edges(&[10.0, 20.0, 30.0, 40.0], 3).unwrap();
        assert_eq!(edges.len(), 4);
        assert!((edges[0] - 10.0).abs() < 1e-9);
        assert!((edges[1] - 20.0).abs() < 1e-9);
        assert!((edges[2] - 30.0).abs() < 1e-9);
        assert!((edges[3] - 40.0).abs() < 1e-9);

        let edges = quantile_edges(&[1.0, 2.0, 3.0, 4.0, 5.0], 3).unwrap();
        assert!((edges[1] - 7.0 / 3.0).abs() < 1e-9);
        assert!((edges[2] - 11.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_assign_bin_boundaries() {
        let edges = [10.0, 20.0, 30.0, 40.0];
        assert_eq!(assign_bin(&edges, 10.0), 0);
        assert_eq!(assign_bin(&edges, 20.0), 0);
        assert_eq!(assign_bin(&edges, 20.5), 1);
        assert_eq!(assign_bin(&edges, 40.0), 2);
        // Clamped outside the reference range
        assert_eq!(assign_bin(&edges, 1.0), 0);
        assert_eq!(assign_bin(&edges, 99.0), 2);
    }

    #[test]
    fn test_one_hot_bins() {
        let reference = numbers(vec![Some(10), Some(20), None, Some(30), Some(40)]);
        let out = QuantileBinner::cabin_number().fit_transform(&reference).unwrap();

        assert_eq!(
            out.column("Cabin_Number_0").unwrap(),
            &Column::ints(&[1, 1, 0, 0, 0])
        );
        assert_eq!(
            out.column("Cabin_Number_1").unwrap(),
            &Column::ints(&[0, 0, 0, 1, 0])
        );
        assert_eq!(
            out.column("Cabin_Number_2").unwrap(),
            &Column::ints(&[0, 0, 0, 0, 1])
        );
    }

    #[test]
    fn test_edges_frozen_for_queries() {
        let fitted = QuantileBinner::cabin_number()
            .fit(&numbers(vec![Some(10), Some(20), Some(30), Some(40)]))
            .unwrap();

        let out = fitted.transform(&numbers(vec![Some(1000)])).unwrap();
        assert_eq!(out.column("Cabin_Number_2").unwrap(), &Column::ints(&[1]));
        assert_eq!(fitted.edges().unwrap(), &[10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn test_degenerate_fit_gives_zero_indicators() {
        let fitted = QuantileBinner::cabin_number()
            .fit(&numbers(vec![None, None]))
            .unwrap();
        assert!(fitted.edges().is_none());

        let out = fitted.transform(&numbers(vec![Some(5), None])).unwrap();
        for bin in 0..3 {
            assert_eq!(
                out.column(&format!("Cabin_Number_{}", bin)).unwrap(),
                &Column::ints(&[0, 0])
            );
        }
    }

    #[test]
    fn test_duplicate_edges_still_assign_one_bin() {
        let fitted = QuantileBinner::cabin_number()
            .fit(&numbers(vec![Some(7), Some(7), Some(7)]))
            .unwrap();
        let out = fitted.transform(&numbers(vec![Some(7)])).unwrap();
        let total: i64 = fitted
            .output_columns()
            .iter()
            .map(|name| out.column(name).unwrap().f64_at(0).unwrap() as i64)
            .sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn test_zero_bins_rejected() {
        let result = QuantileBinner::cabin_number()
            .with_n_bins(0)
            .fit(&numbers(vec![Some(1)]));
        assert!(matches!(result, Err(PipelineError::InvalidParameter(_))));
    }

    #[test]
    fn test_from_params_checks_edge_count() {
        let params = QuantileBinnerParams {
            column: CABIN_NUMBER.to_string(),
            n_bins: 3,
            edges: Some(vec![1.0, 2.0]),
        };
        assert!(FittedQuantileBinner::from_params(params).is_err());
    }

    #[test]
    fn test_from_params_rejects_zero_bins() {
        let params = QuantileBinnerParams {
            column: CABIN_NUMBER.to_string(),
            n_bins: 0,
            edges: Some(vec![5.0]),
        };
        assert!(matches!(
            FittedQuantileBinner::from_params(params),
            Err(PipelineError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_from_params_rejects_bad_edges() {
        for edges in [vec![1.0, f64::NAN, 3.0], vec![1.0, 3.0, 2.0], vec![1.0, 2.0, f64::INFINITY]] {
            let params = QuantileBinnerParams {
                column: CABIN_NUMBER.to_string(),
                n_bins: 2,
                edges: Some(edges),
            };
            assert!(matches!(
                FittedQuantileBinner::from_params(params),
                Err(PipelineError::InvalidParameter(_))
            ));
        }

        // Repeated edges come from constant reference columns and stay valid
        let params = QuantileBinnerParams {
            column: CABIN_NUMBER.to_string(),
            n_bins: 2,
            edges: Some(vec![7.0, 7.0, 7.0]),
        };
        assert!(FittedQuantileBinner::from_params(params).is_ok());
    }
}
