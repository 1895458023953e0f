//! Age imputation by passenger title and class.
//!
//! Missing ages are filled with the mean age of reference passengers sharing
//! the same `(Name_Title, Pclass)` pair, falling back to the overall mean age
//! when the pair never occurred in the reference table. A flag column records
//! which ages were imputed.
//!
//! # Example
//! ```ignore
//! let fitted = AgeImputer::new().fit(&reference)?;
//! let imputed = fitted.transform(&query)?;
//! ```

use crate::error::{PipelineError, Result};
use crate::preprocessing::columns::{AGE, AGE_NULL_FLAG, NAME_TITLE, PCLASS};
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use crate::table::{Column, Table};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Grouping key: title text and class rendered as text.
pub type AgeGroup = (String, String);

/// Serializable parameters for a fitted AgeImputer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgeImputerParams {
    /// Mean of all non-missing reference ages.
    pub global_mean: f64,
    /// Mean non-missing age per `(Name_Title, Pclass)`.
    pub group_means: BTreeMap<AgeGroup, f64>,
}

/// AgeImputer transformer (unfitted).
#[derive(Clone, Debug, Default)]
pub struct AgeImputer;

impl AgeImputer {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Default)]
struct Accumulator {
    sum: f64,
    count: usize,
}

impl Accumulator {
    fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }
}

/// Fill value for a passenger whose age is missing.
///
/// A point lookup into frozen parameters; nothing is recomputed.
pub fn lookup_age(params: &AgeImputerParams, title: &str, pclass: &str) -> f64 {
    params
        .group_means
        .get(&(title.to_string(), pclass.to_string()))
        .copied()
        .unwrap_or(params.global_mean)
}

impl Transformer for AgeImputer {
    type Params = AgeImputerParams;
    type Fitted = FittedAgeImputer;

    fn fit(&self, data: &Table) -> Result<Self::Fitted> {
        let ages = data.numeric_column(AGE)?;
        let titles = data.column(NAME_TITLE)?;
        let classes = data.column(PCLASS)?;

        let mut global = Accumulator::default();
        let mut groups: BTreeMap<AgeGroup, Accumulator> = BTreeMap::new();
        for (row, age) in ages.iter().enumerate() {
            let Some(age) = *age else { continue };
            global.push(age);
            let key = (
                titles.text_at(row).into_owned(),
                classes.text_at(row).into_owned(),
            );
            groups.entry(key).or_default().push(age);
        }

        if global.count == 0 {
            return Err(PipelineError::DegenerateFit(
                "AgeImputer needs at least one non-missing Age in the reference table".to_string(),
            ));
        }

        let group_means: BTreeMap<AgeGroup, f64> = groups
            .into_iter()
            .map(|(key, acc)| (key, acc.mean()))
            .collect();

        tracing::debug!(
            global_mean = global.mean(),
            groups = group_means.len(),
            "fitted age imputer"
        );

        Ok(FittedAgeImputer {
            params: AgeImputerParams {
                global_mean: global.mean(),
                group_means,
            },
        })
    }
}

/// Fitted AgeImputer ready for inference.
#[derive(Clone, Debug)]
pub struct FittedAgeImputer {
    params: AgeImputerParams,
}

impl FittedAgeImputer {
    /// Mean age over the whole reference table.
    pub fn global_mean(&self) -> f64 {
        self.params.global_mean
    }

    /// Mean age per `(Name_Title, Pclass)` group.
    pub fn group_means(&self) -> &BTreeMap<AgeGroup, f64> {
        &self.params.group_means
    }
}

impl FittedTransformer for FittedAgeImputer {
    type Params = AgeImputerParams;

    fn transform(&self, data: &Table) -> Result<Table> {
        let ages = data.numeric_column(AGE)?;
        let titles = data.column(NAME_TITLE)?;
        let classes = data.column(PCLASS)?;

        let mut imputed = Vec::with_capacity(ages.len());
        let mut flags = Vec::with_capacity(ages.len());
        for (row, age) in ages.iter().enumerate() {
            match age {
                Some(age) => {
                    imputed.push(Some(*age));
                    flags.push(Some(0));
                }
                None => {
                    let fill = lookup_age(&self.params, &titles.text_at(row), &classes.text_at(row));
                    imputed.push(Some(fill));
                    flags.push(Some(1));
                }
            }
        }

        data.clone()
            .with_column(AGE_NULL_FLAG, Column::Int(flags))?
            .with_column(AGE, Column::Float(imputed))
    }

    fn extract_params(&self) -> Self::Params {
        self.params.clone()
    }

    fn from_params(params: Self::Params) -> Result<Self> {
        if !params.global_mean.is_finite() {
            return Err(PipelineError::InvalidParameter(format!(
                "AgeImputer global mean must be finite, got {}",
                params.global_mean
            )));
        }
        Ok(Self { params })
    }

    fn output_columns(&self) -> Vec<String> {
        vec![AGE_NULL_FLAG.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> Table {
        Table::new()
            .with_column(
                AGE,
                Column::Float(vec![Some(12.0), Some(52.0), Some(23.0), None, Some(42.0)]),
            )
            .unwrap()
            .with_column(NAME_TITLE, Column::text(&["Mr.", "Mrs.", "Mr.", "Mr.", "Mrs."]))
            .unwrap()
            .with_column(PCLASS, Column::ints(&[0, 1, 2, 2, 0]))
            .unwrap()
    }

    #[test]
    fn test_fit_statistics() {
        let fitted = AgeImputer::new().fit(&reference()).unwrap();
        assert!((fitted.global_mean() - 32.25).abs() < 1e-9);
        assert_eq!(fitted.group_means().len(), 4);
        let mr_2 = fitted.group_means()[&("Mr.".to_string(), "2".to_string())];
        assert!((mr_2 - 23.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_age_uses_group_mean() {
        let out = AgeImputer::new().fit_transform(&reference()).unwrap();
        let ages = out.numeric_column(AGE).unwrap();
        assert!((ages[3].unwrap() - 23.0).abs() < 1e-9);
    }

    #[test]
    fn test_present_ages_pass_through() {
        let out = AgeImputer::new().fit_transform(&reference()).unwrap();
        let ages = out.numeric_column(AGE).unwrap();
        for (row, expected) in [(0, 12.0), (1, 52.0), (2, 23.0), (4, 42.0)] {
            assert!((ages[row].unwrap() - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_null_flag() {
        let out = AgeImputer::new().fit_transform(&reference()).unwrap();
        assert_eq!(out.column(AGE_NULL_FLAG).unwrap(), &Column::ints(&[0, 0, 0, 1, 0]));
    }

    #[test]
    fn test_unseen_group_uses_global_mean() {
        let fitted = AgeImputer::new().fit(&reference()).unwrap();
        let query = Table::new()
            .with_column(AGE, Column::Float(vec![None]))
            .unwrap()
            .with_column(NAME_TITLE, Column::text(&["Master."]))
            .unwrap()
            .with_column(PCLASS, Column::ints(&[3]))
            .unwrap();

        let out = fitted.transform(&query).unwrap();
        let ages = out.numeric_column(AGE).unwrap();
        assert!((ages[0].unwrap() - 32.25).abs() < 1e-9);
    }

    #[test]
    fn test_transform_does_not_refit() {
        let fitted = AgeImputer::new().fit(&reference()).unwrap();
        let before = fitted.extract_params();

        // A query whose own ages would give very different statistics
        let query = Table::new()
            .with_column(AGE, Column::Float(vec![Some(90.0), None]))
            .unwrap()
            .with_column(NAME_TITLE, Column::text(&["Mr.", "Mr."]))
            .unwrap()
            .with_column(PCLASS, Column::ints(&[2, 2]))
            .unwrap();

        let out = fitted.transform(&query).unwrap();
        let ages = out.numeric_column(AGE).unwrap();
        assert!((ages[1].unwrap() - 23.0).abs() < 1e-9);
        assert_eq!(fitted.extract_params(), before);
    }

    #[test]
    fn test_all_missing_is_degenerate() {
        let table = Table::new()
            .with_column(AGE, Column::Float(vec![None, None]))
            .unwrap()
            .with_column(NAME_TITLE, Column::text(&["Mr.", "Mrs."]))
            .unwrap()
            .with_column(PCLASS, Column::ints(&[1, 2]))
            .unwrap();

        let result = AgeImputer::new().fit(&table);
        assert!(matches!(result, Err(PipelineError::DegenerateFit(_))));
    }

    #[test]
    fn test_missing_title_column() {
        let table = Table::new()
            .with_column(AGE, Column::floats(&[1.0]))
            .unwrap()
            .with_column(PCLASS, Column::ints(&[1]))
            .unwrap();
        let result = AgeImputer::new().fit(&table);
        assert!(matches!(result, Err(PipelineError::MissingColumn(name)) if name == NAME_TITLE));
    }

    #[test]
    fn test_save_load_file() {
        let fitted = AgeImputer::new().fit(&reference()).unwrap();
        let file = tempfile::NamedTempFile::new().unwrap();
        fitted.save_to_file(file.path()).unwrap();

        let loaded = FittedAgeImputer::load_from_file(file.path()).unwrap();
        assert_eq!(loaded.extract_params(), fitted.extract_params());
        assert_eq!(
            loaded.transform(&reference()).unwrap(),
            fitted.transform(&reference()).unwrap()
        );
    }

    #[test]
    fn test_from_params_rejects_nan_mean() {
        let params = AgeImputerParams {
            global_mean: f64::NAN,
            group_means: BTreeMap::new(),
        };
        assert!(FittedAgeImputer::from_params(params).is_err());
    }
}
