//! Removal of intermediate and raw columns.

use crate::error::{PipelineError, Result};
use crate::preprocessing::traits::{FittedTransformer, StatelessTransformer, Transformer};
use crate::table::Table;
use serde::{Deserialize, Serialize};

/// Drops a fixed list of columns.
///
/// Every configured column must be present; an absent one fails with
/// [`PipelineError::MissingColumn`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnDropper {
    columns: Vec<String>,
}

impl ColumnDropper {
    pub fn new<S: AsRef<str>>(columns: &[S]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.as_ref().to_string()).collect(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

impl Transformer for ColumnDropper {
    type Params = ColumnDropper;
    type Fitted = ColumnDropper;

    fn fit(&self, _data: &Table) -> Result<ColumnDropper> {
        Ok(self.clone())
    }
}

impl FittedTransformer for ColumnDropper {
    type Params = ColumnDropper;

    fn transform(&self, data: &Table) -> Result<Table> {
        data.drop_columns(&self.columns)
    }

    fn extract_params(&self) -> ColumnDropper {
        self.clone()
    }

    fn from_params(params: ColumnDropper) -> Result<Self> {
        let mut seen = std::collections::HashSet::new();
        for name in &params.columns {
            if !seen.insert(name.as_str()) {
                return Err(PipelineError::InvalidParameter(format!(
                    "column {} listed twice for dropping",
                    name
                )));
            }
        }
        Ok(params)
    }

    fn output_columns(&self) -> Vec<String> {
        Vec::new()
    }
}

impl StatelessTransformer for ColumnDropper {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Column;

    fn sample() -> Table {
        Table::new()
            .with_column("Name", Column::text(&["Kelly, Mr. James"]))
            .unwrap()
            .with_column("Name_Len", Column::ints(&[16]))
            .unwrap()
            .with_column("Sex", Column::text(&["male"]))
            .unwrap()
    }

    #[test]
    fn test_drop_keeps_order_of_rest() {
        let out = ColumnDropper::new(&["Name", "Sex"])
            .transform_direct(&sample())
            .unwrap();
        assert_eq!(out.column_names(), &["Name_Len"]);
    }

    #[test]
    fn test_absent_column_fails() {
        let result = ColumnDropper::new(&["Cabin"]).transform_direct(&sample());
        assert!(matches!(result, Err(PipelineError::MissingColumn(name)) if name == "Cabin"));
    }

    #[test]
    fn test_duplicate_columns_rejected() {
        let params = ColumnDropper::new(&["Sex", "Sex"]);
        assert!(ColumnDropper::from_params(params).is_err());
    }
}
