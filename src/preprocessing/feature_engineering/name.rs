//! Name length and title extraction.
//!
//! Passenger names look like `"<Surname>, <Title> <GivenNames>"`. The title
//! is the first whitespace-delimited token of the segment after the first
//! comma, e.g. `"Mr."` in `"Kelly, Mr. James"`.

use crate::error::{PipelineError, Result};
use crate::preprocessing::columns::{NAME, NAME_LEN, NAME_TITLE};
use crate::preprocessing::traits::{FittedTransformer, StatelessTransformer, Transformer};
use crate::table::{Column, Table};
use serde::{Deserialize, Serialize};

/// Adds `Name_Len` (character count) and `Name_Title` columns.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NameFeatures;

impl NameFeatures {
    pub fn new() -> Self {
        Self
    }
}

/// Extract the title token from a raw name.
///
/// Returns `None` if the name has no comma or nothing follows it.
pub fn parse_title(name: &str) -> Option<&str> {
    name.split(',').nth(1)?.split_whitespace().next()
}

impl Transformer for NameFeatures {
    type Params = NameFeatures;
    type Fitted = NameFeatures;

    fn fit(&self, _data: &Table) -> Result<NameFeatures> {
        Ok(self.clone())
    }
}

impl FittedTransformer for NameFeatures {
    type Params = NameFeatures;

    fn transform(&self, data: &Table) -> Result<Table> {
        let names = data.text_column(NAME)?;

        let mut lengths = Vec::with_capacity(names.len());
        let mut titles = Vec::with_capacity(names.len());
        for (row, name) in names.iter().enumerate() {
            let name = name
                .as_deref()
                .ok_or_else(|| PipelineError::format(NAME, row, "name is missing"))?;
            let title = parse_title(name).ok_or_else(|| {
                PipelineError::format(
                    NAME,
                    row,
                    format!("expected '<Surname>, <Title> ...', got '{}'", name),
                )
            })?;
            lengths.push(Some(name.chars().count() as i64));
            titles.push(Some(title.to_string()));
        }

        data.clone()
            .with_column(NAME_LEN, Column::Int(lengths))?
            .with_column(NAME_TITLE, Column::Text(titles))
    }

    fn extract_params(&self) -> NameFeatures {
        self.clone()
    }

    fn from_params(params: NameFeatures) -> Result<Self> {
        Ok(params)
    }

    fn output_columns(&self) -> Vec<String> {
        vec![NAME_LEN.to_string(), NAME_TITLE.to_string()]
    }
}

impl StatelessTransformer for NameFeatures {}
