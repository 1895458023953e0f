//! Family size bucketing from `SibSp` and `Parch`.

use crate::error::Result;
use crate::preprocessing::columns::{FAMILY_SIZE, PARCH, SIB_SP};
use crate::preprocessing::traits::{FittedTransformer, StatelessTransformer, Transformer};
use crate::table::{Column, Table};
use serde::{Deserialize, Serialize};

pub const SOLO: &str = "Solo";
pub const NUCLEAR: &str = "Nuclear";
pub const BIG: &str = "Big";

/// Adds `Family_Size`: "Solo", "Nuclear" (1 to 3 relatives) or "Big".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FamilySize;

impl FamilySize {
    pub fn new() -> Self {
        Self
    }
}

/// Bucket the number of relatives aboard.
///
/// A missing count makes the total unknown, which falls through to "Big".
pub fn family_bucket(sib_sp: Option<f64>, parch: Option<f64>) -> &'static str {
    match (sib_sp, parch) {
        (Some(s), Some(p)) if s + p == 0.0 => SOLO,
        (Some(s), Some(p)) if s + p <= 3.0 => NUCLEAR,
        _ => BIG,
    }
}

impl Transformer for FamilySize {
    type Params = FamilySize;
    type Fitted = FamilySize;

    fn fit(&self, _data: &Table) -> Result<FamilySize> {
        Ok(self.clone())
    }
}

impl FittedTransformer for FamilySize {
    type Params = FamilySize;

    fn transform(&self, data: &Table) -> Result<Table> {
        let sib_sp = data.numeric_column(SIB_SP)?;
        let parch = data.numeric_column(PARCH)?;

        let sizes = sib_sp
            .iter()
            .zip(parch.iter())
            .map(|(&s, &p)| Some(family_bucket(s, p).to_string()))
            .collect();

        data.clone().with_column(FAMILY_SIZE, Column::Text(sizes))
    }

    fn extract_params(&self) -> FamilySize {
        self.clone()
    }

    fn from_params(params: FamilySize) -> Result<Self> {
        Ok(params)
    }

    fn output_columns(&self) -> Vec<String> {
        vec![FAMILY_SIZE.to_string()]
    }
}

impl StatelessTransformer for FamilySize {}
