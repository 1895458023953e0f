//! Cabin deck letter and cabin number extraction.
//!
//! Cabins look like `"C85"` or `"C23 C25 C27"`. Missing cabins are read as the
//! text `"nan"`, so the deck letter of an unknown cabin is `"n"` and the number
//! parser sees `"an"`, which it treats as missing.

use crate::error::{PipelineError, Result};
use crate::preprocessing::columns::{CABIN, CABIN_LETTER, CABIN_NUMBER};
use crate::preprocessing::traits::{FittedTransformer, StatelessTransformer, Transformer};
use crate::table::{Column, Table};
use serde::{Deserialize, Serialize};

/// Adds `Cabin_Letter`, the first character of the cabin text.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CabinLetter;

impl CabinLetter {
    pub fn new() -> Self {
        Self
    }
}

impl Transformer for CabinLetter {
    type Params = CabinLetter;
    type Fitted = CabinLetter;

    fn fit(&self, _data: &Table) -> Result<CabinLetter> {
        Ok(self.clone())
    }
}

impl FittedTransformer for CabinLetter {
    type Params = CabinLetter;

    fn transform(&self, data: &Table) -> Result<Table> {
        let cabins = data.column(CABIN)?;
        let letters = cabins
            .iter_text()
            .enumerate()
            .map(|(row, cabin)| {
                cabin
                    .chars()
                    .next()
                    .map(|c| Some(c.to_string()))
                    .ok_or_else(|| PipelineError::format(CABIN, row, "cabin is empty"))
            })
            .collect::<Result<Vec<_>>>()?;

        data.clone().with_column(CABIN_LETTER, Column::Text(letters))
    }

    fn extract_params(&self) -> CabinLetter {
        self.clone()
    }

    fn from_params(params: CabinLetter) -> Result<Self> {
        Ok(params)
    }

    fn output_columns(&self) -> Vec<String> {
        vec![CABIN_LETTER.to_string()]
    }
}

impl StatelessTransformer for CabinLetter {}

/// Adds `Cabin_Number`, parsed from the last cabin listed.
///
/// The column is always recomputed from `Cabin`, so applying the unit twice
/// gives the same table as applying it once.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CabinNumber;

impl CabinNumber {
    pub fn new() -> Self {
        Self
    }
}

/// Parse the number of the last cabin in a cabin text.
///
/// `"C23 C25 C27"` gives `Some(27)`; `"nan"`, `"T"` and `"Dxx"` give `None`.
pub fn parse_cabin_number(cabin: &str) -> Option<i64> {
    let last = cabin.split_whitespace().last()?;
    let mut chars = last.chars();
    chars.next()?;
    let digits = chars.as_str();
    if digits.is_empty() || digits == "an" {
        return None;
    }
    digits.parse().ok()
}

impl Transformer for CabinNumber {
    type Params = CabinNumber;
    type Fitted = CabinNumber;

    fn fit(&self, _data: &Table) -> Result<CabinNumber> {
        Ok(self.clone())
    }
}

impl FittedTransformer for CabinNumber {
    type Params = CabinNumber;

    fn transform(&self, data: &Table) -> Result<Table> {
        let cabins = data.column(CABIN)?;
        let numbers = cabins
            .iter_text()
            .map(|cabin| parse_cabin_number(&cabin))
            .collect();

        data.clone().with_column(CABIN_NUMBER, Column::Int(numbers))
    }

    fn extract_params(&self) -> CabinNumber {
        self.clone()
    }

    fn from_params(params: CabinNumber) -> Result<Self> {
        Ok(params)
    }

    fn output_columns(&self) -> Vec<String> {
        vec![CABIN_NUMBER.to_string()]
    }
}

impl StatelessTransformer for CabinNumber {}

#[cfg(test)]
mod tests {
    use super::*;

    fn cabins() -> Table {
        Table::new()
            .with_column(
                CABIN,
                Column::Text(vec![
                    Some("C85".to_string()),
                    None,
                    Some("C23 C25 C27".to_string()),
                    Some("F G73".to_string()),
                    Some("T".to_string()),
                ]),
            )
            .unwrap()
    }

    #[test]
    fn test_cabin_letter() {
        let out = CabinLetter::new().transform(&cabins()).unwrap();
        assert_eq!(
            out.column(CABIN_LETTER).unwrap(),
            &Column::text(&["C", "n", "C", "F", "T"])
        );
    }

    #[test]
    fn test_empty_cabin_is_format_error() {
        let table = Table::new()
            .with_column(CABIN, Column::text(&[""]))
            .unwrap();
        assert!(matches!(
            CabinLetter::new().transform(&table),
            Err(PipelineError::Format { .. })
        ));
    }

    #[test]
    fn test_cabin_number() {
        let out = CabinNumber::new().transform(&cabins()).unwrap();
        assert_eq!(
            out.column(CABIN_NUMBER).unwrap(),
            &Column::Int(vec![Some(85), None, Some(27), Some(73), None])
        );
    }

    #[test]
    fn test_parse_cabin_number_edge_cases() {
        assert_eq!(parse_cabin_number("nan"), None);
        assert_eq!(parse_cabin_number(""), None);
        assert_eq!(parse_cabin_number("Dxx"), None);
        assert_eq!(parse_cabin_number("B101"), Some(101));
    }

    #[test]
    fn test_parse_cabin_number_extra_whitespace() {
        assert_eq!(parse_cabin_number("C85 "), Some(85));
        assert_eq!(parse_cabin_number(" C85"), Some(85));
        assert_eq!(parse_cabin_number("C23  C25"), Some(25));
        assert_eq!(parse_cabin_number("B57\tB59"), Some(59));
        assert_eq!(parse_cabin_number("   "), None);
    }

    #[test]
    fn test_cabin_number_is_idempotent() {
        let unit = CabinNumber::new();
        let once = unit.transform(&cabins()).unwrap();
        let twice = unit.transform(&once).unwrap();
        assert_eq!(once, twice);
    }
}
