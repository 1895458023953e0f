//! Typed column storage with per-cell missing values.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Text used when a missing cell is rendered as a string.
pub const MISSING_TEXT: &str = "nan";

/// A single named column's values.
///
/// Every cell is optional; `None` is the explicit missing-value marker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Column {
    /// Integer values (ids, counts, indicator flags).
    Int(Vec<Option<i64>>),
    /// Real values (ages, fares).
    Float(Vec<Option<f64>>),
    /// Text values (names, tickets, categories).
    Text(Vec<Option<String>>),
}

impl Column {
    /// Build a text column from string slices, none of them missing.
    pub fn text<S: AsRef<str>>(values: &[S]) -> Self {
        Column::Text(
            values
                .iter()
                .map(|v| Some(v.as_ref().to_string()))
                .collect(),
        )
    }

    /// Build an integer column with no missing values.
    pub fn ints(values: &[i64]) -> Self {
        Column::Int(values.iter().copied().map(Some).collect())
    }

    /// Build a float column with no missing values.
    pub fn floats(values: &[f64]) -> Self {
        Column::Float(values.iter().copied().map(Some).collect())
    }

    pub fn len(&self) -> usize {
        match self {
            Column::Int(v) => v.len(),
            Column::Float(v) => v.len(),
            Column::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short name of the column kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Column::Int(_) => "int",
            Column::Float(_) => "float",
            Column::Text(_) => "text",
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, Column::Text(_))
    }

    pub fn is_missing(&self, row: usize) -> bool {
        match self {
            Column::Int(v) => v[row].is_none(),
            Column::Float(v) => v[row].is_none(),
            Column::Text(v) => v[row].is_none(),
        }
    }

    /// Render a cell as text. Missing cells of any kind render as `"nan"`.
    pub fn text_at(&self, row: usize) -> Cow<'_, str> {
        match self {
            Column::Int(v) => match v[row] {
                Some(x) => Cow::Owned(x.to_string()),
                None => Cow::Borrowed(MISSING_TEXT),
            },
            Column::Float(v) => match v[row] {
                Some(x) => Cow::Owned(x.to_string()),
                None => Cow::Borrowed(MISSING_TEXT),
            },
            Column::Text(v) => match &v[row] {
                Some(s) => Cow::Borrowed(s.as_str()),
                None => Cow::Borrowed(MISSING_TEXT),
            },
        }
    }

    /// Read a cell as a real number. Text cells read as missing.
    pub fn f64_at(&self, row: usize) -> Option<f64> {
        match self {
            Column::Int(v) => v[row].map(|x| x as f64),
            Column::Float(v) => v[row],
            Column::Text(_) => None,
        }
    }

    /// Iterate over the text rendering of every cell.
    pub fn iter_text(&self) -> impl Iterator<Item = Cow<'_, str>> + '_ {
        (0..self.len()).map(move |row| self.text_at(row))
    }
}
