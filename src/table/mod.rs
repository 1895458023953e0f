//! Column-oriented in-memory tables.
//!
//! A [`Table`] is an ordered list of named [`Column`]s of equal length. Rows are
//! addressed by position. Tables are values: every operation that changes the
//! schema returns a new table and leaves the receiver untouched, which keeps
//! transformers free of aliasing between their input and output.
//!
//! # Example
//!
//! ```rust
//! use titanic_features::table::{Column, Table};
//!
//! let table = Table::new()
//!     .with_column("Name", Column::text(&["Kelly, Mr. James"]))
//!     .unwrap()
//!     .with_column("Age", Column::Float(vec![None]))
//!     .unwrap();
//!
//! assert_eq!(table.n_rows(), 1);
//! assert_eq!(table.column_names(), &["Name", "Age"]);
//! ```

mod column;

pub use column::{Column, MISSING_TEXT};

use crate::dataset::Passenger;
use crate::error::{PipelineError, Result};
use ndarray::Array2;

/// An ordered set of equally long, named columns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Column>,
    n_rows: usize,
}

impl Table {
    /// Create an empty table with no columns.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    /// Column names in table order.
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.position(name)
            .map(|idx| &self.columns[idx])
            .ok_or_else(|| PipelineError::MissingColumn(name.to_string()))
    }

    /// Look up a column that must hold text.
    pub fn text_column(&self, name: &str) -> Result<&[Option<String>]> {
        match self.column(name)? {
            Column::Text(values) => Ok(values),
            other => Err(PipelineError::InvalidColumnType {
                column: name.to_string(),
                expected: "text",
                got: other.kind(),
            }),
        }
    }

    /// Read a numeric column (integer or float) as reals.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<Option<f64>>> {
        let column = self.column(name)?;
        if !column.is_numeric() {
            return Err(PipelineError::InvalidColumnType {
                column: name.to_string(),
                expected: "numeric",
                got: column.kind(),
            });
        }
        Ok((0..column.len()).map(|row| column.f64_at(row)).collect())
    }

    /// Return a table with `column` stored under `name`.
    ///
    /// An existing column with the same name is replaced in place; otherwise
    /// the column is appended. The first column of an empty table fixes the
    /// row count.
    pub fn with_column(mut self, name: impl Into<String>, column: Column) -> Result<Self> {
        let name = name.into();
        if self.columns.is_empty() {
            self.n_rows = column.len();
        } else if column.len() != self.n_rows {
            return Err(PipelineError::LengthMismatch {
                column: name,
                expected: self.n_rows,
                got: column.len(),
            });
        }

        match self.position(&name) {
            Some(idx) => self.columns[idx] = column,
            None => {
                self.names.push(name);
                self.columns.push(column);
            }
        }
        Ok(self)
    }

    /// Return a table without the named columns.
    ///
    /// Every name must be present; an absent column is a schema mismatch.
    pub fn drop_columns<S: AsRef<str>>(&self, names: &[S]) -> Result<Self> {
        for name in names {
            if !self.contains(name.as_ref()) {
                return Err(PipelineError::MissingColumn(name.as_ref().to_string()));
            }
        }

        let mut result = Table {
            names: Vec::with_capacity(self.names.len()),
            columns: Vec::with_capacity(self.columns.len()),
            n_rows: self.n_rows,
        };
        for (name, column) in self.names.iter().zip(self.columns.iter()) {
            if names.iter().any(|n| n.as_ref() == name) {
                continue;
            }
            result.names.push(name.clone());
            result.columns.push(column.clone());
        }
        Ok(result)
    }

    /// Return a table holding only the named columns, in the given order.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Self> {
        let mut result = Table {
            names: Vec::with_capacity(names.len()),
            columns: Vec::with_capacity(names.len()),
            n_rows: self.n_rows,
        };
        for name in names {
            let column = self.column(name.as_ref())?;
            result.names.push(name.as_ref().to_string());
            result.columns.push(column.clone());
        }
        Ok(result)
    }

    /// Convert an all-numeric table into a row-major matrix.
    ///
    /// Missing cells become `NaN`. Fails if any column holds text.
    pub fn to_array2(&self) -> Result<Array2<f64>> {
        for (name, column) in self.names.iter().zip(self.columns.iter()) {
            if !column.is_numeric() {
                return Err(PipelineError::InvalidColumnType {
                    column: name.clone(),
                    expected: "numeric",
                    got: column.kind(),
                });
            }
        }

        Ok(Array2::from_shape_fn((self.n_rows, self.n_cols()), |(row, col)| {
            self.columns[col].f64_at(row).unwrap_or(f64::NAN)
        }))
    }

    /// Build the raw passenger table from records.
    pub fn from_passengers(passengers: &[Passenger]) -> Self {
        let ids = passengers.iter().map(|p| Some(p.passenger_id)).collect();
        let classes = passengers.iter().map(|p| Some(p.pclass)).collect();
        let names = passengers.iter().map(|p| Some(p.name.clone())).collect();
        let sexes = passengers.iter().map(|p| Some(p.sex.clone())).collect();
        let ages = passengers.iter().map(|p| p.age).collect();
        let sib_sp = passengers.iter().map(|p| p.sib_sp).collect();
        let parch = passengers.iter().map(|p| p.parch).collect();
        let tickets = passengers.iter().map(|p| p.ticket.clone()).collect();
        let fares = passengers.iter().map(|p| p.fare).collect();
        let cabins = passengers.iter().map(|p| p.cabin.clone()).collect();
        let embarked = passengers.iter().map(|p| p.embarked.clone()).collect();

        Table {
            names: crate::dataset::RAW_COLUMNS
                .iter()
                .map(|n| n.to_string())
                .collect(),
            columns: vec![
                Column::Int(ids),
                Column::Int(classes),
                Column::Text(names),
                Column::Text(sexes),
                Column::Float(ages),
                Column::Int(sib_sp),
                Column::Int(parch),
                Column::Text(tickets),
                Column::Float(fares),
                Column::Text(cabins),
                Column::Text(embarked),
            ],
            n_rows: passengers.len(),
        }
    }
}
