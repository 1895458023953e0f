//! Ticket letter, category and length.
//!
//! Ticket prefixes carry a rough signal about fare class. The first character
//! is kept as `Ticket_Letter`; frequent letters map to themselves, a second
//! group of rarer letters collapses into `"Low_ticket"`, and everything else
//! becomes `"Other_ticket"`.

use crate::error::{PipelineError, Result};
use crate::preprocessing::columns::{TICKET, TICKET_CATEGORY, TICKET_LENGTH, TICKET_LETTER};
use crate::preprocessing::traits::{FittedTransformer, StatelessTransformer, Transformer};
use crate::table::{Column, Table};
use serde::{Deserialize, Serialize};

pub const LOW_TICKET: &str = "Low_ticket";
pub const OTHER_TICKET: &str = "Other_ticket";

/// Letters that keep their own category.
pub const DEFAULT_LETTER_GROUP_1: [char; 7] = ['1', '2', '3', 'S', 'P', 'C', 'A'];
/// Letters grouped into `"Low_ticket"`.
pub const DEFAULT_LETTER_GROUP_2: [char; 7] = ['W', '4', '7', '6', 'L', '5', '8'];

/// Adds `Ticket_Letter`, `Ticket_Category` and `Ticket_Length`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TicketFeatures {
    letter_group_1: Vec<char>,
    letter_group_2: Vec<char>,
}

impl Default for TicketFeatures {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketFeatures {
    /// Create with the default letter groups.
    pub fn new() -> Self {
        Self {
            letter_group_1: DEFAULT_LETTER_GROUP_1.to_vec(),
            letter_group_2: DEFAULT_LETTER_GROUP_2.to_vec(),
        }
    }

    /// Override both letter groups.
    pub fn with_letter_groups(mut self, group_1: Vec<char>, group_2: Vec<char>) -> Self {
        self.letter_group_1 = group_1;
        self.letter_group_2 = group_2;
        self
    }

    /// Category of a ticket given its first character.
    pub fn category(&self, letter: char) -> String {
        if self.letter_group_1.contains(&letter) {
            letter.to_string()
        } else if self.letter_group_2.contains(&letter) {
            LOW_TICKET.to_string()
        } else {
            OTHER_TICKET.to_string()
        }
    }
}

impl Transformer for TicketFeatures {
    type Params = TicketFeatures;
    type Fitted = TicketFeatures;

    fn fit(&self, _data: &Table) -> Result<TicketFeatures> {
        Ok(self.clone())
    }
}

impl FittedTransformer for TicketFeatures {
    type Params = TicketFeatures;

    fn transform(&self, data: &Table) -> Result<Table> {
        let tickets = data.column(TICKET)?;
        let n = tickets.len();

        let mut letters = Vec::with_capacity(n);
        let mut categories = Vec::with_capacity(n);
        let mut lengths = Vec::with_capacity(n);
        for (row, ticket) in tickets.iter_text().enumerate() {
            let letter = ticket
                .chars()
                .next()
                .ok_or_else(|| PipelineError::format(TICKET, row, "ticket is empty"))?;
            letters.push(Some(letter.to_string()));
            categories.push(Some(self.category(letter)));
            lengths.push(Some(ticket.chars().count() as i64));
        }

        data.clone()
            .with_column(TICKET_LETTER, Column::Text(letters))?
            .with_column(TICKET_CATEGORY, Column::Text(categories))?
            .with_column(TICKET_LENGTH, Column::Int(lengths))
    }

    fn extract_params(&self) -> TicketFeatures {
        self.clone()
    }

    fn from_params(params: TicketFeatures) -> Result<Self> {
        Ok(params)
    }

    fn output_columns(&self) -> Vec<String> {
        vec![
            TICKET_LETTER.to_string(),
            TICKET_CATEGORY.to_string(),
            TICKET_LENGTH.to_string(),
        ]
    }
}

impl StatelessTransformer for TicketFeatures {}

#[cfg(test)]
mod tests {
    use super::*;

    fn tickets(values: Vec<Option<&str>>) -> Table {
        Table::new()
            .with_column(
                TICKET,
                Column::Text(values.into_iter().map(|v| v.map(String::from)).collect()),
            )
            .unwrap()
    }

    #[test]
    fn test_ticket_features() {
        let table = tickets(vec![
            Some("A/5 21171"),
            Some("PC 17599"),
            Some("STON/O2. 3101282"),
            Some("W./C. 6608"),
            Some("237736"),
            Some("9234"),
        ]);

        let out = TicketFeatures::new().transform(&table).unwrap();
        assert_eq!(
            out.column(TICKET_LETTER).unwrap(),
            &Column::text(&["A", "P", "S", "W", "2", "9"])
        );
        assert_eq!(
            out.column(TICKET_CATEGORY).unwrap(),
            &Column::text(&["A", "P", "S", "Low_ticket", "2", "Other_ticket"])
        );
        assert_eq!(
            out.column(TICKET_LENGTH).unwrap(),
            &Column::ints(&[9, 8, 16, 10, 6, 4])
        );
    }

    #[test]
    fn test_missing_ticket_renders_as_nan() {
        let out = TicketFeatures::new()
            .transform(&tickets(vec![None]))
            .unwrap();
        assert_eq!(out.column(TICKET_LETTER).unwrap(), &Column::text(&["n"]));
        assert_eq!(
            out.column(TICKET_CATEGORY).unwrap(),
            &Column::text(&["Other_ticket"])
        );
        assert_eq!(out.column(TICKET_LENGTH).unwrap(), &Column::ints(&[3]));
    }

    #[test]
    fn test_empty_ticket_is_format_error() {
        let result = TicketFeatures::new().transform(&tickets(vec![Some("")]));
        assert!(matches!(result, Err(PipelineError::Format { .. })));
    }

    #[test]
    fn test_custom_letter_groups() {
        let unit = TicketFeatures::new().with_letter_groups(vec!['9'], vec![]);
        assert_eq!(unit.category('9'), "9");
        assert_eq!(unit.category('A'), OTHER_TICKET);
    }
}
