//! Loading Titanic-schema passenger data.
//!
//! CSV files are read with the `csv` crate and deserialized row by row into
//! [`Passenger`] records. Extra columns such as `Survived` are ignored, so the
//! same loader reads both the labelled training file and unlabelled queries.
//!
//! # Example
//!
//! ```rust
//! use titanic_features::dataset::read_passengers;
//! use titanic_features::table::Table;
//!
//! let csv = "PassengerId,Survived,Pclass,Name,Sex,Age,SibSp,Parch,Ticket,Fare,Cabin,Embarked\n\
//!            1,0,3,\"Braund, Mr. Owen Harris\",male,22,1,0,A/5 21171,7.25,,S\n";
//! let passengers = read_passengers(csv.as_bytes()).unwrap();
//! let table = Table::from_passengers(&passengers);
//! assert_eq!(table.n_rows(), 1);
//! ```

mod passenger;

pub use passenger::Passenger;

use crate::error::Result;
use crate::table::Table;
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Raw record columns, in the order every pipeline input is projected onto.
pub const RAW_COLUMNS: [&str; 11] = [
    "PassengerId",
    "Pclass",
    "Name",
    "Sex",
    "Age",
    "SibSp",
    "Parch",
    "Ticket",
    "Fare",
    "Cabin",
    "Embarked",
];

/// Read passenger records from any CSV source with a header row.
pub fn read_passengers<R: Read>(reader: R) -> Result<Vec<Passenger>> {
    let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut passengers = Vec::new();
    for result in rdr.deserialize() {
        let passenger: Passenger = result?;
        passengers.push(passenger);
    }
    tracing::debug!(rows = passengers.len(), "read passenger records");
    Ok(passengers)
}

/// Read passenger records from a CSV file.
pub fn load_passengers_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Passenger>> {
    let file = File::open(path.as_ref())?;
    read_passengers(BufReader::new(file))
}

/// Read a CSV file straight into the raw passenger table.
pub fn load_table_csv<P: AsRef<Path>>(path: P) -> Result<Table> {
    let passengers = load_passengers_csv(path)?;
    Ok(Table::from_passengers(&passengers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use std::io::Write;

    const HEADER: &str =
        "PassengerId,Survived,Pclass,Name,Sex,Age,SibSp,Parch,Ticket,Fare,Cabin,Embarked";

    #[test]
    fn test_read_passengers_with_missing_fields() {
        let csv = format!(
            "{}\n{}\n{}\n",
            HEADER,
            "2,1,1,\"Cumings, Mrs. John Bradley (Florence Briggs Thayer)\",female,38,1,0,PC 17599,71.2833,C85,C",
            "6,0,3,\"Moran, Mr. James\",male,,0,0,330877,8.4583,,Q",
        );

        let passengers = read_passengers(csv.as_bytes()).unwrap();
        assert_eq!(passengers.len(), 2);

        assert_eq!(
            passengers[0].name,
            "Cumings, Mrs. John Bradley (Florence Briggs Thayer)"
        );
        assert_eq!(passengers[0].cabin.as_deref(), Some("C85"));
        assert_eq!(passengers[0].age, Some(38.0));

        assert_eq!(passengers[1].age, None);
        assert_eq!(passengers[1].cabin, None);
        assert_eq!(passengers[1].embarked.as_deref(), Some("Q"));
    }

    #[test]
    fn test_read_passengers_without_label_column() {
        let csv = "PassengerId,Pclass,Name,Sex,Age,SibSp,Parch,Ticket,Fare,Cabin,Embarked\n\
                   892,3,\"Kelly, Mr. James\",male,34.5,0,0,330911,7.8292,,Q\n";
        let passengers = read_passengers(csv.as_bytes()).unwrap();
        assert_eq!(passengers[0].passenger_id, 892);
        assert_eq!(passengers[0].fare, Some(7.8292));
    }

    #[test]
    fn test_read_passengers_bad_number() {
        let csv = format!("{}\n{}\n", HEADER, "1,0,third,\"A, Mr. B\",male,,0,0,1,1.0,,S");
        let result = read_passengers(csv.as_bytes());
        assert!(matches!(result, Err(PipelineError::Csv(_))));
    }

    #[test]
    fn test_load_table_csv() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        writeln!(
            file,
            "1,0,3,\"Braund, Mr. Owen Harris\",male,22,1,0,A/5 21171,7.25,,S"
        )
        .unwrap();

        let table = load_table_csv(file.path()).unwrap();
        assert_eq!(table.n_rows(), 1);
        assert_eq!(table.column_names().len(), RAW_COLUMNS.len());
        assert!(!table.contains("Survived"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_passengers_csv("/definitely/not/here.csv");
        assert!(matches!(result, Err(PipelineError::Io(_))));
    }
}
