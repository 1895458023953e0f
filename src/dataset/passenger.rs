use serde::{Deserialize, Serialize};

/// One passenger record in the Titanic CSV schema.
///
/// Field names follow the CSV headers. Empty CSV fields deserialize to `None`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    #[serde(rename = "PassengerId")]
    pub passenger_id: i64,
    #[serde(rename = "Pclass")]
    pub pclass: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Sex")]
    pub sex: String,
    #[serde(rename = "Age")]
    pub age: Option<f64>,
    #[serde(rename = "SibSp")]
    pub sib_sp: Option<i64>,
    #[serde(rename = "Parch")]
    pub parch: Option<i64>,
    #[serde(rename = "Ticket")]
    pub ticket: Option<String>,
    #[serde(rename = "Fare")]
    pub fare: Option<f64>,
    #[serde(rename = "Cabin")]
    pub cabin: Option<String>,
    #[serde(rename = "Embarked")]
    pub embarked: Option<String>,
}
