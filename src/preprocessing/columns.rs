//! Column names read and produced by the preprocessing units.

pub const PASSENGER_ID: &str = "PassengerId";
pub const PCLASS: &str = "Pclass";
pub const NAME: &str = "Name";
pub const SEX: &str = "Sex";
pub const AGE: &str = "Age";
pub const SIB_SP: &str = "SibSp";
pub const PARCH: &str = "Parch";
pub const TICKET: &str = "Ticket";
pub const FARE: &str = "Fare";
pub const CABIN: &str = "Cabin";
pub const EMBARKED: &str = "Embarked";

pub const NAME_LEN: &str = "Name_Len";
pub const NAME_TITLE: &str = "Name_Title";
pub const AGE_NULL_FLAG: &str = "Age_Null_Flag";
pub const FAMILY_SIZE: &str = "Family_Size";
pub const TICKET_LETTER: &str = "Ticket_Letter";
pub const TICKET_CATEGORY: &str = "Ticket_Category";
pub const TICKET_LENGTH: &str = "Ticket_Length";
pub const CABIN_LETTER: &str = "Cabin_Letter";
pub const CABIN_NUMBER: &str = "Cabin_Number";
