//! Stateless feature derivation from raw passenger text and counts.
//!
//! | Transformer | Reads | Adds |
//! |-------------|-------|------|
//! | [`NameFeatures`] | `Name` | `Name_Len`, `Name_Title` |
//! | [`FamilySize`] | `SibSp`, `Parch` | `Family_Size` |
//! | [`TicketFeatures`] | `Ticket` | `Ticket_Letter`, `Ticket_Category`, `Ticket_Length` |
//! | [`CabinLetter`] | `Cabin` | `Cabin_Letter` |
//! | [`CabinNumber`] | `Cabin` | `Cabin_Number` |

pub mod cabin;
pub mod family;
pub mod name;
pub mod ticket;

pub use cabin::{parse_cabin_number, CabinLetter, CabinNumber};
pub use family::{family_bucket, FamilySize};
pub use name::{parse_title, NameFeatures};
pub use ticket::{TicketFeatures, DEFAULT_LETTER_GROUP_1, DEFAULT_LETTER_GROUP_2};
