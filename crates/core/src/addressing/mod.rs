//! Spreadsheet-style column addressing.
//!
//! Columns are numbered from 1 and labelled in bijective base-26
//! (A..Z, AA..AZ, BA..). A `ColumnSelector` accepts either form from the
//! caller and resolves to the canonical number.

pub mod column;
pub mod error;
pub mod selector;


pub use column::{letter_to_number, number_to_letter};
pub use error::AddressError;
pub use selector::ColumnSelector;
