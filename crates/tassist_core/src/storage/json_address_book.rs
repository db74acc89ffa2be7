//! JSON document shape for a whole address book.

use crate::model::address_book::AddressBook;
use crate::storage::json_person::{JsonAdaptedPerson, RecordError};
use serde::{Deserialize, Serialize};

/// Root object of the data file: `{"persons": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonSerializableAddressBook {
    #[serde(default)]
    pub persons: Vec<JsonAdaptedPerson>,
}

impl JsonSerializableAddressBook {
    pub fn from_model_type(address_book: &AddressBook) -> Self {
        Self {
            persons: address_book
                .persons()
                .iter()
                .map(JsonAdaptedPerson::from_model_type)
                .collect(),
        }
    }

    /// Converts every record, failing on the first invalid or duplicate one.
    pub fn to_model_type(&self) -> Result<AddressBook, RecordError> {
        let mut address_book = AddressBook::new();
        for record in &self.persons {
            let person = record.to_model_type()?;
            address_book
                .add_person(person)
                .map_err(|_| RecordError::DuplicatePerson)?;
        }
        Ok(address_book)
    }
}
