//! In-memory application model.
//!
//! # Responsibility
//! - Own the address book for the running session.
//! - Maintain the filtered view shown to the user.
//!
//! # Invariants
//! - The filtered view preserves address book order.
//! - Adding a person resets the filter so the new entry is visible.

use crate::model::address_book::{AddressBook, AddressBookError};
use crate::model::person::Person;
use crate::model::predicate::NameContainsKeywordsPredicate;

/// Address book plus the active list filter.
#[derive(Debug, Clone, Default)]
pub struct Model {
    address_book: AddressBook,
    filter: Option<NameContainsKeywordsPredicate>,
}

impl Model {
    pub fn new(address_book: AddressBook) -> Self {
        Self {
            address_book,
            filter: None,
        }
    }

    pub fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    /// Removes every person and drops the active filter.
    pub fn clear(&mut self) {
        self.address_book.clear();
        self.filter = None;
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.address_book.has_person(person)
    }

    pub fn add_person(&mut self, person: Person) -> Result<(), AddressBookError> {
        self.address_book.add_person(person)?;
        self.filter = None;
        Ok(())
    }

    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), AddressBookError> {
        self.address_book.set_person(target, edited)
    }

    pub fn delete_person(&mut self, target: &Person) -> Result<Person, AddressBookError> {
        self.address_book.remove_person(target)
    }

    /// Persons visible under the active filter.
    pub fn filtered_persons(&self) -> Vec<&Person> {
        self.address_book
            .persons()
            .iter()
            .filter(|person| self.filter.as_ref().map_or(true, |p| p.test(person)))
            .collect()
    }

    /// Returns the visible person at a zero-based position.
    pub fn filtered_person(&self, zero_based: usize) -> Option<&Person> {
        self.filtered_persons().get(zero_based).copied()
    }

    /// Sets the filter; `None` shows every person.
    pub fn update_filter(&mut self, filter: Option<NameContainsKeywordsPredicate>) {
        self.filter = filter;
    }
}
