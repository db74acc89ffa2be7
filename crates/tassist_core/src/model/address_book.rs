//! Unique person list.
//!
//! # Invariants
//! - No two stored persons satisfy `Person::is_same_person`.
//! - Persons keep insertion order; edits replace in place.

use crate::model::person::Person;
use crate::model::values::MatNum;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Address book mutation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    DuplicatePerson(MatNum),
    PersonNotFound(MatNum),
}

impl Display for AddressBookError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicatePerson(mat_num) => {
                write!(f, "a person with matriculation number {mat_num} already exists")
            }
            Self::PersonNotFound(mat_num) => {
                write!(f, "no person with matriculation number {mat_num}")
            }
        }
    }
}

impl Error for AddressBookError {}

/// In-memory collection of persons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    persons: Vec<Person>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an address book, rejecting the first duplicate.
    pub fn from_persons(
        persons: impl IntoIterator<Item = Person>,
    ) -> Result<Self, AddressBookError> {
        let mut book = Self::new();
        for person in persons {
            book.add_person(person)?;
        }
        Ok(book)
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    pub fn add_person(&mut self, person: Person) -> Result<(), AddressBookError> {
        if self.has_person(&person) {
            return Err(AddressBookError::DuplicatePerson(person.mat_num));
        }
        self.persons.push(person);
        Ok(())
    }

    /// Replaces `target` with `edited`.
    ///
    /// `edited` may keep the identity of `target` but must not collide with
    /// any other stored person.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), AddressBookError> {
        let position = self
            .persons
            .iter()
            .position(|p| p == target)
            .ok_or_else(|| AddressBookError::PersonNotFound(target.mat_num.clone()))?;

        let collides = self
            .persons
            .iter()
            .enumerate()
            .any(|(idx, p)| idx != position && p.is_same_person(&edited));
        if collides {
            return Err(AddressBookError::DuplicatePerson(edited.mat_num));
        }

        self.persons[position] = edited;
        Ok(())
    }

    pub fn remove_person(&mut self, target: &Person) -> Result<Person, AddressBookError> {
        let position = self
            .persons
            .iter()
            .position(|p| p == target)
            .ok_or_else(|| AddressBookError::PersonNotFound(target.mat_num.clone()))?;
        Ok(self.persons.remove(position))
    }

    pub fn clear(&mut self) {
        self.persons.clear();
    }
}
