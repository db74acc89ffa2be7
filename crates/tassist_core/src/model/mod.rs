//! Domain model for teaching-assistant contact records.
//!
//! # Responsibility
//! - Define validated value objects and the `Person` aggregate.
//! - Hold the in-memory address book and its filtered view.
//!
//! # Invariants
//! - A `Person` can only be built from already-validated field values.
//! - A person is identified by matriculation number.

pub mod address_book;
pub mod attendance;
pub mod field;
pub mod lab_score;
pub mod manager;
pub mod person;
pub mod predicate;
pub mod values;
