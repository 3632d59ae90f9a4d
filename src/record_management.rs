//! Record management core module.
//!
//! This module provides the operations built on top of a `RecordStore`:
//! add, list, search, delete and modify. Every mutating operation other than
//! add loads the whole store, works on the in-memory copy and writes
//! everything back.

use crate::storage::types::{Age, Record};

/// Submodule for the record manager implementation.
pub mod record_manager;

#[cfg(test)]
mod integration_tests;

pub use record_manager::RecordManager;

/// Replacement values for a record being modified.
///
/// `None` keeps the current value of the field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordUpdate {
    pub name: Option<String>,
    pub age: Option<String>,
    pub email: Option<String>,
}

impl RecordUpdate {
    /// Builds an update from raw operator input, where an empty answer keeps the old value.
    pub fn from_input(name: String, age: String, email: String) -> Self {
        let keep_if_blank = |s: String| if s.is_empty() { None } else { Some(s) };
        Self {
            name: keep_if_blank(name),
            age: keep_if_blank(age),
            email: keep_if_blank(email),
        }
    }

    pub fn apply(self, record: &mut Record) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(age) = self.age {
            record.age = Age::Text(age);
        }
        if let Some(email) = self.email {
            record.email = email;
        }
    }
}
