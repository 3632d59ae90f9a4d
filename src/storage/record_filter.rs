//! Name matching shared by search, delete and modify.

use crate::storage::types::Record;

/// Matches records whose name equals the needle, ignoring case.
#[derive(Debug, Clone)]
pub struct NameFilter {
    needle: String,
}

impl NameFilter {
    pub fn new(name: &str) -> Self {
        Self {
            needle: name.to_lowercase(),
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        record.name.to_lowercase() == self.needle
    }
}

/// Build a `NameFilter` for the given name.
pub fn by_name(name: &str) -> NameFilter {
    NameFilter::new(name)
}
