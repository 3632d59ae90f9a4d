//! Storage Trait
//!
//! This module defines the `RecordStore` trait, the interface every record
//! backend exposes to the record manager.
//!
//! Implementors are responsible for:
//! - Returning every persisted record in append order
//! - Appending a single record without rewriting the rest
//! - Replacing the whole persisted sequence
//!
//! All methods return a `Result` to handle potential storage errors.

use crate::error_handling::types::StorageError;
use crate::storage::types::Record;

/// The `RecordStore` trait defines the interface for record storage backends.
pub trait RecordStore {
    /// Loads all records, in the order they were persisted.
    ///
    /// A backend with nothing persisted yet returns an empty vector.
    fn load_all(&self) -> Result<Vec<Record>, StorageError>;

    /// Appends one record at the end of the store.
    fn append_one(&self, record: &Record) -> Result<(), StorageError>;

    /// Overwrites the store with exactly `records`, keeping their order.
    fn replace_all(&self, records: &[Record]) -> Result<(), StorageError>;
}
