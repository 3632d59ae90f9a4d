//! Storage subsystem
//!
//! This module provides the abstraction and implementation for persisting
//! personal records.
//!
//! Components:
//! - `storage_trait`: the RecordStore trait defining a uniform API.
//! - `types`: the `Record` type and load reporting types.
//! - `file_storage`: JSON Lines file implementation.
//! - `record_filter`: case-insensitive name matching.

pub mod file_storage;
pub mod record_filter;
pub mod storage_trait;
pub mod types;

pub use file_storage::FileStorage;
pub use storage_trait::RecordStore;
pub use types::{Age, Record};
