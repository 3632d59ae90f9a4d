use log::{debug, info};

use crate::error_handling::types::{ConsoleError, RecordError};
use crate::record_management::RecordUpdate;
use crate::storage::record_filter::by_name;
use crate::storage::storage_trait::RecordStore;
use crate::storage::types::Record;

/// Runs the record operations against an injected `RecordStore`.
///
/// Deleting removes every record with a matching name, while modifying only
/// touches the first one. Both behaviors are relied upon and must stay as is.
pub struct RecordManager {
    storage: Box<dyn RecordStore>,
}

impl RecordManager {
    pub fn new(storage: Box<dyn RecordStore>) -> Self {
        Self { storage }
    }

    pub fn add(&self, record: &Record) -> Result<(), RecordError> {
        self.storage.append_one(record)?;
        info!("Added record '{}'", record.name);
        Ok(())
    }

    pub fn list_all(&self) -> Result<Vec<Record>, RecordError> {
        Ok(self.storage.load_all()?)
    }

    /// Returns every record whose name matches, ignoring case. No match is not an error.
    pub fn find_by_name(&self, name: &str) -> Result<Vec<Record>, RecordError> {
        let filter = by_name(name);
        let found: Vec<Record> = self
            .storage
            .load_all()?
            .into_iter()
            .filter(|r| filter.matches(r))
            .collect();
        debug!("Found {} record(s) named '{}'", found.len(), name);
        Ok(found)
    }

    /// Removes every matching record and returns how many were removed.
    ///
    /// The store is only rewritten when at least one record matched.
    pub fn delete_by_name(&self, name: &str) -> Result<usize, RecordError> {
        let filter = by_name(name);
        let records = self.storage.load_all()?;
        let original_len = records.len();
        let remaining: Vec<Record> = records.into_iter().filter(|r| !filter.matches(r)).collect();

        let removed = original_len - remaining.len();
        if removed == 0 {
            debug!("No record named '{}' to delete", name);
            return Ok(0);
        }
        self.storage.replace_all(&remaining)?;
        info!("Deleted {} record(s) named '{}'", removed, name);
        Ok(removed)
    }

    /// Updates the first matching record with the values returned by `edit`.
    ///
    /// `edit` receives the current record and is only called when a match exists.
    /// Returns the updated record, or `None` when nothing matched.
    pub fn modify_by_name<F>(&self, name: &str, edit: F) -> Result<Option<Record>, RecordError>
    where
        F: FnOnce(&Record) -> Result<RecordUpdate, ConsoleError>,
    {
        let filter = by_name(name);
        let mut records = self.storage.load_all()?;
        let Some(target) = records.iter_mut().find(|r| filter.matches(r)) else {
            debug!("No record named '{}' to modify", name);
            return Ok(None);
        };

        let update = edit(&*target)?;
        update.apply(target);
        let updated = target.clone();

        self.storage.replace_all(&records)?;
        info!("Modified record '{}' (was '{}')", updated.name, name);
        Ok(Some(updated))
    }
}
