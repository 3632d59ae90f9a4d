use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};

use crate::error_handling::types::StorageError;
use crate::storage::storage_trait::RecordStore;
use crate::storage::types::{LoadReport, MalformedLine, Record};

/// Store file used when nothing else is configured, relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "records.jsonl";

/// Legacy placeholder some store files contain instead of records.
pub const EMPTY_LIST_MARKER: &str = "[]";

/// JSON Lines backed record store: one record per line, in append order.
///
/// Each operation opens the file, acts, and drops the handle before returning.
/// Nothing is locked, and `replace_all` truncates in place.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        debug!("FileStorage bound to {}", path.display());
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every line of the store, keeping track of the lines that had to be dropped.
    pub fn load_report(&self) -> Result<LoadReport, StorageError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Store file {} does not exist yet", self.path.display());
                return Ok(LoadReport::default());
            }
            Err(e) => {
                error!("Failed to open store file {}: {}", self.path.display(), e);
                return Err(StorageError::ReadFailed(self.path.clone(), e));
            }
        };

        let mut report = LoadReport::default();
        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                error!("Failed to read store file {}: {}", self.path.display(), e);
                StorageError::ReadFailed(self.path.clone(), e)
            })?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed == EMPTY_LIST_MARKER {
                continue;
            }
            match serde_json::from_str::<Record>(trimmed) {
                Ok(record) => report.records.push(record),
                Err(e) => {
                    warn!(
                        "Ignoring invalid line {} in {}: {} ({})",
                        idx + 1,
                        self.path.display(),
                        trimmed,
                        e
                    );
                    report.skipped.push(MalformedLine {
                        line_number: idx + 1,
                        content: trimmed.to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }
        debug!(
            "Loaded {} record(s) from {}, skipped {} line(s)",
            report.records.len(),
            self.path.display(),
            report.skipped.len()
        );
        Ok(report)
    }

    /// Clears a store holding only the empty-list marker.
    ///
    /// Returns whether the next append has to start with a line terminator, which is
    /// the case when the last line was written without one.
    fn prepare_append(&self) -> Result<bool, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(e) => {
                error!("Failed to read store file {}: {}", self.path.display(), e);
                return Err(StorageError::ReadFailed(self.path.clone(), e));
            }
        };
        if content.trim() == EMPTY_LIST_MARKER {
            File::create(&self.path).map_err(|e| {
                error!("Failed to truncate store file {}: {}", self.path.display(), e);
                StorageError::WriteFailed(self.path.clone(), e)
            })?;
            info!("Cleared empty-list marker from {}", self.path.display());
            return Ok(false);
        }
        Ok(!content.is_empty() && !content.ends_with('\n'))
    }
}

impl RecordStore for FileStorage {
    fn load_all(&self) -> Result<Vec<Record>, StorageError> {
        Ok(self.load_report()?.records)
    }

    fn append_one(&self, record: &Record) -> Result<(), StorageError> {
        let needs_separator = self.prepare_append()?;
        let mut line = String::new();
        if needs_separator {
            line.push('\n');
        }
        line.push_str(&serde_json::to_string(record)?);
        line.push('\n');

        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                error!("Open append failed {}: {}", self.path.display(), e);
                StorageError::WriteFailed(self.path.clone(), e)
            })?;
        f.write_all(line.as_bytes()).map_err(|e| {
            error!("Write failed {}: {}", self.path.display(), e);
            StorageError::WriteFailed(self.path.clone(), e)
        })?;
        debug!("Appended record '{}' to {}", record.name, self.path.display());
        Ok(())
    }

    fn replace_all(&self, records: &[Record]) -> Result<(), StorageError> {
        // Serialize everything before truncating the file.
        let mut buf = String::new();
        for record in records {
            buf.push_str(&serde_json::to_string(record)?);
            buf.push('\n');
        }

        let mut f = File::create(&self.path).map_err(|e| {
            error!("Failed to create store file {}: {}", self.path.display(), e);
            StorageError::WriteFailed(self.path.clone(), e)
        })?;
        f.write_all(buf.as_bytes()).map_err(|e| {
            error!("Write failed {}: {}", self.path.display(), e);
            StorageError::WriteFailed(self.path.clone(), e)
        })?;
        info!(
            "Rewrote {} with {} record(s)",
            self.path.display(),
            records.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage_in(dir: &TempDir) -> FileStorage {
        FileStorage::new(dir.path().join("records.jsonl"))
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        assert!(storage.load_all().unwrap().is_empty());
        assert!(!storage.path().exists());
    }

    #[test]
    fn test_append_then_load() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        let first = Record::new("Ana", "30", "ana@example.com");
        let last = Record::new("Bob", "", "");
        storage.append_one(&first).unwrap();
        storage.append_one(&last).unwrap();

        let all = storage.load_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all.last(), Some(&last));
        assert_eq!(all[0], first);
    }

    #[test]
    fn test_blank_and_marker_lines_are_skipped() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        fs::write(storage.path(), "\n   \n[]\n  [] \n\t\n").unwrap();

        let report = storage.load_report().unwrap();
        assert!(report.records.is_empty());
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_malformed_line_is_skipped() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        fs::write(
            storage.path(),
            concat!(
                r#"{"name":"A","age":"1","email":"a@x.com"}"#,
                "\nnot-json\n",
                r#"{"name":"B","age":"2","email":"b@x.com"}"#,
                "\n"
            ),
        )
        .unwrap();

        let report = storage.load_report().unwrap();
        assert_eq!(
            report.records,
            vec![
                Record::new("A", "1", "a@x.com"),
                Record::new("B", "2", "b@x.com")
            ]
        );
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].line_number, 2);
        assert_eq!(report.skipped[0].content, "not-json");
        assert!(report.skipped[0].reason.contains("expected"));
    }

    #[test]
    fn test_malformed_line_is_dropped_on_rewrite() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        fs::write(
            storage.path(),
            concat!(r#"{"name":"A","age":"1","email":"a@x.com"}"#, "\n{broken\n"),
        )
        .unwrap();

        let records = storage.load_all().unwrap();
        storage.replace_all(&records).unwrap();
        let content = fs::read_to_string(storage.path()).unwrap();
        assert_eq!(content, "{\"name\":\"A\",\"age\":\"1\",\"email\":\"a@x.com\"}\n");
    }

    #[test]
    fn test_append_clears_empty_list_marker() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        fs::write(storage.path(), "  []\n").unwrap();

        storage.append_one(&Record::new("Ana", "30", "a@x.com")).unwrap();
        let content = fs::read_to_string(storage.path()).unwrap();
        assert_eq!(content, "{\"name\":\"Ana\",\"age\":\"30\",\"email\":\"a@x.com\"}\n");
    }

    #[test]
    fn test_append_keeps_existing_lines() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        fs::write(storage.path(), "not-json\n").unwrap();

        storage.append_one(&Record::new("Ana", "30", "a@x.com")).unwrap();
        let content = fs::read_to_string(storage.path()).unwrap();
        assert!(content.starts_with("not-json\n"));
        assert_eq!(storage.load_all().unwrap().len(), 1);
    }

    #[test]
    fn test_append_after_unterminated_line() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        fs::write(storage.path(), r#"{"name":"A","age":"1","email":"a@x.com"}"#).unwrap();

        storage.append_one(&Record::new("B", "2", "b@x.com")).unwrap();
        let names: Vec<String> = storage
            .load_all()
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_replace_all_keeps_order() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        for name in ["a", "b", "c"] {
            storage.append_one(&Record::new(name, "1", "x@x.com")).unwrap();
        }

        let mut records = storage.load_all().unwrap();
        records.remove(1);
        storage.replace_all(&records).unwrap();

        let names: Vec<String> = storage
            .load_all()
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_replace_all_with_nothing_empties_file() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        storage.append_one(&Record::new("a", "1", "x@x.com")).unwrap();
        storage.replace_all(&[]).unwrap();
        assert_eq!(fs::read_to_string(storage.path()).unwrap(), "");
    }

    #[test]
    fn test_append_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path().join("missing").join("records.jsonl"));
        let res = storage.append_one(&Record::new("a", "1", "x@x.com"));
        assert!(matches!(res, Err(StorageError::WriteFailed(_, _))));
    }

    #[test]
    fn test_replace_all_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path().join("missing").join("records.jsonl"));
        let res = storage.replace_all(&[Record::new("a", "1", "x@x.com")]);
        assert!(matches!(res, Err(StorageError::WriteFailed(_, _))));
        assert!(!storage.path().exists());
    }
}
