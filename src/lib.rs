pub mod configuration;
pub mod console;
pub mod controller;
pub mod error_handling;
pub mod record_management;
pub mod storage;

pub use record_management::RecordManager;
pub use storage::{FileStorage, Record, RecordStore};
