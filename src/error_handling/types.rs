use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    TomlError(String),
    EmptyStorePath,
    DirectoryDoesNotExist(String),
    BadLogLevel(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::TomlError(e) => write!(f, "TOML parsing error: {}", e),
            ConfigError::EmptyStorePath => write!(f, "Store path must not be empty"),
            ConfigError::DirectoryDoesNotExist(e) => write!(f, "Directory error: {}", e),
            ConfigError::BadLogLevel(e) => write!(f, "Unknown log level: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

#[derive(Debug)]
pub enum StorageError {
    ReadFailed(PathBuf, std::io::Error),
    WriteFailed(PathBuf, std::io::Error),
    SerializationFailed(serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ReadFailed(p, e) => {
                write!(f, "Storage read failed on {}: {}", p.display(), e)
            }
            StorageError::WriteFailed(p, e) => {
                write!(f, "Storage write failed on {}: {}", p.display(), e)
            }
            StorageError::SerializationFailed(e) => {
                write!(f, "Record serialization failed: {}", e)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::SerializationFailed(err)
    }
}

#[derive(Debug)]
pub enum ConsoleError {
    /// Input stream closed while waiting for a line.
    EndOfInput,
    IoError(std::io::Error),
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::EndOfInput => write!(f, "End of input"),
            ConsoleError::IoError(e) => write!(f, "Console IO error: {}", e),
        }
    }
}

impl std::error::Error for ConsoleError {}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        ConsoleError::IoError(err)
    }
}

/// A menu selection that is not one of the listed numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidOption(pub String);

impl fmt::Display for InvalidOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid menu option '{}'", self.0)
    }
}

impl std::error::Error for InvalidOption {}

#[derive(Debug)]
pub enum RecordError {
    StorageError(StorageError),
    ConsoleError(ConsoleError),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::StorageError(e) => write!(f, "Storage error: {}", e),
            RecordError::ConsoleError(e) => write!(f, "Console error: {}", e),
        }
    }
}

impl std::error::Error for RecordError {}

impl From<StorageError> for RecordError {
    fn from(err: StorageError) -> Self {
        RecordError::StorageError(err)
    }
}

impl From<ConsoleError> for RecordError {
    fn from(err: ConsoleError) -> Self {
        RecordError::ConsoleError(err)
    }
}

#[derive(Debug)]
pub enum ControllerError {
    ConfigurationError(ConfigError),
    StorageError(StorageError),
    ConsoleError(ConsoleError),
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerError::ConfigurationError(e) => write!(f, "Configuration error: {}", e),
            ControllerError::StorageError(e) => write!(f, "Storage error: {}", e),
            ControllerError::ConsoleError(e) => write!(f, "Console error: {}", e),
        }
    }
}

impl std::error::Error for ControllerError {}

impl From<ConfigError> for ControllerError {
    fn from(err: ConfigError) -> Self {
        ControllerError::ConfigurationError(err)
    }
}

impl From<StorageError> for ControllerError {
    fn from(err: StorageError) -> Self {
        ControllerError::StorageError(err)
    }
}

impl From<ConsoleError> for ControllerError {
    fn from(err: ConsoleError) -> Self {
        ControllerError::ConsoleError(err)
    }
}

impl From<RecordError> for ControllerError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::StorageError(e) => ControllerError::StorageError(e),
            RecordError::ConsoleError(e) => ControllerError::ConsoleError(e),
        }
    }
}
