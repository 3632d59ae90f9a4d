//! Common data types persisted by the storage subsystem.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Age as entered by the operator.
///
/// Never validated nor converted: older store files may hold a JSON number,
/// anything typed at the console is kept as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Age {
    Text(String),
    Number(Number),
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Age::Text(s) => write!(f, "{}", s),
            Age::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Age {
    fn from(value: &str) -> Self {
        Age::Text(value.to_string())
    }
}

impl From<String> for Age {
    fn from(value: String) -> Self {
        Age::Text(value)
    }
}

/// One personal record, stored as a single JSON object per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Matched case-insensitively by search, delete and modify
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "edad")]
    pub age: Age,
    pub email: String,
    /// Unknown keys found on disk, written back untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record {
    pub fn new<N, A, E>(name: N, age: A, email: E) -> Self
    where
        N: Into<String>,
        A: Into<Age>,
        E: Into<String>,
    {
        Self {
            name: name.into(),
            age: age.into(),
            email: email.into(),
            extra: Map::new(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Age: {}, Email: {}",
            self.name, self.age, self.email
        )
    }
}

/// A store line that could not be decoded into a `Record`.
#[derive(Debug, Clone, PartialEq)]
pub struct MalformedLine {
    /// 1-based line number in the store file
    pub line_number: usize,
    pub content: String,
    pub reason: String,
}

/// Result of reading the whole store file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub records: Vec<Record>,
    pub skipped: Vec<MalformedLine>,
}
