use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum SnapshotError {
    Network(String),
    HttpStatus(u16, String),
    Pattern(String),
    MissingAssignment(&'static str),
    JsonParse(String),
    Config(String),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Network(msg) => write!(f, "Network error: {msg}"),
            SnapshotError::HttpStatus(status, resource) => {
                write!(f, "HTTP {status} fetching {resource}")
            }
            SnapshotError::Pattern(msg) => write!(f, "Extraction pattern error: {msg}"),
            SnapshotError::MissingAssignment(name) => {
                write!(f, "const {name} assignment not found in snapshot")
            }
            SnapshotError::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
            SnapshotError::Config(msg) => write!(f, "Config error: {msg}"),
        }
    }
}

impl Error for SnapshotError {}
