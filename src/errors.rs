use std::fmt;

/// Errors originating from the HTTP layer (routing, bad parameters) or
/// the spreadsheet export. Snapshot loading fails before the server
/// starts, so it never surfaces here.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    XlsxError(String),
    InternalError,
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::XlsxError(msg) => write!(f, "Spreadsheet Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
